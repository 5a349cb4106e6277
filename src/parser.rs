//! Recursive-descent parser producing the MessageFormat node tree.
//!
//! A message is alternating literal text and arguments; complex arguments
//! (`select`, `plural`, `selectordinal`) carry clause sub-messages that
//! recurse into the same grammar. The node list deliberately keeps the
//! empty text segments between adjacent structural elements so that
//! formatting is a plain left-to-right walk.

use alloc::collections::VecDeque;
use alloc::format;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use crate::lexer::{Lexer, Token};
use crate::options::DateFormatStyle;
use crate::{MessageFormatError, MessageFormatResult};

/// A named argument like `{host}` or a positional one like `{0}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Argument {
    Name(String),
    Index(usize),
}

/// One branch of a `select` argument.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectClause {
    pub keyword: String,
    pub nodes: Vec<Node>,
}

/// Whether a plural argument selects with cardinal or ordinal rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluralKind {
    /// `plural`
    Cardinal,
    /// `selectordinal`
    Ordinal,
}

/// What a plural clause matches against: a CLDR category keyword such as
/// `one`, or an exact value introduced by `=`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PluralSelector {
    Keyword(String),
    Explicit(u64),
}

/// One branch of a `plural` or `selectordinal` argument.
#[derive(Debug, Clone, PartialEq)]
pub struct PluralClause {
    pub selector: PluralSelector,
    pub nodes: Vec<Node>,
}

/// A `plural` or `selectordinal` argument with its clauses.
#[derive(Debug, Clone, PartialEq)]
pub struct PluralArg {
    pub arg: Argument,
    pub kind: PluralKind,
    pub offset: u64,
    pub clauses: Vec<PluralClause>,
}

/// A single element of a parsed message.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A literal text segment, possibly empty.
    Text(String),
    /// `{arg}`
    Arg(Argument),
    /// `{arg, date[, style]}`
    Date { arg: Argument, style: DateFormatStyle },
    /// `{arg, time[, style]}`
    Time { arg: Argument, style: DateFormatStyle },
    /// `{arg, datetime[, style]}`; the style applies to both halves.
    DateTime { arg: Argument, style: DateFormatStyle },
    /// `{arg, select, clauses}`
    Select {
        arg: Argument,
        clauses: Vec<SelectClause>,
    },
    /// `{arg, plural, …}` or `{arg, selectordinal, …}`
    Plural(PluralArg),
    /// `#`, the current plural value minus the clause offset.
    Pound,
}

/// Parses a MessageFormat pattern into its node list.
pub fn parse(pattern: &str) -> MessageFormatResult<Vec<Node>> {
    Parser::new(pattern).parse_message(&Token::Eof, false)
}

struct Parser<'s> {
    lexer: Lexer<'s>,
    tokens: VecDeque<Token>,
    /// One entry per open message; the top says whether `#` is live there.
    pound_stack: Vec<bool>,
}

impl<'s> Parser<'s> {
    fn new(pattern: &'s str) -> Self {
        Self {
            lexer: Lexer::new(pattern),
            tokens: VecDeque::new(),
            pound_stack: Vec::new(),
        }
    }

    fn next(&mut self) -> MessageFormatResult<Token> {
        if self.tokens.is_empty() {
            let pound = self.pound_stack.last().copied().unwrap_or(false);
            self.tokens.extend(self.lexer.lex(pound)?);
        }
        self.tokens
            .pop_front()
            .ok_or_else(|| MessageFormatError::syntax().with_message("unexpected end of input"))
    }

    fn put_back(&mut self, token: Token) {
        self.tokens.push_front(token);
    }

    fn unexpected(token: &Token) -> MessageFormatError {
        MessageFormatError::syntax().with_message(format!("unexpected token: {token}"))
    }

    fn parse_message(&mut self, end: &Token, pound: bool) -> MessageFormatResult<Vec<Node>> {
        self.pound_stack.push(pound);
        let nodes = self.parse_message_inner(end);
        self.pound_stack.pop();
        nodes
    }

    fn parse_message_inner(&mut self, end: &Token) -> MessageFormatResult<Vec<Node>> {
        let mut nodes = self.parse_message_text()?;
        loop {
            let token = self.next()?;
            if token == *end {
                return Ok(nodes);
            }
            if token != Token::LBrace {
                return Err(Self::unexpected(&token));
            }
            nodes.push(self.parse_arg()?);
            nodes.extend(self.parse_message_text()?);
        }
    }

    /// Text runs, with `#` substitutions interleaved where active.
    fn parse_message_text(&mut self) -> MessageFormatResult<Vec<Node>> {
        let mut nodes = vec![self.parse_text_node()?];
        loop {
            let token = self.next()?;
            if token != Token::Pound {
                self.put_back(token);
                return Ok(nodes);
            }
            nodes.push(Node::Pound);
            nodes.push(self.parse_text_node()?);
        }
    }

    fn parse_text_node(&mut self) -> MessageFormatResult<Node> {
        match self.next()? {
            Token::Text(text) => Ok(Node::Text(text)),
            other => Err(Self::unexpected(&other)),
        }
    }

    fn parse_word(&mut self) -> MessageFormatResult<String> {
        match self.next()? {
            Token::Word(word) => Ok(word),
            other => Err(Self::unexpected(&other)),
        }
    }

    fn parse_number(&mut self) -> MessageFormatResult<u64> {
        match self.next()? {
            Token::Number(digits) => digits.parse::<u64>().map_err(|_| {
                MessageFormatError::syntax()
                    .with_message(format!("number out of range: {digits}"))
            }),
            other => Err(Self::unexpected(&other)),
        }
    }

    fn expect(&mut self, expected: Token) -> MessageFormatResult<()> {
        let token = self.next()?;
        if token == expected {
            Ok(())
        } else {
            Err(Self::unexpected(&token))
        }
    }

    fn parse_arg(&mut self) -> MessageFormatResult<Node> {
        let arg = match self.next()? {
            Token::Word(name) => Argument::Name(name),
            Token::Number(digits) => {
                let index = digits.parse::<usize>().map_err(|_| {
                    MessageFormatError::syntax()
                        .with_message(format!("argument index out of range: {digits}"))
                })?;
                Argument::Index(index)
            }
            other => return Err(Self::unexpected(&other)),
        };

        match self.next()? {
            Token::RBrace => return Ok(Node::Arg(arg)),
            Token::Comma => {}
            other => return Err(Self::unexpected(&other)),
        }

        let arg_type = self.parse_word()?;
        match arg_type.as_str() {
            "plural" => {
                self.expect(Token::Comma)?;
                let (offset, clauses) = self.parse_plural_style()?;
                Ok(Node::Plural(PluralArg {
                    arg,
                    kind: PluralKind::Cardinal,
                    offset,
                    clauses,
                }))
            }
            "selectordinal" => {
                self.expect(Token::Comma)?;
                let (offset, clauses) = self.parse_plural_style()?;
                Ok(Node::Plural(PluralArg {
                    arg,
                    kind: PluralKind::Ordinal,
                    offset,
                    clauses,
                }))
            }
            "select" => {
                self.expect(Token::Comma)?;
                let clauses = self.parse_select_style()?;
                Ok(Node::Select { arg, clauses })
            }
            "date" => {
                let style = self.parse_datetime_style()?;
                Ok(Node::Date { arg, style })
            }
            "time" => {
                let style = self.parse_datetime_style()?;
                Ok(Node::Time { arg, style })
            }
            "datetime" => {
                let style = self.parse_datetime_style()?;
                Ok(Node::DateTime { arg, style })
            }
            _ => Err(MessageFormatError::syntax()
                .with_message(format!("unknown argument type: {arg_type}"))),
        }
    }

    /// The trailing `[, style] }` of a date, time, or datetime argument.
    /// An omitted style means medium.
    fn parse_datetime_style(&mut self) -> MessageFormatResult<DateFormatStyle> {
        match self.next()? {
            Token::RBrace => Ok(DateFormatStyle::default()),
            Token::Comma => {
                let word = self.parse_word()?;
                let style = word.parse::<DateFormatStyle>().map_err(|_| {
                    MessageFormatError::syntax()
                        .with_message(format!("unknown datetime style: {word}"))
                })?;
                self.expect(Token::RBrace)?;
                Ok(style)
            }
            other => Err(Self::unexpected(&other)),
        }
    }

    fn parse_plural_style(&mut self) -> MessageFormatResult<(u64, Vec<PluralClause>)> {
        let mut offset = 0;
        let mut clauses: Vec<PluralClause> = Vec::new();
        loop {
            let mut token = self.next()?;

            // `offset:` may only precede the first clause.
            if clauses.is_empty() && matches!(&token, Token::Word(w) if w == "offset") {
                self.expect(Token::Colon)?;
                offset = self.parse_number()?;
                token = self.next()?;
            }

            let selector = match token {
                Token::RBrace => {
                    if clauses.is_empty() {
                        return Err(
                            MessageFormatError::syntax().with_message("no plural clauses")
                        );
                    }
                    return Ok((offset, clauses));
                }
                Token::Equal => PluralSelector::Explicit(self.parse_number()?),
                Token::Word(keyword) => PluralSelector::Keyword(keyword),
                other => return Err(Self::unexpected(&other)),
            };

            self.expect(Token::LBrace)?;
            let nodes = self.parse_message(&Token::RBrace, true)?;
            clauses.push(PluralClause { selector, nodes });
        }
    }

    fn parse_select_style(&mut self) -> MessageFormatResult<Vec<SelectClause>> {
        let mut clauses: Vec<SelectClause> = Vec::new();
        loop {
            let keyword = match self.next()? {
                Token::RBrace => {
                    if clauses.is_empty() {
                        return Err(
                            MessageFormatError::syntax().with_message("no select clauses")
                        );
                    }
                    return Ok(clauses);
                }
                Token::Word(keyword) => keyword,
                other => return Err(Self::unexpected(&other)),
            };

            self.expect(Token::LBrace)?;
            // `#` from an enclosing plural is not visible through select.
            let nodes = self.parse_message(&Token::RBrace, false)?;
            clauses.push(SelectClause { keyword, nodes });
        }
    }
}
