//! Tokenizer for MessageFormat patterns.
//!
//! The lexer runs in two modes. Text mode collects literal message text,
//! honoring ICU quoting (`''` is an apostrophe, `'…'` protects structural
//! characters), and ends a run at `{`, `}`, end of input, or — when the
//! enclosing message sits directly inside a plural clause — `#`. Argument
//! mode, entered between braces, produces the word, number, and
//! punctuation tokens of the argument syntax. Mode switches on the brace
//! tokens themselves: an opening brace read in argument position starts a
//! clause message, and a closing brace read in text position returns to
//! the surrounding clause list.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::iter::Peekable;
use core::str::Chars;

use crate::{MessageFormatError, MessageFormatResult};

/// A single lexical token of a MessageFormat pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    /// A run of literal message text, possibly empty.
    Text(String),
    /// An identifier, e.g. an argument name or keyword.
    Word(String),
    /// A non-negative decimal integer, kept in source form.
    Number(String),
    LBrace, // {
    RBrace, // }
    Comma,  // ,
    Equal,  // =
    Pound,  // #
    Colon,  // :
    Eof,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{s:?}"),
            Self::Word(s) => f.write_str(s),
            Self::Number(s) => f.write_str(s),
            Self::LBrace => f.write_str("{"),
            Self::RBrace => f.write_str("}"),
            Self::Comma => f.write_str(","),
            Self::Equal => f.write_str("="),
            Self::Pound => f.write_str("#"),
            Self::Colon => f.write_str(":"),
            Self::Eof => f.write_str("<EOF>"),
        }
    }
}

pub(crate) struct Lexer<'s> {
    chars: Peekable<Chars<'s>>,
    /// Whether the next lex call reads argument tokens rather than text.
    arg: bool,
}

impl<'s> Lexer<'s> {
    pub(crate) fn new(input: &'s str) -> Self {
        Self {
            chars: input.chars().peekable(),
            arg: false,
        }
    }

    /// Produces the next batch of tokens. `pound_active` tells the text
    /// mode whether `#` is the plural substitution token or plain text;
    /// the parser derives it from its clause nesting.
    pub(crate) fn lex(&mut self, pound_active: bool) -> MessageFormatResult<Vec<Token>> {
        if self.arg {
            self.lex_arg()
        } else {
            self.lex_text(pound_active)
        }
    }

    fn bump(&mut self) -> Option<char> {
        self.chars.next()
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    fn lex_text(&mut self, pound_active: bool) -> MessageFormatResult<Vec<Token>> {
        let mut buf = String::new();
        loop {
            match self.bump() {
                None => {
                    return Ok([Token::Text(buf), Token::Eof].into());
                }
                Some('\'') => self.lex_quoted(&mut buf)?,
                Some('{') => {
                    self.arg = true;
                    return Ok([Token::Text(buf), Token::LBrace].into());
                }
                Some('}') => {
                    self.arg = true;
                    return Ok([Token::Text(buf), Token::RBrace].into());
                }
                Some('#') if pound_active => {
                    self.arg = false;
                    return Ok([Token::Text(buf), Token::Pound].into());
                }
                Some(ch) => buf.push(ch),
            }
        }
    }

    /// Consumes a quoted span whose opening apostrophe has been read.
    fn lex_quoted(&mut self, buf: &mut String) -> MessageFormatResult<()> {
        // An immediately repeated apostrophe is the escape for a literal
        // one and does not open a quoted span.
        if self.peek() == Some('\'') {
            self.bump();
            buf.push('\'');
            return Ok(());
        }
        loop {
            match self.bump() {
                None => {
                    return Err(
                        MessageFormatError::syntax().with_message("unterminated quoted string")
                    )
                }
                Some('\'') => {
                    if self.peek() == Some('\'') {
                        self.bump();
                        buf.push('\'');
                    } else {
                        return Ok(());
                    }
                }
                Some(ch) => buf.push(ch),
            }
        }
    }

    fn lex_arg(&mut self) -> MessageFormatResult<Vec<Token>> {
        loop {
            let Some(ch) = self.bump() else {
                return Ok([Token::Eof].into());
            };

            if ch.is_whitespace() {
                continue;
            }

            match ch {
                '{' => {
                    self.arg = false;
                    return Ok([Token::LBrace].into());
                }
                '}' => {
                    self.arg = false;
                    return Ok([Token::RBrace].into());
                }
                ',' => return Ok([Token::Comma].into()),
                '=' => return Ok([Token::Equal].into()),
                ':' => return Ok([Token::Colon].into()),
                '0'..='9' => return self.lex_number(ch),
                'a'..='z' | 'A'..='Z' | '_' => return self.lex_word(ch),
                _ => {
                    return Err(MessageFormatError::syntax()
                        .with_message(format!("unexpected character: {ch:?}")))
                }
            }
        }
    }

    fn lex_number(&mut self, first: char) -> MessageFormatResult<Vec<Token>> {
        let mut buf = String::new();
        buf.push(first);
        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                if buf == "0" {
                    return Err(MessageFormatError::syntax()
                        .with_message("number must not have a leading zero"));
                }
                buf.push(ch);
                self.bump();
            } else {
                break;
            }
        }
        Ok([Token::Number(buf)].into())
    }

    fn lex_word(&mut self, first: char) -> MessageFormatResult<Vec<Token>> {
        let mut buf = String::new();
        buf.push(first);
        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                buf.push(ch);
                self.bump();
            } else {
                break;
            }
        }
        Ok([Token::Word(buf)].into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    fn lex_all(input: &str, pound_active: bool) -> MessageFormatResult<Vec<Token>> {
        let mut lexer = Lexer::new(input);
        let mut tokens = Vec::new();
        loop {
            let batch = lexer.lex(pound_active)?;
            let done = batch.contains(&Token::Eof);
            tokens.extend(batch);
            if done {
                return Ok(tokens);
            }
        }
    }

    fn text(s: &str) -> Token {
        Token::Text(s.to_string())
    }

    fn word(s: &str) -> Token {
        Token::Word(s.to_string())
    }

    fn number(s: &str) -> Token {
        Token::Number(s.to_string())
    }

    #[test]
    fn lex_plain_text() {
        assert_eq!(lex_all("", false).unwrap(), vec![text(""), Token::Eof]);
        assert_eq!(lex_all("a", false).unwrap(), vec![text("a"), Token::Eof]);
        assert_eq!(
            lex_all("Hello {", false).unwrap(),
            vec![text("Hello "), Token::LBrace, Token::Eof]
        );
    }

    #[test]
    fn lex_quoting() {
        assert_eq!(lex_all("''", false).unwrap(), vec![text("'"), Token::Eof]);
        assert_eq!(lex_all("'a'", false).unwrap(), vec![text("a"), Token::Eof]);
        assert_eq!(lex_all("a'a'", false).unwrap(), vec![text("aa"), Token::Eof]);
        assert_eq!(lex_all("'a'a", false).unwrap(), vec![text("aa"), Token::Eof]);
        assert_eq!(
            lex_all("'{0}'", false).unwrap(),
            vec![text("{0}"), Token::Eof]
        );
        assert_eq!(
            lex_all("it''s", false).unwrap(),
            vec![text("it's"), Token::Eof]
        );
        assert_eq!(
            lex_all("'it''s'", false).unwrap(),
            vec![text("it's"), Token::Eof]
        );
    }

    #[test]
    fn lex_unterminated_quote() {
        let err = lex_all("'abc", false).unwrap_err();
        assert_eq!(err.message(), "unterminated quoted string");
    }

    #[test]
    fn lex_pound_modes() {
        assert_eq!(
            lex_all("a # b", true).unwrap(),
            vec![text("a "), Token::Pound, text(" b"), Token::Eof]
        );
        assert_eq!(
            lex_all("a # b", false).unwrap(),
            vec![text("a # b"), Token::Eof]
        );
    }

    #[test]
    fn lex_plural_argument() {
        let tokens = lex_all("{ arg, plural, offset:1 =0 {} =1 {} one{} other{} }", false).unwrap();
        assert_eq!(
            tokens,
            vec![
                text(""),
                Token::LBrace,
                word("arg"),
                Token::Comma,
                word("plural"),
                Token::Comma,
                word("offset"),
                Token::Colon,
                number("1"),
                Token::Equal,
                number("0"),
                Token::LBrace,
                text(""),
                Token::RBrace,
                Token::Equal,
                number("1"),
                Token::LBrace,
                text(""),
                Token::RBrace,
                word("one"),
                Token::LBrace,
                text(""),
                Token::RBrace,
                word("other"),
                Token::LBrace,
                text(""),
                Token::RBrace,
                Token::RBrace,
                text(""),
                Token::Eof,
            ]
        );
    }

    #[test]
    fn lex_number_rules() {
        let err = lex_all("{01", false).unwrap_err();
        assert_eq!(err.message(), "number must not have a leading zero");
        // A lone zero is fine; only a continued digit run is rejected.
        assert_eq!(
            lex_all("{0}", false).unwrap(),
            vec![text(""), Token::LBrace, number("0"), Token::RBrace, text(""), Token::Eof]
        );
    }

    #[test]
    fn lex_unexpected_character() {
        let err = lex_all("{%", false).unwrap_err();
        assert_eq!(err.message(), "unexpected character: '%'");
    }
}
