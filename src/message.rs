//! Formatting parsed messages with runtime arguments.

use alloc::format;
use alloc::string::{String, ToString};

use icu_locale::Locale;

use crate::args::{Args, Value};
use crate::datetime;
use crate::options::DateFormatStyle;
use crate::parser::{parse, Argument, Node, PluralArg, PluralClause, PluralSelector, SelectClause};
use crate::plurals;
use crate::{MessageFormatError, MessageFormatResult};

/// Formats MessageFormat patterns for one locale.
///
/// Arguments are supplied per call, either by name or by position.
/// Missing arguments do not fail the call: a plain or date argument
/// renders as nothing, a `select` falls back to its `other` clause, and
/// a `plural` selects as if the value were zero.
///
/// ```
/// use messageformat::{Args, MessageFormatter, Value};
///
/// let formatter = MessageFormatter::new("en".parse().unwrap());
/// let mut args = Args::default();
/// args.insert("name".into(), Value::from("John"));
/// assert_eq!(
///     formatter.format_named("Hello {name}!", &args).unwrap(),
///     "Hello John!"
/// );
/// ```
pub struct MessageFormatter {
    locale: Locale,
}

impl MessageFormatter {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Parses `pattern` and formats it with named arguments.
    pub fn format_named(&self, pattern: &str, args: &Args) -> MessageFormatResult<String> {
        let nodes = parse(pattern)?;
        let mut formatter = Formatter {
            locale: &self.locale,
            args,
            out: String::new(),
        };
        formatter.format_nodes(&nodes, None)?;
        Ok(formatter.out)
    }

    /// Formats with positional arguments, bound to `{0}`, `{1}`, and so on.
    pub fn format_positional(
        &self,
        pattern: &str,
        args: &[Value],
    ) -> MessageFormatResult<String> {
        let named: Args = args
            .iter()
            .enumerate()
            .map(|(index, value)| (index.to_string(), value.clone()))
            .collect();
        self.format_named(pattern, &named)
    }
}

/// The value `#` expands to inside the current plural clause.
struct OffsetArgument {
    name: String,
    value: Value,
}

struct Formatter<'a> {
    locale: &'a Locale,
    args: &'a Args,
    out: String,
}

impl Formatter<'_> {
    fn format_nodes(
        &mut self,
        nodes: &[Node],
        pound: Option<&OffsetArgument>,
    ) -> MessageFormatResult<()> {
        for node in nodes {
            match node {
                Node::Text(text) => self.out.push_str(text),
                Node::Arg(arg) => self.format_plain_arg(arg),
                Node::Date { arg, style } => {
                    self.format_datetime_arg(arg, *style, DateFormatStyle::None)?
                }
                Node::Time { arg, style } => {
                    self.format_datetime_arg(arg, DateFormatStyle::None, *style)?
                }
                Node::DateTime { arg, style } => self.format_datetime_arg(arg, *style, *style)?,
                Node::Select { arg, clauses } => self.format_select(arg, clauses)?,
                Node::Plural(plural) => self.format_plural(plural)?,
                Node::Pound => self.format_pound(pound)?,
            }
        }
        Ok(())
    }

    /// The argument's name as it keys into the supplied arguments, and
    /// its value if one was supplied.
    fn resolve(&self, arg: &Argument) -> (String, Option<&Value>) {
        let name = match arg {
            Argument::Name(name) => name.clone(),
            Argument::Index(index) => index.to_string(),
        };
        let value = self.args.get(&name);
        #[cfg(feature = "log")]
        if value.is_none() {
            log::debug!("missing argument: {name}");
        }
        (name, value)
    }

    fn numeric_error(name: &str) -> MessageFormatError {
        MessageFormatError::r#type()
            .with_message(format!("expected a numeric value: {name}"))
    }

    fn format_plain_arg(&mut self, arg: &Argument) {
        let (_, value) = self.resolve(arg);
        if let Some(value) = value {
            self.out.push_str(&value.render());
        }
    }

    /// Date and time arguments are epoch-millisecond instants, rendered
    /// at UTC in the formatter's locale.
    fn format_datetime_arg(
        &mut self,
        arg: &Argument,
        date_style: DateFormatStyle,
        time_style: DateFormatStyle,
    ) -> MessageFormatResult<()> {
        let (name, value) = self.resolve(arg);
        let Some(value) = value else {
            return Ok(());
        };
        let epoch_ms = match value {
            Value::Float(ms) => *ms,
            Value::Int(ms) => *ms as f64,
            Value::Uint(ms) => *ms as f64,
            _ => {
                return Err(MessageFormatError::r#type().with_message(format!(
                    "expected an epoch millisecond instant: {name}"
                )))
            }
        };
        let formatted =
            datetime::format_date_time(self.locale, "UTC", date_style, time_style, epoch_ms)?;
        self.out.push_str(&formatted);
        Ok(())
    }

    fn format_select(
        &mut self,
        arg: &Argument,
        clauses: &[SelectClause],
    ) -> MessageFormatResult<()> {
        let (name, value) = self.resolve(arg);
        let keyword = value.map(Value::render);

        let matched = keyword
            .as_ref()
            .and_then(|keyword| clauses.iter().find(|clause| &clause.keyword == keyword));
        let clause = match matched {
            Some(clause) => clause,
            None => clauses
                .iter()
                .find(|clause| clause.keyword == "other")
                .ok_or_else(|| {
                    MessageFormatError::general()
                        .with_message(format!("missing select other clause: {name}"))
                })?,
        };

        // `#` from an enclosing plural does not reach through select.
        self.format_nodes(&clause.nodes, None)
    }

    fn format_plural(&mut self, plural: &PluralArg) -> MessageFormatResult<()> {
        let (name, value) = self.resolve(&plural.arg);
        // A missing argument selects like zero.
        let value = value.cloned().unwrap_or(Value::Int(0));

        // Offsetting with zero is the identity, so the value keeps its
        // exact digits for plural selection.
        let offset_value = if plural.offset == 0 {
            value.clone()
        } else {
            value
                .minus_offset(plural.offset)
                .ok_or_else(|| Self::numeric_error(&name))?
        };
        let pound = OffsetArgument {
            name: name.clone(),
            value: offset_value,
        };

        // Explicit `=n` clauses match the original value, before offset.
        let mut other: Option<&PluralClause> = None;
        for clause in &plural.clauses {
            match &clause.selector {
                PluralSelector::Keyword(keyword) => {
                    if keyword == "other" {
                        other = Some(clause);
                    }
                }
                PluralSelector::Explicit(explicit) => {
                    let matched = value
                        .matches_explicit(*explicit)
                        .ok_or_else(|| Self::numeric_error(&name))?;
                    if matched {
                        return self.format_nodes(&clause.nodes, Some(&pound));
                    }
                }
            }
        }

        let operands =
            plurals::operands(&pound.value).ok_or_else(|| Self::numeric_error(&name))?;
        let category = plurals::select_category(self.locale, plural.kind, operands)?;
        let keyword = plurals::category_keyword(category);

        let selected = plural.clauses.iter().find(
            |clause| matches!(&clause.selector, PluralSelector::Keyword(k) if k == keyword),
        );
        let clause = match selected {
            Some(clause) => clause,
            None => other.ok_or_else(|| {
                MessageFormatError::general()
                    .with_message(format!("missing plural other clause: {name}"))
            })?,
        };
        self.format_nodes(&clause.nodes, Some(&pound))
    }

    fn format_pound(&mut self, pound: Option<&OffsetArgument>) -> MessageFormatResult<()> {
        let pound = pound.ok_or_else(|| {
            MessageFormatError::general().with_message("pound substitution outside a plural clause")
        })?;
        self.out.push_str(&pound.value.render());
        Ok(())
    }
}
