//! The `messageformat` crate is an implementation of ICU MessageFormat
//! message formatting in Rust.
//!
//! ```rust
//! use messageformat::{Args, MessageFormatter, Value};
//!
//! let formatter = MessageFormatter::new("en".parse().unwrap());
//!
//! let mut args = Args::default();
//! args.insert("GENDER".into(), Value::from("female"));
//! args.insert("COUNT".into(), Value::from(3_i64));
//!
//! let message = formatter
//!     .format_named(
//!         "{GENDER, select, female {She has} male {He has} other {They have}} \
//!          {COUNT, plural, one {# message} other {# messages}}",
//!         &args,
//!     )
//!     .unwrap();
//! assert_eq!(message, "She has 3 messages");
//! ```
//!
//! Patterns mix literal text with `{…}` arguments: plain substitutions,
//! `select` branches, `plural` and `selectordinal` branches chosen by
//! CLDR plural rules, and `date`/`time`/`datetime` arguments rendered
//! from epoch-millisecond instants. Formatting is locale-aware
//! throughout, backed by [ICU4X][icu4x] and its compiled CLDR data; the
//! standalone [`DateTimeFormatter`] additionally resolves tz database
//! zone names for rendering instants in a requested time zone.
//!
//! The MessageFormat pattern syntax is specified by [ICU][icu-mf].
//!
//! [icu4x]: https://github.com/unicode-org/icu4x
//! [icu-mf]: https://unicode-org.github.io/icu/userguide/format_parse/messages/
#![no_std]
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(
    clippy::module_name_repetitions,
    clippy::redundant_pub_crate,
    clippy::too_many_lines,
    clippy::missing_errors_doc,

    // Epoch and calendar field conversions trip these.
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    clippy::cast_possible_wrap,
)]

extern crate alloc;
extern crate core;

#[cfg(feature = "std")]
extern crate std;

pub mod args;
pub mod datetime;
pub mod error;
pub mod message;
pub mod options;
pub mod parser;

mod lexer;
mod plurals;

#[doc(inline)]
pub use error::MessageFormatError;

/// The `messageformat` result type
pub type MessageFormatResult<T> = Result<T, MessageFormatError>;

pub use crate::{
    args::{Args, Value},
    datetime::{format_date_time, DateTimeFormatter},
    message::MessageFormatter,
    options::DateFormatStyle,
};
