//! Style options for the date/time formatting bridge.
//!
//! The options match the verbosity levels of ICU's `UDateFormatStyle`:
//! a date style and a time style are selected independently, and either
//! side may be [`DateFormatStyle::None`] to omit that portion entirely.

use core::fmt;
use core::str::FromStr;

/// Formatting verbosity for the date or time portion of an output.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DateFormatStyle {
    /// Omit this portion of the output.
    None,
    /// The most compact form, e.g. `11/10/09`.
    Short,
    /// The typical form, e.g. `Nov 10, 2009`.
    #[default]
    Medium,
    /// A spelled-out form, e.g. `November 10, 2009`.
    Long,
    /// The fullest form, including the weekday or timezone name.
    Full,
}

/// A parsing error for `DateFormatStyle`
#[derive(Debug, Clone, Copy)]
pub struct ParseDateFormatStyleError;

impl fmt::Display for ParseDateFormatStyleError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("provided string was not a valid style")
    }
}

impl FromStr for DateFormatStyle {
    type Err = ParseDateFormatStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "short" => Ok(Self::Short),
            "medium" => Ok(Self::Medium),
            "long" => Ok(Self::Long),
            "full" => Ok(Self::Full),
            _ => Err(ParseDateFormatStyleError),
        }
    }
}

impl fmt::Display for DateFormatStyle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::None => "none",
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Long => "long",
            Self::Full => "full",
        }
        .fmt(f)
    }
}

impl DateFormatStyle {
    /// Returns `true` for every style other than [`DateFormatStyle::None`].
    pub fn is_some(self) -> bool {
        !matches!(self, Self::None)
    }
}
