//! The error type for MessageFormat operations.

use alloc::borrow::Cow;
use core::fmt;

/// `ErrorKind` classifies a [`MessageFormatError`] into the failure
/// taxonomy surfaced across the FFI boundary.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A generic engine failure.
    #[default]
    Generic,
    /// A pattern syntax failure.
    Syntax,
    /// An out-of-range or otherwise invalid parameter.
    Range,
    /// An argument value of an unsupported type.
    Type,
    /// An output buffer too small for the formatted result.
    Overflow,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generic => "Error",
            Self::Syntax => "SyntaxError",
            Self::Range => "RangeError",
            Self::Type => "TypeError",
            Self::Overflow => "OverflowError",
        }
        .fmt(f)
    }
}

/// The error returned by fallible MessageFormat operations.
///
/// Errors carry a [`ErrorKind`] and a diagnostic message. The kind is the
/// stable part of the contract; messages are informational only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageFormatError {
    kind: ErrorKind,
    msg: Cow<'static, str>,
}

impl MessageFormatError {
    /// Create a new error with the provided [`ErrorKind`].
    const fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            msg: Cow::Borrowed(""),
        }
    }

    /// Create a generic error.
    pub const fn general() -> Self {
        Self::new(ErrorKind::Generic)
    }

    /// Create a syntax error.
    pub const fn syntax() -> Self {
        Self::new(ErrorKind::Syntax)
    }

    /// Create a range error.
    pub const fn range() -> Self {
        Self::new(ErrorKind::Range)
    }

    /// Create a type error.
    pub const fn r#type() -> Self {
        Self::new(ErrorKind::Type)
    }

    /// Create a buffer overflow error.
    pub const fn overflow() -> Self {
        Self::new(ErrorKind::Overflow)
    }

    /// Attach a diagnostic message to this error.
    pub fn with_message<S>(mut self, msg: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        self.msg = msg.into();
        self
    }

    /// Returns this error's [`ErrorKind`].
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the diagnostic message, which may be empty.
    pub fn message(&self) -> &str {
        &self.msg
    }
}

impl fmt::Display for MessageFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)?;
        if !self.msg.is_empty() {
            f.write_str(": ")?;
            f.write_str(&self.msg)?;
        }
        Ok(())
    }
}

impl core::error::Error for MessageFormatError {}
