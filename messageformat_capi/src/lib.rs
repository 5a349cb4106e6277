#![allow(clippy::needless_lifetimes)] // Diplomat requires explicit lifetimes at times

pub mod datetime_formatter;
pub mod error;
pub mod options;
