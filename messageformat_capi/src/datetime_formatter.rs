#[diplomat::bridge]
#[diplomat::abi_rename = "messageformat_{0}"]
#[diplomat::attr(auto, namespace = "messageformat")]
pub mod ffi {
    use crate::error::ffi::MessageFormatError;
    use crate::options::ffi::DateFormatStyle;
    use core::str;
    use diplomat_runtime::{DiplomatStr, DiplomatWrite};
    use icu_locale::Locale;
    use std::fmt::Write;

    #[diplomat::opaque]
    pub struct DateTimeFormatter(pub(crate) messageformat::DateTimeFormatter);

    impl DateTimeFormatter {
        /// Builds a formatter from a BCP-47 locale string, a tz database
        /// zone name (empty means UTC), and two styles of which at least
        /// one must not be `None`.
        pub fn create(
            locale: &DiplomatStr,
            time_zone: &DiplomatStr,
            date_style: DateFormatStyle,
            time_style: DateFormatStyle,
        ) -> Result<Box<Self>, MessageFormatError> {
            let Ok(locale) = str::from_utf8(locale) else {
                return Err(messageformat::MessageFormatError::range().into());
            };
            let Ok(locale) = locale.parse::<Locale>() else {
                return Err(messageformat::MessageFormatError::range().into());
            };
            let Ok(time_zone) = str::from_utf8(time_zone) else {
                return Err(messageformat::MessageFormatError::range().into());
            };
            messageformat::DateTimeFormatter::try_new(
                &locale,
                time_zone,
                date_style.into(),
                time_style.into(),
            )
            .map(|x| Box::new(DateTimeFormatter(x)))
            .map_err(Into::into)
        }

        /// Formats an instant given in milliseconds since the Unix epoch.
        pub fn format(
            &self,
            epoch_ms: f64,
            write: &mut DiplomatWrite,
        ) -> Result<(), MessageFormatError> {
            let s = self.0.format(epoch_ms)?;

            // This can only fail in cases where the DiplomatWrite is capped, we
            // don't care about that.
            let _ = write.write_str(&s);

            Ok(())
        }

        /// Builds a formatter, formats one instant, and releases it all
        /// before returning.
        pub fn format_date_time(
            locale: &DiplomatStr,
            time_zone: &DiplomatStr,
            date_style: DateFormatStyle,
            time_style: DateFormatStyle,
            epoch_ms: f64,
            write: &mut DiplomatWrite,
        ) -> Result<(), MessageFormatError> {
            Self::create(locale, time_zone, date_style, time_style)?.format(epoch_ms, write)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ffi::ErrorKind;
    use crate::options::ffi::DateFormatStyle;
    use super::ffi::DateTimeFormatter;

    #[test]
    fn create_accepts_valid_parameters() {
        let result = DateTimeFormatter::create(
            b"en",
            b"America/New_York",
            DateFormatStyle::Medium,
            DateFormatStyle::Short,
        );
        assert!(result.is_ok());
    }

    fn expect_range_error(
        result: Result<Box<DateTimeFormatter>, crate::error::ffi::MessageFormatError>,
    ) {
        let Err(err) = result else {
            panic!("expected a range error");
        };
        assert!(matches!(err.kind, ErrorKind::Range));
    }

    #[test]
    fn create_rejects_malformed_locales() {
        expect_range_error(DateTimeFormatter::create(
            b"not a locale!!",
            b"UTC",
            DateFormatStyle::Medium,
            DateFormatStyle::None,
        ));
    }

    #[test]
    fn create_rejects_invalid_utf8() {
        expect_range_error(DateTimeFormatter::create(
            b"\xff\xfe",
            b"UTC",
            DateFormatStyle::Medium,
            DateFormatStyle::None,
        ));
        expect_range_error(DateTimeFormatter::create(
            b"en",
            b"\xff\xfe",
            DateFormatStyle::Medium,
            DateFormatStyle::None,
        ));
    }

    #[test]
    fn create_rejects_unknown_zones() {
        expect_range_error(DateTimeFormatter::create(
            b"en",
            b"Mars/Olympus_Mons",
            DateFormatStyle::Medium,
            DateFormatStyle::None,
        ));
    }
}
