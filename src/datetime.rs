//! Locale-aware date and time formatting on top of the ICU4X engine.
//!
//! A [`DateTimeFormatter`] pairs a resolved time zone with an ICU4X
//! formatter built for one combination of date and time styles. The
//! instant to format arrives as a count of milliseconds since the Unix
//! epoch, the interchange form used at the FFI boundary; it is projected
//! into the requested zone with the tz database and handed to ICU4X with
//! the zone's offset and daylight variant attached, so that the styles
//! which name the zone can spell it out.

use alloc::format;
use alloc::string::{String, ToString};

use chrono::{Datelike, Offset as _, TimeZone as _, Timelike, Utc};
use chrono_tz::{OffsetComponents, Tz};
use icu_calendar::{Date, Iso};
use icu_datetime::fieldsets::builder::{DateFields, FieldSetBuilder, ZoneStyle};
use icu_datetime::fieldsets::enums::CompositeFieldSet;
use icu_datetime::options::{Length, TimePrecision};
use icu_datetime::DateTimeFormatter as IcuDateTimeFormatter;
use icu_locale::Locale;
use icu_time::zone::iana::IanaParser;
use icu_time::zone::models::Full;
use icu_time::zone::{TimeZoneVariant, UtcOffset};
use icu_time::{DateTime, Time, TimeZoneInfo, ZonedDateTime};

use crate::options::DateFormatStyle;
use crate::{MessageFormatError, MessageFormatResult};

const NANOS_PER_MILLI: u32 = 1_000_000;

/// Formats epoch instants with one locale, time zone, and style pair.
///
/// ```
/// use messageformat::{DateFormatStyle, DateTimeFormatter};
///
/// let formatter = DateTimeFormatter::try_new(
///     &"en".parse().unwrap(),
///     "UTC",
///     DateFormatStyle::Long,
///     DateFormatStyle::None,
/// )
/// .unwrap();
/// assert_eq!(
///     formatter.format(1_257_894_000_000.0).unwrap(),
///     "November 10, 2009"
/// );
/// ```
pub struct DateTimeFormatter {
    inner: IcuDateTimeFormatter<CompositeFieldSet>,
    time_zone: Tz,
}

impl DateTimeFormatter {
    /// Builds a formatter for the locale, tz database zone name, and
    /// styles. An empty zone name means UTC. At least one of the two
    /// styles must not be [`DateFormatStyle::None`].
    pub fn try_new(
        locale: &Locale,
        time_zone: &str,
        date_style: DateFormatStyle,
        time_style: DateFormatStyle,
    ) -> MessageFormatResult<Self> {
        if !date_style.is_some() && !time_style.is_some() {
            return Err(
                MessageFormatError::range().with_message("a date or time style is required")
            );
        }
        let time_zone = resolve_time_zone(time_zone)?;
        let fieldset = build_fieldset(date_style, time_style)?;
        let inner = IcuDateTimeFormatter::try_new(locale.into(), fieldset).map_err(|e| {
            MessageFormatError::general()
                .with_message(format!("datetime formatter unavailable: {e}"))
        })?;
        Ok(Self { inner, time_zone })
    }

    /// Formats the instant, given in milliseconds since the Unix epoch.
    /// Fractional milliseconds are truncated toward negative infinity.
    pub fn format(&self, epoch_ms: f64) -> MessageFormatResult<String> {
        let zdt = self.zoned_date_time(epoch_ms)?;
        Ok(self.inner.format(&zdt).to_string())
    }

    /// Formats the instant into a caller-owned buffer and returns the
    /// number of bytes written. A result longer than the buffer leaves
    /// the buffer untouched and reports an overflow error; a result of
    /// exactly the buffer's length succeeds.
    pub fn format_into(&self, epoch_ms: f64, buf: &mut [u8]) -> MessageFormatResult<usize> {
        let out = self.format(epoch_ms)?;
        let bytes = out.as_bytes();
        if bytes.len() > buf.len() {
            return Err(MessageFormatError::overflow().with_message(format!(
                "formatted result needs {} bytes, buffer holds {}",
                bytes.len(),
                buf.len()
            )));
        }
        buf[..bytes.len()].copy_from_slice(bytes);
        Ok(bytes.len())
    }

    /// Projects the epoch instant into the formatter's zone, carrying the
    /// zone id, offset, and daylight variant that zone styles format.
    fn zoned_date_time(
        &self,
        epoch_ms: f64,
    ) -> MessageFormatResult<ZonedDateTime<Iso, TimeZoneInfo<Full>>> {
        if !epoch_ms.is_finite() {
            return Err(MessageFormatError::range().with_message("instant is not finite"));
        }
        let millis = epoch_ms.floor() as i64;
        let seconds = millis.div_euclid(1000);
        let nanos = millis.rem_euclid(1000) as u32 * NANOS_PER_MILLI;
        let instant = Utc
            .timestamp_opt(seconds, nanos)
            .single()
            .ok_or_else(|| MessageFormatError::range().with_message("instant out of range"))?;
        let local = instant.with_timezone(&self.time_zone);

        let date = Date::try_new_iso(local.year(), local.month() as u8, local.day() as u8)
            .map_err(|e| {
                MessageFormatError::range().with_message(format!("instant out of range: {e}"))
            })?;
        let time = Time::try_new(
            local.hour() as u8,
            local.minute() as u8,
            local.second() as u8,
            local.nanosecond(),
        )
        .map_err(|e| {
            MessageFormatError::range().with_message(format!("instant out of range: {e}"))
        })?;

        let offset = UtcOffset::try_from_seconds(local.offset().fix().local_minus_utc()).map_err(
            |_| MessageFormatError::range().with_message("time zone offset out of range"),
        )?;
        let variant = if local.offset().dst_offset().is_zero() {
            TimeZoneVariant::Standard
        } else {
            TimeZoneVariant::Daylight
        };
        let zone = IanaParser::new()
            .parse(self.time_zone.name())
            .with_offset(Some(offset))
            .at_date_time_iso(DateTime { date, time })
            .with_variant(variant);

        Ok(ZonedDateTime { date, time, zone })
    }
}

/// Formats one instant without keeping the formatter around.
pub fn format_date_time(
    locale: &Locale,
    time_zone: &str,
    date_style: DateFormatStyle,
    time_style: DateFormatStyle,
    epoch_ms: f64,
) -> MessageFormatResult<String> {
    DateTimeFormatter::try_new(locale, time_zone, date_style, time_style)?.format(epoch_ms)
}

/// Looks the zone name up in the tz database. The name "Local" is what
/// a system-dependent zone renders as; it has no tz database entry and
/// is rejected rather than silently treated as UTC.
fn resolve_time_zone(name: &str) -> MessageFormatResult<Tz> {
    if name == "Local" {
        return Err(
            MessageFormatError::range().with_message("the Local time zone name is not supported")
        );
    }
    if name.is_empty() {
        #[cfg(feature = "log")]
        log::debug!("empty time zone name, defaulting to UTC");
        return Ok(Tz::UTC);
    }
    name.parse::<Tz>().map_err(|_| {
        MessageFormatError::range().with_message(format!("unknown time zone: {name}"))
    })
}

/// Maps the two styles onto an ICU4X field set.
///
/// Short, medium, and long dates are year-month-day at the matching
/// length; a full date adds the weekday. A short time stops at minutes;
/// the other time styles carry seconds, and long and full name the zone.
/// When both halves are present the date style picks the connecting
/// pattern, which is how the classic style pairs read.
fn build_fieldset(
    date_style: DateFormatStyle,
    time_style: DateFormatStyle,
) -> MessageFormatResult<CompositeFieldSet> {
    let mut builder = FieldSetBuilder::new();

    match date_style {
        DateFormatStyle::None => {}
        DateFormatStyle::Short => {
            builder.date_fields = Some(DateFields::YMD);
            builder.length = Some(Length::Short);
        }
        DateFormatStyle::Medium => {
            builder.date_fields = Some(DateFields::YMD);
            builder.length = Some(Length::Medium);
        }
        DateFormatStyle::Long => {
            builder.date_fields = Some(DateFields::YMD);
            builder.length = Some(Length::Long);
        }
        DateFormatStyle::Full => {
            builder.date_fields = Some(DateFields::YMDE);
            builder.length = Some(Length::Long);
        }
    }

    match time_style {
        DateFormatStyle::None => {}
        DateFormatStyle::Short => {
            builder.time_precision = Some(TimePrecision::Minute);
            builder.length.get_or_insert(Length::Short);
        }
        DateFormatStyle::Medium => {
            builder.time_precision = Some(TimePrecision::Second);
            builder.length.get_or_insert(Length::Medium);
        }
        DateFormatStyle::Long => {
            builder.time_precision = Some(TimePrecision::Second);
            builder.zone_style = Some(ZoneStyle::SpecificShort);
            builder.length.get_or_insert(Length::Long);
        }
        DateFormatStyle::Full => {
            builder.time_precision = Some(TimePrecision::Second);
            builder.zone_style = Some(ZoneStyle::SpecificLong);
            builder.length.get_or_insert(Length::Long);
        }
    }

    builder.build_composite().map_err(|e| {
        MessageFormatError::range().with_message(format!("invalid style combination: {e}"))
    })
}
