//! Plural category selection for `plural` and `selectordinal` arguments.

use alloc::format;

use fixed_decimal::{Decimal, FloatPrecision};
use icu_locale::Locale;
use icu_plurals::{
    PluralCategory, PluralOperands, PluralRuleType, PluralRules, PluralRulesOptions,
    PluralRulesPreferences,
};

use crate::args::Value;
use crate::parser::PluralKind;
use crate::{MessageFormatError, MessageFormatResult};

/// The keyword a category matches in plural clauses.
pub(crate) fn category_keyword(category: PluralCategory) -> &'static str {
    match category {
        PluralCategory::Zero => "zero",
        PluralCategory::One => "one",
        PluralCategory::Two => "two",
        PluralCategory::Few => "few",
        PluralCategory::Many => "many",
        PluralCategory::Other => "other",
    }
}

/// Derives the TR35 plural operands of a runtime value. Strings keep
/// their visible fraction digits, so `"1.30"` selects like a number
/// formatted with two fraction digits. `None` means not numeric.
pub(crate) fn operands(value: &Value) -> Option<PluralOperands> {
    match value {
        Value::Int(v) => Some(PluralOperands::from(v.unsigned_abs())),
        Value::Uint(v) => Some(PluralOperands::from(*v)),
        Value::Float(v) => {
            let decimal = Decimal::try_from_f64(*v, FloatPrecision::RoundTrip).ok()?;
            Some(PluralOperands::from(&decimal))
        }
        Value::String(s) => {
            let decimal = s.parse::<Decimal>().ok()?;
            Some(PluralOperands::from(&decimal))
        }
        Value::Bool(_) => None,
    }
}

/// Selects the plural category of `operands` under the locale's cardinal
/// or ordinal rules.
pub(crate) fn select_category(
    locale: &Locale,
    kind: PluralKind,
    operands: PluralOperands,
) -> MessageFormatResult<PluralCategory> {
    let prefs = PluralRulesPreferences::from(locale);
    let mut options = PluralRulesOptions::default();
    options.rule_type = Some(match kind {
        PluralKind::Cardinal => PluralRuleType::Cardinal,
        PluralKind::Ordinal => PluralRuleType::Ordinal,
    });
    let rules = PluralRules::try_new(prefs, options).map_err(|e| {
        MessageFormatError::range().with_message(format!("plural rules unavailable: {e}"))
    })?;
    Ok(rules.category_for(operands))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(locale: &str, kind: PluralKind, value: Value) -> PluralCategory {
        let locale: Locale = locale.parse().unwrap();
        let operands = operands(&value).unwrap();
        select_category(&locale, kind, operands).unwrap()
    }

    #[test]
    fn english_cardinal() {
        assert_eq!(
            category("en", PluralKind::Cardinal, Value::Int(1)),
            PluralCategory::One
        );
        assert_eq!(
            category("en", PluralKind::Cardinal, Value::Int(0)),
            PluralCategory::Other
        );
        assert_eq!(
            category("en", PluralKind::Cardinal, Value::Int(2)),
            PluralCategory::Other
        );
        assert_eq!(
            category("en", PluralKind::Cardinal, Value::Int(-1)),
            PluralCategory::One
        );
    }

    #[test]
    fn english_ordinal() {
        let ordinal = |n: i64| category("en", PluralKind::Ordinal, Value::Int(n));
        assert_eq!(ordinal(1), PluralCategory::One);
        assert_eq!(ordinal(2), PluralCategory::Two);
        assert_eq!(ordinal(3), PluralCategory::Few);
        assert_eq!(ordinal(4), PluralCategory::Other);
        assert_eq!(ordinal(11), PluralCategory::Other);
        assert_eq!(ordinal(12), PluralCategory::Other);
        assert_eq!(ordinal(13), PluralCategory::Other);
        assert_eq!(ordinal(21), PluralCategory::One);
        assert_eq!(ordinal(101), PluralCategory::One);
    }

    #[test]
    fn russian_cardinal() {
        let cardinal = |n: i64| category("ru", PluralKind::Cardinal, Value::Int(n));
        assert_eq!(cardinal(1), PluralCategory::One);
        assert_eq!(cardinal(2), PluralCategory::Few);
        assert_eq!(cardinal(5), PluralCategory::Many);
        assert_eq!(cardinal(11), PluralCategory::Many);
        assert_eq!(cardinal(21), PluralCategory::One);
    }

    #[test]
    fn string_digits_are_significant() {
        // An integer one is "one", but "1.0" has a visible fraction digit
        // and English treats it as "other".
        assert_eq!(
            category("en", PluralKind::Cardinal, Value::from("1")),
            PluralCategory::One
        );
        assert_eq!(
            category("en", PluralKind::Cardinal, Value::from("1.0")),
            PluralCategory::Other
        );
        assert_eq!(
            category("en", PluralKind::Cardinal, Value::from("1.30")),
            PluralCategory::Other
        );
    }

    #[test]
    fn float_uses_shortest_digits() {
        assert_eq!(
            category("en", PluralKind::Cardinal, Value::Float(1.5)),
            PluralCategory::Other
        );
        assert_eq!(
            category("en", PluralKind::Cardinal, Value::Float(1.0)),
            PluralCategory::One
        );
    }

    #[test]
    fn non_numeric_has_no_operands() {
        assert!(operands(&Value::from(true)).is_none());
        assert!(operands(&Value::from("half")).is_none());
    }
}
