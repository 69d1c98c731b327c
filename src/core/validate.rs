//! Input-domain predicates shared by chart and sub-configuration setters.

use super::OptionValue;

/// Case-sensitive exact membership in a fixed set of accepted strings.
pub(crate) fn is_enum_member(value: &str, allowed: &[&str]) -> bool {
    allowed.contains(&value)
}

/// Accepts an integer, or a string of one-or-more ASCII digits followed by
/// `%`. No bounds checking beyond the format.
pub(crate) fn is_int_or_percent(value: &OptionValue) -> bool {
    match value {
        OptionValue::Int(_) => true,
        OptionValue::String(text) => is_percent(text),
        _ => false,
    }
}

fn is_percent(text: &str) -> bool {
    match text.strip_suffix('%') {
        Some(digits) => !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()),
        None => false,
    }
}

/// Formats the accepted-values hint carried by `InvalidConfigValue`
/// (`"with a value of in | out | none"`).
pub(crate) fn value_hint(allowed: &[&str]) -> String {
    format!("with a value of {}", allowed.join(" | "))
}

#[cfg(test)]
mod tests {
    use super::{is_enum_member, is_int_or_percent, value_hint};
    use crate::core::OptionValue;

    #[test]
    fn enum_membership_is_case_sensitive() {
        let allowed = &["in", "out", "none"];
        assert!(is_enum_member("out", allowed));
        assert!(!is_enum_member("Out", allowed));
        assert!(!is_enum_member("sideways", allowed));
    }

    #[test]
    fn int_or_percent_accepts_integers_and_percent_strings() {
        assert!(is_int_or_percent(&OptionValue::Int(50)));
        assert!(is_int_or_percent(&OptionValue::Int(-5)));
        assert!(is_int_or_percent(&OptionValue::from("65%")));
        assert!(is_int_or_percent(&OptionValue::from("100%")));
    }

    #[test]
    fn int_or_percent_rejects_everything_else() {
        assert!(!is_int_or_percent(&OptionValue::from("65")));
        assert!(!is_int_or_percent(&OptionValue::from("abc%")));
        assert!(!is_int_or_percent(&OptionValue::from("%")));
        assert!(!is_int_or_percent(&OptionValue::from("6 5%")));
        assert!(!is_int_or_percent(&OptionValue::Float(50.0)));
        assert!(!is_int_or_percent(&OptionValue::Bool(true)));
    }

    #[test]
    fn value_hint_pipes_accepted_values() {
        assert_eq!(
            value_hint(&["datum", "category"]),
            "with a value of datum | category"
        );
    }
}
