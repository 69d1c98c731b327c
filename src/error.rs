use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid value for `{setter}`: expected {expected}{}", format_hint(.hint))]
    InvalidConfigValue {
        /// Name of the setter that rejected its argument.
        setter: &'static str,
        /// Description of the expected type/domain.
        expected: &'static str,
        /// Optional human-readable hint (accepted values, format example).
        hint: Option<String>,
    },

    #[error("failed to serialize chart options: {0}")]
    Serialization(String),
}

impl ChartError {
    pub(crate) fn invalid_config_value(
        setter: &'static str,
        expected: &'static str,
        hint: Option<String>,
    ) -> Self {
        Self::InvalidConfigValue {
            setter,
            expected,
            hint,
        }
    }
}

fn format_hint(hint: &Option<String>) -> String {
    match hint {
        Some(hint) => format!(", {hint}"),
        None => String::new(),
    }
}
