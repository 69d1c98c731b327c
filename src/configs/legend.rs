use crate::core::{OptionMap, fragment, validate};
use crate::error::{ChartError, ChartResult};

use super::SubConfig;

/// Legend placement configuration, merged under a chart's `legend`
/// namespace.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Legend {
    options: OptionMap,
}

impl Legend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Where to place the legend, relative to the chart area. `in` draws
    /// the legend inside the chart area and `none` omits it.
    pub fn position(mut self, position: &str) -> ChartResult<Self> {
        const ALLOWED: &[&str] = &["right", "left", "top", "bottom", "in", "none"];
        if !validate::is_enum_member(position, ALLOWED) {
            return Err(ChartError::invalid_config_value(
                "position",
                "string",
                Some(validate::value_hint(ALLOWED)),
            ));
        }
        self.options.extend(fragment("position", position));
        Ok(self)
    }

    /// How to align the legend entries within the legend area.
    pub fn alignment(mut self, alignment: &str) -> ChartResult<Self> {
        const ALLOWED: &[&str] = &["start", "center", "end"];
        if !validate::is_enum_member(alignment, ALLOWED) {
            return Err(ChartError::invalid_config_value(
                "alignment",
                "string",
                Some(validate::value_hint(ALLOWED)),
            ));
        }
        self.options.extend(fragment("alignment", alignment));
        Ok(self)
    }
}

impl SubConfig for Legend {
    fn to_fragment(&self, namespace: &str) -> OptionMap {
        fragment(namespace, self.options.clone())
    }
}
