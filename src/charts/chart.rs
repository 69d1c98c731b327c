use serde::Serialize;
use tracing::{debug, trace};

use crate::core::OptionMap;
use crate::error::{ChartError, ChartResult};

/// Identity and accumulated option state shared by every chart variant.
///
/// Variants hold a `Chart` by value and delegate option merges to it. The
/// render payload is the chart's type tag, label, and option mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    label: String,
    type_tag: &'static str,
    accepted: Vec<&'static str>,
    options: OptionMap,
}

/// Top-level option keys every variant accepts.
const COMMON_KEYS: &[&str] = &[
    "colors",
    "fontName",
    "fontSize",
    "height",
    "legend",
    "title",
    "titlePosition",
    "width",
];

impl Chart {
    pub(crate) fn new(
        type_tag: &'static str,
        label: impl Into<String>,
        variant_keys: &[&'static str],
    ) -> Self {
        let mut accepted = Vec::with_capacity(COMMON_KEYS.len() + variant_keys.len());
        accepted.extend_from_slice(COMMON_KEYS);
        accepted.extend_from_slice(variant_keys);
        Self {
            label: label.into(),
            type_tag,
            accepted,
            options: OptionMap::new(),
        }
    }

    /// Chart label, used verbatim by the renderer to identify the chart.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Type tag consumed by the renderer (e.g. `"ColumnChart"`).
    #[must_use]
    pub fn type_tag(&self) -> &'static str {
        self.type_tag
    }

    /// Accumulated option mapping.
    #[must_use]
    pub fn options(&self) -> &OptionMap {
        &self.options
    }

    /// Whether `key` is in this chart's accepted top-level option set.
    #[must_use]
    pub fn accepts(&self, key: &str) -> bool {
        self.accepted.contains(&key)
    }

    /// Merges an already-validated option fragment, overwriting any existing
    /// value at each top-level key.
    ///
    /// Setters are the only callers; a key outside the accepted set is
    /// internal drift, caught by the debug assertion.
    pub(crate) fn add_option(&mut self, fragment: OptionMap) {
        for (key, value) in fragment {
            debug_assert!(
                self.accepts(&key),
                "option `{key}` is not in the accepted set of {}",
                self.type_tag
            );
            trace!(chart = self.type_tag, option = %key, "merge option");
            self.options.insert(key, value);
        }
    }

    /// Serializes the render payload (`type`, `label`, `options`) to JSON.
    pub fn to_json(&self) -> ChartResult<String> {
        debug!(
            chart = self.type_tag,
            options = self.options.len(),
            "serialize render payload"
        );
        serde_json::to_string(&self.payload())
            .map_err(|e| ChartError::Serialization(e.to_string()))
    }

    /// Serializes the render payload to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        debug!(
            chart = self.type_tag,
            options = self.options.len(),
            "serialize render payload"
        );
        serde_json::to_string_pretty(&self.payload())
            .map_err(|e| ChartError::Serialization(e.to_string()))
    }

    fn payload(&self) -> RenderPayload<'_> {
        RenderPayload {
            chart_type: self.type_tag,
            label: &self.label,
            options: &self.options,
        }
    }
}

/// JSON shape handed to the browser-side rendering engine.
#[derive(Serialize)]
struct RenderPayload<'a> {
    #[serde(rename = "type")]
    chart_type: &'a str,
    label: &'a str,
    options: &'a OptionMap,
}
