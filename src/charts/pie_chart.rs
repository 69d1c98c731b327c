use crate::core::{fragment, validate};
use crate::error::{ChartError, ChartResult};

use super::{Chart, CommonOptions};

const TYPE_TAG: &str = "PieChart";

const ACCEPTED: &[&str] = &[
    "is3D",
    "pieResidueSliceColor",
    "pieResidueSliceLabel",
    "pieSliceText",
    "pieStartAngle",
    "reverseCategories",
];

/// A pie chart rendered within the browser. Displays tips when hovering
/// over slices.
#[derive(Debug, Clone, PartialEq)]
pub struct PieChart {
    chart: Chart,
}

impl PieChart {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            chart: Chart::new(TYPE_TAG, label, ACCEPTED),
        }
    }

    /// If set to `true`, displays a three-dimensional chart.
    pub fn is_3d(&mut self, is_3d: bool) -> &mut Self {
        self.chart.add_option(fragment("is3D", is_3d));
        self
    }

    /// Color for the combination slice that holds all slices below the
    /// visibility threshold.
    pub fn pie_residue_slice_color(&mut self, color: &str) -> &mut Self {
        self.chart
            .add_option(fragment("pieResidueSliceColor", color));
        self
    }

    /// Label for the combination slice that holds all slices below the
    /// visibility threshold.
    pub fn pie_residue_slice_label(&mut self, label: &str) -> &mut Self {
        self.chart
            .add_option(fragment("pieResidueSliceLabel", label));
        self
    }

    /// The content of the text displayed on the slice: `percentage`, the
    /// quantitative `value`, the `label` of the slice, or `none`.
    pub fn pie_slice_text(&mut self, text: &str) -> ChartResult<&mut Self> {
        const ALLOWED: &[&str] = &["percentage", "value", "label", "none"];
        if !validate::is_enum_member(text, ALLOWED) {
            return Err(ChartError::invalid_config_value(
                "pieSliceText",
                "string",
                Some(validate::value_hint(ALLOWED)),
            ));
        }
        self.chart.add_option(fragment("pieSliceText", text));
        Ok(self)
    }

    /// The angle, in degrees, to rotate the chart by. The default of `0`
    /// orients the leftmost edge of the first slice directly up.
    pub fn pie_start_angle(&mut self, angle: i64) -> &mut Self {
        self.chart.add_option(fragment("pieStartAngle", angle));
        self
    }

    /// If set to `true`, draws slices counterclockwise.
    pub fn reverse_categories(&mut self, reverse: bool) -> &mut Self {
        self.chart
            .add_option(fragment("reverseCategories", reverse));
        self
    }
}

impl CommonOptions for PieChart {
    fn chart(&self) -> &Chart {
        &self.chart
    }

    fn chart_mut(&mut self) -> &mut Chart {
        &mut self.chart
    }
}
