use crate::configs::{HorizontalAxis, SubConfig, VerticalAxis};
use crate::core::{fragment, validate};
use crate::error::{ChartError, ChartResult};

use super::{Chart, CommonOptions};

const TYPE_TAG: &str = "LineChart";

const ACCEPTED: &[&str] = &[
    "axisTitlesPosition",
    "curveType",
    "hAxis",
    "interpolateNulls",
    "lineWidth",
    "pointSize",
    "vAxis",
];

/// A line chart rendered within the browser. Displays tips when hovering
/// over points.
#[derive(Debug, Clone, PartialEq)]
pub struct LineChart {
    chart: Chart,
}

impl LineChart {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            chart: Chart::new(TYPE_TAG, label, ACCEPTED),
        }
    }

    /// Where to place the axis titles, compared to the chart area. `in`
    /// draws them inside the chart area, `out` outside it, and `none` omits
    /// them.
    pub fn axis_titles_position(&mut self, position: &str) -> ChartResult<&mut Self> {
        const ALLOWED: &[&str] = &["in", "out", "none"];
        if !validate::is_enum_member(position, ALLOWED) {
            return Err(ChartError::invalid_config_value(
                "axisTitlesPosition",
                "string",
                Some(validate::value_hint(ALLOWED)),
            ));
        }
        self.chart
            .add_option(fragment("axisTitlesPosition", position));
        Ok(self)
    }

    /// Controls the curve of the lines: `none` draws straight lines,
    /// `function` smooths the angles of the line.
    pub fn curve_type(&mut self, curve_type: &str) -> ChartResult<&mut Self> {
        const ALLOWED: &[&str] = &["none", "function"];
        if !validate::is_enum_member(curve_type, ALLOWED) {
            return Err(ChartError::invalid_config_value(
                "curveType",
                "string",
                Some(validate::value_hint(ALLOWED)),
            ));
        }
        self.chart.add_option(fragment("curveType", curve_type));
        Ok(self)
    }

    /// Horizontal axis configuration, merged under the `hAxis` namespace.
    pub fn h_axis(&mut self, axis: HorizontalAxis) -> &mut Self {
        self.chart.add_option(axis.to_fragment("hAxis"));
        self
    }

    /// Whether to guess the value of missing points from their neighbors.
    pub fn interpolate_nulls(&mut self, interpolate: bool) -> &mut Self {
        self.chart
            .add_option(fragment("interpolateNulls", interpolate));
        self
    }

    /// Data line width in pixels. Use zero to hide all lines and show only
    /// the points.
    pub fn line_width(&mut self, width: u32) -> &mut Self {
        self.chart.add_option(fragment("lineWidth", width));
        self
    }

    /// Diameter of displayed points in pixels. Use zero to hide all points.
    pub fn point_size(&mut self, size: u32) -> &mut Self {
        self.chart.add_option(fragment("pointSize", size));
        self
    }

    /// Vertical axis configuration, merged under the `vAxis` namespace.
    pub fn v_axis(&mut self, axis: VerticalAxis) -> &mut Self {
        self.chart.add_option(axis.to_fragment("vAxis"));
        self
    }
}

impl CommonOptions for LineChart {
    fn chart(&self) -> &Chart {
        &self.chart
    }

    fn chart_mut(&mut self) -> &mut Chart {
        &mut self.chart
    }
}
