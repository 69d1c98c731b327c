use crate::configs::{HorizontalAxis, SubConfig, VerticalAxis};
use crate::core::{OptionValue, fragment, validate};
use crate::error::{ChartError, ChartResult};

use super::{Chart, CommonOptions};

const TYPE_TAG: &str = "ColumnChart";

const ACCEPTED: &[&str] = &[
    "axisTitlesPosition",
    "bar",
    "focusTarget",
    "hAxis",
    "isHtml",
    "isStacked",
    "vAxis",
];

/// A vertical bar chart, rendered within the browser using SVG or VML.
/// Displays tips when hovering over bars.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnChart {
    chart: Chart,
}

impl ColumnChart {
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

    /// The width of a group of bars, in either pixels (e.g. `50`) or as a
    /// percentage of the available width for each group (e.g. `"20%"`, where
    /// `"100%"` means groups have no space between them).
    pub fn bar_group_width(&mut self, width: impl Into<OptionValue>) -> ChartResult<&mut Self> {
        let width = width.into();
        if !validate::is_int_or_percent(&width) {
            return Err(ChartError::invalid_config_value(
                "barGroupWidth",
                "string | int",
                Some("must be a valid int or percent [ 50 | \"65%\" ]".to_owned()),
            ));
        }
        self.chart
            .add_option(fragment("bar", fragment("groupWidth", width)));
        Ok(self)
    }

    /// The type of entity that receives focus on mouse hover: `datum`
    /// focuses a single data point, `category` the group of points sharing
    /// an x-value.
    pub fn focus_target(&mut self, target: &str) -> ChartResult<&mut Self> {
        const ALLOWED: &[&str] = &["datum", "category"];
        if !validate::is_enum_member(target, ALLOWED) {
            return Err(ChartError::invalid_config_value(
                "focusTarget",
                "string",
                Some(validate::value_hint(ALLOWED)),
            ));
        }
        self.chart.add_option(fragment("focusTarget", target));
        Ok(self)
    }

    /// Horizontal axis configuration, merged under the `hAxis` namespace.
    pub fn h_axis(&mut self, axis: HorizontalAxis) -> &mut Self {
        self.chart.add_option(axis.to_fragment("hAxis"));
        self
    }

    /// Renders hover tooltips as HTML instead of SVG.
    pub fn is_html(&mut self, is_html: bool) -> &mut Self {
        self.chart.add_option(fragment("isHtml", is_html));
        self
    }

    /// If set to `true`, series elements are stacked.
    pub fn is_stacked(&mut self, is_stacked: bool) -> &mut Self {
        self.chart.add_option(fragment("isStacked", is_stacked));
        self
    }

    /// Vertical axis configuration, merged under the `vAxis` namespace.
    pub fn v_axis(&mut self, axis: VerticalAxis) -> &mut Self {
        self.chart.add_option(axis.to_fragment("vAxis"));
        self
    }
}

impl CommonOptions for ColumnChart {
    fn chart(&self) -> &Chart {
        &self.chart
    }

    fn chart_mut(&mut self) -> &mut Chart {
        &mut self.chart
    }
}
