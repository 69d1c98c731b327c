use crate::core::{OptionMap, fragment, validate};
use crate::error::{ChartError, ChartResult};

use super::SubConfig;

/// Option state shared by both chart axes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Axis {
    options: OptionMap,
}

impl Axis {
    pub(crate) fn insert(&mut self, frag: OptionMap) {
        for (key, value) in frag {
            self.options.insert(key, value);
        }
    }

    #[must_use]
    pub fn options(&self) -> &OptionMap {
        &self.options
    }
}

/// Options shared by the horizontal and vertical axis builders.
///
/// Same contract as the chart setters: validate, merge, hand the builder
/// back for chaining.
pub trait AxisOptions: Sized {
    fn axis(&self) -> &Axis;
    fn axis_mut(&mut self) -> &mut Axis;

    /// Title text displayed along the axis.
    fn title(mut self, title: &str) -> Self {
        self.axis_mut().insert(fragment("title", title));
        self
    }

    /// Where to place the axis text, relative to the chart area.
    fn text_position(mut self, position: &str) -> ChartResult<Self> {
        const ALLOWED: &[&str] = &["out", "in", "none"];
        if !validate::is_enum_member(position, ALLOWED) {
            return Err(ChartError::invalid_config_value(
                "textPosition",
                "string",
                Some(validate::value_hint(ALLOWED)),
            ));
        }
        self.axis_mut().insert(fragment("textPosition", position));
        Ok(self)
    }

    /// Direction in which values grow along the axis. `-1` reverses the
    /// order of the values.
    fn direction(mut self, direction: i64) -> ChartResult<Self> {
        if direction != 1 && direction != -1 {
            return Err(ChartError::invalid_config_value(
                "direction",
                "int",
                Some("with a value of 1 | -1".to_owned()),
            ));
        }
        self.axis_mut().insert(fragment("direction", direction));
        Ok(self)
    }

    /// Lowest value to render on the axis.
    fn min_value(mut self, value: i64) -> Self {
        self.axis_mut().insert(fragment("minValue", value));
        self
    }

    /// Highest value to render on the axis.
    fn max_value(mut self, value: i64) -> Self {
        self.axis_mut().insert(fragment("maxValue", value));
        self
    }

    /// Makes the axis a logarithmic scale. Requires all values to be
    /// positive.
    fn log_scale(mut self, log_scale: bool) -> Self {
        self.axis_mut().insert(fragment("logScale", log_scale));
        self
    }

    /// Format pattern applied to the axis labels (e.g. `"#,###%"`).
    fn format(mut self, format: &str) -> Self {
        self.axis_mut().insert(fragment("format", format));
        self
    }
}

/// Horizontal axis configuration, merged under a chart's `hAxis` namespace.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HorizontalAxis {
    axis: Axis,
}

impl HorizontalAxis {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws the axis text at an angle instead of horizontally.
    pub fn slanted_text(mut self, slanted: bool) -> Self {
        self.axis.insert(fragment("slantedText", slanted));
        self
    }

    /// Angle of the axis text when drawn slanted, in degrees from
    /// horizontal.
    pub fn slanted_text_angle(mut self, angle: i64) -> ChartResult<Self> {
        if !(0..=90).contains(&angle) {
            return Err(ChartError::invalid_config_value(
                "slantedTextAngle",
                "int",
                Some("between 0 and 90".to_owned()),
            ));
        }
        self.axis.insert(fragment("slantedTextAngle", angle));
        Ok(self)
    }
}

impl AxisOptions for HorizontalAxis {
    fn axis(&self) -> &Axis {
        &self.axis
    }

    fn axis_mut(&mut self) -> &mut Axis {
        &mut self.axis
    }
}

impl SubConfig for HorizontalAxis {
    fn to_fragment(&self, namespace: &str) -> OptionMap {
        fragment(namespace, self.axis.options().clone())
    }
}

/// Vertical axis configuration, merged under a chart's `vAxis` namespace.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VerticalAxis {
    axis: Axis,
}

impl VerticalAxis {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Axis value at which the baseline is drawn.
    pub fn baseline(mut self, value: i64) -> Self {
        self.axis.insert(fragment("baseline", value));
        self
    }
}

impl AxisOptions for VerticalAxis {
    fn axis(&self) -> &Axis {
        &self.axis
    }

    fn axis_mut(&mut self) -> &mut Axis {
        &mut self.axis
    }
}

impl SubConfig for VerticalAxis {
    fn to_fragment(&self, namespace: &str) -> OptionMap {
        fragment(namespace, self.axis.options().clone())
    }
}
