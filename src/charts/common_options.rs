use crate::configs::{Legend, SubConfig};
use crate::core::{OptionMap, OptionValue, fragment, validate};
use crate::error::{ChartError, ChartResult};

use super::Chart;

/// Options every chart variant accepts, regardless of type.
///
/// Variants expose the shared surface by handing out their inner [`Chart`].
/// Each setter returns the same chart handle so calls chain; fallible
/// setters surface `InvalidConfigValue` and leave the mapping untouched.
pub trait CommonOptions {
    fn chart(&self) -> &Chart;
    fn chart_mut(&mut self) -> &mut Chart;

    /// Chart label, used verbatim by the renderer to identify the chart.
    fn label(&self) -> &str {
        self.chart().label()
    }

    /// Type tag consumed by the renderer (e.g. `"ColumnChart"`).
    fn chart_type(&self) -> &'static str {
        self.chart().type_tag()
    }

    /// Accumulated option mapping.
    fn options(&self) -> &OptionMap {
        self.chart().options()
    }

    /// Text displayed above the chart.
    fn title(&mut self, title: &str) -> &mut Self {
        self.chart_mut().add_option(fragment("title", title));
        self
    }

    /// Where to place the chart title, compared to the chart area. `in`
    /// draws the title inside the chart area, `out` outside it, and `none`
    /// omits the title.
    fn title_position(&mut self, position: &str) -> ChartResult<&mut Self> {
        const ALLOWED: &[&str] = &["in", "out", "none"];
        if !validate::is_enum_member(position, ALLOWED) {
            return Err(ChartError::invalid_config_value(
                "titlePosition",
                "string",
                Some(validate::value_hint(ALLOWED)),
            ));
        }
        self.chart_mut()
            .add_option(fragment("titlePosition", position));
        Ok(self)
    }

    /// Width of the chart, in pixels.
    fn width(&mut self, width: u32) -> &mut Self {
        self.chart_mut().add_option(fragment("width", width));
        self
    }

    /// Height of the chart, in pixels.
    fn height(&mut self, height: u32) -> &mut Self {
        self.chart_mut().add_option(fragment("height", height));
        self
    }

    /// Default point size of all text in the chart.
    fn font_size(&mut self, size: u32) -> &mut Self {
        self.chart_mut().add_option(fragment("fontSize", size));
        self
    }

    /// Default font face for all text in the chart.
    fn font_name(&mut self, name: &str) -> &mut Self {
        self.chart_mut().add_option(fragment("fontName", name));
        self
    }

    /// Colors to use for the chart elements, one entry per series.
    fn colors(&mut self, colors: &[&str]) -> &mut Self {
        let entries: Vec<OptionValue> = colors.iter().map(|c| OptionValue::from(*c)).collect();
        self.chart_mut().add_option(fragment("colors", entries));
        self
    }

    /// Legend placement and alignment, merged under the `legend` namespace.
    fn legend(&mut self, legend: Legend) -> &mut Self {
        let frag = legend.to_fragment("legend");
        self.chart_mut().add_option(frag);
        self
    }

    /// Serializes the render payload (`type`, `label`, `options`) to JSON.
    fn to_json(&self) -> ChartResult<String> {
        self.chart().to_json()
    }

    /// Serializes the render payload to pretty JSON for debug/config files.
    fn to_json_pretty(&self) -> ChartResult<String> {
        self.chart().to_json_pretty()
    }
}
