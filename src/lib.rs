//! gviz-rs: validated, fluent chart option builders.
//!
//! Each chart variant exposes one setter per supported option. Setters
//! validate their argument against the option's declared domain, merge the
//! result into the chart's option mapping, and hand the builder back for
//! chaining. The accumulated mapping, together with the chart's type tag and
//! label, serializes to the JSON payload a browser-side rendering engine
//! consumes.

pub mod charts;
pub mod configs;
pub mod core;
pub mod error;
pub mod telemetry;

pub use crate::core::{OptionMap, OptionValue};
pub use charts::{Chart, ColumnChart, CommonOptions, LineChart, PieChart};
pub use configs::{Axis, AxisOptions, HorizontalAxis, Legend, SubConfig, VerticalAxis};
pub use error::{ChartError, ChartResult};
