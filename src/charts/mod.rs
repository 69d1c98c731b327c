pub mod chart;
pub mod column_chart;
pub mod common_options;
pub mod line_chart;
pub mod pie_chart;

pub use chart::Chart;
pub use column_chart::ColumnChart;
pub use common_options::CommonOptions;
pub use line_chart::LineChart;
pub use pie_chart::PieChart;
