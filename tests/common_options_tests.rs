use gviz_rs::core::fragment;
use gviz_rs::{ChartError, ColumnChart, CommonOptions, Legend, LineChart, OptionValue, PieChart};

#[test]
fn common_setters_store_values_under_their_documented_keys() {
    let mut chart = ColumnChart::new("common");
    chart
        .title("Quarterly sales")
        .width(800)
        .height(400)
        .font_size(12)
        .font_name("Arial");

    assert_eq!(
        chart.options()["title"],
        OptionValue::from("Quarterly sales")
    );
    assert_eq!(chart.options()["width"], OptionValue::Int(800));
    assert_eq!(chart.options()["height"], OptionValue::Int(400));
    assert_eq!(chart.options()["fontSize"], OptionValue::Int(12));
    assert_eq!(chart.options()["fontName"], OptionValue::from("Arial"));
}

#[test]
fn title_position_validates_like_axis_titles_position() {
    let mut chart = ColumnChart::new("titles");
    chart.title_position("in").expect("allowed value");
    assert_eq!(chart.options()["titlePosition"], OptionValue::from("in"));

    let err = chart
        .title_position("above")
        .expect_err("unknown value must fail");
    match err {
        ChartError::InvalidConfigValue { setter, hint, .. } => {
            assert_eq!(setter, "titlePosition");
            assert_eq!(hint.as_deref(), Some("with a value of in | out | none"));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(chart.options()["titlePosition"], OptionValue::from("in"));
}

#[test]
fn colors_store_as_a_list_of_strings() {
    let mut chart = ColumnChart::new("colors");
    chart.colors(&["#3366CC", "#DC3912"]);
    assert_eq!(
        chart.options()["colors"],
        OptionValue::List(vec![
            OptionValue::from("#3366CC"),
            OptionValue::from("#DC3912"),
        ])
    );
}

#[test]
fn legend_merges_under_the_legend_namespace() {
    let legend = Legend::new()
        .position("bottom")
        .expect("valid position")
        .alignment("center")
        .expect("valid alignment");

    let mut chart = ColumnChart::new("legends");
    chart.legend(legend);

    let mut expected_legend = fragment("position", "bottom");
    expected_legend.extend(fragment("alignment", "center"));
    assert_eq!(chart.options(), &fragment("legend", expected_legend));
}

#[test]
fn common_surface_is_shared_by_every_variant() {
    let mut line = LineChart::new("line");
    line.title("line title");
    assert_eq!(line.options()["title"], OptionValue::from("line title"));
    assert_eq!(line.chart_type(), "LineChart");

    let mut pie = PieChart::new("pie");
    pie.title("pie title");
    assert_eq!(pie.options()["title"], OptionValue::from("pie title"));
    assert_eq!(pie.chart_type(), "PieChart");
}

#[test]
fn common_and_variant_options_accumulate_in_one_mapping() {
    let mut chart = ColumnChart::new("mixed");
    chart.title("Sales").width(640);
    chart.is_stacked(true);

    let mut expected = fragment("title", "Sales");
    expected.extend(fragment("width", 640));
    expected.extend(fragment("isStacked", true));
    assert_eq!(chart.options(), &expected);
}

#[test]
fn label_is_kept_verbatim() {
    let chart = ColumnChart::new("My Chart (2026)");
    assert_eq!(chart.label(), "My Chart (2026)");
}
