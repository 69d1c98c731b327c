use gviz_rs::core::fragment;
use gviz_rs::{AxisOptions, ChartError, HorizontalAxis, OptionValue, SubConfig, VerticalAxis};

#[test]
fn axis_fragment_is_keyed_under_the_requested_namespace() {
    let axis = HorizontalAxis::new().title("X");
    assert_eq!(
        axis.to_fragment("hAxis"),
        fragment("hAxis", fragment("title", "X"))
    );
}

#[test]
fn shared_axis_setters_store_values_verbatim() {
    let axis = VerticalAxis::new()
        .title("Revenue")
        .min_value(0)
        .max_value(100)
        .log_scale(true)
        .format("#,###%");

    let options = axis.to_fragment("vAxis");
    let nested = options["vAxis"].as_map().expect("nested mapping");
    assert_eq!(nested["title"], OptionValue::from("Revenue"));
    assert_eq!(nested["minValue"], OptionValue::Int(0));
    assert_eq!(nested["maxValue"], OptionValue::Int(100));
    assert_eq!(nested["logScale"], OptionValue::Bool(true));
    assert_eq!(nested["format"], OptionValue::from("#,###%"));
}

#[test]
fn text_position_accepts_only_the_declared_values() {
    for position in ["out", "in", "none"] {
        let axis = HorizontalAxis::new()
            .text_position(position)
            .expect("allowed value");
        let options = axis.to_fragment("hAxis");
        assert_eq!(
            options["hAxis"].as_map().expect("nested")["textPosition"],
            OptionValue::from(position)
        );
    }

    let err = HorizontalAxis::new()
        .text_position("middle")
        .expect_err("unknown value must fail");
    match err {
        ChartError::InvalidConfigValue { setter, hint, .. } => {
            assert_eq!(setter, "textPosition");
            assert_eq!(hint.as_deref(), Some("with a value of out | in | none"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn direction_accepts_only_one_and_minus_one() {
    for direction in [1, -1] {
        let axis = VerticalAxis::new().direction(direction).expect("valid");
        let options = axis.to_fragment("vAxis");
        assert_eq!(
            options["vAxis"].as_map().expect("nested")["direction"],
            OptionValue::Int(direction)
        );
    }

    let err = VerticalAxis::new().direction(0).expect_err("must fail");
    match err {
        ChartError::InvalidConfigValue { setter, hint, .. } => {
            assert_eq!(setter, "direction");
            assert_eq!(hint.as_deref(), Some("with a value of 1 | -1"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn slanted_text_angle_is_bounded_to_a_quarter_turn() {
    for angle in [0, 45, 90] {
        let axis = HorizontalAxis::new()
            .slanted_text(true)
            .slanted_text_angle(angle)
            .expect("angle in range");
        let options = axis.to_fragment("hAxis");
        assert_eq!(
            options["hAxis"].as_map().expect("nested")["slantedTextAngle"],
            OptionValue::Int(angle)
        );
    }

    for angle in [-1, 91] {
        let err = HorizontalAxis::new()
            .slanted_text_angle(angle)
            .expect_err("angle out of range must fail");
        match err {
            ChartError::InvalidConfigValue { setter, .. } => {
                assert_eq!(setter, "slantedTextAngle");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}

#[test]
fn vertical_axis_baseline_stores_an_integer() {
    let axis = VerticalAxis::new().baseline(-10);
    let options = axis.to_fragment("vAxis");
    assert_eq!(
        options["vAxis"].as_map().expect("nested")["baseline"],
        OptionValue::Int(-10)
    );
}

#[test]
fn axis_setters_overwrite_on_repeat() {
    let axis = HorizontalAxis::new().title("first").title("second");
    assert_eq!(
        axis.to_fragment("hAxis"),
        fragment("hAxis", fragment("title", "second"))
    );
}

#[test]
fn empty_axis_produces_an_empty_namespaced_mapping() {
    let axis = HorizontalAxis::new();
    let options = axis.to_fragment("hAxis");
    assert!(options["hAxis"].as_map().expect("nested").is_empty());
}
