use glyphx::ChartError;
use glyphx::core::{
    AxesBuilder, AxesConfig, BoxPlotSeries, Canvas, ScaleSet, Series, SeriesRender, YAxis,
};
use glyphx::render::{Color, Primitive};

fn scales_for(series: &Series) -> ScaleSet {
    let mut builder =
        AxesBuilder::new(Canvas::new(100, 100, 0), AxesConfig::default()).expect("valid canvas");
    builder.register(series, YAxis::Primary);
    *builder.finalize().expect("finalize").scales()
}

fn one_to_ten() -> Vec<f64> {
    (1..=10).map(f64::from).collect()
}

#[test]
fn quartiles_use_linear_interpolation() {
    let stats = BoxPlotSeries::new(&one_to_ten()).expect("valid box").stats().clone();

    assert_eq!(stats.quartiles.q1, 3.25);
    assert_eq!(stats.quartiles.q2, 5.5);
    assert_eq!(stats.quartiles.q3, 7.75);
    assert_eq!((stats.whisker_low, stats.whisker_high), (1.0, 10.0));
    assert!(stats.outliers.is_empty());
}

#[test]
fn whiskers_stop_at_fences_and_outliers_are_marked() {
    let series: Series = BoxPlotSeries::new(&[1.0, 2.0, 3.0, 4.0, 100.0])
        .expect("valid box")
        .into();
    let Series::BoxPlot(box_plot) = &series else {
        panic!("expected box plot variant");
    };
    let stats = box_plot.stats();

    assert_eq!(stats.whisker_low, 1.0);
    assert_eq!(stats.whisker_high, 4.0 + 1.5 * 2.0);
    assert_eq!(stats.outliers, vec![100.0]);

    let primitives = series.render(&scales_for(&series), YAxis::Primary);
    assert_eq!(primitives.len(), 5);
    let Primitive::Circle(outlier) = &primitives[4] else {
        panic!("expected outlier marker, got {:?}", primitives[4]);
    };
    assert_eq!(outlier.r, 3.0);
    assert!(outlier.style.fill.is_none());
}

#[test]
fn render_order_is_whiskers_box_then_median() {
    let color = Color::from_rgb8(0x2c, 0xa0, 0x2c);
    let series: Series = BoxPlotSeries::new(&one_to_ten())
        .expect("valid box")
        .with_color(color)
        .with_label("trial")
        .into();
    let primitives = series.render(&scales_for(&series), YAxis::Primary);

    assert_eq!(primitives.len(), 4);
    let (Primitive::Line(lower), Primitive::Line(upper)) = (&primitives[0], &primitives[1]) else {
        panic!("expected whisker lines");
    };
    // position 0.5 on the widened x domain [-0.5, 1.5]
    assert_eq!((lower.x1, lower.y1, lower.y2), (50.0, 100.0, 75.0));
    assert_eq!((upper.y1, upper.y2), (25.0, 0.0));

    let Primitive::Rect(body) = &primitives[2] else {
        panic!("expected box rect, got {:?}", primitives[2]);
    };
    assert_eq!((body.x, body.y, body.width, body.height), (40.0, 25.0, 20.0, 50.0));
    assert_eq!(body.style.fill_opacity, Some(0.4));
    assert_eq!(body.style.stroke, Some(color));
    assert_eq!(body.tooltip.get("q2").map(String::as_str), Some("5.5"));
    assert_eq!(body.tooltip.get("label").map(String::as_str), Some("trial"));

    let Primitive::Line(median) = &primitives[3] else {
        panic!("expected median line, got {:?}", primitives[3]);
    };
    assert_eq!((median.x1, median.x2, median.y1), (40.0, 60.0, 50.0));
    assert_eq!(median.stroke_width, 2.0);
}

#[test]
fn extents_are_position_and_data_range() {
    let series: Series = BoxPlotSeries::new(&[4.0, -2.0, 9.0])
        .expect("valid box")
        .with_position(3.0)
        .expect("finite position")
        .into();
    let x = series.x_extent().expect("x extent");
    let y = series.y_extent().expect("y extent");

    assert_eq!((x.min(), x.max()), (3.0, 3.0));
    assert_eq!((y.min(), y.max()), (-2.0, 9.0));
}

#[test]
fn empty_or_invalid_samples_fail_at_construction() {
    assert!(matches!(
        BoxPlotSeries::new(&[]),
        Err(ChartError::EmptyInput { field: "data" })
    ));
    assert!(matches!(
        BoxPlotSeries::new(&[1.0, f64::NAN]),
        Err(ChartError::InvalidData(_))
    ));
    let valid = BoxPlotSeries::new(&[1.0]).expect("single sample");
    assert!(valid.clone().with_box_width(0.0).is_err());
    assert!(valid.with_position(f64::INFINITY).is_err());
}
