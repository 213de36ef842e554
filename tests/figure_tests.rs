use glyphx::core::{BoxPlotSeries, LineSeries, PieSeries, YAxis};
use glyphx::render::{NullRenderer, Primitive};
use glyphx::telemetry::init_default_tracing;
use glyphx::{ChartError, Figure, FigureConfig, PlotKind, Theme, plot};

fn polyline_points(frame_primitives: &[Primitive]) -> Vec<(f64, f64)> {
    frame_primitives
        .iter()
        .find_map(|p| match p {
            Primitive::Polyline(polyline) => Some(polyline.points.clone()),
            _ => None,
        })
        .expect("line series emits a polyline")
}

#[test]
fn line_figure_maps_data_onto_the_canvas_corners() {
    let mut figure = Figure::new(FigureConfig::new(100, 100).with_padding(0));
    figure.add(LineSeries::new(&[0.0, 1.0, 2.0], &[0.0, 5.0, 0.0]).expect("valid line"));
    let frame = figure.build_frame().expect("frame");

    assert_eq!(
        polyline_points(&frame.primitives),
        vec![(0.0, 100.0), (50.0, 0.0), (100.0, 100.0)]
    );
}

#[test]
fn pie_figure_skips_cartesian_chrome() {
    let figure = Figure::new(FigureConfig::default().with_title("share"))
        .with_series(PieSeries::new(vec![1.0, 1.0, 2.0]).expect("valid pie"));
    let frame = figure.build_frame().expect("frame");

    assert_eq!(frame.count_where(|p| matches!(p, Primitive::Path(_))), 3);
    assert_eq!(frame.count_where(|p| matches!(p, Primitive::Rect(_))), 1);
    assert!(frame.primitives.iter().any(|p| matches!(
        p,
        Primitive::Text(text) if text.text == "share"
    )));
}

#[test]
fn box_plot_figure_renders_through_the_same_pipeline() {
    let data: Vec<f64> = (1..=10).map(f64::from).collect();
    let figure = Figure::new(FigureConfig::default())
        .with_series(BoxPlotSeries::new(&data).expect("valid box"));
    let mut renderer = NullRenderer::default();
    figure.render(&mut renderer).expect("render");

    assert_eq!(renderer.frames_rendered, 1);
    let frame = figure.build_frame().expect("frame");
    assert!(frame.primitives.iter().any(|p| matches!(
        p,
        Primitive::Rect(rect) if rect.style.fill_opacity == Some(0.4)
    )));
}

#[test]
fn plot_builds_one_series_per_kind() {
    let x = [0.0, 1.0, 2.0, 3.0];
    let y = [2.0, 4.0, 1.0, 3.0];
    let interactive = |kind: PlotKind| {
        let frame = plot(&x, &y, kind)
            .expect("valid plot")
            .build_frame()
            .expect("frame");
        (
            frame.count_where(|p| matches!(p, Primitive::Polyline(_))),
            frame.count_where(|p| matches!(p, Primitive::Rect(_)) && p.tooltip().is_some()),
            frame.count_where(|p| matches!(p, Primitive::Circle(_)) && p.tooltip().is_some()),
        )
    };

    assert_eq!(interactive(PlotKind::Line), (1, 0, 4));
    assert_eq!(interactive(PlotKind::Bar), (0, 4, 0));
    assert_eq!(interactive(PlotKind::Scatter), (0, 0, 4));
}

#[test]
fn plot_kind_names_fall_back_to_line() {
    assert_eq!(PlotKind::parse("bar"), PlotKind::Bar);
    assert_eq!(PlotKind::parse(" Scatter "), PlotKind::Scatter);
    assert_eq!(PlotKind::parse("line"), PlotKind::Line);
    assert_eq!(PlotKind::parse("violin"), PlotKind::Line);
    assert_eq!(PlotKind::default(), PlotKind::Line);
}

#[test]
fn plot_rejects_mismatched_inputs() {
    assert!(matches!(
        plot(&[0.0, 1.0], &[1.0], PlotKind::Bar),
        Err(ChartError::ShapeMismatch { .. })
    ));
}

#[test]
fn secondary_series_get_their_own_scale() {
    let mut figure = Figure::new(FigureConfig::default());
    figure
        .add(LineSeries::new(&[0.0, 10.0], &[0.0, 10.0]).expect("valid line"))
        .add_secondary(LineSeries::new(&[0.0, 10.0], &[0.0, 1000.0]).expect("valid line"));
    let axes = figure.build_axes().expect("axes");

    assert_eq!(figure.series()[1].axis, YAxis::Secondary);
    let y2 = axes.scales().y2().expect("secondary scale");
    assert_eq!((y2.domain().min(), y2.domain().max()), (0.0, 1000.0));
    assert_eq!(y2.map(1000.0), axes.scales().y().map(10.0));
}

#[test]
fn svg_output_is_a_standalone_document() {
    let figure = plot(&[0.0, 1.0], &[0.0, 1.0], PlotKind::Line).expect("valid plot");
    let svg = figure.to_svg().expect("svg");

    assert!(svg.starts_with(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="400" height="300" viewBox="0 0 400 300""#
    ));
    assert!(svg.contains("<polyline"));
    assert!(svg.trim_end().ends_with("</svg>"));

    let mut no_viewbox = figure.clone();
    no_viewbox.config_mut().viewbox = false;
    assert!(!no_viewbox.to_svg().expect("svg").contains("viewBox"));
}

#[test]
fn empty_figure_still_renders_chrome() {
    let frame = Figure::default().build_frame().expect("frame");

    assert!(matches!(frame.primitives.first(), Some(Primitive::Rect(_))));
    assert!(frame.validate().is_ok());
}

#[test]
fn undersized_canvas_is_reported() {
    let figure = Figure::new(FigureConfig::new(60, 60).with_padding(40));

    assert!(matches!(
        figure.to_svg(),
        Err(ChartError::InvalidCanvas { .. })
    ));
}

#[test]
fn figures_can_cross_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Figure>();
}

#[test]
fn config_loads_from_partial_json() {
    let config = FigureConfig::from_json_str(r#"{"width": 640, "title": "load"}"#).expect("parse");

    assert_eq!(config.width, 640);
    assert_eq!(config.height, 300);
    assert_eq!(config.padding, 50);
    assert_eq!(config.title.as_deref(), Some("load"));
    assert!(config.y_inverted);
    assert_eq!(config.theme, Theme::light());
}

#[test]
fn config_round_trips_through_json() {
    let config = FigureConfig::new(800, 600)
        .with_padding(24)
        .with_x_label("time")
        .with_tick_count(7)
        .with_grid(false)
        .with_theme(Theme::dark());
    let json = config.to_json_pretty().expect("serialize");
    let restored = FigureConfig::from_json_str(&json).expect("parse");

    assert_eq!((restored.width, restored.height, restored.padding), (800, 600, 24));
    assert_eq!(restored.x_label.as_deref(), Some("time"));
    assert_eq!(restored.tick_count, 7);
    assert!(!restored.show_grid);
    assert_eq!(restored.theme.name, "dark");
    assert!(matches!(
        FigureConfig::from_json_str("{not json"),
        Err(ChartError::Serialization(_))
    ));
}

#[test]
fn theme_lookup_is_case_insensitive_with_light_fallback() {
    assert_eq!(Theme::find("DARK"), Theme::dark());
    assert_eq!(Theme::find("solarized"), Theme::light());
}

#[cfg(not(feature = "telemetry"))]
#[test]
fn tracing_init_is_a_no_op_without_telemetry() {
    assert!(!init_default_tracing());
}

#[cfg(feature = "telemetry")]
#[test]
fn tracing_init_succeeds_at_most_once() {
    let first = init_default_tracing();
    let second = init_default_tracing();
    assert!(!(first && second));
}
