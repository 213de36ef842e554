use glyphx::core::Canvas;
use glyphx::render::{
    CirclePrimitive, Color, INTERACTIVE_CLASS, LineDash, LinePrimitive, PathCommand,
    PathPrimitive, PolylinePrimitive, RectPrimitive, RenderFrame, Renderer, ShapeStyle,
    SvgOptions, SvgRenderer, TextHAlign, TextPrimitive, tooltip,
};
use smallvec::smallvec;

fn render(frame: &RenderFrame, options: SvgOptions) -> (String, SvgRenderer) {
    let mut renderer = SvgRenderer::new(options);
    renderer.render(frame).expect("render svg");
    (renderer.document().to_owned(), renderer)
}

#[test]
fn root_element_carries_size_and_viewbox() {
    let frame = RenderFrame::new(Canvas::new(640, 480, 40));
    let (svg, renderer) = render(&frame, SvgOptions::default());

    assert!(svg.starts_with(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="640" height="480" viewBox="0 0 640 480" font-family="sans-serif">"#
    ));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert_eq!(renderer.backend_name(), "svg");
    assert_eq!(renderer.last_stats().elements_written, 0);
}

#[test]
fn viewbox_can_be_disabled() {
    let frame = RenderFrame::new(Canvas::new(100, 50, 0));
    let options = SvgOptions {
        viewbox: false,
        ..SvgOptions::default()
    };
    let (svg, _) = render(&frame, options);

    assert!(!svg.contains("viewBox"));
    assert!(svg.contains(r#"width="100" height="50""#));
}

#[test]
fn each_primitive_becomes_one_leaf_element() {
    let frame = RenderFrame::new(Canvas::new(200, 200, 0))
        .with_primitive(
            LinePrimitive::new(0.0, 0.0, 10.0, 10.0, 1.5, Color::BLACK).with_dash(LineDash::Dotted),
        )
        .with_primitive(PolylinePrimitive {
            points: vec![(0.0, 100.0), (50.0, 0.0), (100.0, 100.0)],
            stroke_width: 2.0,
            color: Color::from_rgb8(0x1f, 0x77, 0xb4),
            dash: LineDash::Solid,
        })
        .with_primitive(RectPrimitive::new(
            1.0,
            2.0,
            3.0,
            4.0,
            ShapeStyle::stroked(Color::BLACK, 1.0),
        ))
        .with_primitive(CirclePrimitive::new(5.0, 6.0, 7.0, ShapeStyle::filled(Color::WHITE)))
        .with_primitive(PathPrimitive::new(
            smallvec![
                PathCommand::MoveTo { x: 10.0, y: 0.0 },
                PathCommand::LineTo { x: 0.0, y: 0.0 },
                PathCommand::Close,
            ],
            ShapeStyle::filled(Color::BLACK),
        ))
        .with_primitive(TextPrimitive::new("t", 1.0, 1.0, 10.0, Color::BLACK, TextHAlign::Left));
    let (svg, renderer) = render(&frame, SvgOptions::default());

    assert!(svg.contains(
        r##"<line x1="0" y1="0" x2="10" y2="10" stroke="#000000" stroke-width="1.5" stroke-dasharray="2,2"/>"##
    ));
    assert!(svg.contains(
        r##"<polyline fill="none" stroke="#1f77b4" stroke-width="2" points="0,100 50,0 100,100"/>"##
    ));
    assert!(svg.contains(
        r##"<rect x="1" y="2" width="3" height="4" fill="none" stroke="#000000" stroke-width="1"/>"##
    ));
    assert!(svg.contains(r##"<circle cx="5" cy="6" r="7" fill="#ffffff"/>"##));
    assert!(svg.contains(r##"<path d="M 10,0 L 0,0 Z" fill="#000000"/>"##));
    assert!(svg.contains(
        r##"<text x="1" y="1" text-anchor="start" font-size="10" fill="#000000">t</text>"##
    ));
    assert_eq!(renderer.last_stats().elements_written, 6);
    assert_eq!(renderer.last_stats().interactive_elements, 0);
}

#[test]
fn interactive_shapes_expose_class_and_data_attributes() {
    let frame = RenderFrame::new(Canvas::new(100, 100, 0)).with_primitive(
        CirclePrimitive::new(1.0, 2.0, 3.0, ShapeStyle::filled(Color::BLACK))
            .with_tooltip(tooltip([("x", "1"), ("label", "a \"quoted\" <b>")])),
    );
    let (svg, renderer) = render(&frame, SvgOptions::default());

    assert!(svg.contains(&format!(r#"class="{INTERACTIVE_CLASS}""#)));
    assert!(svg.contains(r#"data-x="1" data-label="a &quot;quoted&quot; &lt;b&gt;""#));
    assert_eq!(renderer.last_stats().interactive_elements, 1);
}

#[test]
fn text_is_escaped_and_rotation_is_emitted() {
    let frame = RenderFrame::new(Canvas::new(100, 100, 0)).with_primitive(
        TextPrimitive::new("a < b & c", 10.0, 50.0, 12.0, Color::BLACK, TextHAlign::Center)
            .rotated(-90.0),
    );
    let (svg, _) = render(&frame, SvgOptions::default());

    assert!(svg.contains(r#"transform="rotate(-90 10 50)""#));
    assert!(svg.contains(">a &lt; b &amp; c</text>"));
}

#[test]
fn translucent_fill_uses_rgba_and_opacity() {
    let color = Color::rgba(1.0, 0.0, 0.0, 0.5);
    let frame = RenderFrame::new(Canvas::new(100, 100, 0)).with_primitive(RectPrimitive::new(
        0.0,
        0.0,
        10.0,
        10.0,
        ShapeStyle::filled(color).with_fill_opacity(0.4),
    ));
    let (svg, _) = render(&frame, SvgOptions::default());

    assert!(svg.contains(r#"fill="rgba(255,0,0,0.5)""#));
    assert!(svg.contains(r#"fill-opacity="0.4""#));
}

#[test]
fn invalid_frames_leave_the_previous_document_untouched() {
    let mut renderer = SvgRenderer::default();
    let valid = RenderFrame::new(Canvas::new(100, 100, 0));
    renderer.render(&valid).expect("valid frame");
    let before = renderer.document().to_owned();

    let invalid = RenderFrame::new(Canvas::new(100, 100, 0)).with_primitive(TextPrimitive::new(
        "",
        0.0,
        0.0,
        10.0,
        Color::BLACK,
        TextHAlign::Left,
    ));
    assert!(renderer.render(&invalid).is_err());
    assert_eq!(renderer.document(), before);
}
