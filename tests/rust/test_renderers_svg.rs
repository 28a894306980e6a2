use super::*;
use crate::config::RenderOptions;
use crate::{MediationDag, build_plot};

fn render(dag: &MediationDag) -> String {
    SvgRenderer::new().render(&build_plot(dag).unwrap()).unwrap()
}

fn base() -> MediationDag {
    MediationDag::new("Y", "A", ["M1", "M2"])
}

#[test]
fn test_document_shell() {
    let out = render(&base());
    assert!(out.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="480.0" height="239.0""#));
    assert!(out.trim_end().ends_with("</svg>"));
    assert!(out.contains(r#"<marker id="arrowhead""#));
}

#[test]
fn test_one_line_per_edge() {
    assert_eq!(render(&base()).matches(r#"class="edge""#).count(), 3);
    let both = base().basec(["C1"]).postc(["L1"]);
    assert_eq!(render(&both).matches(r#"class="edge""#).count(), 9);
}

#[test]
fn test_nodes_at_scaled_coordinates() {
    let out = render(&base());
    assert!(out.contains(r#"id="node-A""#));
    assert!(out.contains(r#"<circle cx="40.0" cy="140.0" r="18.0" fill="black"/>"#));
    assert!(out.contains(r#"<circle cx="240.0" cy="40.0" r="18.0" fill="black"/>"#));
    assert!(out.contains(r#"<circle cx="440.0" cy="140.0" r="18.0" fill="black"/>"#));
    assert!(!out.contains(r#"id="node-C""#));
}

#[test]
fn test_edge_trimmed_to_node_border() {
    let out = render(&base());
    assert!(out.contains(
        r#"data-from="A" data-to="Y" x1="58.0" y1="140.0" x2="422.0" y2="140.0""#
    ));
}

#[test]
fn test_blank_theme_has_no_panel() {
    let out = render(&base());
    assert!(!out.contains(r#"class="panel""#));
    assert!(!out.contains(r#"class="grid""#));
}

#[test]
fn test_grid_theme_draws_panel() {
    let plot = build_plot(&base()).unwrap().with_theme(Theme::Grid);
    let out = SvgRenderer::new().render(&plot).unwrap();
    assert!(out.contains(r#"class="panel""#));
    // x = 0..4 and y = 0..1
    assert_eq!(out.matches(r#"class="grid""#).count(), 7);
}

#[test]
fn test_grid_lines_capped_for_wide_span() {
    let dag = base().coordinate(Symbol::Y, Point::new(1e17, 0.0));
    let plot = build_plot(&dag).unwrap().with_theme(Theme::Grid);
    let out = SvgRenderer::new().render(&plot).unwrap();
    let lines = out.matches(r#"class="grid""#).count();
    assert!(lines <= 2 * (MAX_GRID_LINES + 1));
    assert!(lines > 2);
}

#[test]
fn test_grid_ticks_one_per_unit_when_narrow() {
    assert_eq!(grid_ticks(-0.5, 2.0), vec![0.0, 1.0, 2.0]);
    assert!(grid_ticks(0.2, 0.8).is_empty());
}

#[test]
fn test_caption_styling() {
    let out = render(&base().caption_size(12.0));
    assert!(out.contains(r#"font-size="12.0" font-style="italic""#));
    assert!(out.contains(r#"text-anchor="start""#));
    assert!(out.contains(">M (Mediator): M1, M2</tspan>"));
}

#[test]
fn test_caption_escaped() {
    let out = render(&MediationDag::new("a<b", "A & B", ["M"]));
    assert!(out.contains("Y (Outcome): a&lt;b"));
    assert!(out.contains("A (Exposure): A &amp; B"));
}

#[test]
fn test_wrapped_caption_rows() {
    let out = render(&base().caption_width(3));
    assert!(out.contains(">M (Mediator): M1,</tspan>"));
    assert!(out.contains(">M2</tspan>"));
}

#[test]
fn test_colors_forwarded() {
    let options = RenderOptions {
        node_color: "#336699".into(),
        text_color: "yellow".into(),
        ..RenderOptions::default()
    };
    let out = render(&base().options(options));
    assert!(out.contains(r##"fill="#336699""##));
    assert!(out.contains(r#"fill="yellow">A</text>"#));
}

#[test]
fn test_no_node_omits_circles() {
    let options = RenderOptions {
        node: false,
        ..RenderOptions::default()
    };
    let out = render(&base().options(options));
    assert!(!out.contains("<circle"));
    assert!(out.contains(r#"fill="black">A</text>"#));
}

#[test]
fn test_bad_color_is_render_error() {
    let options = RenderOptions {
        text_color: "not a color".into(),
        ..RenderOptions::default()
    };
    let err = SvgRenderer::new()
        .render(&build_plot(&base().options(options)).unwrap())
        .unwrap_err();
    assert_eq!(err, RenderError::InvalidColor("not a color".into()));
}

#[test]
fn test_bad_caption_size_is_render_error() {
    let err = SvgRenderer::new()
        .render(&build_plot(&base().caption_size(-3.0)).unwrap())
        .unwrap_err();
    assert_eq!(err, RenderError::InvalidCaptionSize(-3.0));
}
