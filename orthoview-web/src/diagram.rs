/// Inline SVG rendering of the XY reference diagram
use std::fmt;

use orthoview_core::{Layout, ProjectedPoint, ProjectionPoint, QuadrantZone, ViewKind};

use crate::markup::Escaped;

const GRID_SIZE: u32 = 40;
const MARKER_RADIUS: f32 = 9.0;
const XY_CAPTION: &str = "XY (Intersection of HP & VP)";
const COINCIDENT_CAPTION: &str = "Coincident views";

/// The SVG diagram: grid, zone captions, XY line and every projected point
pub struct Diagram<'a> {
    pub layout: &'a Layout,
    pub points: &'a [ProjectionPoint],
    pub zones: &'a [QuadrantZone],
}

impl fmt::Display for Diagram<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.layout.canvas_width;
        let height = self.layout.canvas_height;
        let baseline = self.layout.baseline_y;

        writeln!(
            f,
            r#"<svg class="diagram" viewBox="0 0 {width} {height}" role="img" aria-labelledby="diagram-title">"#
        )?;
        writeln!(
            f,
            r#"<title id="diagram-title">Orthographic projections showing front and top views for labelled points.</title>"#
        )?;
        writeln!(
            f,
            r#"<defs><pattern id="grid" width="{GRID_SIZE}" height="{GRID_SIZE}" patternUnits="userSpaceOnUse"><path d="M {GRID_SIZE} 0 L 0 0 0 {GRID_SIZE}" fill="none" stroke="var(--grid-line)" stroke-width="1"/></pattern></defs>"#
        )?;
        writeln!(
            f,
            r#"<rect x="0" y="0" width="{width}" height="{height}" fill="url(#grid)"/>"#
        )?;

        for zone in self.zones {
            write_zone(f, zone)?;
        }

        writeln!(
            f,
            r#"<line x1="0" y1="{baseline}" x2="{width}" y2="{baseline}" stroke="var(--foreground)" stroke-width="2"/>"#
        )?;
        writeln!(
            f,
            r#"<text x="10" y="{}" class="annotation">{}</text>"#,
            baseline - 10.0,
            Escaped(XY_CAPTION)
        )?;

        for projected in self.layout.project_all(self.points) {
            write_point(f, &projected)?;
        }

        writeln!(f, "</svg>")
    }
}

fn write_zone(f: &mut fmt::Formatter<'_>, zone: &QuadrantZone) -> fmt::Result {
    let anchor = zone.position();
    writeln!(
        f,
        r#"<text x="{}" y="{}" class="grid-label">{}</text>"#,
        anchor.x,
        anchor.y,
        Escaped(zone.label)
    )?;
    writeln!(
        f,
        r#"<text x="{}" y="{}" class="grid-label" style="font-size: 0.75rem">{}</text>"#,
        anchor.x,
        anchor.y + 16.0,
        Escaped(zone.description)
    )
}

fn write_point(f: &mut fmt::Formatter<'_>, projected: &ProjectedPoint<'_>) -> fmt::Result {
    let x = projected.x();
    let front_y = projected.position(ViewKind::Front).y;
    let top_y = projected.position(ViewKind::Top).y;

    writeln!(
        f,
        r#"<line x1="{x}" y1="{front_y}" x2="{x}" y2="{top_y}" stroke="rgba(15, 23, 42, 0.35)" stroke-dasharray="6 6"/>"#
    )?;

    write_marker(f, projected, ViewKind::Front)?;
    write_marker(f, projected, ViewKind::Top)?;

    if projected.coincident {
        writeln!(
            f,
            r#"<text x="{}" y="{}" class="annotation">{COINCIDENT_CAPTION}</text>"#,
            x + 14.0,
            top_y - 18.0
        )?;
    }

    Ok(())
}

/// Marker circle and label for one view. Front labels carry a prime.
fn write_marker(
    f: &mut fmt::Formatter<'_>,
    projected: &ProjectedPoint<'_>,
    kind: ViewKind,
) -> fmt::Result {
    let id = Escaped(projected.point.id);
    let position = projected.position(kind);
    let (x, y) = (position.x, position.y);

    match kind {
        ViewKind::Front => {
            writeln!(f, r#"<g class="point-front">"#)?;
            writeln!(
                f,
                r#"<circle cx="{x}" cy="{y}" r="{MARKER_RADIUS}" fill="var(--primary-light)"/>"#
            )?;
            writeln!(
                f,
                r#"<text x="{x}" y="{}" text-anchor="middle" class="point-label" fill="var(--primary)"><tspan>{id}</tspan><tspan>&#8242;</tspan></text>"#,
                y - 15.0
            )?;
        }
        ViewKind::Top => {
            writeln!(f, r#"<g class="point-top">"#)?;
            writeln!(
                f,
                r#"<circle cx="{x}" cy="{y}" r="{MARKER_RADIUS}" fill="rgba(134, 239, 172, 0.6)"/>"#
            )?;
            writeln!(
                f,
                r##"<text x="{x}" y="{}" text-anchor="middle" class="point-label" fill="#15803d">{id}</text>"##,
                y + 24.0
            )?;
        }
    }
    writeln!(f, "</g>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use orthoview_core::{POINTS, QUADRANT_ZONES};

    fn render() -> String {
        let layout = Layout::default();
        Diagram {
            layout: &layout,
            points: &POINTS,
            zones: &QUADRANT_ZONES,
        }
        .to_string()
    }

    #[test]
    fn test_canvas_dimensions() {
        let svg = render();
        assert!(svg.starts_with(r#"<svg class="diagram" viewBox="0 0 820 600""#));
        assert!(svg.contains(r#"<rect x="0" y="0" width="820" height="600" fill="url(#grid)"/>"#));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_xy_line_and_caption() {
        let svg = render();
        assert!(svg.contains(r#"<line x1="0" y1="300" x2="820" y2="300""#));
        assert!(svg.contains(
            r#"<text x="10" y="290" class="annotation">XY (Intersection of HP &amp; VP)</text>"#
        ));
    }

    #[test]
    fn test_zone_captions_are_stacked() {
        let svg = render();
        assert!(svg.contains(r#"<text x="18" y="55" class="grid-label">Front views above HP</text>"#));
        assert!(svg.contains(r#"<text x="18" y="71" class="grid-label" style="font-size: 0.75rem">"#));
        assert!(svg.contains("(2nd &amp; 3rd quadrants)"));
    }

    #[test]
    fn test_first_point_markers() {
        let svg = render();
        assert!(svg.contains(r#"<line x1="90" y1="200" x2="90" y2="480""#));
        assert!(svg.contains(r#"<circle cx="90" cy="200" r="9""#));
        assert!(svg.contains(r#"<text x="90" y="185" text-anchor="middle""#));
        assert!(svg.contains(r#"<circle cx="90" cy="480" r="9""#));
        assert!(svg.contains(r#"<text x="90" y="504" text-anchor="middle""#));
    }

    #[test]
    fn test_coincident_annotation_only_for_point_on_both_planes() {
        let svg = render();
        assert_eq!(svg.matches(COINCIDENT_CAPTION).count(), 1);
        // I is the ninth point: x = 90 + 8 * 85 = 770, both views at y = 300
        assert!(svg.contains(
            r#"<text x="784" y="282" class="annotation">Coincident views</text>"#
        ));
    }

    #[test]
    fn test_every_point_has_two_markers() {
        let svg = render();
        assert_eq!(svg.matches("<circle").count(), POINTS.len() * 2);
        assert_eq!(svg.matches("stroke-dasharray=\"6 6\"").count(), POINTS.len());
    }

    #[test]
    fn test_front_marker_precedes_top_marker() {
        let svg = render();
        assert_eq!(svg.matches(r#"<g class="point-front">"#).count(), POINTS.len());
        assert_eq!(svg.matches(r#"<g class="point-top">"#).count(), POINTS.len());
        let front = svg.find(r#"<circle cx="90" cy="200""#).unwrap();
        let top = svg.find(r#"<circle cx="90" cy="480""#).unwrap();
        assert!(front < top);
    }
}
