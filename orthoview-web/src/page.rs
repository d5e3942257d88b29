/// HTML document for the projection explorer
use std::fmt;

use orthoview_core::{
    table_rows, Layout, LegendItem, ProjectionPoint, QuadrantZone, LEGEND_ITEMS,
    PAGE_DESCRIPTION, PAGE_TITLE, POINTS, QUADRANT_ZONES,
};

use crate::diagram::Diagram;
use crate::markup::Escaped;

/// Stylesheet for the page. Defines the CSS variables the diagram fills with.
pub const STYLESHEET: &str = include_str!("../assets/style.css");

/// Everything the page renders from. `Default` uses the compiled-in catalog.
#[derive(Debug, Clone, Copy)]
pub struct Page<'a> {
    pub layout: Layout,
    pub points: &'a [ProjectionPoint],
    pub zones: &'a [QuadrantZone],
    pub legend: &'a [LegendItem],
}

impl Default for Page<'static> {
    fn default() -> Self {
        Self {
            layout: Layout::default(),
            points: &POINTS,
            zones: &QUADRANT_ZONES,
            legend: &LEGEND_ITEMS,
        }
    }
}

impl Page<'_> {
    /// Only the `<main>` element, for mounting into an existing document
    pub fn render_main(&self) -> String {
        MainContent(self).to_string()
    }
}

/// The complete HTML document
impl fmt::Display for Page<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<!DOCTYPE html>")?;
        writeln!(f, r#"<html lang="en">"#)?;
        writeln!(f, "<head>")?;
        writeln!(f, r#"<meta charset="utf-8">"#)?;
        writeln!(
            f,
            r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#
        )?;
        writeln!(f, "<title>{}</title>", Escaped(PAGE_TITLE))?;
        writeln!(
            f,
            r#"<meta name="description" content="{}">"#,
            Escaped(PAGE_DESCRIPTION)
        )?;
        writeln!(f, "<style>\n{}</style>", STYLESHEET)?;
        writeln!(f, "</head>")?;
        writeln!(f, "<body>")?;
        write!(f, "{}", MainContent(self))?;
        writeln!(f, "</body>")?;
        writeln!(f, "</html>")
    }
}

struct MainContent<'p, 'a>(&'p Page<'a>);

impl fmt::Display for MainContent<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let page = self.0;

        writeln!(f, "<main>")?;
        write_intro(f)?;

        writeln!(f, r#"<section class="chart-container">"#)?;
        writeln!(f, r#"<div class="chart-card">"#)?;
        writeln!(f, "<h2>XY Reference Diagram</h2>")?;
        writeln!(
            f,
            "<p>The XY line separates elevations (front views) above from plans (top views) \
             below. Points behind the VP plot above the XY line in plan, while points in front \
             plot below.</p>"
        )?;
        writeln!(f, r#"<div class="diagram-wrapper">"#)?;
        write!(
            f,
            "{}",
            Diagram {
                layout: &page.layout,
                points: page.points,
                zones: page.zones,
            }
        )?;
        writeln!(f, "</div>")?;
        writeln!(f, "</div>")?;
        write_legend(f, page.legend)?;
        writeln!(f, "</section>")?;

        write_table(f, page.points)?;
        writeln!(f, "</main>")
    }
}

fn write_intro(f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "<section>")?;
    writeln!(f, "<h1>{}</h1>", Escaped(PAGE_TITLE))?;
    writeln!(
        f,
        "<p>Inspect how a point in space projects onto the principal reference planes. Each \
         point is plotted with its front view (elevation) and top view (plan) relative to the \
         XY reference line. Distances are preserved from the input data so you can see the \
         exact layout for all quadrants and edge cases.</p>"
    )?;
    writeln!(f, "</section>")
}

fn write_legend(f: &mut fmt::Formatter<'_>, legend: &[LegendItem]) -> fmt::Result {
    writeln!(f, r#"<div class="chart-card">"#)?;
    writeln!(f, "<h2>Legend</h2>")?;
    writeln!(f, r#"<div class="legend">"#)?;
    for item in legend {
        writeln!(
            f,
            r#"<div class="legend-row"><span class="legend-color" style="background: {}" aria-hidden="true"></span><span>{}</span></div>"#,
            Escaped(item.color),
            Escaped(item.label)
        )?;
    }
    writeln!(f, "</div>")?;
    writeln!(
        f,
        "<p>Quadrant badges in the table highlight how each point relates to the horizontal \
         plane (HP) and vertical plane (VP). Use the diagram to see the exact placement of \
         elevation and plan for quick verification.</p>"
    )?;
    writeln!(f, "</div>")
}

fn write_table(f: &mut fmt::Formatter<'_>, points: &[ProjectionPoint]) -> fmt::Result {
    writeln!(f, r#"<section class="chart-card">"#)?;
    writeln!(f, "<h2>Projection Data</h2>")?;
    writeln!(f, r#"<table class="table">"#)?;
    writeln!(
        f,
        "<thead><tr><th>Point</th><th>Quadrant / Condition</th>\
         <th>Front view (a&#8242;)</th><th>Top view (a)</th></tr></thead>"
    )?;
    writeln!(f, "<tbody>")?;
    for row in table_rows(points) {
        writeln!(
            f,
            r#"<tr><td><span class="badge">{}</span></td><td>{}</td><td>{}</td><td>{}</td></tr>"#,
            Escaped(row.id),
            Escaped(row.condition),
            Escaped(&row.front),
            Escaped(&row.top)
        )?;
    }
    writeln!(f, "</tbody>")?;
    writeln!(f, "</table>")?;
    writeln!(f, "</section>")
}
