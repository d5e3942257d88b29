/// Terminal preview of the projection explorer
use crossterm::{
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
};
use std::io::{self, Write};
use orthoview_core::{table_rows, Layout, LEGEND_ITEMS, PAGE_TITLE, POINTS};

pub mod renderer;

pub use renderer::{AsciiRenderer, Tone};

/// Rows used by the title, legend and table around the diagram
const CHROME_ROWS: u16 = 8 + POINTS.len() as u16;
const MIN_DIAGRAM_ROWS: u16 = 12;

/// Static, single-pass text rendition of the page
pub struct TerminalPreview {
    layout: Layout,
    renderer: AsciiRenderer,
}

impl TerminalPreview {
    pub fn new(cols: u16, rows: u16) -> Self {
        let diagram_rows = rows.saturating_sub(CHROME_ROWS).max(MIN_DIAGRAM_ROWS);
        log::debug!("terminal preview sized {}x{} (diagram rows {})", cols, rows, diagram_rows);

        Self {
            layout: Layout::default(),
            renderer: AsciiRenderer::new(cols as usize, diagram_rows as usize),
        }
    }

    pub fn render<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let projected = self.layout.project_all(&POINTS);

        self.renderer.clear();
        self.renderer.render_diagram(&projected, &self.layout);

        queue!(
            out,
            SetAttribute(Attribute::Bold),
            Print(PAGE_TITLE),
            SetAttribute(Attribute::Reset),
            Print('\n'),
            Print('\n')
        )?;

        self.renderer.draw(out)?;

        queue!(
            out,
            Print('\n'),
            SetForegroundColor(Tone::Front.color()),
            Print("A' "),
            ResetColor,
            Print(LEGEND_ITEMS[0].label),
            Print("   "),
            SetForegroundColor(Tone::Top.color()),
            Print("a "),
            ResetColor,
            Print(LEGEND_ITEMS[1].label),
            Print("   "),
            SetForegroundColor(Tone::Projector.color()),
            Print(": "),
            ResetColor,
            Print(LEGEND_ITEMS[2].label),
            Print("   "),
            SetForegroundColor(Tone::Coincident.color()),
            Print("@ "),
            ResetColor,
            Print("Coincident views"),
            Print('\n'),
            Print('\n')
        )?;

        queue!(
            out,
            SetAttribute(Attribute::Bold),
            Print(format!("{:<6} {:<18} {:<16} {}", "Point", "Quadrant", "Front view", "Top view")),
            SetAttribute(Attribute::Reset),
            Print('\n')
        )?;
        for (row, point) in table_rows(&POINTS).iter().zip(POINTS.iter()) {
            queue!(
                out,
                SetForegroundColor(Color::Cyan),
                Print(format!("{:<6} ", row.id)),
                ResetColor,
                Print(format!("{:<18} {:<16} {}", point.quadrant, row.front, row.top)),
                Print('\n')
            )?;
        }

        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_keeps_minimum_diagram_height() {
        let preview = TerminalPreview::new(80, 10);
        assert_eq!(preview.renderer.width(), 80);
        assert_eq!(preview.renderer.height(), MIN_DIAGRAM_ROWS as usize);
    }

    #[test]
    fn test_render_contains_title_and_table() {
        let mut preview = TerminalPreview::new(100, 40);
        let mut out = Vec::new();
        preview.render(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains(PAGE_TITLE));
        assert!(text.contains("Coincident views"));
        for point in &POINTS {
            assert!(text.contains(&point.front.to_string()));
        }
        assert!(text.contains("On HP & VP"));
    }

    #[test]
    fn test_render_is_repeatable() {
        let mut preview = TerminalPreview::new(100, 40);
        let mut first = Vec::new();
        let mut second = Vec::new();
        preview.render(&mut first).unwrap();
        preview.render(&mut second).unwrap();
        assert_eq!(first, second);
    }
}
