/// ASCII rasterizer for terminal previews of the XY diagram
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use nalgebra::{Matrix3, Point2};
use std::io::Write;
use orthoview_core::{Layout, ProjectedPoint, Transform, ViewKind};

const XY_CHAR: char = '─';
const PROJECTOR_CHAR: char = ':';
const COINCIDENT_CHAR: char = '@';
const XY_CAPTION: &str = "XY";

/// What a cell depicts, used to pick its colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Blank,
    Reference,
    Projector,
    Front,
    Top,
    Coincident,
}

impl Tone {
    pub fn color(self) -> Color {
        match self {
            Tone::Blank | Tone::Projector => Color::DarkGrey,
            Tone::Reference => Color::White,
            Tone::Front => Color::Blue,
            Tone::Top => Color::Green,
            Tone::Coincident => Color::Yellow,
        }
    }
}

/// Character raster of the diagram canvas
pub struct AsciiRenderer {
    width: usize,
    height: usize,
    char_buffer: Vec<char>,
    tone_buffer: Vec<Tone>,
}

impl AsciiRenderer {
    pub fn new(width: usize, height: usize) -> Self {
        let size = width * height;
        Self {
            width,
            height,
            char_buffer: vec![' '; size],
            tone_buffer: vec![Tone::Blank; size],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn clear(&mut self) {
        self.char_buffer.fill(' ');
        self.tone_buffer.fill(Tone::Blank);
    }

    /// Character and tone at a cell, if it is on the grid
    pub fn cell(&self, col: usize, row: usize) -> Option<(char, Tone)> {
        if col >= self.width || row >= self.height {
            return None;
        }
        let idx = row * self.width + col;
        Some((self.char_buffer[idx], self.tone_buffer[idx]))
    }

    pub fn render_diagram(&mut self, projected: &[ProjectedPoint<'_>], layout: &Layout) {
        let matrix = Transform::canvas_to_grid(layout, self.width, self.height);

        let (_, xy_row) = Transform::to_cell(&matrix, &Point2::new(0.0, layout.baseline_y));
        for col in 0..self.width as i32 {
            self.plot(col, xy_row, XY_CHAR, Tone::Reference);
        }
        self.put_text(0, xy_row.saturating_sub(1), XY_CAPTION, Tone::Reference);

        // Projectors first so markers overwrite their ends
        for point in projected {
            self.render_projector(point, &matrix);
        }
        for point in projected {
            self.render_markers(point, &matrix);
        }
    }

    fn render_projector(&mut self, point: &ProjectedPoint<'_>, matrix: &Matrix3<f32>) {
        let (col, front_row) = Transform::to_cell(matrix, &point.position(ViewKind::Front));
        let (_, top_row) = Transform::to_cell(matrix, &point.position(ViewKind::Top));

        let first = front_row.min(top_row).max(0);
        let last = front_row.max(top_row).min(self.height as i32 - 1);

        // Dashed: every other row, skipping the XY line itself
        for row in first..=last {
            if row % 2 == 0 && self.tone_at(col, row) == Some(Tone::Blank) {
                self.plot(col, row, PROJECTOR_CHAR, Tone::Projector);
            }
        }
    }

    fn render_markers(&mut self, point: &ProjectedPoint<'_>, matrix: &Matrix3<f32>) {
        let front = point.position(ViewKind::Front);
        let top = point.position(ViewKind::Top);
        let (col, front_row) = Transform::to_cell(matrix, &front);
        let (_, mut top_row) = Transform::to_cell(matrix, &top);

        if point.coincident {
            self.plot(col, top_row, COINCIDENT_CHAR, Tone::Coincident);
            self.put_text(
                col.saturating_add(1),
                top_row.saturating_sub(1),
                point.point.id,
                Tone::Coincident,
            );
            return;
        }

        // Distinct views sharing a cell: push the top view one row outwards
        if top_row == front_row {
            top_row = if top.y > front.y {
                top_row.saturating_add(1)
            } else {
                top_row.saturating_sub(1)
            };
        }

        // Front view reads as A' and top view as a, as on a drawing sheet
        if let Some(c) = point.point.id.chars().next() {
            self.plot(col, front_row, c, Tone::Front);
            self.put_text(col.saturating_add(1), front_row, "'", Tone::Front);
            self.plot(col, top_row, c.to_ascii_lowercase(), Tone::Top);
        }
    }

    fn tone_at(&self, col: i32, row: i32) -> Option<Tone> {
        if col < 0 || row < 0 {
            return None;
        }
        self.cell(col as usize, row as usize).map(|(_, tone)| tone)
    }

    fn plot(&mut self, col: i32, row: i32, c: char, tone: Tone) {
        if col < 0 || row < 0 || col as usize >= self.width || row as usize >= self.height {
            return;
        }
        let idx = row as usize * self.width + col as usize;
        self.char_buffer[idx] = c;
        self.tone_buffer[idx] = tone;
    }

    fn put_text(&mut self, col: i32, row: i32, text: &str, tone: Tone) {
        for (offset, c) in text.chars().enumerate() {
            self.plot(col.saturating_add(offset as i32), row, c, tone);
        }
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for y in 0..self.height {
            let mut current = None;
            for x in 0..self.width {
                let idx = y * self.width + x;
                let tone = self.tone_buffer[idx];

                if current != Some(tone) {
                    writer.queue(SetForegroundColor(tone.color()))?;
                    current = Some(tone);
                }
                writer.queue(Print(self.char_buffer[idx]))?;
            }
            writer.queue(ResetColor)?;
            writer.queue(Print('\n'))?;
        }
        Ok(())
    }
}
