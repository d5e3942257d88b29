/// Points in space and their projections onto the reference planes
use nalgebra::Point2;
use std::fmt;

/// Where a projection falls relative to the XY line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    Above,
    Below,
    On,
}

impl Relation {
    pub fn as_str(self) -> &'static str {
        match self {
            Relation::Above => "above",
            Relation::Below => "below",
            Relation::On => "on",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which of the two principal projections of a point is meant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    /// Elevation, projected onto the VP
    Front,
    /// Plan, projected onto the HP
    Top,
}

/// One projection of a point: its side of the XY line and distance in millimetres
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionView {
    pub relation: Relation,
    pub distance: f32,
}

impl ProjectionView {
    pub const fn above(distance: f32) -> Self {
        Self {
            relation: Relation::Above,
            distance,
        }
    }

    pub const fn below(distance: f32) -> Self {
        Self {
            relation: Relation::Below,
            distance,
        }
    }

    pub const fn on() -> Self {
        Self {
            relation: Relation::On,
            distance: 0.0,
        }
    }

    pub fn is_on_xy(&self) -> bool {
        self.relation == Relation::On
    }

    /// Distance from the XY line. A view lying on the line has none,
    /// whatever `distance` holds.
    pub fn effective_distance(&self) -> f32 {
        match self.relation {
            Relation::On => 0.0,
            Relation::Above | Relation::Below => self.distance,
        }
    }
}

/// Table notation: `On XY` or `<distance> mm <relation> XY`
impl fmt::Display for ProjectionView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_on_xy() {
            return f.write_str("On XY");
        }
        write!(f, "{} mm {} XY", self.effective_distance(), self.relation)
    }
}

/// A labelled point with its front and top views
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionPoint {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub quadrant: &'static str,
    pub front: ProjectionView,
    pub top: ProjectionView,
}

/// Static caption anchored on the diagram canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadrantZone {
    pub label: &'static str,
    pub description: &'static str,
    pub x: f32,
    pub y: f32,
}

impl QuadrantZone {
    pub fn position(&self) -> Point2<f32> {
        Point2::new(self.x, self.y)
    }
}

/// Legend entry with a CSS colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegendItem {
    pub label: &'static str,
    pub color: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_on_view_formats_as_on_xy() {
        assert_eq!(ProjectionView::on().to_string(), "On XY");
    }

    #[test]
    fn test_offset_views_format_with_distance() {
        assert_eq!(ProjectionView::above(25.0).to_string(), "25 mm above XY");
        assert_eq!(ProjectionView::below(45.0).to_string(), "45 mm below XY");
        assert_eq!(ProjectionView::below(12.5).to_string(), "12.5 mm below XY");
    }

    #[test]
    fn test_on_view_ignores_stored_distance() {
        let view = ProjectionView {
            relation: Relation::On,
            distance: 30.0,
        };
        assert_eq!(view.effective_distance(), 0.0);
        assert_eq!(view.to_string(), "On XY");
        assert!(view.is_on_xy());
    }
}
