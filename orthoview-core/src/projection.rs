/// Mapping from projection views to diagram coordinates
use nalgebra::Point2;

use crate::model::{ProjectionPoint, ProjectionView, Relation, ViewKind};

/// Pixels per millimetre
pub const SCALE: f32 = 4.0;
/// Pixel row of the XY line
pub const BASELINE_Y: f32 = 300.0;
pub const START_X: f32 = 90.0;
pub const X_STEP: f32 = 85.0;
pub const CANVAS_WIDTH: f32 = 820.0;
pub const CANVAS_HEIGHT: f32 = 600.0;
/// Front and top rows closer than this are drawn as one
pub const COINCIDENCE_EPSILON: f32 = 0.1;

/// Diagram layout configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub scale: f32,
    pub baseline_y: f32,
    pub start_x: f32,
    pub x_step: f32,
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub coincidence_epsilon: f32,
}

impl Layout {
    pub fn new(canvas_width: f32, canvas_height: f32) -> Self {
        Self {
            scale: SCALE,
            baseline_y: BASELINE_Y,
            start_x: START_X,
            x_step: X_STEP,
            canvas_width,
            canvas_height,
            coincidence_epsilon: COINCIDENCE_EPSILON,
        }
    }

    /// Vertical pixel offset of a view from the XY line (negative is up)
    pub fn offset(&self, view: &ProjectionView) -> f32 {
        let direction = match view.relation {
            Relation::Above => -1.0,
            Relation::Below => 1.0,
            Relation::On => 0.0,
        };
        direction * view.effective_distance() * self.scale
    }

    pub fn view_y(&self, view: &ProjectionView) -> f32 {
        self.baseline_y + self.offset(view)
    }

    /// Horizontal position of the `index`-th point
    pub fn column_x(&self, index: usize) -> f32 {
        self.start_x + index as f32 * self.x_step
    }

    pub fn project<'a>(&self, index: usize, point: &'a ProjectionPoint) -> ProjectedPoint<'a> {
        let x = self.column_x(index);
        let front = Point2::new(x, self.view_y(&point.front));
        let top = Point2::new(x, self.view_y(&point.top));

        ProjectedPoint {
            point,
            front,
            top,
            coincident: is_coincident(front.y, top.y, self.coincidence_epsilon),
        }
    }

    /// Project every point, keeping input order
    pub fn project_all<'a>(&self, points: &'a [ProjectionPoint]) -> Vec<ProjectedPoint<'a>> {
        let projected: Vec<_> = points
            .iter()
            .enumerate()
            .map(|(index, point)| self.project(index, point))
            .collect();

        log::debug!(
            "projected {} points, {} coincident",
            projected.len(),
            projected.iter().filter(|p| p.coincident).count()
        );
        projected
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(CANVAS_WIDTH, CANVAS_HEIGHT)
    }
}

/// A point placed on the diagram canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedPoint<'a> {
    pub point: &'a ProjectionPoint,
    pub front: Point2<f32>,
    pub top: Point2<f32>,
    pub coincident: bool,
}

impl ProjectedPoint<'_> {
    pub fn x(&self) -> f32 {
        self.front.x
    }

    pub fn position(&self, kind: ViewKind) -> Point2<f32> {
        match kind {
            ViewKind::Front => self.front,
            ViewKind::Top => self.top,
        }
    }
}

pub fn is_coincident(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() < epsilon
}
