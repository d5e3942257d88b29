/// Orthoview Core Library - Projection data and layout logic
///
/// This library holds the compiled-in catalog of points, the mapping from
/// front/top views to diagram coordinates, and the table summary shared by
/// the web and terminal renderers.

pub mod catalog;
pub mod model;
pub mod projection;
pub mod summary;
pub mod transform;

// Re-export commonly used types
pub use catalog::{LEGEND_ITEMS, PAGE_DESCRIPTION, PAGE_TITLE, POINTS, QUADRANT_ZONES};
pub use model::{LegendItem, ProjectionPoint, ProjectionView, QuadrantZone, Relation, ViewKind};
pub use projection::{Layout, ProjectedPoint};
pub use summary::{table_rows, TableRow};
pub use transform::Transform;
