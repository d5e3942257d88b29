/// Compiled-in points, captions and legend for the projection page
use crate::model::{LegendItem, ProjectionPoint, ProjectionView, QuadrantZone};

pub const PAGE_TITLE: &str = "Orthographic Projection Explorer";

pub const PAGE_DESCRIPTION: &str = "Visualize the front and top views of points located in \
different quadrants relative to HP and VP.";

pub const POINTS: [ProjectionPoint; 9] = [
    ProjectionPoint {
        id: "A",
        label: "First quadrant",
        description: "25 mm above HP and 45 mm in front of VP. Front view is above XY, \
top view is below XY.",
        quadrant: "First quadrant",
        front: ProjectionView::above(25.0),
        top: ProjectionView::below(45.0),
    },
    ProjectionPoint {
        id: "B",
        label: "Second quadrant",
        description: "35 mm above HP and 50 mm behind VP. Front view above XY, top view above XY.",
        quadrant: "Second quadrant",
        front: ProjectionView::above(35.0),
        top: ProjectionView::above(50.0),
    },
    ProjectionPoint {
        id: "C",
        label: "Third quadrant",
        description: "45 mm below HP and 30 mm behind VP. Front view below XY, top view above XY.",
        quadrant: "Third quadrant",
        front: ProjectionView::below(45.0),
        top: ProjectionView::above(30.0),
    },
    ProjectionPoint {
        id: "D",
        label: "Fourth quadrant",
        description: "30 mm below HP and 40 mm in front of VP. Front view below XY, \
top view below XY.",
        quadrant: "Fourth quadrant",
        front: ProjectionView::below(30.0),
        top: ProjectionView::below(40.0),
    },
    ProjectionPoint {
        id: "E",
        label: "On VP",
        description: "50 mm above HP and on VP. Top view lies on XY line.",
        quadrant: "On VP",
        front: ProjectionView::above(50.0),
        top: ProjectionView::on(),
    },
    ProjectionPoint {
        id: "F",
        label: "On VP",
        description: "45 mm below HP and on VP. Top view lies on XY line.",
        quadrant: "On VP",
        front: ProjectionView::below(45.0),
        top: ProjectionView::on(),
    },
    ProjectionPoint {
        id: "G",
        label: "On HP (in front of VP)",
        description: "On HP and 35 mm in front of VP. Front view lies on XY line.",
        quadrant: "On HP",
        front: ProjectionView::on(),
        top: ProjectionView::below(35.0),
    },
    ProjectionPoint {
        id: "H",
        label: "On HP (behind VP)",
        description: "On HP and 25 mm behind VP. Front view lies on XY line.",
        quadrant: "On HP",
        front: ProjectionView::on(),
        top: ProjectionView::above(25.0),
    },
    ProjectionPoint {
        id: "I",
        label: "On both HP and VP",
        description: "The point lies on both reference planes. Both views coincide on XY line.",
        quadrant: "On HP & VP",
        front: ProjectionView::on(),
        top: ProjectionView::on(),
    },
];

pub const QUADRANT_ZONES: [QuadrantZone; 4] = [
    QuadrantZone {
        label: "Front views above HP",
        description: "Points located above the HP project above the XY line in the front view.",
        x: 18.0,
        y: 55.0,
    },
    QuadrantZone {
        label: "Top views behind VP",
        description: "Behind VP projects above XY in the top view (2nd & 3rd quadrants).",
        x: 18.0,
        y: 220.0,
    },
    QuadrantZone {
        label: "Front views below HP",
        description: "Points below HP appear below the XY line in the front view.",
        x: 18.0,
        y: 355.0,
    },
    QuadrantZone {
        label: "Top views in front of VP",
        description: "In front of VP projects below XY in the top view (1st & 4th quadrants).",
        x: 18.0,
        y: 520.0,
    },
];

pub const LEGEND_ITEMS: [LegendItem; 3] = [
    LegendItem {
        label: "Front view ( elevation )",
        color: "#2563eb",
    },
    LegendItem {
        label: "Top view ( plan )",
        color: "#16a34a",
    },
    LegendItem {
        label: "Projector",
        color: "rgba(15, 23, 42, 0.4)",
    },
];
