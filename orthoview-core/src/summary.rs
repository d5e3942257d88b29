/// Tabular summary of the projection data
use crate::model::ProjectionPoint;

/// One row of the projection data table, with views already formatted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub id: &'static str,
    pub condition: &'static str,
    pub front: String,
    pub top: String,
}

impl TableRow {
    pub fn from_point(point: &ProjectionPoint) -> Self {
        Self {
            id: point.id,
            condition: point.description,
            front: point.front.to_string(),
            top: point.top.to_string(),
        }
    }
}

pub fn table_rows(points: &[ProjectionPoint]) -> Vec<TableRow> {
    points.iter().map(TableRow::from_point).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::POINTS;

    #[test]
    fn test_one_row_per_point() {
        let rows = table_rows(&POINTS);
        assert_eq!(rows.len(), 9);
        for (row, point) in rows.iter().zip(POINTS.iter()) {
            assert_eq!(row.id, point.id);
            assert_eq!(row.condition, point.description);
        }
    }

    #[test]
    fn test_row_text_for_each_relation() {
        let rows = table_rows(&POINTS);

        // B: above / above
        assert_eq!(rows[1].front, "35 mm above XY");
        assert_eq!(rows[1].top, "50 mm above XY");
        // F: below / on
        assert_eq!(rows[5].front, "45 mm below XY");
        assert_eq!(rows[5].top, "On XY");
        // I: on / on
        assert_eq!(rows[8].front, "On XY");
        assert_eq!(rows[8].top, "On XY");
    }
}
