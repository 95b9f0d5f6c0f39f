// Geometry projector - Street records to drawable shapes
use crate::domain::map::{DrawBatch, DrawInstruction, PolylineStyle};
use crate::domain::street::{Endpoint, EndpointRole, LatLng, StreetRecord};

/// Renderable shape of one street: the full path plus its two endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct StreetShape {
    pub path: Vec<LatLng>,
    pub endpoints: [Endpoint; 2],
}

#[derive(Debug, Clone, PartialEq)]
pub enum Projection {
    Shape(StreetShape),
    /// Record has no coordinates and contributes nothing to the map
    Skip,
}

/// Derive the path and the start/end markers of a record.
///
/// Intermediate vertices are only drawn as part of the path, never marked.
/// A single-point record yields two endpoints at the same position.
pub fn project(record: &StreetRecord) -> Projection {
    let (Some(first), Some(last)) = (record.coordinates.first(), record.coordinates.last()) else {
        return Projection::Skip;
    };

    Projection::Shape(StreetShape {
        path: record.coordinates.clone(),
        endpoints: [
            Endpoint::new(*first, record, EndpointRole::Start),
            Endpoint::new(*last, record, EndpointRole::End),
        ],
    })
}

impl StreetShape {
    /// Start marker, end marker, then the connecting polyline
    pub fn into_batch(self, label: &str, style: &PolylineStyle) -> DrawBatch {
        let [start, end] = &self.endpoints;
        DrawBatch {
            instructions: vec![
                DrawInstruction::marker(start),
                DrawInstruction::marker(end),
                DrawInstruction::Polyline {
                    vertices: self.path,
                    color: style.color.clone(),
                    label: label.to_string(),
                },
            ],
        }
    }
}

/// One draw batch per renderable record, lazily and in input order.
///
/// Calling it again on the same records yields the same batches.
pub fn draw_batches<'a>(
    records: &'a [StreetRecord],
    style: &'a PolylineStyle,
) -> impl Iterator<Item = DrawBatch> + 'a {
    records.iter().filter_map(move |record| match project(record) {
        Projection::Shape(shape) => Some(shape.into_batch(&record.name, style)),
        Projection::Skip => {
            tracing::debug!("Skipping street {} ({}): no coordinates", record.name, record.location);
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn street(name: &str, points: &[(f64, f64)]) -> StreetRecord {
        StreetRecord::new(
            name,
            "Sector A",
            points.iter().map(|&(lat, lng)| LatLng::new(lat, lng)).collect(),
        )
    }

    fn shape(record: &StreetRecord) -> StreetShape {
        match project(record) {
            Projection::Shape(shape) => shape,
            Projection::Skip => panic!("expected a shape for {}", record.name),
        }
    }

    fn blue() -> PolylineStyle {
        PolylineStyle {
            color: "blue".to_string(),
        }
    }

    #[test]
    fn test_path_is_coordinates_unchanged() {
        // repeated and out-of-order points must survive as is
        let record = street(
            "Jinnah Ave",
            &[(33.70, 73.06), (33.68, 73.04), (33.68, 73.04), (33.72, 73.01)],
        );

        assert_eq!(shape(&record).path, record.coordinates);
    }

    #[test]
    fn test_endpoints_are_first_and_last() {
        let record = street("Jinnah Ave", &[(33.68, 73.04), (33.69, 73.05), (33.70, 73.06)]);
        let [start, end] = shape(&record).endpoints;

        assert_eq!(start.position, LatLng::new(33.68, 73.04));
        assert_eq!(start.role, EndpointRole::Start);
        assert_eq!(end.position, LatLng::new(33.70, 73.06));
        assert_eq!(end.role, EndpointRole::End);
        assert_eq!(start.name, "Jinnah Ave");
        assert_eq!(end.location, "Sector A");
    }

    #[test]
    fn test_single_point_endpoints_coincide() {
        let record = street("Dead End", &[(33.68, 73.04)]);
        let shape = shape(&record);

        assert_eq!(shape.path.len(), 1);
        assert_eq!(shape.endpoints[0].position, shape.endpoints[1].position);
        assert_eq!(shape.endpoints[0].role, EndpointRole::Start);
        assert_eq!(shape.endpoints[1].role, EndpointRole::End);
    }

    #[test]
    fn test_empty_record_is_skipped() {
        let record = street("Ghost Rd", &[]);
        let style = blue();

        assert_eq!(project(&record), Projection::Skip);
        assert_eq!(draw_batches(std::slice::from_ref(&record), &style).count(), 0);
    }

    #[test]
    fn test_batches_keep_input_order() {
        let records = vec![
            street("B Street", &[(1.0, 1.0), (2.0, 2.0)]),
            street("Empty", &[]),
            street("A Street", &[(3.0, 3.0)]),
        ];
        let style = blue();

        let labels: Vec<String> = draw_batches(&records, &style)
            .map(|batch| match &batch.instructions[2] {
                DrawInstruction::Polyline { label, .. } => label.clone(),
                other => panic!("expected polyline, got {:?}", other),
            })
            .collect();

        assert_eq!(labels, vec!["B Street", "A Street"]);
    }

    #[test]
    fn test_batch_contents_and_restartable() {
        let records = vec![street("Main St", &[(33.68, 73.04), (33.70, 73.06)])];
        let style = blue();

        let first: Vec<DrawBatch> = draw_batches(&records, &style).collect();
        let second: Vec<DrawBatch> = draw_batches(&records, &style).collect();
        assert_eq!(first, second);

        let instructions = &first[0].instructions;
        assert_eq!(instructions.len(), 3);
        match &instructions[0] {
            DrawInstruction::Marker { position, label, .. } => {
                assert_eq!(*position, LatLng::new(33.68, 73.04));
                assert_eq!(label.title, "Main St");
                assert_eq!(label.caption, "Start - Sector A");
            }
            other => panic!("expected start marker, got {:?}", other),
        }
        match &instructions[2] {
            DrawInstruction::Polyline { vertices, color, .. } => {
                assert_eq!(vertices.len(), 2);
                assert_eq!(color, "blue");
            }
            other => panic!("expected polyline, got {:?}", other),
        }
    }
}
