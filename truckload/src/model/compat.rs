use crate::entities::Dataset;

/// Precomputed legality of every (shipment, truck type) pairing.
///
/// A shipment may only ride trucks of a type serving exactly its lane: equal
/// origin and equal destination, compared as exact strings. No case folding,
/// no whitespace trimming: a blank or misspelled lane simply matches nothing
/// and surfaces later as infeasibility for that shipment.
///
/// Computed once per solve, before variable allocation, and never refreshed
/// mid-build.
#[derive(Debug, Clone)]
pub struct CompatIndex {
    n_truck_types: usize,
    /// Flat shipment-major matrix
    matrix: Vec<bool>,
}

impl CompatIndex {
    pub fn new(dataset: &Dataset) -> Self {
        let n_truck_types = dataset.truck_types.len();
        let matrix = dataset
            .shipments
            .iter()
            .flat_map(|s| {
                dataset
                    .truck_types
                    .iter()
                    .map(move |t| s.origin == t.origin && s.destination == t.destination)
            })
            .collect();
        Self {
            n_truck_types,
            matrix,
        }
    }

    /// Whether `shipment` may be loaded onto any unit of `truck_type`.
    pub fn compatible(&self, shipment: usize, truck_type: usize) -> bool {
        self.matrix[shipment * self.n_truck_types + truck_type]
    }

    /// Whether `shipment` has at least one compatible truck type with a
    /// non-zero fleet. If not, no feasible plan can exist.
    pub fn has_any_unit(&self, dataset: &Dataset, shipment: usize) -> bool {
        dataset
            .truck_types
            .iter()
            .any(|t| t.n_units > 0 && self.compatible(shipment, t.id))
    }
}
