use crate::entities::{Dataset, LoadPlan};
use std::collections::HashSet;

/// Tolerance for comparing accumulated f64 loads against capacities.
const CAPACITY_EPS: f64 = 1e-6;

/// Checks that a decoded plan is internally consistent and feasible with
/// respect to its dataset:
/// - every shipment appears exactly once across all manifests, except
///   shipments left without a truck (degenerate zero-load case), which must
///   appear nowhere;
/// - every manifest stays within its truck type's weight and volume capacity;
/// - every carried shipment is lane-compatible with its truck type;
/// - the two report views agree on every assignment.
pub fn plan_is_feasible(dataset: &Dataset, plan: &LoadPlan) -> bool {
    let mut seen: HashSet<usize> = HashSet::new();

    for m in &plan.manifests {
        let t = dataset.truck_type(m.truck.truck_type);
        if m.truck.unit >= t.n_units {
            return false;
        }
        if m.shipment_ids.is_empty() {
            return false;
        }

        let mut weight = 0.0;
        let mut volume = 0.0;
        for &id in &m.shipment_ids {
            if !seen.insert(id) {
                return false;
            }
            let s = dataset.shipment(id);
            if s.origin != t.origin || s.destination != t.destination {
                return false;
            }
            weight += s.weight;
            volume += s.volume;
        }
        if weight > t.weight_capacity + CAPACITY_EPS {
            return false;
        }
        if volume > t.volume_capacity + CAPACITY_EPS {
            return false;
        }
    }

    if plan.assignments.len() != dataset.shipments.len() {
        return false;
    }
    plan.assignments.iter().all(|a| match a.truck {
        Some(u) => plan
            .manifests
            .iter()
            .any(|m| m.truck == u && m.shipment_ids.contains(&a.shipment_id)),
        None => !seen.contains(&a.shipment_id),
    })
}
