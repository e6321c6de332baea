use crate::entities::{Dataset, LoadPlan, ShipmentAssignment, TruckManifest};
use crate::model::VarTable;
use good_lp::Solution;
use log::debug;

/// A solver value decodes to 1 above this threshold. Binary variables can
/// come back with floating-point artifacts (0.9999999...), matching the
/// solver's own fractional tolerance.
const DECODE_THRESHOLD: f64 = 0.5;

/// Decodes a solved model into the two report views.
///
/// Truck units are walked in the same canonical order the variables were
/// allocated in. A unit whose usage variable decodes to 1 but which carries
/// no decoded shipment is dropped from the truck-centric view; this guards
/// against degenerate optimizer output, not normal operation.
pub fn extract_plan<S: Solution>(dataset: &Dataset, vars: &VarTable, solution: &S) -> LoadPlan {
    let mut manifests = Vec::new();
    let mut assigned_to = vec![None; dataset.shipments.len()];

    for u in dataset.units() {
        if solution.value(vars.usage(u)) <= DECODE_THRESHOLD {
            continue;
        }
        let shipment_ids: Vec<usize> = dataset
            .shipments
            .iter()
            .filter(|s| solution.value(vars.assignment(s.id, u)) > DECODE_THRESHOLD)
            .map(|s| s.id)
            .collect();
        if shipment_ids.is_empty() {
            debug!("[EXTRACT] truck {u} marked used but carries nothing, dropping");
            continue;
        }
        for &id in &shipment_ids {
            assigned_to[id] = Some(u);
        }
        let t = dataset.truck_type(u.truck_type);
        manifests.push(TruckManifest {
            truck: u,
            origin: t.origin.clone(),
            destination: t.destination.clone(),
            shipment_ids,
        });
    }

    let assignments = dataset
        .shipments
        .iter()
        .map(|s| ShipmentAssignment {
            shipment_id: s.id,
            origin: s.origin.clone(),
            destination: s.destination.clone(),
            weight: s.weight,
            volume: s.volume,
            truck: assigned_to[s.id],
        })
        .collect();

    LoadPlan {
        manifests,
        assignments,
    }
}
