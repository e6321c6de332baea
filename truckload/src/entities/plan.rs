use crate::entities::TruckUnitId;

/// Truck-centric view: one row per used truck unit and the shipments it
/// carries. Units that end up empty never appear here.
#[derive(Debug, Clone)]
pub struct TruckManifest {
    pub truck: TruckUnitId,
    /// Lane of the truck type, repeated here so a manifest row is self-contained
    pub origin: String,
    pub destination: String,
    /// 0-based shipment ids, in shipment order
    pub shipment_ids: Vec<usize>,
}

/// Shipment-centric view: the original shipment attributes plus the truck
/// unit it was assigned to.
#[derive(Debug, Clone)]
pub struct ShipmentAssignment {
    pub shipment_id: usize,
    pub origin: String,
    pub destination: String,
    pub weight: f64,
    pub volume: f64,
    /// `None` only in the degenerate case where the solver accepted a
    /// zero-weight, zero-volume shipment on a truck it never marked as used.
    pub truck: Option<TruckUnitId>,
}

/// The decoded result of a successful solve, exposed as two complementary
/// views over the same assignment.
#[derive(Debug, Clone, Default)]
pub struct LoadPlan {
    pub manifests: Vec<TruckManifest>,
    pub assignments: Vec<ShipmentAssignment>,
}

impl LoadPlan {
    /// Number of truck units actually dispatched. Equals the objective value
    /// of the underlying program.
    pub fn n_trucks_used(&self) -> usize {
        self.manifests.len()
    }

    /// The truck unit carrying `shipment_id`, if one was decoded.
    pub fn truck_for(&self, shipment_id: usize) -> Option<TruckUnitId> {
        self.assignments
            .iter()
            .find(|a| a.shipment_id == shipment_id)
            .and_then(|a| a.truck)
    }
}
