use serde::{Deserialize, Serialize};

/// One shipment row as it appears in the input.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ExtShipment {
    pub origin: String,
    pub destination: String,
    /// Weight in kilograms
    pub weight: f64,
    /// Volume in cubic meters
    pub volume: f64,
}

/// One truck-type row as it appears in the input.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ExtTruckType {
    pub origin: String,
    pub destination: String,
    /// Fleet size of this type. Kept signed so a negative count from the
    /// input is rejected with a proper error instead of wrapping.
    pub n_trucks: i64,
    /// Weight capacity of a single unit (kg)
    pub weight_capacity: f64,
    /// Volume capacity of a single unit (m³)
    pub volume_capacity: f64,
}

/// A full problem instance in external form.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ExtDataset {
    pub shipments: Vec<ExtShipment>,
    pub trucks: Vec<ExtTruckType>,
}

/// One row of the truck-centric output sheet.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ExtTruckRow {
    /// Human-facing unit label, e.g. `"2_1"`
    pub truck: String,
    pub origin: String,
    pub destination: String,
    /// 1-based shipment ids carried by this unit, in assignment order
    pub shipments: Vec<usize>,
}

/// One row of the shipment-centric output sheet.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ExtShipmentRow {
    pub origin: String,
    pub destination: String,
    pub weight: f64,
    pub volume: f64,
    /// Label of the assigned unit, empty if none could be extracted
    pub truck: String,
}

/// A decoded plan in external form, ready for serialization.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ExtPlan {
    /// `truckwise_shipments` view
    pub trucks: Vec<ExtTruckRow>,
    /// `shipmentwise_trucks` view
    pub shipments: Vec<ExtShipmentRow>,
    /// Number of truck units dispatched (the objective value)
    pub n_trucks_used: usize,
}
