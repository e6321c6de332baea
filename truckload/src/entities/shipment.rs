/// One cargo item to be placed on a truck.
#[derive(Debug, Clone)]
pub struct Shipment {
    /// Unique identifier, consecutive from 0 in dataset order.
    /// Displayed 1-based in all human-facing output.
    pub id: usize,
    /// Where this shipment departs from
    pub origin: String,
    /// Where this shipment must arrive
    pub destination: String,
    /// Weight in kilograms
    pub weight: f64,
    /// Volume in cubic meters
    pub volume: f64,
}
