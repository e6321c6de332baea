mod dataset;
mod plan;
mod shipment;
mod truck;

#[doc(inline)]
pub use dataset::Dataset;
#[doc(inline)]
pub use plan::LoadPlan;
#[doc(inline)]
pub use plan::ShipmentAssignment;
#[doc(inline)]
pub use plan::TruckManifest;
#[doc(inline)]
pub use shipment::Shipment;
#[doc(inline)]
pub use truck::TruckType;
#[doc(inline)]
pub use truck::TruckUnitId;
