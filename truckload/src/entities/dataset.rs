use crate::entities::{Shipment, TruckType, TruckUnitId};
use anyhow::{ensure, Result};

/// Normalized in-memory view of one solve request: the shipments to place and
/// the truck fleet available to carry them. Immutable once constructed; every
/// request builds its own instance and discards it after extraction.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Shipments to be loaded, with consecutive ids starting from 0
    pub shipments: Vec<Shipment>,
    /// Truck types in the fleet, with consecutive ids starting from 0
    pub truck_types: Vec<TruckType>,
}

impl Dataset {
    pub fn new(shipments: Vec<Shipment>, truck_types: Vec<TruckType>) -> Result<Self> {
        ensure!(
            shipments.iter().enumerate().all(|(i, s)| s.id == i),
            "shipment ids must be consecutive starting from 0"
        );
        ensure!(
            truck_types.iter().enumerate().all(|(i, t)| t.id == i),
            "truck type ids must be consecutive starting from 0"
        );
        for s in &shipments {
            ensure!(
                s.weight.is_finite() && s.weight >= 0.0,
                "shipment {} has invalid weight {}",
                s.id + 1,
                s.weight
            );
            ensure!(
                s.volume.is_finite() && s.volume >= 0.0,
                "shipment {} has invalid volume {}",
                s.id + 1,
                s.volume
            );
        }
        for t in &truck_types {
            ensure!(
                t.weight_capacity.is_finite() && t.weight_capacity >= 0.0,
                "truck type {} has invalid weight capacity {}",
                t.id + 1,
                t.weight_capacity
            );
            ensure!(
                t.volume_capacity.is_finite() && t.volume_capacity >= 0.0,
                "truck type {} has invalid volume capacity {}",
                t.id + 1,
                t.volume_capacity
            );
        }
        Ok(Self {
            shipments,
            truck_types,
        })
    }

    /// Total number of physical truck units across all types.
    pub fn n_units(&self) -> usize {
        self.truck_types.iter().map(|t| t.n_units).sum()
    }

    /// All truck units in the canonical order: type-major, unit index within.
    /// Every part of the model layer iterates units in exactly this order.
    pub fn units(&self) -> impl Iterator<Item = TruckUnitId> + '_ {
        self.truck_types.iter().flat_map(|t| {
            (0..t.n_units).map(move |unit| TruckUnitId {
                truck_type: t.id,
                unit,
            })
        })
    }

    pub fn truck_type(&self, id: usize) -> &TruckType {
        &self.truck_types[id]
    }

    pub fn shipment(&self, id: usize) -> &Shipment {
        &self.shipments[id]
    }
}
