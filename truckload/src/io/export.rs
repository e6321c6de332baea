use crate::entities::{Dataset, LoadPlan};
use crate::io::ext_repr::{ExtPlan, ExtShipmentRow, ExtTruckRow};

/// Builds the external plan rows from a decoded [`LoadPlan`].
///
/// Shipment ids are shifted to their 1-based display form here; nothing in
/// the dataset is mutated.
pub fn export(dataset: &Dataset, plan: &LoadPlan) -> ExtPlan {
    let trucks = plan
        .manifests
        .iter()
        .map(|m| ExtTruckRow {
            truck: m.truck.to_string(),
            origin: m.origin.clone(),
            destination: m.destination.clone(),
            shipments: m.shipment_ids.iter().map(|id| id + 1).collect(),
        })
        .collect();

    let shipments = dataset
        .shipments
        .iter()
        .map(|s| ExtShipmentRow {
            origin: s.origin.clone(),
            destination: s.destination.clone(),
            weight: s.weight,
            volume: s.volume,
            truck: plan
                .truck_for(s.id)
                .map(|u| u.to_string())
                .unwrap_or_default(),
        })
        .collect();

    ExtPlan {
        trucks,
        shipments,
        n_trucks_used: plan.n_trucks_used(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Shipment, ShipmentAssignment, TruckManifest, TruckType, TruckUnitId};

    #[test]
    fn rows_use_one_based_display_ids() {
        let dataset = Dataset::new(
            vec![Shipment {
                id: 0,
                origin: "A".into(),
                destination: "B".into(),
                weight: 1.0,
                volume: 1.0,
            }],
            vec![TruckType {
                id: 0,
                origin: "A".into(),
                destination: "B".into(),
                weight_capacity: 10.0,
                volume_capacity: 10.0,
                n_units: 1,
            }],
        )
        .unwrap();
        let unit = TruckUnitId {
            truck_type: 0,
            unit: 0,
        };
        let plan = LoadPlan {
            manifests: vec![TruckManifest {
                truck: unit,
                origin: "A".into(),
                destination: "B".into(),
                shipment_ids: vec![0],
            }],
            assignments: vec![ShipmentAssignment {
                shipment_id: 0,
                origin: "A".into(),
                destination: "B".into(),
                weight: 1.0,
                volume: 1.0,
                truck: Some(unit),
            }],
        };

        let ext = export(&dataset, &plan);
        assert_eq!(ext.n_trucks_used, 1);
        assert_eq!(ext.trucks[0].truck, "1_1");
        assert_eq!(ext.trucks[0].shipments, vec![1]);
        assert_eq!(ext.shipments[0].truck, "1_1");
    }
}
