use crate::entities::{Dataset, Shipment, TruckType};
use crate::err::SolveError;
use crate::io::ext_repr::ExtDataset;

/// Converts an external dataset into a validated [`Dataset`].
///
/// Fails fast on anything that would poison the model downstream: negative
/// or non-finite weights, volumes and capacities, and negative truck counts.
/// Lane strings are taken verbatim; a blank origin is legal and simply
/// matches no truck type.
pub fn import(ext: &ExtDataset) -> Result<Dataset, SolveError> {
    let shipments = ext
        .shipments
        .iter()
        .enumerate()
        .map(|(id, s)| Shipment {
            id,
            origin: s.origin.clone(),
            destination: s.destination.clone(),
            weight: s.weight,
            volume: s.volume,
        })
        .collect();

    let mut truck_types = Vec::with_capacity(ext.trucks.len());
    for (id, t) in ext.trucks.iter().enumerate() {
        if t.n_trucks < 0 {
            return Err(SolveError::MalformedInput(format!(
                "truck row {}: negative number of trucks ({})",
                id + 1,
                t.n_trucks
            )));
        }
        truck_types.push(TruckType {
            id,
            origin: t.origin.clone(),
            destination: t.destination.clone(),
            weight_capacity: t.weight_capacity,
            volume_capacity: t.volume_capacity,
            n_units: t.n_trucks as usize,
        });
    }

    Dataset::new(shipments, truck_types).map_err(|e| SolveError::MalformedInput(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::ext_repr::{ExtShipment, ExtTruckType};

    fn ext_dataset() -> ExtDataset {
        ExtDataset {
            shipments: vec![ExtShipment {
                origin: "A".into(),
                destination: "B".into(),
                weight: 10.0,
                volume: 2.0,
            }],
            trucks: vec![ExtTruckType {
                origin: "A".into(),
                destination: "B".into(),
                n_trucks: 2,
                weight_capacity: 100.0,
                volume_capacity: 10.0,
            }],
        }
    }

    #[test]
    fn assigns_consecutive_ids() {
        let dataset = import(&ext_dataset()).unwrap();
        assert_eq!(dataset.shipments[0].id, 0);
        assert_eq!(dataset.truck_types[0].id, 0);
        assert_eq!(dataset.truck_types[0].n_units, 2);
    }

    #[test]
    fn rejects_negative_truck_count() {
        let mut ext = ext_dataset();
        ext.trucks[0].n_trucks = -1;
        let err = import(&ext).unwrap_err();
        assert!(matches!(err, SolveError::MalformedInput(_)));
    }

    #[test]
    fn rejects_negative_shipment_weight() {
        let mut ext = ext_dataset();
        ext.shipments[0].weight = -5.0;
        let err = import(&ext).unwrap_err();
        assert!(matches!(err, SolveError::MalformedInput(_)));
    }
}
