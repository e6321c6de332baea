use float_cmp::approx_eq;
use test_case::test_case;
use truckload::entities::{Dataset, Shipment, TruckType};
use truckload::err::SolveError;
use truckload::io::{export, import, read_workbook, write_workbook};
use truckload::io::ext_repr::{ExtDataset, ExtShipment, ExtTruckType};
use truckload::solve::solve;
use truckload::util::assertions::plan_is_feasible;

fn shipment(id: usize, lane: (&str, &str), weight: f64, volume: f64) -> Shipment {
    Shipment {
        id,
        origin: lane.0.into(),
        destination: lane.1.into(),
        weight,
        volume,
    }
}

fn truck_type(
    id: usize,
    lane: (&str, &str),
    n_units: usize,
    weight_capacity: f64,
    volume_capacity: f64,
) -> TruckType {
    TruckType {
        id,
        origin: lane.0.into(),
        destination: lane.1.into(),
        weight_capacity,
        volume_capacity,
        n_units,
    }
}

const PUNE_DELHI: (&str, &str) = ("Pune", "Delhi");
const PUNE_GOA: (&str, &str) = ("Pune", "Goa");

#[test]
fn two_shipments_share_one_truck() {
    let dataset = Dataset::new(
        vec![
            shipment(0, PUNE_DELHI, 40.0, 2.0),
            shipment(1, PUNE_DELHI, 30.0, 3.0),
        ],
        vec![truck_type(0, PUNE_DELHI, 1, 100.0, 10.0)],
    )
    .unwrap();

    let plan = solve(&dataset).unwrap();
    assert!(plan_is_feasible(&dataset, &plan));
    assert_eq!(plan.n_trucks_used(), 1);
    assert_eq!(plan.manifests[0].truck.to_string(), "1_1");
    assert_eq!(plan.manifests[0].shipment_ids, vec![0, 1]);
    for a in &plan.assignments {
        assert_eq!(a.truck.unwrap().to_string(), "1_1");
    }

    let loaded_weight: f64 = plan.assignments.iter().map(|a| a.weight).sum();
    assert!(approx_eq!(f64, loaded_weight, 70.0, ulps = 2));
}

#[test]
fn unmatchable_lane_is_infeasible() {
    let dataset = Dataset::new(
        vec![shipment(0, PUNE_GOA, 10.0, 1.0)],
        vec![truck_type(0, PUNE_DELHI, 5, 100.0, 10.0)],
    )
    .unwrap();

    assert!(matches!(solve(&dataset), Err(SolveError::Infeasible)));
}

#[test]
fn combined_overload_splits_across_two_units() {
    // each shipment fits alone, all three together exceed one truck
    let dataset = Dataset::new(
        vec![
            shipment(0, PUNE_DELHI, 4.0, 1.0),
            shipment(1, PUNE_DELHI, 4.0, 1.0),
            shipment(2, PUNE_DELHI, 4.0, 1.0),
        ],
        vec![truck_type(0, PUNE_DELHI, 2, 10.0, 10.0)],
    )
    .unwrap();

    let plan = solve(&dataset).unwrap();
    assert!(plan_is_feasible(&dataset, &plan));
    assert_eq!(plan.n_trucks_used(), 2);
}

#[test]
fn zero_unit_fleet_is_infeasible() {
    let dataset = Dataset::new(
        vec![shipment(0, PUNE_DELHI, 10.0, 1.0)],
        vec![truck_type(0, PUNE_DELHI, 0, 100.0, 10.0)],
    )
    .unwrap();

    assert!(matches!(solve(&dataset), Err(SolveError::Infeasible)));
}

#[test]
fn empty_dataset_solves_trivially() {
    let dataset = Dataset::new(vec![], vec![truck_type(0, PUNE_DELHI, 3, 100.0, 10.0)]).unwrap();

    let plan = solve(&dataset).unwrap();
    assert_eq!(plan.n_trucks_used(), 0);
    assert!(plan.manifests.is_empty());
    assert!(plan.assignments.is_empty());

    let ext = export(&dataset, &plan);
    assert!(ext.trucks.is_empty());
    assert!(ext.shipments.is_empty());
}

// The capacity that forces a split can be weight or volume, the model treats
// them symmetrically.
#[test_case(10.0, 100.0; "weight bound")]
#[test_case(100.0, 2.0; "volume bound")]
fn binding_dimension_forces_second_truck(weight_capacity: f64, volume_capacity: f64) {
    let dataset = Dataset::new(
        vec![
            shipment(0, PUNE_DELHI, 6.0, 1.0),
            shipment(1, PUNE_DELHI, 6.0, 1.5),
        ],
        vec![truck_type(0, PUNE_DELHI, 2, weight_capacity, volume_capacity)],
    )
    .unwrap();

    let plan = solve(&dataset).unwrap();
    assert!(plan_is_feasible(&dataset, &plan));
    assert_eq!(plan.n_trucks_used(), 2);
}

#[test]
fn shipments_stay_on_their_lane() {
    let dataset = Dataset::new(
        vec![
            shipment(0, PUNE_DELHI, 10.0, 1.0),
            shipment(1, PUNE_GOA, 10.0, 1.0),
            shipment(2, PUNE_DELHI, 10.0, 1.0),
        ],
        vec![
            truck_type(0, PUNE_DELHI, 2, 100.0, 10.0),
            truck_type(1, PUNE_GOA, 2, 100.0, 10.0),
        ],
    )
    .unwrap();

    let plan = solve(&dataset).unwrap();
    assert!(plan_is_feasible(&dataset, &plan));
    // one truck per lane is enough
    assert_eq!(plan.n_trucks_used(), 2);

    let delhi_truck = plan.truck_for(0).unwrap();
    assert_eq!(delhi_truck.truck_type, 0);
    assert_eq!(plan.truck_for(2).unwrap(), delhi_truck);
    assert_eq!(plan.truck_for(1).unwrap().truck_type, 1);
}

#[test]
fn every_shipment_is_assigned_exactly_once() {
    let dataset = Dataset::new(
        vec![
            shipment(0, PUNE_DELHI, 30.0, 3.0),
            shipment(1, PUNE_DELHI, 30.0, 3.0),
            shipment(2, PUNE_DELHI, 30.0, 3.0),
            shipment(3, PUNE_DELHI, 30.0, 3.0),
            shipment(4, PUNE_DELHI, 30.0, 3.0),
        ],
        vec![
            truck_type(0, PUNE_DELHI, 2, 100.0, 10.0),
            truck_type(1, PUNE_DELHI, 3, 60.0, 6.0),
        ],
    )
    .unwrap();

    let plan = solve(&dataset).unwrap();
    assert!(plan_is_feasible(&dataset, &plan));

    let mut carried: Vec<usize> = plan
        .manifests
        .iter()
        .flat_map(|m| m.shipment_ids.iter().copied())
        .collect();
    carried.sort();
    assert_eq!(carried, vec![0, 1, 2, 3, 4]);

    // objective value equals the number of non-empty used units
    assert_eq!(
        plan.n_trucks_used(),
        plan.manifests
            .iter()
            .filter(|m| !m.shipment_ids.is_empty())
            .count()
    );
}

#[test]
fn workbook_round_trip() {
    let ext_dataset = ExtDataset {
        shipments: vec![
            ExtShipment {
                origin: "Pune".into(),
                destination: "Delhi".into(),
                weight: 40.0,
                volume: 2.0,
            },
            ExtShipment {
                origin: "Pune".into(),
                destination: "Delhi".into(),
                weight: 30.0,
                volume: 3.0,
            },
        ],
        trucks: vec![ExtTruckType {
            origin: "Pune".into(),
            destination: "Delhi".into(),
            n_trucks: 2,
            weight_capacity: 100.0,
            volume_capacity: 10.0,
        }],
    };

    let dataset = import(&ext_dataset).unwrap();
    let plan = solve(&dataset).unwrap();
    let ext_plan = export(&dataset, &plan);

    assert_eq!(ext_plan.n_trucks_used, 1);
    assert_eq!(ext_plan.trucks.len(), 1);
    assert_eq!(ext_plan.trucks[0].truck, "1_1");
    assert_eq!(ext_plan.trucks[0].shipments, vec![1, 2]);
    assert_eq!(ext_plan.shipments.len(), 2);
    for row in &ext_plan.shipments {
        assert_eq!(row.truck, "1_1");
    }

    // the plan also round-trips through its json form
    let json = serde_json::to_string(&ext_plan).unwrap();
    let parsed: truckload::io::ext_repr::ExtPlan = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.n_trucks_used, 1);
    assert_eq!(parsed.trucks[0].shipments, vec![1, 2]);

    let bytes = write_workbook(&ext_plan).unwrap();
    assert!(!bytes.is_empty());
    // an output workbook is not an input workbook: its truck sheet has no
    // fleet columns, so feeding it back in must fail loudly
    assert!(matches!(
        read_workbook(&bytes),
        Err(SolveError::MalformedInput(_))
    ));
}

#[test]
fn identical_datasets_yield_identical_reports() {
    let build = || {
        Dataset::new(
            vec![
                shipment(0, PUNE_DELHI, 10.0, 1.0),
                shipment(1, PUNE_DELHI, 20.0, 2.0),
            ],
            vec![truck_type(0, PUNE_DELHI, 2, 100.0, 10.0)],
        )
        .unwrap()
    };

    let plan_a = solve(&build()).unwrap();
    let plan_b = solve(&build()).unwrap();

    assert_eq!(plan_a.n_trucks_used(), plan_b.n_trucks_used());
    let ids = |plan: &truckload::entities::LoadPlan| {
        plan.manifests
            .iter()
            .map(|m| (m.truck, m.shipment_ids.clone()))
            .collect::<Vec<_>>()
    };
    assert_eq!(ids(&plan_a), ids(&plan_b));
}
