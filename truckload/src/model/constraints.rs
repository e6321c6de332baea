use crate::entities::Dataset;
use crate::model::VarTable;
use good_lp::{constraint, Constraint, Expression};
use log::debug;

/// Emits the three constraint families in fixed order: assignment
/// completeness, weight capacity, volume capacity. The order carries no
/// semantics but pins down constraint indices for solver diagnostics.
pub fn generate_constraints(dataset: &Dataset, vars: &VarTable) -> Vec<Constraint> {
    let mut constraints = Vec::with_capacity(dataset.shipments.len() + 2 * dataset.n_units());

    // each shipment rides exactly one truck unit
    for s in &dataset.shipments {
        let total: Expression = dataset.units().map(|u| vars.assignment(s.id, u)).sum();
        constraints.push(constraint!(total == 1));
    }

    // the load of each unit stays within its weight capacity, and an unused
    // unit (y == 0) must carry zero load
    for u in dataset.units() {
        let t = dataset.truck_type(u.truck_type);
        let load: Expression = dataset
            .shipments
            .iter()
            .map(|s| s.weight * vars.assignment(s.id, u))
            .sum();
        constraints.push(constraint!(load <= t.weight_capacity * vars.usage(u)));
    }

    // same for volume
    for u in dataset.units() {
        let t = dataset.truck_type(u.truck_type);
        let load: Expression = dataset
            .shipments
            .iter()
            .map(|s| s.volume * vars.assignment(s.id, u))
            .sum();
        constraints.push(constraint!(load <= t.volume_capacity * vars.usage(u)));
    }

    debug!(
        "[MODEL] generated {} constraints ({} completeness, 2 x {} capacity)",
        constraints.len(),
        dataset.shipments.len(),
        dataset.n_units()
    );

    constraints
}

/// The objective: minimize the number of truck units actually dispatched.
pub fn objective(vars: &VarTable) -> Expression {
    vars.usage_vars().iter().copied().sum()
}
