use crate::entities::{Dataset, TruckUnitId};
use crate::model::CompatIndex;
use good_lp::{variable, ProblemVariables, Variable};
use log::debug;

/// Index table over the decision variables of one solve.
///
/// Assignment variables are laid out shipment-major, then truck type, then
/// unit index; usage variables type-major. Incompatible (shipment, type)
/// pairs still get a variable, with its upper bound forced to 0, so the
/// index space stays uniform and constraint generation never needs a
/// presence check. Identical datasets always produce identical tables.
#[derive(Debug)]
pub struct VarTable {
    /// x[(i, j, k)]: shipment i rides unit k of truck type j
    assignment: Vec<Variable>,
    /// y[(j, k)]: unit k of truck type j is used at all
    usage: Vec<Variable>,
    /// Slot offset of each truck type's first unit in the unit dimension
    unit_offsets: Vec<usize>,
    n_units: usize,
}

/// Allocates all decision variables for `dataset` into a fresh
/// [`ProblemVariables`]. The returned pair is scoped to a single solve; the
/// variable container is consumed by the solver and must never be reused.
pub fn allocate_variables(dataset: &Dataset, compat: &CompatIndex) -> (ProblemVariables, VarTable) {
    let mut problem = ProblemVariables::new();

    let unit_offsets = {
        let mut offsets = Vec::with_capacity(dataset.truck_types.len());
        let mut slot = 0;
        for t in &dataset.truck_types {
            offsets.push(slot);
            slot += t.n_units;
        }
        offsets
    };
    let n_units = dataset.n_units();

    let mut assignment = Vec::with_capacity(dataset.shipments.len() * n_units);
    for s in &dataset.shipments {
        for t in &dataset.truck_types {
            for k in 0..t.n_units {
                let def = variable()
                    .binary()
                    .name(format!("x_{}_{}_{}", s.id, t.id, k));
                let def = if compat.compatible(s.id, t.id) {
                    def
                } else {
                    // domain fixed to {0}: the variable exists but can never fire
                    def.max(0.0)
                };
                assignment.push(problem.add(def));
            }
        }
    }

    let mut usage = Vec::with_capacity(n_units);
    for t in &dataset.truck_types {
        for k in 0..t.n_units {
            usage.push(problem.add(variable().binary().name(format!("y_{}_{}", t.id, k))));
        }
    }

    debug!(
        "[MODEL] allocated {} assignment and {} usage variables ({} shipments x {} units)",
        assignment.len(),
        usage.len(),
        dataset.shipments.len(),
        n_units
    );

    let table = VarTable {
        assignment,
        usage,
        unit_offsets,
        n_units,
    };
    (problem, table)
}

impl VarTable {
    fn unit_slot(&self, unit: TruckUnitId) -> usize {
        self.unit_offsets[unit.truck_type] + unit.unit
    }

    /// The assignment variable for (`shipment`, `unit`).
    pub fn assignment(&self, shipment: usize, unit: TruckUnitId) -> Variable {
        self.assignment[shipment * self.n_units + self.unit_slot(unit)]
    }

    /// The usage variable for `unit`.
    pub fn usage(&self, unit: TruckUnitId) -> Variable {
        self.usage[self.unit_slot(unit)]
    }

    /// All usage variables, in canonical unit order.
    pub fn usage_vars(&self) -> &[Variable] {
        &self.usage
    }

    pub fn n_assignment_vars(&self) -> usize {
        self.assignment.len()
    }

    pub fn n_usage_vars(&self) -> usize {
        self.usage.len()
    }
}
