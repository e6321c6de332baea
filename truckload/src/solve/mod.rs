//! The solve pipeline for one request: compatibility index, variable
//! allocation, constraint generation, MIP solve, plan extraction.
//!
//! Everything here is request-scoped. The variable container is consumed by
//! the solver and nothing survives past the returned plan, so concurrent
//! solves can never share model state.

use crate::entities::{Dataset, LoadPlan};
use crate::err::SolveError;
use crate::model::{
    allocate_variables, extract_plan, generate_constraints, objective, CompatIndex,
};
use crate::util::assertions;
use good_lp::{default_solver, ResolutionError, SolverModel};
use log::{debug, info};

/// Computes an optimal loading plan for `dataset`, or reports why none exists.
pub fn solve(dataset: &Dataset) -> Result<LoadPlan, SolveError> {
    if dataset.shipments.is_empty() {
        // nothing to place: trivially optimal with zero trucks dispatched
        info!("[SOLVE] empty dataset, returning empty plan");
        return Ok(LoadPlan::default());
    }

    let compat = CompatIndex::new(dataset);

    // a shipment without a single compatible unit makes the model infeasible
    // by construction; report it before handing the solver a doomed model
    for s in &dataset.shipments {
        if !compat.has_any_unit(dataset, s.id) {
            info!(
                "[SOLVE] shipment {} ({} -> {}) has no compatible truck unit",
                s.id + 1,
                s.origin,
                s.destination
            );
            return Err(SolveError::Infeasible);
        }
    }

    let (problem, vars) = allocate_variables(dataset, &compat);
    let constraints = generate_constraints(dataset, &vars);

    let mut model = problem.minimise(objective(&vars)).using(default_solver);
    for c in constraints {
        model = model.with(c);
    }

    debug!("[SOLVE] invoking solver");
    match model.solve() {
        Ok(solution) => {
            let plan = extract_plan(dataset, &vars, &solution);
            debug_assert!(assertions::plan_is_feasible(dataset, &plan));
            info!(
                "[SOLVE] optimal plan found: {} truck unit(s) used for {} shipment(s)",
                plan.n_trucks_used(),
                dataset.shipments.len()
            );
            Ok(plan)
        }
        Err(ResolutionError::Infeasible) => {
            info!("[SOLVE] solver proved the model infeasible");
            Err(SolveError::Infeasible)
        }
        Err(e) => Err(SolveError::SolverUnavailable(e.to_string())),
    }
}
