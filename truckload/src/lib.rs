//! Capacitated truck loading optimizer: assigns every shipment to exactly one
//! truck unit, respecting weight/volume capacities and origin/destination
//! compatibility, while minimizing the number of trucks dispatched.

/// Entities to model a truck loading problem and its decoded plan
pub mod entities;

/// Error kinds that can halt a solve request
pub mod err;

/// Importing datasets into and exporting plans out of this library
pub mod io;

/// Translation of a dataset into a mixed-integer program and back
pub mod model;

/// The solve pipeline: model build, solver call, plan extraction
pub mod solve;

/// Helper functions which do not belong to any specific module
pub mod util;
