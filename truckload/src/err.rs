use thiserror::Error;

/// Terminal failures of a solve request.
///
/// Every variant halts the request before any partial output is produced.
/// Retrying is the caller's business, not this crate's.
#[derive(Debug, Error)]
pub enum SolveError {
    /// The input could not be turned into a valid [`Dataset`](crate::entities::Dataset).
    /// Raised at import, before any model is built.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// The solver proved that no feasible loading plan exists.
    #[error(
        "no feasible loading plan exists: check the number of available trucks \
         and their capacities on every lane"
    )]
    Infeasible,

    /// The solver backend could not be created or did not run to completion.
    #[error("solver unavailable: {0}")]
    SolverUnavailable(String),
}
