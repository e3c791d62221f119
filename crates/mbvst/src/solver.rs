//! Seam to the external relaxed optimizer.
//!
//! The LP/MILP machinery is a collaborator, not part of this crate: the loop
//! only needs "given the instance (and optionally a restricted candidate
//! pool), hand me an edge selection or an error." Both error variants are
//! recoverable from the loop's point of view; an iteration that hits one is
//! discarded, never fatal.

use mbvst_graphlib::{Edge, Graph};

#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    /// The relaxation has no feasible solution for the offered pool.
    #[error("relaxation infeasible: {0}")]
    Infeasible(String),

    /// The solver itself misbehaved (license, numerics, crash, ...).
    #[error("solver fault: {0}")]
    Fault(String),
}

/// A (possibly infeasible) edge selection returned by the optimizer, together
/// with its objective estimate. The selection may be disconnected and/or
/// cyclic; the repair loop takes it from here.
#[derive(Debug, Clone)]
pub struct Relaxation {
    pub edges: Vec<Edge>,
    pub objective: f64,
}

pub trait RelaxedSolver {
    /// Solves the relaxed formulation over `instance`. When `pool` is given,
    /// the selection must be drawn from those edges only (the lazy variant
    /// feeds each iteration's repaired forest back in as the next pool).
    fn solve(&mut self, instance: &Graph, pool: Option<&[Edge]>)
    -> Result<Relaxation, SolverError>;
}

impl<F> RelaxedSolver for F
where
    F: FnMut(&Graph, Option<&[Edge]>) -> Result<Relaxation, SolverError>,
{
    fn solve(
        &mut self,
        instance: &Graph,
        pool: Option<&[Edge]>,
    ) -> Result<Relaxation, SolverError> {
        self(instance, pool)
    }
}
