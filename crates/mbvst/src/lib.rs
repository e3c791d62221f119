#![forbid(unsafe_code)]

//! Minimum branch vertices spanning tree (MBVST) heuristics.
//!
//! The MBVST problem asks for a spanning tree of a connected undirected graph
//! with as few branch vertices (tree degree > 2) as possible; it is NP-hard.
//! This crate is the heuristic repair engine around an external relaxed
//! optimizer: the optimizer proposes an edge selection that may be
//! disconnected and/or cyclic, and the [`repair`] loop reconnects it, breaks
//! its cycles, evaluates the result, and keeps the best valid tree across
//! iterations — with a breadth-first fallback tree when every iteration
//! fails.
//!
//! The solver itself is a collaborator behind the [`RelaxedSolver`] trait;
//! this crate performs no I/O and holds no state beyond a single run.

pub mod breaking;
pub mod cycles;
pub mod error;
pub mod fallback;
pub mod reconnect;
pub mod repair;
pub mod solver;
pub mod tree;

pub use mbvst_graphlib as graphlib;

pub use error::{Error, Result};
pub use fallback::fallback_tree;
pub use repair::{
    BreakPolicy, DiscardReason, IterationOutcome, RepairOptions, RepairReport, RunStatus,
    SolutionRecord, repair,
};
pub use solver::{Relaxation, RelaxedSolver, SolverError};
pub use tree::SpanningTree;
