//! The iterative repair loop and its best-solution tracker.
//!
//! Each round asks the external optimizer for a candidate edge selection,
//! repairs it into (hopefully) a spanning tree, and keeps the best tree seen
//! so far. A round that cannot proceed is discarded with a reason, never
//! escalated: degenerate solver output is expected and self-correcting across
//! iterations. Only a disconnected input graph is fatal.

use crate::error::{Error, Result};
use crate::solver::RelaxedSolver;
use crate::tree::SpanningTree;
use crate::{breaking, cycles, fallback, reconnect};
use mbvst_graphlib::{Edge, Graph, alg};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::Serialize;
use tracing::debug;

/// Which cycle-breaking primitive the loop applies after reconnection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BreakPolicy {
    /// Probe connectivity per removal; preserves a valid tree within the
    /// iteration at the cost of repeated connectivity checks.
    ConnectivitySafe,
    /// Remove the most branchy edge of each cycle unconditionally. Cheaper,
    /// may fragment; a fragmented result is not recorded but still seeds the
    /// next iteration's pool, where reconnection repairs it.
    DegreeGreedy,
}

#[derive(Debug, Clone, Copy)]
pub struct RepairOptions {
    /// Iteration budget; the only bound on total work.
    pub max_iterations: usize,
    /// Fragmentation cap: candidates with more connected components than this
    /// are discarded before any reconnection effort is spent on them.
    pub max_components: usize,
    /// Randomized tie-breaking in the safe cycle breaker. When off, every
    /// tie-break is first-in-iteration-order.
    pub randomize: bool,
    /// Seed for the run-owned generator; fixed seed, reproducible run.
    pub seed: u64,
    pub break_policy: BreakPolicy,
    /// Feed each iteration's repaired edge set back to the solver as the next
    /// restricted candidate pool (the lazy-relaxation variant). When off, the
    /// solver sees the full universe every time.
    pub carry_pool: bool,
}

impl Default for RepairOptions {
    fn default() -> Self {
        Self {
            max_iterations: 30,
            max_components: 32,
            randomize: true,
            seed: 0,
            break_policy: BreakPolicy::ConnectivitySafe,
            carry_pool: true,
        }
    }
}

impl RepairOptions {
    /// Randomized tie-breaking with a fixed seed.
    pub fn randomized(seed: u64) -> Self {
        Self {
            randomize: true,
            seed,
            ..Default::default()
        }
    }

    /// Fully deterministic: all tie-breaks follow iteration order.
    pub fn deterministic() -> Self {
        Self {
            randomize: false,
            ..Default::default()
        }
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_max_components(mut self, max_components: usize) -> Self {
        self.max_components = max_components;
        self
    }

    pub fn with_break_policy(mut self, break_policy: BreakPolicy) -> Self {
        self.break_policy = break_policy;
        self
    }

    pub fn with_carry_pool(mut self, carry_pool: bool) -> Self {
        self.carry_pool = carry_pool;
        self
    }
}

/// Why an iteration was thrown away without contributing a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DiscardReason {
    /// The external optimizer reported infeasibility or a fault.
    SolverFailed,
    /// The candidate had more components than the configured cap.
    Fragmented,
    /// No instance edge could bridge some orphan component to the hub.
    ReconnectFailed,
    /// Still disconnected after a successful reconnect; defensive, should not
    /// occur in practice.
    StillDisconnected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IterationOutcome {
    /// The relaxed selection was already a spanning tree; the loop stops.
    Converged { branch_vertices: usize },
    /// Repair produced a valid tree that strictly improved the record.
    Improved { branch_vertices: usize },
    /// Repair produced a valid tree, but not a better one.
    NotImproved { branch_vertices: usize },
    /// Repair left the edge set disconnected or cyclic; it only seeds the
    /// next iteration's pool.
    NotATree,
    Discarded(DiscardReason),
}

/// Terminal state of a repair run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RunStatus {
    /// A relaxed selection came back feasible as-is.
    Converged,
    /// The iteration budget ran out; the best tree found along the way is the
    /// answer.
    BudgetExhausted,
    /// No iteration ever yielded a valid tree; the reported tree comes from
    /// the BFS fallback.
    AbortedNoSolution,
}

/// Best tree found so far. Replaced only on strictly smaller branch count, so
/// the first tree to reach a given count wins, and the recorded count is
/// non-increasing over a run.
#[derive(Debug, Clone, Serialize)]
pub struct SolutionRecord {
    pub edges: Vec<Edge>,
    pub branch_vertices: usize,
    /// Zero-based iteration that produced this tree; `None` for the fallback.
    pub iteration: Option<usize>,
}

impl SolutionRecord {
    fn from_tree(tree: &SpanningTree, iteration: Option<usize>) -> Self {
        Self {
            edges: tree.edges().to_vec(),
            branch_vertices: tree.branch_vertices(),
            iteration,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RepairReport {
    pub best: SolutionRecord,
    pub status: RunStatus,
    /// Iterations actually executed (discarded ones included).
    pub iterations: usize,
    pub outcomes: Vec<IterationOutcome>,
}

/// Runs the repair loop over `instance` until a relaxed selection converges
/// on its own or the iteration budget runs out.
///
/// The instance must be connected; that is checked up front and is the only
/// fatal condition. Every per-iteration failure (solver error, fragmentation,
/// failed reconnect) discards that iteration and the loop moves on. The run
/// always ends with a valid spanning tree: the best repaired one, or the BFS
/// fallback when no iteration produced any.
pub fn repair<S: RelaxedSolver>(
    instance: &Graph,
    solver: &mut S,
    options: RepairOptions,
) -> Result<RepairReport> {
    let comps = alg::components(instance);
    if instance.node_count() == 0 || comps.len() != 1 {
        return Err(Error::DisconnectedInput {
            components: comps.len(),
        });
    }

    let mut rng = options
        .randomize
        .then(|| SmallRng::seed_from_u64(options.seed));
    let mut best: Option<SolutionRecord> = None;
    let mut pool: Option<Vec<Edge>> = None;
    let mut outcomes: Vec<IterationOutcome> = Vec::new();
    let mut status = RunStatus::BudgetExhausted;

    for iteration in 0..options.max_iterations {
        let relaxation = match solver.solve(instance, pool.as_deref()) {
            Ok(r) => r,
            Err(err) => {
                debug!(iteration, error = %err, "solver failed; iteration discarded");
                outcomes.push(IterationOutcome::Discarded(DiscardReason::SolverFailed));
                continue;
            }
        };

        let mut work = Graph::from_parts(instance.node_ids(), relaxation.edges);
        let component_count = alg::components(&work).len();

        if component_count > options.max_components {
            debug!(
                iteration,
                components = component_count,
                cap = options.max_components,
                "candidate too fragmented; iteration discarded"
            );
            outcomes.push(IterationOutcome::Discarded(DiscardReason::Fragmented));
            continue;
        }

        if let Some(tree) = SpanningTree::try_new(&work) {
            debug!(
                iteration,
                branch_vertices = tree.branch_vertices(),
                "relaxed selection already feasible; converged"
            );
            if best
                .as_ref()
                .is_none_or(|b| tree.branch_vertices() < b.branch_vertices)
            {
                best = Some(SolutionRecord::from_tree(&tree, Some(iteration)));
            }
            outcomes.push(IterationOutcome::Converged {
                branch_vertices: tree.branch_vertices(),
            });
            status = RunStatus::Converged;
            break;
        }

        if component_count > 1 {
            if let Err(err) = reconnect::reconnect_components(&mut work, instance) {
                debug!(iteration, error = %err, "reconnection failed; iteration discarded");
                outcomes.push(IterationOutcome::Discarded(DiscardReason::ReconnectFailed));
                continue;
            }
        }
        if !alg::is_connected(&work) {
            outcomes.push(IterationOutcome::Discarded(DiscardReason::StillDisconnected));
            continue;
        }

        let basis = cycles::cycle_basis(&work);
        let removed = match options.break_policy {
            BreakPolicy::ConnectivitySafe => {
                breaking::break_cycles_safe(&mut work, &basis, rng.as_mut())
            }
            BreakPolicy::DegreeGreedy => breaking::break_cycles_greedy(&mut work, &basis),
        };
        debug!(
            iteration,
            cycles = basis.len(),
            removed,
            "cycle breaking pass done"
        );

        match SpanningTree::try_new(&work) {
            Some(tree) => {
                let branch_vertices = tree.branch_vertices();
                if best
                    .as_ref()
                    .is_none_or(|b| branch_vertices < b.branch_vertices)
                {
                    debug!(iteration, branch_vertices, "recorded improved tree");
                    best = Some(SolutionRecord::from_tree(&tree, Some(iteration)));
                    outcomes.push(IterationOutcome::Improved { branch_vertices });
                } else {
                    outcomes.push(IterationOutcome::NotImproved { branch_vertices });
                }
            }
            None => outcomes.push(IterationOutcome::NotATree),
        }

        if options.carry_pool {
            pool = Some(work.edge_list());
        }
    }

    let iterations = outcomes.len();
    match best {
        Some(record) => Ok(RepairReport {
            best: record,
            status,
            iterations,
            outcomes,
        }),
        None => {
            debug!("no iteration produced a valid tree; building BFS fallback");
            let tree = fallback::fallback_tree(instance)?;
            Ok(RepairReport {
                best: SolutionRecord::from_tree(&tree, None),
                status: RunStatus::AbortedNoSolution,
                iterations,
                outcomes,
            })
        }
    }
}
