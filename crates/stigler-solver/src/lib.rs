mod problem;
mod simplex;
mod solution;

pub use problem::{Constraint, ConstraintOp, LpProblem, Objective};
pub use simplex::{LpSolver, Solver, SolverConfig, SolverError};
pub use solution::{Solution, SolutionStatus};
