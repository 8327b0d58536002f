use thiserror::Error;
use tracing::{debug, warn};

use crate::problem::{Constraint, ConstraintOp, LpProblem};
use crate::solution::Solution;

/// Anything that can turn an [`LpProblem`] into a [`Solution`].
///
/// Callers depend only on this: the returned values satisfy every
/// constraint within the engine's own tolerance, and `objective_value`
/// is the objective evaluated at those values.
pub trait LpSolver {
    fn solve(&self, problem: &LpProblem) -> Solution;
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Invalid tolerance {0}: must be finite and positive")]
    InvalidTolerance(f64),
    #[error("Iteration limit must be at least 1")]
    ZeroIterationLimit,
}

/// Numeric settings for [`Solver`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Maximum pivots per phase before giving up
    pub max_iterations: usize,
    /// Tolerance for floating point comparisons
    pub tolerance: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_iterations: 10000,
            tolerance: 1e-9,
        }
    }
}

impl SolverConfig {
    pub fn with_max_iterations(mut self, max: usize) -> Self {
        self.max_iterations = max;
        self
    }

    pub fn with_tolerance(mut self, tol: f64) -> Self {
        self.tolerance = tol;
        self
    }
}

/// Simplex solver for linear programming problems
#[derive(Debug, Clone)]
pub struct Solver {
    config: SolverConfig,
}

impl Default for Solver {
    fn default() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }
}

impl LpSolver for Solver {
    fn solve(&self, problem: &LpProblem) -> Solution {
        Solver::solve(self, problem)
    }
}

impl Solver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a solver from explicit settings, rejecting ones it cannot run with.
    pub fn try_new(config: SolverConfig) -> Result<Self, SolverError> {
        if !config.tolerance.is_finite() || config.tolerance <= 0.0 {
            return Err(SolverError::InvalidTolerance(config.tolerance));
        }
        if config.max_iterations == 0 {
            return Err(SolverError::ZeroIterationLimit);
        }
        Ok(Self { config })
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solve the LP problem using the two-phase simplex method
    pub fn solve(&self, problem: &LpProblem) -> Solution {
        if !problem.is_well_formed() {
            warn!(
                variables = problem.num_variables(),
                "coefficient rows do not match the variable count"
            );
            return Solution::error(0);
        }

        let mut tableau = Tableau::build(problem);
        debug!(
            rows = tableau.n_constraints(),
            columns = tableau.data[0].len(),
            artificials = tableau.n_artificial,
            "built simplex tableau"
        );

        // Phase 1: Find initial basic feasible solution
        if tableau.n_artificial > 0 {
            match self.phase1(&mut tableau) {
                PhaseResult::Optimal => {}
                PhaseResult::Unbounded | PhaseResult::Infeasible => {
                    debug!(iterations = tableau.iterations, "phase 1 found no feasible point");
                    return Solution::infeasible(tableau.iterations);
                }
                PhaseResult::IterationLimit => {
                    warn!(iterations = tableau.iterations, "phase 1 hit the iteration limit");
                    return Solution::error(tableau.iterations);
                }
            }
        }

        // Phase 2: Optimize
        let status = self.phase2(&mut tableau);
        let iterations = tableau.iterations;
        let values = tableau.values(problem.num_variables());
        let objective_value = problem.evaluate_objective(&values);

        match status {
            PhaseResult::Optimal => Solution::optimal(values, objective_value, iterations),
            PhaseResult::Unbounded => Solution::unbounded(iterations),
            PhaseResult::IterationLimit => {
                warn!(iterations, "phase 2 hit the iteration limit, returning last feasible basis");
                Solution::feasible(values, objective_value, iterations)
            }
            PhaseResult::Infeasible => Solution::infeasible(iterations),
        }
    }

    fn phase1(&self, tableau: &mut Tableau) -> PhaseResult {
        // Maximize -sum(artificials), i.e. minimize their sum
        let obj_row = tableau.n_constraints();
        let n_cols = tableau.data[0].len();
        let art_start = tableau.artificial_start();

        let orig_obj = std::mem::replace(&mut tableau.data[obj_row], vec![0.0; n_cols]);
        for j in art_start..(art_start + tableau.n_artificial) {
            tableau.data[obj_row][j] = -1.0;
        }

        // Price out the basic artificials
        for i in 0..obj_row {
            if tableau.basic_vars[i] >= art_start {
                for j in 0..n_cols {
                    tableau.data[obj_row][j] += tableau.data[i][j];
                }
            }
        }

        match self.run(tableau, n_cols - 1) {
            PhaseResult::Optimal => {}
            other => return other,
        }

        let rhs_col = n_cols - 1;
        for i in 0..obj_row {
            if tableau.basic_vars[i] >= art_start && tableau.data[i][rhs_col].abs() > self.config.tolerance {
                return PhaseResult::Infeasible;
            }
        }

        self.drive_out_artificials(tableau);

        // Restore original objective and price out the basis
        tableau.data[obj_row] = orig_obj;
        for i in 0..obj_row {
            let basic = tableau.basic_vars[i];
            let ratio = tableau.data[obj_row][basic];
            if ratio.abs() > self.config.tolerance {
                for j in 0..n_cols {
                    tableau.data[obj_row][j] -= ratio * tableau.data[i][j];
                }
            }
        }

        PhaseResult::Optimal
    }

    /// Pivot zero-level artificials out of the basis where a real column allows it.
    /// Rows with no such column are redundant and keep their artificial at zero.
    fn drive_out_artificials(&self, tableau: &mut Tableau) {
        let art_start = tableau.artificial_start();
        for i in 0..tableau.n_constraints() {
            if tableau.basic_vars[i] < art_start {
                continue;
            }
            let col = (0..art_start).find(|&j| tableau.data[i][j].abs() > self.config.tolerance);
            if let Some(col) = col {
                tableau.pivot(i, col);
            }
        }
    }

    fn phase2(&self, tableau: &mut Tableau) -> PhaseResult {
        // Artificial columns never re-enter
        let exclude_from = tableau.artificial_start();
        self.run(tableau, exclude_from)
    }

    fn run(&self, tableau: &mut Tableau, column_limit: usize) -> PhaseResult {
        for _ in 0..self.config.max_iterations {
            let Some(pivot_col) = self.find_pivot_column(tableau, column_limit) else {
                return PhaseResult::Optimal;
            };
            let Some(pivot_row) = self.find_pivot_row(tableau, pivot_col) else {
                return PhaseResult::Unbounded;
            };
            tableau.pivot(pivot_row, pivot_col);
        }

        // Optimal if the last pivot happened to finish the job
        if self.find_pivot_column(tableau, column_limit).is_none() {
            PhaseResult::Optimal
        } else {
            PhaseResult::IterationLimit
        }
    }

    /// Bland's rule: the lowest-index column with a positive reduced cost.
    /// Terminates on degenerate bases.
    fn find_pivot_column(&self, tableau: &Tableau, column_limit: usize) -> Option<usize> {
        let obj_row = tableau.n_constraints();
        (0..column_limit).find(|&j| tableau.data[obj_row][j] > self.config.tolerance)
    }

    fn find_pivot_row(&self, tableau: &Tableau, col: usize) -> Option<usize> {
        let rhs_col = tableau.data[0].len() - 1;

        let mut min_ratio = f64::INFINITY;
        let mut min_row = None;

        for i in 0..tableau.n_constraints() {
            let val = tableau.data[i][col];
            if val > self.config.tolerance {
                let ratio = tableau.data[i][rhs_col].max(0.0) / val;
                // Ratio ties leave on the smallest basic variable index
                let better = match min_row {
                    None => true,
                    Some(r) => {
                        ratio < min_ratio - self.config.tolerance
                            || (ratio <= min_ratio + self.config.tolerance
                                && tableau.basic_vars[i] < tableau.basic_vars[r])
                    }
                };
                if better {
                    min_ratio = ratio;
                    min_row = Some(i);
                }
            }
        }

        min_row
    }
}

struct Tableau {
    /// Constraint rows followed by the objective row; last column is the RHS
    data: Vec<Vec<f64>>,
    basic_vars: Vec<usize>,
    n_vars: usize,
    n_slack: usize,
    n_artificial: usize,
    iterations: usize,
}

enum PhaseResult {
    Optimal,
    Unbounded,
    Infeasible,
    IterationLimit,
}

impl Tableau {
    fn build(problem: &LpProblem) -> Self {
        let n_vars = problem.num_variables();
        let n_constraints = problem.num_constraints();

        // Count slack and artificial variables needed
        let mut n_slack = 0;
        let mut n_artificial = 0;

        let ops: Vec<ConstraintOp> = problem.constraints.iter().map(normalized_op).collect();
        for op in &ops {
            match op {
                ConstraintOp::Le => n_slack += 1,
                ConstraintOp::Ge => {
                    n_slack += 1; // surplus
                    n_artificial += 1;
                }
                ConstraintOp::Eq => n_artificial += 1,
            }
        }

        let total_cols = n_vars + n_slack + n_artificial + 1; // +1 for RHS
        let total_rows = n_constraints + 1; // +1 for objective

        let mut tableau = Tableau {
            data: vec![vec![0.0; total_cols]; total_rows],
            basic_vars: vec![0; n_constraints],
            n_vars,
            n_slack,
            n_artificial,
            iterations: 0,
        };

        let mut slack_idx = n_vars;
        let mut artificial_idx = n_vars + n_slack;

        for (i, c) in problem.constraints.iter().enumerate() {
            // Keep the RHS non-negative by flipping the row
            let flip = c.rhs < 0.0;
            let sign = if flip { -1.0 } else { 1.0 };
            for (j, &coef) in c.coefficients.iter().enumerate() {
                tableau.data[i][j] = sign * coef;
            }
            tableau.data[i][total_cols - 1] = sign * c.rhs;

            match ops[i] {
                ConstraintOp::Le => {
                    tableau.data[i][slack_idx] = 1.0;
                    tableau.basic_vars[i] = slack_idx;
                    slack_idx += 1;
                }
                ConstraintOp::Ge => {
                    tableau.data[i][slack_idx] = -1.0; // surplus
                    slack_idx += 1;
                    tableau.data[i][artificial_idx] = 1.0;
                    tableau.basic_vars[i] = artificial_idx;
                    artificial_idx += 1;
                }
                ConstraintOp::Eq => {
                    tableau.data[i][artificial_idx] = 1.0;
                    tableau.basic_vars[i] = artificial_idx;
                    artificial_idx += 1;
                }
            }
        }

        // Simplex maximizes, so a minimization stores -c
        let obj_row = n_constraints;
        for (j, &coef) in problem.objective.coefficients.iter().enumerate() {
            tableau.data[obj_row][j] = if problem.objective.minimize { -coef } else { coef };
        }

        tableau
    }

    fn n_constraints(&self) -> usize {
        self.basic_vars.len()
    }

    fn artificial_start(&self) -> usize {
        self.n_vars + self.n_slack
    }

    fn pivot(&mut self, row: usize, col: usize) {
        let n_cols = self.data[0].len();

        self.basic_vars[row] = col;
        self.iterations += 1;

        let pivot_val = self.data[row][col];
        for j in 0..n_cols {
            self.data[row][j] /= pivot_val;
        }

        let pivot_row = self.data[row].clone();
        for (i, data_row) in self.data.iter_mut().enumerate() {
            if i == row {
                continue;
            }
            let factor = data_row[col];
            if factor != 0.0 {
                for (cell, p) in data_row.iter_mut().zip(&pivot_row) {
                    *cell -= factor * p;
                }
            }
        }
    }

    fn values(&self, n_vars: usize) -> Vec<f64> {
        let rhs_col = self.data[0].len() - 1;
        let mut values = vec![0.0; n_vars];
        for (i, &basic) in self.basic_vars.iter().enumerate() {
            if basic < n_vars {
                values[basic] = self.data[i][rhs_col];
            }
        }
        values
    }
}

/// Operator of the row after flipping it to a non-negative RHS
fn normalized_op(c: &Constraint) -> ConstraintOp {
    match (c.op, c.rhs < 0.0) {
        (ConstraintOp::Le, true) => ConstraintOp::Ge,
        (ConstraintOp::Ge, true) => ConstraintOp::Le,
        (op, _) => op,
    }
}
