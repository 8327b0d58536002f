/// A linear program over non-negative continuous variables.
///
/// Every variable is bounded below by zero and unbounded above; any other
/// bound has to be expressed as a constraint row.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct LpProblem {
    /// Variable names (diagnostics only)
    pub variables: Vec<String>,
    /// Objective function coefficients
    pub objective: Objective,
    /// Constraint rows
    pub constraints: Vec<Constraint>,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct Objective {
    /// Coefficients for each variable
    pub coefficients: Vec<f64>,
    /// Whether to minimize or maximize
    pub minimize: bool,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct Constraint {
    /// Name/label for the constraint (for diagnostics)
    pub name: String,
    /// Coefficients for each variable
    pub coefficients: Vec<f64>,
    /// Comparison operator
    pub op: ConstraintOp,
    /// Right-hand side value
    pub rhs: f64,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintOp {
    /// Less than or equal (<=)
    Le,
    /// Greater than or equal (>=)
    Ge,
    /// Equal (=)
    Eq,
}

impl LpProblem {
    pub fn new(variables: Vec<String>) -> Self {
        let n = variables.len();
        Self {
            variables,
            objective: Objective {
                coefficients: vec![0.0; n],
                minimize: true,
            },
            constraints: Vec::new(),
        }
    }

    pub fn set_objective(&mut self, coefficients: Vec<f64>, minimize: bool) {
        self.objective = Objective { coefficients, minimize };
    }

    pub fn add_constraint(&mut self, name: impl Into<String>, coefficients: Vec<f64>, op: ConstraintOp, rhs: f64) {
        self.constraints.push(Constraint {
            name: name.into(),
            coefficients,
            op,
            rhs,
        });
    }

    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// Left-hand side of constraint `index` at the given variable values.
    ///
    /// Returns `None` when the index is out of range.
    pub fn evaluate_constraint(&self, index: usize, values: &[f64]) -> Option<f64> {
        self.constraints
            .get(index)
            .map(|c| dot(&c.coefficients, values))
    }

    /// Objective value at the given variable values.
    pub fn evaluate_objective(&self, values: &[f64]) -> f64 {
        dot(&self.objective.coefficients, values)
    }

    /// True when every coefficient row has one entry per variable.
    pub fn is_well_formed(&self) -> bool {
        let n = self.num_variables();
        self.objective.coefficients.len() == n
            && self.constraints.iter().all(|c| c.coefficients.len() == n)
    }
}

fn dot(coefficients: &[f64], values: &[f64]) -> f64 {
    coefficients
        .iter()
        .zip(values)
        .map(|(c, x)| c * x)
        .sum()
}
