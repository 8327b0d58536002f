use stigler_solver::{SolutionStatus, SolverError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DietError {
    #[error("Food '{food}' lists {found} nutrient values but there are {expected} nutrients")]
    CoefficientCount {
        food: String,
        expected: usize,
        found: usize,
    },
    #[error("Duplicate food: {0}")]
    DuplicateFood(String),
    #[error("Duplicate nutrient: {0}")]
    DuplicateNutrient(String),
    #[error("Food '{food}' has invalid cost {cost}: must be finite and non-negative")]
    InvalidCost { food: String, cost: f64 },
    #[error("Food '{food}' has invalid {nutrient} content {value}: must be finite and non-negative")]
    InvalidContent {
        food: String,
        nutrient: String,
        value: f64,
    },
    #[error("Nutrient '{nutrient}' has invalid minimum {minimum}: must be finite")]
    InvalidMinimum { nutrient: String, minimum: f64 },
    #[error("Food '{food}' refers to unknown nutrient: {nutrient}")]
    UnknownNutrient { food: String, nutrient: String },
    #[error("Invalid tolerance {0}: must be finite and positive")]
    InvalidTolerance(f64),
    #[error("Solver unavailable: {0}")]
    SolverUnavailable(#[from] SolverError),
    #[error("No usable solution (status {status}){}", unreachable_suffix(.unreachable))]
    NoSolution {
        status: SolutionStatus,
        /// Nutrients with a positive minimum that no food supplies
        unreachable: Vec<String>,
    },
    #[error("Solver returned {found} values for {expected} foods")]
    ValueCount { expected: usize, found: usize },
    #[error("Realized {nutrient} total {realized} disagrees with its constraint row ({constraint})")]
    ModelMismatch {
        nutrient: String,
        realized: f64,
        constraint: f64,
    },
    #[error("Reported cost {reported} disagrees with the priced diet ({computed})")]
    CostMismatch { reported: f64, computed: f64 },
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Dataset error: {0}")]
    DatasetError(String),
}

fn unreachable_suffix(unreachable: &[String]) -> String {
    if unreachable.is_empty() {
        String::new()
    } else {
        format!("; no food supplies: {}", unreachable.join(", "))
    }
}

impl DietError {
    /// True for failures that happen before the solver is invoked.
    pub fn is_configuration(&self) -> bool {
        !matches!(
            self,
            DietError::NoSolution { .. }
                | DietError::ValueCount { .. }
                | DietError::ModelMismatch { .. }
                | DietError::CostMismatch { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_solution_message_lists_unreachable() {
        let err = DietError::NoSolution {
            status: SolutionStatus::Infeasible,
            unreachable: vec!["Vitamin C".to_string(), "Iron".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "No usable solution (status INFEASIBLE); no food supplies: Vitamin C, Iron"
        );

        let err = DietError::NoSolution {
            status: SolutionStatus::Error,
            unreachable: Vec::new(),
        };
        assert_eq!(err.to_string(), "No usable solution (status ERROR)");
        assert!(!err.is_configuration());
    }

    #[test]
    fn test_configuration_errors() {
        let err = DietError::CoefficientCount {
            food: "Milk".to_string(),
            expected: 9,
            found: 8,
        };
        assert!(err.is_configuration());
        assert!(DietError::from(SolverError::ZeroIterationLimit).is_configuration());
        assert!(DietError::InvalidTolerance(f64::NAN).is_configuration());
    }
}
