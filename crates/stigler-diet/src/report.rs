use std::fmt;

use stigler_solver::{Solution, SolutionStatus};
use tracing::{debug, warn};

use crate::error::DietError;
use crate::food::DietTables;
use crate::model::DietModel;

/// Tolerance for "meets minimum" and cross-check comparisons.
///
/// Comparisons scale it by the magnitude of the values involved. The one
/// exception is the zero cutoff for quantities: anything with `|x| <= tolerance`
/// units is treated as solver noise, dropped from both the food list and the
/// nutrient totals.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Reject a tolerance no comparison can work with.
pub fn check_tolerance(tolerance: f64) -> Result<f64, DietError> {
    if tolerance.is_finite() && tolerance > 0.0 {
        Ok(tolerance)
    } else {
        Err(DietError::InvalidTolerance(tolerance))
    }
}

/// What the solver's status means for the diet
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Optimal,
    /// Feasible, but optimality was not proven
    Feasible,
    InfeasibleOrError,
}

impl Outcome {
    pub fn from_status(status: SolutionStatus) -> Self {
        match status {
            SolutionStatus::Optimal => Outcome::Optimal,
            SolutionStatus::Feasible => Outcome::Feasible,
            SolutionStatus::Infeasible | SolutionStatus::Unbounded | SolutionStatus::Error => {
                Outcome::InfeasibleOrError
            }
        }
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct FoodQuantity {
    pub name: String,
    pub unit: String,
    /// Units bought per day
    pub quantity: f64,
    /// quantity * unit cost
    pub spend: f64,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct NutrientTotal {
    pub name: String,
    pub minimum: f64,
    pub realized: f64,
    pub met: bool,
}

/// Everything a run has to say about its solution
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct DietReport {
    pub outcome: Outcome,
    pub num_variables: usize,
    pub num_constraints: usize,
    /// Foods with a positive quantity, in table order
    pub foods: Vec<FoodQuantity>,
    pub cost: f64,
    pub nutrients: Vec<NutrientTotal>,
}

impl DietReport {
    /// Read a solution back in terms of the tables it was built from.
    ///
    /// Nutrient totals are re-aggregated from the food table and checked
    /// against the model's constraint rows; the solver's objective is
    /// checked against the priced diet. Either disagreement means the
    /// model and the tables are out of step.
    pub fn interpret(
        tables: &DietTables,
        model: &DietModel,
        solution: &Solution,
        tolerance: f64,
    ) -> Result<Self, DietError> {
        let tolerance = check_tolerance(tolerance)?;
        let outcome = Outcome::from_status(solution.status);
        if outcome == Outcome::InfeasibleOrError {
            return Err(DietError::NoSolution {
                status: solution.status,
                unreachable: tables.unreachable_nutrients(),
            });
        }
        if outcome == Outcome::Feasible {
            warn!("solver returned a feasible solution that may not be optimal");
        }

        if solution.values.len() != tables.foods.len() {
            return Err(DietError::ValueCount {
                expected: tables.foods.len(),
                found: solution.values.len(),
            });
        }

        // Solver noise around zero is not a purchase
        let quantities: Vec<f64> = solution
            .values
            .iter()
            .map(|&x| if x.abs() <= tolerance { 0.0 } else { x })
            .collect();

        let computed_cost: f64 = tables
            .foods
            .iter()
            .zip(&solution.values)
            .map(|(f, x)| f.cost * x)
            .sum();
        if !approx_eq(computed_cost, solution.objective_value, tolerance) {
            return Err(DietError::CostMismatch {
                reported: solution.objective_value,
                computed: computed_cost,
            });
        }

        let mut nutrients = Vec::with_capacity(tables.nutrients.len());
        for (i, nutrient) in tables.nutrients.iter().enumerate() {
            let realized: f64 = tables
                .foods
                .iter()
                .zip(&quantities)
                .map(|(f, q)| q * f.content_of(i))
                .sum();

            let constraint = model
                .problem()
                .evaluate_constraint(i, &quantities)
                .unwrap_or(f64::NAN);
            if !approx_eq(realized, constraint, tolerance) {
                return Err(DietError::ModelMismatch {
                    nutrient: nutrient.name.clone(),
                    realized,
                    constraint,
                });
            }

            let slack = tolerance * nutrient.minimum.abs().max(1.0);
            nutrients.push(NutrientTotal {
                name: nutrient.name.clone(),
                minimum: nutrient.minimum,
                realized,
                met: realized >= nutrient.minimum - slack,
            });
        }

        let foods: Vec<FoodQuantity> = tables
            .foods
            .iter()
            .zip(&quantities)
            .filter(|(_, q)| **q > 0.0)
            .map(|(f, q)| FoodQuantity {
                name: f.name.clone(),
                unit: f.unit.clone(),
                quantity: *q,
                spend: q * f.cost,
            })
            .collect();

        debug!(
            selected = foods.len(),
            cost = solution.objective_value,
            "interpreted solution"
        );

        Ok(Self {
            outcome,
            num_variables: model.num_variables(),
            num_constraints: model.num_constraints(),
            foods,
            cost: solution.objective_value,
            nutrients,
        })
    }

    pub fn is_optimal(&self) -> bool {
        self.outcome == Outcome::Optimal
    }

    /// True when every nutrient total reaches its minimum.
    pub fn all_met(&self) -> bool {
        self.nutrients.iter().all(|n| n.met)
    }

    pub fn quantity_of(&self, food: &str) -> f64 {
        self.foods
            .iter()
            .find(|f| f.name == food)
            .map(|f| f.quantity)
            .unwrap_or(0.0)
    }

    pub fn nutrient(&self, name: &str) -> Option<&NutrientTotal> {
        self.nutrients.iter().find(|n| n.name == name)
    }
}

/// `|a - b| <= tolerance * max(1, |a|, |b|)`
pub fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() <= tolerance * scale
}

impl fmt::Display for DietReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Number of variables = {}", self.num_variables)?;
        writeln!(f, "Number of constraints = {}", self.num_constraints)?;
        writeln!(f)?;

        match self.outcome {
            Outcome::Optimal => writeln!(f, "Optimal solution found")?,
            _ => {
                writeln!(f, "The problem does not have an optimal solution!")?;
                writeln!(f, "A potentially suboptimal solution was found.")?;
            }
        }

        writeln!(f)?;
        writeln!(f, "Daily Foods:")?;
        for food in &self.foods {
            writeln!(
                f,
                "{}: {:.4} x {} (${:.4})",
                food.name, food.quantity, food.unit, food.spend
            )?;
        }

        writeln!(f)?;
        writeln!(f, "Optimal cost: ${:.4}", self.cost)?;

        writeln!(f)?;
        writeln!(f, "Nutrients per day:")?;
        for n in &self.nutrients {
            let flag = if n.met { "" } else { " BELOW MINIMUM" };
            writeln!(f, "{}: {:.2} (min {}){}", n.name, n.realized, n.minimum, flag)?;
        }
        Ok(())
    }
}
