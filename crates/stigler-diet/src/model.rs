use stigler_solver::{ConstraintOp, LpProblem, LpSolver, Solution};
use tracing::{debug, info};

use crate::error::DietError;
use crate::food::DietTables;

/// The diet LP: one variable per food, one `>=` row per nutrient, minimize cost.
#[derive(Debug, Clone)]
pub struct DietModel {
    problem: LpProblem,
}

impl DietModel {
    /// Translate the tables into an LP.
    ///
    /// Fails before anything is built when the tables are inconsistent,
    /// most importantly when a food's content does not line up with the
    /// nutrient list. Empty food or nutrient lists are not special-cased.
    pub fn build(tables: &DietTables) -> Result<Self, DietError> {
        tables.validate()?;

        let variables: Vec<String> = tables.foods.iter().map(|f| f.name.clone()).collect();
        let mut lp = LpProblem::new(variables);

        let costs: Vec<f64> = tables.foods.iter().map(|f| f.cost).collect();
        lp.set_objective(costs, true);

        // Row i pairs nutrient i with content[i] of every food
        for (i, nutrient) in tables.nutrients.iter().enumerate() {
            let coeffs: Vec<f64> = tables.foods.iter().map(|f| f.content_of(i)).collect();
            lp.add_constraint(nutrient.name.clone(), coeffs, ConstraintOp::Ge, nutrient.minimum);
        }

        debug!(
            variables = lp.num_variables(),
            constraints = lp.num_constraints(),
            "built diet model"
        );

        Ok(Self { problem: lp })
    }

    pub fn problem(&self) -> &LpProblem {
        &self.problem
    }

    pub fn num_variables(&self) -> usize {
        self.problem.num_variables()
    }

    pub fn num_constraints(&self) -> usize {
        self.problem.num_constraints()
    }

    /// Hand the model to `solver` once.
    pub fn solve<S: LpSolver + ?Sized>(&self, solver: &S) -> Solution {
        info!(
            variables = self.num_variables(),
            constraints = self.num_constraints(),
            "solving diet model"
        );
        let solution = solver.solve(&self.problem);
        info!(status = %solution.status, iterations = solution.iterations, "solver finished");
        solution
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::food::{Food, Nutrient};
    use stigler_solver::{Solver, SolutionStatus};

    fn two_foods() -> DietTables {
        DietTables::new(
            vec![
                Food::new("A", "unit", 2.0, vec![3.0, 0.0]),
                Food::new("B", "unit", 3.0, vec![0.0, 2.0]),
            ],
            vec![
                Nutrient { name: "N1".to_string(), minimum: 6.0 },
                Nutrient { name: "N2".to_string(), minimum: 4.0 },
            ],
        )
    }

    #[test]
    fn test_build_shape() {
        let model = DietModel::build(&two_foods()).unwrap();
        let lp = model.problem();

        assert_eq!(model.num_variables(), 2);
        assert_eq!(model.num_constraints(), 2);
        assert_eq!(lp.variables, vec!["A".to_string(), "B".to_string()]);
        assert_eq!(lp.objective.coefficients, vec![2.0, 3.0]);
        assert!(lp.objective.minimize);

        // Each row is a nutrient, each column a food
        assert_eq!(lp.constraints[0].name, "N1");
        assert_eq!(lp.constraints[0].coefficients, vec![3.0, 0.0]);
        assert_eq!(lp.constraints[0].op, ConstraintOp::Ge);
        assert_eq!(lp.constraints[0].rhs, 6.0);
        assert_eq!(lp.constraints[1].name, "N2");
        assert_eq!(lp.constraints[1].coefficients, vec![0.0, 2.0]);
        assert_eq!(lp.constraints[1].rhs, 4.0);
        assert!(lp.is_well_formed());
    }

    #[test]
    fn test_build_rejects_misaligned_content() {
        let mut tables = two_foods();
        tables.foods[0].content.push(1.0);
        assert!(matches!(
            DietModel::build(&tables),
            Err(DietError::CoefficientCount { expected: 2, found: 3, .. })
        ));
    }

    #[test]
    fn test_build_empty_tables() {
        let no_foods = DietTables::new(Vec::new(), two_foods().nutrients);
        let model = DietModel::build(&no_foods).unwrap();
        assert_eq!(model.num_variables(), 0);
        assert_eq!(model.num_constraints(), 2);
        assert!(model.problem().constraints.iter().all(|c| c.coefficients.is_empty()));

        let mut no_nutrients = two_foods();
        no_nutrients.nutrients.clear();
        for food in &mut no_nutrients.foods {
            food.content.clear();
        }
        let model = DietModel::build(&no_nutrients).unwrap();
        assert_eq!(model.num_variables(), 2);
        assert_eq!(model.num_constraints(), 0);
    }

    #[test]
    fn test_solve_two_foods() {
        let model = DietModel::build(&two_foods()).unwrap();
        let solution = model.solve(&Solver::new());

        assert_eq!(solution.status, SolutionStatus::Optimal);
        assert!((solution.values[0] - 2.0).abs() < 1e-6);
        assert!((solution.values[1] - 2.0).abs() < 1e-6);
        assert!((solution.objective_value - 10.0).abs() < 1e-6);
    }

    #[test]
    fn test_solve_through_trait_object() {
        let model = DietModel::build(&two_foods()).unwrap();
        let solver: Box<dyn LpSolver> = Box::new(Solver::new());
        let solution = model.solve(solver.as_ref());
        assert_eq!(solution.status, SolutionStatus::Optimal);
    }
}
