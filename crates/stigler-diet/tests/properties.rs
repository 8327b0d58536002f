use proptest::prelude::*;
use stigler_diet::{approx_eq, DietModel, DietReport, DietTables, Food, Nutrient, DEFAULT_TOLERANCE};
use stigler_solver::Solver;

/// Every food supplies every nutrient, so any minimums are reachable.
fn diet_tables() -> impl Strategy<Value = DietTables> {
    (1usize..5, 1usize..4).prop_flat_map(|(n_foods, n_nutrients)| {
        let foods = prop::collection::vec(
            (0.5f64..10.0, prop::collection::vec(0.5f64..10.0, n_nutrients)),
            n_foods,
        );
        let minimums = prop::collection::vec(0.0f64..20.0, n_nutrients);
        (foods, minimums).prop_map(|(foods, minimums)| {
            let foods = foods
                .into_iter()
                .enumerate()
                .map(|(i, (cost, content))| Food::new(format!("food-{i}"), "unit", cost, content))
                .collect();
            let nutrients = minimums
                .into_iter()
                .enumerate()
                .map(|(i, minimum)| Nutrient {
                    name: format!("nutrient-{i}"),
                    minimum,
                })
                .collect();
            DietTables::new(foods, nutrients)
        })
    })
}

fn solve(tables: &DietTables) -> DietReport {
    let model = DietModel::build(tables).unwrap();
    let solution = model.solve(&Solver::new());
    DietReport::interpret(tables, &model, &solution, DEFAULT_TOLERANCE).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn reachable_minimums_are_met(tables in diet_tables()) {
        let report = solve(&tables);

        prop_assert!(report.is_optimal());
        for (total, nutrient) in report.nutrients.iter().zip(&tables.nutrients) {
            prop_assert!(
                total.realized >= nutrient.minimum - 1e-6,
                "{}: {} < {}", nutrient.name, total.realized, nutrient.minimum
            );
        }
    }

    #[test]
    fn cost_is_priced_quantities(tables in diet_tables()) {
        let report = solve(&tables);

        let priced: f64 = report
            .foods
            .iter()
            .map(|f| f.quantity * tables.food(&f.name).unwrap().cost)
            .sum();
        prop_assert!(approx_eq(priced, report.cost, 1e-6), "{} vs {}", priced, report.cost);
    }

    #[test]
    fn raising_a_minimum_never_lowers_cost(
        tables in diet_tables(),
        pick in any::<prop::sample::Index>(),
        extra in 0.0f64..10.0,
    ) {
        let base = solve(&tables).cost;

        let mut tighter = tables.clone();
        let i = pick.index(tighter.nutrients.len());
        tighter.nutrients[i].minimum += extra;
        let raised = solve(&tighter).cost;

        prop_assert!(raised >= base - 1e-6 * base.abs().max(1.0), "{} < {}", raised, base);
    }
}
