use std::collections::HashSet;

use tracing::debug;

use crate::error::DietError;

/// A nutrient and its minimum daily requirement
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Nutrient {
    pub name: String,
    pub minimum: f64,
}

/// A food that can be bought in any non-negative quantity.
///
/// `content[i]` is the amount of `nutrients[i]` in one unit of the food,
/// where `nutrients` is the nutrient list of the [`DietTables`] the food
/// belongs to. The two lists are aligned by position.
#[derive(Debug, Clone, PartialEq)]
pub struct Food {
    pub name: String,
    /// Purchase unit, e.g. "1 lb." (display only)
    pub unit: String,
    /// Cost of one unit
    pub cost: f64,
    pub content: Vec<f64>,
}

impl Food {
    pub fn new(name: impl Into<String>, unit: impl Into<String>, cost: f64, content: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            unit: unit.into(),
            cost,
            content,
        }
    }

    /// Content for the nutrient at `index`; foods that omit it supply none.
    pub fn content_of(&self, index: usize) -> f64 {
        self.content.get(index).copied().unwrap_or(0.0)
    }

    /// Content for the nutrient called `nutrient` in `tables`.
    pub fn content_by_name(&self, tables: &DietTables, nutrient: &str) -> Option<f64> {
        tables.nutrient_index(nutrient).map(|i| self.content_of(i))
    }
}

/// The two input tables of a diet problem
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DietTables {
    pub foods: Vec<Food>,
    pub nutrients: Vec<Nutrient>,
}

impl DietTables {
    pub fn new(foods: Vec<Food>, nutrients: Vec<Nutrient>) -> Self {
        Self { foods, nutrients }
    }

    pub fn nutrient_index(&self, name: &str) -> Option<usize> {
        self.nutrients.iter().position(|n| n.name == name)
    }

    pub fn food(&self, name: &str) -> Option<&Food> {
        self.foods.iter().find(|f| f.name == name)
    }

    /// Check everything the model builder relies on.
    ///
    /// Empty tables are valid. Minimums may be zero or negative; such
    /// constraints are satisfied by buying nothing.
    pub fn validate(&self) -> Result<(), DietError> {
        let mut seen = HashSet::new();
        for n in &self.nutrients {
            if !seen.insert(n.name.as_str()) {
                return Err(DietError::DuplicateNutrient(n.name.clone()));
            }
            if !n.minimum.is_finite() {
                return Err(DietError::InvalidMinimum {
                    nutrient: n.name.clone(),
                    minimum: n.minimum,
                });
            }
        }

        let mut seen = HashSet::new();
        for food in &self.foods {
            if !seen.insert(food.name.as_str()) {
                return Err(DietError::DuplicateFood(food.name.clone()));
            }
            if food.content.len() != self.nutrients.len() {
                return Err(DietError::CoefficientCount {
                    food: food.name.clone(),
                    expected: self.nutrients.len(),
                    found: food.content.len(),
                });
            }
            if !food.cost.is_finite() || food.cost < 0.0 {
                return Err(DietError::InvalidCost {
                    food: food.name.clone(),
                    cost: food.cost,
                });
            }
            for (value, nutrient) in food.content.iter().zip(&self.nutrients) {
                if !value.is_finite() || *value < 0.0 {
                    return Err(DietError::InvalidContent {
                        food: food.name.clone(),
                        nutrient: nutrient.name.clone(),
                        value: *value,
                    });
                }
            }
        }

        debug!(
            foods = self.foods.len(),
            nutrients = self.nutrients.len(),
            "diet tables validated"
        );
        Ok(())
    }

    /// Nutrients with a positive minimum that every food lacks.
    pub fn unreachable_nutrients(&self) -> Vec<String> {
        self.nutrients
            .iter()
            .enumerate()
            .filter(|(i, n)| n.minimum > 0.0 && self.foods.iter().all(|f| f.content_of(*i) <= 0.0))
            .map(|(_, n)| n.name.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables() -> DietTables {
        DietTables::new(
            vec![
                Food::new("A", "1 lb.", 2.0, vec![3.0, 0.0]),
                Food::new("B", "1 qt.", 3.0, vec![0.0, 2.0]),
            ],
            vec![
                Nutrient { name: "N1".to_string(), minimum: 6.0 },
                Nutrient { name: "N2".to_string(), minimum: 4.0 },
            ],
        )
    }

    #[test]
    fn test_valid_tables() {
        assert!(tables().validate().is_ok());
        assert!(DietTables::default().validate().is_ok());
    }

    #[test]
    fn test_named_access() {
        let t = tables();
        let b = t.food("B").unwrap();
        assert_eq!(b.content_by_name(&t, "N2"), Some(2.0));
        assert_eq!(b.content_by_name(&t, "N1"), Some(0.0));
        assert_eq!(b.content_by_name(&t, "N3"), None);
        assert_eq!(b.content_of(7), 0.0);
    }

    #[test]
    fn test_coefficient_count_mismatch() {
        let mut t = tables();
        t.foods[1].content.pop();
        match t.validate() {
            Err(DietError::CoefficientCount { food, expected, found }) => {
                assert_eq!(food, "B");
                assert_eq!(expected, 2);
                assert_eq!(found, 1);
            }
            other => panic!("expected CoefficientCount, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicates_rejected() {
        let mut t = tables();
        t.foods[1].name = "A".to_string();
        assert!(matches!(t.validate(), Err(DietError::DuplicateFood(name)) if name == "A"));

        let mut t = tables();
        t.nutrients[1].name = "N1".to_string();
        assert!(matches!(t.validate(), Err(DietError::DuplicateNutrient(name)) if name == "N1"));
    }

    #[test]
    fn test_invalid_numbers_rejected() {
        let mut t = tables();
        t.foods[0].cost = -1.0;
        assert!(matches!(t.validate(), Err(DietError::InvalidCost { .. })));

        let mut t = tables();
        t.foods[0].content[1] = f64::NAN;
        assert!(matches!(t.validate(), Err(DietError::InvalidContent { nutrient, .. }) if nutrient == "N2"));

        let mut t = tables();
        t.nutrients[0].minimum = f64::INFINITY;
        assert!(matches!(t.validate(), Err(DietError::InvalidMinimum { .. })));
    }

    #[test]
    fn test_non_positive_minimums_are_valid() {
        let mut t = tables();
        t.nutrients[0].minimum = 0.0;
        t.nutrients[1].minimum = -5.0;
        assert!(t.validate().is_ok());
    }

    #[test]
    fn test_unreachable_nutrients() {
        let mut t = tables();
        assert!(t.unreachable_nutrients().is_empty());

        t.foods[1].content[1] = 0.0;
        assert_eq!(t.unreachable_nutrients(), vec!["N2".to_string()]);

        t.foods.clear();
        assert_eq!(t.unreachable_nutrients(), vec!["N1".to_string(), "N2".to_string()]);
    }
}
