//! JSON form of the diet tables.
//!
//! Foods name their nutrient values instead of listing them by position,
//! so a dataset cannot be silently misaligned with its nutrient list.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::DietError;
use crate::food::{DietTables, Food, Nutrient};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Dataset {
    pub nutrients: Vec<Nutrient>,
    pub foods: Vec<DatasetFood>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DatasetFood {
    pub name: String,
    #[serde(default)]
    pub unit: String,
    pub cost: f64,
    /// Nutrient name to content per unit; omitted nutrients are zero
    #[serde(default)]
    pub nutrients: BTreeMap<String, f64>,
}

impl Dataset {
    pub fn from_json(source: &str) -> Result<Self, DietError> {
        serde_json::from_str(source).map_err(|e| DietError::DatasetError(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, DietError> {
        serde_json::to_string_pretty(self).map_err(|e| DietError::DatasetError(e.to_string()))
    }

    /// Align every food's values with the nutrient list and validate.
    pub fn into_tables(self) -> Result<DietTables, DietError> {
        let mut foods = Vec::with_capacity(self.foods.len());
        for food in self.foods {
            let mut content = vec![0.0; self.nutrients.len()];
            for (name, value) in &food.nutrients {
                let index = self
                    .nutrients
                    .iter()
                    .position(|n| &n.name == name)
                    .ok_or_else(|| DietError::UnknownNutrient {
                        food: food.name.clone(),
                        nutrient: name.clone(),
                    })?;
                content[index] = *value;
            }
            foods.push(Food::new(food.name, food.unit, food.cost, content));
        }

        let tables = DietTables::new(foods, self.nutrients);
        tables.validate()?;
        Ok(tables)
    }
}

impl DietTables {
    /// Read and validate tables from a JSON dataset file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DietError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .map_err(|e| DietError::IoError(format!("{}: {}", path.display(), e)))?;
        debug!(path = %path.display(), "loading diet dataset");
        Dataset::from_json(&source)?.into_tables()
    }

    /// Dataset form of these tables. Zero values are left out.
    pub fn to_dataset(&self) -> Dataset {
        let foods = self
            .foods
            .iter()
            .map(|f| DatasetFood {
                name: f.name.clone(),
                unit: f.unit.clone(),
                cost: f.cost,
                nutrients: self
                    .nutrients
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| f.content_of(*i) != 0.0)
                    .map(|(i, n)| (n.name.clone(), f.content_of(i)))
                    .collect(),
            })
            .collect();

        Dataset {
            nutrients: self.nutrients.clone(),
            foods,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stigler;

    const SAMPLE: &str = r#"
        {
            "nutrients": [
                { "name": "protein", "minimum": 6 },
                { "name": "vitamin", "minimum": 4 }
            ],
            "foods": [
                { "name": "beans", "unit": "1 lb.", "cost": 2, "nutrients": { "protein": 3 } },
                { "name": "greens", "cost": 3, "nutrients": { "vitamin": 2 } }
            ]
        }
    "#;

    #[test]
    fn test_named_values_align_by_nutrient() {
        let tables = Dataset::from_json(SAMPLE).unwrap().into_tables().unwrap();

        assert_eq!(tables.nutrients.len(), 2);
        assert_eq!(tables.foods[0].content, vec![3.0, 0.0]);
        assert_eq!(tables.foods[1].content, vec![0.0, 2.0]);
        assert_eq!(tables.foods[1].unit, "");
    }

    #[test]
    fn test_unknown_nutrient_rejected() {
        let source = SAMPLE.replace("\"vitamin\": 2", "\"vitamn\": 2");
        match Dataset::from_json(&source).unwrap().into_tables() {
            Err(DietError::UnknownNutrient { food, nutrient }) => {
                assert_eq!(food, "greens");
                assert_eq!(nutrient, "vitamn");
            }
            other => panic!("expected UnknownNutrient, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_json_rejected() {
        assert!(matches!(
            Dataset::from_json("{ \"foods\": [] }"),
            Err(DietError::DatasetError(_))
        ));
    }

    #[test]
    fn test_validation_applies() {
        let source = SAMPLE.replace("\"cost\": 3", "\"cost\": -3");
        assert!(matches!(
            Dataset::from_json(&source).unwrap().into_tables(),
            Err(DietError::InvalidCost { .. })
        ));
    }

    #[test]
    fn test_stigler_survives_json() {
        let tables = stigler::tables();
        let json = tables.to_dataset().to_json().unwrap();
        let reloaded = Dataset::from_json(&json).unwrap().into_tables().unwrap();

        assert_eq!(reloaded.nutrients, tables.nutrients);
        assert_eq!(reloaded.foods.len(), tables.foods.len());
        for (a, b) in reloaded.foods.iter().zip(&tables.foods) {
            assert_eq!(a.name, b.name);
            assert!((a.cost - b.cost).abs() < 1e-12);
            for (x, y) in a.content.iter().zip(&b.content) {
                assert!((x - y).abs() < 1e-9, "{}: {} vs {}", a.name, x, y);
            }
        }
    }

    #[test]
    fn test_load_sample_file() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../data/two_foods.json");
        let tables = DietTables::load(path).unwrap();

        assert_eq!(tables.foods.len(), 2);
        assert_eq!(tables.food("A").unwrap().content_by_name(&tables, "nutrient-1"), Some(3.0));
        assert_eq!(tables.food("B").unwrap().content_by_name(&tables, "nutrient-1"), Some(0.0));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            DietTables::load("/nonexistent/diet.json"),
            Err(DietError::IoError(_))
        ));
    }
}
