mod error;
mod food;
mod model;
mod report;
pub mod stigler;

#[cfg(feature = "serde")]
mod dataset;

pub use error::DietError;
pub use food::{DietTables, Food, Nutrient};
pub use model::DietModel;
pub use report::{approx_eq, check_tolerance, DietReport, FoodQuantity, NutrientTotal, Outcome, DEFAULT_TOLERANCE};

#[cfg(feature = "serde")]
pub use dataset::{Dataset, DatasetFood};
