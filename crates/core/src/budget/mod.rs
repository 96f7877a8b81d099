//! Budget versus actual variance.

pub mod types;
pub mod variance;


pub use types::{Budget, BudgetItem, BudgetVarianceReport, VarianceLine, VarianceStatus};
pub use variance::{BudgetVarianceCalculator, DELETED_ACCOUNT_NAME};
