pub mod compound;
pub mod debt;
pub mod emergency;
pub mod error;
pub mod investment;
pub mod loan;
pub mod mortgage;
pub mod numeric;
pub mod ratios;
pub mod retirement;
pub mod schedule;
pub mod tax;
pub mod types;

pub use error::FinPlanError;
pub use types::*;

/// Standard result type for all finplan operations
pub type FinPlanResult<T> = Result<T, FinPlanError>;
