pub mod growth;
pub mod loan;
pub mod mortgage;
pub mod planning;
pub mod retirement;
