pub mod assignment;
pub mod error;
pub mod evaluated_assignment;
pub mod json_serialisation;
pub mod satisfaction;
pub mod statistics;
pub mod tables;
pub mod test_utilities;

pub use assignment::{Assignment, Placement};
pub use error::InvariantViolation;
pub use evaluated_assignment::EvaluatedAssignment;
pub use satisfaction::satisfaction_score;
