use thiserror::Error;

use crate::base_types::{Capacity, CompanyId, Gpa, StudentId};

/// Malformed or infeasible input. Raised before any allocation begins.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("could not parse input: {0}")]
    Malformed(String),

    #[error("the company table is empty")]
    NoCompanies,

    #[error("total capacity exceeds {maximum} seats")]
    CapacityOverflow { maximum: Capacity },

    #[error("total capacity is 0 but {students} students need a placement")]
    NoCapacity { students: usize },

    #[error("company {0} appears more than once in the company table")]
    DuplicateCompany(CompanyId),

    #[error("student {0} appears more than once in the student table")]
    DuplicateStudent(StudentId),

    #[error("student {student} has invalid gpa {gpa}")]
    InvalidGpa { student: StudentId, gpa: Gpa },

    #[error("student {student} lists {count} preferences, at least {minimum} required")]
    TooFewPreferences {
        student: StudentId,
        count: usize,
        minimum: usize,
    },

    #[error("student {student} lists {count} preferences, at most {maximum} allowed")]
    TooManyPreferences {
        student: StudentId,
        count: usize,
        maximum: usize,
    },

    #[error("student {student} lists company {company} more than once")]
    DuplicatePreference {
        student: StudentId,
        company: CompanyId,
    },

    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}
