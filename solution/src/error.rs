use thiserror::Error;

use model::base_types::{Capacity, CompanyId, Rank, StudentId};

/// Corrupted internal bookkeeping. Always a programming fault; a run that observes one aborts.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("company {company} has no remaining capacity for student {student}")]
    CapacityExhausted {
        company: CompanyId,
        student: StudentId,
    },

    #[error("company {company} would exceed its initial capacity of {capacity}")]
    CapacityOverflow {
        company: CompanyId,
        capacity: Capacity,
    },

    #[error("student {student} is already placed at company {company}")]
    AlreadyPlaced {
        student: StudentId,
        company: CompanyId,
    },

    #[error("student {student} is not placed")]
    NotPlaced { student: StudentId },

    #[error("student {student} does not list company {company}")]
    NotPreferred {
        student: StudentId,
        company: CompanyId,
    },

    #[error("students {first} and {second} are both placed at company {company}")]
    SameCompany {
        first: StudentId,
        second: StudentId,
        company: CompanyId,
    },

    #[error("roster of company {company} disagrees with the placement of student {student}")]
    RosterMismatch {
        company: CompanyId,
        student: StudentId,
    },

    #[error("company {company} reports {remaining} remaining seats but {expected} are free")]
    RemainingCapacityMismatch {
        company: CompanyId,
        remaining: Capacity,
        expected: Capacity,
    },

    #[error(
        "student {student} holds rank {recorded:?} at company {company}, expected {expected:?}"
    )]
    RankMismatch {
        student: StudentId,
        company: CompanyId,
        recorded: Option<Rank>,
        expected: Option<Rank>,
    },
}
