//! The satisfaction score: the objective every optimizer maximizes.

use model::base_types::{Rank, Score, StudentIdx};

use crate::assignment::{Assignment, Placement};

/// Points for ranks outside the weight table. Unreachable with at most five preferences.
pub const DEFAULT_RANK_WEIGHT: Score = 10;

pub fn rank_weight(rank: Rank) -> Score {
    match rank {
        1 => 100,
        2 => 85,
        3 => 70,
        4 => 50,
        5 => 30,
        _ => DEFAULT_RANK_WEIGHT,
    }
}

/// Points of a single student. Unplaced and unranked placements are worth nothing.
pub fn contribution(placement: Option<Placement>) -> Score {
    placement
        .and_then(|p| p.rank())
        .map(rank_weight)
        .unwrap_or(0)
}

pub fn student_contribution(assignment: &Assignment, student: StudentIdx) -> Score {
    contribution(assignment.placement_of(student))
}

pub fn satisfaction_score(assignment: &Assignment) -> Score {
    assignment
        .students()
        .indices()
        .map(|s| student_contribution(assignment, s))
        .sum()
}
