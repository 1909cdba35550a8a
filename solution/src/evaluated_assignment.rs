use std::cmp::Ordering;

use model::base_types::Score;

use crate::assignment::Assignment;
use crate::satisfaction::satisfaction_score;

/// An assignment together with its satisfaction score. Ordered by score.
#[derive(Debug, Clone)]
pub struct EvaluatedAssignment {
    assignment: Assignment,
    score: Score,
}

impl EvaluatedAssignment {
    pub fn new(assignment: Assignment, score: Score) -> EvaluatedAssignment {
        EvaluatedAssignment { assignment, score }
    }

    pub fn evaluate(assignment: Assignment) -> EvaluatedAssignment {
        let score = satisfaction_score(&assignment);
        EvaluatedAssignment { assignment, score }
    }

    pub fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn into_assignment(self) -> Assignment {
        self.assignment
    }
}

impl Ord for EvaluatedAssignment {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score.cmp(&other.score)
    }
}

impl PartialOrd for EvaluatedAssignment {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for EvaluatedAssignment {
    fn eq(&self, other: &Self) -> bool {
        self.score == other.score
    }
}

impl Eq for EvaluatedAssignment {}
