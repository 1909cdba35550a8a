use model::base_types::{CompanyIdx, Score, StudentIdx};
use rand::seq::index::sample;
use rand::Rng;
use solution::satisfaction::student_contribution;
use solution::{Assignment, InvariantViolation};

use crate::greedy::first_available;

/// A perturbation of an assignment touching at most two students.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    /// Exchange the companies of two placed students.
    Swap {
        first: StudentIdx,
        second: StudentIdx,
    },
    /// Place an unplaced student at their best preference with a free seat.
    Relocate {
        student: StudentIdx,
        company: CompanyIdx,
    },
}

impl Move {
    /// Samples two distinct students and derives the applicable move. None means the iteration is
    /// a no-op: fewer than two students, both at the same company, or no free seat for an
    /// unplaced student.
    pub fn propose<R: Rng>(assignment: &Assignment, rng: &mut R) -> Option<Move> {
        let number_of_students = assignment.students().len();
        if number_of_students < 2 {
            return None;
        }
        let pair = sample(rng, number_of_students, 2);
        let first = StudentIdx::new(pair.index(0));
        let second = StudentIdx::new(pair.index(1));

        match (assignment.company_of(first), assignment.company_of(second)) {
            (Some(a), Some(b)) if a != b => Some(Move::Swap { first, second }),
            (Some(_), Some(_)) => None,
            _ => [first, second]
                .into_iter()
                .filter(|&s| !assignment.is_placed(s))
                .find_map(|student| {
                    first_available(assignment, student)
                        .map(|company| Move::Relocate { student, company })
                }),
        }
    }

    fn affected_students(&self) -> [Option<StudentIdx>; 2] {
        match *self {
            Move::Swap { first, second } => [Some(first), Some(second)],
            Move::Relocate { student, .. } => [Some(student), None],
        }
    }

    fn local_score(&self, assignment: &Assignment) -> Score {
        self.affected_students()
            .into_iter()
            .flatten()
            .map(|s| student_contribution(assignment, s))
            .sum()
    }

    /// Applies the move and returns the score delta, computed from the affected students only.
    pub fn apply(&self, assignment: &mut Assignment) -> Result<Score, InvariantViolation> {
        let before = self.local_score(assignment);
        match *self {
            Move::Swap { first, second } => assignment.swap(first, second)?,
            Move::Relocate { student, company } => {
                assignment.place(student, company)?;
            }
        }
        Ok(self.local_score(assignment) - before)
    }

    /// Undoes a previously applied move.
    pub fn revert(&self, assignment: &mut Assignment) -> Result<(), InvariantViolation> {
        match *self {
            Move::Swap { first, second } => assignment.swap(first, second),
            Move::Relocate { student, .. } => assignment.evict(student).map(|_| ()),
        }
    }
}
