//! Priority allocation by gpa.


use std::sync::Arc;

use model::base_types::{CompanyIdx, Rank, StudentIdx};
use model::companies::Companies;
use model::config::Config;
use model::students::Students;
use rand::Rng;
use solution::{Assignment, EvaluatedAssignment, InvariantViolation};
use tracing::debug;

use crate::{Solution, Solver};

pub struct Greedy {
    students: Arc<Students>,
    companies: Arc<Companies>,
}

impl Solver for Greedy {
    fn initialize(
        students: Arc<Students>,
        companies: Arc<Companies>,
        _config: Arc<Config>,
    ) -> Greedy {
        Greedy {
            students,
            companies,
        }
    }

    /// Allocates all students from scratch. Draws nothing from `rng`.
    fn solve<R: Rng>(&self, _rng: &mut R) -> Result<Solution, InvariantViolation> {
        let mut assignment = Assignment::empty(self.students.clone(), self.companies.clone());
        let placed = fill(&mut assignment, self.students.indices())?;

        let solution = EvaluatedAssignment::evaluate(assignment);
        debug!(
            placed = placed.len(),
            unplaced = self.students.len() - placed.len(),
            score = solution.score(),
            "greedy allocation finished"
        );
        Ok(solution)
    }
}

/// Candidates sorted by gpa descending. Equal gpas keep input order.
pub fn priority_order(
    students: &Students,
    subset: impl IntoIterator<Item = StudentIdx>,
) -> Vec<StudentIdx> {
    let mut order: Vec<StudentIdx> = subset.into_iter().collect();
    order.sort_by(|&a, &b| {
        students
            .get(b)
            .gpa()
            .total_cmp(&students.get(a).gpa())
            .then(a.cmp(&b))
    });
    order
}

/// The best ranked company of the student's list that still has a free seat.
pub fn first_available(assignment: &Assignment, student: StudentIdx) -> Option<CompanyIdx> {
    assignment
        .students()
        .get(student)
        .preferences()
        .map(|(_, company)| company)
        .find(|&company| assignment.has_spare_capacity(company))
}

/// One greedy step: places the student at their best available preference. Returns None if every
/// listed company is full.
pub fn place_greedily(
    assignment: &mut Assignment,
    student: StudentIdx,
) -> Result<Option<(CompanyIdx, Rank)>, InvariantViolation> {
    match first_available(assignment, student) {
        Some(company) => {
            let rank = assignment.place(student, company)?;
            Ok(Some((company, rank)))
        }
        None => Ok(None),
    }
}

/// Runs the greedy allocation for the given candidates against the live capacities of
/// `assignment`. Candidates that are already placed are ignored. Returns the newly placed students
/// in processing order.
pub fn fill(
    assignment: &mut Assignment,
    candidates: impl IntoIterator<Item = StudentIdx>,
) -> Result<Vec<StudentIdx>, InvariantViolation> {
    let unplaced = candidates
        .into_iter()
        .filter(|&s| !assignment.is_placed(s))
        .collect::<Vec<_>>();
    let order = priority_order(assignment.students(), unplaced);

    let mut placed = Vec::new();
    for student in order {
        if place_greedily(assignment, student)?.is_some() {
            placed.push(student);
        }
    }
    Ok(placed)
}
