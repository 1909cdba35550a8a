//! Repeated admission rounds with random attrition.


use std::fmt;
use std::sync::Arc;

use model::base_types::{Capacity, CompanyId, StudentId, StudentIdx};
use model::companies::Companies;
use model::config::{Config, ConfigRoundSimulation};
use model::students::Students;
use rand::Rng;
use serde::Serialize;
use solution::{Assignment, EvaluatedAssignment, InvariantViolation};
use tracing::debug;

use crate::greedy::fill;
use crate::{Solution, Solver};

/// An evicted placement, displayed as `company→student`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub company: CompanyId,
    pub student: StudentId,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}→{}", self.company, self.student)
    }
}

impl Serialize for Rejection {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundRecord {
    pub round: usize, // 1-based
    pub placed: usize,
    pub rejected: usize,
    pub remaining_capacity: Capacity, // summed over all companies, after attrition
    pub rejection_sample: Vec<Rejection>,
}

#[derive(Debug, Clone)]
pub struct SimulationOutcome {
    pub solution: Solution,
    pub rounds: Vec<RoundRecord>,
}

pub struct RoundSimulator {
    students: Arc<Students>,
    companies: Arc<Companies>,
    config: ConfigRoundSimulation,
}

impl Solver for RoundSimulator {
    fn initialize(
        students: Arc<Students>,
        companies: Arc<Companies>,
        config: Arc<Config>,
    ) -> RoundSimulator {
        RoundSimulator {
            students,
            companies,
            config: config.round_simulation.clone(),
        }
    }

    fn solve<R: Rng>(&self, rng: &mut R) -> Result<Solution, InvariantViolation> {
        self.solve_with_log(rng).map(|outcome| outcome.solution)
    }
}

impl RoundSimulator {
    /// Simulation starting from the empty assignment.
    pub fn solve_with_log<R: Rng>(
        &self,
        rng: &mut R,
    ) -> Result<SimulationOutcome, InvariantViolation> {
        let empty = Assignment::empty(self.students.clone(), self.companies.clone());
        self.simulate(empty, rng)
    }

    /// Runs rounds on `assignment` until a round places nobody or the round limit is reached.
    #[tracing::instrument(skip_all, fields(max_rounds = self.config.max_rounds))]
    pub fn simulate<R: Rng>(
        &self,
        mut assignment: Assignment,
        rng: &mut R,
    ) -> Result<SimulationOutcome, InvariantViolation> {
        let mut rounds = Vec::new();
        for round in 1..=self.config.max_rounds {
            let placed = self.admit(&mut assignment)?;
            if placed.is_empty() {
                debug!(round, "fixed point reached");
                break;
            }
            let rejections = self.reject(&mut assignment, rng)?;

            let record = RoundRecord {
                round,
                placed: placed.len(),
                rejected: rejections.len(),
                remaining_capacity: assignment.total_remaining_capacity(),
                rejection_sample: rejections
                    .into_iter()
                    .take(self.config.rejection_sample_size)
                    .collect(),
            };
            debug!(
                round,
                placed = record.placed,
                rejected = record.rejected,
                remaining_capacity = record.remaining_capacity,
                "round finished"
            );
            rounds.push(record);
        }

        assignment.verify_consistency()?;
        Ok(SimulationOutcome {
            solution: EvaluatedAssignment::evaluate(assignment),
            rounds,
        })
    }

    /// Greedy allocation of the currently unplaced students against the live capacities.
    pub fn admit(
        &self,
        assignment: &mut Assignment,
    ) -> Result<Vec<StudentIdx>, InvariantViolation> {
        let unplaced: Vec<StudentIdx> = assignment.unplaced_students().collect();
        fill(assignment, unplaced)
    }

    /// Evicts every placed student independently with the rejection probability. Rejections are
    /// returned in input order of the students.
    pub fn reject<R: Rng>(
        &self,
        assignment: &mut Assignment,
        rng: &mut R,
    ) -> Result<Vec<Rejection>, InvariantViolation> {
        let placed: Vec<StudentIdx> = assignment.placed_students().collect();
        let mut rejections = Vec::new();
        for student in placed {
            if rng.gen_bool(self.config.rejection_probability) {
                let company = assignment.evict(student)?;
                rejections.push(Rejection {
                    company: self.companies.get(company).id().clone(),
                    student: self.students.get(student).id().clone(),
                });
            }
        }
        Ok(rejections)
    }
}
