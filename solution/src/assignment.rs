#[cfg(test)]
mod tests;

use std::sync::Arc;

use im::{OrdSet, Vector};
use model::base_types::{Capacity, CompanyId, CompanyIdx, Rank, StudentId, StudentIdx};
use model::companies::Companies;
use model::students::Students;

use crate::error::InvariantViolation;

/// Where a student is placed. `rank` is None if the company is not on the student's list, which
/// only a swap can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    company: CompanyIdx,
    rank: Option<Rank>,
}

impl Placement {
    pub fn company(&self) -> CompanyIdx {
        self.company
    }

    pub fn rank(&self) -> Option<Rank> {
        self.rank
    }
}

// The mutable state of an allocation run: placement of every student, roster and remaining seats
// of every company. The backing collections are persistent, so clones share structure and a
// snapshot costs O(1). All mutation goes through place, evict and swap.
#[derive(Debug, Clone)]
pub struct Assignment {
    // indexed by StudentIdx
    placements: Vector<Option<Placement>>,

    // indexed by CompanyIdx
    rosters: Vector<OrdSet<StudentIdx>>,
    remaining: Vector<Capacity>,

    students: Arc<Students>,
    companies: Arc<Companies>,
}

// basic methods
impl Assignment {
    pub fn empty(students: Arc<Students>, companies: Arc<Companies>) -> Assignment {
        Assignment {
            placements: students.indices().map(|_| None).collect(),
            rosters: companies.iter().map(|_| OrdSet::new()).collect(),
            remaining: companies.iter().map(|c| c.capacity()).collect(),
            students,
            companies,
        }
    }

    pub fn students(&self) -> &Arc<Students> {
        &self.students
    }

    pub fn companies(&self) -> &Arc<Companies> {
        &self.companies
    }

    pub fn placement_of(&self, student: StudentIdx) -> Option<Placement> {
        self.placements[student.idx()]
    }

    pub fn company_of(&self, student: StudentIdx) -> Option<CompanyIdx> {
        self.placement_of(student).map(|p| p.company)
    }

    pub fn rank_of(&self, student: StudentIdx) -> Option<Rank> {
        self.placement_of(student).and_then(|p| p.rank)
    }

    pub fn is_placed(&self, student: StudentIdx) -> bool {
        self.placement_of(student).is_some()
    }

    pub fn placed_students(&self) -> impl Iterator<Item = StudentIdx> + '_ {
        self.students.indices().filter(|&s| self.is_placed(s))
    }

    pub fn unplaced_students(&self) -> impl Iterator<Item = StudentIdx> + '_ {
        self.students.indices().filter(|&s| !self.is_placed(s))
    }

    pub fn number_of_placed(&self) -> usize {
        self.placements.iter().filter(|p| p.is_some()).count()
    }

    pub fn remaining_capacity(&self, company: CompanyIdx) -> Capacity {
        self.remaining[company.idx()]
    }

    pub fn has_spare_capacity(&self, company: CompanyIdx) -> bool {
        self.remaining_capacity(company) > 0
    }

    /// Bounded by the total capacity of the companies, which is checked on construction.
    pub fn total_remaining_capacity(&self) -> Capacity {
        self.remaining.iter().sum()
    }

    /// Members of the roster in input order.
    pub fn roster_of(&self, company: CompanyIdx) -> impl Iterator<Item = StudentIdx> + '_ {
        self.rosters[company.idx()].iter().copied()
    }

    pub fn roster_size(&self, company: CompanyIdx) -> usize {
        self.rosters[company.idx()].len()
    }
}

// modifications
impl Assignment {
    /// Places an unplaced student at a company of their own list and returns the rank.
    pub fn place(
        &mut self,
        student: StudentIdx,
        company: CompanyIdx,
    ) -> Result<Rank, InvariantViolation> {
        if let Some(placement) = self.placement_of(student) {
            return Err(InvariantViolation::AlreadyPlaced {
                student: self.student_id(student),
                company: self.company_id(placement.company),
            });
        }
        let rank = self.students.get(student).rank_of(company).ok_or_else(|| {
            InvariantViolation::NotPreferred {
                student: self.student_id(student),
                company: self.company_id(company),
            }
        })?;

        self.take_seat(student, company)?;
        self.placements.set(
            student.idx(),
            Some(Placement {
                company,
                rank: Some(rank),
            }),
        );
        Ok(rank)
    }

    /// Removes a student from their company, restoring one seat. Returns the vacated company.
    pub fn evict(&mut self, student: StudentIdx) -> Result<CompanyIdx, InvariantViolation> {
        let placement =
            self.placement_of(student)
                .ok_or_else(|| InvariantViolation::NotPlaced {
                    student: self.student_id(student),
                })?;
        self.free_seat(student, placement.company)?;
        self.placements.set(student.idx(), None);
        Ok(placement.company)
    }

    /// Exchanges the companies of two placed students. Capacities are unaffected. Each rank is
    /// recomputed against the student's own list; a company missing there leaves the rank empty.
    pub fn swap(&mut self, first: StudentIdx, second: StudentIdx) -> Result<(), InvariantViolation> {
        let first_placement =
            self.placement_of(first)
                .ok_or_else(|| InvariantViolation::NotPlaced {
                    student: self.student_id(first),
                })?;
        let second_placement =
            self.placement_of(second)
                .ok_or_else(|| InvariantViolation::NotPlaced {
                    student: self.student_id(second),
                })?;
        if first_placement.company == second_placement.company {
            return Err(InvariantViolation::SameCompany {
                first: self.student_id(first),
                second: self.student_id(second),
                company: self.company_id(first_placement.company),
            });
        }

        self.exchange_member(first_placement.company, first, second)?;
        self.exchange_member(second_placement.company, second, first)?;

        self.placements.set(
            first.idx(),
            Some(Placement {
                company: second_placement.company,
                rank: self.students.get(first).rank_of(second_placement.company),
            }),
        );
        self.placements.set(
            second.idx(),
            Some(Placement {
                company: first_placement.company,
                rank: self.students.get(second).rank_of(first_placement.company),
            }),
        );
        Ok(())
    }

    fn take_seat(
        &mut self,
        student: StudentIdx,
        company: CompanyIdx,
    ) -> Result<(), InvariantViolation> {
        let remaining = self.remaining_capacity(company);
        if remaining == 0 {
            return Err(InvariantViolation::CapacityExhausted {
                company: self.company_id(company),
                student: self.student_id(student),
            });
        }
        self.remaining.set(company.idx(), remaining - 1);
        self.rosters[company.idx()].insert(student);
        Ok(())
    }

    fn free_seat(
        &mut self,
        student: StudentIdx,
        company: CompanyIdx,
    ) -> Result<(), InvariantViolation> {
        let capacity = self.companies.get(company).capacity();
        let remaining = self.remaining_capacity(company);
        if remaining >= capacity {
            return Err(InvariantViolation::CapacityOverflow {
                company: self.company_id(company),
                capacity,
            });
        }
        if self.rosters[company.idx()].remove(&student).is_none() {
            return Err(InvariantViolation::RosterMismatch {
                company: self.company_id(company),
                student: self.student_id(student),
            });
        }
        self.remaining.set(company.idx(), remaining + 1);
        Ok(())
    }

    fn exchange_member(
        &mut self,
        company: CompanyIdx,
        leaving: StudentIdx,
        joining: StudentIdx,
    ) -> Result<(), InvariantViolation> {
        let roster = &mut self.rosters[company.idx()];
        if roster.remove(&leaving).is_none() {
            return Err(InvariantViolation::RosterMismatch {
                company: self.company_id(company),
                student: self.student_id(leaving),
            });
        }
        roster.insert(joining);
        Ok(())
    }
}

// consistency
impl Assignment {
    /// Re-checks all invariants: every placement is mirrored by exactly one roster entry, ranks
    /// match the preference lists, and no company holds more students than its initial capacity.
    pub fn verify_consistency(&self) -> Result<(), InvariantViolation> {
        for student in self.students.indices() {
            if let Some(placement) = self.placement_of(student) {
                if !self.rosters[placement.company.idx()].contains(&student) {
                    return Err(InvariantViolation::RosterMismatch {
                        company: self.company_id(placement.company),
                        student: self.student_id(student),
                    });
                }
                let expected = self.students.get(student).rank_of(placement.company);
                if placement.rank != expected {
                    return Err(InvariantViolation::RankMismatch {
                        student: self.student_id(student),
                        company: self.company_id(placement.company),
                        recorded: placement.rank,
                        expected,
                    });
                }
            }
        }

        for company in self.companies.iter() {
            let roster = &self.rosters[company.idx().idx()];
            if let Some(stranger) = roster
                .iter()
                .find(|&&s| self.company_of(s) != Some(company.idx()))
            {
                return Err(InvariantViolation::RosterMismatch {
                    company: company.id().clone(),
                    student: self.student_id(*stranger),
                });
            }
            let occupied = roster.len() as Capacity;
            if occupied > company.capacity() {
                return Err(InvariantViolation::CapacityOverflow {
                    company: company.id().clone(),
                    capacity: company.capacity(),
                });
            }
            let expected = company.capacity() - occupied;
            let remaining = self.remaining_capacity(company.idx());
            if remaining != expected {
                return Err(InvariantViolation::RemainingCapacityMismatch {
                    company: company.id().clone(),
                    remaining,
                    expected,
                });
            }
        }
        Ok(())
    }

    fn student_id(&self, student: StudentIdx) -> StudentId {
        self.students.get(student).id().clone()
    }

    fn company_id(&self, company: CompanyIdx) -> CompanyId {
        self.companies.get(company).id().clone()
    }
}

impl PartialEq for Assignment {
    fn eq(&self, other: &Self) -> bool {
        self.placements == other.placements
            && self.rosters == other.rosters
            && self.remaining == other.remaining
    }
}

impl Eq for Assignment {}
