//! Derived tables handed back to the surrounding application.

use itertools::Itertools;
use model::base_types::{Capacity, CompanyId, Gpa, Rank, StudentId};
use serde::Serialize;

use crate::assignment::Assignment;

/// Roster summary of a company without students.
pub const EMPTY_ROSTER: &str = "-";
pub const ROSTER_DELIMITER: &str = ", ";

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StudentResultRow {
    pub id: StudentId,
    pub gpa: Gpa,
    pub assigned_company: Option<CompanyId>, // null: unassigned
    pub assigned_rank: Option<Rank>,         // null: unassigned or unranked
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CompanyResultRow {
    pub id: CompanyId,
    pub capacity: Capacity,
    pub remaining_capacity: Capacity,
    pub roster_summary: String,
}

pub fn student_table(assignment: &Assignment) -> Vec<StudentResultRow> {
    let companies = assignment.companies();
    assignment
        .students()
        .iter()
        .map(|student| StudentResultRow {
            id: student.id().clone(),
            gpa: student.gpa(),
            assigned_company: assignment
                .company_of(student.idx())
                .map(|c| companies.get(c).id().clone()),
            assigned_rank: assignment.rank_of(student.idx()),
        })
        .collect()
}

pub fn company_table(assignment: &Assignment) -> Vec<CompanyResultRow> {
    let students = assignment.students();
    assignment
        .companies()
        .iter()
        .map(|company| {
            let roster_summary = if assignment.roster_size(company.idx()) == 0 {
                EMPTY_ROSTER.to_string()
            } else {
                assignment
                    .roster_of(company.idx())
                    .map(|s| students.get(s).id())
                    .join(ROSTER_DELIMITER)
            };
            CompanyResultRow {
                id: company.id().clone(),
                capacity: company.capacity(),
                remaining_capacity: assignment.remaining_capacity(company.idx()),
                roster_summary,
            }
        })
        .collect()
}
