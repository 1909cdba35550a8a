//! Rows of the two input tables supplied by the surrounding application.

use serde::{Deserialize, Serialize};

use crate::base_types::{Capacity, CompanyId, Gpa, StudentId};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StudentRow {
    pub id: StudentId,
    pub gpa: Gpa,
    /// preference_1..preference_k, best first
    pub preferences: Vec<CompanyId>,
}

impl StudentRow {
    pub fn new(id: &str, gpa: Gpa, preferences: &[&str]) -> StudentRow {
        StudentRow {
            id: StudentId::from(id),
            gpa,
            preferences: preferences.iter().map(|&c| CompanyId::from(c)).collect(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CompanyRow {
    pub id: CompanyId,
    pub capacity: Capacity,
}

impl CompanyRow {
    pub fn new(id: &str, capacity: Capacity) -> CompanyRow {
        CompanyRow {
            id: CompanyId::from(id),
            capacity,
        }
    }
}
