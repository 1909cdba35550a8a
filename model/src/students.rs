use std::collections::{HashMap, HashSet};

use tracing::warn;

use crate::base_types::{CompanyId, CompanyIdx, Gpa, Rank, StudentId, StudentIdx};
use crate::companies::Companies;
use crate::config::ConfigPreferences;
use crate::error::ConfigurationError;
use crate::tables::StudentRow;

/// All students of an instance in input order. The input order is the tie-break order of the
/// greedy allocation.
#[derive(Debug, Clone)]
pub struct Students {
    students: Vec<Student>,
    idx_of: HashMap<StudentId, StudentIdx>,
}

impl Students {
    /// Validates the student table against the companies. A preference referencing an unknown
    /// company is kept as a hole in the list (so ranks of later entries stay unchanged) and is
    /// skipped during allocation.
    pub fn new(
        rows: Vec<StudentRow>,
        companies: &Companies,
        config: &ConfigPreferences,
    ) -> Result<Students, ConfigurationError> {
        let mut students = Vec::with_capacity(rows.len());
        let mut idx_of = HashMap::with_capacity(rows.len());

        for (i, row) in rows.into_iter().enumerate() {
            let idx = StudentIdx::new(i);
            if !row.gpa.is_finite() || row.gpa < 0.0 {
                return Err(ConfigurationError::InvalidGpa {
                    student: row.id,
                    gpa: row.gpa,
                });
            }
            let count = row.preferences.len();
            if count < config.minimal_count {
                return Err(ConfigurationError::TooFewPreferences {
                    student: row.id,
                    count,
                    minimum: config.minimal_count,
                });
            }
            if count > config.maximal_count {
                return Err(ConfigurationError::TooManyPreferences {
                    student: row.id,
                    count,
                    maximum: config.maximal_count,
                });
            }
            let mut seen: HashSet<&CompanyId> = HashSet::with_capacity(count);
            if let Some(duplicate) = row.preferences.iter().find(|c| !seen.insert(*c)) {
                return Err(ConfigurationError::DuplicatePreference {
                    student: row.id.clone(),
                    company: duplicate.clone(),
                });
            }

            let preferences: Vec<Option<CompanyIdx>> = row
                .preferences
                .iter()
                .map(|company| {
                    let resolved = companies.idx_of(company);
                    if resolved.is_none() {
                        warn!(
                            student = %row.id,
                            company = %company,
                            "preference references an unknown company; entry is skipped"
                        );
                    }
                    resolved
                })
                .collect();

            if idx_of.insert(row.id.clone(), idx).is_some() {
                return Err(ConfigurationError::DuplicateStudent(row.id));
            }
            students.push(Student {
                idx,
                id: row.id,
                gpa: row.gpa,
                preferences,
            });
        }

        if !students.is_empty() && companies.total_capacity() == 0 {
            return Err(ConfigurationError::NoCapacity {
                students: students.len(),
            });
        }

        Ok(Students { students, idx_of })
    }

    pub fn get(&self, idx: StudentIdx) -> &Student {
        &self.students[idx.idx()]
    }

    pub fn idx_of(&self, id: &StudentId) -> Option<StudentIdx> {
        self.idx_of.get(id).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Student> + '_ {
        self.students.iter()
    }

    pub fn indices(&self) -> impl Iterator<Item = StudentIdx> {
        (0..self.students.len()).map(StudentIdx::new)
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    idx: StudentIdx,
    id: StudentId,
    gpa: Gpa,
    preferences: Vec<Option<CompanyIdx>>, // None: unknown company id in the input
}

impl Student {
    pub fn idx(&self) -> StudentIdx {
        self.idx
    }

    pub fn id(&self) -> &StudentId {
        &self.id
    }

    pub fn gpa(&self) -> Gpa {
        self.gpa
    }

    /// Known preferences with their 1-based rank, best first.
    pub fn preferences(&self) -> impl Iterator<Item = (Rank, CompanyIdx)> + '_ {
        self.preferences
            .iter()
            .enumerate()
            .filter_map(|(i, company)| company.map(|c| ((i + 1) as Rank, c)))
    }

    pub fn number_of_preferences(&self) -> usize {
        self.preferences.len()
    }

    pub fn unknown_preferences(&self) -> usize {
        self.preferences.iter().filter(|c| c.is_none()).count()
    }

    /// The 1-based position of `company` in the preference list, None if it is not listed.
    pub fn rank_of(&self, company: CompanyIdx) -> Option<Rank> {
        self.preferences
            .iter()
            .position(|&c| c == Some(company))
            .map(|i| (i + 1) as Rank)
    }
}
