use std::collections::HashMap;

use crate::base_types::{Capacity, CompanyId, CompanyIdx};
use crate::error::ConfigurationError;
use crate::tables::CompanyRow;

/// All host companies of an instance in input order. Immutable during a run; the remaining
/// capacities are part of the assignment.
#[derive(Debug, Clone)]
pub struct Companies {
    companies: Vec<Company>,
    idx_of: HashMap<CompanyId, CompanyIdx>,
    total_capacity: Capacity,
}

impl Companies {
    pub fn new(rows: Vec<CompanyRow>) -> Result<Companies, ConfigurationError> {
        if rows.is_empty() {
            return Err(ConfigurationError::NoCompanies);
        }
        let mut companies = Vec::with_capacity(rows.len());
        let mut idx_of = HashMap::with_capacity(rows.len());
        let mut total_capacity: Capacity = 0;
        for (i, row) in rows.into_iter().enumerate() {
            let idx = CompanyIdx::new(i);
            if idx_of.insert(row.id.clone(), idx).is_some() {
                return Err(ConfigurationError::DuplicateCompany(row.id));
            }
            total_capacity = total_capacity.checked_add(row.capacity).ok_or(
                ConfigurationError::CapacityOverflow {
                    maximum: Capacity::MAX,
                },
            )?;
            companies.push(Company::new(idx, row.id, row.capacity));
        }
        Ok(Companies {
            companies,
            idx_of,
            total_capacity,
        })
    }

    pub fn get(&self, idx: CompanyIdx) -> &Company {
        &self.companies[idx.idx()]
    }

    pub fn idx_of(&self, id: &CompanyId) -> Option<CompanyIdx> {
        self.idx_of.get(id).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Company> + '_ {
        self.companies.iter()
    }

    pub fn indices(&self) -> impl Iterator<Item = CompanyIdx> {
        (0..self.companies.len()).map(CompanyIdx::new)
    }

    pub fn len(&self) -> usize {
        self.companies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }

    pub fn total_capacity(&self) -> Capacity {
        self.total_capacity
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Company {
    idx: CompanyIdx,
    id: CompanyId,
    capacity: Capacity, // initial number of seats
}

impl Company {
    fn new(idx: CompanyIdx, id: CompanyId, capacity: Capacity) -> Company {
        Company { idx, id, capacity }
    }

    pub fn idx(&self) -> CompanyIdx {
        self.idx
    }

    pub fn id(&self) -> &CompanyId {
        &self.id
    }

    pub fn capacity(&self) -> Capacity {
        self.capacity
    }
}
