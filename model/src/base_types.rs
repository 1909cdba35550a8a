use derive_more::Display;
use derive_more::From;
use serde::{Deserialize, Serialize};

pub type Idx = u32;

/// External identifier of a student as given by the student table.
#[derive(
    Display, From, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct StudentId(String);

impl From<&str> for StudentId {
    fn from(id: &str) -> Self {
        StudentId(id.to_string())
    }
}

/// External identifier of a company as given by the company table.
#[derive(
    Display, From, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CompanyId(String);

impl From<&str> for CompanyId {
    fn from(id: &str) -> Self {
        CompanyId(id.to_string())
    }
}

/// Dense index of a student inside the `Students` arena (input order).
#[derive(Display, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[display(fmt = "s{}", _0)]
pub struct StudentIdx(Idx);

impl StudentIdx {
    pub fn new(idx: usize) -> StudentIdx {
        StudentIdx(idx as Idx)
    }

    pub fn idx(self) -> usize {
        self.0 as usize
    }
}

/// Dense index of a company inside the `Companies` arena (input order).
#[derive(Display, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[display(fmt = "c{}", _0)]
pub struct CompanyIdx(Idx);

impl CompanyIdx {
    pub fn new(idx: usize) -> CompanyIdx {
        CompanyIdx(idx as Idx)
    }

    pub fn idx(self) -> usize {
        self.0 as usize
    }
}

pub type Gpa = f64;
pub type Rank = u8; // 1-based position in a preference list
pub type Capacity = u32;
pub type Score = i64;
pub type StudentCount = usize;
