use std::sync::Arc;

use model::base_types::{Capacity, CompanyIdx, Gpa, StudentIdx};
use model::companies::Companies;
use model::config::ConfigPreferences;
use model::students::Students;
use model::tables::{CompanyRow, StudentRow};

/// Builds validated arenas from literal tables. Panics on invalid input; only meant for tests
/// and benchmarks.
pub fn build_instance(
    students: &[(&str, Gpa, &[&str])],
    companies: &[(&str, Capacity)],
) -> (Arc<Students>, Arc<Companies>) {
    let companies = Companies::new(
        companies
            .iter()
            .map(|&(id, capacity)| CompanyRow::new(id, capacity))
            .collect(),
    )
    .expect("invalid company table");
    let students = Students::new(
        students
            .iter()
            .map(|&(id, gpa, preferences)| StudentRow::new(id, gpa, preferences))
            .collect(),
        &companies,
        &ConfigPreferences::default(),
    )
    .expect("invalid student table");
    (Arc::new(students), Arc::new(companies))
}

pub struct ScenarioData {
    pub students: Arc<Students>,
    pub companies: Arc<Companies>,
    pub ogrenci1: StudentIdx, // gpa 3.9
    pub ogrenci2: StudentIdx, // gpa 2.5
    pub ogrenci3: StudentIdx, // gpa 3.8
    pub firma1: CompanyIdx,
    pub firma2: CompanyIdx,
    pub firma3: CompanyIdx,
    pub firma4: CompanyIdx,
    pub firma5: CompanyIdx,
}

/// Three students, two single-seat companies and three large ones.
pub fn init_scenario_a() -> ScenarioData {
    let firms: &[&str] = &["Firma_1", "Firma_2", "Firma_3", "Firma_4", "Firma_5"];
    let (students, companies) = build_instance(
        &[
            ("Ogrenci_1", 3.9, firms),
            ("Ogrenci_2", 2.5, firms),
            (
                "Ogrenci_3",
                3.8,
                &["Firma_2", "Firma_1", "Firma_3", "Firma_4", "Firma_5"],
            ),
        ],
        &[
            ("Firma_1", 1),
            ("Firma_2", 1),
            ("Firma_3", 10),
            ("Firma_4", 10),
            ("Firma_5", 10),
        ],
    );
    ScenarioData {
        students,
        companies,
        ogrenci1: StudentIdx::new(0),
        ogrenci2: StudentIdx::new(1),
        ogrenci3: StudentIdx::new(2),
        firma1: CompanyIdx::new(0),
        firma2: CompanyIdx::new(1),
        firma3: CompanyIdx::new(2),
        firma4: CompanyIdx::new(3),
        firma5: CompanyIdx::new(4),
    }
}
