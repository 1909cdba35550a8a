//! Seeded random instances for tests and benchmarks.

use std::sync::Arc;

use model::base_types::{Capacity, Gpa};
use model::companies::Companies;
use model::config::{Config, ConfigPreferences};
use model::students::Students;
use model::tables::{CompanyRow, StudentRow};
use rand::seq::index::sample;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub const PREFERENCES_PER_STUDENT: usize = 5;

/// Every company gets one seat, the remaining `students - companies` seats are spread uniformly.
/// Gpas are uniform in [2.0, 4.0] with two decimals; every student lists five distinct companies.
///
/// Panics if `companies` is below five or above `students`.
pub fn random_instance(
    students: usize,
    companies: usize,
    seed: u64,
) -> (Arc<Students>, Arc<Companies>) {
    assert!(companies >= PREFERENCES_PER_STUDENT && companies <= students);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let mut capacities: Vec<Capacity> = vec![1; companies];
    for _ in companies..students {
        capacities[rng.gen_range(0..companies)] += 1;
    }
    let company_names: Vec<String> = (1..=companies).map(|i| format!("Firma_{}", i)).collect();
    let company_rows = company_names
        .iter()
        .zip(capacities)
        .map(|(name, capacity)| CompanyRow::new(name, capacity))
        .collect();

    let student_rows = (1..=students)
        .map(|i| {
            let gpa: Gpa = (rng.gen_range(2.0..=4.0) * 100.0_f64).round() / 100.0;
            let preferences: Vec<&str> = sample(&mut rng, companies, PREFERENCES_PER_STUDENT)
                .into_iter()
                .map(|c| company_names[c].as_str())
                .collect();
            StudentRow::new(&format!("Ogrenci_{}", i), gpa, &preferences)
        })
        .collect();

    let companies = Companies::new(company_rows).expect("generated companies are valid");
    let students = Students::new(student_rows, &companies, &ConfigPreferences::default())
        .expect("generated students are valid");
    (Arc::new(students), Arc::new(companies))
}

/// Default parameters with short search budgets.
pub fn quick_config() -> Arc<Config> {
    let mut config = Config::default();
    config.hill_climbing.iterations = 400;
    config.hill_climbing.progress_interval = 100;
    config.simulated_annealing.iterations = 800;
    config.simulated_annealing.progress_interval = 200;
    Arc::new(config)
}
