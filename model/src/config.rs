use serde::{Deserialize, Serialize};

use crate::base_types::StudentCount;
use crate::error::ConfigurationError;

/// Parameters of a run. Deserialized from the `parameters` object of the input; every field has
/// a default so an empty object is a valid configuration.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub preferences: ConfigPreferences,
    pub hill_climbing: ConfigHillClimbing,
    pub simulated_annealing: ConfigSimulatedAnnealing,
    pub round_simulation: ConfigRoundSimulation,
    pub strategy: String,
    pub seed: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigPreferences {
    pub minimal_count: usize,
    pub maximal_count: usize, // k
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigHillClimbing {
    pub iterations: usize,
    pub progress_interval: usize, // 0 disables progress reports
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigSimulatedAnnealing {
    pub iterations: usize,
    pub initial_temperature: f64,
    pub cooling_rate: f64, // alpha of T_i = T_0 * alpha^i
    pub frozen_temperature: f64, // at or below: strict improvement only
    pub progress_interval: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigRoundSimulation {
    pub max_rounds: usize,
    pub rejection_probability: f64,
    pub rejection_sample_size: StudentCount,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            preferences: ConfigPreferences::default(),
            hill_climbing: ConfigHillClimbing::default(),
            simulated_annealing: ConfigSimulatedAnnealing::default(),
            round_simulation: ConfigRoundSimulation::default(),
            strategy: String::from("simulated_annealing"),
            seed: 42,
        }
    }
}

impl Default for ConfigPreferences {
    fn default() -> Self {
        ConfigPreferences {
            minimal_count: 1,
            maximal_count: 5,
        }
    }
}

impl Default for ConfigHillClimbing {
    fn default() -> Self {
        ConfigHillClimbing {
            iterations: 3000,
            progress_interval: 500,
        }
    }
}

impl Default for ConfigSimulatedAnnealing {
    fn default() -> Self {
        ConfigSimulatedAnnealing {
            iterations: 10000,
            initial_temperature: 100.0,
            cooling_rate: 0.999,
            frozen_temperature: 1e-3,
            progress_interval: 1000,
        }
    }
}

impl Default for ConfigRoundSimulation {
    fn default() -> Self {
        ConfigRoundSimulation {
            max_rounds: 10,
            rejection_probability: 0.10,
            rejection_sample_size: 3,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        fn invalid(name: &'static str, reason: String) -> Result<(), ConfigurationError> {
            Err(ConfigurationError::InvalidParameter { name, reason })
        }

        let preferences = &self.preferences;
        if preferences.minimal_count == 0 {
            return invalid("preferences.minimalCount", "must be at least 1".to_string());
        }
        if preferences.maximal_count < preferences.minimal_count {
            return invalid(
                "preferences.maximalCount",
                format!(
                    "{} is below minimalCount {}",
                    preferences.maximal_count, preferences.minimal_count
                ),
            );
        }
        if preferences.maximal_count > u8::MAX as usize {
            return invalid(
                "preferences.maximalCount",
                format!("{} exceeds {}", preferences.maximal_count, u8::MAX),
            );
        }

        let annealing = &self.simulated_annealing;
        if !annealing.initial_temperature.is_finite() || annealing.initial_temperature < 0.0 {
            return invalid(
                "simulatedAnnealing.initialTemperature",
                format!("{} is not a non-negative number", annealing.initial_temperature),
            );
        }
        if !(annealing.cooling_rate > 0.0 && annealing.cooling_rate < 1.0) {
            return invalid(
                "simulatedAnnealing.coolingRate",
                format!("{} is not in (0, 1)", annealing.cooling_rate),
            );
        }
        if !annealing.frozen_temperature.is_finite() || annealing.frozen_temperature < 0.0 {
            return invalid(
                "simulatedAnnealing.frozenTemperature",
                format!("{} is not a non-negative number", annealing.frozen_temperature),
            );
        }

        let rounds = &self.round_simulation;
        if !(0.0..=1.0).contains(&rounds.rejection_probability) {
            return invalid(
                "roundSimulation.rejectionProbability",
                format!("{} is not in [0, 1]", rounds.rejection_probability),
            );
        }

        Ok(())
    }
}
