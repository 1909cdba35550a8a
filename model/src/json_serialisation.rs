use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::companies::Companies;
use crate::config::Config;
use crate::error::ConfigurationError;
use crate::students::Students;
use crate::tables::{CompanyRow, StudentRow};


#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonInput {
    students: Vec<StudentRow>,
    companies: Vec<CompanyRow>,
    #[serde(default)]
    parameters: Config,
}

/// Reads `{students, companies, parameters}` and validates it. Structural problems are fatal,
/// unknown company ids inside preference lists are only logged.
pub fn load_allocation_instance_from_json(
    input_data: serde_json::Value,
) -> Result<(Arc<Students>, Arc<Companies>, Arc<Config>), ConfigurationError> {
    let json_input: JsonInput = serde_json::from_value(input_data)
        .map_err(|err| ConfigurationError::Malformed(err.to_string()))?;

    let config = json_input.parameters;
    config.validate()?;

    let companies = Companies::new(json_input.companies)?;
    let students = Students::new(json_input.students, &companies, &config.preferences)?;

    Ok((Arc::new(students), Arc::new(companies), Arc::new(config)))
}
