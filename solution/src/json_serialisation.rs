use serde_json::json;

use crate::evaluated_assignment::EvaluatedAssignment;
use crate::statistics::PlacementStatistics;
use crate::tables::{company_table, student_table};

pub fn assignment_to_json(solution: &EvaluatedAssignment) -> serde_json::Value {
    let assignment = solution.assignment();
    json!({
        "satisfactionScore": solution.score(),
        "statistics": PlacementStatistics::of(assignment),
        "students": student_table(assignment),
        "companies": company_table(assignment),
    })
}
