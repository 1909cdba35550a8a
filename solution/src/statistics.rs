use std::collections::BTreeMap;

use itertools::Itertools;
use model::base_types::Rank;
use serde::Serialize;

use crate::assignment::Assignment;

/// Counts shown next to the satisfaction score when reporting a run.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlacementStatistics {
    pub students: usize,
    pub placed: usize,
    pub unplaced: usize,
    pub unranked: usize,
    pub placement_rate: f64,
    pub placed_per_rank: BTreeMap<Rank, usize>,
}

impl PlacementStatistics {
    pub fn of(assignment: &Assignment) -> PlacementStatistics {
        let students = assignment.students().len();
        let placed = assignment.number_of_placed();
        let ranks = assignment
            .placed_students()
            .map(|s| assignment.rank_of(s))
            .counts();

        let unranked = ranks.get(&None).copied().unwrap_or(0);
        let placed_per_rank = ranks
            .into_iter()
            .filter_map(|(rank, count)| rank.map(|r| (r, count)))
            .collect();

        PlacementStatistics {
            students,
            placed,
            unplaced: students - placed,
            unranked,
            placement_rate: if students == 0 {
                0.0
            } else {
                placed as f64 / students as f64
            },
            placed_per_rank,
        }
    }
}
