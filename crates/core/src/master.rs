use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::grid::Grid;
use crate::models::lesson::LessonRecord;

/// Bucket for master records that carry no group id.
pub const UNKNOWN_GROUP: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupGrid {
    pub group: String,
    pub grid: Grid,
}

/// Splits master records by group id, in order of each group's first appearance.
pub fn partition_by_group(records: Vec<LessonRecord>) -> Vec<(String, Vec<LessonRecord>)> {
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut partitions: Vec<(String, Vec<LessonRecord>)> = Vec::new();

    for record in records {
        let group = record
            .group_id
            .clone()
            .unwrap_or_else(|| UNKNOWN_GROUP.to_string());

        let position = *positions.entry(group.clone()).or_insert_with(|| {
            partitions.push((group, Vec::new()));
            partitions.len() - 1
        });
        partitions[position].1.push(record);
    }

    partitions
}

/// One independent grid per group.
pub fn build_master_grids(records: Vec<LessonRecord>) -> Vec<GroupGrid> {
    partition_by_group(records)
        .into_iter()
        .map(|(group, records)| GroupGrid {
            grid: Grid::build(&records),
            group,
        })
        .collect()
}
