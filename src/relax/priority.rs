use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Data-driven joint rank table. Higher rank means more fixed: when an edge
/// is violated, the lower-ranked endpoint moves. Rigs with their own naming
/// conventions supply their own table; unlisted joints rank 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriorityTable {
    ranks: HashMap<String, i32>,
}

impl PriorityTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rank(&self, name: &str) -> i32 {
        self.ranks.get(name).copied().unwrap_or(0)
    }

    pub fn set(&mut self, name: &str, rank: i32) {
        self.ranks.insert(name.to_string(), rank);
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}

impl FromIterator<(String, i32)> for PriorityTable {
    fn from_iter<T: IntoIterator<Item = (String, i32)>>(iter: T) -> Self {
        Self {
            ranks: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<(&'a str, i32)> for PriorityTable {
    fn from_iter<T: IntoIterator<Item = (&'a str, i32)>>(iter: T) -> Self {
        Self {
            ranks: iter
                .into_iter()
                .map(|(name, rank)| (name.to_string(), rank))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlisted_joints_rank_zero() {
        let table: PriorityTable = [("spine", 10), ("wrist", 2)].into_iter().collect();
        assert_eq!(table.rank("spine"), 10);
        assert_eq!(table.rank("wrist"), 2);
        assert_eq!(table.rank("toe"), 0);
    }

    #[test]
    fn table_deserializes_from_plain_map() {
        let table: PriorityTable = serde_json::from_str(r#"{"hip": 8, "ankle": 1}"#).unwrap();
        assert_eq!(table.rank("hip"), 8);
        assert_eq!(table.rank("ankle"), 1);
    }
}
