// src/formation/mod.rs

pub mod parse;

use anyhow::{ensure, Result};
use serde::Serialize;

pub use parse::{normalize, parse_labeled, parse_pairs, SlotEntry};

/// Pitch-grid point, named exactly as the engine deserializes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Coordinate {
    pub x: i64,
    pub y: i64,
}

/// One formation slot with coordinates for the three stages the engine
/// distinguishes: base positioning plus both goal-kick shapes.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormationSlot {
    pub default_position_group_str: String,
    pub default_position_str: String,
    pub base_coordinate: Coordinate,
    pub goal_kick_offense_coordinate: Coordinate,
    pub goal_kick_defense_coordinate: Coordinate,
}

#[derive(Debug, Serialize)]
pub struct FormationDocument {
    pub data: Vec<FormationSlot>,
}

/// Zip the three stage lists by position index, preserving base order.
/// Index i of the base list pairs with index i of each coordinate list;
/// labels are never re-matched across stages, so the caller must paste
/// each stage in the same left-to-right order.
pub fn build_document(
    base: Vec<SlotEntry>,
    goal_kick_offense: Vec<(i64, i64)>,
    goal_kick_defense: Vec<(i64, i64)>,
) -> Result<FormationDocument> {
    ensure!(!base.is_empty(), "no valid slot data found in base input");
    ensure!(
        goal_kick_offense.len() == base.len(),
        "goalKickOffense count mismatch: expected {}, found {}",
        base.len(),
        goal_kick_offense.len()
    );
    ensure!(
        goal_kick_defense.len() == base.len(),
        "goalKickDefense count mismatch: expected {}, found {}",
        base.len(),
        goal_kick_defense.len()
    );

    let data = base
        .into_iter()
        .zip(goal_kick_offense)
        .zip(goal_kick_defense)
        .map(|((slot, offense), defense)| FormationSlot {
            default_position_group_str: slot.group,
            default_position_str: slot.position,
            base_coordinate: Coordinate {
                x: slot.x,
                y: slot.y,
            },
            goal_kick_offense_coordinate: Coordinate {
                x: offense.0,
                y: offense.1,
            },
            goal_kick_defense_coordinate: Coordinate {
                x: defense.0,
                y: defense.1,
            },
        })
        .collect();

    Ok(FormationDocument { data })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn base_two() -> Vec<SlotEntry> {
        parse_labeled(r#"{"MF,CM,(50,50)", "FW,ST,(60,40)"}"#)
    }

    #[test]
    fn offense_count_mismatch_is_reported_first() {
        let err = build_document(base_two(), vec![(1, 2)], vec![(1, 2), (3, 4)])
            .unwrap_err()
            .to_string();
        assert!(err.contains("goalKickOffense"), "{err}");
        assert!(err.contains("expected 2"), "{err}");
        assert!(err.contains("found 1"), "{err}");
    }

    #[test]
    fn defense_count_mismatch_is_reported() {
        let err = build_document(base_two(), vec![(1, 2), (3, 4)], vec![(1, 2)])
            .unwrap_err()
            .to_string();
        assert!(err.contains("goalKickDefense"), "{err}");
    }

    #[test]
    fn empty_base_is_an_error() {
        assert!(build_document(vec![], vec![], vec![]).is_err());
    }

    #[test]
    fn slots_zip_positionally_with_all_fields() -> Result<()> {
        let doc = build_document(base_two(), vec![(51, 60), (61, 50)], vec![(49, 40), (59, 30)])?;
        assert_eq!(doc.data.len(), 2);

        let value: Value = serde_json::to_value(&doc)?;
        assert_eq!(
            value,
            json!({
                "data": [
                    {
                        "defaultPositionGroupStr": "MF",
                        "defaultPositionStr": "CM",
                        "baseCoordinate": {"x": 50, "y": 50},
                        "goalKickOffenseCoordinate": {"x": 51, "y": 60},
                        "goalKickDefenseCoordinate": {"x": 49, "y": 40},
                    },
                    {
                        "defaultPositionGroupStr": "FW",
                        "defaultPositionStr": "ST",
                        "baseCoordinate": {"x": 60, "y": 40},
                        "goalKickOffenseCoordinate": {"x": 61, "y": 50},
                        "goalKickDefenseCoordinate": {"x": 59, "y": 30},
                    },
                ]
            })
        );
        Ok(())
    }
}
