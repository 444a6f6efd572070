use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Cells present on a fresh board, one per consonant.
const STANDARD_CELLS: &str = "bcdfghjklmnpqrstvwxyz";

/// Snapshot of the letter board: cell occupancy plus each player's
/// captured cells.
///
/// A snapshot is frozen once built. Owners that need an updated board
/// swap in a whole new snapshot instead of editing this one in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: BTreeMap<String, i32>,
    player_one_captured: BTreeSet<String>,
    player_two_captured: BTreeSet<String>,
}

impl Board {
    /// Builds a snapshot from a full cell map and both capture sets.
    /// Inputs are kept verbatim; empty containers are valid, and nothing
    /// requires the capture sets to be disjoint or to name existing cells.
    pub fn new(
        cells: BTreeMap<String, i32>,
        player_one_captured: BTreeSet<String>,
        player_two_captured: BTreeSet<String>,
    ) -> Self {
        Self {
            cells,
            player_one_captured,
            player_two_captured,
        }
    }

    /// The standard opening layout: every consonant uncontested, nothing
    /// captured yet.
    pub fn standard() -> Self {
        Self {
            cells: STANDARD_CELLS
                .chars()
                .map(|letter| (letter.to_string(), 0))
                .collect(),
            player_one_captured: BTreeSet::new(),
            player_two_captured: BTreeSet::new(),
        }
    }

    pub fn cells(&self) -> &BTreeMap<String, i32> {
        &self.cells
    }

    pub fn player_one_captured(&self) -> &BTreeSet<String> {
        &self.player_one_captured
    }

    pub fn player_two_captured(&self) -> &BTreeSet<String> {
        &self.player_two_captured
    }
}
