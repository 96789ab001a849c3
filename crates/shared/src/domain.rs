use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Largest value the generator may draw.
pub const MAX_VALUE: u32 = 1000;
/// Every generated set holds at least one value at or below this bound, and
/// clicking such a value reshuffles the board.
pub const SPECIAL_THRESHOLD: u32 = 30;
pub const MIN_COUNT: usize = 1;
pub const MAX_COUNT: usize = 1000;
pub const STEP_INTERVAL_MS: u64 = 300;
/// Rows per display column. Layout only; the core never reads it.
pub const DISPLAY_COLUMN_HEIGHT: usize = 10;

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub u32);
    };
}

id_newtype!(SlotId);
id_newtype!(TimerHandle);

impl SlotId {
    /// Slot mapping where slot `i` sits at position `i`.
    pub fn identity(len: usize) -> Vec<SlotId> {
        (0..len as u32).map(SlotId).collect()
    }
}

/// One recorded swap of two distinct positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SwapStep {
    pub i: usize,
    pub j: usize,
}

impl SwapStep {
    pub fn new(i: usize, j: usize) -> Option<Self> {
        (i != j).then_some(Self { i, j })
    }

    pub fn apply<T>(&self, items: &mut [T]) {
        items.swap(self.i, self.j);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    pub fn compare(self, a: u32, b: u32) -> Ordering {
        match self {
            Self::Ascending => a.cmp(&b),
            Self::Descending => b.cmp(&a),
        }
    }

    /// Non-strict check: equal neighbours are always in order.
    pub fn is_sorted(self, values: &[u32]) -> bool {
        values
            .windows(2)
            .all(|pair| self.compare(pair[0], pair[1]) != Ordering::Greater)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Idle,
    Animating,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swap_step_rejects_equal_indices() {
        assert!(SwapStep::new(3, 3).is_none());
        assert_eq!(SwapStep::new(1, 4), Some(SwapStep { i: 1, j: 4 }));
    }

    #[test]
    fn descending_reverses_natural_order() {
        assert_eq!(SortDirection::Descending.compare(1, 2), Ordering::Greater);
        assert_eq!(SortDirection::Ascending.compare(1, 2), Ordering::Less);
        assert_eq!(SortDirection::Descending.compare(7, 7), Ordering::Equal);
    }

    #[test]
    fn sortedness_tolerates_ties() {
        assert!(SortDirection::Ascending.is_sorted(&[1, 2, 2, 9]));
        assert!(SortDirection::Descending.is_sorted(&[9, 2, 2, 1]));
        assert!(!SortDirection::Descending.is_sorted(&[1, 2]));
        assert!(SortDirection::Ascending.is_sorted(&[]));
    }

    #[test]
    fn direction_serializes_snake_case() {
        let raw = serde_json::to_string(&SortDirection::Descending).expect("serialize");
        assert_eq!(raw, "\"descending\"");
    }
}
