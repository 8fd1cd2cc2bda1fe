use serde::{Deserialize, Serialize};

/// Segment values clockwise from the top of a standard board.
pub const BOARD_SEGMENTS: [i32; 20] = [
    20, 1, 18, 4, 13, 6, 10, 15, 2, 17, 3, 19, 7, 16, 8, 11, 14, 9, 12, 5,
];

pub const OUTER_BULL: i32 = 25;

/// A single dart. `value` is the segment's base value; `multiplier` is the
/// ring factor already known from where the dart landed.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct DartHit {
    pub value: i32,
    #[serde(default = "default_multiplier")]
    pub multiplier: i32,
    #[serde(default)]
    pub label: String,
}

fn default_multiplier() -> i32 {
    1
}

impl DartHit {
    #[must_use]
    pub fn new(value: i32, multiplier: i32) -> Self {
        Self {
            label: hit_label(value, multiplier),
            value,
            multiplier,
        }
    }

    #[must_use]
    pub fn points(&self) -> i32 {
        self.value.saturating_mul(self.multiplier.max(1))
    }
}

#[must_use]
pub fn hit_label(value: i32, multiplier: i32) -> String {
    match (value, multiplier) {
        (0, _) => "MISS".to_string(),
        (OUTER_BULL, 2) => "D-BULL".to_string(),
        (OUTER_BULL, _) => "BULL".to_string(),
        (v, 2) => format!("D{v}"),
        (v, 3) => format!("T{v}"),
        (v, _) => format!("{v}"),
    }
}
