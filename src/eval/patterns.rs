//! Scoring weights for board patterns
//!
//! Heuristic weights grow by a factor of 10 per stone so a longer line
//! always dominates any number of shorter ones. `FIVE` sits far above
//! the heuristic range; terminal search scores are `FIVE - depth` /
//! `-FIVE + depth` so shallower wins rank higher.

/// Pattern scores for evaluation
pub struct PatternScore;

impl PatternScore {
    /// Five in a row - immediate win
    pub const FIVE: i32 = 1_000_000;

    /// Four stones feeding an empty cell - one move from five
    pub const FOUR: i32 = 10_000;
    /// Three stones feeding an empty cell
    pub const THREE: i32 = 1_000;
    /// Two stones feeding an empty cell
    pub const TWO: i32 = 100;
    /// Single stone next to an empty cell
    pub const ONE: i32 = 10;
}

/// Weight for a count of same-side stones feeding an empty cell.
/// Counts of 4 or more all score `FOUR`: the search horizon resolves
/// the actual win before the difference matters.
#[inline]
pub fn line_weight(count: i32) -> i32 {
    match count {
        1 => PatternScore::ONE,
        2 => PatternScore::TWO,
        3 => PatternScore::THREE,
        c if c >= 4 => PatternScore::FOUR,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_score_hierarchy() {
        assert!(PatternScore::FIVE > PatternScore::FOUR);
        assert!(PatternScore::FOUR > PatternScore::THREE);
        assert!(PatternScore::THREE > PatternScore::TWO);
        assert!(PatternScore::TWO > PatternScore::ONE);
    }

    #[test]
    fn test_line_weight() {
        assert_eq!(line_weight(0), 0);
        assert_eq!(line_weight(1), PatternScore::ONE);
        assert_eq!(line_weight(2), PatternScore::TWO);
        assert_eq!(line_weight(3), PatternScore::THREE);
        assert_eq!(line_weight(4), PatternScore::FOUR);
        // Longer counts saturate at FOUR
        assert_eq!(line_weight(7), PatternScore::FOUR);
    }
}
