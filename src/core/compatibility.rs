//! Moon-sign compatibility estimate.
//!
//! A coarse, single-factor stand-in for Ashtakoota matching: the two moon
//! signs' positions in the rashi order are subtracted (no wrap-around) and
//! the distance is looked up in a fixed table. Used as a quick figure before
//! asking the content service for a full reading.

use crate::domain::model::CompatibilityScore;
use crate::domain::zodiac::ZodiacSign;
use crate::utils::error::Result;

/// Score for any distance the table does not name.
pub const DEFAULT_SCORE: u8 = 20;

/// Unwrapped distance between two signs, `0..=11`.
pub fn sign_distance(a: ZodiacSign, b: ZodiacSign) -> usize {
    a.index().abs_diff(b.index())
}

pub fn score_for_distance(distance: usize) -> u8 {
    match distance {
        0 => 28,
        1 | 11 => 18,
        2 | 10 => 22,
        3 | 9 => 25,
        4 | 8 => 20,
        5 | 7 => 24,
        6 => 15,
        // 正常輸入不會到這裡
        _ => DEFAULT_SCORE,
    }
}

pub fn estimate(a: ZodiacSign, b: ZodiacSign) -> CompatibilityScore {
    CompatibilityScore::from_table(score_for_distance(sign_distance(a, b)))
}

/// Parses both identifiers first; an unknown rashi is an error, never a default score.
pub fn estimate_by_name(a: &str, b: &str) -> Result<CompatibilityScore> {
    let first: ZodiacSign = a.parse()?;
    let second: ZodiacSign = b.parse()?;
    Ok(estimate(first, second))
}
