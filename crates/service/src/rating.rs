//! Derived car rating.
//!
//! Recomputed from the review rows on every read and never persisted.

/// Rating reported for a car nobody has reviewed yet.
pub const DEFAULT_AVERAGE_RATING: f64 = 5.0;

/// Arithmetic mean of `ratings` rounded to one decimal place, or
/// [`DEFAULT_AVERAGE_RATING`] when there are none.
///
/// The mean is an `f64` and rounding applies to its exact binary value, so
/// 87/20 (stored just below 4.35) yields 4.3 while 89/20 yields 4.5. Exact
/// binary ties round half to even: `[4, 4, 4, 5]` (4.25) yields 4.2.
pub fn average_rating(ratings: &[i32]) -> f64 {
    if ratings.is_empty() {
        return DEFAULT_AVERAGE_RATING;
    }
    let sum: i64 = ratings.iter().map(|r| i64::from(*r)).sum();
    let mean = sum as f64 / ratings.len() as f64;
    format!("{:.1}", mean).parse::<f64>().unwrap_or(DEFAULT_AVERAGE_RATING)
}
