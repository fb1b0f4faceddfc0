// ============================================================
// RATING NORMALIZER
// ============================================================
// Extract bounded integer scores from free-form rating text and
// summarize a column of such scores.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

/// First contiguous decimal-number substring in the text.
static NUMBER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+(?:\.\d+)?").expect("rating pattern is valid"));

/// Extract a numeric rating from raw text. Comma decimal separators are
/// accepted ("4,5" parses as 4.5). Returns None when no digit pattern is
/// found or the match fails to parse.
pub fn extract_rating(raw: &str) -> Option<f64> {
    let normalized = raw.replace(',', ".");
    let matched = NUMBER_PATTERN.find(&normalized)?;
    matched.as_str().parse::<f64>().ok()
}

/// Round to the nearest integer level and clamp into [1, 5]. Ties round
/// half away from zero (4.5 -> 5), per f64::round.
pub fn clamp_level(value: f64) -> u8 {
    (value.round() as i64).clamp(1, 5) as u8
}

/// Aggregate rating statistics over a filtered row set.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingStats {
    pub n_rows: usize,
    pub n_with_rating: usize,
    pub avg_rating: Option<f64>,
    pub distribution: BTreeMap<u8, usize>,
}

/// Summarize one optional rating per surviving row. The distribution
/// always carries all five levels, zero-filled; the mean is taken over
/// the raw extracted values, not the clamped levels.
pub fn summarize_ratings(ratings: &[Option<f64>]) -> RatingStats {
    let mut distribution: BTreeMap<u8, usize> = (1..=5).map(|level| (level, 0)).collect();
    let mut sum = 0.0;
    let mut n_with_rating = 0usize;

    for rating in ratings.iter().flatten() {
        *distribution.entry(clamp_level(*rating)).or_insert(0) += 1;
        sum += rating;
        n_with_rating += 1;
    }

    let avg_rating = if n_with_rating > 0 {
        Some(sum / n_with_rating as f64)
    } else {
        None
    };

    RatingStats {
        n_rows: ratings.len(),
        n_with_rating,
        avg_rating,
        distribution,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_plain_and_decimal() {
        assert_eq!(extract_rating("5"), Some(5.0));
        assert_eq!(extract_rating("4.0"), Some(4.0));
        assert_eq!(extract_rating("4,5"), Some(4.5));
    }

    #[test]
    fn test_extract_takes_first_number() {
        assert_eq!(extract_rating("5/5 great!"), Some(5.0));
        assert_eq!(extract_rating("rated 3 out of 5"), Some(3.0));
    }

    #[test]
    fn test_extract_absent() {
        assert_eq!(extract_rating(""), None);
        assert_eq!(extract_rating("great product"), None);
    }

    #[test]
    fn test_clamp_bounds() {
        assert_eq!(clamp_level(5.6), 5);
        assert_eq!(clamp_level(0.2), 1);
        assert_eq!(clamp_level(7.0), 5);
        assert_eq!(clamp_level(-1.0), 1);
    }

    #[test]
    fn test_ties_round_half_away_from_zero() {
        assert_eq!(clamp_level(4.5), 5);
        assert_eq!(clamp_level(2.5), 3);
    }

    #[test]
    fn test_distribution_has_five_keys_summing_to_present_count() {
        let stats = summarize_ratings(&[Some(5.0), None, Some(1.0), Some(4.8)]);
        assert_eq!(stats.distribution.len(), 5);
        assert_eq!(stats.distribution.keys().copied().collect::<Vec<_>>(), [1, 2, 3, 4, 5]);
        assert_eq!(stats.distribution.values().sum::<usize>(), stats.n_with_rating);
        assert_eq!(stats.n_rows, 4);
        assert_eq!(stats.n_with_rating, 3);
    }

    #[test]
    fn test_mean_over_raw_values() {
        let stats = summarize_ratings(&[Some(5.0), Some(1.0)]);
        assert_eq!(stats.avg_rating, Some(3.0));
        assert_eq!(stats.distribution[&5], 1);
        assert_eq!(stats.distribution[&1], 1);
    }

    #[test]
    fn test_mean_absent_without_ratings() {
        let stats = summarize_ratings(&[None, None]);
        assert_eq!(stats.avg_rating, None);
        assert_eq!(stats.n_with_rating, 0);
        assert_eq!(stats.distribution.values().sum::<usize>(), 0);
    }
}
