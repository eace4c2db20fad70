//! DISC score model and the single source of truth for classification bands.
//!
//! ARCHITECTURAL RULE: every surface that needs to know which axis is
//! "dominant" (archetype naming, narrative banks, print snapshots) must go
//! through `DiscScore::ranking()` and `AxisRanking::band()`. No other module
//! may compare axis values or re-implement thresholds. Historically this
//! logic was duplicated per page with drifting thresholds; the profile card
//! and the narrative could disagree about the same score.

use serde::{Deserialize, Serialize};

/// The four DISC behavioural axes, in canonical order.
/// The order doubles as the tie-break rule when axis values are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    Dominance,
    Influence,
    Steadiness,
    Conscientiousness,
}

impl Axis {
    pub const ALL: [Axis; 4] = [
        Axis::Dominance,
        Axis::Influence,
        Axis::Steadiness,
        Axis::Conscientiousness,
    ];

    /// Human-readable axis label used in narrative headings.
    pub fn label(&self) -> &'static str {
        match self {
            Axis::Dominance => "Dominance",
            Axis::Influence => "Influence",
            Axis::Steadiness => "Steadiness",
            Axis::Conscientiousness => "Conscientiousness",
        }
    }
}

/// A four-axis behavioural score as submitted by the assessment flow.
///
/// Conceptually a percentage decomposition, but never validated: callers
/// send whatever the upstream scoring step produced. Missing fields
/// deserialize to 0, and negative or non-finite values are sanitized to 0
/// on read. Every possible value classifies to some archetype.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DiscScore {
    #[serde(default)]
    pub dominance: f32,
    #[serde(default)]
    pub influence: f32,
    #[serde(default)]
    pub steadiness: f32,
    #[serde(default)]
    pub conscientiousness: f32,
}

impl DiscScore {
    pub fn new(dominance: f32, influence: f32, steadiness: f32, conscientiousness: f32) -> Self {
        Self {
            dominance,
            influence,
            steadiness,
            conscientiousness,
        }
    }

    /// Returns the sanitized value for an axis: negatives and NaN read as 0.
    pub fn value(&self, axis: Axis) -> f32 {
        let raw = match axis {
            Axis::Dominance => self.dominance,
            Axis::Influence => self.influence,
            Axis::Steadiness => self.steadiness,
            Axis::Conscientiousness => self.conscientiousness,
        };
        if raw.is_finite() && raw > 0.0 {
            raw
        } else {
            0.0
        }
    }

    /// Ranks the four axes by sanitized value, descending.
    /// Ties resolve in canonical axis order (D, I, S, C), so the ranking is
    /// deterministic for every input including the all-zero vector.
    pub fn ranking(&self) -> AxisRanking {
        let mut axes = Axis::ALL;
        // Stable sort: equal values keep canonical order.
        axes.sort_by(|a, b| {
            self.value(*b)
                .partial_cmp(&self.value(*a))
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        AxisRanking {
            dominant: axes[0],
            secondary: axes[1],
            dominant_value: self.value(axes[0]),
            secondary_value: self.value(axes[1]),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Classification bands
// ────────────────────────────────────────────────────────────────────────────

/// A pure profile needs the dominant axis at or above this value.
pub const PURE_THRESHOLD: f32 = 50.0;
/// A blended profile needs the dominant axis at least this strong...
pub const BLEND_DOMINANT_MIN: f32 = 35.0;
/// ...and the secondary axis at least this strong.
pub const BLEND_SECONDARY_MIN: f32 = 25.0;
/// Dominant and secondary closer than this read as a balanced profile,
/// whatever their absolute values.
pub const BALANCED_GAP: f32 = 10.0;

/// The dominant/secondary axes of a score, computed once and shared by every
/// downstream generator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRanking {
    pub dominant: Axis,
    pub secondary: Axis,
    pub dominant_value: f32,
    pub secondary_value: f32,
}

/// Which classification band a score falls into. Total: every score lands
/// in exactly one band, with `Balanced` as the unconditional fallback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Band {
    Pure(Axis),
    Blended(Axis, Axis),
    Balanced,
}

impl AxisRanking {
    /// Applies the classification bands, in priority order:
    /// 1. near-tie between dominant and secondary → Balanced
    /// 2. dominant ≥ PURE_THRESHOLD → Pure
    /// 3. dominant ≥ BLEND_DOMINANT_MIN and secondary ≥ BLEND_SECONDARY_MIN → Blended
    /// 4. everything else (including the zero vector) → Balanced
    pub fn band(&self) -> Band {
        if self.dominant_value - self.secondary_value < BALANCED_GAP {
            return Band::Balanced;
        }
        if self.dominant_value >= PURE_THRESHOLD {
            return Band::Pure(self.dominant);
        }
        if self.dominant_value >= BLEND_DOMINANT_MIN && self.secondary_value >= BLEND_SECONDARY_MIN
        {
            return Band::Blended(self.dominant, self.secondary);
        }
        Band::Balanced
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_vector_ranks_in_canonical_order() {
        let r = DiscScore::default().ranking();
        assert_eq!(r.dominant, Axis::Dominance);
        assert_eq!(r.secondary, Axis::Influence);
        assert_eq!(r.dominant_value, 0.0);
    }

    #[test]
    fn test_zero_vector_is_balanced() {
        let r = DiscScore::default().ranking();
        assert_eq!(r.band(), Band::Balanced);
    }

    #[test]
    fn test_negative_values_read_as_zero() {
        let score = DiscScore::new(-20.0, -5.0, 0.0, 0.0);
        assert_eq!(score.value(Axis::Dominance), 0.0);
        assert_eq!(score.ranking().band(), Band::Balanced);
    }

    #[test]
    fn test_nan_reads_as_zero() {
        let score = DiscScore::new(f32::NAN, 60.0, 10.0, 5.0);
        assert_eq!(score.value(Axis::Dominance), 0.0);
        assert_eq!(score.ranking().dominant, Axis::Influence);
        assert_eq!(score.ranking().band(), Band::Pure(Axis::Influence));
    }

    #[test]
    fn test_strong_single_axis_is_pure() {
        let r = DiscScore::new(80.0, 5.0, 10.0, 5.0).ranking();
        assert_eq!(r.band(), Band::Pure(Axis::Dominance));
    }

    #[test]
    fn test_moderate_dominant_with_secondary_is_blended() {
        // Influence 45 leads, Steadiness 28 backs it up
        let r = DiscScore::new(22.0, 45.0, 28.0, 5.0).ranking();
        assert_eq!(r.band(), Band::Blended(Axis::Influence, Axis::Steadiness));
    }

    #[test]
    fn test_near_tie_is_balanced_even_above_pure_threshold() {
        // 52 vs 48: gap below BALANCED_GAP overrides the pure band
        let r = DiscScore::new(52.0, 48.0, 0.0, 0.0).ranking();
        assert_eq!(r.band(), Band::Balanced);
    }

    #[test]
    fn test_weak_dominant_is_balanced() {
        // Dominant below BLEND_DOMINANT_MIN falls through
        let r = DiscScore::new(30.0, 10.0, 5.0, 5.0).ranking();
        assert_eq!(r.band(), Band::Balanced);
    }

    #[test]
    fn test_blended_requires_secondary_strength() {
        // Dominant 40 but secondary only 20 → balanced fallback
        let r = DiscScore::new(40.0, 20.0, 5.0, 5.0).ranking();
        assert_eq!(r.band(), Band::Balanced);
    }

    #[test]
    fn test_missing_fields_deserialize_to_zero() {
        let score: DiscScore = serde_json::from_str(r#"{"dominance": 60.0}"#).unwrap();
        assert_eq!(score.influence, 0.0);
        assert_eq!(score.ranking().band(), Band::Pure(Axis::Dominance));
    }

    #[test]
    fn test_ranking_is_deterministic() {
        let score = DiscScore::new(25.0, 25.0, 25.0, 25.0);
        let a = score.ranking();
        let b = score.ranking();
        assert_eq!(a.dominant, b.dominant);
        assert_eq!(a.secondary, b.secondary);
        assert_eq!(a.band(), Band::Balanced);
    }
}
