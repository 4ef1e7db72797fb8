//! Slope-to-color classification for the traveled path gradient.

use serde::{Deserialize, Serialize};

/// Color bucket for one traveled-path sample.
///
/// The slope is elevation change per meter of horizontal travel
/// (dimensionless grade), so the thresholds read as 5 / 10 / 15 % grades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlopeColor {
    /// Steep climb, grade > 15%
    SteepClimb,
    /// Moderate climb, grade > 10%
    ModerateClimb,
    /// Mild climb, grade > 5%
    MildClimb,
    /// Within +-5% grade
    Flat,
    /// Mild descent, grade < -5%
    MildDescent,
    /// Moderate descent, grade < -10%
    ModerateDescent,
    /// Steep descent, grade < -15%
    SteepDescent,
    /// The active-position marker color, used before any elevation
    /// comparison exists. Never produced by `classify`.
    Marker,
}

impl SlopeColor {
    /// Buckets an elevation change over a horizontal step.
    ///
    /// Thresholds are checked most-extreme-first so the overlapping ranges
    /// resolve unambiguously. A non-positive step distance (a no-move
    /// frame) is treated as zero slope.
    pub fn classify(elevation_delta_m: f64, step_distance_m: f64) -> Self {
        let slope = if step_distance_m > 0.0 {
            elevation_delta_m / step_distance_m
        } else {
            0.0
        };

        if slope > 0.15 {
            return SlopeColor::SteepClimb;
        }
        if slope > 0.10 {
            return SlopeColor::ModerateClimb;
        }
        if slope > 0.05 {
            return SlopeColor::MildClimb;
        }
        if slope < -0.15 {
            return SlopeColor::SteepDescent;
        }
        if slope < -0.10 {
            return SlopeColor::ModerateDescent;
        }
        if slope < -0.05 {
            return SlopeColor::MildDescent;
        }
        SlopeColor::Flat
    }

    /// The hex color tag consumed by gradient paint expressions.
    pub fn hex(&self) -> &'static str {
        match self {
            SlopeColor::SteepClimb => "#8B0000",
            SlopeColor::ModerateClimb => "#FF4500",
            SlopeColor::MildClimb => "#FFD700",
            SlopeColor::Flat => "#90EE90",
            SlopeColor::MildDescent => "#87CEEB",
            SlopeColor::ModerateDescent => "#4682B4",
            SlopeColor::SteepDescent => "#00008B",
            SlopeColor::Marker => "#FFD700",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_reference_slopes() {
        // 16 m over 100 m: 16% grade
        assert_eq!(SlopeColor::classify(16.0, 100.0), SlopeColor::SteepClimb);
        // -6 m over 100 m: -6% grade
        assert_eq!(SlopeColor::classify(-6.0, 100.0), SlopeColor::MildDescent);
        // 2 m over 100 m: 2% grade
        assert_eq!(SlopeColor::classify(2.0, 100.0), SlopeColor::Flat);
    }

    #[test]
    fn test_classify_every_bucket() {
        assert_eq!(SlopeColor::classify(20.0, 100.0), SlopeColor::SteepClimb);
        assert_eq!(SlopeColor::classify(12.0, 100.0), SlopeColor::ModerateClimb);
        assert_eq!(SlopeColor::classify(7.0, 100.0), SlopeColor::MildClimb);
        assert_eq!(SlopeColor::classify(0.0, 100.0), SlopeColor::Flat);
        assert_eq!(SlopeColor::classify(-7.0, 100.0), SlopeColor::MildDescent);
        assert_eq!(
            SlopeColor::classify(-12.0, 100.0),
            SlopeColor::ModerateDescent
        );
        assert_eq!(SlopeColor::classify(-20.0, 100.0), SlopeColor::SteepDescent);
    }

    #[test]
    fn test_thresholds_are_strict() {
        // Exactly 15% is not steep, exactly 5% is still flat.
        assert_eq!(SlopeColor::classify(15.0, 100.0), SlopeColor::ModerateClimb);
        assert_eq!(SlopeColor::classify(5.0, 100.0), SlopeColor::Flat);
        assert_eq!(SlopeColor::classify(-5.0, 100.0), SlopeColor::Flat);
        assert_eq!(
            SlopeColor::classify(-15.0, 100.0),
            SlopeColor::ModerateDescent
        );
    }

    #[test]
    fn test_zero_step_distance_is_flat() {
        assert_eq!(SlopeColor::classify(50.0, 0.0), SlopeColor::Flat);
        assert_eq!(SlopeColor::classify(-50.0, 0.0), SlopeColor::Flat);
    }

    #[test]
    fn test_marker_shares_gold_with_mild_climb() {
        assert_eq!(SlopeColor::Marker.hex(), SlopeColor::MildClimb.hex());
    }
}
