// Stats formatter - Turns raw slice statistics into display-ready values
use crate::domain::dataset::{PotentialTier, SliceStats};
use crate::domain::view::PresentationStats;
use crate::infrastructure::locale::LocaleCatalog;

/// Fixed full-scale reference for the P90 indicator bar, in kWh/m².
/// Not derived from data.
const P90_FULL_SCALE: f64 = 7.0;

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Emphasis category for a potential tier. Informational only.
pub fn accent(tier: PotentialTier) -> &'static str {
    match tier {
        PotentialTier::Excellent => "emerald",
        PotentialTier::High => "orange",
        PotentialTier::Moderate => "yellow",
        PotentialTier::Low => "red",
    }
}

/// Pure function of its inputs; no I/O.
pub fn format(stats: &SliceStats, catalog: &LocaleCatalog) -> PresentationStats {
    let fill = (stats.p90 / P90_FULL_SCALE * 100.0).round().clamp(0.0, 100.0);

    PresentationStats {
        tier: stats.potential,
        tier_label: catalog.potential_label(stats.potential),
        accent: accent(stats.potential),
        mean: round2(stats.mean),
        max: round2(stats.max),
        min: round2(stats.min),
        p90: round2(stats.p90),
        variability: round2(stats.max - stats.min),
        leader_dept: stats.leader.dept.clone(),
        leader_val: round2(stats.leader.val),
        p90_fill_pct: fill as u8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dataset::{Leader, SliceStats};
    use crate::infrastructure::locale;

    fn stats() -> SliceStats {
        SliceStats {
            mean: 4.5678,
            max: 6.1234,
            min: 2.3456,
            p90: 5.4321,
            potential: PotentialTier::Excellent,
            leader: Leader {
                dept: "La Guajira".to_string(),
                val: 6.0987,
            },
        }
    }

    #[test]
    fn test_magnitudes_round_to_two_decimals() {
        let formatted = format(&stats(), &locale::fixtures::english());
        assert_eq!(formatted.mean, 4.57);
        assert_eq!(formatted.max, 6.12);
        assert_eq!(formatted.min, 2.35);
        assert_eq!(formatted.p90, 5.43);
        assert_eq!(formatted.leader_val, 6.10);
    }

    #[test]
    fn test_ordering_is_preserved_and_variability_derived() {
        let formatted = format(&stats(), &locale::fixtures::english());
        assert!(formatted.min <= formatted.p90 && formatted.p90 <= formatted.max);
        assert_eq!(formatted.variability, 3.78);
    }

    #[test]
    fn test_p90_fill_is_whole_percent_of_full_scale() {
        let formatted = format(&stats(), &locale::fixtures::english());
        // 5.4321 / 7 * 100 = 77.6, rounds to 78
        assert_eq!(formatted.p90_fill_pct, 78);
    }

    #[test]
    fn test_p90_fill_clamps_above_full_scale() {
        let mut out_of_scale = stats();
        out_of_scale.p90 = 7.7;
        out_of_scale.max = 8.0;
        let formatted = format(&out_of_scale, &locale::fixtures::english());
        assert_eq!(formatted.p90_fill_pct, 100);
    }

    #[test]
    fn test_tier_maps_to_localized_label_and_accent() {
        let formatted = format(&stats(), &locale::fixtures::english());
        assert_eq!(formatted.tier, PotentialTier::Excellent);
        assert_eq!(formatted.tier_label, "Excellent");
        assert_eq!(formatted.accent, "emerald");

        assert_eq!(accent(PotentialTier::Low), "red");
        assert_eq!(accent(PotentialTier::Moderate), "yellow");
        assert_eq!(accent(PotentialTier::High), "orange");
    }
}
