// Zoom level to clustering granularity mapping

/// Discrete clustering granularity derived from the map camera zoom.
///
/// `Detailed` means "do not cluster": the aggregator returns an empty
/// cluster list and the host renders individual markers instead.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZoomTier {
    Country,
    City,
    District,
    Detailed,
}

impl ZoomTier {
    /// Classifies a continuous zoom value into a tier.
    ///
    /// Boundaries are half-open with an inclusive lower bound and drive a
    /// visible UX transition, so the exact cutoffs matter:
    /// zoom < 7 is Country, [7, 10) is City, [10, 11) is District,
    /// and 11 and above is Detailed. Total over all floats; a NaN zoom
    /// fails every comparison and lands in Detailed.
    pub fn from_zoom(zoom: f64) -> ZoomTier {
        if zoom < 7.0 {
            ZoomTier::Country
        } else if zoom < 10.0 {
            ZoomTier::City
        } else if zoom < 11.0 {
            ZoomTier::District
        } else {
            ZoomTier::Detailed
        }
    }

    pub fn clusters(&self) -> bool {
        *self != ZoomTier::Detailed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries_exact() {
        assert_eq!(ZoomTier::from_zoom(6.999), ZoomTier::Country);
        assert_eq!(ZoomTier::from_zoom(7.0), ZoomTier::City);
        assert_eq!(ZoomTier::from_zoom(9.999), ZoomTier::City);
        assert_eq!(ZoomTier::from_zoom(10.0), ZoomTier::District);
        assert_eq!(ZoomTier::from_zoom(10.999), ZoomTier::District);
        assert_eq!(ZoomTier::from_zoom(11.0), ZoomTier::Detailed);
    }

    #[test]
    fn test_out_of_range_zoom_is_country() {
        assert_eq!(ZoomTier::from_zoom(-3.0), ZoomTier::Country);
        assert_eq!(ZoomTier::from_zoom(0.0), ZoomTier::Country);
    }

    #[test]
    fn test_extreme_zoom_is_detailed() {
        assert_eq!(ZoomTier::from_zoom(22.0), ZoomTier::Detailed);
        assert_eq!(ZoomTier::from_zoom(f64::NAN), ZoomTier::Detailed);
    }

    #[test]
    fn test_only_detailed_skips_clustering() {
        assert!(ZoomTier::Country.clusters());
        assert!(ZoomTier::City.clusters());
        assert!(ZoomTier::District.clusters());
        assert!(!ZoomTier::Detailed.clusters());
    }
}
