// Compass labels for wind directions
use super::format::PLACEHOLDER;

const POINTS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// Map a bearing in degrees to one of the sixteen compass points.
///
/// Each point covers a 22.5° sector centred on its bearing, so 350° and 10° both
/// read "N". Values outside [0, 360) wrap; non-finite input yields the placeholder.
pub fn compass_label(degrees: f64) -> &'static str {
    if !degrees.is_finite() {
        return PLACEHOLDER;
    }

    let normalized = degrees.rem_euclid(360.0);
    let index = (normalized / 22.5).round() as usize % POINTS.len();
    POINTS[index]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cardinal_points() {
        assert_eq!(compass_label(0.0), "N");
        assert_eq!(compass_label(90.0), "E");
        assert_eq!(compass_label(180.0), "S");
        assert_eq!(compass_label(270.0), "W");
    }

    #[test]
    fn test_intermediate_points() {
        assert_eq!(compass_label(22.5), "NNE");
        assert_eq!(compass_label(45.0), "NE");
        assert_eq!(compass_label(135.0), "SE");
        assert_eq!(compass_label(225.0), "SW");
        assert_eq!(compass_label(315.0), "NW");
        assert_eq!(compass_label(337.5), "NNW");
    }

    #[test]
    fn test_sector_edges_wrap_to_north() {
        assert_eq!(compass_label(11.0), "N");
        assert_eq!(compass_label(349.0), "N");
        assert_eq!(compass_label(359.9), "N");
        assert_eq!(compass_label(360.0), "N");
        assert_eq!(compass_label(-90.0), "W");
    }

    #[test]
    fn test_total_and_stable_over_range() {
        let mut degrees = 0.0;
        while degrees < 360.0 {
            let label = compass_label(degrees);
            assert!(POINTS.contains(&label), "no label for {degrees}");
            assert_eq!(label, compass_label(degrees));
            degrees += 0.25;
        }
    }

    #[test]
    fn test_non_finite_is_placeholder() {
        assert_eq!(compass_label(f64::NAN), PLACEHOLDER);
        assert_eq!(compass_label(f64::INFINITY), PLACEHOLDER);
    }
}
