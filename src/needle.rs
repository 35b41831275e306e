use std::f64::consts::TAU;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{BuffonError, BuffonResult};

pub type Point = [f64; 2];

pub const DEFAULT_CAST_PLANE_WIDTH: u32 = 20;

// Narrowest plane that leaves a non-empty start square.
const MIN_PLANE_WIDTH: u32 = 4;

/// One unit-length needle dropped on the ruled plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Needle {
    pub start: Point,
    pub end: Point,
    /// Orientation in radians, in `[0, 2π)`.
    pub angle: f64,
    pub cross: bool,
}

/// Half-width of the start square, `plane_width / 2 - 1` with truncating division.
pub fn available_range(plane_width: u32) -> BuffonResult<i64> {
    if plane_width < MIN_PLANE_WIDTH {
        return Err(BuffonError::invalid_parameter(
            "plane_width",
            plane_width,
            format!("must be at least {MIN_PLANE_WIDTH} so the start square is non-empty"),
        ));
    }
    Ok(i64::from(plane_width / 2) - 1)
}

/// Lines sit at every integer y, so a needle crosses when its ends fall in different bands.
pub fn crosses_line(start: Point, end: Point) -> bool {
    start[1].floor() != end[1].floor()
}

pub fn cast_needle<R: Rng + ?Sized>(rng: &mut R, plane_width: u32) -> BuffonResult<Needle> {
    let range = available_range(plane_width)? as f64;
    Ok(drop_needle(rng, range))
}

// Callers have already validated `range`.
pub(crate) fn drop_needle<R: Rng + ?Sized>(rng: &mut R, range: f64) -> Needle {
    let start = [rng.gen_range(-range..=range), rng.gen_range(-range..=range)];
    let angle = rng.gen_range(0.0..TAU);
    let end = [angle.cos() + start[0], angle.sin() + start[1]];
    let cross = crosses_line(start, end);

    trace!(?start, ?end, angle, cross, "needle dropped");

    Needle {
        start,
        end,
        angle,
        cross,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seeded_rng;
    use proptest::prelude::*;

    const TOLERANCE: f64 = 1e-12;

    #[test]
    fn test_available_range_truncates() {
        assert_eq!(available_range(4).unwrap(), 1);
        assert_eq!(available_range(5).unwrap(), 1);
        assert_eq!(available_range(10).unwrap(), 4);
        assert_eq!(available_range(11).unwrap(), 4);
        assert_eq!(available_range(20).unwrap(), 9);
    }

    #[test]
    fn test_narrow_planes_rejected() {
        for width in 0..MIN_PLANE_WIDTH {
            let err = available_range(width).unwrap_err();
            assert_eq!(err.error_code(), "INVALID_PARAMETER");

            let mut rng = seeded_rng(1);
            assert!(cast_needle(&mut rng, width).is_err(), "width {width} accepted");
        }
    }

    #[test]
    fn test_plane_width_ten_keeps_start_within_four() {
        let mut rng = seeded_rng(10);
        for _ in 0..5_000 {
            let needle = cast_needle(&mut rng, 10).unwrap();
            for coord in needle.start {
                assert!((-4.0..=4.0).contains(&coord), "start coord {coord} outside [-4, 4]");
            }
        }
    }

    #[test]
    fn test_default_width_range() {
        let mut rng = seeded_rng(20);
        let needle = cast_needle(&mut rng, DEFAULT_CAST_PLANE_WIDTH).unwrap();
        assert!(needle.start.iter().all(|c| c.abs() <= 9.0));
        assert!((0.0..TAU).contains(&needle.angle));
    }

    #[test]
    fn test_crosses_line() {
        assert!(crosses_line([0.0, 0.5], [0.0, 1.2]));
        assert!(crosses_line([3.0, -0.2], [3.5, 0.1]));
        assert!(!crosses_line([0.0, 0.1], [0.9, 0.9]));
        // x never matters, only the horizontal bands
        assert!(!crosses_line([-2.5, 2.3], [-1.5, 2.3]));
    }

    #[test]
    fn test_same_seed_same_needle() {
        let a = cast_needle(&mut seeded_rng(7), 20).unwrap();
        let b = cast_needle(&mut seeded_rng(7), 20).unwrap();
        assert_eq!(a, b);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn test_needle_geometry(seed in any::<u64>(), plane_width in MIN_PLANE_WIDTH..200u32) {
            let mut rng = seeded_rng(seed);
            let range = available_range(plane_width).unwrap() as f64;
            let needle = cast_needle(&mut rng, plane_width).unwrap();

            for coord in needle.start {
                prop_assert!(coord >= -range && coord <= range);
            }

            let dx = needle.end[0] - needle.start[0];
            let dy = needle.end[1] - needle.start[1];
            prop_assert!(((dx * dx + dy * dy).sqrt() - 1.0).abs() < TOLERANCE);
            prop_assert!((dx - needle.angle.cos()).abs() < TOLERANCE);
            prop_assert!((dy - needle.angle.sin()).abs() < TOLERANCE);
            prop_assert_eq!(needle.cross, needle.start[1].floor() != needle.end[1].floor());
        }
    }
}
