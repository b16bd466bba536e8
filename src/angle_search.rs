//! Launch angle search over a fixed 0.1° grid.
//!
//! Candidates are scanned in ascending order and the first angle whose range
//! strictly exceeds the target wins. The scan assumes range grows with angle
//! up to its optimum; past a second local maximum the first hit is not
//! necessarily the intended solution. [`count_local_maxima`] lets callers check
//! that assumption for a given projectile.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::constants::{ANGLE_STEPS_PER_DEG, CANDIDATE_ANGLE_COUNT, DEFAULT_TIME_STEP};
use crate::error::DrillError;
use crate::range_integrator::{integrate_range, ProjectileParams, RangeIntegrator};

/// Candidate launch angles in degrees: 0.0, 0.1, ..., 45.0.
///
/// Built from integer indices so every element is the nearest f64 to its
/// decimal value and the last one is exactly 45.0.
pub fn candidate_angles() -> [f64; CANDIDATE_ANGLE_COUNT] {
    std::array::from_fn(|i| i as f64 / ANGLE_STEPS_PER_DEG)
}

/// Smallest candidate angle (degrees) whose range strictly exceeds `distance`.
///
/// Returns `None` when no angle in [0°, 45°] reaches the target. Inputs are
/// not validated; see [`integrate_range`].
pub fn find_launch_angle(
    mass: f64,
    velocity: f64,
    distance: f64,
    drag_coefficient: f64,
    cross_section_area: f64,
) -> Option<f64> {
    for (index, angle) in candidate_angles().into_iter().enumerate() {
        let range = integrate_range(
            mass,
            velocity,
            angle,
            drag_coefficient,
            cross_section_area,
            DEFAULT_TIME_STEP,
        );
        trace!(angle_deg = angle, range_m = range, "evaluated candidate");

        if range > distance {
            debug!(
                angle_deg = angle,
                range_m = range,
                target_m = distance,
                candidates_tried = index + 1,
                "launch angle found"
            );
            return Some(angle);
        }
    }

    debug!(target_m = distance, "no candidate angle reaches target");
    None
}

/// Result of a successful search
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaunchSolution {
    pub angle_deg: f64,
    pub range_m: f64,           // range achieved at angle_deg
    pub candidates_tried: usize,
}

/// Range at one candidate angle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeSample {
    pub angle_deg: f64,
    pub range_m: f64,
}

/// Angle search with a configurable integrator
#[derive(Debug, Clone)]
pub struct LaunchAngleSearch {
    integrator: RangeIntegrator,
    angles: [f64; CANDIDATE_ANGLE_COUNT],
}

impl LaunchAngleSearch {
    pub fn new(params: ProjectileParams) -> Self {
        Self::with_integrator(RangeIntegrator::new(params))
    }

    pub fn with_integrator(integrator: RangeIntegrator) -> Self {
        Self {
            integrator,
            angles: candidate_angles(),
        }
    }

    pub fn set_time_step(&mut self, step: f64) {
        self.integrator.set_time_step(step);
    }

    pub fn set_max_steps(&mut self, max_steps: Option<usize>) {
        self.integrator.set_max_steps(max_steps);
    }

    pub fn integrator(&self) -> &RangeIntegrator {
        &self.integrator
    }

    pub fn angles(&self) -> &[f64] {
        &self.angles
    }

    /// First candidate whose range strictly exceeds `distance`.
    ///
    /// `Ok(None)` means the full grid was scanned without reaching the target;
    /// errors come only from the integrator (step limit, bad time step).
    pub fn solve(&self, distance: f64) -> Result<Option<LaunchSolution>, DrillError> {
        for (index, &angle) in self.angles.iter().enumerate() {
            let range = self.integrator.range(angle)?;
            trace!(angle_deg = angle, range_m = range, "evaluated candidate");

            if range > distance {
                let solution = LaunchSolution {
                    angle_deg: angle,
                    range_m: range,
                    candidates_tried: index + 1,
                };
                debug!(
                    angle_deg = solution.angle_deg,
                    range_m = solution.range_m,
                    target_m = distance,
                    candidates_tried = solution.candidates_tried,
                    "launch angle found"
                );
                return Ok(Some(solution));
            }
        }

        debug!(
            target_m = distance,
            candidates_tried = self.angles.len(),
            "no candidate angle reaches target"
        );
        Ok(None)
    }

    /// Range at every candidate angle, in ascending angle order.
    pub fn sweep(&self) -> Result<Vec<RangeSample>, DrillError> {
        self.angles
            .iter()
            .map(|&angle| {
                self.integrator.range(angle).map(|range_m| RangeSample {
                    angle_deg: angle,
                    range_m,
                })
            })
            .collect()
    }
}

/// Number of local maxima in a range sweep.
///
/// A change counts as a rise or fall only when it exceeds `tolerance`, which
/// filters the step-sized jitter of the landing position. Sweep endpoints can
/// be maxima; a flat sweep has exactly one.
pub fn count_local_maxima(samples: &[RangeSample], tolerance: f64) -> usize {
    let mut ranges = samples.iter().map(|s| s.range_m);
    let Some(first) = ranges.next() else {
        return 0;
    };

    let mut maxima = 0;
    let mut rising = true;
    let mut extreme = first;

    for range in ranges {
        if rising {
            if range > extreme {
                extreme = range;
            } else if extreme - range > tolerance {
                maxima += 1;
                rising = false;
                extreme = range;
            }
        } else if range < extreme {
            extreme = range;
        } else if range - extreme > tolerance {
            rising = true;
            extreme = range;
        }
    }

    if rising {
        maxima += 1;
    }
    maxima
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{ANGLE_STEP_DEG, MAX_ANGLE_DEG};

    fn samples(ranges: &[f64]) -> Vec<RangeSample> {
        ranges
            .iter()
            .enumerate()
            .map(|(i, &range_m)| RangeSample {
                angle_deg: i as f64 * ANGLE_STEP_DEG,
                range_m,
            })
            .collect()
    }

    #[test]
    fn test_candidate_angles_grid() {
        let angles = candidate_angles();
        assert_eq!(angles.len(), 451);
        assert_eq!(angles[0], 0.0);
        assert_eq!(angles[450], MAX_ANGLE_DEG);
        assert_eq!(angles[239], 23.9);
        assert!(angles.windows(2).all(|w| w[0] < w[1]));
        assert!(angles
            .iter()
            .all(|a| ((a * 10.0).round() - a * 10.0).abs() < 1e-9));
    }

    #[test]
    fn test_vacuum_example() {
        // 50² sin(2θ) / 9.81 = 200 → θ ≈ 25.85°
        let angle = find_launch_angle(1.0, 50.0, 200.0, 0.0, 0.0).unwrap();
        assert_eq!(angle, 25.9);
    }

    #[test]
    fn test_zero_velocity_has_no_solution() {
        assert_eq!(find_launch_angle(1.0, 0.0, 10.0, 0.0, 0.0), None);
        assert_eq!(find_launch_angle(1.0, 0.0, 0.0, 0.47, 0.01), None);
    }

    #[test]
    fn test_unreachable_target() {
        assert_eq!(find_launch_angle(1.0, 50.0, 1_000_000.0, 0.0, 0.0), None);
    }

    #[test]
    fn test_zero_distance_returns_flattest_angle() {
        // A horizontal shot still travels two steps downrange
        assert_eq!(find_launch_angle(1.0, 50.0, 0.0, 0.0, 0.0), Some(0.0));
    }

    #[test]
    fn test_search_matches_free_function() {
        let params = ProjectileParams::new(0.5, 50.0, 0.47, 0.005);
        let search = LaunchAngleSearch::new(params);
        let solution = search.solve(100.0).unwrap().unwrap();

        assert_eq!(Some(solution.angle_deg), find_launch_angle(0.5, 50.0, 100.0, 0.47, 0.005));
        assert_eq!(solution.angle_deg, 14.6);
        assert_eq!(solution.candidates_tried, 147);
        assert!(solution.range_m > 100.0);
    }

    #[test]
    fn test_search_reports_no_solution() {
        let search = LaunchAngleSearch::new(ProjectileParams::new(0.145, 40.0, 0.3, 0.0042));
        assert_eq!(search.solve(150.0).unwrap(), None);
    }

    #[test]
    fn test_search_propagates_step_limit() {
        let mut search = LaunchAngleSearch::new(ProjectileParams::vacuum(1.0, 50.0));
        search.set_max_steps(Some(5));
        assert!(matches!(
            search.solve(200.0),
            Err(DrillError::StepLimitExceeded { .. })
        ));
    }

    #[test]
    fn test_sweep_covers_grid() {
        let search = LaunchAngleSearch::new(ProjectileParams::vacuum(1.0, 20.0));
        let sweep = search.sweep().unwrap();
        assert_eq!(sweep.len(), CANDIDATE_ANGLE_COUNT);
        assert_eq!(sweep[0].angle_deg, 0.0);
        assert_eq!(sweep[450].angle_deg, 45.0);
        assert_eq!(sweep[300].range_m, search.integrator().range(30.0).unwrap());
    }

    #[test]
    fn test_count_local_maxima() {
        assert_eq!(count_local_maxima(&[], 0.0), 0);
        assert_eq!(count_local_maxima(&samples(&[0.0, 1.0, 2.0, 1.0, 0.0]), 0.0), 1);
        assert_eq!(count_local_maxima(&samples(&[0.0, 2.0, 1.0, 3.0, 0.0]), 0.0), 2);
        assert_eq!(count_local_maxima(&samples(&[0.0, 1.0, 2.0, 3.0]), 0.0), 1);
        assert_eq!(count_local_maxima(&samples(&[3.0, 2.0, 1.0]), 0.0), 1);
        assert_eq!(count_local_maxima(&samples(&[1.0, 1.0, 1.0]), 0.0), 1);
    }

    #[test]
    fn test_count_local_maxima_ignores_jitter() {
        let jittery = samples(&[0.0, 1.0, 0.99, 1.01, 1.5, 0.5]);
        assert_eq!(count_local_maxima(&jittery, 0.05), 1);
        assert_eq!(count_local_maxima(&jittery, 0.0), 2);
    }
}
