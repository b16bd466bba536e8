//! Range integrator: fixed-step flight simulation under gravity and quadratic drag.
//!
//! Each step re-evaluates the drag direction from the instantaneous velocity,
//! advances position with the pre-step velocity, then advances velocity with
//! the drag computed from that same pre-step state. Integration stops the first
//! time the projectile is below ground; the reported range is the x position
//! after that step, without interpolating to the exact crossing.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::constants::{AIR_DENSITY_KG_M3, DEFAULT_TIME_STEP, GRAVITY_MPS2};
use crate::error::DrillError;

/// Physical description of a projectile for one solve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectileParams {
    pub mass: f64,               // kg
    pub velocity: f64,           // m/s, launch speed
    pub drag_coefficient: f64,   // dimensionless
    pub cross_section_area: f64, // m²
}

impl ProjectileParams {
    pub fn new(mass: f64, velocity: f64, drag_coefficient: f64, cross_section_area: f64) -> Self {
        Self {
            mass,
            velocity,
            drag_coefficient,
            cross_section_area,
        }
    }

    /// Projectile with no aerodynamic drag
    pub fn vacuum(mass: f64, velocity: f64) -> Self {
        Self::new(mass, velocity, 0.0, 0.0)
    }
}

/// Drag deceleration magnitude (m/s²) at the given squared speed.
///
/// `a = ρ · Cd · A · v² / (2m)` with sea-level air density. A zero mass is not
/// guarded and yields inf or NaN.
pub fn drag_deceleration(params: &ProjectileParams, speed_sq: f64) -> f64 {
    AIR_DENSITY_KG_M3 * params.drag_coefficient * params.cross_section_area * speed_sq
        / (2.0 * params.mass)
}

/// Position and velocity during one integration run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightState {
    pub position: Vector2<f64>, // (x downrange, y height), meters
    pub velocity: Vector2<f64>, // m/s
}

impl FlightState {
    /// State at the muzzle for a launch speed and elevation in degrees
    pub fn launch(speed: f64, angle_deg: f64) -> Self {
        let angle_rad = angle_deg.to_radians();
        Self {
            position: Vector2::zeros(),
            velocity: Vector2::new(speed * angle_rad.cos(), speed * angle_rad.sin()),
        }
    }

    pub fn is_airborne(&self) -> bool {
        self.position.y >= 0.0
    }

    pub fn speed(&self) -> f64 {
        self.velocity.norm()
    }

    /// Advance one explicit Euler step of `dt` seconds.
    pub fn step(&mut self, params: &ProjectileParams, dt: f64) {
        let speed_sq = self.velocity.norm_squared();
        let deceleration = drag_deceleration(params, speed_sq);
        let heading = self.velocity.y.atan2(self.velocity.x);

        self.position += self.velocity * dt;
        self.velocity -= Vector2::new(
            deceleration * heading.cos(),
            deceleration * heading.sin() + GRAVITY_MPS2,
        ) * dt;
    }
}

/// Horizontal distance (m) travelled before the projectile drops below launch height.
///
/// No step ceiling and no input validation: a zero mass or a degenerate time
/// step surfaces as inf/NaN or a very long loop. Use [`RangeIntegrator`] with
/// [`RangeIntegrator::set_max_steps`] when inputs are untrusted.
pub fn integrate_range(
    mass: f64,
    velocity: f64,
    angle_degrees: f64,
    drag_coefficient: f64,
    cross_section_area: f64,
    dt: f64,
) -> f64 {
    let params = ProjectileParams::new(mass, velocity, drag_coefficient, cross_section_area);
    let mut state = FlightState::launch(velocity, angle_degrees);

    while state.is_airborne() {
        state.step(&params, dt);
    }

    state.position.x
}

/// Integration settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntegratorConfig {
    pub time_step: f64,          // seconds
    pub max_steps: Option<usize>, // None = unbounded
    pub sample_every: usize,      // record a trajectory point every N steps
}

impl Default for IntegratorConfig {
    fn default() -> Self {
        Self {
            time_step: DEFAULT_TIME_STEP,
            max_steps: None,
            sample_every: 100,
        }
    }
}

/// Single sampled point along a simulated flight
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryPoint {
    pub time: f64,  // s
    pub x: f64,     // m
    pub y: f64,     // m
    pub speed: f64, // m/s
}

/// Summary of one simulated flight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightSummary {
    pub angle_deg: f64,
    pub range_m: f64,
    pub max_height_m: f64,
    pub time_of_flight_s: f64,
    pub impact_speed_mps: f64,
    pub steps: usize,
    pub points: Vec<TrajectoryPoint>,
}

/// Configurable range integrator for a fixed projectile
#[derive(Debug, Clone)]
pub struct RangeIntegrator {
    params: ProjectileParams,
    config: IntegratorConfig,
}

impl RangeIntegrator {
    pub fn new(params: ProjectileParams) -> Self {
        Self::with_config(params, IntegratorConfig::default())
    }

    pub fn with_config(params: ProjectileParams, config: IntegratorConfig) -> Self {
        Self { params, config }
    }

    pub fn set_time_step(&mut self, step: f64) {
        self.config.time_step = step;
    }

    /// Bound the number of Euler steps per flight; `None` removes the bound.
    pub fn set_max_steps(&mut self, max_steps: Option<usize>) {
        self.config.max_steps = max_steps;
    }

    pub fn set_sample_every(&mut self, steps: usize) {
        self.config.sample_every = steps.max(1);
    }

    pub fn params(&self) -> &ProjectileParams {
        &self.params
    }

    pub fn config(&self) -> &IntegratorConfig {
        &self.config
    }

    /// Range for a launch angle in degrees.
    ///
    /// Produces exactly the same value as [`integrate_range`] for the same
    /// inputs whenever the step limit is not hit.
    pub fn range(&self, angle_deg: f64) -> Result<f64, DrillError> {
        let (state, _) = self.run(angle_deg, |_, _| {})?;
        Ok(state.position.x)
    }

    /// Full flight simulation with sampled trajectory points.
    pub fn flight(&self, angle_deg: f64) -> Result<FlightSummary, DrillError> {
        let dt = self.config.time_step;
        let sample_every = self.config.sample_every.max(1);
        let mut points = Vec::new();
        let mut max_height: f64 = 0.0;

        let (state, steps) = self.run(angle_deg, |step, state| {
            max_height = max_height.max(state.position.y);
            if step % sample_every == 0 {
                points.push(TrajectoryPoint {
                    time: step as f64 * dt,
                    x: state.position.x,
                    y: state.position.y,
                    speed: state.speed(),
                });
            }
        })?;

        let time_of_flight = steps as f64 * dt;
        points.push(TrajectoryPoint {
            time: time_of_flight,
            x: state.position.x,
            y: state.position.y,
            speed: state.speed(),
        });

        Ok(FlightSummary {
            angle_deg,
            range_m: state.position.x,
            max_height_m: max_height,
            time_of_flight_s: time_of_flight,
            impact_speed_mps: state.speed(),
            steps,
            points,
        })
    }

    /// Integrate until landing, calling `observe` with each pre-step state.
    fn run<F>(&self, angle_deg: f64, mut observe: F) -> Result<(FlightState, usize), DrillError>
    where
        F: FnMut(usize, &FlightState),
    {
        let dt = self.config.time_step;
        if !dt.is_finite() || dt <= 0.0 {
            return Err(DrillError::InvalidTimeStep(dt));
        }

        let mut state = FlightState::launch(self.params.velocity, angle_deg);
        let mut steps = 0usize;

        while state.is_airborne() {
            if let Some(max_steps) = self.config.max_steps {
                if steps >= max_steps {
                    warn!(
                        angle_deg,
                        steps,
                        x = state.position.x,
                        y = state.position.y,
                        "range integration hit step limit"
                    );
                    return Err(DrillError::StepLimitExceeded {
                        steps,
                        x: state.position.x,
                        y: state.position.y,
                    });
                }
            }

            observe(steps, &state);
            state.step(&self.params, dt);
            steps += 1;
        }

        Ok((state, steps))
    }
}
