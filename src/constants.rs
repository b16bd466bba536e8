//! Physical and numerical constants used by the range integrator and angle search

/// Gravitational acceleration in m/s²
///
/// Rounded value rather than the standard 9.80665, so ranges match the
/// closed form `v² sin(2θ) / 9.81` used for reference checks.
pub const GRAVITY_MPS2: f64 = 9.81;

/// Air density at sea level (kg/m³)
///
/// Value: 1.293 kg/m³, dry air at 0°C and 1013.25 hPa.
pub const AIR_DENSITY_KG_M3: f64 = 1.293;

/// Default integration time step in seconds
pub const DEFAULT_TIME_STEP: f64 = 0.001;

// Launch angle search grid

/// Number of candidate launch angles (0.0° through 45.0° inclusive)
pub const CANDIDATE_ANGLE_COUNT: usize = 451;

/// Spacing between candidate angles in degrees
pub const ANGLE_STEP_DEG: f64 = 0.1;

/// Candidate angles per degree; candidates are generated as `i / ANGLE_STEPS_PER_DEG`
pub const ANGLE_STEPS_PER_DEG: f64 = 10.0;

/// Largest candidate launch angle in degrees
pub const MAX_ANGLE_DEG: f64 = 45.0;

/// Largest Fibonacci index whose closed form still rounds to the exact integer in f64
pub const MAX_FIBONACCI_INDEX: u32 = 70;
