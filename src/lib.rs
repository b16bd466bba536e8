//! # Projectile Drills
//!
//! Launch angle search for a projectile under gravity and quadratic air drag,
//! alongside a few standalone numeric drills: closed-form Fibonacci numbers, a
//! prime sieve with file output and a card position tracker.

// Re-export the main types and functions
pub use angle_search::{
    candidate_angles, count_local_maxima, find_launch_angle, LaunchAngleSearch, LaunchSolution,
    RangeSample,
};
pub use error::DrillError;
pub use fibonacci::fibonacci;
pub use primes::{sieve_of_eratosthenes, write_primes};
pub use range_integrator::{
    drag_deceleration, integrate_range, FlightState, FlightSummary, IntegratorConfig,
    ProjectileParams, RangeIntegrator, TrajectoryPoint,
};
pub use shuffling::{find_card_position, Deck, Instruction};

// Module declarations
pub mod constants;
mod error;
mod range_integrator;
mod angle_search;
mod fibonacci;
mod primes;
mod shuffling;
