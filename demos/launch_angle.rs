/// Launch Angle Example
///
/// Finds the flattest launch angle that carries a drag-affected ball past a
/// target, then prints the flight at that angle and the full range sweep.
///
/// Run with `RUST_LOG=projectile_drills=debug` to see the search events.

use projectile_drills::{count_local_maxima, LaunchAngleSearch, ProjectileParams};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Launch Angle Example ===\n");

    // Roughly a football
    let params = ProjectileParams::new(0.43, 30.0, 0.25, 0.038);
    let target = 50.0; // meters

    println!("Projectile:");
    println!("  Mass: {} kg", params.mass);
    println!("  Velocity: {} m/s", params.velocity);
    println!("  Drag coefficient: {}", params.drag_coefficient);
    println!("  Cross-section: {} m²", params.cross_section_area);
    println!("  Target: {} m", target);
    println!();

    let mut search = LaunchAngleSearch::new(params);
    search.set_max_steps(Some(1_000_000));

    let Some(solution) = search.solve(target)? else {
        println!("No launch angle between 0° and 45° reaches {target} m");
        return Ok(());
    };

    println!("Solution:");
    println!("  Angle: {:.1}°", solution.angle_deg);
    println!("  Range: {:.2} m", solution.range_m);
    println!("  Candidates tried: {}", solution.candidates_tried);
    println!();

    let flight = search.integrator().flight(solution.angle_deg)?;
    println!("Flight at {:.1}°:", flight.angle_deg);
    println!("  Max Height: {:.2} m", flight.max_height_m);
    println!("  Time of Flight: {:.3} s", flight.time_of_flight_s);
    println!("  Impact Speed: {:.2} m/s", flight.impact_speed_mps);
    println!();

    println!("  Time (s) |   X (m)  |   Y (m)  | Speed (m/s)");
    println!("  ---------|----------|----------|------------");
    for point in &flight.points {
        println!(
            "  {:8.3} | {:8.2} | {:8.2} | {:8.2}",
            point.time, point.x, point.y, point.speed
        );
    }
    println!();

    let sweep = search.sweep()?;
    let maxima = count_local_maxima(&sweep, 0.5);
    if maxima > 1 {
        println!("Warning: range has {maxima} local maxima over 0-45°, first hit may be misleading");
    }

    println!("Sweep (every 5°):");
    for sample in sweep.iter().step_by(50) {
        println!("  {:5.1}° -> {:8.2} m", sample.angle_deg, sample.range_m);
    }
    println!();

    println!("Solution as JSON:");
    println!("{}", serde_json::to_string_pretty(&solution)?);

    Ok(())
}
