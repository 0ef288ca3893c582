use std::error::Error;

use fir_motion::{MotionRequest, ProfileDerivatives, ReferenceProfile};
use gnuplot::*;

fn main() -> Result<(), Box<dyn Error>> {
    // -----------------------
    // 1. Set up parameters
    // -----------------------
    let sampling_time = 0.001; // 1 kHz
    let pos_0 = 0.0; // Initial position
    let pos_1 = 50.0; // Target position
    let vel = 50.0; // Cruise velocity
    let acc = 500.0; // Acceleration limit

    let request = MotionRequest::new(sampling_time, pos_0, pos_1, vel, acc)?;

    // ---------------------------
    // 2. Filtered and original
    // ---------------------------
    let filtered = request.generate()?;
    let filtered_d = ProfileDerivatives::from_positions(&filtered, sampling_time);
    let original = ReferenceProfile::new(&request);

    let final_position = filtered.last().copied().unwrap_or(pos_0);
    if (final_position - pos_1).abs() > 0.01 {
        eprintln!("Warning: final position is off by more than 0.01 units.");
    }

    let samples = |n: usize| (0..n).map(|i| i as f64).collect::<Vec<_>>();

    // --------------
    // 3. Plot data
    // --------------
    // Three stacked plots: position, velocity, acceleration over sample index.
    let mut fg = Figure::new();
    fg.set_multiplot_layout(3, 1);

    fg.axes2d()
        .set_title("Position, Velocity and Acceleration Profile", &[])
        .set_x_label("Sample", &[])
        .set_y_label("Position [deg]", &[])
        .set_x_grid(true)
        .set_y_grid(true)
        .lines(
            &samples(original.position.len()),
            &original.position,
            &[Color("black"), Caption("original")],
        )
        .lines(
            &samples(filtered.len()),
            &filtered,
            &[Color("blue"), LineStyle(DotDash), Caption("filtered")],
        );

    fg.axes2d()
        .set_x_label("Sample", &[])
        .set_y_label("Velocity [deg/s]", &[])
        .set_x_grid(true)
        .set_y_grid(true)
        .lines(
            &samples(original.velocity.len()),
            &original.velocity,
            &[Color("black"), Caption("original")],
        )
        .lines(
            &samples(filtered_d.velocity.len()),
            &filtered_d.velocity,
            &[Color("blue"), LineStyle(DotDash), Caption("filtered")],
        );

    fg.axes2d()
        .set_x_label("Sample", &[])
        .set_y_label("Acceleration [deg/s^2]", &[])
        .set_x_grid(true)
        .set_y_grid(true)
        .lines(
            &samples(original.acceleration.len()),
            &original.acceleration,
            &[Color("black"), Caption("original")],
        )
        .lines(
            &samples(filtered_d.acceleration.len()),
            &filtered_d.acceleration,
            &[Color("blue"), LineStyle(DotDash), Caption("filtered")],
        );

    // Attempt to show in a pop-up window (might require gnuplot installed)
    fg.show().map_err(|e| format!("Failed to display plot: {e}"))?;

    println!(
        "Plot generated. {} samples, peak velocity {:.3}, peak acceleration {:.3}.",
        filtered.len(),
        filtered_d.peak_velocity(),
        filtered_d.peak_acceleration()
    );
    Ok(())
}
