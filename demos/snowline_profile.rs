//! Example: Fragmentation velocity across the water snow line
//!
//! Builds a passively irradiated disk, locates the 170 K snow line and
//! compares the smoothed fragmentation velocity with a hard step.
//!
//! **Disk**:
//! - Temperature: T(r) = 280 K · (r / 1 AU)^(-1/2)
//! - Grid: 200 log-spaced cells from 0.1 to 100 AU
//! - Analytical snow line: (280 / 170)² ≈ 2.71 AU
//!
//! Run with `RUST_LOG=debug` to see the snow line search.

use snowline_rs::{
    constants::AU,
    models::{SmoothFragmentationVelocity, Transition},
    physics::{PhysicalModel, PhysicalQuantity, PhysicalState},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("═══════════════════════════════════════════════════════");
    println!("  Fragmentation velocity across the water snow line");
    println!("═══════════════════════════════════════════════════════\n");

    // ====== Disk ======

    let n_cells = 200;
    let (r_in, r_out): (f64, f64) = (0.1, 100.0); // [AU]

    let radius: Vec<f64> = (0..n_cells)
        .map(|i| r_in * (r_out / r_in).powf(i as f64 / (n_cells - 1) as f64) * AU)
        .collect();
    let temperature: Vec<f64> = radius
        .iter()
        .map(|r| 280.0 * (r / AU).powf(-0.5))
        .collect();

    let state = PhysicalState::disk(radius.clone(), temperature.clone());

    // ====== Models ======

    let smooth = SmoothFragmentationVelocity::default();
    let hard = SmoothFragmentationVelocity::default().with_transition(Transition::hard());

    let smooth_output = smooth.compute_physics(&state)?;
    let hard_output = hard.compute_physics(&state)?;

    let r_snowline = smooth_output
        .get_metadata("snowline_radius")
        .ok_or("snow line radius missing from output")?;

    println!("Snow line:");
    println!("  located    : {:.4} AU", r_snowline / AU);
    println!("  analytical : {:.4} AU\n", (280.0f64 / 170.0).powi(2));

    let v_smooth = smooth_output
        .get(PhysicalQuantity::FragmentationVelocity)
        .ok_or("fragmentation velocity missing")?
        .to_vec();
    let v_hard = hard_output
        .get(PhysicalQuantity::FragmentationVelocity)
        .ok_or("fragmentation velocity missing")?
        .to_vec();

    // ====== Profile around the snow line ======

    println!("{:>10} {:>10} {:>14} {:>14}", "r (AU)", "T (K)", "smooth (m/s)", "hard (m/s)");
    println!("{:-<52}", "");

    for i in 0..n_cells {
        let r_au = radius[i] / AU;
        if (r_au - r_snowline / AU).abs() > 1.5 {
            continue;
        }
        println!(
            "{:>10.3} {:>10.1} {:>14.3} {:>14.3}",
            r_au,
            temperature[i],
            v_smooth[i] / 100.0,
            v_hard[i] / 100.0
        );
    }

    println!("\nPlateaus: {:.1} m/s inside, {:.1} m/s outside",
             v_smooth[0] / 100.0,
             v_smooth[n_cells - 1] / 100.0);

    Ok(())
}
