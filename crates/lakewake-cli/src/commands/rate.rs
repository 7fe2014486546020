//! Rate command handler: wake metrics for a single vessel.

use anyhow::{Context, Result};

use lakewake_lib::wake::{compute_wave_metrics, VesselSpec, WakeConfig};

/// Handle the rate subcommand: compute and print metrics for one vessel.
pub fn handle_rate(
    length_m: f64,
    beam_m: f64,
    displacement_t: f64,
    speed_kmh: f64,
    depth_m: f64,
) -> Result<()> {
    let spec = VesselSpec {
        length_m,
        beam_m,
        speed_kmh,
        displacement_t,
        depth_m,
    };
    let metrics = compute_wave_metrics(&spec, &WakeConfig::default())
        .context("failed to compute wake metrics")?;

    println!(
        "Wake metrics for a {:.1} m / {:.1} t vessel at {:.1} km/h over {:.1} m of water:",
        spec.length_m, spec.displacement_t, spec.speed_kmh, spec.depth_m
    );
    println!("{:<26} {:>10.2}", "Max wave height (m)", metrics.max_wave_height_m);
    println!("{:<26} {:>10.1}", "Wavelength (m)", metrics.wavelength_m);
    println!("{:<26} {:>10.1}", "Wave period (s)", metrics.wave_period_s);
    println!("{:<26} {:>10.1}", "Wave velocity (m/s)", metrics.wave_velocity_mps);
    println!(
        "{:<26} {:>10.0}",
        "Wave energy (J/m²)", metrics.wave_energy_density_jm2
    );
    println!("{:<26} {:>10.0}", "Wave power (W/m)", metrics.wave_power_wm);
    println!("{:<26} {:>10.0}", "Impact force (N/m²)", metrics.impact_force_nm2);
    println!("{:<26} {:>10.3}", "Froude length number", metrics.froude_length);
    println!("{:<26} {:>10.3}", "Froude depth number", metrics.froude_depth);
    println!("{:<26} {:>10.1}", "Kelvin angle (deg)", metrics.kelvin_angle_deg);
    println!("{:<26} {:>10}", "Wave rating", metrics.rating);

    Ok(())
}
