use lakewake_lib::wake::{
    compute_wave_metrics, HullRegime, VesselSpec, WakeConfig, WaveRating,
};

fn reference_vessel() -> VesselSpec {
    // 50 m / 8 m / 300 t at 18 km/h over 10 m of water.
    VesselSpec::at_reference_conditions(50.0, 8.0, 300.0)
}

#[test]
fn reference_vessel_end_to_end() {
    let metrics = compute_wave_metrics(&reference_vessel(), &WakeConfig::default())
        .expect("reference vessel computes");

    assert_eq!(metrics.regime, HullRegime::Displacement);
    assert!((metrics.froude_length - 0.226).abs() < 1e-3);
    assert!((metrics.froude_depth - 0.505).abs() < 1e-3);
    assert!((metrics.max_wave_height_m - 0.75).abs() < 1e-12);
    assert!((metrics.wavelength_m - 16.01).abs() < 5e-3);
    assert!((metrics.wave_period_s - 3.20).abs() < 5e-3);
    assert!((metrics.wave_velocity_mps - 5.0).abs() < 1e-9);
    assert!((metrics.wave_energy_density_jm2 - 689.77).abs() < 0.01);
    assert!((metrics.impact_force_nm2 - 91_968.75).abs() < 0.01);
    assert_eq!(metrics.rating, WaveRating::High);
}

#[test]
fn all_quantities_non_negative_for_valid_inputs() {
    let specs = [
        VesselSpec::at_reference_conditions(20.0, 5.0, 60.0),
        VesselSpec {
            speed_kmh: 45.0,
            ..VesselSpec::at_reference_conditions(12.0, 3.0, 8.0)
        },
        VesselSpec {
            depth_m: 3.0,
            ..VesselSpec::at_reference_conditions(60.0, 10.0, 450.0)
        },
    ];

    for spec in specs {
        let metrics = compute_wave_metrics(&spec, &WakeConfig::default()).expect("valid spec");
        assert!(metrics.max_wave_height_m >= 0.0);
        assert!(metrics.wave_energy_density_jm2 >= 0.0);
        assert!(metrics.wave_power_wm >= 0.0);
        assert!(metrics.impact_force_nm2 >= 0.0);
        assert!((1..=3).contains(&metrics.rating.as_u8()));
    }
}

#[test]
fn shallow_water_correction_amplifies_height() {
    let deep = VesselSpec {
        depth_m: 10.0,
        ..reference_vessel()
    };
    // Same hull over 2 m of water: froude_depth 1.129, factor 1 + 0.429.
    let shallow = VesselSpec {
        depth_m: 2.0,
        ..reference_vessel()
    };

    let config = WakeConfig::default();
    let deep_metrics = compute_wave_metrics(&deep, &config).unwrap();
    let shallow_metrics = compute_wave_metrics(&shallow, &config).unwrap();

    let expected_factor = 1.0 + (shallow_metrics.froude_depth - 0.7);
    let observed_factor = shallow_metrics.max_wave_height_m / deep_metrics.max_wave_height_m;
    assert!((observed_factor - expected_factor).abs() < 1e-9);
}

#[test]
fn planing_hull_uses_halved_coefficient() {
    // Small fast hull: 40 km/h over 12 m gives froude_length ~ 1.02.
    let planing = VesselSpec {
        speed_kmh: 40.0,
        depth_m: 40.0,
        ..VesselSpec::at_reference_conditions(12.0, 3.0, 9.0)
    };

    let metrics = compute_wave_metrics(&planing, &WakeConfig::default()).unwrap();
    assert_eq!(metrics.regime, HullRegime::Planing);

    let speed_ms = 40.0 / 3.6;
    let expected = 0.02 * 9.0 * speed_ms * speed_ms / (12.0 * 3.0);
    assert!((metrics.max_wave_height_m - expected).abs() < 1e-12);
}

#[test]
fn rating_combines_as_max_of_sub_ratings() {
    use lakewake_lib::wake::{classify, classify_energy, classify_force, RatingThresholds};

    let thresholds = RatingThresholds::default();
    let cases = [
        (10.0, 1_000.0),
        (200.0, 1_000.0),
        (10.0, 50_000.0),
        (300.0, 60_000.0),
        (150.0, 45_000.0),
    ];

    for (energy, force) in cases {
        let combined = classify(energy, force, &thresholds);
        let expected = classify_energy(energy, &thresholds).max(classify_force(force, &thresholds));
        assert_eq!(combined, expected);
    }
}

#[test]
fn invalid_inputs_are_rejected_not_panicked() {
    let mut spec = reference_vessel();
    spec.length_m = 0.0;
    assert!(compute_wave_metrics(&spec, &WakeConfig::default()).is_err());

    let mut spec = reference_vessel();
    spec.depth_m = -4.0;
    assert!(compute_wave_metrics(&spec, &WakeConfig::default()).is_err());
}
