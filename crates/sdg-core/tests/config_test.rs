use sdg_core::config::*;
use sdg_core::errors::ConfigError;
use sdg_core::models::{Outcome, Sector};

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = SdgConfig::from_toml("").unwrap();

    // Model defaults
    assert_eq!(config.model.baseline.literacy, 74.0);
    assert_eq!(config.model.baseline.clean_water, 62.0);
    assert_eq!(config.model.baseline.renewable_energy, 38.0);
    assert_eq!(config.model.baseline.co2_reduction, 12.0);
    assert_eq!(
        config.model.coefficients.coefficient(Outcome::RenewableEnergy, Sector::Energy),
        3.5
    );
    assert_eq!(
        config.model.coefficients.coefficient(Outcome::CleanWater, Sector::Infrastructure),
        0.8
    );

    // Trajectory defaults
    assert_eq!(config.trajectory.start_year, 2025);
    assert_eq!(config.trajectory.horizon_years, 6);

    // Recommendation defaults
    assert_eq!(config.recommendations.max_recommendations, 3);

    // Observability defaults
    assert_eq!(config.observability.log_level, "info");
    assert!(!config.observability.json_logs);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[trajectory]
start_year = 2026

[model.baseline]
literacy = 80.0
cleanWater = 60.0
renewableEnergy = 40.0
co2Reduction = 10.0
"#;
    let config = SdgConfig::from_toml(toml).unwrap();
    assert_eq!(config.trajectory.start_year, 2026);
    assert_eq!(config.trajectory.horizon_years, 6); // default
    assert_eq!(config.model.baseline.literacy, 80.0);
    // Non-overridden model data keeps defaults
    assert_eq!(config.model.coefficients, defaults::IMPACT_MATRIX);
    assert_eq!(config.model.default_allocation, defaults::DEFAULT_ALLOCATION);
}

#[test]
fn partial_model_tables_fall_back_per_key() {
    let toml = r#"
[model.baseline]
literacy = 80.0

[model.coefficients.literacy]
education = 3.0
health = 0.3
water = 0.1
energy = 0.2
agriculture = 0.1
infrastructure = 0.2

[model.default_allocation]
education = 20.0
agriculture = 18.0
"#;
    let config = SdgConfig::from_toml(toml).unwrap();

    assert_eq!(config.model.baseline.literacy, 80.0);
    assert_eq!(config.model.baseline.clean_water, 62.0);
    assert_eq!(config.model.baseline.co2_reduction, 12.0);

    assert_eq!(config.model.coefficients.literacy.education, 3.0);
    assert_eq!(
        config.model.coefficients.clean_water,
        defaults::IMPACT_MATRIX.clean_water
    );

    let allocation = config.model.default_allocation;
    assert_eq!(allocation.education, 20.0);
    assert_eq!(allocation.agriculture, 18.0);
    assert_eq!(allocation.water, 12.0);
    assert_eq!(allocation.total(), 100.0);
}

#[test]
fn partial_allocation_still_has_to_balance() {
    let toml = r#"
[model.suggested_allocation]
education = 40.0
"#;
    let err = SdgConfig::from_toml(toml).unwrap_err();
    assert_eq!(field_of(err), "model.suggested_allocation");
}

#[test]
fn config_serde_roundtrip() {
    let config = SdgConfig::default();
    let toml_str = toml::to_string(&config).unwrap();
    let roundtripped = SdgConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped, config);
}

#[test]
fn trajectory_years_ascend_from_start() {
    let years: Vec<i32> = TrajectoryConfig::default().years().collect();
    assert_eq!(years, vec![2025, 2026, 2027, 2028, 2029, 2030]);
}

#[test]
fn standard_model_is_shared_and_matches_defaults() {
    let a = ModelConfig::standard();
    let b = ModelConfig::standard();
    assert!(std::ptr::eq(a, b));
    assert_eq!(*a, ModelConfig::default());
}

// --- Validation ---

fn field_of(err: ConfigError) -> String {
    match err {
        ConfigError::ValidationFailed { field, .. } => field,
        other => panic!("expected ValidationFailed, got {other:?}"),
    }
}

#[test]
fn rejects_negative_coefficient() {
    let toml = r#"
[model.coefficients.literacy]
education = -2.5
health = 0.3
water = 0.1
energy = 0.2
agriculture = 0.1
infrastructure = 0.2
"#;
    let err = SdgConfig::from_toml(toml).unwrap_err();
    assert_eq!(field_of(err), "model.coefficients.literacy.education");
}

#[test]
fn rejects_unbalanced_suggested_allocation() {
    let toml = r#"
[model.suggested_allocation]
education = 30.0
health = 16.0
water = 14.0
energy = 22.0
agriculture = 13.0
infrastructure = 15.0
"#;
    let err = SdgConfig::from_toml(toml).unwrap_err();
    assert_eq!(field_of(err), "model.suggested_allocation");
}

#[test]
fn rejects_baseline_above_ceiling() {
    let mut config = SdgConfig::default();
    config.model.baseline.clean_water = 101.0;
    assert_eq!(field_of(config.validate().unwrap_err()), "model.baseline.cleanWater");
}

#[test]
fn rejects_zero_horizon() {
    let err = SdgConfig::from_toml("[trajectory]\nhorizon_years = 0\n").unwrap_err();
    assert_eq!(field_of(err), "trajectory.horizon_years");
}

#[test]
fn rejects_oversized_horizon() {
    let err = SdgConfig::from_toml("[trajectory]\nhorizon_years = 1000000\n").unwrap_err();
    assert_eq!(field_of(err), "trajectory.horizon_years");

    let at_cap = format!(
        "[trajectory]\nhorizon_years = {}\n",
        sdg_core::constants::MAX_HORIZON_YEARS
    );
    assert!(SdgConfig::from_toml(&at_cap).is_ok());
}

#[test]
fn rejects_start_year_out_of_range() {
    let err = SdgConfig::from_toml(&format!("[trajectory]\nstart_year = {}\n", i32::MAX))
        .unwrap_err();
    assert_eq!(field_of(err), "trajectory.start_year");
}

#[test]
fn rejects_zero_recommendation_limit() {
    let err =
        SdgConfig::from_toml("[recommendations]\nmax_recommendations = 0\n").unwrap_err();
    assert_eq!(field_of(err), "recommendations.max_recommendations");
}

#[test]
fn rejects_unknown_log_level() {
    let err = SdgConfig::from_toml("[observability]\nlog_level = \"loud\"\n").unwrap_err();
    assert_eq!(field_of(err), "observability.log_level");
}

#[test]
fn malformed_toml_is_parse_error() {
    let err = SdgConfig::from_toml("[trajectory\nstart_year = ").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn load_reads_file_and_reports_missing() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("sdg.toml");
    std::fs::write(&path, "[recommendations]\nmax_recommendations = 2\n").unwrap();
    let config = SdgConfig::load(&path).unwrap();
    assert_eq!(config.recommendations.max_recommendations, 2);

    let missing = dir.path().join("absent.toml");
    assert!(matches!(
        SdgConfig::load(&missing),
        Err(ConfigError::FileNotFound { .. })
    ));
}
