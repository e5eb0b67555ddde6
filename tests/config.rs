use cleanroom_hvac::config::{load_or_default, Config};
use cleanroom_hvac::hvac::SystemType;
use cleanroom_hvac::report::ReportFormat;

fn temp_path(name: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(name);
    let _ = std::fs::remove_file(&path);
    path
}

#[test]
fn missing_file_is_created_with_defaults() {
    let path = temp_path("cleanroom_hvac_config_default.toml");
    let cfg = load_or_default(&path).unwrap();
    assert_eq!(cfg, Config::default());
    assert!(path.exists());

    let again = load_or_default(&path).unwrap();
    assert_eq!(again, cfg);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn partial_file_keeps_other_defaults() {
    let path = temp_path("cleanroom_hvac_config_partial.toml");
    std::fs::write(
        &path,
        r#"
language = "ko"
report_format = "json"
default_system_type = "DX"

[room_defaults]
fresh_air_ratio = 0.25
"#,
    )
    .unwrap();

    let cfg = load_or_default(&path).unwrap();
    assert_eq!(cfg.language, "ko");
    assert_eq!(cfg.report_format, ReportFormat::Json);
    assert_eq!(cfg.default_system_type, SystemType::Dx);
    assert_eq!(cfg.room_defaults.fresh_air_ratio, 0.25);
    assert_eq!(cfg.room_defaults.lighting_w_per_sqft, 1.75);

    let base = cfg.room_defaults.base_room();
    assert_eq!(base.fresh_air_ratio, 0.25);
    assert_eq!(base.infiltration, 2.0);
    assert_eq!(base.people_count, 0);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn malformed_file_is_an_error() {
    let path = temp_path("cleanroom_hvac_config_bad.toml");
    std::fs::write(&path, "language = [").unwrap();
    assert!(load_or_default(&path).is_err());
    let _ = std::fs::remove_file(&path);
}

#[test]
fn system_type_parses_loose_spellings() {
    assert_eq!("chilled water".parse::<SystemType>().unwrap(), SystemType::ChilledWater);
    assert_eq!("CHW".parse::<SystemType>().unwrap(), SystemType::ChilledWater);
    assert_eq!("dx".parse::<SystemType>().unwrap(), SystemType::Dx);
    assert_eq!("Ventilation".parse::<SystemType>().unwrap(), SystemType::Ventilation);
    assert!("steam".parse::<SystemType>().is_err());
}
