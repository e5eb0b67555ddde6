use cleanroom_hvac::config::Config;
use cleanroom_hvac::hvac::{Selection, SystemType};
use cleanroom_hvac::project::{Project, ProjectError};

const SAMPLE: &str = r#"
name = "Sterile Filling Block"
location = "Pune"
peak_max_temp_c = 42.0
outdoor_humidity_percent = 70.0

[[zones]]
name = "Filling"
standard = "ISO 14644-4"
classification = "iso 6"

[[zones.rooms]]
name = "Filling Room 1"
length = 10.0
width = 8.0
height = 3.0

[[zones.rooms]]
name = "Filling Room 2"
length = 10.0
width = 8.0
height = 3.0

[[zones]]
name = "Packing"
classification = "Packing Hall"
system_type = "DX"
acph_min = 10
acph_max = 20

[[zones.rooms]]
name = "Secondary Packing"
length = 12.0
width = 6.0
height = 3.0
people_count = 6
equipment_load = 2.0
"#;

#[test]
fn parses_project_toml() {
    let project = Project::from_toml_str(SAMPLE).unwrap();
    assert_eq!(project.name, "Sterile Filling Block");
    assert_eq!(project.peak_max_temp_c, Some(42.0));
    assert_eq!(project.peak_min_temp_c, None);
    assert_eq!(project.zones.len(), 2);
    assert_eq!(project.zones[1].system_type, Some(SystemType::Dx));
    assert_eq!(project.zones[1].rooms[0].people_count, Some(6));
}

#[test]
fn dataset_zone_uses_canonical_classification() {
    let project = Project::from_toml_str(SAMPLE).unwrap();
    let ctx = project.zones[0].resolve(SystemType::ChilledWater).unwrap();
    assert_eq!(ctx.classification, "ISO 6");
    assert_eq!((ctx.acph_min, ctx.acph_max), (150, 240));
    assert_eq!(ctx.system_type, SystemType::ChilledWater);
}

#[test]
fn evaluates_rooms_and_zone_totals() {
    let report = Project::from_toml_str(SAMPLE).unwrap().evaluate().unwrap();
    assert_eq!(report.zones.len(), 2);

    let filling = &report.zones[0];
    assert_eq!(filling.rooms.len(), 2);
    let first = &filling.rooms[0].result;
    assert_eq!(first.acph, 195);
    assert_eq!(first.resultant_cfm, 30325.0);
    assert_eq!(first.ahu_cooling_load_tr, 76.0);
    assert_eq!(first.cooling_coil_rows, 3);
    assert_eq!(first.filter_stages, 3);

    let summary = &filling.summary;
    assert_eq!(summary.room_count, 2);
    assert_eq!(summary.total_area, 160.0);
    assert_eq!(summary.total_resultant_cfm, 60650.0);
    assert_eq!(summary.total_cooling_load_tr, 152.0);
    assert_eq!(summary.total_chilled_water_gpm, 608.0);
    assert_eq!(summary.ahu.ahu_cfm, 60750.0);
    assert_eq!(summary.ahu.ahu_size, Selection::Sized("1450"));

    let packing = &report.zones[1];
    assert_eq!(packing.context.system_type, SystemType::Dx);
    assert_eq!(packing.context.acph_min, 10);
    let room = &packing.rooms[0];
    assert_eq!(room.input.people_count, 6);
    assert_eq!(room.result.acph, 15);
    assert_eq!(room.result.chilled_water_gpm, 0.0);

    let expected_tr = summary.total_cooling_load_tr + packing.summary.total_cooling_load_tr;
    assert_eq!(report.total_cooling_load_tr, expected_tr);
}

#[test]
fn partial_acph_override_merges_with_dataset() {
    let src = r#"
name = "Override"

[[zones]]
name = "Z"
standard = "ISO 14644-4"
classification = "ISO 8"
acph_max = 40
"#;
    let project = Project::from_toml_str(src).unwrap();
    let ctx = project.zones[0].resolve(SystemType::ChilledWater).unwrap();
    assert_eq!((ctx.acph_min, ctx.acph_max), (20, 40));
}

#[test]
fn unknown_classification_without_range_is_rejected() {
    let src = r#"
name = "Broken"

[[zones]]
name = "Mystery"
standard = "ISO 14644-4"
classification = "ISO 42"

[[zones.rooms]]
name = "R"
length = 3.0
width = 3.0
height = 3.0
"#;
    let err = Project::from_toml_str(src).unwrap().evaluate().unwrap_err();
    match err {
        ProjectError::UnknownClassification { zone, classification, .. } => {
            assert_eq!(zone, "Mystery");
            assert_eq!(classification, "ISO 42");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn config_defaults_fill_missing_room_fields() {
    let mut cfg = Config::default();
    cfg.room_defaults.fresh_air_ratio = 0.2;
    cfg.default_system_type = SystemType::Ventilation;

    let src = r#"
name = "Defaults"

[[zones]]
name = "Z"
standard = "ISO 14644-4"
classification = "ISO 7"

[[zones.rooms]]
name = "R"
length = 5.0
width = 4.0
height = 3.0
"#;
    let report = Project::from_toml_str(src).unwrap().evaluate_with(&cfg).unwrap();
    let room = &report.zones[0].rooms[0];
    assert_eq!(room.input.fresh_air_ratio, 0.2);
    assert_eq!(report.zones[0].context.system_type, SystemType::Ventilation);
    assert_eq!(room.result.fresh_air_cfm, (room.result.room_cfm * 0.2).ceil());
    assert_eq!(room.result.room_ac_load_tr, 0.0);
}

#[test]
fn parses_project_json() {
    let src = r#"{
        "name": "Json Project",
        "zones": [{
            "name": "Lab",
            "standard": "GMP",
            "classification": "Grade C (ISO 7 at Rest & ISO 8 in Oper.)",
            "system_type": "Chilled Water",
            "rooms": [{ "name": "Lab 1", "length": 6.0, "width": 5.0, "height": 3.0 }]
        }]
    }"#;
    let report = Project::from_json_str(src).unwrap().evaluate().unwrap();
    let ctx = &report.zones[0].context;
    assert_eq!((ctx.acph_min, ctx.acph_max), (60, 120));
    assert_eq!(report.zones[0].rooms[0].result.acph, 90);
}

#[test]
fn rejects_unknown_file_extension() {
    let path = std::env::temp_dir().join("cleanroom_hvac_project_test.yaml");
    std::fs::write(&path, "name: x").unwrap();
    let err = Project::from_path(&path).unwrap_err();
    assert!(matches!(err, ProjectError::UnsupportedFormat(ref ext) if ext == "yaml"));
    let _ = std::fs::remove_file(&path);
}

#[test]
fn bundled_demo_projects_evaluate() {
    let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("demos");
    for file in ["sample_project.toml", "sample_project.json"] {
        let project = Project::from_path(&dir.join(file)).unwrap();
        let report = project.evaluate().unwrap();
        assert!(!report.zones.is_empty(), "{file}");
        for zone in &report.zones {
            assert_eq!(zone.summary.room_count, zone.rooms.len());
        }
    }
}

#[test]
fn accepts_camel_case_keys_from_serialized_rooms() {
    let src = r#"{
        "name": "Camel",
        "peakMaxTempC": 40.0,
        "zones": [{
            "name": "Z",
            "classification": "Store",
            "systemType": "DX",
            "acphMin": 10,
            "acphMax": 20,
            "rooms": [{
                "name": "R",
                "length": 5.0, "width": 4.0, "height": 3.0,
                "peopleCount": 3, "equipmentLoad": 1.2,
                "freshAirRatio": 0.2, "exhaustRatio": 0.05,
                "tempRequired": 22.0, "rhRequired": 45.0
            }]
        }]
    }"#;
    let project = Project::from_json_str(src).unwrap();
    assert_eq!(project.peak_max_temp_c, Some(40.0));
    let zone = &project.zones[0];
    assert_eq!(zone.system_type, Some(SystemType::Dx));
    assert_eq!((zone.acph_min, zone.acph_max), (Some(10), Some(20)));
    let room = &zone.rooms[0];
    assert_eq!(room.people_count, Some(3));
    assert_eq!(room.equipment_load, Some(1.2));
    assert_eq!(room.fresh_air_ratio, Some(0.2));
    assert_eq!(room.exhaust_ratio, Some(0.05));
    assert_eq!(room.temp_required, Some(22.0));
    assert_eq!(room.rh_required, Some(45.0));
}
