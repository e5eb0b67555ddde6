use cleanroom_hvac::hvac::{calculate, RoomInput, SystemType, ZoneContext};
use cleanroom_hvac::i18n::{keys, resolve_language, Language, Translator};
use cleanroom_hvac::project::Project;
use cleanroom_hvac::report::{render_classifications, render_project, render_room, ReportFormat};
use cleanroom_hvac::standards;

fn sample() -> (RoomInput, ZoneContext) {
    (
        RoomInput::with_dimensions(100.0, 50.0, 5.0),
        ZoneContext::new(30, 60, "ISO 8", SystemType::ChilledWater),
    )
}

#[test]
fn translator_falls_back_to_english() {
    let ko = Translator::new("ko_KR");
    assert_eq!(ko.language(), Language::Ko);
    assert_eq!(ko.t(keys::REPORT_PROJECT), "프로젝트");

    let fr = Translator::new("fr");
    assert_eq!(fr.language(), Language::En);
    assert_eq!(fr.t(keys::REPORT_PROJECT), "Project");
    assert_eq!(fr.t("no.such.key"), "[missing translation]");
}

#[test]
fn cli_language_wins_over_config() {
    assert_eq!(resolve_language(Some("ko"), Some("en")), "ko");
    assert_eq!(resolve_language(Some("auto"), Some("en")), "en");
    assert_eq!(resolve_language(None, Some("ko-KR")), "ko");
}

#[test]
fn text_report_shows_refer_literals() {
    let (room, zone) = sample();
    let result = calculate(&room, &zone);
    let tr = Translator::new("en");
    let out = render_room(&tr, &room, &zone, &result, ReportFormat::Text).unwrap();
    assert!(out.contains("ISO 8"));
    assert!(out.contains("BDB-Refer"));
    assert!(out.contains("Refer"));
    assert!(out.contains(tr.t(keys::FIELD_PIPE_SIZE)));
}

#[test]
fn json_report_bundles_room_zone_and_result() {
    let (room, zone) = sample();
    let result = calculate(&room, &zone);
    let tr = Translator::new("en");
    let out = render_room(&tr, &room, &zone, &result, ReportFormat::Json).unwrap();
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v["zone"]["systemType"], "Chilled Water");
    assert_eq!(v["room"]["length"], 100.0);
    assert_eq!(v["result"]["ahuSize"], "Refer");
}

#[test]
fn project_report_renders_in_every_format() {
    let src = r#"
name = "Demo"
location = "Lab"

[[zones]]
name = "Z1"
standard = "ISO 14644-4"
classification = "ISO 7"

[[zones.rooms]]
name = "R1"
length = 5.0
width = 4.0
height = 3.0
"#;
    let report = Project::from_toml_str(src).unwrap().evaluate().unwrap();
    let tr = Translator::new("ko");

    let text = render_project(&tr, &report, ReportFormat::Text).unwrap();
    assert!(text.contains("Demo"));
    assert!(text.contains("존 합계"));

    let json = render_project(&tr, &report, ReportFormat::Json).unwrap();
    let v: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(v["zones"][0]["rooms"][0]["name"], "R1");

    let toml_out = render_project(&tr, &report, ReportFormat::Toml).unwrap();
    let parsed: toml::Value = toml::from_str(&toml_out).unwrap();
    assert_eq!(parsed["name"].as_str(), Some("Demo"));
}

#[test]
fn classification_listing() {
    let list = standards::classifications_for("SCHEDULE M");
    let tr = Translator::new("en");
    let text = render_classifications(&tr, &list, ReportFormat::Text).unwrap();
    assert!(text.contains("GRADE CLASS D"));
    assert_eq!(text.lines().count(), 1 + list.len());

    let json = render_classifications(&tr, &list, ReportFormat::Json).unwrap();
    let v: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(v.as_array().map(Vec::len), Some(4));
    assert_eq!(v[0]["acphMin"], 20);
}
