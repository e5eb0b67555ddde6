use cleanroom_hvac::hvac::SystemType;
use cleanroom_hvac::standards::{
    classifications, classifications_for, find_classification, find_standard, standards,
    zone_context,
};

#[test]
fn standard_names_are_sorted_and_complete() {
    let names = standards();
    assert_eq!(names.len(), 12);
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
    assert!(names.contains(&"ISO 14644-4"));
    assert!(names.contains(&"SCHEDULE M"));
}

#[test]
fn every_standard_has_classifications() {
    for name in standards() {
        assert!(!classifications_for(name).is_empty(), "{name} has no rows");
    }
    assert_eq!(classifications().len(), 70);
}

#[test]
fn classification_ranges_are_ordered() {
    for c in classifications() {
        assert!(
            c.acph_min <= c.acph_max,
            "{} / {}: {} > {}",
            c.standard,
            c.classification,
            c.acph_min,
            c.acph_max
        );
    }
}

#[test]
fn classifications_for_sorts_by_lower_bound() {
    let iso = classifications_for("iso 14644-4");
    assert_eq!(iso.len(), 9);
    assert_eq!(iso[0].classification, "ISO 9");
    assert!(iso.windows(2).all(|w| w[0].acph_min <= w[1].acph_min));
    assert!(classifications_for("NOPE").is_empty());
}

#[test]
fn lookup_is_case_insensitive() {
    assert_eq!(find_standard("fda 209e"), Some("FDA 209E"));
    assert_eq!(find_standard("unknown"), None);

    let c = find_classification("ISO 14644-4", "iso 6").unwrap();
    assert_eq!(c.classification, "ISO 6");
    assert_eq!((c.acph_min, c.acph_max), (150, 240));

    let grade = find_classification("schedule m", "grade class a").unwrap();
    assert_eq!((grade.acph_min, grade.acph_max), (80, 100));

    assert!(find_classification("ISO 14644-4", "ISO 10").is_none());
}

#[test]
fn zone_context_carries_dataset_values() {
    let ctx = zone_context("ISO 14644-4", "ISO 8", SystemType::Dx).unwrap();
    assert_eq!(ctx.acph_min, 20);
    assert_eq!(ctx.acph_max, 60);
    assert_eq!(ctx.classification, "ISO 8");
    assert_eq!(ctx.system_type, SystemType::Dx);

    assert!(zone_context("GMP", "Grade Z", SystemType::ChilledWater).is_none());
}
