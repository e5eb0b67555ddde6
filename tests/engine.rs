use cleanroom_hvac::hvac::{calculate, RoomInput, Selection, SystemType, ZoneContext};

fn zone(classification: &str, acph_min: u32, acph_max: u32, system: SystemType) -> ZoneContext {
    ZoneContext::new(acph_min, acph_max, classification, system)
}

#[test]
fn iso5_chilled_water_reference_room() {
    let room = RoomInput::with_dimensions(10.0, 8.0, 3.0);
    let res = calculate(&room, &zone("ISO 5", 150, 240, SystemType::ChilledWater));

    assert_eq!(res.area, 80.0);
    assert_eq!(res.volume, 240.0);
    assert_eq!(res.acph, 195);
    assert_eq!(res.room_cfm, 27546.0);
    assert_eq!(res.fresh_air_cfm, 2755.0);
    assert_eq!(res.exhaust_cfm, 0.0);
    assert!((res.water_vapor_kg_hr - 0.01).abs() < 1e-9);
    assert_eq!(res.dehumidification_cfm, 2.0);
    assert_eq!(res.resultant_cfm, 30325.0);
    assert!((res.terminal_supply_sqft - 303.25).abs() < 1e-9);
    assert_eq!(res.cooling_load_tr, 6.0);
    assert_eq!(res.room_ac_load_tr, 2.0);
    assert_eq!(res.cfm_ac_load_tr, 76.0);
    assert_eq!(res.ahu_cooling_load_tr, 76.0);
    assert_eq!(res.ahu_cfm, 30500.0);
    assert_eq!(res.ahu_size, Selection::Sized("1000"));
    assert_eq!(res.blower_model, "BDB-1000");
    assert_eq!(res.static_pressure, 150.0);
    assert_eq!(res.motor_hp, Selection::Sized(50.0));
    assert_eq!(res.cooling_coil_rows, 4);
    assert_eq!(res.filter_stages, 4);
    assert_eq!(res.chilled_water_gpm, 304.0);
    assert!((res.chilled_water_lps - 19.18).abs() < 1e-9);
    assert_eq!(res.flow_velocity_ms, 2.0);
    assert_eq!(res.pipe_size_mm, 111.0);
}

#[test]
fn small_iso8_room_with_internal_loads() {
    let room = RoomInput {
        people_count: 2,
        equipment_load: 1.5,
        ..RoomInput::with_dimensions(4.0, 3.0, 2.7)
    };
    let res = calculate(&room, &zone("ISO 8", 20, 60, SystemType::ChilledWater));

    assert_eq!(res.acph, 40);
    assert_eq!(res.room_cfm, 763.0);
    assert_eq!(res.fresh_air_cfm, 77.0);
    assert_eq!(res.resultant_cfm, 850.0);
    assert!((res.terminal_supply_sqft - 3.4).abs() < 1e-9);
    assert_eq!(res.cooling_load_tr, 1.5);
    assert_eq!(res.room_ac_load_tr, 0.5);
    assert_eq!(res.cfm_ac_load_tr, 2.5);
    assert_eq!(res.ahu_cfm, 1000.0);
    assert_eq!(res.ahu_size, Selection::Sized("200"));
    assert_eq!(res.motor_hp, Selection::Sized(1.5));
    assert_eq!(res.chilled_water_gpm, 10.0);
    assert!((res.chilled_water_lps - 0.63).abs() < 1e-9);
    assert_eq!(res.pipe_size_mm, 21.0);
}

#[test]
fn decimal_dimensions_round_to_two_places() {
    let room = RoomInput::with_dimensions(10.5, 8.25, 3.2);
    let res = calculate(&room, &zone("ISO 6", 150, 240, SystemType::ChilledWater));
    assert!((res.area - 86.625).abs() < 0.01, "area={}", res.area);
    assert!((res.volume - 277.2).abs() < 0.01, "volume={}", res.volume);
}

#[test]
fn ventilation_suppresses_conditioning_outputs() {
    let room = RoomInput {
        people_count: 4,
        equipment_load: 3.0,
        ..RoomInput::with_dimensions(10.0, 8.0, 3.0)
    };
    let res = calculate(&room, &zone("ISO 7", 150, 240, SystemType::Ventilation));
    assert_eq!(res.water_vapor_kg_hr, 0.0);
    assert_eq!(res.dehumidification_cfm, 0.0);
    assert_eq!(res.room_ac_load_tr, 0.0);
    assert_eq!(res.cfm_ac_load_tr, 0.0);
    assert_eq!(res.chilled_water_gpm, 0.0);
    assert_eq!(res.chilled_water_lps, 0.0);
    assert_eq!(res.pipe_size_mm, 0.0);
    // 실 자체 부하는 그대로 산정된다
    assert!(res.cooling_load_tr > 0.0);
    assert_eq!(res.ahu_cooling_load_tr, res.cooling_load_tr);
}

#[test]
fn dx_uses_300_cfm_per_ton_and_no_chilled_water() {
    let room = RoomInput::with_dimensions(10.0, 8.0, 3.0);
    let res = calculate(&room, &zone("ISO 6", 150, 240, SystemType::Dx));
    assert_eq!(res.cfm_ac_load_tr, 101.5);
    assert_eq!(res.ahu_cooling_load_tr, 101.5);
    assert_eq!(res.chilled_water_gpm, 0.0);
    assert_eq!(res.pipe_size_mm, 0.0);
}

#[test]
fn identical_inputs_give_identical_results() {
    let room = RoomInput {
        people_count: 3,
        equipment_load: 2.25,
        fresh_air_ratio: 0.15,
        exhaust_ratio: 0.1,
        ..RoomInput::with_dimensions(7.3, 5.1, 2.9)
    };
    let z = zone("GRADE B", 120, 180, SystemType::ChilledWater);
    let a = calculate(&room, &z);
    let b = calculate(&room, &z);
    assert_eq!(a, b);
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}

#[test]
fn raising_acph_max_never_lowers_room_cfm() {
    let room = RoomInput::with_dimensions(6.0, 4.5, 3.0);
    let mut prev = 0.0;
    for acph_max in (20..=600).step_by(7) {
        let res = calculate(&room, &zone("ISO 7", 20, acph_max, SystemType::ChilledWater));
        assert!(
            res.room_cfm >= prev,
            "acph_max={acph_max}: {} < {prev}",
            res.room_cfm
        );
        prev = res.room_cfm;
    }
}

#[test]
fn rounding_laws_hold_across_room_sizes() {
    let systems = [SystemType::ChilledWater, SystemType::Dx, SystemType::Ventilation];
    for (i, system) in systems.iter().enumerate() {
        for step in 1..40 {
            let l = 1.0 + step as f64 * 0.73;
            let w = 1.5 + step as f64 * 0.41;
            let room = RoomInput {
                people_count: step,
                equipment_load: step as f64 * 0.3,
                ..RoomInput::with_dimensions(l, w, 2.5 + i as f64 * 0.4)
            };
            let res = calculate(&room, &zone("ISO 7", 60, 150, *system));
            assert_eq!(res.ahu_cfm % 250.0, 0.0);
            assert_eq!(res.resultant_cfm % 25.0, 0.0);
            assert_eq!((res.cooling_load_tr * 2.0).fract(), 0.0);
            assert_eq!((res.room_ac_load_tr * 2.0).fract(), 0.0);
            assert_eq!((res.cfm_ac_load_tr * 2.0).fract(), 0.0);
            assert!(res.ahu_cfm >= res.resultant_cfm);
        }
    }
}

#[test]
fn fresh_air_and_exhaust_follow_ratios() {
    let room = RoomInput {
        fresh_air_ratio: 0.15,
        exhaust_ratio: 0.1,
        ..RoomInput::with_dimensions(10.0, 8.0, 3.0)
    };
    let res = calculate(&room, &zone("ISO 6", 150, 240, SystemType::ChilledWater));
    assert_eq!(res.fresh_air_cfm, (res.room_cfm * 0.15).ceil());
    assert_eq!(res.exhaust_cfm, (res.room_cfm * 0.1).ceil());
}

#[test]
fn oversized_room_refers_equipment_selection() {
    let room = RoomInput::with_dimensions(100.0, 50.0, 5.0);
    let res = calculate(&room, &zone("ISO 8", 30, 60, SystemType::ChilledWater));
    assert_eq!(res.area, 5000.0);
    assert_eq!(res.volume, 25000.0);
    assert_eq!(res.ahu_size, Selection::Refer);
    assert_eq!(res.blower_model, "BDB-Refer");
    assert!(res.motor_hp.is_refer());
}

#[test]
fn degenerate_dimensions_propagate_without_panicking() {
    let room = RoomInput::with_dimensions(0.0, 8.0, 3.0);
    let res = calculate(&room, &zone("", 150, 240, SystemType::ChilledWater));
    assert_eq!(res.area, 0.0);
    assert_eq!(res.room_cfm, 0.0);
    assert_eq!(res.resultant_cfm, 0.0);
    assert_eq!(res.ahu_size, Selection::Sized("200"));
    assert_eq!(res.cooling_coil_rows, 3);
    assert_eq!(res.filter_stages, 3);

    let negative = RoomInput::with_dimensions(-2.0, 3.0, 3.0);
    let res = calculate(&negative, &zone("ISO 6", 150, 240, SystemType::ChilledWater));
    assert!(res.area < 0.0);
    assert!(res.room_cfm < 0.0);
}

#[test]
fn result_serializes_with_camel_case_and_refer_literal() {
    let room = RoomInput::with_dimensions(100.0, 50.0, 5.0);
    let res = calculate(&room, &zone("ISO 8", 30, 60, SystemType::ChilledWater));
    let json: serde_json::Value = serde_json::to_value(&res).unwrap();
    assert_eq!(json["ahuSize"], "Refer");
    assert_eq!(json["motorHp"], "Refer");
    assert_eq!(json["staticPressure"], 150.0);
    assert!(json.get("chilledWaterGpm").is_some());
    assert_eq!(json.as_object().unwrap().len(), 25);

    let small = calculate(
        &RoomInput::with_dimensions(3.0, 3.0, 2.5),
        &zone("ISO 8", 20, 60, SystemType::ChilledWater),
    );
    let json = serde_json::to_value(&small).unwrap();
    assert_eq!(json["ahuSize"], "200");
    assert!(json["motorHp"].is_number());
}

#[test]
fn nan_dimensions_propagate_to_refer_selection() {
    for system in [SystemType::Ventilation, SystemType::ChilledWater, SystemType::Dx] {
        let room = RoomInput::with_dimensions(f64::NAN, 8.0, 3.0);
        let res = calculate(&room, &zone("ISO 7", 150, 240, system));
        assert!(res.room_cfm.is_nan(), "{system}");
        assert!(res.resultant_cfm.is_nan(), "{system}");
        assert!(res.ahu_cfm.is_nan(), "{system}");
        assert_eq!(res.ahu_size, Selection::Refer);
        assert_eq!(res.blower_model, "BDB-Refer");
        assert_eq!(res.motor_hp, Selection::Refer);
        assert!(res.cooling_load_tr.is_nan());
        assert!(res.ahu_cooling_load_tr.is_nan(), "{system}");
    }

    // inf × 0 도 NaN 체적이 된다
    let room = RoomInput::with_dimensions(f64::INFINITY, 0.0, 3.0);
    let res = calculate(&room, &zone("ISO 7", 150, 240, SystemType::Ventilation));
    assert!(res.resultant_cfm.is_nan());
    assert_eq!(res.ahu_size, Selection::Refer);
}
