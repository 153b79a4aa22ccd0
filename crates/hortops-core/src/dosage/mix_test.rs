use super::*;

fn product(id: &str, name: &str, rate: Option<f64>, mix_rate: Option<&str>) -> ProductRate {
    ProductRate {
        id: id.to_string(),
        name: name.to_string(),
        default_rate_per_gallon: rate,
        mix_rate: mix_rate.map(ToString::to_string),
    }
}

#[test]
fn rejects_missing_tank_size() {
    let products = vec![product("a", "A", Some(1.0), None)];
    assert_eq!(
        calculate_mix(None, &products),
        Err(CalcError::InvalidTankSize)
    );
}

#[test]
fn rejects_non_positive_and_non_finite_tank_sizes() {
    let products = vec![product("a", "A", Some(1.0), None)];
    for tank in [0.0, -0.0, -5.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        assert_eq!(
            calculate_mix(Some(tank), &products),
            Err(CalcError::InvalidTankSize),
            "tank size {tank} should be rejected"
        );
    }
}

#[test]
fn tank_size_is_checked_before_product_list() {
    assert_eq!(calculate_mix(Some(0.0), &[]), Err(CalcError::InvalidTankSize));
}

#[test]
fn rejects_empty_product_list() {
    assert_eq!(
        calculate_mix(Some(10.0), &[]),
        Err(CalcError::NoChemicalSelected)
    );
}

#[test]
fn computes_quantities_for_a_stored_rate() {
    let result = calculate_mix(Some(10.0), &[product("a", "Fungicide A", Some(2.0), None)])
        .expect("valid mix");

    assert_eq!(result.tank_size, 10.0);
    assert_eq!(result.spray_volume, 1.0);
    assert_eq!(result.estimated_coverage_sq_ft, 10_000.0);
    assert_eq!(
        result.mix_items,
        vec![MixItem::Computed {
            id: "a".to_string(),
            name: "Fungicide A".to_string(),
            rate_per_gallon: 2.0,
            fl_oz: 20.0,
            ml: 20.0 * 29.57,
        }]
    );
    assert_eq!(result.mix_text, "Fungicide A: 20.00 fl oz (~591 mL) at 2 fl oz/gal");
}

#[test]
fn fl_oz_is_exact_product_of_rate_and_tank() {
    let rate = 0.75;
    let tank = 3.5;
    let result = calculate_mix(Some(tank), &[product("a", "A", Some(rate), None)]).unwrap();
    match &result.mix_items[0] {
        MixItem::Computed { fl_oz, ml, .. } => {
            assert_eq!(*fl_oz, rate * tank);
            assert_eq!(*ml, rate * tank * FL_OZ_TO_ML);
        }
        other @ MixItem::Fallback { .. } => panic!("expected computed item, got {other:?}"),
    }
    assert_eq!(result.estimated_coverage_sq_ft, tank * 1000.0);
}

#[test]
fn coverage_ignores_selected_products() {
    let one = calculate_mix(Some(4.0), &[product("a", "A", Some(1.0), None)]).unwrap();
    let many = calculate_mix(
        Some(4.0),
        &[
            product("a", "A", Some(1.0), None),
            product("b", "B", None, None),
            product("c", "C", Some(9.0), None),
        ],
    )
    .unwrap();
    assert_eq!(one.estimated_coverage_sq_ft, many.estimated_coverage_sq_ft);
}

#[test]
fn missing_rate_falls_back_to_label_text() {
    let result = calculate_mix(
        Some(5.0),
        &[product("a", "Insecticide", None, Some("1-2 oz per gallon"))],
    )
    .unwrap();
    assert_eq!(
        result.mix_items,
        vec![MixItem::Fallback {
            id: "a".to_string(),
            name: "Insecticide".to_string(),
            label_rate: "1-2 oz per gallon".to_string(),
        }]
    );
    assert!(!result.mix_items[0].has_stored_rate());
}

#[test]
fn unusable_rates_fall_back_to_default_label_text() {
    for rate in [None, Some(0.0), Some(-2.0), Some(f64::NAN), Some(f64::INFINITY)] {
        let result = calculate_mix(Some(5.0), &[product("a", "A", rate, Some(""))]).unwrap();
        match &result.mix_items[0] {
            MixItem::Fallback { label_rate, .. } => {
                assert_eq!(label_rate, DEFAULT_LABEL_RATE_TEXT);
            }
            other @ MixItem::Computed { .. } => {
                panic!("rate {rate:?} should fall back, got {other:?}")
            }
        }
    }
}

#[test]
fn overflowing_quantity_falls_back() {
    let result = calculate_mix(Some(1e300), &[product("a", "A", Some(1e300), None)]).unwrap();
    assert!(!result.mix_items[0].has_stored_rate());
}

#[test]
fn overflowing_coverage_is_an_invalid_tank_size() {
    let result = calculate_mix(Some(f64::MAX), &[product("a", "A", Some(1.0), None)]);
    assert_eq!(result, Err(CalcError::InvalidTankSize));
}

#[test]
fn mix_text_omits_fallback_items() {
    let result = calculate_mix(
        Some(2.0),
        &[
            product("a", "Alpha", Some(1.5), None),
            product("b", "Bravo", None, Some("See label")),
            product("c", "Charlie", Some(0.25), None),
        ],
    )
    .unwrap();
    assert_eq!(
        result.mix_text,
        "Alpha: 3.00 fl oz (~89 mL) at 1.5 fl oz/gal\nCharlie: 0.50 fl oz (~15 mL) at 0.25 fl oz/gal"
    );
    assert_eq!(result.mix_items.len(), 3);
}

#[test]
fn mix_text_is_empty_when_nothing_is_computed() {
    let result = calculate_mix(Some(2.0), &[product("a", "A", None, None)]).unwrap();
    assert!(result.mix_text.is_empty());
}

#[test]
fn preserves_input_order_without_dedup() {
    let products = vec![
        product("z", "Zeta", Some(1.0), None),
        product("a", "Alpha", None, None),
        product("z", "Zeta", Some(1.0), None),
    ];
    let result = calculate_mix(Some(1.0), &products).unwrap();
    let ids: Vec<&str> = result.mix_items.iter().map(MixItem::id).collect();
    assert_eq!(ids, vec!["z", "a", "z"]);
}

#[test]
fn repeated_calls_are_identical() {
    let products = vec![
        product("a", "A", Some(1.25), None),
        product("b", "B", None, Some("label")),
    ];
    let first = calculate_mix(Some(7.0), &products);
    let second = calculate_mix(Some(7.0), &products);
    assert_eq!(first, second);
}

#[test]
fn inputs_are_not_mutated() {
    let products = vec![product("a", "A", Some(-1.0), None)];
    let before = products.clone();
    let _ = calculate_mix(Some(3.0), &products);
    assert_eq!(products, before);
}

#[test]
fn custom_spray_volume_scales_coverage() {
    let settings = MixSettings::new(2.0).expect("valid settings");
    let result = settings
        .calculate_mix(Some(10.0), &[product("a", "A", Some(1.0), None)])
        .unwrap();
    assert_eq!(result.spray_volume, 2.0);
    assert_eq!(result.estimated_coverage_sq_ft, 5_000.0);
}

#[test]
fn settings_reject_invalid_spray_volume() {
    for volume in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let err = MixSettings::new(volume).unwrap_err();
        assert!(
            matches!(err, ConfigError::InvalidSprayVolume(_)),
            "expected InvalidSprayVolume, got: {err:?}"
        );
        assert!(err.to_string().starts_with("spray volume must be"), "{err}");
    }
}

#[test]
fn default_settings_use_one_gallon_per_thousand() {
    assert_eq!(MixSettings::default().spray_volume(), 1.0);
}

#[test]
fn serializes_items_with_has_stored_rate_flag() {
    let result = calculate_mix(
        Some(1.0),
        &[
            product("a", "A", Some(2.0), None),
            product("b", "B", None, None),
        ],
    )
    .unwrap();
    let json = serde_json::to_value(&result).expect("serialize");

    assert_eq!(json["tankSize"], 1.0);
    assert_eq!(json["sprayVolume"], 1.0);
    assert_eq!(json["estimatedCoverageSqFt"], 1000.0);
    assert_eq!(json["mixItems"][0]["hasStoredRate"], true);
    assert_eq!(json["mixItems"][0]["flOz"], 2.0);
    assert_eq!(json["mixItems"][0]["ratePerGallon"], 2.0);
    assert_eq!(json["mixItems"][1]["hasStoredRate"], false);
    assert_eq!(json["mixItems"][1]["labelRate"], DEFAULT_LABEL_RATE_TEXT);
    assert!(json["mixItems"][1].get("flOz").is_none());
}
