use ec_indicators::*;

fn heated_room(id: &str, area: f64, heat: f64, base_heat: f64) -> EnclosureResult {
    EnclosureResult {
        id: id.to_string(),
        surface_area: area,
        heating_demand: heat,
        base_heating_demand: base_heat,
        ..Default::default()
    }
}

#[test]
fn two_enclosure_heating_report() {
    let rooms = vec![
        heated_room("a", 50.0, 10.0, 12.0),
        heated_room("b", 100.0, 20.0, 20.0),
    ];

    let heating = aggregate_category(&rooms, |e| e.heating_demand, |e| e.base_heating_demand);

    assert_eq!(heating.annual_total, 2500.0);
    assert_eq!(heating.baseline_annual_total, 2600.0);
    assert_eq!(format!("{:.2}", heating.per_area_annual), "16.67");
    assert_eq!(heating.percent_vs_baseline, "3.8%");
}

#[test]
fn single_zero_area_enclosure() {
    let set = aggregate_building(&[heated_room("void", 0.0, 80.0, 90.0)]);
    assert_eq!(set.heating.per_area_annual, 0.0);
    assert_eq!(set.combined.per_area_annual, 0.0);
}

#[test]
fn baseline_zero_guard() {
    let set = aggregate_building(&[heated_room("a", 10.0, 5.0, 0.0)]);
    assert!(set.heating.annual_total > 0.0);
    assert_eq!(set.heating.percent_vs_baseline, "0%");
}

#[test]
fn ascii_range_end_to_end() {
    let range = parse_azimuth_range("45 <= Az < 67.5").unwrap();
    assert_eq!(range.min, 45.0);
    assert_eq!(range.max, 67.5);
    assert_eq!(classify(range.min, range.max), Orientation::NorthEast);
    assert_eq!(Orientation::NorthEast.full_name(), "Noreste");
}

#[test]
fn malformed_range_is_surfaced() {
    let err = classify_range_text("Az between 10 and 20").unwrap_err();
    assert!(err.to_string().contains("Az between 10 and 20"));
}

#[test]
fn indicator_set_serializes_for_reports() {
    let set = aggregate_building(&[heated_room("a", 50.0, 10.0, 12.0)]);
    let json = serde_json::to_string(&set).unwrap();
    let back: BuildingIndicatorSet = serde_json::from_str(&json).unwrap();
    assert_eq!(back.heating.annual_total, set.heating.annual_total);
    assert_eq!(back.heating.percent_vs_baseline, set.heating.percent_vs_baseline);
    assert_eq!(back.co2, set.co2);
}
