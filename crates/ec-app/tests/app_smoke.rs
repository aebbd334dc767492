use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use ec_app::*;
use ec_indicators::Orientation;
use ec_project::MaterialCache;

const PROJECT_YAML: &str = r#"
version: 1
name: Edificio Los Aromos
enclosures:
  - id: 101
    nombre: Living
    superficie: 50
    demanda_calef: 10
    base_demanda_calef: 12
    co2_eq_total: 300
    base_co2eq_total: 400
    hrs_disconfort_total: 120
  - id: 102
    nombre: Dormitorio
    superficie: "100,0"
    demanda_calef: 20
    base_demanda_calef: 20
    co2_eq_total: null
facades:
  - id: f1
    name: Fachada norte
    azimuth: "0° ≤ Az < 22,5°"
  - id: f2
    name: Fachada poniente
    azimuth: "-67.5 <= Az < -45"
materials:
  - code: LAD-01
    name: Ladrillo
    conductivity_w_mk: 0.46
"#;

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    dir.push(format!("{}_{}", prefix, nanos));
    fs::create_dir_all(&dir).expect("failed to create temp dir");
    dir
}

fn write_project(prefix: &str) -> PathBuf {
    let path = unique_temp_dir(prefix).join("project.yaml");
    fs::write(&path, PROJECT_YAML).expect("failed to write project");
    path
}

#[test]
fn load_and_summarize() {
    let path = write_project("ec_app_summary");
    let project = load_project(&path).unwrap();
    validate_project(&project).unwrap();

    let summary = summarize_project(&project);
    assert_eq!(summary.name, "Edificio Los Aromos");
    assert_eq!(summary.enclosure_count, 2);
    assert_eq!(summary.total_area_m2, 150.0);
    assert_eq!(summary.facade_count, 2);
    assert_eq!(summary.incomplete_enclosures, 2);
}

#[test]
fn report_is_cached_on_second_request() {
    let path = write_project("ec_app_cache");
    let request = ReportRequest {
        project_path: &path,
        options: ReportOptions::default(),
    };

    let first = ensure_report(&request).unwrap();
    assert!(!first.loaded_from_cache);
    assert_eq!(first.indicators.heating.annual_total, 2500.0);
    assert_eq!(first.indicators.heating.percent_vs_baseline, "3.8%");
    assert_eq!(first.indicators.co2.total, 300.0);

    let second = ensure_report(&request).unwrap();
    assert!(second.loaded_from_cache);
    assert_eq!(second.report_id, first.report_id);

    let reports = list_reports(&path).unwrap();
    assert_eq!(reports.len(), 1);
}

#[test]
fn no_cache_recomputes() {
    let path = write_project("ec_app_nocache");
    let request = ReportRequest {
        project_path: &path,
        options: ReportOptions {
            use_cache: false,
            ..Default::default()
        },
    };
    ensure_report(&request).unwrap();
    let again = ensure_report(&request).unwrap();
    assert!(!again.loaded_from_cache);
}

#[test]
fn facades_are_classified() {
    let path = write_project("ec_app_facades");
    let project = load_project(&path).unwrap();
    let facades = classify_facades(&project).unwrap();
    assert_eq!(facades.len(), 2);
    assert_eq!(facades[0].orientation, Orientation::North);
    assert_eq!(facades[1].orientation, Orientation::NorthWest);
}

#[test]
fn materials_resolve_through_cache() {
    let path = write_project("ec_app_materials");
    let project = load_project(&path).unwrap();
    let mut cache = MaterialCache::new();
    let codes = vec!["LAD-01".to_string(), "LAD-01".to_string(), "XX".to_string()];

    let found = lookup_materials(&project, &mut cache, &codes).unwrap();
    assert!(found[0].1.is_some());
    assert!(found[2].1.is_none());
    assert_eq!(cache.hits(), 1);
    assert!(lookup_materials(&project, &mut cache, &[]).is_err());
}

#[test]
fn backend_array_becomes_project() {
    let dir = unique_temp_dir("ec_app_backend");
    let path = dir.join("resultados.json");
    fs::write(
        &path,
        r#"[{"id": 1, "superficie": 20, "demanda_calef": 5, "base_demanda_calef": 10}]"#,
    )
    .unwrap();

    let project = load_project(&path).unwrap();
    assert_eq!(project.name, "resultados");
    let rows = enclosure_rows(&project);
    assert_eq!(rows[0].heating_annual, 100.0);

    let csv = indicators_csv(&compute_indicators(&project).1).unwrap();
    assert!(csv.contains("Calefacción;5,00;100,00;200,00;50,00%"));
}

#[test]
fn unsupported_extension_rejected() {
    let dir = unique_temp_dir("ec_app_ext");
    let path = dir.join("project.txt");
    fs::write(&path, "hello").unwrap();
    let err = load_project(&path).unwrap_err();
    assert!(matches!(err, AppError::UnsupportedFile { .. }));
}

#[test]
fn empty_project_is_valid() {
    let dir = unique_temp_dir("ec_app_empty");
    let path = dir.join("project.yaml");
    fs::write(&path, "version: 1\nname: vacío\n").unwrap();
    let project = load_project(&path).unwrap();
    validate_project(&project).unwrap();
    assert_eq!(summarize_project(&project).enclosure_count, 0);
}

#[test]
fn empty_backend_payload_reports_zeros() {
    let dir = unique_temp_dir("ec_app_empty_backend");
    let path = dir.join("resultados.json");
    fs::write(&path, "[]").unwrap();

    let response = ensure_report(&ReportRequest {
        project_path: &path,
        options: ReportOptions::default(),
    })
    .unwrap();

    let set = &response.indicators;
    assert_eq!(set.enclosure_count, 0);
    assert_eq!(set.total_area, 0.0);
    for ind in [&set.heating, &set.cooling, &set.lighting, &set.combined] {
        assert_eq!(ind.per_area_annual, 0.0);
        assert_eq!(ind.annual_total, 0.0);
        assert_eq!(ind.percent_vs_baseline, "0%");
    }
    assert_eq!(set.co2.comparison_to_baseline, "0%");

    let csv = indicators_csv(set).unwrap();
    assert!(csv.contains("Total;0,00;0,00;0,00;0,00%"));
    assert_eq!(enclosures_csv(&[]).unwrap().lines().count(), 1);
}

#[test]
fn negative_backend_area_still_reports() {
    let dir = unique_temp_dir("ec_app_negative_area");
    let path = dir.join("resultados.json");
    fs::write(
        &path,
        r#"[{"id": 1, "superficie": -10, "demanda_calef": 5},
            {"id": 2, "superficie": 20, "demanda_calef": 5, "base_demanda_calef": 10}]"#,
    )
    .unwrap();

    let response = ensure_report(&ReportRequest {
        project_path: &path,
        options: ReportOptions::default(),
    })
    .unwrap();
    assert_eq!(response.indicators.total_area, 20.0);
    assert_eq!(response.indicators.heating.annual_total, 100.0);
    assert_eq!(response.indicators.heating.percent_vs_baseline, "50.0%");
}
