//! CSV export of report tables.
//!
//! Cells use the es-CL number format, so columns are separated by `;`.
//! Text cells (enclosure ids from the backend) are quoted when they contain
//! the separator, quotes or line breaks.

use csv::{Writer, WriterBuilder};
use ec_format::{format_number, format_percent};
use ec_indicators::{BuildingIndicatorSet, Category, CategoryIndicator, EnclosureBreakdown};

use crate::error::{AppError, AppResult};

const SEP: u8 = b';';

fn writer() -> Writer<Vec<u8>> {
    WriterBuilder::new().delimiter(SEP).from_writer(Vec::new())
}

fn finish(writer: Writer<Vec<u8>>) -> AppResult<String> {
    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::Io(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| AppError::InvalidInput(e.to_string()))
}

fn category_row(label: &str, ind: &CategoryIndicator) -> [String; 5] {
    [
        label.to_string(),
        format_number(ind.per_area_annual),
        format_number(ind.annual_total),
        format_number(ind.baseline_annual_total),
        format_percent(ind.percent_vs_baseline.as_str()),
    ]
}

/// Building indicator table.
pub fn indicators_csv(set: &BuildingIndicatorSet) -> AppResult<String> {
    let mut wtr = writer();
    wtr.write_record([
        "indicador",
        "kWh/m2 año",
        "kWh año",
        "kWh año caso base",
        "vs caso base",
    ])?;

    for category in Category::ALL {
        wtr.write_record(category_row(category.label(), set.category(category)))?;
    }
    wtr.write_record(category_row("Total", &set.combined))?;

    wtr.write_record([
        "CO2 eq (kg/año)".to_string(),
        "-".to_string(),
        format_number(set.co2.total),
        format_number(set.co2.baseline_total),
        format_percent(set.co2.comparison_to_baseline.as_str()),
    ])?;
    wtr.write_record([
        "Horas disconfort".to_string(),
        "-".to_string(),
        format_number(set.disconfort_hours_total),
        "-".to_string(),
        "-".to_string(),
    ])?;

    finish(wtr)
}

/// Per-enclosure breakdown table.
pub fn enclosures_csv(rows: &[EnclosureBreakdown]) -> AppResult<String> {
    let mut wtr = writer();
    wtr.write_record([
        "recinto",
        "superficie m2",
        "calefacción kWh",
        "refrigeración kWh",
        "iluminación kWh",
        "total kWh",
        "horas disconfort",
        "CO2 eq kg",
    ])?;

    for row in rows {
        wtr.write_record([
            row.id.clone(),
            format_number(row.surface_area),
            format_number(row.heating_annual),
            format_number(row.cooling_annual),
            format_number(row.lighting_annual),
            format_number(row.total_annual()),
            format_number(row.disconfort_hours),
            format_number(row.co2_equivalent),
        ])?;
    }

    finish(wtr)
}
