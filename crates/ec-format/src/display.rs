//! Table cell formatters.

use crate::locale::{format_es_cl, parse_locale_number};
use crate::value::CellValue;

const NO_VALUE: &str = "-";
const DECIMALS: usize = 2;

fn is_no_value(text: &str) -> bool {
    let t = text.trim();
    t.is_empty() || t == NO_VALUE
}

/// Two-decimal es-CL rendering of a cell.
///
/// `Missing`, `""` and `"-"` render as `-`. Text that does not parse as a
/// number is returned unchanged.
pub fn format_number(value: impl Into<CellValue>) -> String {
    match value.into() {
        CellValue::Missing => NO_VALUE.to_string(),
        CellValue::Number(n) => format_es_cl(n, DECIMALS),
        CellValue::Text(s) if is_no_value(&s) => NO_VALUE.to_string(),
        CellValue::Text(s) => match parse_locale_number(&s) {
            Some(n) => format_es_cl(n, DECIMALS),
            None => s,
        },
        CellValue::Other(s) => s,
    }
}

/// Two-decimal percentage. Numbers are expected already multiplied by 100.
///
/// Text such as `"3.8%"` is re-parsed from its numeric portion.
pub fn format_percent(value: impl Into<CellValue>) -> String {
    match value.into() {
        CellValue::Missing => NO_VALUE.to_string(),
        CellValue::Number(n) => format!("{}%", format_es_cl(n, DECIMALS)),
        CellValue::Text(s) if is_no_value(&s) => NO_VALUE.to_string(),
        CellValue::Text(s) => {
            let numeric = s.replace('%', "");
            match parse_locale_number(&numeric) {
                Some(n) => format!("{}%", format_es_cl(n, DECIMALS)),
                None => s,
            }
        }
        CellValue::Other(s) => s,
    }
}
