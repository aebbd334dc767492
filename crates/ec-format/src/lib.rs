//! ec-format: display strings for report tables and exports.
//!
//! Numbers are rendered in the es-CL convention (period for thousands,
//! comma for decimals, two fraction digits). The formatters never fail:
//! "no value" inputs render as `-` and text that does not parse is passed
//! through unchanged.

pub mod display;
pub mod locale;
pub mod value;

pub use display::{format_number, format_percent};
pub use locale::{format_es_cl, parse_locale_number};
pub use value::CellValue;
