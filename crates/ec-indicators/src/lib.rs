//! ec-indicators: derived energy indicators for a building.
//!
//! Takes enclosure-level calculation results and produces per-category and
//! whole-building totals, per-m² normalizations and percentage comparisons
//! against the regulatory base case. Also classifies facade azimuth ranges
//! into compass orientations.
//!
//! Everything here is a pure function over in-memory values.

pub mod building;
pub mod category;
pub mod enclosure;
pub mod error;
pub mod orientation;

pub use building::{BuildingIndicatorSet, Co2Summary, aggregate_building};
pub use category::{Category, CategoryIndicator, aggregate_category, percent_vs_baseline};
pub use enclosure::{EnclosureBreakdown, EnclosureResult, enclosure_breakdown};
pub use error::{ParseError, ParseResult};
pub use orientation::{AzimuthRange, Orientation, classify, classify_range_text, parse_azimuth_range};
