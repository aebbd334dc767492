//! Facade orientation from building-code azimuth ranges.
//!
//! Azimuth tables in the thermal regulation describe each facade sector as
//! a half-open interval, written either with Unicode glyphs
//! (`-67,5° ≤ Az < -45°`) or in plain ASCII (`-67.5 <= Az < -45`).
//! The interval midpoint decides which of the eight compass sectors the
//! facade belongs to.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use ec_core::normalize_degrees;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{ParseError, ParseResult};

const NUM: &str = r"(-?\d+(?:[.,]\d+)?)";

static UNICODE_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^\s*{NUM}\s*°\s*≤\s*Az\s*<\s*{NUM}\s*°\s*$"))
        .expect("unicode azimuth pattern is valid")
});

static ASCII_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^\s*{NUM}\s*<=\s*Az\s*<\s*{NUM}\s*$"))
        .expect("ascii azimuth pattern is valid")
});

/// One of the eight compass sectors, 45° wide, using Spanish codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    #[serde(rename = "N")]
    North,
    #[serde(rename = "NE")]
    NorthEast,
    #[serde(rename = "E")]
    East,
    #[serde(rename = "SE")]
    SouthEast,
    #[serde(rename = "S")]
    South,
    #[serde(rename = "SO")]
    SouthWest,
    #[serde(rename = "O")]
    West,
    #[serde(rename = "NO")]
    NorthWest,
}

impl Orientation {
    /// Clockwise from north; index `i` is centred on `i * 45°`.
    pub const ALL: [Orientation; 8] = [
        Orientation::North,
        Orientation::NorthEast,
        Orientation::East,
        Orientation::SouthEast,
        Orientation::South,
        Orientation::SouthWest,
        Orientation::West,
        Orientation::NorthWest,
    ];

    /// Short code as printed in reports (`N`, `NE`, ..., `NO`).
    pub fn code(self) -> &'static str {
        match self {
            Self::North => "N",
            Self::NorthEast => "NE",
            Self::East => "E",
            Self::SouthEast => "SE",
            Self::South => "S",
            Self::SouthWest => "SO",
            Self::West => "O",
            Self::NorthWest => "NO",
        }
    }

    /// Spanish display name.
    pub fn full_name(self) -> &'static str {
        match self {
            Self::North => "Norte",
            Self::NorthEast => "Noreste",
            Self::East => "Este",
            Self::SouthEast => "Sureste",
            Self::South => "Sur",
            Self::SouthWest => "Suroeste",
            Self::West => "Oeste",
            Self::NorthWest => "Noroeste",
        }
    }

    /// Sector containing a single bearing in degrees.
    ///
    /// Sector boundaries sit at 22.5° + k·45°; the lower boundary belongs to
    /// the sector. Non-finite bearings land in `North`.
    pub fn from_azimuth(deg: f64) -> Self {
        let m = normalize_degrees(deg);
        let idx = ((m + 22.5) / 45.0).floor();
        if !idx.is_finite() {
            return Self::North;
        }
        Self::ALL[(idx as usize) % Self::ALL.len()]
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Orientation {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|o| {
                o.code().eq_ignore_ascii_case(needle) || o.full_name().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| ParseError::OrientationCode {
                code: needle.to_string(),
            })
    }
}

/// Half-open interval `[min, max)` in degrees, as written (not normalized).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AzimuthRange {
    pub min: f64,
    pub max: f64,
}

impl AzimuthRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Midpoint bearing in `[0, 360)`, following the short way across 0°
    /// when the normalized interval wraps.
    pub fn midpoint(&self) -> f64 {
        let lo = normalize_degrees(self.min);
        let hi = normalize_degrees(self.max);
        if hi > lo {
            (lo + hi) / 2.0
        } else {
            normalize_degrees((lo + hi + 360.0) / 2.0)
        }
    }

    pub fn classify(&self) -> Orientation {
        Orientation::from_azimuth(self.midpoint())
    }
}

impl FromStr for AzimuthRange {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_azimuth_range(s)
    }
}

/// Parse `"<a>° ≤ Az < <b>°"` or `"<a> <= Az < <b>"`.
pub fn parse_azimuth_range(text: &str) -> ParseResult<AzimuthRange> {
    let caps = UNICODE_RANGE
        .captures(text)
        .or_else(|| ASCII_RANGE.captures(text))
        .ok_or_else(|| invalid(text))?;

    let min = parse_degrees(&caps[1]).ok_or_else(|| invalid(text))?;
    let max = parse_degrees(&caps[2]).ok_or_else(|| invalid(text))?;
    Ok(AzimuthRange { min, max })
}

/// Orientation of the sector `[min, max)`.
pub fn classify(min: f64, max: f64) -> Orientation {
    AzimuthRange::new(min, max).classify()
}

/// Parse then classify.
pub fn classify_range_text(text: &str) -> ParseResult<Orientation> {
    parse_azimuth_range(text).map(|r| r.classify())
}

fn parse_degrees(raw: &str) -> Option<f64> {
    raw.replace(',', ".").parse::<f64>().ok()
}

fn invalid(text: &str) -> ParseError {
    ParseError::AzimuthRange {
        text: text.to_string(),
    }
}
