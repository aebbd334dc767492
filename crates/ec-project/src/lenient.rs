//! Forgiving deserializers for backend payloads.
//!
//! The calculation backend is loose about types: numbers sometimes arrive
//! as strings with a comma decimal, ids as integers, and unknown shapes as
//! anything at all. These helpers accept all of that without failing the
//! whole document; a value that cannot be read becomes `None`.

use ec_format::parse_locale_number;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum LooseNumber {
    Num(f64),
    Text(String),
    #[allow(dead_code)]
    Other(IgnoredAny),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LooseId {
    Int(i64),
    Float(f64),
    Text(String),
    #[allow(dead_code)]
    Other(IgnoredAny),
}

/// Number, numeric string, null, or anything else (read as `None`).
pub fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<LooseNumber>::deserialize(deserializer)?;
    Ok(match raw {
        Some(LooseNumber::Num(n)) => Some(n).filter(|v| v.is_finite()),
        Some(LooseNumber::Text(s)) => parse_locale_number(&s),
        Some(LooseNumber::Other(_)) | None => None,
    })
}

/// Integer or string identifier; anything else becomes an empty id.
pub fn id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<LooseId>::deserialize(deserializer)?;
    Ok(match raw {
        Some(LooseId::Int(i)) => i.to_string(),
        Some(LooseId::Float(f)) => f.to_string(),
        Some(LooseId::Text(s)) => s,
        Some(LooseId::Other(_)) | None => String::new(),
    })
}
