//! ec-core: stable foundation for the energy compliance workspace.
//!
//! Contains:
//! - units (uom SI types + constructors for areas, energies and masses)
//! - numeric (Real + finiteness guards + lenient float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{EcError, EcResult};
pub use numeric::*;
pub use units::*;
