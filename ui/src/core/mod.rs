//! Pure data shaping shared by every chart: no I/O, no UI state.

pub mod format;
pub mod memo;
pub mod observation;
pub mod pivot;
pub mod scale;

pub use observation::{CategoryIndex, KeySet, Observation};
pub use pivot::PivotMatrix;
pub use scale::{ColorScale, DomainMode, Rgb, ScaleDomain, SizeScale};
