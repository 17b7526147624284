//! # lmdi-core
//! Foundation types for additive LMDI-I emission decomposition.

pub mod constants;
pub mod error;
pub mod fuel;
pub mod result;
pub mod snapshot;

pub use fuel::{FuelSpec, FuelTable};
pub use result::{DecompositionResult, SeriesResult};
pub use snapshot::{PeriodSnapshot, RawRecord};
