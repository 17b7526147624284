//! # lmdi-io — boundary collaborators for the LMDI pipeline.
//!
//! Everything with a file handle lives here: CSV dataset ingest, the
//! byte-stable result-table export, and the synthetic sample-data generator.
//! The decomposition engine itself never touches I/O.

pub mod dataset;
pub mod error;
pub mod export;
pub mod sample;

pub use dataset::{build_snapshots, load_records, read_records};
pub use error::DatasetError;
pub use export::{export_csv, write_results};
pub use sample::{generate_records, write_sample_csv};
