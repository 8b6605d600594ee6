//! Profile file reading.
//!
//! This module decodes ARGO NetCDF profile files into [`ProfileRecord`]s,
//! handling fill values, multi-profile flattening and `JULD` dates.

pub mod calendar;
mod dataset;
pub mod decoder;
mod record;
pub mod sentinel;

pub use dataset::{LoadedVariable, NetcdfDataset, ProfileDataset};
pub use decoder::{decode_dataset, NetcdfDecoder, ProfileDecode};
pub use record::ProfileRecord;
