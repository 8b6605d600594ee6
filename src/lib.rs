//! Argonaut - A terminal explorer for ARGO ocean-profiling floats.
//!
//! Argonaut decodes ARGO multi-profile NetCDF files into a catalog of float
//! profiles. A synthetic Indian Ocean population is available immediately at
//! startup and is replaced in one step once decoding yields usable profiles.
//!
//! # Features
//!
//! - NetCDF profile decoding with fill-value filtering
//! - Synthetic float population placed on open ocean
//! - Catalog statistics with plausibility checks
//! - Depth-profile charts per float
//! - Vim-style keyboard navigation
//! - Gruvbox color themes
//! - Clipboard integration
//!
//! # Example
//!
//! ```ignore
//! use argonaut::catalog::{initial_catalog, summarize};
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let catalog = initial_catalog(50, &mut rng);
//! let summary = summarize(&catalog);
//! println!("{} of {} floats active", summary.active_count, summary.total_count);
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod catalog;
pub mod clipboard;
pub mod data;
pub mod error;
pub mod geo;
pub mod profile;
pub mod ui;

pub use error::{ArgonautError, Result};
