//! ARGO multi-profile decoder.
//!
//! Profile files store each level variable as `[N_PROF][N_LEVELS]` in row-major
//! order, so level `j` of profile `i` sits at flat index `i * N_LEVELS + j`.

use super::calendar::to_calendar_at;
use super::dataset::{LoadedVariable, NetcdfDataset, ProfileDataset};
use super::record::ProfileRecord;
use super::sentinel::valid_reading;
use crate::error::{ArgonautError, Result};
use chrono::{DateTime, Utc};
use std::io::Write;

/// Profile-count dimension.
pub const DIM_PROFILES: &str = "N_PROF";
/// Levels-per-profile dimension.
pub const DIM_LEVELS: &str = "N_LEVELS";

/// Used when `N_PROF` is not declared.
pub const DEFAULT_PROFILES: usize = 1;
/// Used when `N_LEVELS` is not declared.
pub const DEFAULT_LEVELS: usize = 1000;

/// Salinity substituted for missing readings (PSU).
pub const FALLBACK_SALINITY: f64 = 35.0;
/// Pressure substituted for missing readings is `level * FALLBACK_PRESSURE_STEP`.
pub const FALLBACK_PRESSURE_STEP: f64 = 2.0;

const VAR_LATITUDE: &str = "LATITUDE";
const VAR_LONGITUDE: &str = "LONGITUDE";
const VAR_JULD: &str = "JULD";
const VAR_TEMP: &str = "TEMP";
const VAR_PSAL: &str = "PSAL";
const VAR_PRES: &str = "PRES";

/// Turns a raw source buffer into profile records.
///
/// Implementations never fail: a buffer that cannot be decoded yields an empty
/// list.
pub trait ProfileDecode {
    /// Decode all usable profiles of one float.
    fn decode(&self, buffer: &[u8], float_id: &str) -> Vec<ProfileRecord>;
}

/// Decoder for ARGO `*_prof.nc` files.
#[derive(Debug, Default, Clone, Copy)]
pub struct NetcdfDecoder;

impl NetcdfDecoder {
    /// Decode a NetCDF buffer, reporting why it failed.
    ///
    /// The buffer is staged in a temporary file, which is removed on return.
    pub fn try_decode(buffer: &[u8], float_id: &str) -> Result<Vec<ProfileRecord>> {
        let mut staged = tempfile::Builder::new()
            .prefix(float_id)
            .suffix(".nc")
            .tempfile()?;
        staged.write_all(buffer)?;
        staged.flush()?;
        let path = staged.into_temp_path();

        // Declared after `path` so the handle closes before the file is removed.
        let file = netcdf::open(&path)
            .map_err(|e| ArgonautError::FormatUnavailable(e.to_string()))?;
        decode_dataset(&NetcdfDataset::new(&file), float_id, Utc::now())
    }
}

impl ProfileDecode for NetcdfDecoder {
    fn decode(&self, buffer: &[u8], float_id: &str) -> Vec<ProfileRecord> {
        match Self::try_decode(buffer, float_id) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(float_id, error = %e, "could not decode profile file");
                Vec::new()
            },
        }
    }
}

/// Decode every usable profile in a dataset.
///
/// `now` stands in for profiles without a usable date. Profiles with no
/// valid temperature level are dropped.
pub fn decode_dataset<D: ProfileDataset>(
    dataset: &D,
    float_id: &str,
    now: DateTime<Utc>,
) -> Result<Vec<ProfileRecord>> {
    let n_prof = dataset
        .dimension_len(DIM_PROFILES)
        .unwrap_or(DEFAULT_PROFILES);
    let n_levels = dataset.dimension_len(DIM_LEVELS).unwrap_or(DEFAULT_LEVELS);

    let latitude = dataset.variable(VAR_LATITUDE)?;
    let longitude = dataset.variable(VAR_LONGITUDE)?;
    let juld = dataset.variable(VAR_JULD)?;
    let temp = dataset.variable(VAR_TEMP)?;
    let psal = dataset.variable(VAR_PSAL)?;
    let pres = dataset.variable(VAR_PRES)?;
    for var in [&temp, &psal, &pres].into_iter().flatten() {
        check_level_layout(var)?;
    }

    tracing::debug!(
        float_id,
        n_prof,
        n_levels,
        has_temp = temp.is_some(),
        has_psal = psal.is_some(),
        has_pres = pres.is_some(),
        "decoding profiles"
    );

    let temp_len = temp.as_ref().map_or(0, LoadedVariable::len);
    let mut records = Vec::new();

    for i in 0..n_prof {
        let mut record = ProfileRecord::new(
            valid_reading(flat(&latitude, i)),
            valid_reading(flat(&longitude, i)),
            juld.as_ref()
                .map_or(now, |var| to_calendar_at(var.flat(i), now)),
        );

        let offset = i.checked_mul(n_levels).ok_or_else(|| {
            ArgonautError::decode(format!(
                "{} x {} levels overflows the index space",
                n_prof, n_levels
            ))
        })?;
        // Levels past the end of TEMP can never be accepted.
        let levels = n_levels.min(temp_len.saturating_sub(offset));

        for j in 0..levels {
            let idx = offset + j;
            let Some(temperature) = valid_reading(flat(&temp, idx)) else {
                continue;
            };
            let salinity = valid_reading(flat(&psal, idx)).unwrap_or(FALLBACK_SALINITY);
            let pressure =
                valid_reading(flat(&pres, idx)).unwrap_or(j as f64 * FALLBACK_PRESSURE_STEP);
            record.push_level(temperature, salinity, pressure);
        }

        if !record.is_empty() {
            records.push(record);
        }
    }

    tracing::debug!(float_id, profiles = records.len(), "decoded profiles");
    Ok(records)
}

/// Level variables must be `[N_PROF, N_LEVELS]` or 1-D for the flat index to hold.
fn check_level_layout(var: &LoadedVariable) -> Result<()> {
    match var.dim_names.as_slice() {
        [] | [_] => Ok(()),
        [outer, inner] if outer == DIM_PROFILES && inner == DIM_LEVELS => Ok(()),
        dims => Err(ArgonautError::decode(format!(
            "{} is laid out as [{}], expected [{}, {}]",
            var.name,
            dims.join(", "),
            DIM_PROFILES,
            DIM_LEVELS
        ))),
    }
}

fn flat(var: &Option<LoadedVariable>, index: usize) -> Option<f64> {
    var.as_ref().and_then(|v| v.flat(index))
}
