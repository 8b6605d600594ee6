//! Dimension and variable access over profile files.
//!
//! The decoder only needs two things from the underlying format: declared
//! dimension sizes and named variables flattened to `f64`. Absence is reported
//! as `None`, never as an error.

use crate::error::{ArgonautError, Result};
use ndarray::{ArrayD, IxDyn};
use netcdf::types::{FloatType, IntType, NcVariableType};
#[cfg(test)]
use std::collections::BTreeMap;

/// A variable loaded into memory as `f64`.
#[derive(Debug, Clone)]
pub struct LoadedVariable {
    /// Variable name.
    pub name: String,
    /// Dimension names, outermost first.
    pub dim_names: Vec<String>,
    /// Data in row-major (C) order.
    pub data: ArrayD<f64>,
}

impl LoadedVariable {
    /// Build a variable from row-major values and a shape.
    pub fn from_shape_vec(
        name: impl Into<String>,
        dim_names: Vec<String>,
        shape: &[usize],
        values: Vec<f64>,
    ) -> Result<Self> {
        let name = name.into();
        let data = ArrayD::from_shape_vec(IxDyn(shape), values).map_err(|e| {
            ArgonautError::decode(format!("Invalid shape/data size for {}: {}", name, e))
        })?;
        Ok(Self {
            name,
            dim_names,
            data,
        })
    }

    /// Shape of the data.
    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    /// Total number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the variable holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Value at a flat row-major index, `None` when out of range.
    pub fn flat(&self, index: usize) -> Option<f64> {
        match self.data.as_slice() {
            Some(values) => values.get(index).copied(),
            None => self.data.iter().nth(index).copied(),
        }
    }
}

/// Read access to the dimensions and variables of one profile file.
pub trait ProfileDataset {
    /// Size of a named dimension, `None` if it is not declared.
    fn dimension_len(&self, name: &str) -> Option<usize>;

    /// Load a named variable, `Ok(None)` if it is not present.
    ///
    /// Errors mean the variable exists but cannot be read as numbers.
    fn variable(&self, name: &str) -> Result<Option<LoadedVariable>>;
}

/// [`ProfileDataset`] over an open NetCDF file.
#[derive(Debug)]
pub struct NetcdfDataset<'f> {
    file: &'f netcdf::File,
}

impl<'f> NetcdfDataset<'f> {
    /// Wrap an open NetCDF file.
    pub fn new(file: &'f netcdf::File) -> Self {
        Self { file }
    }
}

impl ProfileDataset for NetcdfDataset<'_> {
    fn dimension_len(&self, name: &str) -> Option<usize> {
        self.file.dimension(name).map(|d| d.len())
    }

    fn variable(&self, name: &str) -> Result<Option<LoadedVariable>> {
        let Some(var) = self.file.variable(name) else {
            return Ok(None);
        };

        let shape: Vec<usize> = var.dimensions().iter().map(|d| d.len()).collect();
        let dim_names: Vec<String> = var
            .dimensions()
            .iter()
            .map(|d| d.name().to_string())
            .collect();
        let values = read_values(&var)?;

        LoadedVariable::from_shape_vec(name, dim_names, &shape, values).map(Some)
    }
}

macro_rules! read_as_f64 {
    ($var:expr, $ty:ty) => {{
        let values: Vec<$ty> = $var.get_values(..).map_err(|e| {
            ArgonautError::NetCDF(format!(
                "Failed to read {} data from {}: {}",
                stringify!($ty),
                $var.name(),
                e
            ))
        })?;
        values.into_iter().map(|x| x as f64).collect()
    }};
}

fn read_values(var: &netcdf::Variable<'_>) -> Result<Vec<f64>> {
    let vartype = var.vartype();

    let values: Vec<f64> = match vartype {
        NcVariableType::Float(FloatType::F64) => read_as_f64!(var, f64),
        NcVariableType::Float(FloatType::F32) => read_as_f64!(var, f32),
        NcVariableType::Int(IntType::I64) => read_as_f64!(var, i64),
        NcVariableType::Int(IntType::I32) => read_as_f64!(var, i32),
        NcVariableType::Int(IntType::I16) => read_as_f64!(var, i16),
        NcVariableType::Int(IntType::I8) => read_as_f64!(var, i8),
        NcVariableType::Int(IntType::U64) => read_as_f64!(var, u64),
        NcVariableType::Int(IntType::U32) => read_as_f64!(var, u32),
        NcVariableType::Int(IntType::U16) => read_as_f64!(var, u16),
        NcVariableType::Int(IntType::U8) => read_as_f64!(var, u8),
        NcVariableType::Char | NcVariableType::String => {
            return Err(ArgonautError::decode(format!(
                "Variable {} holds character data, expected numbers",
                var.name()
            )));
        },
        _ => {
            return Err(ArgonautError::decode(format!(
                "Unsupported variable type for {}: {:?}",
                var.name(),
                vartype
            )));
        },
    };

    Ok(values)
}

/// In-memory [`ProfileDataset`] for decoder tests.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub(crate) struct MemoryDataset {
    dimensions: BTreeMap<String, usize>,
    variables: BTreeMap<String, std::result::Result<LoadedVariable, String>>,
}

#[cfg(test)]
impl MemoryDataset {
    /// Create an empty dataset.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Declare a dimension.
    pub(crate) fn with_dimension(mut self, name: &str, len: usize) -> Self {
        self.dimensions.insert(name.to_string(), len);
        self
    }

    /// Add a flat variable of any length.
    pub(crate) fn with_variable(mut self, name: &str, values: Vec<f64>) -> Self {
        let len = values.len();
        let var = LoadedVariable::from_shape_vec(name, Vec::new(), &[len], values)
            .map_err(|e| e.to_string());
        self.variables.insert(name.to_string(), var);
        self
    }

    /// Add a variable declared over named dimensions, values in row-major order.
    pub(crate) fn with_array(mut self, name: &str, dims: &[(&str, usize)], values: Vec<f64>) -> Self {
        let dim_names = dims.iter().map(|(d, _)| d.to_string()).collect();
        let shape: Vec<usize> = dims.iter().map(|(_, len)| *len).collect();
        let var = LoadedVariable::from_shape_vec(name, dim_names, &shape, values)
            .map_err(|e| e.to_string());
        self.variables.insert(name.to_string(), var);
        self
    }

    /// Add a variable that exists but fails to load.
    pub(crate) fn with_unreadable(mut self, name: &str, reason: &str) -> Self {
        self.variables
            .insert(name.to_string(), Err(reason.to_string()));
        self
    }
}

#[cfg(test)]
impl ProfileDataset for MemoryDataset {
    fn dimension_len(&self, name: &str) -> Option<usize> {
        self.dimensions.get(name).copied()
    }

    fn variable(&self, name: &str) -> Result<Option<LoadedVariable>> {
        match self.variables.get(name) {
            None => Ok(None),
            Some(Ok(var)) => Ok(Some(var.clone())),
            Some(Err(reason)) => Err(ArgonautError::decode(reason.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_index_is_row_major() {
        let var = LoadedVariable::from_shape_vec(
            "TEMP",
            vec!["N_PROF".into(), "N_LEVELS".into()],
            &[2, 3],
            vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
        )
        .unwrap();
        assert_eq!(var.shape(), &[2, 3]);
        assert_eq!(var.flat(0), Some(1.0));
        assert_eq!(var.flat(4), Some(5.0));
        assert_eq!(var.flat(6), None);
        assert_eq!(var.data[[1, 1]], 5.0);
    }

    #[test]
    fn shape_mismatch_is_a_decode_error() {
        let err = LoadedVariable::from_shape_vec("PRES", vec![], &[2, 2], vec![1.0])
            .unwrap_err();
        assert!(matches!(err, ArgonautError::Decode(_)));
    }

    #[test]
    fn memory_dataset_reports_absence() {
        let ds = MemoryDataset::new()
            .with_dimension("N_PROF", 2)
            .with_variable("JULD", vec![1.0, 2.0])
            .with_unreadable("PSAL", "type mismatch");
        assert_eq!(ds.dimension_len("N_PROF"), Some(2));
        assert_eq!(ds.dimension_len("N_LEVELS"), None);
        assert_eq!(ds.variable("JULD").unwrap().unwrap().len(), 2);
        assert!(ds.variable("TEMP").unwrap().is_none());
        assert!(ds.variable("PSAL").is_err());
    }
}
