//! Core type bindings for Python.

use pyo3::exceptions::{PyIndexError, PyValueError};
use pyo3::prelude::*;

use crate::cards::Card;
use crate::core::EngineError;

impl From<EngineError> for PyErr {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::IndexOutOfBounds { .. } => PyIndexError::new_err(err.to_string()),
            _ => PyValueError::new_err(err.to_string()),
        }
    }
}

/// Python wrapper for Card.
#[pyclass(name = "Card")]
#[derive(Clone, Debug)]
pub struct PyCard(pub Card);

#[pymethods]
impl PyCard {
    /// Create a card. Every attribute must be 0, 1 or 2.
    #[new]
    fn new(shape: u8, color: u8, number: u8, shading: u8) -> PyResult<Self> {
        Ok(Self(Card::new(shape, color, number, shading)?))
    }

    /// Decode a texture atlas position (0-80).
    #[staticmethod]
    fn from_atlas_index(index: usize) -> PyResult<Self> {
        Ok(Self(Card::from_atlas_index(index)?))
    }

    #[getter]
    fn shape(&self) -> u8 {
        self.0.shape()
    }

    #[getter]
    fn color(&self) -> u8 {
        self.0.color()
    }

    #[getter]
    fn number(&self) -> u8 {
        self.0.number()
    }

    #[getter]
    fn shading(&self) -> u8 {
        self.0.shading()
    }

    /// Position of this card's face in the 9x9 texture atlas.
    fn atlas_index(&self) -> usize {
        self.0.atlas_index()
    }

    fn __repr__(&self) -> String {
        format!(
            "Card(shape={}, color={}, number={}, shading={})",
            self.0.shape(),
            self.0.color(),
            self.0.number(),
            self.0.shading()
        )
    }

    fn __str__(&self) -> String {
        self.0.to_string()
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        self.0.atlas_index() as u64
    }
}
