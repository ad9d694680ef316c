//! Python bindings for the Mastermind engine.
//!
//! # Quick Start
//!
//! ```python
//! import mastermind_engine as mm
//!
//! game = mm.Mastermind(seed=42)
//! game.start_game(duplicates=True, length=4, guesses=10, resources=[0, 1, 2, 3, 4, 5])
//!
//! game.insert_all([0, 0, 1, 1])
//! exacts, inexacts = game.submit()
//!
//! # Unsubmitted rounds report -1
//! assert game.exacts(1) == -1
//! ```

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::core::EngineError;

mod py_engine;

pub use py_engine::*;

impl From<EngineError> for PyErr {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::InvalidArgument(_) => PyValueError::new_err(err.to_string()),
            EngineError::InvalidState(_) => PyRuntimeError::new_err(err.to_string()),
        }
    }
}

/// mastermind_engine: a Mastermind rules engine over integer symbols.
#[pymodule]
fn mastermind_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyMastermind>()?;
    m.add_class::<PyScore>()?;

    Ok(())
}
