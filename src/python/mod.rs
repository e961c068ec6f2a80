//! Python bindings for the SET rules engine.
//!
//! Lets a Python front end drive a game while all rule logic stays here.
//!
//! # Quick Start
//!
//! ```python
//! import set_engine
//!
//! game = set_engine.SetGame(seed=42)
//!
//! # Highlight the first match
//! game.toggle_hint()
//! hinted = [i for i in range(len(game.board())) if game.is_hint_card(i)]
//!
//! # Claim it
//! game.claim_match(*hinted)
//! print(game.stats())
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_session;

pub use py_core::*;
pub use py_session::*;

/// set_engine: rules engine for the SET card game.
///
/// This module provides:
/// - Card values with atlas indexing for renderers
/// - A game session with dealing, hints, match removal and stats
#[pymodule]
fn set_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyCard>()?;
    m.add_class::<PySetGame>()?;
    m.add_class::<PyStats>()?;

    Ok(())
}
