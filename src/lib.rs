//! Degrees of separation between people who share movie casts.
//!
//! `data_loading` builds a [`GraphIndex`] from CSV files, [`shortest_path`]
//! runs a breadth-first search over it and `cli` turns names into ids and
//! paths into text.

pub mod cli;
pub mod data_loading;
pub mod error;
pub mod frontier;
pub mod graph_index;
pub mod model;
pub mod search;

pub use error::{DegreesError, Result};
pub use graph_index::GraphIndex;
pub use model::{MovieId, PathStep, PersonId};
pub use search::{find_path, shortest_path};
