//! **pathway-core** — the grid model behind the pathway visualizer.
//!
//! This crate provides geometry primitives, the [`Cell`] model, an owned
//! [`Grid`] arena, and the editable [`Board`] (grid plus start and end
//! cells) that front-ends mutate and pathfinding runs read.

pub mod board;
pub mod cell;
pub mod config;
pub mod error;
pub mod geom;
pub mod grid;
mod layout;

pub use board::Board;
pub use cell::{Cell, CellKind, DEFAULT_WEIGHT};
pub use config::{BoardConfig, DEFAULT_WEIGHTED_COST};
pub use error::BoardError;
pub use geom::{Point, Range};
pub use grid::Grid;
