//! Connectivity and power propagation for a grid of toy circuit components.
//!
//! Batteries, LEDs, cables and switches are placed on integer grid cells.
//! Components in orthogonally neighboring cells are connected, and an LED is
//! lit when a path of connected components reaches a battery without passing
//! through a switch that is off.

pub mod board;
pub mod circuits;
pub mod config;
pub mod error;
pub mod io;
pub mod shared;
pub mod vector;

pub use board::{Adjacency, Board, PowerObserver, PowerReport};
pub use circuits::{Component, ComponentId, ComponentKind, SwitchState};
pub use config::{BoardConfig, Occupancy};
pub use error::{Error, Result};
pub use io::{Layout, Placement};
pub use shared::SharedBoard;
pub use vector::{Direction, Vec2isize};
