//! Error types for board operations.

use thiserror::Error;

use crate::circuits::{ComponentId, ComponentKind};
use crate::vector::Vec2isize;

#[derive(Debug, Error)]
pub enum Error {
    #[error("component not found: {0}")]
    UnknownComponent(ComponentId),

    #[error("component {id} is a {kind}, not a switch")]
    NotASwitch { id: ComponentId, kind: ComponentKind },

    #[error("cell {pos} is already occupied by {occupant}")]
    CellOccupied { pos: Vec2isize, occupant: ComponentId },

    #[error("duplicate component: {0}")]
    DuplicateComponent(ComponentId),

    #[error("component {0} is not a switch but has a switch state")]
    SwitchStateMismatch(ComponentId),

    #[error("no component ids left")]
    IdsExhausted,

    #[error("layout parse error: {0}")]
    Layout(#[from] ron::error::SpannedError),

    #[error("layout serialize error: {0}")]
    LayoutWrite(#[from] ron::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
