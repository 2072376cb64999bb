//! RON description of a single board, used by the command line tool and test fixtures.
//!
//! ```ron
//! (
//!     config: (occupancy: Shared),
//!     components: [
//!         (kind: Battery, pos: (x: 0, y: 0)),
//!         (kind: Switch, pos: (x: 1, y: 0), state: Some(On)),
//!         (kind: Led, pos: (x: 2, y: 0)),
//!     ],
//! )
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    board::Board,
    circuits::{Component, ComponentId, ComponentKind, SwitchState},
    config::BoardConfig,
    error::{Error, Result},
    vector::Vec2isize,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    #[serde(default)]
    pub config: BoardConfig,
    #[serde(default)]
    pub components: Vec<Placement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub kind: ComponentKind,
    pub pos: Vec2isize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<SwitchState>,
}

impl Layout {
    pub fn from_ron_str(text: &str) -> Result<Self> {
        Ok(ron::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_ron_str(&text)
    }

    pub fn to_ron_string(&self) -> Result<String> {
        Ok(ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())?)
    }

    /// Snapshot of a board. Ids are not kept, components are listed in id order.
    pub fn from_board(board: &Board) -> Self {
        Self {
            config: board.config().clone(),
            components: board
                .components()
                .map(|c| Placement {
                    kind: c.kind(),
                    pos: c.pos(),
                    state: c.state(),
                })
                .collect(),
        }
    }

    /// Builds a board, the n-th placement gets id n.
    ///
    /// A missing switch state falls back to the configured default, a state on
    /// anything else is a `SwitchStateMismatch`.
    pub fn build_board(&self) -> Result<Board> {
        let components = self
            .components
            .iter()
            .enumerate()
            .map(|(i, placement)| {
                let id = ComponentId(u32::try_from(i).map_err(|_| Error::IdsExhausted)?);
                match (placement.kind, placement.state) {
                    (ComponentKind::Switch, state) => Ok(Component::switch(
                        id,
                        placement.pos,
                        state.unwrap_or(self.config.default_switch_state),
                    )),
                    (kind, None) => Ok(Component::new(id, kind, placement.pos)),
                    (_, Some(_)) => Err(Error::SwitchStateMismatch(id)),
                }
            })
            .collect::<Result<Vec<_>>>()?;

        let mut board = Board::new(self.config.clone());
        board.notify_components_changed(components)?;
        Ok(board)
    }
}
