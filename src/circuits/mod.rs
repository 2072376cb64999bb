use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::vector::Vec2isize;

mod kind;

pub use kind::{ComponentKind, SwitchState};

/// Stable identity of a placed component. Never reused within one board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ComponentId(pub(crate) u32);

impl ComponentId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn as_u32(self) -> u32 {
        self.0
    }
}

impl Display for ComponentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    id: ComponentId,
    kind: ComponentKind,
    pos: Vec2isize,
    // Some iff kind is Switch
    state: Option<SwitchState>,
}

impl Component {
    /// Creates a component, switches start in `SwitchState::Off`.
    pub fn new(id: ComponentId, kind: ComponentKind, pos: impl Into<Vec2isize>) -> Self {
        let state = kind.has_state().then(SwitchState::default);
        Self {
            id,
            kind,
            pos: pos.into(),
            state,
        }
    }

    pub fn switch(id: ComponentId, pos: impl Into<Vec2isize>, state: SwitchState) -> Self {
        Self {
            id,
            kind: ComponentKind::Switch,
            pos: pos.into(),
            state: Some(state),
        }
    }

    pub fn id(&self) -> ComponentId {
        self.id
    }

    pub fn kind(&self) -> ComponentKind {
        self.kind
    }

    pub fn pos(&self) -> Vec2isize {
        self.pos
    }

    pub fn state(&self) -> Option<SwitchState> {
        self.state
    }

    pub fn is_led(&self) -> bool {
        self.kind == ComponentKind::Led
    }

    /// An off switch can be reached but does not pass the traversal on.
    pub fn blocks_propagation(&self) -> bool {
        self.state == Some(SwitchState::Off)
    }

    /// Returns `None` for anything that isn't a switch.
    pub(crate) fn set_state(&mut self, state: SwitchState) -> Option<SwitchState> {
        let current = self.state.as_mut()?;
        *current = state;
        Some(state)
    }
}
