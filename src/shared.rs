use std::sync::Arc;

use parking_lot::Mutex;

use crate::{
    board::{Board, PowerReport},
    circuits::{Component, ComponentId, ComponentKind, SwitchState},
    error::Result,
    vector::Vec2isize,
};

/// A board shared between threads.
///
/// Each mutation and the recompute it triggers run under one lock, so no
/// reader ever sees a half rebuilt adjacency.
#[derive(Debug, Clone, Default)]
pub struct SharedBoard {
    inner: Arc<Mutex<Board>>,
}

impl SharedBoard {
    pub fn new(board: Board) -> Self {
        Self {
            inner: Arc::new(Mutex::new(board)),
        }
    }

    pub fn with<R>(&self, f: impl FnOnce(&mut Board) -> R) -> R {
        f(&mut self.inner.lock())
    }

    pub fn place(&self, kind: ComponentKind, pos: impl Into<Vec2isize>) -> Result<ComponentId> {
        self.inner.lock().place(kind, pos)
    }

    pub fn remove(&self, id: ComponentId) -> Result<Component> {
        self.inner.lock().remove(id)
    }

    pub fn toggle_switch(&self, id: ComponentId) -> Result<SwitchState> {
        self.inner.lock().toggle_switch(id)
    }

    pub fn report(&self) -> PowerReport {
        self.inner.lock().report().clone()
    }
}
