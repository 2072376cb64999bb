use std::collections::BTreeMap;

use crate::circuits::{ComponentId, SwitchState};

/// Receives the settled LED results after every recompute.
pub trait PowerObserver: Send {
    fn report_led_power_state(&mut self, id: ComponentId, powered: bool);
}

impl<F> PowerObserver for F
where
    F: FnMut(ComponentId, bool) + Send,
{
    fn report_led_power_state(&mut self, id: ComponentId, powered: bool) {
        self(id, powered)
    }
}

/// Outcome of one recompute: a boolean per LED and the state of every switch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PowerReport {
    pub leds: BTreeMap<ComponentId, bool>,
    pub switches: BTreeMap<ComponentId, SwitchState>,
}

impl PowerReport {
    /// `None` if `id` is not an LED on the board.
    pub fn is_lit(&self, id: ComponentId) -> Option<bool> {
        self.leds.get(&id).copied()
    }

    pub fn lit_leds(&self) -> impl Iterator<Item = ComponentId> + '_ {
        self.leds.iter().filter(|(_, lit)| **lit).map(|(id, _)| *id)
    }

    pub fn dark_leds(&self) -> impl Iterator<Item = ComponentId> + '_ {
        self.leds.iter().filter(|(_, lit)| !**lit).map(|(id, _)| *id)
    }

    pub fn switch_state(&self, id: ComponentId) -> Option<SwitchState> {
        self.switches.get(&id).copied()
    }
}
