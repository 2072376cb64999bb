use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ComponentKind {
    Battery,
    Led,
    Cable,
    Switch,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 4] = [Self::Battery, Self::Led, Self::Cable, Self::Switch];

    pub fn id(self) -> &'static str {
        match self {
            ComponentKind::Battery => "battery",
            ComponentKind::Led => "led",
            ComponentKind::Cable => "cable",
            ComponentKind::Switch => "switch",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ComponentKind::Battery => "Battery",
            ComponentKind::Led => "LED",
            ComponentKind::Cable => "Cable",
            ComponentKind::Switch => "Switch",
        }
    }

    /// Whether the component takes part in the adjacency graph at all.
    pub fn is_conductive(self) -> bool {
        match self {
            ComponentKind::Battery
            | ComponentKind::Led
            | ComponentKind::Cable
            | ComponentKind::Switch => true,
        }
    }

    pub fn is_source(self) -> bool {
        matches!(self, ComponentKind::Battery)
    }

    pub fn has_state(self) -> bool {
        matches!(self, ComponentKind::Switch)
    }
}

impl Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SwitchState {
    #[default]
    Off,
    On,
}

impl SwitchState {
    pub fn is_on(self) -> bool {
        matches!(self, SwitchState::On)
    }

    pub fn toggled(self) -> Self {
        match self {
            SwitchState::Off => SwitchState::On,
            SwitchState::On => SwitchState::Off,
        }
    }
}

impl Display for SwitchState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            SwitchState::Off => "off",
            SwitchState::On => "on",
        })
    }
}
