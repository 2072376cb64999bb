use serde::{Deserialize, Serialize};

use crate::circuits::SwitchState;

/// What happens when a component is placed onto a cell that is already taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Occupancy {
    /// Several components may share a cell. They never connect to each other.
    #[default]
    Shared,
    /// Placement onto an occupied cell fails with `Error::CellOccupied`.
    Exclusive,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub occupancy: Occupancy,
    pub default_switch_state: SwitchState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: BoardConfig = ron::from_str("(occupancy: Exclusive)").unwrap();
        assert_eq!(config.occupancy, Occupancy::Exclusive);
        assert_eq!(config.default_switch_state, SwitchState::Off);

        let config: BoardConfig = ron::from_str("()").unwrap();
        assert_eq!(config, BoardConfig::default());
    }
}
