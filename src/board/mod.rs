use std::collections::{BTreeMap, BTreeSet, HashMap};

use log::{debug, info, warn};

use crate::{
    circuits::{Component, ComponentId, ComponentKind, SwitchState},
    config::{BoardConfig, Occupancy},
    error::{Error, Result},
    vector::Vec2isize,
};

pub mod adjacency;
pub mod power;
mod report;

pub use adjacency::{build_adjacency, Adjacency};
pub use report::{PowerObserver, PowerReport};

pub type ComponentMap = BTreeMap<ComponentId, Component>;

/// The set of placed components and everything derived from it.
///
/// Every mutation rebuilds the adjacency from scratch, evaluates every LED and
/// reports the results to the registered observers before returning.
pub struct Board {
    config: BoardConfig,
    components: ComponentMap,
    adjacency: Adjacency,
    report: PowerReport,
    // None once u32::MAX has been handed out
    next_id: Option<u32>,
    observers: Vec<Box<dyn PowerObserver>>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Board")
            .field("config", &self.config)
            .field("components", &self.components)
            .field("report", &self.report)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Board {
    pub fn new(config: BoardConfig) -> Self {
        Self {
            config,
            components: BTreeMap::new(),
            adjacency: Adjacency::new(),
            report: PowerReport::default(),
            next_id: Some(0),
            observers: Vec::new(),
        }
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn add_observer(&mut self, observer: impl PowerObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn get(&self, id: ComponentId) -> Option<&Component> {
        self.components.get(&id)
    }

    pub fn components(&self) -> impl Iterator<Item = &Component> {
        self.components.values()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn adjacency(&self) -> &Adjacency {
        &self.adjacency
    }

    /// Result of the last recompute.
    pub fn report(&self) -> &PowerReport {
        &self.report
    }

    /// Components in the cell. More than one only under [`Occupancy::Shared`].
    pub fn components_at(&self, pos: Vec2isize) -> impl Iterator<Item = &Component> {
        self.components.values().filter(move |c| c.pos() == pos)
    }

    pub fn component_at(&self, pos: Vec2isize) -> Option<&Component> {
        self.components_at(pos).next()
    }

    pub fn leds(&self) -> impl Iterator<Item = &Component> {
        self.components.values().filter(|c| c.is_led())
    }

    pub fn is_powered(&self, id: ComponentId) -> bool {
        power::is_powered(&self.components, &self.adjacency, id)
    }

    pub fn powered_set(&self) -> BTreeSet<ComponentId> {
        power::powered_set(&self.components, &self.adjacency)
    }

    pub fn place(&mut self, kind: ComponentKind, pos: impl Into<Vec2isize>) -> Result<ComponentId> {
        let pos = pos.into();
        self.check_cell_free(pos)?;

        let Some(raw) = self.next_id else {
            warn!("cannot place {kind} at {pos}: component ids exhausted");
            return Err(Error::IdsExhausted);
        };
        let id = ComponentId(raw);
        self.next_id = raw.checked_add(1);

        let component = match kind {
            ComponentKind::Switch => Component::switch(id, pos, self.config.default_switch_state),
            _ => Component::new(id, kind, pos),
        };
        info!("placed {kind} {id} at {pos}");
        self.components.insert(id, component);

        self.recompute();
        Ok(id)
    }

    pub fn remove(&mut self, id: ComponentId) -> Result<Component> {
        let Some(component) = self.components.remove(&id) else {
            warn!("cannot remove {id}: not on the board");
            return Err(Error::UnknownComponent(id));
        };
        info!("removed {} {id} from {}", component.kind(), component.pos());

        self.recompute();
        Ok(component)
    }

    pub fn clear(&mut self) {
        self.components.clear();
        self.recompute();
    }

    /// Flips a switch and returns its new state.
    pub fn toggle_switch(&mut self, id: ComponentId) -> Result<SwitchState> {
        let state = self.switch_mut(id)?.state().unwrap_or_default().toggled();
        self.set_switch_state(id, state)?;
        Ok(state)
    }

    pub fn notify_switch_toggled(&mut self, id: ComponentId) -> Result<SwitchState> {
        self.toggle_switch(id)
    }

    pub fn set_switch_state(&mut self, id: ComponentId, state: SwitchState) -> Result<()> {
        let component = self.switch_mut(id)?;
        component.set_state(state);
        info!("switch {id} is now {state}");

        self.recompute();
        Ok(())
    }

    /// Replaces the whole placed set with `components`, keeping their ids.
    ///
    /// The board is left untouched if the new set is rejected.
    pub fn notify_components_changed(
        &mut self,
        components: impl IntoIterator<Item = Component>,
    ) -> Result<()> {
        let mut replacement = ComponentMap::new();
        let mut cells: HashMap<Vec2isize, ComponentId> = HashMap::new();

        for component in components {
            let id = component.id();
            if self.config.occupancy == Occupancy::Exclusive {
                if let Some(&occupant) = cells.get(&component.pos()) {
                    warn!("rejected component set: {id} shares a cell with {occupant}");
                    return Err(Error::CellOccupied {
                        pos: component.pos(),
                        occupant,
                    });
                }
                cells.insert(component.pos(), id);
            }
            if replacement.insert(id, component).is_some() {
                warn!("rejected component set: {id} appears twice");
                return Err(Error::DuplicateComponent(id));
            }
        }

        if let Some(max) = replacement.keys().next_back() {
            self.next_id = self
                .next_id
                .zip(max.0.checked_add(1))
                .map(|(next, after_max)| next.max(after_max));
        }
        self.components = replacement;

        self.recompute();
        Ok(())
    }

    /// Rebuilds the adjacency, evaluates every LED and notifies the observers.
    pub fn recompute(&mut self) -> &PowerReport {
        self.adjacency = build_adjacency(self.components.values());

        let leds = self
            .leds()
            .map(|led| (led.id(), self.is_powered(led.id())))
            .collect();
        let switches = self
            .components
            .values()
            .filter_map(|c| Some((c.id(), c.state()?)))
            .collect();
        self.report = PowerReport { leds, switches };

        debug!(
            "recomputed {} components, {} edges, {} of {} leds lit",
            self.components.len(),
            self.adjacency.edge_count(),
            self.report.lit_leds().count(),
            self.report.leds.len(),
        );

        for observer in &mut self.observers {
            for (&id, &powered) in &self.report.leds {
                observer.report_led_power_state(id, powered);
            }
        }

        &self.report
    }

    fn switch_mut(&mut self, id: ComponentId) -> Result<&mut Component> {
        let Some(component) = self.components.get_mut(&id) else {
            warn!("cannot toggle {id}: not on the board");
            return Err(Error::UnknownComponent(id));
        };
        if component.kind() != ComponentKind::Switch {
            warn!("cannot toggle {id}: it is a {}", component.kind());
            return Err(Error::NotASwitch {
                id,
                kind: component.kind(),
            });
        }
        Ok(component)
    }

    fn check_cell_free(&self, pos: Vec2isize) -> Result<()> {
        if self.config.occupancy == Occupancy::Shared {
            return Ok(());
        }
        match self.component_at(pos) {
            Some(occupant) => {
                warn!("cannot place at {pos}: occupied by {}", occupant.id());
                Err(Error::CellOccupied {
                    pos,
                    occupant: occupant.id(),
                })
            }
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    #[test]
    fn ids_are_not_reused_after_removal() {
        let mut board = Board::default();
        let a = board.place(ComponentKind::Cable, (0, 0)).unwrap();
        board.remove(a).unwrap();
        let b = board.place(ComponentKind::Cable, (0, 0)).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn removal_drops_stale_edges() {
        let mut board = Board::default();
        let a = board.place(ComponentKind::Cable, (0, 0)).unwrap();
        let b = board.place(ComponentKind::Cable, (1, 0)).unwrap();
        assert!(board.adjacency().contains(a, b));

        board.remove(b).unwrap();
        assert!(board.adjacency().neighbors(a).is_empty());
        assert_eq!(board.adjacency().node_count(), 1);
    }

    #[test]
    fn unknown_ids_are_errors() {
        let mut board = Board::default();
        let ghost = ComponentId::new(42);
        assert!(matches!(board.remove(ghost), Err(Error::UnknownComponent(id)) if id == ghost));
        assert!(matches!(
            board.toggle_switch(ghost),
            Err(Error::UnknownComponent(_))
        ));
    }

    #[test]
    fn toggling_a_non_switch_fails() {
        let mut board = Board::default();
        let led = board.place(ComponentKind::Led, (0, 0)).unwrap();
        assert!(matches!(
            board.toggle_switch(led),
            Err(Error::NotASwitch { kind: ComponentKind::Led, .. })
        ));
    }

    #[test]
    fn new_switch_uses_configured_default() {
        let mut board = Board::new(BoardConfig {
            default_switch_state: SwitchState::On,
            ..Default::default()
        });
        let sw = board.place(ComponentKind::Switch, (0, 0)).unwrap();
        assert_eq!(board.get(sw).unwrap().state(), Some(SwitchState::On));
        assert_eq!(board.report().switch_state(sw), Some(SwitchState::On));
    }

    #[test]
    fn shared_cells_are_allowed_by_default() {
        let mut board = Board::default();
        let a = board.place(ComponentKind::Battery, (0, 0)).unwrap();
        let b = board.place(ComponentKind::Led, (0, 0)).unwrap();

        assert_eq!(board.components_at((0, 0).into()).count(), 2);
        assert!(!board.adjacency().contains(a, b));
        assert_eq!(board.report().is_lit(b), Some(false));
    }

    #[test]
    fn exclusive_occupancy_rejects_shared_cells() {
        let mut board = Board::new(BoardConfig {
            occupancy: Occupancy::Exclusive,
            ..Default::default()
        });
        let a = board.place(ComponentKind::Battery, (0, 0)).unwrap();
        let err = board.place(ComponentKind::Led, (0, 0)).unwrap_err();

        assert!(matches!(err, Error::CellOccupied { occupant, .. } if occupant == a));
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn replacement_keeps_ids_and_advances_generator() {
        let mut board = Board::default();
        board
            .notify_components_changed([
                Component::new(ComponentId::new(5), ComponentKind::Battery, (0, 0)),
                Component::new(ComponentId::new(9), ComponentKind::Led, (0, 1)),
            ])
            .unwrap();

        assert_eq!(board.report().is_lit(ComponentId::new(9)), Some(true));
        let next = board.place(ComponentKind::Cable, (5, 5)).unwrap();
        assert_eq!(next, ComponentId::new(10));
    }

    #[test]
    fn rejected_replacement_leaves_board_untouched() {
        let mut board = Board::default();
        let led = board.place(ComponentKind::Led, (3, 3)).unwrap();

        let dup = ComponentId::new(1);
        let err = board
            .notify_components_changed([
                Component::new(dup, ComponentKind::Battery, (0, 0)),
                Component::new(dup, ComponentKind::Led, (0, 1)),
            ])
            .unwrap_err();

        assert!(matches!(err, Error::DuplicateComponent(id) if id == dup));
        assert!(board.get(led).is_some());
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn ids_run_out_instead_of_wrapping() {
        let mut board = Board::default();
        let last = ComponentId::new(u32::MAX);
        board
            .notify_components_changed([Component::new(last, ComponentKind::Led, (0, 0))])
            .unwrap();

        assert!(matches!(
            board.place(ComponentKind::Battery, (1, 0)),
            Err(Error::IdsExhausted)
        ));
        assert_eq!(board.len(), 1);
        assert_eq!(board.get(last).unwrap().kind(), ComponentKind::Led);
    }

    #[test]
    fn replacement_below_the_counter_keeps_it() {
        let mut board = Board::default();
        for x in 0..3isize {
            board.place(ComponentKind::Cable, (x, 0)).unwrap();
        }
        board
            .notify_components_changed([Component::new(
                ComponentId::new(0),
                ComponentKind::Battery,
                (0, 0),
            )])
            .unwrap();

        assert_eq!(
            board.place(ComponentKind::Led, (1, 0)).unwrap(),
            ComponentId::new(3)
        );
    }

    #[test]
    fn components_at_the_edge_of_the_grid() {
        let mut board = Board::default();
        board
            .place(ComponentKind::Battery, (isize::MAX - 1, isize::MIN))
            .unwrap();
        let led = board
            .place(ComponentKind::Led, (isize::MAX, isize::MIN))
            .unwrap();
        let far = board.place(ComponentKind::Led, (isize::MIN, 0)).unwrap();

        assert_eq!(board.report().is_lit(led), Some(true));
        assert_eq!(board.report().is_lit(far), Some(false));
        assert_eq!(board.adjacency().edge_count(), 1);
    }

    #[test]
    fn exclusive_replacement_rejects_shared_cells() {
        let mut board = Board::new(BoardConfig {
            occupancy: Occupancy::Exclusive,
            ..Default::default()
        });
        let led = board.place(ComponentKind::Led, (3, 3)).unwrap();

        let first = ComponentId::new(10);
        let err = board
            .notify_components_changed([
                Component::new(first, ComponentKind::Battery, (0, 0)),
                Component::new(ComponentId::new(11), ComponentKind::Led, (0, 0)),
            ])
            .unwrap_err();

        assert!(matches!(
            err,
            Error::CellOccupied { pos, occupant } if pos == Vec2isize::new(0, 0) && occupant == first
        ));
        assert_eq!(board.len(), 1);
        assert!(board.get(led).is_some());
        assert_eq!(board.place(ComponentKind::Cable, (5, 5)).unwrap(), ComponentId::new(1));
    }

    #[test]
    fn observers_see_every_led_after_each_change() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut board = Board::default();
        {
            let seen = seen.clone();
            board.add_observer(move |id: ComponentId, powered: bool| {
                seen.lock().unwrap().push((id, powered))
            });
        }

        let battery = board.place(ComponentKind::Battery, (0, 0)).unwrap();
        let led = board.place(ComponentKind::Led, (1, 0)).unwrap();
        board.remove(battery).unwrap();

        // battery placement reports no LEDs
        assert_eq!(*seen.lock().unwrap(), [(led, true), (led, false)]);
    }
}
