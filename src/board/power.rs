use std::collections::{BTreeSet, HashSet};

use crate::circuits::ComponentId;

use super::{adjacency::Adjacency, ComponentMap};

/// Whether a battery can be reached from `start` without passing an off switch.
///
/// Iterative depth-first walk over the adjacency relation. An off switch is
/// visited but its neighbors are never queued, which also applies when `start`
/// itself is an off switch. Unknown ids are never powered.
pub fn is_powered(components: &ComponentMap, adjacency: &Adjacency, start: ComponentId) -> bool {
    if !components.contains_key(&start) {
        return false;
    }

    let mut visited = HashSet::new();
    let mut stack = vec![start];

    while let Some(id) = stack.pop() {
        if !visited.insert(id) {
            continue;
        }

        let Some(current) = components.get(&id) else {
            continue;
        };

        if current.kind().is_source() {
            log::trace!("{start} reached battery {id} after {} visits", visited.len());
            return true;
        }

        if current.blocks_propagation() {
            continue;
        }

        stack.extend(
            adjacency
                .neighbors(id)
                .iter()
                .filter(|n| !visited.contains(*n)),
        );
    }

    log::trace!("{start} is unpowered, {} components visited", visited.len());
    false
}

/// Every component [`is_powered`] holds for, batteries included.
pub fn powered_set(components: &ComponentMap, adjacency: &Adjacency) -> BTreeSet<ComponentId> {
    components
        .keys()
        .copied()
        .filter(|&id| is_powered(components, adjacency, id))
        .collect()
}
