use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::{
    circuits::{Component, ComponentId},
    vector::Vec2isize,
};

static EMPTY: BTreeSet<ComponentId> = BTreeSet::new();

/// Undirected edges between components in orthogonally neighboring cells.
///
/// Always derived from scratch by [`build_adjacency`], never patched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Adjacency {
    edges: BTreeMap<ComponentId, BTreeSet<ComponentId>>,
}

impl Adjacency {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn neighbors(&self, id: ComponentId) -> &BTreeSet<ComponentId> {
        self.edges.get(&id).unwrap_or(&EMPTY)
    }

    pub fn contains(&self, a: ComponentId, b: ComponentId) -> bool {
        self.neighbors(a).contains(&b)
    }

    /// Graph nodes, including isolated ones.
    pub fn nodes(&self) -> impl Iterator<Item = ComponentId> + '_ {
        self.edges.keys().copied()
    }

    pub fn node_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(BTreeSet::len).sum::<usize>() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn is_symmetric(&self) -> bool {
        self.edges
            .iter()
            .all(|(a, ns)| ns.iter().all(|b| self.contains(*b, *a)))
    }

    fn add_node(&mut self, id: ComponentId) {
        self.edges.entry(id).or_default();
    }

    fn connect(&mut self, a: ComponentId, b: ComponentId) {
        self.edges.entry(a).or_default().insert(b);
        self.edges.entry(b).or_default().insert(a);
    }
}

/// Builds the adjacency relation for the complete set of placed components.
///
/// Two components are connected when their cells are one step apart up, down,
/// left or right. Components sharing a cell never connect to each other.
/// Non-conductive kinds are left out of the graph.
pub fn build_adjacency<'a>(components: impl IntoIterator<Item = &'a Component>) -> Adjacency {
    let mut adjacency = Adjacency::new();
    let mut cells: HashMap<Vec2isize, Vec<ComponentId>> = HashMap::new();

    for component in components {
        if !component.kind().is_conductive() {
            continue;
        }

        let id = component.id();
        adjacency.add_node(id);

        for neighbor in component.pos().neighbors() {
            if let Some(others) = cells.get(&neighbor) {
                for &other in others {
                    adjacency.connect(id, other);
                }
            }
        }

        cells.entry(component.pos()).or_default().push(id);
    }

    adjacency
}
