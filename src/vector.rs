use std::fmt::{Debug, Display};

use serde::{Deserialize, Serialize};

/// Integer grid cell. `y` grows downwards, the way the board is laid out on screen.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Vec2isize {
    pub x: isize,
    pub y: isize,
}

impl Vec2isize {
    pub const fn new(x: isize, y: isize) -> Self {
        Self { x, y }
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        Some(Self::new(self.x.checked_add(rhs.x)?, self.y.checked_add(rhs.y)?))
    }

    /// `None` when the neighboring cell lies outside the `isize` range.
    pub fn neighbor(self, dir: Direction) -> Option<Self> {
        self.checked_add(dir.offset())
    }

    /// Neighboring cells that exist, in up, down, left, right order.
    pub fn neighbors(self) -> impl Iterator<Item = Self> {
        Direction::ALL
            .into_iter()
            .filter_map(move |dir| self.neighbor(dir))
    }

    pub fn manhattan_distance(self, other: Self) -> usize {
        self.x
            .abs_diff(other.x)
            .saturating_add(self.y.abs_diff(other.y))
    }

    /// Orthogonal neighbors only, a cell is never adjacent to itself.
    pub fn is_adjacent(self, other: Self) -> bool {
        self.manhattan_distance(other) == 1
    }
}

impl From<(isize, isize)> for Vec2isize {
    fn from((x, y): (isize, isize)) -> Self {
        Self::new(x, y)
    }
}

impl From<[isize; 2]> for Vec2isize {
    fn from([x, y]: [isize; 2]) -> Self {
        Self::new(x, y)
    }
}

impl Display for Vec2isize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Debug for Vec2isize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    pub fn offset(self) -> Vec2isize {
        match self {
            Direction::Up => Vec2isize::new(0, -1),
            Direction::Down => Vec2isize::new(0, 1),
            Direction::Left => Vec2isize::new(-1, 0),
            Direction::Right => Vec2isize::new(1, 0),
        }
    }
}
