//! Ship types from the fleet catalog and ships placed on a board.

use alloc::borrow::Cow;
use alloc::vec::Vec;
use core::fmt;

use crate::common::Side;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Orientation {
    /// Extends along increasing column index.
    Horizontal,
    /// Extends along increasing row index.
    Vertical,
}

impl Orientation {
    /// The other orientation.
    pub fn toggled(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    /// Cell `offset` steps away from `anchor` in this orientation.
    pub(crate) fn step(self, anchor: (usize, usize), offset: usize) -> (usize, usize) {
        let (row, col) = anchor;
        match self {
            Orientation::Horizontal => (row, col + offset),
            Orientation::Vertical => (row + offset, col),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Horizontal => f.write_str("horizontal"),
            Orientation::Vertical => f.write_str("vertical"),
        }
    }
}

/// Catalog entry: ship name, length and how many of it each fleet gets.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipType {
    name: Cow<'static, str>,
    length: usize,
    quantity: usize,
}

impl ShipType {
    /// Create a new ship type.
    pub const fn new(name: &'static str, length: usize, quantity: usize) -> Self {
        Self {
            name: Cow::Borrowed(name),
            length,
            quantity,
        }
    }

    /// Ship type with a name only known at runtime.
    pub fn named(name: impl Into<Cow<'static, str>>, length: usize, quantity: usize) -> Self {
        Self {
            name: name.into(),
            length,
            quantity,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Number of ships of this type in one fleet.
    pub fn quantity(&self) -> usize {
        self.quantity
    }

    pub(crate) fn name_cow(&self) -> Cow<'static, str> {
        self.name.clone()
    }
}

/// Identifier of a placed ship, unique across both boards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShipId {
    side: Side,
    number: usize,
}

impl ShipId {
    pub(crate) fn new(side: Side, number: usize) -> Self {
        Self { side, number }
    }

    /// Board the ship belongs to.
    pub fn side(&self) -> Side {
        self.side
    }

    /// 1-based placement order on its board.
    pub fn number(&self) -> usize {
        self.number
    }
}

impl fmt::Display for ShipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.side, self.number)
    }
}

/// A ship committed to a board.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    id: ShipId,
    name: Cow<'static, str>,
    orientation: Orientation,
    cells: Vec<(usize, usize)>,
    hit_count: usize,
}

impl Ship {
    pub(crate) fn new(
        id: ShipId,
        ship_type: &ShipType,
        orientation: Orientation,
        cells: Vec<(usize, usize)>,
    ) -> Self {
        debug_assert_eq!(cells.len(), ship_type.length());
        Ship {
            id,
            name: ship_type.name_cow(),
            orientation,
            cells,
            hit_count: 0,
        }
    }

    pub fn id(&self) -> ShipId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn length(&self) -> usize {
        self.cells.len()
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Occupied cells, starting at the anchor.
    pub fn cells(&self) -> &[(usize, usize)] {
        &self.cells
    }

    /// Anchor cell the ship was placed from.
    pub fn anchor(&self) -> (usize, usize) {
        self.cells[0]
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.cells.contains(&(row, col))
    }

    /// Segments hit so far.
    pub fn hit_count(&self) -> usize {
        self.hit_count
    }

    /// Every segment has been hit.
    pub fn is_sunk(&self) -> bool {
        self.hit_count == self.length()
    }

    /// Records one more hit segment. The board guarantees each cell is
    /// resolved only once.
    pub(crate) fn register_hit(&mut self) -> bool {
        debug_assert!(self.hit_count < self.length());
        self.hit_count += 1;
        self.is_sunk()
    }

    pub(crate) fn display_name(&self) -> Cow<'static, str> {
        self.name.clone()
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ id: {}, name: \"{}\", anchor: {:?}, orientation: {:?}, hits: {}/{} }}",
            self.id,
            self.name,
            self.anchor(),
            self.orientation,
            self.hit_count,
            self.length(),
        )
    }
}
