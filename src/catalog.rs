//! Fleet catalog: the ship types every fleet is built from.
//!
//! A catalog is validated once on construction. Anything that could stop a
//! fleet from fitting on the board is a configuration error reported here,
//! never at play time.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::board::Grid;
use crate::config::{BOARD_SIZE, CELL_COUNT, SHIPS};
use crate::placement;
use crate::ship::ShipType;

/// Errors detected while building a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The catalog has no ship types.
    EmptyCatalog,
    /// A ship type has length zero.
    ZeroLength { name: String },
    /// A ship type has quantity zero.
    ZeroQuantity { name: String },
    /// A ship is longer than the board is wide.
    ShipTooLong { name: String, length: usize },
    /// The fleet needs more cells than the board has.
    FleetTooLarge { cells: usize, capacity: usize },
    /// No non-overlapping layout of the whole fleet was found.
    FleetDoesNotFit { ships: usize },
    /// Catalog source could not be read or parsed.
    Load(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyCatalog => write!(f, "Fleet catalog is empty"),
            ConfigError::ZeroLength { name } => write!(f, "Ship type '{}' has zero length", name),
            ConfigError::ZeroQuantity { name } => {
                write!(f, "Ship type '{}' has zero quantity", name)
            }
            ConfigError::ShipTooLong { name, length } => write!(
                f,
                "Ship type '{}' of length {} does not fit a {}x{} board",
                name, length, BOARD_SIZE, BOARD_SIZE
            ),
            ConfigError::FleetTooLarge { cells, capacity } => write!(
                f,
                "Fleet needs {} cells but the board only has {}",
                cells, capacity
            ),
            ConfigError::FleetDoesNotFit { ships } => write!(
                f,
                "Fleet of {} ships does not fit a {}x{} board",
                ships, BOARD_SIZE, BOARD_SIZE
            ),
            ConfigError::Load(msg) => write!(f, "Unable to load fleet catalog: {}", msg),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// Ordered, validated list of ship types.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct FleetCatalog {
    types: Vec<ShipType>,
}

impl FleetCatalog {
    /// Validate `types` and build a catalog.
    pub fn new(types: Vec<ShipType>) -> Result<Self, ConfigError> {
        if types.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        for t in &types {
            if t.length() == 0 {
                return Err(ConfigError::ZeroLength {
                    name: t.name().into(),
                });
            }
            if t.quantity() == 0 {
                return Err(ConfigError::ZeroQuantity {
                    name: t.name().into(),
                });
            }
            if t.length() > BOARD_SIZE {
                return Err(ConfigError::ShipTooLong {
                    name: t.name().into(),
                    length: t.length(),
                });
            }
        }
        let cells: usize = types.iter().map(|t| t.length() * t.quantity()).sum();
        if cells > CELL_COUNT {
            return Err(ConfigError::FleetTooLarge {
                cells,
                capacity: CELL_COUNT,
            });
        }
        let catalog = Self { types };
        if placement::find_layout(Grid::new(), &catalog.queue()).is_none() {
            return Err(ConfigError::FleetDoesNotFit {
                ships: catalog.total_ships(),
            });
        }
        Ok(catalog)
    }

    /// The reference fleet from [`SHIPS`].
    pub fn reference() -> Self {
        Self {
            types: SHIPS.to_vec(),
        }
    }

    /// Ship types in catalog order.
    pub fn types(&self) -> &[ShipType] {
        &self.types
    }

    /// Ships per fleet: the sum of all quantities.
    pub fn total_ships(&self) -> usize {
        self.types.iter().map(ShipType::quantity).sum()
    }

    /// Cells one full fleet occupies.
    pub fn total_cells(&self) -> usize {
        self.types.iter().map(|t| t.length() * t.quantity()).sum()
    }

    /// One entry per ship instance, expanded in catalog order.
    pub fn queue(&self) -> Vec<ShipType> {
        self.types
            .iter()
            .flat_map(|t| core::iter::repeat(t).take(t.quantity()))
            .cloned()
            .collect()
    }

    /// Parse a JSON array of `{ "name", "length", "quantity" }` entries.
    #[cfg(feature = "std")]
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let types: Vec<ShipType> =
            serde_json::from_str(json).map_err(|e| ConfigError::Load(e.to_string()))?;
        Self::new(types)
    }

    /// Read and parse a JSON catalog file.
    #[cfg(feature = "std")]
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Load(std::format!("{}: {}", path.display(), e)))?;
        Self::from_json(&json)
    }
}

impl Default for FleetCatalog {
    fn default() -> Self {
        Self::reference()
    }
}
