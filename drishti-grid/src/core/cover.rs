//! Physical cover classification.
//!
//! The host simulation decides what occupies a cell; the grid only needs
//! to know how much of the cell it fills and whether it is vegetation.

use serde::{Deserialize, Serialize};

/// How much of a cell an object fills.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Fillage {
    /// Does not block anything
    #[default]
    None = 0,
    /// Partially fills the cell (sandbags, low walls, furniture)
    Partial = 1,
    /// Completely fills the cell (walls, rock)
    Full = 2,
}

/// Broad category of the occupying object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum ThingCategory {
    /// Constructed object
    #[default]
    Building = 0,
    /// Vegetation (bushes, trees)
    Plant = 1,
    /// Anything else (items, debris)
    Item = 2,
}

/// The cover-relevant part of whatever occupies a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CoverThing {
    /// Fill category
    pub fillage: Fillage,
    /// Object category
    pub category: ThingCategory,
}

impl CoverThing {
    /// Create a new cover descriptor
    pub fn new(fillage: Fillage, category: ThingCategory) -> Self {
        Self { fillage, category }
    }

    /// Sandbag-like partial cover.
    pub fn partial() -> Self {
        Self::new(Fillage::Partial, ThingCategory::Building)
    }

    /// Does this object count as cover against the sight direction?
    ///
    /// Only partial-fill objects that are not plants qualify. Full-fill
    /// objects block line of sight outright and are handled by the
    /// observer pass, not here.
    #[inline]
    pub fn provides_cover(&self) -> bool {
        self.fillage == Fillage::Partial && self.category != ThingCategory::Plant
    }
}
