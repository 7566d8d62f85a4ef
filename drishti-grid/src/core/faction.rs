//! Faction identity.

use serde::{Deserialize, Serialize};

/// Opaque identifier of the faction owning a sight grid.
///
/// The grid never inspects it; it only reports it back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct FactionId(pub u32);

impl std::fmt::Display for FactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "faction#{}", self.0)
    }
}
