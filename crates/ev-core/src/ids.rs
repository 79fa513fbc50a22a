//! Entity identifiers.
//!
//! An `EntityId` is the row index of an entity in the world table.  Ids are
//! only minted from table lengths through `TryFrom<usize>`, so a table that
//! outgrows `u32` fails loudly instead of wrapping onto existing rows.

use std::fmt;

/// Index of an entity (agent, pursuer, obstacle) in the world table.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(pub u32);

impl EntityId {
    /// Row in the entity table.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<usize> for EntityId {
    type Error = std::num::TryFromIntError;

    fn try_from(row: usize) -> Result<Self, Self::Error> {
        u32::try_from(row).map(EntityId)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "entity#{}", self.0)
    }
}
