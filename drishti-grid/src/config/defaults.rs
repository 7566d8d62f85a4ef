//! Default value functions for serde deserialization.

use crate::core::Tick;

pub fn map_size() -> usize {
    250
}

pub fn update_interval() -> Tick {
    60
}

pub fn faction() -> u32 {
    0
}

pub fn probe_length() -> f32 {
    5.0
}

pub fn enemy_cap() -> u32 {
    10
}

pub fn exposure_ceiling() -> f32 {
    64.0
}
