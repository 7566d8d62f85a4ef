//! Core types for the DrishtiGrid library.
//!
//! Plain value types shared by the sight grid and its collaborators.
//! Coordinates follow the host map convention:
//! - **X-axis**: column index
//! - **Y-axis**: row index
//!
//! ## Type Categories
//!
//! ### Coordinates
//! - [`GridCoord`]: Integer cell indices
//! - [`Vec2`]: Float vector in cell units (sight directions)
//!
//! ### Identity and Time
//! - [`FactionId`]: Owning faction of a grid
//! - [`Tick`], [`TickSource`], [`GameClock`]: Simulation clock
//!
//! ### Cover
//! - [`Fillage`], [`ThingCategory`]: Classification of cell occupants
//! - [`CoverThing`]: What the cover check sees in a cell

mod clock;
mod cover;
mod faction;
mod point;

pub use clock::{GameClock, Tick, TickSource};
pub use cover::{CoverThing, Fillage, ThingCategory};
pub use faction::FactionId;
pub use point::{GridCoord, Vec2};
