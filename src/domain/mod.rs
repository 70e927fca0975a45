pub mod models;
mod roster;

pub use models::*;
pub use roster::{BoutEntry, Roster};
