pub mod elo;
pub mod engine;
pub mod points;
mod table;

pub use engine::{compute, compute_as_of_now};
