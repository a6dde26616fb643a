pub mod ritual;

pub use ritual::*;
