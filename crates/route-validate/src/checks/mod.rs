//! One module per rule family, run in the order declared by the validator.

pub mod area;
pub mod description;
pub mod distance;
pub mod duration;
pub mod path;
pub mod position;
