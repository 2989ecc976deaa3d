//! Page components

mod not_found;
mod resources;

pub use not_found::*;
pub use resources::*;
