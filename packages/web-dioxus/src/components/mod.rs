//! Reusable UI components

mod filter_bar;
mod loading;
mod notices;
mod resource_card;

pub use filter_bar::*;
pub use loading::*;
pub use notices::*;
pub use resource_card::*;
