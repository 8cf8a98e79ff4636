//! Terminal UI for the apothecary roller.

pub mod app;
pub mod events;
pub mod theme;
