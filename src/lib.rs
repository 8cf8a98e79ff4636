/// Apothecary - rarity-weighted ingredient roller for TTRPG game masters.
///
/// Core library providing weighted sampling over plant and animal catalogs,
/// unique plant/animal combinations, and Russian potion-name synthesis.

pub mod config;
pub mod core;
pub mod tui;

#[cfg(test)]
mod tests;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
