pub mod alchemy;
pub mod logging;

// Interactive state: filters, seen combinations, history
pub mod session;
