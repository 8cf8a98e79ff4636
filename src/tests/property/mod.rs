//! Property-based tests for the apothecary roller
//!
//! Property tests verify invariants that should hold for all inputs, rather
//! than testing specific cases.
//!
//! ## Running Property Tests
//!
//! ```sh
//! cargo test property --release
//! ```
//!
//! ## Test Modules
//!
//! - `sampler_props`: weighted sampling
//!   - Seeded draws are deterministic
//!   - Batch rolls have exactly the requested length
//!   - Observed frequencies track the rarity weights
//!
//! - `combination_props`: unique plant/animal pairs
//!   - A pair is never returned twice
//!   - Draws exhaust after exactly |plants| x |animals| pairs
//!
//! - `naming_props`: potion name synthesis
//!   - Names are non-empty and capitalized
//!   - Deterministic given same seed
//!
//! ## Configuration
//!
//! By default, proptest runs 256 cases per property. This can be configured
//! via the `PROPTEST_CASES` environment variable.

mod combination_props;
mod naming_props;
mod sampler_props;
