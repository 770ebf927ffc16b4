//! Statistical analysis probes for the Enhanced TEA cipher.
//!
//! Provides the avalanche-effect measurement and the differential
//! cryptanalysis frequency tabulation, both built directly on the
//! cipher session and Feistel engine.

pub mod avalanche;
pub mod differential;

pub use avalanche::{avalanche_test, AvalancheResult};
pub use differential::{differential_test, differential_test_with_rng, DifferentialTable};
