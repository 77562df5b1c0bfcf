//! Common test infrastructure
//!
//! Tests should only import from this module, not from internal
//! submodules.

mod constants;
mod fixtures;

// Public API - this is what tests import
#[allow(unused_imports)]
pub use constants::*;
#[allow(unused_imports)]
pub use fixtures::{empty_app, register_user, seeded_app, test_hasher};
