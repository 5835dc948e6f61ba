// tests/support/mod.rs
// Shared by every integration test binary; each binary only touches part of it.
#[allow(dead_code, unused_imports)]
pub mod builders;
#[allow(dead_code, unused_imports)]
pub mod helpers;
#[allow(dead_code, unused_imports)]
pub mod mocks;

#[allow(unused_imports)]
pub use builders::*;
#[allow(unused_imports)]
pub use helpers::*;
#[allow(unused_imports)]
pub use mocks::*;
