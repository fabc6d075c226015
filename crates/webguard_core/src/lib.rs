//! WebGuard core: pure fingerprinting and compare logic.
mod cycle;
mod digest;

pub use cycle::{classify, Comparison};
pub use digest::{digest, normalize};
