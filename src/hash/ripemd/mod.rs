//! RIPEMD-160 on the shared streaming engine.

mod constants;
pub mod core;

pub use self::core::{Ripemd160, ripemd160};
