//! Galton - bean machine simulation library
//!
//! A bean falls through `slot_count - 1` rows of pegs and lands in one of
//! `slot_count` slots. Beans either bounce at random (luck) or follow a
//! skill level rolled when they are created (skill).

pub mod bean;
pub mod build_info;
pub mod constants;
pub mod machine;
pub mod random;
pub mod simulator;

pub use bean::{Bean, BeanError, BeanMode};
pub use machine::Machine;
pub use random::RandomSource;
