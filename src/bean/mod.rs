//! Single-bean trajectory engine.

pub mod logic;
pub mod types;

pub use logic::{skill_level_from_draw, Bean};
pub use types::{BeanError, BeanMode};
