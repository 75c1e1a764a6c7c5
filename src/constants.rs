// Peg behavior
pub const DEFLECT_PROBABILITY: f64 = 0.5;
pub const PEG_CHOICES: u32 = 2; // left or right

// Board defaults
pub const DEFAULT_SLOT_COUNT: usize = 10;
pub const DEFAULT_BEAN_COUNT: usize = 500;

// Simulation defaults
pub const DEFAULT_NUM_RUNS: u32 = 1;
