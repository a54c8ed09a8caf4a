mod sweep_driver;

pub use sweep_driver::{SweepDriver, run_sweep};
