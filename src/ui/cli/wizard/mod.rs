mod wizard;

pub use wizard::{prompt_output_format, prompt_sweep_params};
