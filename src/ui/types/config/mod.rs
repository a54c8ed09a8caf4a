mod error;
mod output_format;
mod schema;
mod sweep_params;

pub use error::ConfigError;
pub use output_format::OutputFormat;
pub use schema::*;
pub use sweep_params::SweepParams;
