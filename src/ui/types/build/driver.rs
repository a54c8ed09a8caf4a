use crate::tasks::SweepDriver;
use crate::ui::types::config::{ConfigError, SweepParams};

impl TryFrom<&SweepParams> for SweepDriver {
    type Error = ConfigError;

    fn try_from(params: &SweepParams) -> Result<Self, Self::Error> {
        params.validate()?;
        let driver = match params.seed {
            Some(seed) => SweepDriver::new(params.start, params.stop, params.step, seed)?,
            None => SweepDriver::from_entropy(params.start, params.stop, params.step)?,
        };
        Ok(driver)
    }
}
