use crate::ui::cli::drivers::PromptDriver;
use anyhow::Result;
use inquire::{CustomType, Select, Text, validator::Validation};

pub struct InquireDriver;

impl PromptDriver for InquireDriver {
    fn ask_string(&self, title: &str, help: &str, default: &str) -> Result<String> {
        Ok(Text::new(title)
            .with_initial_value(default)
            .with_help_message(help)
            .prompt()?)
    }

    fn ask_u64(
        &self,
        title: &str,
        help: &str,
        default: u64,
        min: Option<u64>,
        max: Option<u64>,
    ) -> Result<u64> {
        let lo = min.unwrap_or(0);
        let hi = max.unwrap_or(u64::MAX);
        Ok(CustomType::<u64>::new(title)
            .with_default(default)
            .with_help_message(help)
            .with_validator(move |x: &u64| {
                if (lo..=hi).contains(x) {
                    Ok(Validation::Valid)
                } else if hi == u64::MAX {
                    Ok(Validation::Invalid(format!("Must be ≥ {lo}").into()))
                } else {
                    Ok(Validation::Invalid(
                        format!("Must be between {lo} and {hi}").into(),
                    ))
                }
            })
            .prompt()?)
    }

    fn ask_choice(
        &self,
        title: &str,
        help: &str,
        options: &[String],
        default: usize,
    ) -> Result<usize> {
        let picked = Select::new(title, options.to_vec())
            .with_help_message(help)
            .with_starting_cursor(default)
            .raw_prompt()?;
        Ok(picked.index)
    }
}
