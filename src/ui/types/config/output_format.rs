use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumMessage, EnumString, IntoStaticStr};

/// How sweep results are presented on stdout.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    Display,
    IntoStaticStr,
    EnumMessage,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum OutputFormat {
    #[default]
    #[strum(
        message = "Charts",
        detailed_message = "Estimate and error plotted side by side."
    )]
    Chart,

    #[strum(
        message = "Table",
        detailed_message = "One comma-separated row per sweep index."
    )]
    Table,

    #[strum(
        message = "JSON",
        detailed_message = "Both sequences as a single JSON document."
    )]
    Json,
}
