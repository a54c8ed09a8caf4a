use anyhow::{Context, Result, bail};
use log::debug;
use serde_json::{Map, Value};
use strum::{EnumMessage, IntoEnumIterator};

use crate::ui::cli::drivers::PromptDriver;
use crate::ui::types::config::{FieldKind, FieldSpec, OutputFormat, SweepParams, field_specs};

const DIM_ITALIC: &str = "\x1b[2m\x1b[3m";
const RESET: &str = "\x1b[0m";

/// Asks for every sweep parameter, then for the output format.
pub fn prompt_sweep_params<D: PromptDriver>(driver: &D) -> Result<SweepParams> {
    let defaults = serde_json::to_value(SweepParams::default())?;

    let mut params = Map::new();
    for spec in field_specs::<SweepParams>()? {
        let init = spec
            .default
            .clone()
            .or_else(|| defaults.get(&spec.name).cloned())
            .filter(|v| !v.is_null());

        if let Some(val) = ask_field(driver, &spec, init)? {
            params.insert(spec.name.clone(), val);
        }
    }

    let output = prompt_output_format(driver)?;
    params.insert("output".into(), serde_json::to_value(output)?);

    let p: SweepParams = serde_json::from_value(Value::Object(params))?;
    p.validate().context("sweep parameters rejected")?;
    debug!("wizard produced {p:?}");
    Ok(p)
}

fn ask_field<D: PromptDriver>(
    driver: &D,
    spec: &FieldSpec,
    init: Option<Value>,
) -> Result<Option<Value>> {
    let help = spec.description.as_deref().unwrap_or("");

    match spec.kind {
        FieldKind::Integer if spec.nullable => {
            let def_txt = init
                .as_ref()
                .and_then(|v| v.as_u64())
                .map(|n| n.to_string())
                .unwrap_or_default();
            let answer =
                driver.ask_string(&spec.title, &format!("{help}\n(leave blank for none)"), &def_txt)?;
            let answer = answer.trim();
            if answer.is_empty() {
                return Ok(None);
            }
            let n: u64 = answer
                .parse()
                .with_context(|| format!("invalid integer for {}", spec.title))?;
            Ok(Some(Value::from(n)))
        }
        FieldKind::Integer => {
            let def = init.and_then(|v| v.as_u64()).unwrap_or(0);
            let n = driver.ask_u64(
                &spec.title,
                help,
                def,
                spec.min.map(|x| x as u64),
                spec.max.map(|x| x as u64),
            )?;
            Ok(Some(Value::from(n)))
        }
        FieldKind::String => {
            let def = init
                .and_then(|v| v.as_str().map(str::to_string))
                .unwrap_or_default();
            Ok(Some(Value::String(driver.ask_string(&spec.title, help, &def)?)))
        }
    }
}

fn format_label(f: OutputFormat) -> String {
    let key: &'static str = f.into();
    let label = f.get_message().unwrap_or(key);
    match f.get_detailed_message() {
        Some(desc) if !desc.is_empty() => format!("{label}  {DIM_ITALIC}{desc}{RESET}"),
        _ => label.to_string(),
    }
}

pub fn prompt_output_format<D: PromptDriver>(driver: &D) -> Result<OutputFormat> {
    let formats: Vec<OutputFormat> = OutputFormat::iter().collect();
    let labels: Vec<String> = formats.iter().copied().map(format_label).collect();
    let default = formats
        .iter()
        .position(|f| *f == OutputFormat::default())
        .unwrap_or(0);

    let idx = driver.ask_choice(
        "Choose an output format:",
        "↑/↓ to navigate, ↵ to select",
        &labels,
        default,
    )?;
    match formats.get(idx) {
        Some(f) => Ok(*f),
        None => bail!("no output format at index {idx}"),
    }
}
