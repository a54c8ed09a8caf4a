use anyhow::{Context, Result};
use schemars::{JsonSchema, Schema, schema_for};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Integer,
}

/// Prompt metadata for one property of a parameter struct, read from its JSON Schema.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: String,
    pub title: String,
    pub description: Option<String>,
    pub required: bool,
    pub nullable: bool,
    pub kind: FieldKind,
    pub default: Option<Value>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

pub fn field_specs<T: JsonSchema>() -> Result<Vec<FieldSpec>> {
    specs_from_schema(&schema_for!(T))
}

/// Properties of an object schema, in declaration order. Fields whose type
/// is not a plain string or integer (and `#[schemars(skip)]` fields) are left out.
pub fn specs_from_schema(root: &Schema) -> Result<Vec<FieldSpec>> {
    let root_obj = root.as_object().context("root schema is not an object")?;

    let props = root_obj
        .get("properties")
        .and_then(|v| v.as_object())
        .context("root schema has no properties")?;

    let required: Vec<&str> = root_obj
        .get("required")
        .and_then(|v| v.as_array())
        .map(|a| a.iter().filter_map(|v| v.as_str()).collect())
        .unwrap_or_default();

    let mut out = Vec::new();
    for (name, field_schema) in props {
        let mut fs_obj = field_schema
            .as_object()
            .with_context(|| format!("schema of '{name}' is not an object"))?;

        if fs_obj.get("$ref").is_some() {
            fs_obj = resolve_ref_obj(root_obj, fs_obj)
                .with_context(|| format!("failed to resolve $ref for '{name}'"))?;
        }

        let Some((kind, nullable)) = detect_field_kind(fs_obj.get("type")) else {
            continue;
        };

        out.push(FieldSpec {
            name: name.clone(),
            title: fs_obj
                .get("title")
                .and_then(|v| v.as_str())
                .unwrap_or(name)
                .to_string(),
            description: fs_obj
                .get("description")
                .and_then(|v| v.as_str())
                .map(str::to_string),
            required: required.contains(&name.as_str()),
            nullable,
            kind,
            default: fs_obj.get("default").cloned(),
            min: fs_obj
                .get("minimum")
                .or_else(|| fs_obj.get("exclusiveMinimum"))
                .and_then(|v| v.as_f64()),
            max: fs_obj
                .get("maximum")
                .or_else(|| fs_obj.get("exclusiveMaximum"))
                .and_then(|v| v.as_f64()),
        });
    }
    Ok(out)
}

/// Resolves a local `$ref` such as `#/$defs/OutputFormat` against the root.
fn resolve_ref_obj<'a>(
    root_obj: &'a Map<String, Value>,
    obj: &'a Map<String, Value>,
) -> Option<&'a Map<String, Value>> {
    match obj.get("$ref") {
        Some(Value::String(r)) => {
            let path = r.strip_prefix("#/")?;
            let mut cur: &Map<String, Value> = root_obj;
            for raw_seg in path.split('/') {
                // JSON Pointer unescape (~1 => /, ~0 => ~)
                let seg = raw_seg.replace("~1", "/").replace("~0", "~");
                cur = cur.get(&seg)?.as_object()?;
            }
            Some(cur)
        }
        _ => Some(obj),
    }
}

fn kind_of(s: &str) -> Option<FieldKind> {
    match s {
        "string" => Some(FieldKind::String),
        "integer" => Some(FieldKind::Integer),
        _ => None,
    }
}

fn detect_field_kind(ty: Option<&Value>) -> Option<(FieldKind, bool)> {
    match ty {
        Some(Value::String(s)) => kind_of(s).map(|k| (k, false)),
        Some(Value::Array(arr)) => {
            // Option<T> comes out as ["integer", "null"]
            let names: Vec<&str> = arr.iter().filter_map(|v| v.as_str()).collect();
            let nullable = names.contains(&"null");
            names.into_iter().find_map(kind_of).map(|k| (k, nullable))
        }
        _ => None,
    }
}
