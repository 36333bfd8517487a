use anyhow::{Context, Result};
use schemars::{JsonSchema, Schema, schema_for};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Integer,
    Boolean,
    /// A unit enum; holds the serialized variant names.
    Choice(Vec<String>),
}

#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: String,
    pub title: String,
    pub description: Option<String>,
    pub required: bool,
    pub nullable: bool,
    pub kind: FieldKind,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// Whole schema for T, definitions included.
pub fn schema_of<T: JsonSchema>() -> Schema {
    schema_for!(T)
}

pub fn schema_json<T: JsonSchema>() -> Result<String> {
    Ok(serde_json::to_string_pretty(&schema_of::<T>())?)
}

/// One spec per property of a struct schema, in declaration order.
///
/// Properties whose kind cannot be prompted for as a scalar (tagged enums,
/// nested objects) are left out; callers handle those themselves.
pub fn field_specs(root: &Schema) -> Result<Vec<FieldSpec>> {
    let root_obj = root.as_object().context("root schema is not an object")?;
    let props = root_obj
        .get("properties")
        .and_then(|v| v.as_object())
        .context("schema has no properties")?;

    let required: Vec<&str> = root_obj
        .get("required")
        .and_then(|v| v.as_array())
        .map(|a| a.iter().filter_map(|v| v.as_str()).collect())
        .unwrap_or_default();

    let mut out = Vec::new();
    for (name, field_schema) in props {
        let outer = field_schema
            .as_object()
            .context("field schema not object")?;
        let inner = resolve_ref_obj(root_obj, outer).unwrap_or(outer);

        let text = |key: &str| {
            outer
                .get(key)
                .or_else(|| inner.get(key))
                .and_then(|v| v.as_str())
                .map(str::to_string)
        };

        let Some(kind) = detect_field_kind(inner) else {
            continue;
        };

        let bound = |key: &str, exclusive: &str| {
            inner
                .get(key)
                .or_else(|| inner.get(exclusive))
                .and_then(|v| v.as_f64())
        };

        out.push(FieldSpec {
            name: name.clone(),
            title: text("title").unwrap_or_else(|| name.clone()),
            description: text("description"),
            required: required.contains(&name.as_str()),
            nullable: is_nullable(inner.get("type")),
            kind,
            min: bound("minimum", "exclusiveMinimum"),
            max: bound("maximum", "exclusiveMaximum"),
        });
    }
    Ok(out)
}

/// Resolve a local $ref like "#/$defs/PartitionScheme" against the root
/// object, looking through a single-element `allOf` wrapper.
/// Returns None if it can't be resolved.
fn resolve_ref_obj<'a>(
    root_obj: &'a Map<String, Value>,
    obj: &'a Map<String, Value>,
) -> Option<&'a Map<String, Value>> {
    let reference = obj.get("$ref").or_else(|| {
        obj.get("allOf")
            .and_then(|v| v.as_array())
            .filter(|a| a.len() == 1)
            .and_then(|a| a[0].as_object())
            .and_then(|o| o.get("$ref"))
    });
    match reference {
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
        _ => None,
    }
}

fn detect_field_kind(obj: &Map<String, Value>) -> Option<FieldKind> {
    if let Some(values) = choice_values(obj) {
        return Some(FieldKind::Choice(values));
    }
    scalar_types(obj.get("type")).find_map(|s| match s {
        "string" => Some(FieldKind::String),
        "integer" => Some(FieldKind::Integer),
        "boolean" => Some(FieldKind::Boolean),
        _ => None,
    })
}

/// Variant names of a unit enum, written either as `enum: [..]` or as
/// `oneOf`/`anyOf` branches carrying `const` or single-value `enum`.
fn choice_values(obj: &Map<String, Value>) -> Option<Vec<String>> {
    if let Some(arr) = obj.get("enum").and_then(|v| v.as_array()) {
        return arr.iter().map(|v| v.as_str().map(str::to_string)).collect();
    }
    let alts = obj
        .get("oneOf")
        .or_else(|| obj.get("anyOf"))
        .and_then(|v| v.as_array())?;

    let mut values = Vec::with_capacity(alts.len());
    for branch in alts {
        let bobj = branch.as_object()?;
        let single = bobj.get("const").or_else(|| {
            bobj.get("enum")
                .and_then(|v| v.as_array())
                .filter(|a| a.len() == 1)
                .map(|a| &a[0])
        })?;
        values.push(single.as_str()?.to_string());
    }
    Some(values)
}

fn scalar_types(ty: Option<&Value>) -> Box<dyn Iterator<Item = &str> + '_> {
    match ty {
        Some(Value::String(s)) => Box::new(std::iter::once(s.as_str())),
        // unions like ["string","null"] for Option<T>
        Some(Value::Array(arr)) => Box::new(arr.iter().filter_map(|v| v.as_str())),
        _ => Box::new(std::iter::empty()),
    }
}

fn is_nullable(ty: Option<&Value>) -> bool {
    scalar_types(ty).any(|s| s == "null")
}
