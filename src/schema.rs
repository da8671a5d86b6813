//! JSON Schema flattening for downstream extraction prompts.
//!
//! A full JSON Schema buries the interesting structure under `properties`,
//! `$defs`, and `$ref` indirection. [`simplify_schema`] resolves that into
//! plain nested objects: scalar fields become `{"type", "description"}`
//! records and arrays become single-element lists of their item shape.

use serde_json::{Map, Value, json};
use tracing::debug;

/// Simplifies a JSON Schema document.
///
/// Fields whose shape is not understood (no `type`, no resolvable `$ref`)
/// are skipped with a debug log rather than failing the whole document.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use wg_pagemill::schema::simplify_schema;
///
/// let schema = json!({
///     "properties": {
///         "title": {"type": "string", "description": "Page title"}
///     }
/// });
/// assert_eq!(
///     simplify_schema(&schema),
///     json!({"title": {"type": "string", "description": "Page title"}})
/// );
/// ```
pub fn simplify_schema(schema: &Value) -> Value {
    let defs = schema.get("$defs");
    match schema.get("properties").and_then(Value::as_object) {
        Some(properties) => process_properties(properties, defs),
        None => Value::Object(Map::new()),
    }
}

fn process_properties(properties: &Map<String, Value>, defs: Option<&Value>) -> Value {
    let mut result = Map::new();

    for (key, value) in properties {
        if let Some(kind) = value.get("type").and_then(Value::as_str) {
            if kind == "array" {
                match simplify_items(value.get("items"), defs) {
                    Some(item_shape) => {
                        result.insert(key.clone(), Value::Array(vec![item_shape]));
                    }
                    None => {
                        debug!(field = key.as_str(), "skipping array with unresolvable items");
                    }
                }
            } else {
                let description = value
                    .get("description")
                    .and_then(Value::as_str)
                    .unwrap_or_default();
                result.insert(key.clone(), json!({"type": kind, "description": description}));
            }
        } else if let Some(resolved) = resolve_ref(value, defs) {
            result.insert(key.clone(), resolved);
        } else {
            debug!(field = key.as_str(), "skipping field without type or resolvable $ref");
        }
    }

    Value::Object(result)
}

/// Shape of an array's items: a `$ref` resolves to the referenced object's
/// simplified properties, otherwise the item type name is used.
fn simplify_items(items: Option<&Value>, defs: Option<&Value>) -> Option<Value> {
    let items = items?;
    if items.get("$ref").is_some() {
        resolve_ref(items, defs)
    } else {
        items.get("type").cloned()
    }
}

/// Follows a `#/$defs/Name` reference and simplifies the target's
/// properties.
fn resolve_ref(value: &Value, defs: Option<&Value>) -> Option<Value> {
    let reference = value.get("$ref")?.as_str()?;
    let name = reference.rsplit('/').next()?;
    let target = defs?.get(name)?;
    let properties = target.get("properties")?.as_object()?;
    Some(process_properties(properties, defs))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Value {
        json!({
            "properties": {
                "name": {"type": "string", "description": "Product name"},
                "price": {"type": "number"},
                "tags": {"type": "array", "items": {"type": "string"}},
                "offers": {"type": "array", "items": {"$ref": "#/$defs/Offer"}},
                "vendor": {"$ref": "#/$defs/Vendor"}
            },
            "$defs": {
                "Offer": {
                    "properties": {
                        "amount": {"type": "integer", "description": "Cents"}
                    }
                },
                "Vendor": {
                    "properties": {
                        "url": {"type": "string"}
                    }
                }
            }
        })
    }

    #[test]
    fn scalars_keep_type_and_description() {
        let simplified = simplify_schema(&fixture());
        assert_eq!(
            simplified["name"],
            json!({"type": "string", "description": "Product name"})
        );
        assert_eq!(
            simplified["price"],
            json!({"type": "number", "description": ""})
        );
    }

    #[test]
    fn scalar_arrays_become_type_lists() {
        let simplified = simplify_schema(&fixture());
        assert_eq!(simplified["tags"], json!(["string"]));
    }

    #[test]
    fn ref_arrays_resolve_through_defs() {
        let simplified = simplify_schema(&fixture());
        assert_eq!(
            simplified["offers"],
            json!([{"amount": {"type": "integer", "description": "Cents"}}])
        );
    }

    #[test]
    fn direct_refs_resolve_through_defs() {
        let simplified = simplify_schema(&fixture());
        assert_eq!(
            simplified["vendor"],
            json!({"url": {"type": "string", "description": ""}})
        );
    }

    #[test]
    fn schema_without_properties_is_empty() {
        assert_eq!(simplify_schema(&json!({"title": "x"})), json!({}));
    }

    #[test]
    fn unresolvable_ref_is_skipped() {
        let schema = json!({
            "properties": {
                "ghost": {"$ref": "#/$defs/Missing"},
                "real": {"type": "boolean"}
            }
        });
        let simplified = simplify_schema(&schema);
        assert!(simplified.get("ghost").is_none());
        assert!(simplified.get("real").is_some());
    }
}
