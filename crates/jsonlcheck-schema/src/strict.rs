//! Strict mode: close every object schema that leaves
//! `additionalProperties` unspecified.

use serde_json::{Map, Value};

/// Keywords whose value is an object of named subschemas.
const SCHEMA_MAPS: [&str; 5] = [
    "properties",
    "patternProperties",
    "dependentSchemas",
    "$defs",
    "definitions",
];

/// Keywords whose value is a single subschema.
const SCHEMA_SINGLES: [&str; 11] = [
    "propertyNames",
    "additionalProperties",
    "unevaluatedProperties",
    "items",
    "contains",
    "additionalItems",
    "unevaluatedItems",
    "not",
    "if",
    "then",
    "else",
];

/// Keywords whose value is an array of subschemas.
const SCHEMA_LISTS: [&str; 4] = ["prefixItems", "allOf", "anyOf", "oneOf"];

/// Keywords that imply an object schema when `type` is absent.
const OBJECT_KEYWORDS: [&str; 8] = [
    "properties",
    "patternProperties",
    "additionalProperties",
    "unevaluatedProperties",
    "required",
    "dependentRequired",
    "dependentSchemas",
    "propertyNames",
];

/// Rewrite `schema` in place so undeclared properties are rejected.
pub fn close_object_schemas(schema: &mut Value) {
    match schema {
        Value::Object(map) => {
            if describes_object(map) && !map.contains_key("additionalProperties") {
                map.insert("additionalProperties".to_string(), Value::Bool(false));
            }
            for (keyword, child) in map.iter_mut() {
                visit_keyword(keyword, child);
            }
        }
        Value::Array(items) => items.iter_mut().for_each(close_object_schemas),
        _ => {}
    }
}

fn visit_keyword(keyword: &str, child: &mut Value) {
    if SCHEMA_MAPS.contains(&keyword) {
        if let Value::Object(named) = child {
            named.values_mut().for_each(close_object_schemas);
        }
    } else if SCHEMA_SINGLES.contains(&keyword) {
        close_object_schemas(child);
    } else if SCHEMA_LISTS.contains(&keyword) {
        if let Value::Array(items) = child {
            items.iter_mut().for_each(close_object_schemas);
        }
    }
}

fn describes_object(map: &Map<String, Value>) -> bool {
    match map.get("type") {
        Some(Value::String(kind)) => kind == "object",
        Some(Value::Array(kinds)) => kinds.iter().any(|k| k.as_str() == Some("object")),
        _ => OBJECT_KEYWORDS.iter().any(|k| map.contains_key(*k)),
    }
}
