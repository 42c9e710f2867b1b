use std::path::Path;

use jsonschema::Validator;
use serde_json::Value;

use crate::config::SchemaConfig;
use crate::error::{Result, SchemaError};
use crate::loader::load_schema;
use crate::path::InstancePath;
use crate::strict::close_object_schemas;

/// One schema violation inside a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub path: InstancePath,
    pub message: String,
}

impl Violation {
    pub fn new(path: InstancePath, message: impl Into<String>) -> Self {
        Self {
            path,
            message: message.into(),
        }
    }

    /// A violation located at the record root.
    pub fn at_root(message: impl Into<String>) -> Self {
        Self::new(InstancePath::root(), message)
    }
}

/// Anything that can check a decoded record and list what is wrong with it.
pub trait RecordValidator {
    /// Every violation in `record`. Empty means valid.
    fn violations(&self, record: &Value) -> Vec<Violation>;
}

/// Stable ascending sort by structural path.
///
/// Violations sharing a path keep the order they were reported in.
pub fn sort_violations(violations: &mut [Violation]) {
    violations.sort_by(|a, b| a.path.cmp(&b.path));
}

/// Draft 2020-12 validator compiled from one schema document.
pub struct SchemaValidator {
    inner: Validator,
}

impl SchemaValidator {
    /// Compile `schema`, applying strict mode first when configured.
    pub fn from_value(schema: &Value, config: &SchemaConfig) -> Result<Self> {
        let compiled = if config.strict_mode {
            let mut closed = schema.clone();
            close_object_schemas(&mut closed);
            jsonschema::draft202012::new(&closed)
        } else {
            jsonschema::draft202012::new(schema)
        };

        let inner = compiled.map_err(|err| SchemaError::CompileFailed(err.to_string()))?;
        Ok(Self { inner })
    }

    /// Compile a schema from a JSON string.
    pub fn from_json(schema_json: &str, config: &SchemaConfig) -> Result<Self> {
        let schema: Value = serde_json::from_str(schema_json)?;
        Self::from_value(&schema, config)
    }

    /// Load the schema file at `path` and compile it.
    pub fn from_path(path: &Path, config: &SchemaConfig) -> Result<Self> {
        let schema = load_schema(path, config)?;
        let validator = Self::from_value(&schema, config)?;
        tracing::info!(
            path = %path.display(),
            strict = config.strict_mode,
            "schema compiled"
        );
        Ok(validator)
    }

    pub fn is_valid(&self, record: &Value) -> bool {
        self.inner.is_valid(record)
    }
}

impl RecordValidator for SchemaValidator {
    fn violations(&self, record: &Value) -> Vec<Violation> {
        let mut violations: Vec<Violation> = self
            .inner
            .iter_errors(record)
            .map(|err| {
                let pointer = err.instance_path().to_string();
                Violation::new(InstancePath::from_pointer(&pointer, record), err.to_string())
            })
            .collect();
        sort_violations(&mut violations);
        violations
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::path::PathSegment;

    const USER_SCHEMA: &str = r#"{
        "type": "object",
        "properties": {
            "email": { "type": "string" },
            "user": {
                "type": "object",
                "properties": {
                    "age": { "type": "integer", "minimum": 0 },
                    "tags": { "type": "array", "items": { "type": "string" } }
                }
            }
        },
        "required": ["email"]
    }"#;

    fn validator(schema: &str) -> SchemaValidator {
        SchemaValidator::from_json(schema, &SchemaConfig::default()).unwrap()
    }

    fn rendered(violations: &[Violation]) -> Vec<String> {
        violations.iter().map(|v| v.path.to_string()).collect()
    }

    #[test]
    fn valid_record_has_no_violations() {
        let v = validator(USER_SCHEMA);
        let record = json!({"email": "a@b.c", "user": {"age": 3, "tags": ["x"]}});
        assert!(v.is_valid(&record));
        assert!(v.violations(&record).is_empty());
    }

    #[test]
    fn collects_all_violations_sorted_by_path() {
        let v = validator(USER_SCHEMA);
        let record = json!({"user": {"tags": ["ok", 7], "age": -1}});

        let violations = v.violations(&record);
        assert_eq!(
            rendered(&violations),
            vec!["<root>", "user/age", "user/tags/1"]
        );
        assert!(violations[0].message.contains("email"));
        assert!(violations[1].message.contains("minimum"));
        assert_eq!(
            violations[2].path.segments(),
            &[
                PathSegment::Key("user".to_string()),
                PathSegment::Key("tags".to_string()),
                PathSegment::Index(1)
            ]
        );
    }

    #[test]
    fn missing_required_property_is_reported_at_root() {
        let v = validator(r#"{"type":"object","required":["id"]}"#);
        let violations = v.violations(&json!({}));

        assert_eq!(violations.len(), 1);
        assert!(violations[0].path.is_root());
        assert!(violations[0].message.contains("id"));
        assert!(violations[0].message.contains("required"));
    }

    #[test]
    fn invalid_schema_fails_compile() {
        let result = SchemaValidator::from_json(
            r#"{"type":"definitely-not-a-type"}"#,
            &SchemaConfig::default(),
        );
        assert!(matches!(result, Err(SchemaError::CompileFailed(_))));
    }

    #[test]
    fn non_json_schema_string_fails() {
        let result = SchemaValidator::from_json("{not json", &SchemaConfig::default());
        assert!(matches!(result, Err(SchemaError::InvalidJson(_))));
    }

    #[test]
    fn strict_mode_rejects_undeclared_properties() {
        let strict = SchemaConfig {
            strict_mode: true,
            ..SchemaConfig::default()
        };
        let permissive = validator(USER_SCHEMA);
        let strict = SchemaValidator::from_json(USER_SCHEMA, &strict).unwrap();

        let record = json!({"email": "a@b.c", "user": {"age": 1, "extra": true}});
        assert!(permissive.violations(&record).is_empty());

        let violations = strict.violations(&record);
        assert_eq!(rendered(&violations), vec!["user"]);
    }

    #[test]
    fn sort_is_stable_for_equal_paths() {
        let mut violations = vec![
            Violation::new(
                InstancePath::new(vec![PathSegment::Key("b".to_string())]),
                "second",
            ),
            Violation::at_root("first at root"),
            Violation::at_root("second at root"),
        ];
        sort_violations(&mut violations);

        let messages: Vec<&str> = violations.iter().map(|v| v.message.as_str()).collect();
        assert_eq!(messages, vec!["first at root", "second at root", "second"]);
    }
}
