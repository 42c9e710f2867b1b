use std::cmp::Ordering;
use std::fmt;

use serde_json::Value;

/// Rendering of the empty path.
pub const ROOT: &str = "<root>";

/// One step into a JSON document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Array element.
    Index(usize),
    /// Object member.
    Key(String),
}

impl Ord for PathSegment {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Index(a), Self::Index(b)) => a.cmp(b),
            (Self::Key(a), Self::Key(b)) => a.cmp(b),
            (Self::Index(_), Self::Key(_)) => Ordering::Less,
            (Self::Key(_), Self::Index(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for PathSegment {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "{index}"),
            Self::Key(key) => f.write_str(key),
        }
    }
}

/// Location of a value inside a record, rooted at [`ROOT`].
///
/// Paths order lexicographically by segment, so the root sorts before
/// everything and a prefix sorts before its extensions.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InstancePath(Vec<PathSegment>);

impl InstancePath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn new(segments: Vec<PathSegment>) -> Self {
        Self(segments)
    }

    /// Build a path from a JSON Pointer (`/user/tags/0`) resolved against
    /// `record`.
    ///
    /// A numeric token is an [`PathSegment::Index`] only where the pointer
    /// steps into an array; under an object it stays a key. Tokens that walk
    /// past the end of the record are taken as keys.
    pub fn from_pointer(pointer: &str, record: &Value) -> Self {
        let Some(rest) = pointer.strip_prefix('/') else {
            return Self::root();
        };

        let mut current = Some(record);
        let mut segments = Vec::new();
        for raw in rest.split('/') {
            let token = unescape_token(raw);
            let segment = match current {
                Some(Value::Array(items)) => match token.parse::<usize>() {
                    Ok(index) => {
                        current = items.get(index);
                        PathSegment::Index(index)
                    }
                    Err(_) => {
                        current = None;
                        PathSegment::Key(token)
                    }
                },
                Some(Value::Object(map)) => {
                    current = map.get(&token);
                    PathSegment::Key(token)
                }
                _ => {
                    current = None;
                    PathSegment::Key(token)
                }
            };
            segments.push(segment);
        }

        Self(segments)
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }
}

impl fmt::Display for InstancePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str(ROOT);
        }
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

// RFC 6901: "~1" before "~0".
fn unescape_token(raw: &str) -> String {
    raw.replace("~1", "/").replace("~0", "~")
}
