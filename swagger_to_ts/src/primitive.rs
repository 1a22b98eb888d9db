//! Schema primitive token -> TypeScript primitive.

use std::fmt;

use tracing::warn;

/// The TypeScript primitives a schema token can map to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TsPrimitive {
    String,
    Number,
    Boolean,
    /// Fallback for absent or unrecognized tokens.
    Any,
}

impl TsPrimitive {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Any => "any",
        }
    }
}

impl fmt::Display for TsPrimitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Table lookup only; `None` for tokens outside the table.
#[must_use]
pub fn lookup_primitive(token: &str) -> Option<TsPrimitive> {
    match token {
        "string" => Some(TsPrimitive::String),
        "integer" | "double" | "float" => Some(TsPrimitive::Number),
        "boolean" => Some(TsPrimitive::Boolean),
        _ => None,
    }
}

/// Resolve a schema type token. Never fails: anything unrecognized (including
/// an absent token) becomes [`TsPrimitive::Any`] and is logged.
#[must_use]
pub fn resolve_primitive(token: Option<&str>) -> TsPrimitive {
    let Some(token) = token else {
        warn!("missing type token, falling back to `any`");
        return TsPrimitive::Any;
    };
    lookup_primitive(token).unwrap_or_else(|| {
        warn!(token, "unmapped property type, falling back to `any`");
        TsPrimitive::Any
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    fn resolve_primitive_table() {
        let cases: [(&str, TsPrimitive); 5] = [
            ("string", TsPrimitive::String),
            ("integer", TsPrimitive::Number),
            ("double", TsPrimitive::Number),
            ("float", TsPrimitive::Number),
            ("boolean", TsPrimitive::Boolean),
        ];
        for (token, expected) in cases {
            assert_eq!(expected, resolve_primitive(Some(token)), "token {token}");
        }
    }

    #[test]
    fn resolve_primitive_unknown_falls_back_to_any() {
        for token in ["number", "date-time", "file", "object", "array", "String", ""] {
            assert_eq!(TsPrimitive::Any, resolve_primitive(Some(token)), "token {token:?}");
        }
        assert_eq!(TsPrimitive::Any, resolve_primitive(None));
    }

    #[test]
    #[traced_test]
    fn resolve_primitive_unknown_logs_warning() {
        let actual: TsPrimitive = resolve_primitive(Some("uuid"));
        assert_eq!(TsPrimitive::Any, actual);
        assert!(logs_contain("unmapped property type"));
        assert!(logs_contain("uuid"));
    }

    #[test]
    fn display_matches_typescript_keyword() {
        assert_eq!("number", TsPrimitive::Number.to_string());
        assert_eq!("any", TsPrimitive::Any.to_string());
    }
}
