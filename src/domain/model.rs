use serde::{Deserialize, Serialize};
use std::fmt;

/// Most components a reference is split into, counted from the right:
/// type name, module, directory, and whatever prefix is left over.
pub const MAX_REFERENCE_COMPONENTS: usize = 4;

/// A configured transformer location, e.g. `solution_2.data_etl.datasource_a.DatasourceA`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeReference {
    /// Namespace path segments, left to right. The first one may itself
    /// contain dots when the reference is deeper than four components.
    pub segments: Vec<String>,
    pub type_name: String,
}

impl TypeReference {
    /// Splits `value` from the right into at most four components. Returns
    /// the reason as `Err` when there is no separable type name or when a
    /// component is empty.
    pub fn parse(value: &str) -> std::result::Result<Self, String> {
        let mut parts: Vec<&str> = value.rsplitn(MAX_REFERENCE_COMPONENTS, '.').collect();
        if parts.len() < 2 {
            return Err("expected at least two dot-delimited components".to_string());
        }
        if parts.iter().any(|part| part.trim().is_empty()) {
            return Err("empty component".to_string());
        }
        // prefix segments can still hide empty pieces, e.g. `a..b.c.D`
        if parts[parts.len() - 1]
            .split('.')
            .any(|piece| piece.trim().is_empty())
        {
            return Err("empty component".to_string());
        }

        parts.reverse();
        let type_name = parts.pop().map(str::to_string).unwrap_or_default();
        Ok(Self {
            segments: parts.into_iter().map(str::to_string).collect(),
            type_name,
        })
    }

    pub fn namespace_path(&self) -> String {
        self.segments.join(".")
    }

    /// The submodule holding the type (second-to-last component).
    pub fn module_segment(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or_default()
    }

    pub fn directory_segment(&self) -> Option<&str> {
        let len = self.segments.len();
        if len >= 2 {
            Some(self.segments[len - 2].as_str())
        } else {
            None
        }
    }

    pub fn prefix(&self) -> Option<&str> {
        if self.segments.len() >= 3 {
            Some(self.segments[0].as_str())
        } else {
            None
        }
    }
}

impl fmt::Display for TypeReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.namespace_path(), self.type_name)
    }
}
