//! Resource descriptors.
//!
//! Each API resource kind is described by a static descriptor: a URL path
//! template, the set of operations the remote API permits for it, and the
//! type its responses deserialize into. The [`crate::client::GitLabClient`]
//! dispatcher consults the descriptor before every call.

use crate::errors::{GitLabError, GitLabResult};
use serde::de::DeserializeOwned;
use std::fmt;

/// One of the five CRUD operations the dispatcher can perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Fetch a single resource by id.
    Get,
    /// Fetch all resources of a kind.
    List,
    /// Create a resource.
    Create,
    /// Update a resource by id.
    Update,
    /// Delete a resource by id.
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::List => write!(f, "list"),
            Self::Create => write!(f, "create"),
            Self::Update => write!(f, "update"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// The set of operations a resource kind permits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operations {
    get: bool,
    list: bool,
    create: bool,
    update: bool,
    delete: bool,
}

impl Operations {
    /// All five operations permitted.
    pub const ALL: Self = Self {
        get: true,
        list: true,
        create: true,
        update: true,
        delete: true,
    };

    /// No operations permitted.
    pub const NONE: Self = Self {
        get: false,
        list: false,
        create: false,
        update: false,
        delete: false,
    };

    /// Permits get.
    pub const fn with_get(self) -> Self {
        Self { get: true, ..self }
    }

    /// Permits list.
    pub const fn with_list(self) -> Self {
        Self { list: true, ..self }
    }

    /// Permits create.
    pub const fn with_create(self) -> Self {
        Self {
            create: true,
            ..self
        }
    }

    /// Permits update.
    pub const fn with_update(self) -> Self {
        Self {
            update: true,
            ..self
        }
    }

    /// Permits delete.
    pub const fn with_delete(self) -> Self {
        Self {
            delete: true,
            ..self
        }
    }

    /// Forbids get.
    pub const fn without_get(self) -> Self {
        Self { get: false, ..self }
    }

    /// Forbids list.
    pub const fn without_list(self) -> Self {
        Self { list: false, ..self }
    }

    /// Forbids create.
    pub const fn without_create(self) -> Self {
        Self {
            create: false,
            ..self
        }
    }

    /// Forbids update.
    pub const fn without_update(self) -> Self {
        Self {
            update: false,
            ..self
        }
    }

    /// Forbids delete.
    pub const fn without_delete(self) -> Self {
        Self {
            delete: false,
            ..self
        }
    }

    /// Returns true if the operation is permitted.
    pub const fn supports(self, operation: Operation) -> bool {
        match operation {
            Operation::Get => self.get,
            Operation::List => self.list,
            Operation::Create => self.create,
            Operation::Update => self.update,
            Operation::Delete => self.delete,
        }
    }
}

impl Default for Operations {
    fn default() -> Self {
        Self::ALL
    }
}

/// Named values for a call: URL template placeholders first, anything left
/// over becomes extra query parameters.
///
/// Insertion order is preserved. The relative order of leftover query
/// parameters on the wire follows it but is not part of the contract.
#[derive(Debug, Clone, Default)]
pub struct Params(Vec<(String, String)>);

impl Params {
    /// Creates an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named value.
    pub fn set(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.0.push((name.into(), value.to_string()));
        self
    }

    /// Returns true if no parameters are set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Looks up a value by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Iterates over name/value pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

/// Static descriptor for one API resource kind.
///
/// Implemented by the types in [`crate::types`]. `PATH` is a path template
/// relative to the API root with `{name}` placeholders; an empty `PATH`
/// marks the kind as not configured and every operation on it fails before
/// any network I/O.
pub trait Resource {
    /// Kind name used in diagnostics.
    const NAME: &'static str;

    /// URL path template, e.g. `/projects/{project_id}/hooks`.
    const PATH: &'static str;

    /// Operations the remote API permits for this kind.
    const OPERATIONS: Operations = Operations::ALL;

    /// The type responses deserialize into. `Self` for most kinds; a
    /// different type where the API returns another object shape (e.g.
    /// project members are plain users).
    type Item: DeserializeOwned;
}

/// Expands `{name}` placeholders in a path template from `params`.
///
/// Returns the expanded path and the leftover parameters that were not
/// consumed by a placeholder, in insertion order. Fails with a
/// missing-parameter error when a placeholder has no value.
pub fn expand_path(template: &str, params: &Params) -> GitLabResult<(String, Params)> {
    let mut path = String::with_capacity(template.len());
    let mut consumed: Vec<String> = Vec::new();

    let mut chars = template.chars();
    while let Some(c) = chars.next() {
        if c != '{' {
            path.push(c);
            continue;
        }

        let mut name = String::new();
        let mut closed = false;
        for c in chars.by_ref() {
            if c == '}' {
                closed = true;
                break;
            }
            name.push(c);
        }
        if !closed {
            return Err(GitLabError::configuration(format!(
                "unterminated placeholder in URL template '{}'",
                template
            )));
        }

        match params.get(&name) {
            Some(value) => path.push_str(value),
            None => return Err(GitLabError::missing_parameter(&name)),
        }
        if !consumed.contains(&name) {
            consumed.push(name);
        }
    }

    let leftover = params
        .iter()
        .filter(|(n, _)| !consumed.iter().any(|c| c == n))
        .fold(Params::new(), |acc, (n, v)| acc.set(n, v));

    Ok((path, leftover))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_operations_combinators() {
        let ops = Operations::ALL.without_update().without_delete();
        assert!(ops.supports(Operation::Get));
        assert!(ops.supports(Operation::List));
        assert!(ops.supports(Operation::Create));
        assert!(!ops.supports(Operation::Update));
        assert!(!ops.supports(Operation::Delete));

        let ops = Operations::NONE.with_list();
        assert!(ops.supports(Operation::List));
        assert!(!ops.supports(Operation::Get));
    }

    #[test]
    fn test_params_order_and_lookup() {
        let params = Params::new().set("b", 2).set("a", "one");
        let pairs: Vec<_> = params.iter().collect();
        assert_eq!(pairs, vec![("b", "2"), ("a", "one")]);
        assert_eq!(params.get("a"), Some("one"));
        assert_eq!(params.get("missing"), None);
    }

    #[test]
    fn test_expand_path_no_placeholders() {
        let params = Params::new().set("page", 2);
        let (path, leftover) = expand_path("/users", &params).unwrap();
        assert_eq!(path, "/users");
        assert_eq!(leftover.get("page"), Some("2"));
    }

    #[test]
    fn test_expand_path_substitutes_and_consumes() {
        let params = Params::new().set("project_id", 7).set("state", "closed");
        let (path, leftover) =
            expand_path("/projects/{project_id}/hooks", &params).unwrap();
        assert_eq!(path, "/projects/7/hooks");
        assert_eq!(leftover.get("project_id"), None);
        assert_eq!(leftover.get("state"), Some("closed"));
    }

    #[test]
    fn test_expand_path_missing_placeholder() {
        let err = expand_path("/projects/{project_id}/hooks", &Params::new()).unwrap_err();
        assert_eq!(err.kind(), crate::errors::GitLabErrorKind::MissingParameter);
        assert!(format!("{}", err).contains("project_id"));
    }

    #[test]
    fn test_expand_path_repeated_placeholder() {
        let params = Params::new().set("id", 3);
        let (path, leftover) = expand_path("/a/{id}/b/{id}", &params).unwrap();
        assert_eq!(path, "/a/3/b/3");
        assert!(leftover.is_empty());
    }

    #[test]
    fn test_expand_path_unterminated_placeholder() {
        let err = expand_path("/projects/{project_id", &Params::new()).unwrap_err();
        assert_eq!(
            err.kind(),
            crate::errors::GitLabErrorKind::InvalidConfiguration
        );
    }
}
