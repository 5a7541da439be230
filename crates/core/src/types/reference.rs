//! Tagged union for entity references that may or may not be expanded.
//!
//! An order stores bare customer and product identifiers. On read, the
//! reference resolver expands each identifier into a partial display view of
//! the referenced entity - unless the target has since been deleted, in
//! which case the reference stays unresolved and the caller must handle it
//! (render "Unknown Customer" rather than fail the whole request).

use serde::Serialize;

/// A reference to another entity, either as a bare identifier or expanded
/// into a display view.
///
/// Callers must pattern-match; an unresolved reference cannot be mistaken
/// for a resolved one. Serialization is untagged: an unresolved reference is
/// the identifier string, a resolved one is the view object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Reference<I, T> {
    /// The bare identifier; the target was not (or could not be) expanded.
    Unresolved(I),
    /// The expanded display view of the target.
    Resolved(T),
}

impl<I, T> Reference<I, T> {
    /// Returns the resolved view, if this reference was expanded.
    #[must_use]
    pub const fn as_resolved(&self) -> Option<&T> {
        match self {
            Self::Resolved(t) => Some(t),
            Self::Unresolved(_) => None,
        }
    }

    /// Whether this reference was expanded.
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    /// Build a reference from an optional expansion, falling back to the
    /// bare identifier when the target is missing.
    pub fn from_lookup(id: I, resolved: Option<T>) -> Self {
        resolved.map_or(Self::Unresolved(id), Self::Resolved)
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    use super::*;

    #[derive(Debug, PartialEq, Eq, Serialize)]
    struct Summary {
        name: &'static str,
    }

    #[test]
    fn unresolved_serializes_as_bare_id() {
        let r: Reference<&str, Summary> = Reference::Unresolved("507f1f77bcf86cd799439011");
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json, serde_json::json!("507f1f77bcf86cd799439011"));
    }

    #[test]
    fn resolved_serializes_as_object() {
        let r: Reference<&str, Summary> = Reference::Resolved(Summary { name: "Jane" });
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "Jane" }));
    }

    #[test]
    fn from_lookup_falls_back_to_id() {
        let missing: Reference<&str, Summary> = Reference::from_lookup("abc", None);
        assert!(!missing.is_resolved());
        assert_eq!(missing.as_resolved(), None);

        let found = Reference::from_lookup("abc", Some(Summary { name: "Jane" }));
        assert_eq!(found.as_resolved(), Some(&Summary { name: "Jane" }));
    }
}
