//! Branded ID newtypes.
//!
//! Tasks and categories each get a distinct ID type wrapping a `String`.
//! Generated IDs carry an entity prefix followed by a UUID v7, so they are
//! unique for the life of the process. Seed data
//! may use any string (the mock seeds use short numeric ids).

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

macro_rules! branded_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Prefix used for generated IDs of this kind.
            pub const PREFIX: &'static str = $prefix;

            /// Generate a fresh ID (`<prefix>-<uuid v7>`).
            #[must_use]
            pub fn generate() -> Self {
                Self(format!("{}-{}", Self::PREFIX, Uuid::now_v7()))
            }

            /// Return the inner string as a slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume self and return the inner `String`.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl std::ops::Deref for $name {
            type Target = str;
            fn deref(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_owned())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

branded_id! {
    /// Identifier of a task in the task store.
    TaskId, "task"
}

branded_id! {
    /// Identifier of a category in the category store.
    CategoryId, "cat"
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn generated_task_id_is_prefixed_uuid_v7() {
        let id = TaskId::generate();
        let raw = id.as_str().strip_prefix("task-").expect("task prefix");
        let parsed = Uuid::parse_str(raw).expect("should be valid UUID");
        assert_eq!(parsed.get_version(), Some(uuid::Version::SortRand));
    }

    #[test]
    fn generated_category_id_is_prefixed() {
        let id = CategoryId::generate();
        assert!(id.as_str().starts_with("cat-"));
    }

    #[test]
    fn generated_ids_are_unique() {
        let ids: HashSet<TaskId> = (0..1000).map(|_| TaskId::generate()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn seed_style_ids_are_accepted() {
        let id = TaskId::from("1");
        assert_eq!(id.as_str(), "1");
        assert_eq!(format!("{id}"), "1");
    }

    #[test]
    fn deref_to_str() {
        let id = CategoryId::from("work");
        let s: &str = &id;
        assert_eq!(s, "work");
    }

    #[test]
    fn into_string() {
        let id = TaskId::from("convert");
        let s: String = id.into();
        assert_eq!(s, "convert");
    }

    #[test]
    fn serde_is_transparent() {
        let id = TaskId::from("42");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"42\"");
        let back: TaskId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
