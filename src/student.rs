use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Stable, globally unique student identity.
///
/// Attendance is keyed by this token everywhere. Display fields like the
/// student's name may be edited independently of attendance history, so they
/// never key anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(Uuid);

impl StudentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for StudentId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for StudentId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Immutable student value: a stable identity plus display fields.
///
/// Editing a profile means building a new `Student` with the same id; the
/// identity survives re-creation so attendance history stays attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    id: StudentId,
    name: String,
}

impl Student {
    /// New student with a freshly generated identity.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: StudentId::new(),
            name: name.into(),
        }
    }

    /// Rebuilds a student under an existing identity, e.g. after a profile
    /// edit or when restoring from storage.
    pub fn with_id(id: StudentId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    pub fn id(&self) -> StudentId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
