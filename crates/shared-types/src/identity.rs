use serde::{Deserialize, Serialize};
use std::fmt;

/// Display name used when a sign-in carries no name.
pub const DEFAULT_DISPLAY_NAME: &str = "User";

/// Platform role governing navigation and dashboard choice.
///
/// The enumeration is closed: there is no "unknown" role. Parsing an
/// unrecognized value yields `None` and callers treat it as no session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Teacher,
    #[default]
    Student,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Teacher, Role::Student];

    /// Lowercase form used in the persisted session record.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Teacher => "teacher",
            Role::Student => "student",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "teacher" => Some(Role::Teacher),
            "student" => Some(Role::Student),
            _ => None,
        }
    }

    /// Human-readable label shown in the header.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Teacher => "Teacher",
            Role::Student => "Student",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An authenticated principal.
///
/// Fields are private so the name is never blank: values come from
/// [`Identity::new`] or a validated [`SessionRecord`]. Not `Deserialize` for
/// the same reason.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Identity {
    name: String,
    email: String,
    role: Role,
}

impl Identity {
    /// Build an identity, substituting [`DEFAULT_DISPLAY_NAME`] for a blank name.
    pub fn new(name: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        let name = name.into();
        let name = if name.trim().is_empty() {
            DEFAULT_DISPLAY_NAME.to_string()
        } else {
            name.trim().to_string()
        };
        Self {
            name,
            email: email.into(),
            role,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Uppercase first character of the display name, for the avatar.
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| "U".to_string())
    }
}

/// The persisted `"user"` record exactly as stored.
///
/// Kept separate from [`Identity`] so a record with an unknown role or an
/// empty name can be read and then rejected instead of failing to parse.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionRecord {
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub role: String,
}

impl From<&Identity> for SessionRecord {
    fn from(identity: &Identity) -> Self {
        Self {
            name: identity.name.clone(),
            email: identity.email.clone(),
            role: identity.role.as_str().to_string(),
        }
    }
}

/// Why a persisted record could not become an [`Identity`].
#[derive(Debug, Clone, PartialEq)]
pub enum RecordRejection {
    EmptyName,
    UnknownRole(String),
}

impl fmt::Display for RecordRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordRejection::EmptyName => write!(f, "record has an empty name"),
            RecordRejection::UnknownRole(role) => write!(f, "record has unknown role {role:?}"),
        }
    }
}

impl TryFrom<SessionRecord> for Identity {
    type Error = RecordRejection;

    fn try_from(record: SessionRecord) -> Result<Self, Self::Error> {
        if record.name.trim().is_empty() {
            return Err(RecordRejection::EmptyName);
        }
        let role = Role::parse(&record.role)
            .ok_or_else(|| RecordRejection::UnknownRole(record.role.clone()))?;
        Ok(Identity {
            name: record.name.trim().to_string(),
            email: record.email,
            role,
        })
    }
}

/// Either nobody is signed in, or exactly one identity is.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Session {
    #[default]
    Absent,
    Present(Identity),
}

impl Session {
    pub fn is_present(&self) -> bool {
        matches!(self, Session::Present(_))
    }

    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Session::Present(identity) => Some(identity),
            Session::Absent => None,
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.identity().map(Identity::role)
    }
}

impl From<Option<Identity>> for Session {
    fn from(identity: Option<Identity>) -> Self {
        match identity {
            Some(identity) => Session::Present(identity),
            None => Session::Absent,
        }
    }
}
