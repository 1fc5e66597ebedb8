//! User identity model consumed by the authentication collaborator.
//!
//! This core never creates or mutates users. It reads them so an external
//! authentication layer can resolve a principal by username and check
//! whether an email address is already registered.

use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

/// Validation errors returned by the user value constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    #[error("user id must be a valid UUID")]
    InvalidId,
    #[error("username must not be empty")]
    EmptyUsername,
    #[error("email must not be empty")]
    EmptyEmail,
    #[error("unknown user role: {0}")]
    UnknownRole(String),
}

/// Stable user identifier stored as a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(Uuid);

impl UserId {
    /// Parse a [`UserId`] from its hyphenated text form.
    pub fn new(id: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let raw = id.as_ref();
        if raw.trim() != raw {
            return Err(UserValidationError::InvalidId);
        }
        Uuid::parse_str(raw)
            .map(Self)
            .map_err(|_| UserValidationError::InvalidId)
    }

    /// Wrap an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Login name used as the lookup key.
///
/// Kept verbatim: no trimming and no case folding, so lookups are exact.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    /// Construct a username, rejecting blank input.
    pub fn new(username: impl Into<String>) -> Result<Self, UserValidationError> {
        let username = username.into();
        if username.trim().is_empty() {
            return Err(UserValidationError::EmptyUsername);
        }
        Ok(Self(username))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// Email address as stored. Compared verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Construct an email, rejecting blank input.
    pub fn new(email: impl Into<String>) -> Result<Self, UserValidationError> {
        let email = email.into();
        if email.trim().is_empty() {
            return Err(UserValidationError::EmptyEmail);
        }
        Ok(Self(email))
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// Role granted to a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserRole {
    Student,
    Professor,
    Organizer,
    Admin,
}

impl UserRole {
    /// Storage and wire representation (`STUDENT`, `ADMIN`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Student => "STUDENT",
            Self::Professor => "PROFESSOR",
            Self::Organizer => "ORGANIZER",
            Self::Admin => "ADMIN",
        }
    }
}

impl FromStr for UserRole {
    type Err = UserValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "STUDENT" => Ok(Self::Student),
            "PROFESSOR" => Ok(Self::Professor),
            "ORGANIZER" => Ok(Self::Organizer),
            "ADMIN" => Ok(Self::Admin),
            other => Err(UserValidationError::UnknownRole(other.to_owned())),
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input payload for [`User::new`].
#[derive(Clone)]
pub struct UserDraft {
    pub id: UserId,
    pub name: String,
    pub username: Username,
    pub email: Email,
    pub password_hash: String,
    pub role: UserRole,
}

/// Stored user record.
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    name: String,
    username: Username,
    email: Email,
    password_hash: String,
    role: UserRole,
}

impl User {
    /// Construct a user from its stored fields.
    pub fn new(draft: UserDraft) -> Self {
        let UserDraft {
            id,
            name,
            username,
            email,
            password_hash,
            role,
        } = draft;
        Self {
            id,
            name,
            username,
            email,
            password_hash,
            role,
        }
    }

    /// Stable identifier.
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Full display name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Unique login name.
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Unique email address.
    pub fn email(&self) -> &Email {
        &self.email
    }

    /// Stored credential hash. Never logged.
    pub fn password_hash(&self) -> &str {
        self.password_hash.as_str()
    }

    /// Granted role.
    pub fn role(&self) -> UserRole {
        self.role
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .field("role", &self.role)
            .finish()
    }
}

/// Principal handed to the authentication layer after a username lookup.
///
/// Carries only what credential checking and authorisation need.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthPrincipal {
    user_id: UserId,
    username: Username,
    password_hash: String,
    role: UserRole,
}

impl AuthPrincipal {
    /// Identifier of the resolved user.
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Login name the principal was resolved by.
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Stored credential hash, compared by the authentication layer.
    pub fn password_hash(&self) -> &str {
        self.password_hash.as_str()
    }

    /// Role used for authorisation decisions.
    pub fn role(&self) -> UserRole {
        self.role
    }
}

impl From<User> for AuthPrincipal {
    fn from(user: User) -> Self {
        Self {
            user_id: user.id,
            username: user.username,
            password_hash: user.password_hash,
            role: user.role,
        }
    }
}

impl fmt::Debug for AuthPrincipal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthPrincipal")
            .field("user_id", &self.user_id)
            .field("username", &self.username)
            .field("password_hash", &"<redacted>")
            .field("role", &self.role)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn alice() -> User {
        User::new(UserDraft {
            id: UserId::new("3fa85f64-5717-4562-b3fc-2c963f66afa6").expect("valid id"),
            name: "Alice Santos".to_owned(),
            username: Username::new("alice").expect("valid username"),
            email: Email::new("alice@example.edu").expect("valid email"),
            password_hash: "$2a$10$abcdefghijklmnopqrstuv".to_owned(),
            role: UserRole::Student,
        })
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn username_rejects_blank_input(#[case] raw: &str) {
        assert_eq!(Username::new(raw), Err(UserValidationError::EmptyUsername));
    }

    #[rstest]
    fn username_is_kept_verbatim() {
        let username = Username::new(" Alice ").expect("non-blank username");
        assert_eq!(username.as_ref(), " Alice ");
    }

    #[rstest]
    fn email_rejects_blank_input() {
        assert_eq!(Email::new("\t"), Err(UserValidationError::EmptyEmail));
    }

    #[rstest]
    #[case(" 3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    #[case("not-a-uuid")]
    fn user_id_rejects_invalid_text(#[case] raw: &str) {
        assert_eq!(UserId::new(raw), Err(UserValidationError::InvalidId));
    }

    #[rstest]
    #[case("STUDENT", UserRole::Student)]
    #[case("PROFESSOR", UserRole::Professor)]
    #[case("ORGANIZER", UserRole::Organizer)]
    #[case("ADMIN", UserRole::Admin)]
    fn role_parses_storage_text(#[case] raw: &str, #[case] expected: UserRole) {
        let role: UserRole = raw.parse().expect("known role");
        assert_eq!(role, expected);
        assert_eq!(role.as_str(), raw);
    }

    #[rstest]
    fn role_parsing_is_case_sensitive() {
        assert_eq!(
            "admin".parse::<UserRole>(),
            Err(UserValidationError::UnknownRole("admin".to_owned()))
        );
    }

    #[rstest]
    fn principal_projects_credentials_from_user(alice: User) {
        let principal = AuthPrincipal::from(alice.clone());
        assert_eq!(principal.user_id(), alice.id());
        assert_eq!(principal.username(), alice.username());
        assert_eq!(principal.password_hash(), alice.password_hash());
        assert_eq!(principal.role(), UserRole::Student);
    }

    #[rstest]
    fn debug_output_redacts_password_hash(alice: User) {
        let user_debug = format!("{alice:?}");
        let principal_debug = format!("{:?}", AuthPrincipal::from(alice));
        assert!(!user_debug.contains("$2a$10$"));
        assert!(!principal_debug.contains("$2a$10$"));
        assert!(principal_debug.contains("<redacted>"));
    }
}
