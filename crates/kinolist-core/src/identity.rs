use std::fmt;

/// Sentinel the auth layer reports for a session with no account behind it.
pub const UNAUTHORIZED: &str = "Unauthorized";

/// Who is using the client.
///
/// Established once per session by whatever authenticates the user; the
/// core only ever reads it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UserIdentity {
    #[default]
    Anonymous,
    Authenticated(UserId),
}

/// A real account id. Only constructible from a non-empty, non-sentinel value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl UserIdentity {
    /// Interpret a raw id as reported by the auth layer. Missing, blank and
    /// `"Unauthorized"` all mean anonymous.
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(id) if !id.is_empty() && id != UNAUTHORIZED => {
                Self::Authenticated(UserId(id.to_string()))
            }
            _ => Self::Anonymous,
        }
    }

    pub fn user_id(&self) -> Option<&UserId> {
        match self {
            Self::Authenticated(id) => Some(id),
            Self::Anonymous => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}

impl fmt::Display for UserIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Anonymous => f.write_str("anonymous"),
            Self::Authenticated(id) => write!(f, "{id}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinels_are_anonymous() {
        assert_eq!(UserIdentity::from_raw(None), UserIdentity::Anonymous);
        assert_eq!(UserIdentity::from_raw(Some("")), UserIdentity::Anonymous);
        assert_eq!(UserIdentity::from_raw(Some("   ")), UserIdentity::Anonymous);
        assert_eq!(
            UserIdentity::from_raw(Some(UNAUTHORIZED)),
            UserIdentity::Anonymous
        );
    }

    #[test]
    fn test_real_id_is_authenticated() {
        let identity = UserIdentity::from_raw(Some(" alice "));
        assert!(identity.is_authenticated());
        assert_eq!(identity.user_id().map(UserId::as_str), Some("alice"));
        assert_eq!(identity.to_string(), "alice");
    }
}
