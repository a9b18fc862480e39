use serde::{Deserialize, Serialize};

use crate::error::{StudioError, StudioResult};
use crate::store::records::UserId;

/// Ambient authentication state, validated at the storage boundary.
///
/// The geometry engine never sees this type; only store-facing operations
/// resolve it into a concrete owner id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthSession {
    Unauthenticated,
    Authenticated { user_id: UserId, email: String },
}

impl AuthSession {
    #[must_use]
    pub fn authenticated(user_id: UserId, email: impl Into<String>) -> Self {
        Self::Authenticated {
            user_id,
            email: email.into(),
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    #[must_use]
    pub fn email(&self) -> Option<&str> {
        match self {
            Self::Authenticated { email, .. } => Some(email),
            Self::Unauthenticated => None,
        }
    }

    /// Resolves the session owner or fails for unauthenticated sessions.
    pub fn require_user(&self) -> StudioResult<UserId> {
        match self {
            Self::Authenticated { user_id, .. } => Ok(*user_id),
            Self::Unauthenticated => Err(StudioError::NotAuthenticated),
        }
    }
}

impl Default for AuthSession {
    fn default() -> Self {
        Self::Unauthenticated
    }
}
