//! Cart authority: which side owns the truth.

use quintal_commerce::ids::UserId;

/// Who holds the canonical cart for the current session.
///
/// While `Guest`, durable local storage is the truth and every mutation
/// is persisted there. After the one-time merge at login the server is
/// sole authority until logout; local state is only ever replaced with
/// server responses, never merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartAuthority {
    /// Unauthenticated; local storage is the truth.
    Guest,
    /// Authenticated; the server's cart document is the truth.
    Authenticated { user: UserId },
}

impl CartAuthority {
    pub fn as_str(&self) -> &'static str {
        match self {
            CartAuthority::Guest => "guest",
            CartAuthority::Authenticated { .. } => "authenticated",
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, CartAuthority::Authenticated { .. })
    }

    /// The authenticated user, if any.
    pub fn user(&self) -> Option<&UserId> {
        match self {
            CartAuthority::Guest => None,
            CartAuthority::Authenticated { user } => Some(user),
        }
    }
}
