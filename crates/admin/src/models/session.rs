//! Session data stored for the logged-in operator.

use serde::{Deserialize, Serialize};

/// Keys used in the tower-sessions store.
pub mod session_keys {
    /// The authenticated back-office session, if any.
    pub const CURRENT_ADMIN: &str = "current_admin";
}

/// Marker stored in the session once the store password has been entered.
///
/// The back-office is a single shared operator account, so there is no
/// per-user identity to carry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentAdmin {
    /// When the session was authenticated, for display only.
    pub logged_in_at: chrono::DateTime<chrono::Utc>,
}
