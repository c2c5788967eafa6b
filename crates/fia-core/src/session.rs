//! Session envelopes for memory-store calls.
//!
//! Every search and append carries a fresh `SessionContext`; nothing here is
//! persisted.

use uuid::Uuid;

use crate::config::IdentityConfig;
use crate::types::SessionContext;

/// Build a new session envelope with a freshly generated session id.
pub fn new_session(identity: &IdentityConfig) -> SessionContext {
    SessionContext {
        group_id: identity.group_id.clone(),
        agent_ids: identity.agent_ids.clone(),
        user_ids: vec![identity.user_id.clone()],
        session_id: Uuid::new_v4().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_ids_are_unique() {
        let identity = IdentityConfig::default();
        let first = new_session(&identity);
        let second = new_session(&identity);
        assert_ne!(first.session_id, second.session_id);
        assert!(Uuid::parse_str(&first.session_id).is_ok());
    }

    #[test]
    fn test_session_carries_identity() {
        let identity = IdentityConfig::default();
        let ctx = new_session(&identity);
        assert_eq!(ctx.group_id, "fashion-group-01");
        assert_eq!(ctx.agent_ids, vec!["fashion-stylist-gemini".to_string()]);
        assert_eq!(ctx.user_ids, vec!["profile_user_001".to_string()]);
    }
}
