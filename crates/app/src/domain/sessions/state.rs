//! Observable session state.

use tokio::sync::watch;

use crate::domain::sessions::records::{SessionItemRecord, SessionRecord};

/// Process-wide holder of the single current session and its line items.
///
/// Single-writer: only the session orchestrator mutates it, and always by
/// full replacement, so concurrent readers see a consistent snapshot.
/// Subscriptions are watch channels — new subscribers immediately observe
/// the latest published value.
#[derive(Debug)]
pub struct SessionState {
    session: watch::Sender<Option<SessionRecord>>,
    items: watch::Sender<Vec<SessionItemRecord>>,
}

impl SessionState {
    #[must_use]
    pub fn new() -> Self {
        let (session, _) = watch::channel(None);
        let (items, _) = watch::channel(Vec::new());

        Self { session, items }
    }

    /// The current session, if one is active or recently completed in this
    /// process.
    #[must_use]
    pub fn session(&self) -> Option<SessionRecord> {
        self.session.borrow().clone()
    }

    /// Snapshot of the current line items.
    #[must_use]
    pub fn items(&self) -> Vec<SessionItemRecord> {
        self.items.borrow().clone()
    }

    pub fn watch_session(&self) -> watch::Receiver<Option<SessionRecord>> {
        self.session.subscribe()
    }

    pub fn watch_items(&self) -> watch::Receiver<Vec<SessionItemRecord>> {
        self.items.subscribe()
    }

    pub(crate) fn set_session(&self, session: SessionRecord) {
        self.session.send_replace(Some(session));
    }

    pub(crate) fn set_items(&self, items: Vec<SessionItemRecord>) {
        self.items.send_replace(items);
    }

    pub(crate) fn clear(&self) {
        self.session.send_replace(None);
        self.items.send_replace(Vec::new());
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use rust_decimal::Decimal;

    use crate::domain::sessions::records::{SessionStatus, SessionUuid};

    use super::*;

    fn session() -> SessionRecord {
        SessionRecord {
            session_id: SessionUuid::random(),
            cart_id: "CART_001".to_string(),
            user_id: "u1".to_string(),
            status: SessionStatus::Active,
            started_at: Timestamp::now(),
            completed_at: None,
            total_amount: Decimal::ZERO,
        }
    }

    #[test]
    fn starts_empty() {
        let state = SessionState::new();

        assert!(state.session().is_none(), "expected no session");
        assert!(state.items().is_empty(), "expected no items");
    }

    #[test]
    fn late_subscriber_sees_latest_value() {
        let state = SessionState::new();
        let published = session();

        state.set_session(published.clone());

        let receiver = state.watch_session();
        let observed = receiver.borrow().clone();

        assert_eq!(
            observed.map(|s| s.session_id),
            Some(published.session_id),
            "late subscriber should replay the latest session"
        );
    }

    #[tokio::test]
    async fn subscriber_is_notified_on_change() {
        let state = SessionState::new();
        let mut receiver = state.watch_session();

        state.set_session(session());

        receiver.changed().await.expect("sender should be alive");
        assert!(receiver.borrow().is_some(), "expected published session");
    }

    #[test]
    fn clear_resets_both_channels() {
        let state = SessionState::new();

        state.set_session(session());
        state.clear();

        assert!(state.session().is_none(), "expected cleared session");
        assert!(state.items().is_empty(), "expected cleared items");
    }
}
