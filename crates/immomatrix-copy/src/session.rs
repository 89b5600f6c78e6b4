//! Draft session: one request at a time, last text retained.

use parking_lot::Mutex;

use crate::error::DraftError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DraftPhase {
    Idle,
    Requesting,
}

#[derive(Debug)]
struct SessionState {
    phase: DraftPhase,
    last_text: Option<String>,
}

/// Tracks the draft request lifecycle.
///
/// A second submission while a request is in flight is rejected with
/// `DraftError::InFlight`; the running request is not affected.
#[derive(Debug)]
pub struct DraftSession {
    state: Mutex<SessionState>,
}

impl Default for DraftSession {
    fn default() -> Self {
        Self::new()
    }
}

impl DraftSession {
    /// Create an idle session with no text.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Mutex::new(SessionState {
                phase: DraftPhase::Idle,
                last_text: None,
            }),
        }
    }

    /// Enter the requesting phase.
    ///
    /// # Errors
    ///
    /// Returns `DraftError::InFlight` if a request is already running.
    pub fn try_begin(&self) -> Result<(), DraftError> {
        let mut state = self.state.lock();
        if state.phase == DraftPhase::Requesting {
            tracing::warn!("draft submission rejected: request already in flight");
            return Err(DraftError::InFlight);
        }
        state.phase = DraftPhase::Requesting;
        Ok(())
    }

    /// Record the displayed text and return to idle.
    pub fn finish(&self, text: String) {
        let mut state = self.state.lock();
        state.phase = DraftPhase::Idle;
        state.last_text = Some(text);
    }

    /// Whether a request is running.
    #[must_use]
    pub fn is_requesting(&self) -> bool {
        self.state.lock().phase == DraftPhase::Requesting
    }

    /// Text of the most recent completed request.
    #[must_use]
    pub fn last_text(&self) -> Option<String> {
        self.state.lock().last_text.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_begin_is_rejected() {
        let session = DraftSession::new();
        session.try_begin().unwrap();
        assert!(session.is_requesting());
        assert!(matches!(session.try_begin(), Err(DraftError::InFlight)));

        session.finish("erste Antwort".into());
        assert!(!session.is_requesting());
        assert_eq!(session.last_text().as_deref(), Some("erste Antwort"));
        assert!(session.try_begin().is_ok());
    }

    #[test]
    fn rejected_begin_keeps_request_running() {
        let session = DraftSession::new();
        session.try_begin().unwrap();
        assert!(session.try_begin().is_err());
        assert!(session.is_requesting());
        assert_eq!(session.last_text(), None);
    }

    #[test]
    fn last_text_is_replaced() {
        let session = DraftSession::default();
        assert_eq!(session.last_text(), None);
        session.try_begin().unwrap();
        session.finish("a".into());
        session.try_begin().unwrap();
        session.finish("b".into());
        assert_eq!(session.last_text().as_deref(), Some("b"));
    }
}
