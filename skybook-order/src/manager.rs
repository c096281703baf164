use chrono::{Duration, Utc};
use std::collections::HashMap;
use tracing::info;
use uuid::Uuid;

use crate::session::{BookingSession, SessionError};

/// Owns every live wizard session, keyed by session id.
pub struct SessionManager {
    sessions: HashMap<Uuid, BookingSession>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self {
            sessions: HashMap::new(),
        }
    }

    pub fn create(&mut self) -> &BookingSession {
        let session = BookingSession::new();
        let id = session.id;
        info!("Session {} started", id);
        self.sessions.entry(id).or_insert(session)
    }

    pub fn get(&self, id: &Uuid) -> Result<&BookingSession, SessionError> {
        self.sessions.get(id).ok_or(SessionError::NotFound(*id))
    }

    /// Mutable access; counts as activity for idle tracking.
    pub fn get_mut(&mut self, id: &Uuid) -> Result<&mut BookingSession, SessionError> {
        let session = self.sessions.get_mut(id).ok_or(SessionError::NotFound(*id))?;
        session.touch();
        Ok(session)
    }

    pub fn remove(&mut self, id: &Uuid) -> Result<BookingSession, SessionError> {
        let session = self.sessions.remove(id).ok_or(SessionError::NotFound(*id))?;
        info!("Session {} ended", id);
        Ok(session)
    }

    /// Drop sessions with no activity for longer than `max_idle`.
    pub fn remove_idle(&mut self, max_idle: Duration) -> usize {
        let cutoff = Utc::now() - max_idle;
        let initial_count = self.sessions.len();

        self.sessions.retain(|_, session| session.last_active > cutoff);

        initial_count - self.sessions.len()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}
