//! Channel session storage for the bot.

use std::collections::HashMap;
use tracing::{debug, info, instrument};
use wordchain::{ChannelKey, GameSession, SessionRegistry};

/// Holds one game session per channel.
#[derive(Debug, Default)]
pub struct SessionManager {
    sessions: HashMap<ChannelKey, GameSession>,
}

impl SessionManager {
    /// Creates an empty session manager.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating session manager");
        Self::default()
    }

    /// Lists channels that have a session, running or ended.
    #[instrument(skip(self))]
    pub fn list_channels(&self) -> Vec<ChannelKey> {
        let mut channels: Vec<_> = self.sessions.keys().cloned().collect();
        channels.sort();
        debug!(count = channels.len(), "Listed channels");
        channels
    }

    /// Channels whose game is still running.
    pub fn running_channels(&self) -> Vec<ChannelKey> {
        let mut channels: Vec<_> = self
            .sessions
            .iter()
            .filter(|(_, s)| s.is_running())
            .map(|(c, _)| c.clone())
            .collect();
        channels.sort();
        channels
    }
}

impl SessionRegistry for SessionManager {
    fn get(&self, channel: &str) -> Option<&GameSession> {
        let session = self.sessions.get(channel);
        if session.is_none() {
            debug!(channel, "Session not found");
        }
        session
    }

    fn get_mut(&mut self, channel: &str) -> Option<&mut GameSession> {
        self.sessions.get_mut(channel)
    }

    #[instrument(skip(self, session))]
    fn insert(&mut self, channel: &str, session: GameSession) {
        if self
            .sessions
            .insert(channel.to_string(), session)
            .is_some()
        {
            debug!("Replaced previous session");
        }
        info!("Session stored");
    }
}
