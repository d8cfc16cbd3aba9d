//! Lookup of the session belonging to a channel.

use crate::session::GameSession;

/// Opaque channel identifier; never interpreted by the engine.
pub type ChannelKey = String;

/// Channel-keyed session storage, owned by the host.
///
/// At most one session exists per channel; inserting replaces it.
pub trait SessionRegistry {
    /// The channel's session, running or ended.
    fn get(&self, channel: &str) -> Option<&GameSession>;

    /// Mutable access to the channel's session.
    fn get_mut(&mut self, channel: &str) -> Option<&mut GameSession>;

    /// Stores `session` for `channel`, dropping any previous one.
    fn insert(&mut self, channel: &str, session: GameSession);
}
