use std::collections::HashMap;

use lightsout_core::LightsOut;
use lightsout_protocol::{MessageId, UserId};

/// A running game and the message that currently renders it.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub engine: LightsOut,
    pub message_id: MessageId,
}

/// At most one running game per user.
#[derive(Clone, Debug, Default)]
pub struct SessionRegistry {
    sessions: HashMap<UserId, Session>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, owner: &UserId) -> Option<&Session> {
        self.sessions.get(owner)
    }

    pub fn get_mut(&mut self, owner: &UserId) -> Option<&mut Session> {
        self.sessions.get_mut(owner)
    }

    /// Stores `session` for `owner`, handing back whatever game it replaced.
    pub fn put(&mut self, owner: UserId, session: Session) -> Option<Session> {
        self.sessions.insert(owner, session)
    }

    pub fn remove(&mut self, owner: &UserId) -> Option<Session> {
        self.sessions.remove(owner)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
