use lightsout_protocol::{GameMessage, MessageId, User};

/// Outbound side of the chat platform.
pub trait Gateway {
    /// Posts a new game message in reply to a command and returns its id.
    fn create_message(&mut self, message: &GameMessage) -> anyhow::Result<MessageId>;

    /// Replaces the message that an interaction originated from.
    fn edit_message(&mut self, message_id: MessageId, message: &GameMessage) -> anyhow::Result<()>;

    /// Sends a notice only `user` can see.
    fn reply_ephemeral(&mut self, user: &User, content: &str) -> anyhow::Result<()>;
}
