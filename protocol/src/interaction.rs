use std::fmt;

use lightsout_core::Difficulty;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(pub u64);

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_name: Option<String>,
}

impl User {
    pub fn new(id: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            id: UserId(id.into()),
            username: username.into(),
            global_name: None,
        }
    }

    /// Name shown in game messages, preferring the global display name.
    pub fn display_name(&self) -> &str {
        self.global_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.username)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandOption {
    pub name: String,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandInteraction {
    pub user: User,
    pub name: String,
    #[serde(default)]
    pub options: Vec<CommandOption>,
}

impl CommandInteraction {
    pub fn get_string(&self, name: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|option| option.name == name)
            .map(|option| option.value.as_str())
    }

    pub fn difficulty(&self) -> Result<Difficulty> {
        let value = self
            .get_string(DIFFICULTY_OPTION)
            .ok_or(ProtocolError::MissingOption(DIFFICULTY_OPTION))?;
        parse_difficulty(value)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentType {
    Button,
    StringSelect,
    TextInput,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentInteraction {
    pub user: User,
    pub message_id: MessageId,
    pub component_type: ComponentType,
    pub custom_id: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Interaction {
    ApplicationCommand(CommandInteraction),
    MessageComponent(ComponentInteraction),
}

impl Interaction {
    pub fn user(&self) -> &User {
        match self {
            Self::ApplicationCommand(command) => &command.user,
            Self::MessageComponent(component) => &component.user,
        }
    }
}

/// Case-insensitive difficulty lookup for values coming off the wire.
pub fn parse_difficulty(value: &str) -> Result<Difficulty> {
    let value = value.trim();
    Difficulty::ALL
        .into_iter()
        .find(|difficulty| difficulty.name().eq_ignore_ascii_case(value))
        .ok_or_else(|| ProtocolError::UnknownDifficulty(value.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(options: &[(&str, &str)]) -> CommandInteraction {
        CommandInteraction {
            user: User::new("1", "alice"),
            name: LIGHTS_COMMAND.to_owned(),
            options: options
                .iter()
                .map(|&(name, value)| CommandOption {
                    name: name.to_owned(),
                    value: value.to_owned(),
                })
                .collect(),
        }
    }

    #[test]
    fn difficulty_parsing_ignores_case() {
        assert_eq!(parse_difficulty("EASY"), Ok(Difficulty::Easy));
        assert_eq!(parse_difficulty("Normal"), Ok(Difficulty::Normal));
        assert_eq!(parse_difficulty("hard"), Ok(Difficulty::Hard));
    }

    #[test]
    fn unknown_difficulty_is_rejected() {
        assert_eq!(
            parse_difficulty("extreme"),
            Err(ProtocolError::UnknownDifficulty("extreme".to_owned()))
        );
    }

    #[test]
    fn command_difficulty_reads_diff_option() {
        assert_eq!(command(&[("diff", "HARD")]).difficulty(), Ok(Difficulty::Hard));
        assert_eq!(
            command(&[]).difficulty(),
            Err(ProtocolError::MissingOption(DIFFICULTY_OPTION))
        );
    }

    #[test]
    fn display_name_prefers_global_name() {
        let mut user = User::new("1", "alice");
        assert_eq!(user.display_name(), "alice");

        user.global_name = Some("Alice A.".to_owned());
        assert_eq!(user.display_name(), "Alice A.");
    }

    #[test]
    fn component_interaction_parses_from_json() {
        let json = r#"{
            "type": "message_component",
            "user": {"id": "42", "username": "bob"},
            "message_id": 7,
            "component_type": "button",
            "custom_id": "cell-1-2"
        }"#;

        let interaction: Interaction = serde_json::from_str(json).unwrap();

        assert_eq!(
            interaction,
            Interaction::MessageComponent(ComponentInteraction {
                user: User::new("42", "bob"),
                message_id: MessageId(7),
                component_type: ComponentType::Button,
                custom_id: "cell-1-2".to_owned(),
            })
        );
    }
}
