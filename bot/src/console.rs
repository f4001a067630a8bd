use std::io::Write;

use anyhow::{Context, bail};
use lightsout_protocol::{
    ButtonStyle, CommandInteraction, CommandOption, ComponentInteraction, ComponentType,
    DIFFICULTY_OPTION, GameMessage, Interaction, LIGHTS_COMMAND, MessageId, User,
};

use crate::*;

/// Gateway that prints every message as a text grid, `#` for lit cells.
#[derive(Debug)]
pub struct ConsoleGateway<W> {
    out: W,
    last_id: u64,
}

impl<W: Write> ConsoleGateway<W> {
    pub fn new(out: W) -> Self {
        Self { out, last_id: 0 }
    }

    pub fn last_message_id(&self) -> Option<MessageId> {
        (self.last_id > 0).then_some(MessageId(self.last_id))
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn render(&mut self, header: &str, message: &GameMessage) -> anyhow::Result<()> {
        writeln!(self.out, "{header}")?;
        for line in message.content.lines() {
            writeln!(self.out, "  {line}")?;
        }
        for row in &message.components {
            let cells: String = row
                .components
                .iter()
                .map(|button| match button.style {
                    ButtonStyle::Primary => '#',
                    ButtonStyle::Secondary => '.',
                })
                .collect();
            writeln!(self.out, "  {cells}")?;
        }
        if message.buttons().all(|button| button.disabled) {
            writeln!(self.out, "  (locked)")?;
        }
        Ok(())
    }
}

impl<W: Write> Gateway for ConsoleGateway<W> {
    fn create_message(&mut self, message: &GameMessage) -> anyhow::Result<MessageId> {
        self.last_id += 1;
        let id = MessageId(self.last_id);
        self.render(&format!("[message {id}]"), message)?;
        Ok(id)
    }

    fn edit_message(&mut self, message_id: MessageId, message: &GameMessage) -> anyhow::Result<()> {
        self.render(&format!("[message {message_id} edited]"), message)
    }

    fn reply_ephemeral(&mut self, user: &User, content: &str) -> anyhow::Result<()> {
        writeln!(self.out, "[only {}] {content}", user.display_name())?;
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConsoleCommand {
    Start(String),
    Click {
        custom_id: String,
        message_id: Option<MessageId>,
    },
    SwitchUser(String),
    Raw(String),
    Help,
    Quit,
}

impl ConsoleCommand {
    pub fn parse(line: &str) -> anyhow::Result<Option<Self>> {
        let line = line.trim();
        let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();
        let mut args = rest.split_whitespace();

        let command = match verb {
            "" => return Ok(None),
            "start" | "lights" => Self::Start(args.next().context("usage: start <difficulty>")?.to_owned()),
            "click" | "press" => {
                let custom_id = args.next().context("usage: click <cell-id> [message-id]")?;
                let message_id = args
                    .next()
                    .map(|id| id.parse().map(MessageId))
                    .transpose()
                    .context("message id must be a number")?;
                Self::Click {
                    custom_id: custom_id.to_owned(),
                    message_id,
                }
            }
            "user" => Self::SwitchUser(args.next().context("usage: user <name>")?.to_owned()),
            "raw" if !rest.is_empty() => Self::Raw(rest.to_owned()),
            "raw" => bail!("usage: raw <interaction json>"),
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => bail!("unknown command {other:?}, try help"),
        };
        Ok(Some(command))
    }
}

const HELP: &str = "\
start <easy|normal|hard>        start a new game as the current user
click <cell-x-y> [message-id]   press a cell, on the latest message by default
user <name>                     act as another user
raw <json>                      feed a raw interaction
quit                            leave";

/// Terminal front end driving a bot through a `ConsoleGateway`.
#[derive(Debug)]
pub struct Console<W> {
    bot: LightsOutBot,
    gateway: ConsoleGateway<W>,
    user: User,
}

impl<W: Write> Console<W> {
    pub fn new(bot: LightsOutBot, out: W, user_name: &str) -> Self {
        Self {
            bot,
            gateway: ConsoleGateway::new(out),
            user: User::new(user_name, user_name),
        }
    }

    pub fn bot(&self) -> &LightsOutBot {
        &self.bot
    }

    pub fn into_output(self) -> W {
        self.gateway.into_inner()
    }

    /// Runs one input line, returning `false` once the user asked to quit.
    pub fn run_line(&mut self, line: &str) -> anyhow::Result<bool> {
        let Some(command) = ConsoleCommand::parse(line)? else {
            return Ok(true);
        };

        let interaction = match command {
            ConsoleCommand::Start(difficulty) => Interaction::ApplicationCommand(CommandInteraction {
                user: self.user.clone(),
                name: LIGHTS_COMMAND.to_owned(),
                options: vec![CommandOption {
                    name: DIFFICULTY_OPTION.to_owned(),
                    value: difficulty,
                }],
            }),
            ConsoleCommand::Click {
                custom_id,
                message_id,
            } => {
                let message_id = message_id
                    .or_else(|| self.gateway.last_message_id())
                    .context("no message to click on yet, start a game first")?;
                Interaction::MessageComponent(ComponentInteraction {
                    user: self.user.clone(),
                    message_id,
                    component_type: ComponentType::Button,
                    custom_id,
                })
            }
            ConsoleCommand::SwitchUser(name) => {
                log::debug!("Acting as {name}");
                self.user = User::new(name.as_str(), name.as_str());
                return Ok(true);
            }
            ConsoleCommand::Raw(json) => {
                serde_json::from_str(&json).context("could not parse interaction")?
            }
            ConsoleCommand::Help => {
                writeln!(self.gateway.out, "{HELP}")?;
                return Ok(true);
            }
            ConsoleCommand::Quit => return Ok(false),
        };

        self.bot.handle(&interaction, &mut self.gateway)?;
        Ok(true)
    }
}
