use anyhow::Context;
use lightsout_core::{CellId, LightsOut};
use lightsout_protocol::{
    CommandInteraction, ComponentInteraction, ComponentType, FOREIGN_SESSION_NOTICE, GameMessage,
    Interaction, LIGHTS_COMMAND,
};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::*;

/// Routes interactions to per-user games.
///
/// Every interaction goes through `&mut self`, so whoever owns the bot applies
/// moves one at a time in arrival order.
#[derive(Debug)]
pub struct LightsOutBot {
    sessions: SessionRegistry,
    rng: SmallRng,
}

impl LightsOutBot {
    pub fn new(seed: u64) -> Self {
        Self {
            sessions: SessionRegistry::new(),
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn sessions(&self) -> &SessionRegistry {
        &self.sessions
    }

    pub fn handle(
        &mut self,
        interaction: &Interaction,
        gateway: &mut impl Gateway,
    ) -> anyhow::Result<()> {
        log::trace!("Interaction from {}", interaction.user().id);
        match interaction {
            Interaction::ApplicationCommand(command) => self.handle_command(command, gateway),
            Interaction::MessageComponent(component) => self.handle_component(component, gateway),
        }
    }

    fn handle_command(
        &mut self,
        command: &CommandInteraction,
        gateway: &mut impl Gateway,
    ) -> anyhow::Result<()> {
        if command.name != LIGHTS_COMMAND {
            log::trace!("Ignoring unknown command {:?}", command.name);
            return Ok(());
        }

        let user = &command.user;
        let difficulty = match command.difficulty() {
            Ok(difficulty) => difficulty,
            Err(err) => {
                log::warn!("Rejecting command from {}: {err}", user.id);
                return gateway.reply_ephemeral(user, &err.to_string());
            }
        };

        let mut engine = LightsOut::new();
        let scramble = engine.generate(difficulty, &mut self.rng);
        let message = GameMessage::for_game(user.display_name(), &engine);
        let message_id = gateway
            .create_message(&message)
            .context("Could not post game message")?;

        log::debug!(
            "Started {difficulty} game for {} on message {message_id} ({} scramble moves)",
            user.id,
            scramble.len()
        );
        if let Some(previous) = self
            .sessions
            .put(user.id.clone(), Session { engine, message_id })
        {
            log::debug!("Discarded game on message {}", previous.message_id);
        }

        Ok(())
    }

    fn handle_component(
        &mut self,
        component: &ComponentInteraction,
        gateway: &mut impl Gateway,
    ) -> anyhow::Result<()> {
        let user = &component.user;
        let Some(session) = self
            .sessions
            .get_mut(&user.id)
            .filter(|session| session.message_id == component.message_id)
        else {
            log::warn!(
                "Rejecting {} pressed by {} on message {}",
                component.custom_id,
                user.id,
                component.message_id
            );
            return gateway.reply_ephemeral(user, FOREIGN_SESSION_NOTICE);
        };

        if component.component_type != ComponentType::Button {
            return Ok(());
        }

        let Ok(cell) = component.custom_id.parse::<CellId>() else {
            log::trace!("Ignoring component {:?}", component.custom_id);
            return Ok(());
        };

        let outcome = session
            .engine
            .activate(cell.coords())
            .with_context(|| format!("Could not activate {cell} for {}", user.id))?;

        let message = if outcome.is_solved() {
            log::debug!(
                "{} solved the game on message {} in {} clicks",
                user.id,
                component.message_id,
                session.engine.click_count()
            );
            let message = GameMessage::for_finished_game(user.display_name(), &session.engine);
            self.sessions.remove(&user.id);
            message
        } else {
            GameMessage::for_game(user.display_name(), &session.engine)
        };

        gateway.edit_message(component.message_id, &message)
    }
}
