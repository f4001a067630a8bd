use lightsout_core::{BoardView, CellStyle, CellView, LightsOut};
use serde::{Deserialize, Serialize};

use crate::*;

/// Buttons need a non-empty label; a zero-width space keeps them blank.
const BLANK_LABEL: &str = "\u{200B}";

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonStyle {
    Primary,
    Secondary,
}

impl From<CellStyle> for ButtonStyle {
    fn from(style: CellStyle) -> Self {
        match style {
            CellStyle::Lit => Self::Primary,
            CellStyle::Unlit => Self::Secondary,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Button {
    pub style: ButtonStyle,
    pub custom_id: String,
    pub label: String,
    #[serde(default)]
    pub disabled: bool,
}

impl From<&CellView> for Button {
    fn from(cell: &CellView) -> Self {
        Self {
            style: cell.style.into(),
            custom_id: cell.id.to_string(),
            label: BLANK_LABEL.to_owned(),
            disabled: !cell.enabled,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRow {
    pub components: Vec<Button>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameMessage {
    pub content: String,
    pub components: Vec<ActionRow>,
}

impl GameMessage {
    pub fn for_game(player: &str, engine: &LightsOut) -> Self {
        Self {
            content: status_line(player, engine),
            components: action_rows(&engine.export_view()),
        }
    }

    /// Final board with the completion notice appended and every button locked.
    pub fn for_finished_game(player: &str, engine: &LightsOut) -> Self {
        let mut view = engine.export_view();
        view.disable_all();

        Self {
            content: format!("{}\n{COMPLETION_NOTICE}", status_line(player, engine)),
            components: action_rows(&view),
        }
    }

    pub fn buttons(&self) -> impl Iterator<Item = &Button> {
        self.components.iter().flat_map(|row| &row.components)
    }
}

fn status_line(player: &str, engine: &LightsOut) -> String {
    format!("{player}'s game\n{} clicks so far", engine.click_count())
}

pub fn action_rows(view: &BoardView) -> Vec<ActionRow> {
    view.rows()
        .map(|row| ActionRow {
            components: row.iter().map(Button::from).collect(),
        })
        .collect()
}
