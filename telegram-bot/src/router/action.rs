//! Logical actions shared by slash-commands and inline buttons, and the button token grammar.

use crate::session::ModelTier;

use super::command::Command;

/// What the user asked for, independent of how (command or button).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Welcome,
    ChatPrompt,
    Help,
    ModelMenu,
    Stats,
    Reset,
    SelectModel(ModelTier),
}

impl From<Command> for Action {
    fn from(command: Command) -> Self {
        match command {
            Command::Start => Action::Welcome,
            Command::Help => Action::Help,
            Command::Reset => Action::Reset,
            Command::Model => Action::ModelMenu,
            Command::Stats => Action::Stats,
        }
    }
}

const MODEL_PREFIX: &str = "model_";

/// Inline button payloads: `chat`, `help`, `models`, `stats`, `model_<tier>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    Chat,
    Help,
    Models,
    Stats,
    SelectModel(ModelTier),
}

impl ButtonAction {
    pub fn encode(&self) -> String {
        match self {
            ButtonAction::Chat => "chat".to_string(),
            ButtonAction::Help => "help".to_string(),
            ButtonAction::Models => "models".to_string(),
            ButtonAction::Stats => "stats".to_string(),
            ButtonAction::SelectModel(tier) => format!("{}{}", MODEL_PREFIX, tier.name()),
        }
    }

    /// `None` for tokens this bot never produces, including unknown tiers.
    pub fn decode(data: &str) -> Option<Self> {
        match data {
            "chat" => Some(ButtonAction::Chat),
            "help" => Some(ButtonAction::Help),
            "models" => Some(ButtonAction::Models),
            "stats" => Some(ButtonAction::Stats),
            other => other
                .strip_prefix(MODEL_PREFIX)
                .and_then(ModelTier::from_name)
                .map(ButtonAction::SelectModel),
        }
    }
}

impl From<ButtonAction> for Action {
    fn from(button: ButtonAction) -> Self {
        match button {
            ButtonAction::Chat => Action::ChatPrompt,
            ButtonAction::Help => Action::Help,
            ButtonAction::Models => Action::ModelMenu,
            ButtonAction::Stats => Action::Stats,
            ButtonAction::SelectModel(tier) => Action::SelectModel(tier),
        }
    }
}
