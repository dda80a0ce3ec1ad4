use serde::{Deserialize, Serialize};

use crate::domain::command::{Command, NewCommand};

// Wire casing is declared once per type; field names stay snake_case in Rust.

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommandRequest {
    /// Accepted for wire compatibility and ignored; the store assigns ids.
    pub id: Option<i32>,
    pub how_to: Option<String>,
    pub platform: Option<String>,
    pub command_line: Option<String>,
}

impl CreateCommandRequest {
    pub fn into_new_command(self) -> NewCommand {
        NewCommand {
            how_to: self.how_to,
            platform: self.platform,
            command_line: self.command_line,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCommandRequest {
    /// Must match the path id; an omitted id never matches.
    #[serde(default)]
    pub id: i32,
    pub how_to: Option<String>,
    pub platform: Option<String>,
    pub command_line: Option<String>,
}

impl UpdateCommandRequest {
    pub fn into_new_command(self) -> NewCommand {
        NewCommand {
            how_to: self.how_to,
            platform: self.platform,
            command_line: self.command_line,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandResponse {
    pub id: i32,
    pub how_to: String,
    pub platform: String,
    pub command_line: String,
}

impl From<Command> for CommandResponse {
    fn from(value: Command) -> Self {
        Self {
            id: value.id,
            how_to: value.how_to,
            platform: value.platform,
            command_line: value.command_line,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
