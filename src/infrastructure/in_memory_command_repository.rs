use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    domain::{
        command::{Command, NewCommand},
        errors::DomainError,
    },
    infrastructure::CommandRepository,
};

/// In-memory stand-in for the Postgres gateway, used by tests and local
/// development. Behaves like the real table: serial ids starting at 1 that
/// are never reused after a delete, and NOT NULL enforcement on every field.
#[derive(Default)]
pub struct InMemoryCommandRepository {
    table: RwLock<CommandTable>,
}

#[derive(Default)]
struct CommandTable {
    rows: HashMap<i32, Command>,
    next_id: i32,
}

impl InMemoryCommandRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CommandRepository for InMemoryCommandRepository {
    async fn list(&self) -> Result<Vec<Command>, DomainError> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Command>, DomainError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn create(&self, command: NewCommand) -> Result<Command, DomainError> {
        let (how_to, platform, command_line) = require_fields(command)?;

        let mut table = self.table.write().await;
        table.next_id += 1;
        let created = Command {
            id: table.next_id,
            how_to,
            platform,
            command_line,
        };
        table.rows.insert(created.id, created.clone());

        Ok(created)
    }

    async fn update(&self, id: i32, fields: NewCommand) -> Result<bool, DomainError> {
        let (how_to, platform, command_line) = require_fields(fields)?;

        let mut table = self.table.write().await;
        let Some(row) = table.rows.get_mut(&id) else {
            return Ok(false);
        };

        row.how_to = how_to;
        row.platform = platform;
        row.command_line = command_line;

        Ok(true)
    }

    async fn delete(&self, id: i32) -> Result<Option<Command>, DomainError> {
        Ok(self.table.write().await.rows.remove(&id))
    }
}

fn require_fields(fields: NewCommand) -> Result<(String, String, String), DomainError> {
    let how_to = require(fields.how_to, "how_to")?;
    let platform = require(fields.platform, "platform")?;
    let command_line = require(fields.command_line, "command_line")?;
    Ok((how_to, platform, command_line))
}

fn require(value: Option<String>, column: &str) -> Result<String, DomainError> {
    value.ok_or_else(|| {
        DomainError::validation(format!("null value in column \"{column}\" of relation \"commands\""))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_command(how_to: &str) -> NewCommand {
        NewCommand {
            how_to: Some(how_to.to_string()),
            platform: Some("linux".to_string()),
            command_line: Some("ls -la".to_string()),
        }
    }

    #[tokio::test]
    async fn assigned_ids_are_distinct_and_monotonic() {
        let repository = InMemoryCommandRepository::new();

        let first = repository.create(new_command("a")).await.unwrap();
        let second = repository.create(new_command("b")).await.unwrap();
        let third = repository.create(new_command("c")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(third.id, 3);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let repository = InMemoryCommandRepository::new();

        let first = repository.create(new_command("a")).await.unwrap();
        repository.delete(first.id).await.unwrap();

        let next = repository.create(new_command("b")).await.unwrap();
        assert_ne!(next.id, first.id);
        assert_eq!(repository.get_by_id(first.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn create_without_required_field_fails_like_the_database() {
        let repository = InMemoryCommandRepository::new();

        let mut incomplete = new_command("a");
        incomplete.how_to = None;

        let error = repository.create(incomplete).await.unwrap_err();
        assert!(matches!(error, DomainError::Validation(_)));
        assert!(repository.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_of_missing_row_reports_no_match() {
        let repository = InMemoryCommandRepository::new();

        let matched = repository.update(42, new_command("a")).await.unwrap();
        assert!(!matched);
    }
}
