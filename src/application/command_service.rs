use std::sync::Arc;

use crate::{
    application::dto::{CommandResponse, CreateCommandRequest, UpdateCommandRequest},
    domain::errors::DomainError,
    infrastructure::CommandRepository,
};

#[derive(Clone)]
pub struct CommandService {
    repository: Arc<dyn CommandRepository>,
}

impl CommandService {
    pub fn new(repository: Arc<dyn CommandRepository>) -> Self {
        Self { repository }
    }

    /// Returns the full, unfiltered collection in whatever order the store
    /// yields it. Never fails on an empty store.
    pub async fn list_commands(&self) -> Result<Vec<CommandResponse>, DomainError> {
        let commands = self.repository.list().await?;
        Ok(commands.into_iter().map(CommandResponse::from).collect())
    }

    pub async fn get_command(&self, id: i32) -> Result<CommandResponse, DomainError> {
        let Some(command) = self.repository.get_by_id(id).await? else {
            return Err(DomainError::not_found("command not found"));
        };
        Ok(CommandResponse::from(command))
    }

    /// Any client-supplied id is discarded; the store assigns the real one.
    pub async fn create_command(
        &self,
        request: CreateCommandRequest,
    ) -> Result<CommandResponse, DomainError> {
        let created = self.repository.create(request.into_new_command()).await?;
        Ok(CommandResponse::from(created))
    }

    /// Full replacement of every field except the id. The path id must equal
    /// the payload id; updating an id with no stored row is NotFound, same as
    /// get and delete.
    pub async fn update_command(
        &self,
        id: i32,
        request: UpdateCommandRequest,
    ) -> Result<(), DomainError> {
        if id != request.id {
            return Err(DomainError::validation(
                "path id and payload id must match",
            ));
        }

        let matched = self.repository.update(id, request.into_new_command()).await?;
        if !matched {
            return Err(DomainError::not_found("command not found"));
        }

        Ok(())
    }

    /// Removes the row and returns its prior field values as confirmation.
    pub async fn delete_command(&self, id: i32) -> Result<CommandResponse, DomainError> {
        let Some(deleted) = self.repository.delete(id).await? else {
            return Err(DomainError::not_found("command not found"));
        };
        Ok(CommandResponse::from(deleted))
    }
}
