use async_trait::async_trait;

use crate::domain::{
    command::{Command, NewCommand},
    errors::DomainError,
};

pub mod in_memory_command_repository;
pub mod postgres_command_repository;

/// Persistence gateway over the `commands` table.
///
/// `create` leaves id assignment to the store; assigned ids are unique and
/// never reused after a delete. `update` is a full row replacement keyed by
/// id and reports whether a row matched. `delete` returns the removed row's
/// prior values so the API can echo them back.
#[async_trait]
pub trait CommandRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Command>, DomainError>;
    async fn get_by_id(&self, id: i32) -> Result<Option<Command>, DomainError>;
    async fn create(&self, command: NewCommand) -> Result<Command, DomainError>;
    async fn update(&self, id: i32, fields: NewCommand) -> Result<bool, DomainError>;
    async fn delete(&self, id: i32) -> Result<Option<Command>, DomainError>;
}
