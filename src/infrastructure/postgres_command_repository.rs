use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::{
    domain::{
        command::{Command, NewCommand},
        errors::DomainError,
    },
    infrastructure::CommandRepository,
};

#[derive(Clone)]
pub struct PostgresCommandRepository {
    pool: PgPool,
}

impl PostgresCommandRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommandRepository for PostgresCommandRepository {
    async fn list(&self) -> Result<Vec<Command>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, how_to, platform, command_line
            FROM commands
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.iter().map(row_to_command).collect())
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Command>, DomainError> {
        let maybe_row = sqlx::query(
            r#"
            SELECT id, how_to, platform, command_line
            FROM commands
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(maybe_row.as_ref().map(row_to_command))
    }

    async fn create(&self, command: NewCommand) -> Result<Command, DomainError> {
        let row = sqlx::query(
            r#"
            INSERT INTO commands (how_to, platform, command_line)
            VALUES ($1, $2, $3)
            RETURNING id, how_to, platform, command_line
            "#,
        )
        .bind(command.how_to)
        .bind(command.platform)
        .bind(command.command_line)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row_to_command(&row))
    }

    async fn update(&self, id: i32, fields: NewCommand) -> Result<bool, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE commands
            SET how_to = $2, platform = $3, command_line = $4
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(fields.how_to)
        .bind(fields.platform)
        .bind(fields.command_line)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() == 1)
    }

    async fn delete(&self, id: i32) -> Result<Option<Command>, DomainError> {
        let maybe_row = sqlx::query(
            r#"
            DELETE FROM commands
            WHERE id = $1
            RETURNING id, how_to, platform, command_line
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(maybe_row.as_ref().map(row_to_command))
    }
}

fn row_to_command(row: &sqlx::postgres::PgRow) -> Command {
    Command {
        id: row.get::<i32, _>("id"),
        how_to: row.get::<String, _>("how_to"),
        platform: row.get::<String, _>("platform"),
        command_line: row.get::<String, _>("command_line"),
    }
}

fn map_sqlx_error(error: sqlx::Error) -> DomainError {
    match error {
        sqlx::Error::Database(db_error) => {
            // 23502 is not_null_violation: a required field was absent.
            if db_error.code().as_deref() == Some("23502") {
                DomainError::Validation(db_error.to_string())
            } else {
                DomainError::Storage(db_error.to_string())
            }
        }
        other => DomainError::Storage(other.to_string()),
    }
}
