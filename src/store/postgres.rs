//! Postgres-backed credential store over `sqlx`.

use sqlx::{PgPool, Row};
use tracing::Instrument;

use super::{CredentialStore, InsertOutcome, StoreError, TableConfig, UpdateOutcome, UserRecord};

/// Credential store issuing point queries against a configurable
/// `{table, username_col, password_col}` triple.
#[derive(Debug, Clone)]
pub struct PgCredentialStore {
    pool: PgPool,
    table: TableConfig,
    fetch_query: String,
    insert_query: String,
    update_query: String,
    list_query: String,
}

impl PgCredentialStore {
    #[must_use]
    pub fn new(pool: PgPool, table: TableConfig) -> Self {
        let (tbl, user, pass) = (
            quote_ident(table.table()),
            quote_ident(table.username_col()),
            quote_ident(table.password_col()),
        );
        let fetch_query = format!("SELECT {user}, {pass} FROM {tbl} WHERE {user} = $1");
        let insert_query = format!("INSERT INTO {tbl} ({user}, {pass}) VALUES ($1, $2)");
        let update_query = format!("UPDATE {tbl} SET {pass} = $2 WHERE {user} = $1");
        let list_query = format!("SELECT {user}, {pass} FROM {tbl}");
        Self {
            pool,
            table,
            fetch_query,
            insert_query,
            update_query,
            list_query,
        }
    }

    #[must_use]
    pub fn table(&self) -> &TableConfig {
        &self.table
    }

    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

impl CredentialStore for PgCredentialStore {
    async fn fetch(&self, username: &str) -> Result<Option<UserRecord>, StoreError> {
        let span = tracing::info_span!(
            "db.query",
            db.system = "postgresql",
            db.operation = "SELECT",
            db.statement = self.fetch_query.as_str()
        );
        let row = sqlx::query(&self.fetch_query)
            .bind(username)
            .fetch_optional(&self.pool)
            .instrument(span)
            .await?;

        Ok(row.map(|row| UserRecord {
            username: row.get(0),
            password: row.get(1),
        }))
    }

    async fn insert(&self, username: &str, credential: &str) -> Result<InsertOutcome, StoreError> {
        let span = tracing::info_span!(
            "db.query",
            db.system = "postgresql",
            db.operation = "INSERT",
            db.statement = self.insert_query.as_str()
        );
        let result = sqlx::query(&self.insert_query)
            .bind(username)
            .bind(credential)
            .execute(&self.pool)
            .instrument(span)
            .await;

        match result {
            Ok(_) => Ok(InsertOutcome::Inserted),
            Err(err) if is_unique_violation(&err) => Ok(InsertOutcome::Conflict),
            Err(err) => Err(err.into()),
        }
    }

    async fn update_password(
        &self,
        username: &str,
        new_credential: &str,
    ) -> Result<UpdateOutcome, StoreError> {
        let span = tracing::info_span!(
            "db.query",
            db.system = "postgresql",
            db.operation = "UPDATE",
            db.statement = self.update_query.as_str()
        );
        let result = sqlx::query(&self.update_query)
            .bind(username)
            .bind(new_credential)
            .execute(&self.pool)
            .instrument(span)
            .await?;

        if result.rows_affected() == 0 {
            Ok(UpdateOutcome::NotFound)
        } else {
            Ok(UpdateOutcome::Updated)
        }
    }

    async fn list_all(&self) -> Result<Vec<UserRecord>, StoreError> {
        let span = tracing::info_span!(
            "db.query",
            db.system = "postgresql",
            db.operation = "SELECT",
            db.statement = self.list_query.as_str()
        );
        let rows = sqlx::query(&self.list_query)
            .fetch_all(&self.pool)
            .instrument(span)
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| UserRecord {
                username: row.get(0),
                password: row.get(1),
            })
            .collect())
    }
}

/// Quote an identifier so configurable table/column names cannot break out of
/// identifier position.
fn quote_ident(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().is_some_and(|code| code.as_ref() == "23505"),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_ident_wraps_and_escapes() {
        assert_eq!(quote_ident("users"), "\"users\"");
        assert_eq!(quote_ident("odd\"name"), "\"odd\"\"name\"");
    }

    #[tokio::test]
    async fn queries_use_configured_names() {
        let pool = PgPool::connect_lazy("postgres://localhost/ingresso")
            .expect("lazy pool should not connect eagerly");
        let store = PgCredentialStore::new(
            pool,
            TableConfig::new()
                .with_table("accounts")
                .with_username_col("login")
                .with_password_col("secret"),
        );
        assert_eq!(
            store.fetch_query,
            "SELECT \"login\", \"secret\" FROM \"accounts\" WHERE \"login\" = $1"
        );
        assert_eq!(
            store.insert_query,
            "INSERT INTO \"accounts\" (\"login\", \"secret\") VALUES ($1, $2)"
        );
        assert_eq!(
            store.update_query,
            "UPDATE \"accounts\" SET \"secret\" = $2 WHERE \"login\" = $1"
        );
        assert_eq!(store.list_query, "SELECT \"login\", \"secret\" FROM \"accounts\"");
    }
}
