//! Principal store
//!
//! The pipeline only needs a read-only lookup by ID. `PgPrincipalStore`
//! uses runtime `sqlx::query_as` against the `users` table and never selects
//! the credential hash.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::types::Principal;

#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
    /// Row exists but cannot be mapped (e.g. a role outside the closed set).
    #[error("corrupt principal record: {0}")]
    Corrupt(String),
}

/// Read-only principal lookup.
///
/// Implementations must be safe to call concurrently from many requests.
/// Dropping the returned future must abandon the lookup.
#[async_trait]
pub trait PrincipalStore: Send + Sync {
    async fn find_principal(&self, id: Uuid) -> Result<Option<Principal>, StoreError>;
}

#[derive(Clone)]
pub struct PgPrincipalStore {
    pool: PgPool,
}

impl PgPrincipalStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PrincipalStore for PgPrincipalStore {
    async fn find_principal(&self, id: Uuid) -> Result<Option<Principal>, StoreError> {
        sqlx::query_as::<_, Principal>(
            r#"
            SELECT id, name, email, role,
                   is_active AS active,
                   created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => {
                StoreError::Corrupt(e.to_string())
            }
            other => StoreError::Unavailable(other.to_string()),
        })
    }
}
