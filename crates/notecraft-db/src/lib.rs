//! # notecraft-db
//!
//! SQLite storage for notes produced by the extraction pipeline.
//!
//! ## Example
//!
//! ```rust,ignore
//! use notecraft_db::{Database, NoteRepository, CreateNoteRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let db = Database::connect("sqlite://notecraft.db?mode=rwc").await?;
//!
//!     let note = db.notes.insert(CreateNoteRequest {
//!         title: "Buy Groceries".to_string(),
//!         content: "Remember to buy groceries.".to_string(),
//!         tags: "shopping, groceries".to_string(),
//!         ..Default::default()
//!     }).await?;
//!
//!     println!("Created note: {}", note.id);
//!     Ok(())
//! }
//! ```

pub mod notes;
pub mod pool;

pub use notecraft_core::{CreateNoteRequest, NoteRepository, UpdateNoteRequest};
pub use notes::{ensure_schema, SqliteNoteRepository};
pub use pool::{create_pool_with_config, PoolConfig};

use notecraft_core::Result;

/// Connection pool plus the repositories built on it.
#[derive(Clone)]
pub struct Database {
    /// The underlying connection pool.
    pub pool: sqlx::SqlitePool,
    /// Note repository for CRUD operations.
    pub notes: SqliteNoteRepository,
}

impl Database {
    /// Connect to `database_url` and make sure the schema exists.
    pub async fn connect(database_url: &str) -> Result<Self> {
        Self::connect_with_config(database_url, PoolConfig::default()).await
    }

    /// Fresh private in-memory database.
    pub async fn connect_in_memory() -> Result<Self> {
        Self::connect_with_config("sqlite::memory:", PoolConfig::in_memory()).await
    }

    pub async fn connect_with_config(database_url: &str, config: PoolConfig) -> Result<Self> {
        let pool = create_pool_with_config(database_url, config).await?;
        ensure_schema(&pool).await?;
        Ok(Self {
            notes: SqliteNoteRepository::new(pool.clone()),
            pool,
        })
    }
}
