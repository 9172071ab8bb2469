//! Note repository implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqlitePool, SqliteRow};
use sqlx::Row;
use tracing::debug;
use uuid::Uuid;

use notecraft_core::{
    CreateNoteRequest, Error, Note, NoteRepository, Result, UpdateNoteRequest,
};

const NOTE_COLUMNS: &str =
    "id, title, content, tags, event_date, event_time, created_at, updated_at";

/// Create the note table if it does not exist yet.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS note (
            id TEXT PRIMARY KEY NOT NULL,
            title TEXT NOT NULL DEFAULT '',
            content TEXT NOT NULL DEFAULT '',
            tags TEXT NOT NULL DEFAULT '',
            event_date TEXT,
            event_time TEXT,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await
    .map_err(Error::Database)?;
    Ok(())
}

fn note_from_row(row: &SqliteRow) -> Result<Note> {
    let id: String = row.try_get("id").map_err(Error::Database)?;
    let id = Uuid::parse_str(&id)
        .map_err(|e| Error::Internal(format!("Corrupt note id {:?}: {}", id, e)))?;

    Ok(Note {
        id,
        title: row.try_get("title").map_err(Error::Database)?,
        content: row.try_get("content").map_err(Error::Database)?,
        tags: row.try_get("tags").map_err(Error::Database)?,
        event_date: row.try_get("event_date").map_err(Error::Database)?,
        event_time: row.try_get("event_time").map_err(Error::Database)?,
        created_at: row
            .try_get::<DateTime<Utc>, _>("created_at")
            .map_err(Error::Database)?,
        updated_at: row
            .try_get::<DateTime<Utc>, _>("updated_at")
            .map_err(Error::Database)?,
    })
}

/// SQLite implementation of NoteRepository.
#[derive(Clone)]
pub struct SqliteNoteRepository {
    pool: SqlitePool,
}

impl SqliteNoteRepository {
    /// Create a new SqliteNoteRepository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NoteRepository for SqliteNoteRepository {
    async fn insert(&self, req: CreateNoteRequest) -> Result<Note> {
        let now = Utc::now();
        let note = Note {
            id: Uuid::now_v7(),
            title: req.title,
            content: req.content,
            tags: req.tags,
            event_date: req.event_date,
            event_time: req.event_time,
            created_at: now,
            updated_at: now,
        };

        sqlx::query(
            "INSERT INTO note (id, title, content, tags, event_date, event_time, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(note.id.to_string())
        .bind(&note.title)
        .bind(&note.content)
        .bind(&note.tags)
        .bind(&note.event_date)
        .bind(&note.event_time)
        .bind(note.created_at)
        .bind(note.updated_at)
        .execute(&self.pool)
        .await
        .map_err(Error::Database)?;

        debug!(
            subsystem = "db",
            component = "notes",
            op = "insert",
            note_id = %note.id,
            "Note inserted"
        );
        Ok(note)
    }

    async fn fetch(&self, id: Uuid) -> Result<Note> {
        let row = sqlx::query(&format!("SELECT {} FROM note WHERE id = ?", NOTE_COLUMNS))
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(Error::Database)?
            .ok_or(Error::NoteNotFound(id))?;
        note_from_row(&row)
    }

    async fn list(&self) -> Result<Vec<Note>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM note ORDER BY created_at DESC, id DESC",
            NOTE_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(Error::Database)?;
        rows.iter().map(note_from_row).collect()
    }

    async fn update(&self, id: Uuid, req: UpdateNoteRequest) -> Result<Note> {
        let result = sqlx::query(
            "UPDATE note SET
                title = COALESCE(?, title),
                content = COALESCE(?, content),
                tags = COALESCE(?, tags),
                event_date = COALESCE(?, event_date),
                event_time = COALESCE(?, event_time),
                updated_at = ?
             WHERE id = ?",
        )
        .bind(req.title)
        .bind(req.content)
        .bind(req.tags)
        .bind(req.event_date)
        .bind(req.event_time)
        .bind(Utc::now())
        .bind(id.to_string())
        .execute(&self.pool)
        .await
        .map_err(Error::Database)?;

        if result.rows_affected() == 0 {
            return Err(Error::NoteNotFound(id));
        }

        debug!(subsystem = "db", component = "notes", op = "update", note_id = %id, "Note updated");
        self.fetch(id).await
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM note WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(Error::Database)?;

        if result.rows_affected() == 0 {
            return Err(Error::NoteNotFound(id));
        }

        debug!(subsystem = "db", component = "notes", op = "delete", note_id = %id, "Note deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Database;

    fn groceries() -> CreateNoteRequest {
        CreateNoteRequest {
            title: "Buy Groceries".to_string(),
            content: "Remember to buy groceries.".to_string(),
            tags: "shopping, groceries".to_string(),
            event_date: None,
            event_time: None,
        }
    }

    #[tokio::test]
    async fn test_insert_and_fetch() {
        let db = Database::connect_in_memory().await.unwrap();
        let created = db.notes.insert(groceries()).await.unwrap();

        let fetched = db.notes.fetch(created.id).await.unwrap();
        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.title, "Buy Groceries");
        assert_eq!(fetched.tags, "shopping, groceries");
        assert!(fetched.event_date.is_none());
    }

    #[tokio::test]
    async fn test_fetch_missing_is_not_found() {
        let db = Database::connect_in_memory().await.unwrap();
        let id = Uuid::now_v7();
        let err = db.notes.fetch(id).await.unwrap_err();
        assert!(matches!(err, Error::NoteNotFound(missing) if missing == id));
    }

    #[tokio::test]
    async fn test_list_newest_first() {
        let db = Database::connect_in_memory().await.unwrap();
        let first = db.notes.insert(groceries()).await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        let second = db
            .notes
            .insert(CreateNoteRequest {
                title: "Badminton at PolyU".to_string(),
                event_date: Some("2024-01-16".to_string()),
                event_time: Some("17:00".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        let notes = db.notes.list().await.unwrap();
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].id, second.id);
        assert_eq!(notes[1].id, first.id);
        assert_eq!(notes[0].event_time.as_deref(), Some("17:00"));
    }

    #[tokio::test]
    async fn test_update_partial() {
        let db = Database::connect_in_memory().await.unwrap();
        let created = db.notes.insert(groceries()).await.unwrap();

        let updated = db
            .notes
            .update(
                created.id,
                UpdateNoteRequest {
                    title: Some("Weekly Shop".to_string()),
                    event_date: Some("2024-02-01".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.title, "Weekly Shop");
        assert_eq!(updated.content, "Remember to buy groceries.");
        assert_eq!(updated.event_date.as_deref(), Some("2024-02-01"));
        assert!(updated.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let db = Database::connect_in_memory().await.unwrap();
        let err = db
            .notes
            .update(Uuid::now_v7(), UpdateNoteRequest::default())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::NoteNotFound(_)));
    }

    #[tokio::test]
    async fn test_delete() {
        let db = Database::connect_in_memory().await.unwrap();
        let created = db.notes.insert(groceries()).await.unwrap();

        db.notes.delete(created.id).await.unwrap();
        assert!(matches!(db.notes.fetch(created.id).await, Err(Error::NoteNotFound(_))));
        assert!(matches!(db.notes.delete(created.id).await, Err(Error::NoteNotFound(_))));
    }
}
