use std::fmt;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{Connection, params};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::generate::ComponentInstance;
use crate::templates::Style;

/// Store failures that handlers map onto HTTP statuses: 400 for a malformed
/// id, 404 for a missing row, 500 for everything else.
#[derive(Debug)]
pub enum StoreError {
    InvalidId,
    NotFound,
    Internal(anyhow::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::InvalidId => write!(f, "Invalid project ID"),
            StoreError::NotFound => write!(f, "Project not found"),
            StoreError::Internal(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<rusqlite::Error> for StoreError {
    fn from(e: rusqlite::Error) -> Self {
        StoreError::Internal(e.into())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Internal(e.into())
    }
}

impl From<tokio::task::JoinError> for StoreError {
    fn from(e: tokio::task::JoinError) -> Self {
        StoreError::Internal(e.into())
    }
}

/// Content fields of a project, as supplied by the caller on create/update.
/// Identifier and timestamps are server-owned and never accepted as input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectInput {
    pub name: String,
    pub prompt: String,
    pub html: String,
    pub css: String,
    pub js: String,
    #[serde(default)]
    pub components: Vec<ComponentInstance>,
    pub meta_description: String,
    pub title: String,
    #[serde(default)]
    pub style: Style,
    #[serde(default = "default_color_scheme")]
    pub color_scheme: String,
}

fn default_color_scheme() -> String {
    "default".to_string()
}

/// A persisted project: input fields plus server-assigned identity and
/// timestamps. Updates replace the content fields wholesale; last writer
/// wins.
#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub id: String,
    #[serde(flatten)]
    pub content: ProjectInput,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// SQLite-backed project store. The connection is owned here and injected
/// through `AppState`; blocking work runs off the async runtime.
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

fn now_rfc3339() -> String {
    // Fixed-width UTC timestamps so lexicographic ORDER BY is chronological
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, StoreError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| StoreError::Internal(e.into()))
}

fn validate_id(id: &str) -> Result<(), StoreError> {
    Uuid::parse_str(id).map(|_| ()).map_err(|_| StoreError::InvalidId)
}

struct ProjectRow {
    id: String,
    name: String,
    document: String,
    created_at: String,
    updated_at: String,
}

fn row_to_project(row: ProjectRow) -> Result<Project, StoreError> {
    let mut content: ProjectInput = serde_json::from_str(&row.document)?;
    content.name = row.name;
    Ok(Project {
        id: row.id,
        content,
        created_at: parse_timestamp(&row.created_at)?,
        updated_at: parse_timestamp(&row.updated_at)?,
    })
}

impl Database {
    /// Opens the store (file-based, or in-memory when no path is given) and
    /// creates the projects table if needed.
    pub fn new(db_path: Option<PathBuf>) -> anyhow::Result<Self> {
        let conn = if let Some(path) = db_path {
            info!("Opening SQLite database at: {}", path.display());
            Connection::open(path)?
        } else {
            info!("Using in-memory SQLite database");
            Connection::open_in_memory()?
        };

        conn.execute(
            "CREATE TABLE IF NOT EXISTS projects (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                document TEXT NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )",
            [],
        )?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Inserts a project and returns its server-assigned identifier.
    pub async fn insert_project(&self, input: ProjectInput) -> Result<String, StoreError> {
        let conn = Arc::clone(&self.conn);

        tokio::task::spawn_blocking(move || {
            let id = Uuid::new_v4().to_string();
            let now = now_rfc3339();
            let document = serde_json::to_string(&input)?;

            let conn = conn.lock().unwrap();
            conn.execute(
                "INSERT INTO projects (id, name, document, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![id, input.name, document, now, now],
            )?;
            Ok(id)
        })
        .await?
    }

    /// All projects, newest first by creation timestamp.
    pub async fn list_projects(&self) -> Result<Vec<Project>, StoreError> {
        let conn = Arc::clone(&self.conn);

        tokio::task::spawn_blocking(move || {
            let conn = conn.lock().unwrap();
            let mut stmt = conn.prepare(
                "SELECT id, name, document, created_at, updated_at
                 FROM projects ORDER BY created_at DESC",
            )?;
            let rows = stmt.query_map([], |row| {
                Ok(ProjectRow {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    document: row.get(2)?,
                    created_at: row.get(3)?,
                    updated_at: row.get(4)?,
                })
            })?;

            let mut projects = Vec::new();
            for row in rows {
                projects.push(row_to_project(row?)?);
            }
            Ok(projects)
        })
        .await?
    }

    /// Fetches one project by id.
    pub async fn get_project(&self, id: &str) -> Result<Project, StoreError> {
        validate_id(id)?;
        let conn = Arc::clone(&self.conn);
        let id = id.to_string();

        tokio::task::spawn_blocking(move || {
            let conn = conn.lock().unwrap();
            let result = conn.query_row(
                "SELECT id, name, document, created_at, updated_at
                 FROM projects WHERE id = ?1",
                params![id],
                |row| {
                    Ok(ProjectRow {
                        id: row.get(0)?,
                        name: row.get(1)?,
                        document: row.get(2)?,
                        created_at: row.get(3)?,
                        updated_at: row.get(4)?,
                    })
                },
            );

            match result {
                Ok(row) => row_to_project(row),
                Err(rusqlite::Error::QueryReturnedNoRows) => Err(StoreError::NotFound),
                Err(e) => Err(e.into()),
            }
        })
        .await?
    }

    /// Replaces a project's content fields. The identifier and creation
    /// timestamp are preserved; the update timestamp is bumped.
    pub async fn update_project(&self, id: &str, input: ProjectInput) -> Result<(), StoreError> {
        validate_id(id)?;
        let conn = Arc::clone(&self.conn);
        let id = id.to_string();

        tokio::task::spawn_blocking(move || {
            let document = serde_json::to_string(&input)?;
            let now = now_rfc3339();

            let conn = conn.lock().unwrap();
            let changed = conn.execute(
                "UPDATE projects SET name = ?2, document = ?3, updated_at = ?4 WHERE id = ?1",
                params![id, input.name, document, now],
            )?;

            if changed == 0 {
                return Err(StoreError::NotFound);
            }
            Ok(())
        })
        .await?
    }

    /// Deletes a project by id.
    pub async fn delete_project(&self, id: &str) -> Result<(), StoreError> {
        validate_id(id)?;
        let conn = Arc::clone(&self.conn);
        let id = id.to_string();

        tokio::task::spawn_blocking(move || {
            let conn = conn.lock().unwrap();
            let deleted = conn.execute("DELETE FROM projects WHERE id = ?1", params![id])?;

            if deleted == 0 {
                return Err(StoreError::NotFound);
            }
            Ok(())
        })
        .await?
    }
}
