//! Persists rendered transcripts, one file per chat, with a SQLite index
//! so a chat keeps its filename across updates.

pub mod slug;

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use rusqlite::{params, Connection, OptionalExtension};
use thiserror::Error;
use tracing::{debug, info};

use crate::slug::{extract_title, slugify};

const SNAPSHOT_DIR: &str = "snapshots";
const DB_FILE: &str = "snapshots.db";

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS chat_snapshots (
    uuid TEXT PRIMARY KEY,
    filename TEXT NOT NULL,
    title TEXT,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);
"#;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("snapshot io: {0}")]
    Io(#[from] std::io::Error),
    #[error("snapshot index: {0}")]
    Db(#[from] rusqlite::Error),
}

#[derive(Clone, Debug)]
pub struct SnapshotEntry {
    pub chat_id: String,
    pub filename: String,
    pub title: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

pub struct SnapshotStore {
    snapshot_dir: PathBuf,
    conn: Connection,
}

impl SnapshotStore {
    /// Open (or create) the store under `base_dir`.
    pub fn new(base_dir: &Path) -> Result<Self, StoreError> {
        let snapshot_dir = base_dir.join(SNAPSHOT_DIR);
        fs::create_dir_all(&snapshot_dir)?;
        let db_path = base_dir.join(DB_FILE);
        let conn = Connection::open(&db_path)?;
        conn.execute_batch(SCHEMA)?;
        info!(db = %db_path.display(), "snapshot index ready");
        Ok(Self { snapshot_dir, conn })
    }

    /// Write (or rewrite) the snapshot for `chat_id`, reusing the indexed
    /// filename when the chat is already known. Returns the file path.
    pub fn update_snapshot(&self, chat_id: &str, content: &str) -> Result<PathBuf, StoreError> {
        let now = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

        let existing: Option<String> = self
            .conn
            .query_row(
                "SELECT filename FROM chat_snapshots WHERE uuid = ?1",
                params![chat_id],
                |row| row.get(0),
            )
            .optional()?;

        let (path, is_new) = match existing {
            Some(filename) => (self.snapshot_dir.join(filename), false),
            None => {
                let title = extract_title(content);
                let filename = self.fresh_filename(&title);
                self.conn.execute(
                    "INSERT INTO chat_snapshots (uuid, filename, title, created_at, updated_at)
                     VALUES (?1, ?2, ?3, ?4, ?5)",
                    params![chat_id, filename, title, now, now],
                )?;
                (self.snapshot_dir.join(filename), true)
            }
        };

        fs::write(&path, content)?;
        if !is_new {
            self.conn.execute(
                "UPDATE chat_snapshots SET updated_at = ?1 WHERE uuid = ?2",
                params![now, chat_id],
            )?;
        }
        debug!(path = %path.display(), created = is_new, "snapshot written");
        Ok(path)
    }

    /// Date-prefixed slug filename, suffixed until free on disk.
    fn fresh_filename(&self, title: &str) -> String {
        let base = format!("{}-{}", Local::now().format("%Y%m%d"), slugify(title));
        let mut filename = format!("{base}.txt");
        let mut counter = 1;
        while self.snapshot_dir.join(&filename).exists() {
            filename = format!("{base}-{counter}.txt");
            counter += 1;
        }
        filename
    }

    /// All indexed snapshots, most recently updated first.
    pub fn list_snapshots(&self) -> Result<Vec<SnapshotEntry>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT uuid, filename, title, created_at, updated_at
             FROM chat_snapshots ORDER BY updated_at DESC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(SnapshotEntry {
                chat_id: row.get(0)?,
                filename: row.get(1)?,
                title: row.get(2)?,
                created_at: row.get(3)?,
                updated_at: row.get(4)?,
            })
        })?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    pub fn snapshot_dir(&self) -> &Path {
        &self.snapshot_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const TRANSCRIPT: &str =
        "User: \n\nHow do I grow tomatoes on a balcony\n\n----\n\nAssistant: \n\nStart with a deep pot";

    #[test]
    fn creates_then_reuses_the_indexed_filename() {
        let dir = tempdir().unwrap();
        let store = SnapshotStore::new(dir.path()).unwrap();

        let first = store.update_snapshot("00aa-11bb", TRANSCRIPT).unwrap();
        assert!(first.exists());
        let name = first.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.ends_with(".txt"));
        assert!(name.contains("how-do-i-grow-tomatoes"));

        let second = store
            .update_snapshot("00aa-11bb", "User: \n\nchanged")
            .unwrap();
        assert_eq!(first, second);
        assert_eq!(fs::read_to_string(&second).unwrap(), "User: \n\nchanged");
        assert_eq!(store.list_snapshots().unwrap().len(), 1);
    }

    #[test]
    fn distinct_chats_with_the_same_title_get_suffixed_files() {
        let dir = tempdir().unwrap();
        let store = SnapshotStore::new(dir.path()).unwrap();

        let a = store.update_snapshot("chat-a", TRANSCRIPT).unwrap();
        let b = store.update_snapshot("chat-b", TRANSCRIPT).unwrap();
        assert_ne!(a, b);
        assert!(b
            .file_name()
            .unwrap()
            .to_string_lossy()
            .ends_with("-1.txt"));
        assert_eq!(store.list_snapshots().unwrap().len(), 2);
    }

    #[test]
    fn untitled_content_still_gets_a_filename() {
        let dir = tempdir().unwrap();
        let store = SnapshotStore::new(dir.path()).unwrap();
        let path = store.update_snapshot("chat-c", "Assistant: \n\nhi").unwrap();
        assert!(path
            .file_name()
            .unwrap()
            .to_string_lossy()
            .contains("untitled-chat"));
    }
}
