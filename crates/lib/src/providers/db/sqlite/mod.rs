//! SQLite-backed storage provider.
//!
//! Holds the per-user records (guidelines, uploads, scrapes) and the vector
//! index. Chunk writes follow a strict replace contract: for a given
//! `(owner, source_type, source_id)` the chunk set is deleted and re-inserted
//! inside one transaction, so a concurrent reader never observes a partial
//! state.

use crate::chunk::{split_text, DEFAULT_CHUNK_CHARS};
use crate::embed::embed;
use crate::errors::PipelineError;
use crate::ingest::{guideline_index_text, upload_item_text};
use crate::types::{
    CandidateChunk, FileKind, GuidelineCategory, GuidelineRecord, GuidelineSet, ParsedItem,
    ScrapeRecord, SourceType, StoredChunk, UploadRecord, WebsiteScrapeRecord,
};
use std::fmt::{self, Debug};
use tracing::{debug, info};
use turso::{params, Connection, Database, Value as TursoValue};

mod sql;

/// A chunk staged in memory during a website crawl, written with the real
/// parent id only when the whole corpus is committed.
#[derive(Debug, Clone)]
pub struct StagedChunk {
    pub text: String,
    pub vector: Vec<f32>,
}

/// Encodes a vector as a little-endian f32 blob for storage.
pub fn vector_to_blob(vector: &[f32]) -> Vec<u8> {
    vector.iter().flat_map(|v| v.to_le_bytes()).collect()
}

/// Decodes a stored little-endian f32 blob back into a vector.
pub fn blob_to_vector(blob: &[u8]) -> Vec<f32> {
    blob.chunks_exact(4)
        .map(|b| f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
        .collect()
}

/// A provider for interacting with a local SQLite database using Turso.
///
/// When cloned, it shares the same underlying database, allowing concurrent
/// access to the same file or in-memory instance.
#[derive(Clone)]
pub struct SqliteProvider {
    pub db: Database,
}

impl Debug for SqliteProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SqliteProvider").finish_non_exhaustive()
    }
}

impl SqliteProvider {
    /// Creates a new `SqliteProvider` from a file path, or ":memory:" for an
    /// isolated in-memory database (share it across instances by cloning).
    pub async fn new(db_path: &str) -> Result<Self, PipelineError> {
        let db = turso::Builder::new_local(db_path)
            .build()
            .await
            .map_err(|e| PipelineError::StorageConnection(e.to_string()))?;

        // WAL improves concurrency for file-backed databases; it is a no-op
        // in memory. PRAGMA returns a row, so `query` is required.
        let conn = db
            .connect()
            .map_err(|e| PipelineError::StorageConnection(e.to_string()))?;
        conn.query("PRAGMA journal_mode=WAL;", ())
            .await
            .map_err(|e| PipelineError::StorageConnection(e.to_string()))?;

        Ok(Self { db })
    }

    fn conn(&self) -> Result<Connection, PipelineError> {
        self.db
            .connect()
            .map_err(|e| PipelineError::StorageConnection(e.to_string()))
    }

    /// Ensures all application tables and indexes exist. Idempotent, safe to
    /// call on every startup.
    pub async fn initialize_schema(&self) -> Result<(), PipelineError> {
        let conn = self.conn()?;
        for statement in sql::ALL_TABLE_CREATION_SQL {
            conn.execute(statement, ())
                .await
                .map_err(|e| PipelineError::StorageOperationFailed(e.to_string()))?;
        }
        Ok(())
    }

    async fn last_insert_rowid(conn: &Connection) -> Result<i64, PipelineError> {
        let mut rows = conn.query("SELECT last_insert_rowid()", ()).await?;
        let row = rows.next().await?.ok_or_else(|| {
            PipelineError::StorageOperationFailed("last_insert_rowid returned no row".to_string())
        })?;
        Ok(row.get(0)?)
    }

    // --- Guidelines ---

    fn guideline_from_row(row: &turso::Row) -> Result<GuidelineRecord, PipelineError> {
        let category_str: String = row.get(4)?;
        let category = GuidelineCategory::parse(&category_str).ok_or_else(|| {
            PipelineError::StorageOperationFailed(format!(
                "Unknown guideline category '{category_str}' in storage"
            ))
        })?;
        Ok(GuidelineRecord {
            id: row.get(0)?,
            owner_id: row.get(1)?,
            title: row.get(2)?,
            content: row.get(3)?,
            category,
            created_at: row.get(5)?,
        })
    }

    pub async fn create_guideline(
        &self,
        owner_id: &str,
        title: &str,
        content: &str,
        category: GuidelineCategory,
    ) -> Result<GuidelineRecord, PipelineError> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO guidelines (owner_id, title, content, category) VALUES (?, ?, ?, ?)",
            params![owner_id, title, content, category.as_str()],
        )
        .await?;
        let id = Self::last_insert_rowid(&conn).await?;
        self.get_guideline(owner_id, id).await?.ok_or_else(|| {
            PipelineError::StorageOperationFailed("Created guideline not found".to_string())
        })
    }

    pub async fn get_guideline(
        &self,
        owner_id: &str,
        id: i64,
    ) -> Result<Option<GuidelineRecord>, PipelineError> {
        let conn = self.conn()?;
        let mut rows = conn
            .query(
                "SELECT id, owner_id, title, content, category, created_at
                 FROM guidelines WHERE owner_id = ? AND id = ?",
                params![owner_id, id],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(Self::guideline_from_row(&row)?)),
            None => Ok(None),
        }
    }

    pub async fn list_guidelines(
        &self,
        owner_id: &str,
    ) -> Result<Vec<GuidelineRecord>, PipelineError> {
        let conn = self.conn()?;
        let mut rows = conn
            .query(
                "SELECT id, owner_id, title, content, category, created_at
                 FROM guidelines WHERE owner_id = ?
                 ORDER BY created_at DESC, id DESC",
                params![owner_id],
            )
            .await?;
        let mut records = Vec::new();
        while let Some(row) = rows.next().await? {
            records.push(Self::guideline_from_row(&row)?);
        }
        Ok(records)
    }

    /// Partial update; `None` fields keep their stored value. Returns the
    /// updated record, or `None` when the guideline does not exist.
    pub async fn update_guideline(
        &self,
        owner_id: &str,
        id: i64,
        title: Option<&str>,
        content: Option<&str>,
        category: Option<GuidelineCategory>,
    ) -> Result<Option<GuidelineRecord>, PipelineError> {
        let Some(current) = self.get_guideline(owner_id, id).await? else {
            return Ok(None);
        };
        let title = title.unwrap_or(current.title.as_str());
        let content = content.unwrap_or(current.content.as_str());
        let category = category.unwrap_or(current.category);

        let conn = self.conn()?;
        conn.execute(
            "UPDATE guidelines SET title = ?, content = ?, category = ?
             WHERE owner_id = ? AND id = ?",
            params![title, content, category.as_str(), owner_id, id],
        )
        .await?;
        self.get_guideline(owner_id, id).await
    }

    pub async fn delete_guideline(&self, owner_id: &str, id: i64) -> Result<bool, PipelineError> {
        let conn = self.conn()?;
        let affected = conn
            .execute(
                "DELETE FROM guidelines WHERE owner_id = ? AND id = ?",
                params![owner_id, id],
            )
            .await?;
        Ok(affected > 0)
    }

    /// All guideline contents of one owner, grouped by category, in
    /// insertion order. Used verbatim by the prompt composer.
    pub async fn guidelines_by_category(
        &self,
        owner_id: &str,
    ) -> Result<GuidelineSet, PipelineError> {
        let conn = self.conn()?;
        let mut rows = conn
            .query(
                "SELECT category, content FROM guidelines WHERE owner_id = ? ORDER BY id ASC",
                params![owner_id],
            )
            .await?;
        let mut set = GuidelineSet::default();
        while let Some(row) = rows.next().await? {
            let category_str: String = row.get(0)?;
            let content: String = row.get(1)?;
            if let Some(category) = GuidelineCategory::parse(&category_str) {
                set.push(category, content);
            }
        }
        Ok(set)
    }

    // --- Uploads ---

    fn upload_from_row(row: &turso::Row) -> Result<UploadRecord, PipelineError> {
        let kind_str: String = row.get(3)?;
        let file_kind = FileKind::from_extension(&kind_str).ok_or_else(|| {
            PipelineError::StorageOperationFailed(format!(
                "Unknown upload file kind '{kind_str}' in storage"
            ))
        })?;
        let parsed_json: String = row.get(4)?;
        let parsed_items: Vec<ParsedItem> = serde_json::from_str(&parsed_json)?;
        let item_count: i64 = row.get(5)?;
        Ok(UploadRecord {
            id: row.get(0)?,
            owner_id: row.get(1)?,
            filename: row.get(2)?,
            file_kind,
            parsed_items,
            item_count: item_count as usize,
            created_at: row.get(6)?,
        })
    }

    pub async fn create_upload(
        &self,
        owner_id: &str,
        filename: &str,
        file_kind: FileKind,
        raw_text: &str,
        parsed_items: &[ParsedItem],
    ) -> Result<UploadRecord, PipelineError> {
        let conn = self.conn()?;
        let parsed_json = serde_json::to_string(parsed_items)?;
        conn.execute(
            "INSERT INTO uploads (owner_id, filename, file_kind, raw_text, parsed_items, item_count)
             VALUES (?, ?, ?, ?, ?, ?)",
            params![
                owner_id,
                filename,
                file_kind.as_str(),
                raw_text,
                parsed_json,
                parsed_items.len() as i64
            ],
        )
        .await?;
        let id = Self::last_insert_rowid(&conn).await?;
        self.get_upload(owner_id, id).await?.ok_or_else(|| {
            PipelineError::StorageOperationFailed("Created upload not found".to_string())
        })
    }

    pub async fn get_upload(
        &self,
        owner_id: &str,
        id: i64,
    ) -> Result<Option<UploadRecord>, PipelineError> {
        let conn = self.conn()?;
        let mut rows = conn
            .query(
                "SELECT id, owner_id, filename, file_kind, parsed_items, item_count, created_at
                 FROM uploads WHERE owner_id = ? AND id = ?",
                params![owner_id, id],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(Self::upload_from_row(&row)?)),
            None => Ok(None),
        }
    }

    pub async fn list_uploads(&self, owner_id: &str) -> Result<Vec<UploadRecord>, PipelineError> {
        let conn = self.conn()?;
        let mut rows = conn
            .query(
                "SELECT id, owner_id, filename, file_kind, parsed_items, item_count, created_at
                 FROM uploads WHERE owner_id = ?
                 ORDER BY created_at DESC, id DESC",
                params![owner_id],
            )
            .await?;
        let mut records = Vec::new();
        while let Some(row) = rows.next().await? {
            records.push(Self::upload_from_row(&row)?);
        }
        Ok(records)
    }

    pub async fn delete_upload(&self, owner_id: &str, id: i64) -> Result<bool, PipelineError> {
        let conn = self.conn()?;
        let affected = conn
            .execute(
                "DELETE FROM uploads WHERE owner_id = ? AND id = ?",
                params![owner_id, id],
            )
            .await?;
        Ok(affected > 0)
    }

    // --- Social scrapes (LinkedIn / Trustpilot) ---

    fn scrape_from_row(row: &turso::Row) -> Result<ScrapeRecord, PipelineError> {
        Ok(ScrapeRecord {
            id: row.get(0)?,
            owner_id: row.get(1)?,
            url: row.get(2)?,
            content: row.get(3)?,
            created_at: row.get(4)?,
        })
    }

    async fn insert_scrape(
        &self,
        table: &'static str,
        owner_id: &str,
        url: &str,
        content: &str,
    ) -> Result<ScrapeRecord, PipelineError> {
        let conn = self.conn()?;
        conn.execute(
            &format!("INSERT INTO {table} (owner_id, url, content) VALUES (?, ?, ?)"),
            params![owner_id, url, content],
        )
        .await?;
        let id = Self::last_insert_rowid(&conn).await?;
        let mut rows = conn
            .query(
                &format!(
                    "SELECT id, owner_id, url, content, created_at FROM {table} WHERE id = ?"
                ),
                params![id],
            )
            .await?;
        let row = rows.next().await?.ok_or_else(|| {
            PipelineError::StorageOperationFailed("Created scrape not found".to_string())
        })?;
        Self::scrape_from_row(&row)
    }

    async fn latest_scrape(
        &self,
        table: &'static str,
        owner_id: &str,
    ) -> Result<Option<ScrapeRecord>, PipelineError> {
        let conn = self.conn()?;
        let mut rows = conn
            .query(
                &format!(
                    "SELECT id, owner_id, url, content, created_at FROM {table}
                     WHERE owner_id = ? ORDER BY created_at DESC, id DESC LIMIT 1"
                ),
                params![owner_id],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(Self::scrape_from_row(&row)?)),
            None => Ok(None),
        }
    }

    pub async fn insert_linkedin_scrape(
        &self,
        owner_id: &str,
        url: &str,
        content: &str,
    ) -> Result<ScrapeRecord, PipelineError> {
        self.insert_scrape("linkedin_scrapes", owner_id, url, content)
            .await
    }

    pub async fn latest_linkedin_scrape(
        &self,
        owner_id: &str,
    ) -> Result<Option<ScrapeRecord>, PipelineError> {
        self.latest_scrape("linkedin_scrapes", owner_id).await
    }

    pub async fn insert_trustpilot_scrape(
        &self,
        owner_id: &str,
        url: &str,
        content: &str,
    ) -> Result<ScrapeRecord, PipelineError> {
        self.insert_scrape("trustpilot_scrapes", owner_id, url, content)
            .await
    }

    pub async fn latest_trustpilot_scrape(
        &self,
        owner_id: &str,
    ) -> Result<Option<ScrapeRecord>, PipelineError> {
        self.latest_scrape("trustpilot_scrapes", owner_id).await
    }

    // --- Website corpus ---

    fn website_scrape_from_row(row: &turso::Row) -> Result<WebsiteScrapeRecord, PipelineError> {
        let post_urls_json: String = row.get(3)?;
        let post_urls: Vec<String> = serde_json::from_str(&post_urls_json)?;
        Ok(WebsiteScrapeRecord {
            id: row.get(0)?,
            owner_id: row.get(1)?,
            url: row.get(2)?,
            post_urls,
            created_at: row.get(4)?,
        })
    }

    pub async fn latest_website_scrape(
        &self,
        owner_id: &str,
    ) -> Result<Option<WebsiteScrapeRecord>, PipelineError> {
        let conn = self.conn()?;
        let mut rows = conn
            .query(
                "SELECT id, owner_id, url, post_urls, created_at FROM website_scrapes
                 WHERE owner_id = ? ORDER BY created_at DESC, id DESC LIMIT 1",
                params![owner_id],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(Self::website_scrape_from_row(&row)?)),
            None => Ok(None),
        }
    }

    /// Commits a freshly crawled website corpus in one transaction: all
    /// prior website chunks and scrape records of the owner are deleted, the
    /// new record is created, and the staged chunks are written under its
    /// real id. At most one live website corpus exists per owner, and no
    /// chunk is ever durable with a placeholder parent id.
    pub async fn replace_website_corpus(
        &self,
        owner_id: &str,
        url: &str,
        post_urls: &[String],
        staged: &[StagedChunk],
    ) -> Result<WebsiteScrapeRecord, PipelineError> {
        let conn = self.conn()?;
        conn.execute("BEGIN IMMEDIATE", ()).await?;

        let outcome: Result<WebsiteScrapeRecord, PipelineError> = async {
            conn.execute(
                "DELETE FROM chunks WHERE owner_id = ? AND source_type = ?",
                params![owner_id, SourceType::Website.as_str()],
            )
            .await?;
            conn.execute(
                "DELETE FROM website_scrapes WHERE owner_id = ?",
                params![owner_id],
            )
            .await?;

            let post_urls_json = serde_json::to_string(post_urls)?;
            conn.execute(
                "INSERT INTO website_scrapes (owner_id, url, post_urls) VALUES (?, ?, ?)",
                params![owner_id, url, post_urls_json],
            )
            .await?;
            let scrape_id = Self::last_insert_rowid(&conn).await?;

            for chunk in staged {
                conn.execute(
                    "INSERT INTO chunks (owner_id, source_type, source_id, text, vector)
                     VALUES (?, ?, ?, ?, ?)",
                    params![
                        owner_id,
                        SourceType::Website.as_str(),
                        scrape_id,
                        chunk.text.clone(),
                        vector_to_blob(&chunk.vector)
                    ],
                )
                .await?;
            }

            let mut rows = conn
                .query(
                    "SELECT id, owner_id, url, post_urls, created_at FROM website_scrapes WHERE id = ?",
                    params![scrape_id],
                )
                .await?;
            let row = rows.next().await?.ok_or_else(|| {
                PipelineError::StorageOperationFailed("Created website scrape not found".to_string())
            })?;
            Self::website_scrape_from_row(&row)
        }
        .await;

        match outcome {
            Ok(record) => {
                conn.execute("COMMIT", ()).await?;
                info!(
                    owner_id = %owner_id,
                    scrape_id = record.id,
                    chunks = staged.len(),
                    "Replaced website corpus."
                );
                Ok(record)
            }
            Err(err) => {
                let _ = conn.execute("ROLLBACK", ()).await;
                Err(err)
            }
        }
    }

    // --- Chunk index ---

    /// Replaces all chunks of `(owner, source_type, source_id)` with chunks
    /// derived from `text`. Blank text still deletes the existing chunks and
    /// indexes nothing. Delete and insert run in one transaction.
    pub async fn reindex_text(
        &self,
        owner_id: &str,
        source_type: SourceType,
        source_id: i64,
        text: &str,
    ) -> Result<usize, PipelineError> {
        let pieces = if text.trim().is_empty() {
            Vec::new()
        } else {
            split_text(text, DEFAULT_CHUNK_CHARS)
        };
        self.replace_chunks(owner_id, source_type, source_id, &pieces)
            .await
    }

    /// Reindexes an upload: each parsed item becomes exactly one chunk (no
    /// sub-chunking), preserving whole-campaign semantics. Items where both
    /// title and content are blank are skipped.
    pub async fn reindex_upload_items(
        &self,
        owner_id: &str,
        source_id: i64,
        items: &[ParsedItem],
    ) -> Result<usize, PipelineError> {
        let pieces: Vec<String> = items.iter().filter_map(upload_item_text).collect();
        self.replace_chunks(owner_id, SourceType::Upload, source_id, &pieces)
            .await
    }

    /// Reindexes a guideline under its composed index text.
    pub async fn reindex_guideline(
        &self,
        record: &GuidelineRecord,
    ) -> Result<usize, PipelineError> {
        let text = guideline_index_text(&record.title, &record.content).unwrap_or_default();
        self.reindex_text(&record.owner_id, SourceType::Guideline, record.id, &text)
            .await
    }

    async fn replace_chunks(
        &self,
        owner_id: &str,
        source_type: SourceType,
        source_id: i64,
        pieces: &[String],
    ) -> Result<usize, PipelineError> {
        let mut conn = self.conn()?;
        let tx = conn
            .transaction()
            .await
            .map_err(|e| PipelineError::StorageOperationFailed(e.to_string()))?;

        tx.execute(
            "DELETE FROM chunks WHERE owner_id = ? AND source_type = ? AND source_id = ?",
            params![owner_id, source_type.as_str(), source_id],
        )
        .await?;

        for piece in pieces {
            let vector = embed(piece);
            tx.execute(
                "INSERT INTO chunks (owner_id, source_type, source_id, text, vector)
                 VALUES (?, ?, ?, ?, ?)",
                params![
                    owner_id,
                    source_type.as_str(),
                    source_id,
                    piece.clone(),
                    vector_to_blob(&vector)
                ],
            )
            .await?;
        }

        tx.commit()
            .await
            .map_err(|e| PipelineError::StorageOperationFailed(e.to_string()))?;

        debug!(
            owner_id = %owner_id,
            source_type = %source_type,
            source_id,
            chunks = pieces.len(),
            "Reindexed chunks."
        );
        Ok(pieces.len())
    }

    /// Removes all chunks of one parent record; called when the record is
    /// deleted.
    pub async fn delete_chunks(
        &self,
        owner_id: &str,
        source_type: SourceType,
        source_id: i64,
    ) -> Result<(), PipelineError> {
        let conn = self.conn()?;
        conn.execute(
            "DELETE FROM chunks WHERE owner_id = ? AND source_type = ? AND source_id = ?",
            params![owner_id, source_type.as_str(), source_id],
        )
        .await?;
        Ok(())
    }

    fn vector_from_row_value(value: TursoValue) -> Vec<f32> {
        match value {
            TursoValue::Blob(blob) => blob_to_vector(&blob),
            _ => Vec::new(),
        }
    }

    /// Chunk candidates of one source type for ranking, optionally scoped to
    /// a single parent record.
    pub async fn chunk_candidates(
        &self,
        owner_id: &str,
        source_type: SourceType,
        scope_source_id: Option<i64>,
    ) -> Result<Vec<CandidateChunk>, PipelineError> {
        let conn = self.conn()?;
        let mut rows = match scope_source_id {
            Some(source_id) => {
                conn.query(
                    "SELECT id, text, vector FROM chunks
                     WHERE owner_id = ? AND source_type = ? AND source_id = ?
                     ORDER BY id ASC",
                    params![owner_id, source_type.as_str(), source_id],
                )
                .await?
            }
            None => {
                conn.query(
                    "SELECT id, text, vector FROM chunks
                     WHERE owner_id = ? AND source_type = ?
                     ORDER BY id ASC",
                    params![owner_id, source_type.as_str()],
                )
                .await?
            }
        };

        let mut candidates = Vec::new();
        while let Some(row) = rows.next().await? {
            candidates.push(CandidateChunk {
                id: row.get(0)?,
                text: row.get(1)?,
                vector: Self::vector_from_row_value(row.get_value(2)?),
            });
        }
        Ok(candidates)
    }

    /// All chunks of one owner, for cross-source search.
    pub async fn list_chunks(&self, owner_id: &str) -> Result<Vec<StoredChunk>, PipelineError> {
        let conn = self.conn()?;
        let mut rows = conn
            .query(
                "SELECT id, source_type, source_id, text, vector FROM chunks
                 WHERE owner_id = ? ORDER BY id ASC",
                params![owner_id],
            )
            .await?;

        let mut chunks = Vec::new();
        while let Some(row) = rows.next().await? {
            let source_type_str: String = row.get(1)?;
            let Some(source_type) = SourceType::parse(&source_type_str) else {
                continue;
            };
            chunks.push(StoredChunk {
                id: row.get(0)?,
                source_type,
                source_id: row.get(2)?,
                text: row.get(3)?,
                vector: Self::vector_from_row_value(row.get_value(4)?),
            });
        }
        Ok(chunks)
    }

    /// Most recent chunk texts of one website corpus, for scrape previews.
    pub async fn website_chunk_texts(
        &self,
        owner_id: &str,
        source_id: i64,
        limit: usize,
    ) -> Result<Vec<String>, PipelineError> {
        let conn = self.conn()?;
        let mut rows = conn
            .query(
                &format!(
                    "SELECT text FROM chunks
                     WHERE owner_id = ? AND source_type = ? AND source_id = ?
                     ORDER BY id DESC LIMIT {limit}"
                ),
                params![owner_id, SourceType::Website.as_str(), source_id],
            )
            .await?;
        let mut texts = Vec::new();
        while let Some(row) = rows.next().await? {
            texts.push(row.get(0)?);
        }
        Ok(texts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vector_blob_round_trip() {
        let vector = vec![0.0f32, 1.5, -2.25, 0.125];
        assert_eq!(blob_to_vector(&vector_to_blob(&vector)), vector);
    }
}
