// File-backed implementation of the ReservationLog port.
//
// Purpose
// - Keep the durable log as plain comma-separated UTF-8 text so files
//   written by earlier schema versions stay readable in place.
//
// Responsibilities
// - Serialize writers: occupancy re-check and write happen under one lock.
// - Replace the file atomically (write-new-then-rename) so lock-free
//   readers never observe a half-written log.
// - Leave legacy rows byte-identical on append; normalize them to full
//   width only as a side effect of a cancellation rewrite.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::Mutex;

use super::{CancelOutcome, ReservationLog, ReserveOutcome, StoreError, sort_for_listing};
use crate::modules::reservations::core::codec::{self, DecodedLine};
use crate::modules::reservations::core::record::{
    ReservationId, ReservationRecord, ReservationStatus,
};

pub struct CsvFileLog {
    path: PathBuf,
    default_dock: String,
    write_lock: Mutex<()>,
}

impl CsvFileLog {
    /// `default_dock` is assigned to rows from the single-dock era.
    pub fn new(path: impl Into<PathBuf>, default_dock: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            default_dock: default_dock.into(),
            write_lock: Mutex::new(()),
        }
    }

    async fn read_raw(&self) -> Result<String, StoreError> {
        match fs::read_to_string(&self.path).await {
            Ok(content) => Ok(content),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(String::new()),
            Err(err) => Err(err.into()),
        }
    }

    fn decode_all(&self, raw: &str) -> Vec<ReservationRecord> {
        let mut records = Vec::new();
        for (index, line) in raw.lines().enumerate() {
            match codec::decode_line(line, &self.default_dock) {
                DecodedLine::Record(record) => records.push(record),
                DecodedLine::Skip => {}
                DecodedLine::Malformed => {
                    tracing::warn!(line = index + 1, "skipping malformed reservation row");
                }
            }
        }
        records
    }

    async fn replace(&self, content: &str) -> Result<(), StoreError> {
        let tmp = tmp_path(&self.path);
        fs::write(&tmp, content).await?;
        fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

fn occupied(records: &[ReservationRecord], dock: &str, date: &str, time: &str) -> bool {
    records.iter().any(|r| {
        r.status == ReservationStatus::Active && r.dock == dock && r.date == date && r.time == time
    })
}

#[async_trait]
impl ReservationLog for CsvFileLog {
    async fn try_reserve(&self, record: ReservationRecord) -> Result<ReserveOutcome, StoreError> {
        let _guard = self.write_lock.lock().await;
        let raw = self.read_raw().await?;
        let records = self.decode_all(&raw);
        if occupied(&records, &record.dock, &record.date, &record.time) {
            return Ok(ReserveOutcome::Conflict {
                dock: record.dock,
                date: record.date,
                time: record.time,
            });
        }
        let mut content = if raw.is_empty() {
            let mut header = codec::header_line();
            header.push('\n');
            header
        } else {
            raw
        };
        if !content.ends_with('\n') {
            content.push('\n');
        }
        content.push_str(&codec::encode_record(&record));
        content.push('\n');
        self.replace(&content).await?;
        Ok(ReserveOutcome::Committed(record))
    }

    async fn cancel(&self, id: &ReservationId) -> Result<CancelOutcome, StoreError> {
        let _guard = self.write_lock.lock().await;
        let raw = self.read_raw().await?;
        let mut cancelled: Option<ReservationRecord> = None;
        let mut lines: Vec<String> = Vec::new();
        for line in raw.lines() {
            match codec::decode_line(line, &self.default_dock) {
                DecodedLine::Record(mut record) => {
                    if record.identity() == *id {
                        record.status = ReservationStatus::Cancelled;
                        cancelled = Some(record.clone());
                    }
                    lines.push(codec::encode_record(&record));
                }
                DecodedLine::Skip => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    // Header row; old narrow headers get expanded here.
                    lines.push(codec::header_line());
                }
                // Not a record; carried through verbatim.
                DecodedLine::Malformed => lines.push(line.to_string()),
            }
        }
        match cancelled {
            Some(record) => {
                let mut content = lines.join("\n");
                content.push('\n');
                self.replace(&content).await?;
                Ok(CancelOutcome::Cancelled(record))
            }
            None => Ok(CancelOutcome::NotFound),
        }
    }

    async fn list(&self, date: Option<&str>) -> Result<Vec<ReservationRecord>, StoreError> {
        let raw = self.read_raw().await?;
        let mut records = self.decode_all(&raw);
        if let Some(date) = date {
            records.retain(|r| r.date == date);
        }
        sort_for_listing(&mut records);
        Ok(records)
    }
}
