//! SQLite persistence for the roster and the absence records.
//!
//! The two tables are independent: deleting a teacher leaves their records
//! (and the now dangling `teacherId`) in place. Each operation opens its own
//! connection, so a `Store` is just a path and can be shared freely between
//! actix workers.

pub mod schema;

use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use common::model::record::AbsenceRecord;
use common::model::teacher::Teacher;
use common::seed::{seed_id, INITIAL_TEACHERS};
use log::{debug, error, info};
use rusqlite::{params, Connection, TransactionBehavior};

use crate::error::{Error, Result};
use schema::{INSERT_RECORD, INSERT_TEACHER, SCHEMA_STATEMENTS, SELECT_RECORDS, SELECT_TEACHERS};

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);
const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

/// Row as it sits in the `records` table, before dates are parsed.
struct RecordRow {
    id: String,
    teacher_id: String,
    teacher_name: String,
    start_date: String,
    days: i64,
    reason: String,
    need_relief: bool,
    remarks: Option<String>,
    created_at: String,
}

impl Store {
    /// Opens (creating if needed) the database at `path`, applies the schema
    /// and seeds the roster when it is empty.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        let store = Self { path };
        {
            let conn = store.connect()?;
            for statement in SCHEMA_STATEMENTS {
                conn.execute(statement, [])?;
            }
        }
        info!("Database ready at {}", store.path.display());

        store.seed_if_empty()?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> Result<Connection> {
        let conn = Connection::open(&self.path).map_err(|source| Error::DatabaseOpen {
            path: self.path.clone(),
            source,
        })?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        Ok(conn)
    }

    /// Inserts the fixed initial roster if the `teachers` table is empty.
    ///
    /// The count is read without a write lock. Only an empty table leads to an
    /// immediate transaction, where the count is checked again so two
    /// concurrent callers cannot both seed. Returns how many teachers were
    /// inserted (0 when the roster already had entries).
    pub fn seed_if_empty(&self) -> Result<usize> {
        let mut conn = self.connect()?;
        if count_teachers(&conn)? > 0 {
            return Ok(0);
        }

        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
        if count_teachers(&tx)? > 0 {
            return Ok(0);
        }

        {
            let mut stmt = tx.prepare(INSERT_TEACHER)?;
            for (index, name) in INITIAL_TEACHERS.iter().enumerate() {
                stmt.execute(params![seed_id(index), name])?;
            }
        }
        tx.commit()?;

        info!("Seeded roster with {} teachers", INITIAL_TEACHERS.len());
        Ok(INITIAL_TEACHERS.len())
    }

    /// All teachers ordered by name.
    ///
    /// The seed check runs again first, in case the table was emptied after
    /// startup.
    pub fn list_teachers(&self) -> Result<Vec<Teacher>> {
        self.seed_if_empty()?;

        let conn = self.connect()?;
        let mut stmt = conn.prepare(SELECT_TEACHERS)?;
        let teachers = stmt
            .query_map([], |row| {
                Ok(Teacher {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(teachers)
    }

    pub fn insert_teacher(&self, teacher: &Teacher) -> Result<()> {
        let conn = self.connect()?;
        conn.execute(INSERT_TEACHER, params![teacher.id, teacher.name])?;
        debug!("Inserted teacher {}", teacher.id);
        Ok(())
    }

    /// Removes the teacher with `id`, returning the number of rows deleted.
    /// An unknown id deletes nothing and is not an error.
    pub fn delete_teacher(&self, id: &str) -> Result<usize> {
        let conn = self.connect()?;
        let removed = conn.execute("DELETE FROM teachers WHERE id = ?1", params![id])?;
        debug!("Deleted teacher {} ({} row(s))", id, removed);
        Ok(removed)
    }

    /// All absence records, most recently created first.
    ///
    /// Rows whose stored values no longer parse are logged and left out.
    pub fn list_records(&self) -> Result<Vec<AbsenceRecord>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(SELECT_RECORDS)?;
        let rows = stmt
            .query_map([], |row| {
                Ok(RecordRow {
                    id: row.get(0)?,
                    teacher_id: row.get(1)?,
                    teacher_name: row.get(2)?,
                    start_date: row.get(3)?,
                    days: row.get(4)?,
                    reason: row.get(5)?,
                    need_relief: row.get(6)?,
                    remarks: row.get(7)?,
                    created_at: row.get(8)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(rows
            .into_iter()
            .filter_map(|row| {
                let id = row.id.clone();
                match row.into_record() {
                    Ok(record) => Some(record),
                    Err(e) => {
                        error!("Skipping record {}: {}", id, e);
                        None
                    }
                }
            })
            .collect())
    }

    pub fn insert_record(&self, record: &AbsenceRecord) -> Result<()> {
        let conn = self.connect()?;
        conn.execute(
            INSERT_RECORD,
            params![
                record.id,
                record.teacher_id,
                record.teacher_name,
                record.start_date.format(DATE_FORMAT).to_string(),
                record.days,
                record.reason,
                record.need_relief,
                record.remarks,
                record.created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            ],
        )?;
        debug!("Inserted record {} for {}", record.id, record.teacher_id);
        Ok(())
    }

    /// Removes the record with `id`, returning the number of rows deleted.
    pub fn delete_record(&self, id: &str) -> Result<usize> {
        let conn = self.connect()?;
        let removed = conn.execute("DELETE FROM records WHERE id = ?1", params![id])?;
        debug!("Deleted record {} ({} row(s))", id, removed);
        Ok(removed)
    }

    /// Row counts of `(teachers, records)`.
    pub fn counts(&self) -> Result<(usize, usize)> {
        let conn = self.connect()?;
        let teachers: i64 = conn.query_row("SELECT COUNT(*) FROM teachers", [], |row| row.get(0))?;
        let records: i64 = conn.query_row("SELECT COUNT(*) FROM records", [], |row| row.get(0))?;
        Ok((
            usize::try_from(teachers).unwrap_or_default(),
            usize::try_from(records).unwrap_or_default(),
        ))
    }
}

fn count_teachers(conn: &Connection) -> Result<i64> {
    Ok(conn.query_row("SELECT COUNT(*) FROM teachers", [], |row| row.get(0))?)
}

impl RecordRow {
    fn into_record(self) -> Result<AbsenceRecord> {
        let start_date = NaiveDate::parse_from_str(&self.start_date, DATE_FORMAT)
            .map_err(|_| Error::corrupt("startDate", &self.start_date))?;
        let created_at = DateTime::parse_from_rfc3339(&self.created_at)
            .map_err(|_| Error::corrupt("createdAt", &self.created_at))?
            .with_timezone(&Utc);
        let days = u32::try_from(self.days).map_err(|_| Error::corrupt("days", self.days.to_string()))?;

        Ok(AbsenceRecord {
            id: self.id,
            teacher_id: self.teacher_id,
            teacher_name: self.teacher_name,
            start_date,
            days,
            reason: self.reason,
            need_relief: self.need_relief,
            remarks: self.remarks,
            created_at,
        })
    }
}
