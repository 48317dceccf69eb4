//! SQL for the two tables. Column names keep the camelCase spelling used on
//! the wire so existing database files stay readable.

pub const CREATE_TEACHERS_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS teachers (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL
)
";

pub const CREATE_RECORDS_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS records (
    id TEXT PRIMARY KEY,
    teacherId TEXT NOT NULL,
    teacherName TEXT NOT NULL,
    startDate TEXT NOT NULL,
    days INTEGER NOT NULL,
    reason TEXT NOT NULL,
    needRelief BOOLEAN NOT NULL,
    remarks TEXT,
    createdAt TEXT NOT NULL
)
";

pub const SCHEMA_STATEMENTS: &[&str] = &[CREATE_TEACHERS_TABLE, CREATE_RECORDS_TABLE];

pub const SELECT_TEACHERS: &str = "SELECT id, name FROM teachers ORDER BY name ASC";

pub const SELECT_RECORDS: &str = r"
SELECT id, teacherId, teacherName, startDate, days, reason, needRelief, remarks, createdAt
FROM records ORDER BY createdAt DESC
";

pub const INSERT_TEACHER: &str = "INSERT INTO teachers (id, name) VALUES (?1, ?2)";

pub const INSERT_RECORD: &str = r"
INSERT INTO records (id, teacherId, teacherName, startDate, days, reason, needRelief, remarks, createdAt)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
";
