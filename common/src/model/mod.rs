pub mod record;
pub mod teacher;
