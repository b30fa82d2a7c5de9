pub mod error;
pub mod migrate;
pub mod model;
pub mod paths;
pub mod repo;

use crate::error::Result;
use rusqlite::Connection;
use std::fs;
use std::path::Path;

pub struct Store {
    conn: Connection,
}

impl Store {
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        restrict_db_permissions(path)?;
        Self::from_connection(conn)
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        // The web layer serializes all access through this one connection,
        // so SQLITE_BUSY can only come from another process on the same
        // file; WAL plus a generous busy timeout covers that case.
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;
        conn.pragma_update(None, "busy_timeout", 5000)?;
        Ok(Self { conn })
    }

    pub fn migrate(&self) -> Result<()> {
        migrate::run_migrations(&self.conn)
    }

    pub fn schema_version(&self) -> Result<i64> {
        migrate::schema_version(&self.conn)
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    pub fn contacts(&self) -> repo::ContactsRepo<'_> {
        repo::ContactsRepo::new(&self.conn)
    }

    pub fn model(&self) -> model::ContactModel<'_> {
        model::ContactModel::new(self)
    }
}

// Contact data is personal; keep the database file owner-only.
#[cfg(unix)]
fn restrict_db_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    if path.exists() {
        fs::set_permissions(path, fs::Permissions::from_mode(0o600))?;
    }
    Ok(())
}

#[cfg(not(unix))]
fn restrict_db_permissions(_path: &Path) -> Result<()> {
    Ok(())
}
