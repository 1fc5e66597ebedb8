//! Shared helpers for backend integration tests.
//!
//! PostgreSQL-backed suites create a throwaway database on the server named
//! by `EVENTS_TEST_DATABASE_URL`, apply the embedded migrations and drop the
//! database again when the guard goes out of scope. When the variable is
//! unset the suites print a skip marker and return early.

#![allow(dead_code, reason = "each test crate uses a different subset")]

use diesel::connection::SimpleConnection;
use diesel::pg::PgConnection;
use diesel::{Connection, RunQueryDsl};
use events_backend::outbound::persistence::run_pending_migrations_blocking;
use url::Url;
use uuid::Uuid;

/// Environment variable naming the PostgreSQL server used by the suites.
pub const TEST_DATABASE_URL_VAR: &str = "EVENTS_TEST_DATABASE_URL";

/// Return the admin URL for the test server, or print a skip marker.
pub fn test_server_url() -> Option<String> {
    match std::env::var(TEST_DATABASE_URL_VAR) {
        Ok(url) if !url.trim().is_empty() => Some(url),
        _ => {
            eprintln!("SKIP-TEST-DATABASE: {TEST_DATABASE_URL_VAR} is not set");
            None
        }
    }
}

/// Throwaway database with migrations applied. Dropped on `Drop`.
pub struct TemporaryDatabase {
    admin_url: String,
    name: String,
    url: String,
}

impl TemporaryDatabase {
    /// Create a fresh database on the server at `admin_url`.
    pub fn create(admin_url: &str) -> Result<Self, String> {
        let name = format!("events_test_{}", Uuid::new_v4().simple());
        let mut admin = PgConnection::establish(admin_url).map_err(|err| err.to_string())?;
        diesel::sql_query(format!("CREATE DATABASE \"{name}\""))
            .execute(&mut admin)
            .map_err(|err| format!("create database: {err}"))?;

        let mut url = Url::parse(admin_url).map_err(|err| err.to_string())?;
        url.set_path(&format!("/{name}"));
        let database = Self {
            admin_url: admin_url.to_owned(),
            name,
            url: url.to_string(),
        };
        run_pending_migrations_blocking(&database.url)
            .map_err(|err| format!("migrate: {err}"))?;
        Ok(database)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Run raw SQL against the temporary database.
    pub fn execute(&self, sql: &str) {
        self.try_execute(sql).expect("test SQL executes");
    }

    /// Run raw SQL, returning the database error instead of panicking.
    pub fn try_execute(&self, sql: &str) -> Result<(), String> {
        let mut conn = PgConnection::establish(&self.url).map_err(|err| err.to_string())?;
        conn.batch_execute(sql).map_err(|err| err.to_string())
    }
}

impl Drop for TemporaryDatabase {
    fn drop(&mut self) {
        let Ok(mut admin) = PgConnection::establish(&self.admin_url) else {
            eprintln!("could not reconnect to drop {}", self.name);
            return;
        };
        let drop_sql = format!("DROP DATABASE IF EXISTS \"{}\" WITH (FORCE)", self.name);
        if let Err(err) = diesel::sql_query(drop_sql).execute(&mut admin) {
            eprintln!("failed to drop {}: {err}", self.name);
        }
    }
}

/// Provision a temporary database, or `None` when the suite should skip.
pub fn temporary_database() -> Option<TemporaryDatabase> {
    let admin_url = test_server_url()?;
    Some(TemporaryDatabase::create(&admin_url).unwrap_or_else(|err| {
        panic!("test database setup failed: {err}. Unset {TEST_DATABASE_URL_VAR} to skip.")
    }))
}
