use crate::sponsor::{SponsorDetail, SponsorEntry};
use rusqlite::{Connection, OptionalExtension, Result, params};

pub fn init_db(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS Sponsor (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            url TEXT,
            logo_image TEXT,
            level INTEGER NOT NULL DEFAULT 0,
            description TEXT
        )",
        [],
    )?;

    // one row per browser session, keyed by the `session` cookie value
    conn.execute(
        "CREATE TABLE IF NOT EXISTS Session (
            token TEXT PRIMARY KEY,
            userid TEXT NOT NULL,
            created_at TEXT NOT NULL
        )",
        [],
    )?;

    log::debug!("Database initialized successfully.");
    Ok(())
}

pub fn upsert_sponsor(conn: &Connection, entry: &SponsorEntry) -> Result<()> {
    let detail = &entry.detail;
    conn.execute(
        "INSERT INTO Sponsor (id, name, url, logo_image, level, description)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)
         ON CONFLICT(id) DO UPDATE SET
            name = excluded.name,
            url = excluded.url,
            logo_image = excluded.logo_image,
            level = excluded.level,
            description = excluded.description",
        params![
            entry.id,
            detail.name,
            detail.url,
            detail.logo_image,
            detail.level,
            detail.desc
        ],
    )?;
    log::debug!("Sponsor '{}' stored", entry.id);
    Ok(())
}

fn row_to_detail(row: &rusqlite::Row<'_>) -> Result<SponsorDetail> {
    Ok(SponsorDetail {
        name: row.get("name")?,
        url: row.get("url")?,
        logo_image: row.get("logo_image")?,
        level: row.get("level")?,
        desc: row.get("description")?,
    })
}

pub fn get_sponsor(conn: &Connection, id: &str) -> Result<Option<SponsorDetail>> {
    conn.query_row(
        "SELECT name, url, logo_image, level, description FROM Sponsor WHERE id = ?1",
        params![id],
        row_to_detail,
    )
    .optional()
}

/// All sponsors, highest level first.
pub fn list_sponsors(conn: &Connection) -> Result<Vec<SponsorEntry>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, url, logo_image, level, description FROM Sponsor
         ORDER BY level DESC, name ASC",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(SponsorEntry {
            id: row.get("id")?,
            detail: row_to_detail(row)?,
        })
    })?;
    rows.collect()
}

pub fn seed_sponsors(conn: &Connection, entries: &[SponsorEntry]) -> Result<()> {
    for entry in entries {
        upsert_sponsor(conn, entry)?;
    }
    log::info!("Seeded {} sponsors", entries.len());
    Ok(())
}

// sessions are written by the login service sharing this database
#[allow(unused)]
pub fn create_session(conn: &Connection, token: &str, userid: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO Session (token, userid, created_at) VALUES (?1, ?2, ?3)",
        params![token, userid, chrono::Utc::now().to_rfc3339()],
    )?;
    Ok(())
}

pub fn session_user(conn: &Connection, token: &str) -> Result<Option<String>> {
    conn.query_row(
        "SELECT userid FROM Session WHERE token = ?1",
        params![token],
        |row| row.get(0),
    )
    .optional()
}

/// Returns whether a session was actually removed.
pub fn delete_session(conn: &Connection, token: &str) -> Result<bool> {
    let removed = conn.execute("DELETE FROM Session WHERE token = ?1", params![token])?;
    Ok(removed > 0)
}
