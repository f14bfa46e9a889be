//! Store handle and query operations

use std::path::Path;

use rusqlite::{params, Connection};
use tracing::debug;

use skylog_core::{AirCategory, NormalizedRecord, WeatherCategory};

use crate::{PhotoRow, RecordKind, StoreError, StoreResult};

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS weather (
    kind       TEXT NOT NULL,
    slot       INTEGER NOT NULL,
    dt         INTEGER NOT NULL,
    weather    TEXT NOT NULL,
    air        TEXT NOT NULL,
    temp       REAL NOT NULL,
    feels_like REAL NOT NULL,
    temp_min   REAL,
    temp_max   REAL,
    aqi        INTEGER NOT NULL,
    pm2_5      REAL NOT NULL,
    pm10       REAL NOT NULL,
    PRIMARY KEY (kind, slot)
);
CREATE TABLE IF NOT EXISTS photo (
    photo_id INTEGER PRIMARY KEY AUTOINCREMENT,
    category TEXT NOT NULL,
    path     TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_photo_category ON photo(category);
";

/// Journal database handle
///
/// Wraps a single SQLite connection. Open once, pass down, close explicitly.
pub struct JournalStore {
    conn: Connection,
}

struct RawWeatherRow {
    slot: i32,
    dt: i64,
    weather: String,
    air: String,
    temp: f64,
    feels_like: f64,
    temp_min: Option<f64>,
    temp_max: Option<f64>,
    aqi: i32,
    pm2_5: f64,
    pm10: f64,
}

fn raw_to_record(raw: RawWeatherRow) -> StoreResult<NormalizedRecord> {
    let weather = WeatherCategory::parse(&raw.weather)
        .ok_or_else(|| StoreError::Corrupt(format!("unknown weather category: {}", raw.weather)))?;
    let air = AirCategory::parse(&raw.air)
        .ok_or_else(|| StoreError::Corrupt(format!("unknown air category: {}", raw.air)))?;

    Ok(NormalizedRecord {
        slot: raw.slot,
        dt: raw.dt,
        weather,
        air,
        temp: raw.temp,
        feels_like: raw.feels_like,
        temp_min: raw.temp_min,
        temp_max: raw.temp_max,
        aqi: raw.aqi,
        pm2_5: raw.pm2_5,
        pm10: raw.pm10,
    })
}

impl JournalStore {
    /// Open (creating if needed) the journal database at `path`
    pub fn open<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        Self::init(Connection::open(path)?)
    }

    /// In-memory store for tests
    pub fn open_in_memory() -> StoreResult<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> StoreResult<Self> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }

    /// Close the underlying connection
    pub fn close(self) -> StoreResult<()> {
        self.conn.close().map_err(|(_, e)| StoreError::Sqlite(e))
    }

    /// Replace all rows of `kind` with `records`, atomically.
    ///
    /// A refresh cycle that dies before reaching this point persists nothing;
    /// one that dies inside it rolls back to the previous rows.
    pub fn replace_records(
        &mut self,
        kind: RecordKind,
        records: &[NormalizedRecord],
    ) -> StoreResult<()> {
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM weather WHERE kind = ?1", params![kind.as_str()])?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO weather
                 (kind, slot, dt, weather, air, temp, feels_like, temp_min, temp_max, aqi, pm2_5, pm10)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
            )?;
            for record in records {
                stmt.execute(params![
                    kind.as_str(),
                    record.slot,
                    record.dt,
                    record.weather.as_str(),
                    record.air.as_str(),
                    record.temp,
                    record.feels_like,
                    record.temp_min,
                    record.temp_max,
                    record.aqi,
                    record.pm2_5,
                    record.pm10,
                ])?;
            }
        }
        tx.commit()?;

        debug!(
            kind = kind.as_str(),
            count = records.len(),
            "replaced weather rows"
        );
        Ok(())
    }

    /// Store the singleton current-conditions record
    pub fn put_current(&mut self, record: &NormalizedRecord) -> StoreResult<()> {
        self.replace_records(RecordKind::Current, std::slice::from_ref(record))
    }

    /// All rows of `kind`, ordered by slot ascending
    pub fn records(&self, kind: RecordKind) -> StoreResult<Vec<NormalizedRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT slot, dt, weather, air, temp, feels_like, temp_min, temp_max, aqi, pm2_5, pm10
             FROM weather WHERE kind = ?1 ORDER BY slot ASC",
        )?;
        let raw_rows = stmt
            .query_map(params![kind.as_str()], |row| {
                Ok(RawWeatherRow {
                    slot: row.get(0)?,
                    dt: row.get(1)?,
                    weather: row.get(2)?,
                    air: row.get(3)?,
                    temp: row.get(4)?,
                    feels_like: row.get(5)?,
                    temp_min: row.get(6)?,
                    temp_max: row.get(7)?,
                    aqi: row.get(8)?,
                    pm2_5: row.get(9)?,
                    pm10: row.get(10)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        raw_rows.into_iter().map(raw_to_record).collect()
    }

    /// The current-conditions record, if a refresh has completed
    pub fn current(&self) -> StoreResult<Option<NormalizedRecord>> {
        Ok(self.records(RecordKind::Current)?.into_iter().next())
    }

    /// Add a photo under a category; returns its id
    pub fn add_photo(&self, category: &str, path: &str) -> StoreResult<i64> {
        self.conn.execute(
            "INSERT INTO photo (category, path) VALUES (?1, ?2)",
            params![category, path],
        )?;
        let id = self.conn.last_insert_rowid();
        debug!(category, id, "photo added");
        Ok(id)
    }

    /// Photos associated with one category
    pub fn photos(&self, category: &str) -> StoreResult<Vec<PhotoRow>> {
        let mut stmt = self.conn.prepare(
            "SELECT photo_id, category, path FROM photo WHERE category = ?1 ORDER BY photo_id ASC",
        )?;
        let rows = stmt
            .query_map(params![category], |row| {
                Ok(PhotoRow {
                    photo_id: row.get(0)?,
                    category: row.get(1)?,
                    path: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Every journaled photo, across all categories
    pub fn all_photos(&self) -> StoreResult<Vec<PhotoRow>> {
        let mut stmt = self
            .conn
            .prepare("SELECT photo_id, category, path FROM photo ORDER BY photo_id ASC")?;
        let rows = stmt
            .query_map([], |row| {
                Ok(PhotoRow {
                    photo_id: row.get(0)?,
                    category: row.get(1)?,
                    path: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Remove a photo by id; false if it did not exist
    pub fn remove_photo(&self, photo_id: i64) -> StoreResult<bool> {
        let affected = self
            .conn
            .execute("DELETE FROM photo WHERE photo_id = ?1", params![photo_id])?;
        Ok(affected > 0)
    }
}
