//! The single schedule snapshot record.

use rusqlite::{params, Connection, OptionalExtension};

use sahayak_core::constants::SCHEDULE_SNAPSHOT_ID;
use sahayak_core::errors::SahayakResult;
use sahayak_core::models::ScheduleSnapshot;

use super::{decode, encode};
use crate::to_storage_err;

pub fn put_schedule(conn: &Connection, snapshot: &ScheduleSnapshot) -> SahayakResult<()> {
    let data = encode(snapshot)?;
    conn.execute(
        "INSERT OR REPLACE INTO schedule (id, captured_at, data, schema_version)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            snapshot.id,
            snapshot.captured_at.to_rfc3339(),
            data,
            snapshot.schema_version,
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

pub fn get_schedule(conn: &Connection) -> SahayakResult<Option<ScheduleSnapshot>> {
    let data: Option<String> = conn
        .query_row(
            "SELECT data FROM schedule WHERE id = ?1",
            params![SCHEDULE_SNAPSHOT_ID],
            |row| row.get(0),
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;
    data.map(|d| decode("schedule", SCHEDULE_SNAPSHOT_ID, &d))
        .transpose()
}
