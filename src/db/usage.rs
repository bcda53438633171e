// src/db/usage.rs
use crate::domain::UsageEvent;
use crate::errors::ServerError;
use rusqlite::{params, Connection};
use time::OffsetDateTime;

#[derive(Debug, Clone, PartialEq)]
pub struct ToolUsage {
    pub tool: String,
    pub total: i64,
    pub this_month: i64,
    pub with_email: i64,
}

#[derive(Debug, Clone)]
pub struct UsageRow {
    pub id: i64,
    pub tool: String,
    pub inputs_json: String,
    pub results_json: String,
    pub email: Option<String>,
    pub created_at: i64,
}

/// Start of the calendar month (UTC) containing `now`.
pub fn start_of_month(now: i64) -> i64 {
    let dt = OffsetDateTime::from_unix_timestamp(now).unwrap_or_else(|_| OffsetDateTime::now_utc());

    dt.replace_day(1)
        .unwrap_or(dt) // Day 1 is valid for every month
        .replace_time(time::Time::MIDNIGHT)
        .unix_timestamp()
}

pub fn insert_usage_event(
    conn: &Connection,
    event: &UsageEvent,
    now: i64,
) -> Result<i64, ServerError> {
    conn.execute(
        "insert into usage_events (tool, inputs_json, results_json, email, created_at) values (?, ?, ?, ?, ?)",
        params![
            event.tool,
            event.inputs.to_string(),
            event.results.to_string(),
            event.email,
            now
        ],
    )
    .map_err(|e| ServerError::DbError(format!("record usage failed: {e}")))?;

    Ok(conn.last_insert_rowid())
}

/// Per-tool counts, busiest first.
pub fn tool_usage_summary(conn: &Connection, now: i64) -> Result<Vec<ToolUsage>, ServerError> {
    let month_start = start_of_month(now);

    let mut stmt = conn
        .prepare(
            r#"
            select
                tool,
                count(*),
                sum(case when created_at >= ?1 then 1 else 0 end),
                sum(case when email is not null then 1 else 0 end)
            from usage_events
            group by tool
            order by count(*) desc, tool asc
            "#,
        )
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let rows = stmt
        .query_map(params![month_start], |row| {
            Ok(ToolUsage {
                tool: row.get(0)?,
                total: row.get(1)?,
                this_month: row.get(2)?,
                with_email: row.get(3)?,
            })
        })
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r.map_err(|e| ServerError::DbError(e.to_string()))?);
    }
    Ok(out)
}

/// Newest first. `limit` of `None` returns everything.
pub fn list_usage(conn: &Connection, limit: Option<i64>) -> Result<Vec<UsageRow>, ServerError> {
    let mut stmt = conn
        .prepare(
            "select id, tool, inputs_json, results_json, email, created_at
             from usage_events
             order by created_at desc, id desc
             limit ?",
        )
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let rows = stmt
        .query_map(params![limit.unwrap_or(-1)], |row| {
            Ok(UsageRow {
                id: row.get(0)?,
                tool: row.get(1)?,
                inputs_json: row.get(2)?,
                results_json: row.get(3)?,
                email: row.get(4)?,
                created_at: row.get(5)?,
            })
        })
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r.map_err(|e| ServerError::DbError(e.to_string()))?);
    }
    Ok(out)
}
