// src/db/leads.rs
use crate::domain::LeadMessage;
use crate::errors::ServerError;
use rusqlite::{params, Connection};

#[derive(Debug, Clone, PartialEq)]
pub struct LeadSourceSummary {
    pub source: String,
    pub total: i64,
    pub relay_failures: i64,
}

#[derive(Debug, Clone)]
pub struct LeadRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub reason: String,
    pub message: String,
    pub source: String,
    pub relayed: bool,
    pub created_at: i64,
}

/// Keep a copy of every submission, whether or not the relay took it.
pub fn insert_lead(
    conn: &Connection,
    lead: &LeadMessage,
    relayed: bool,
    now: i64,
) -> Result<i64, ServerError> {
    conn.execute(
        r#"
        insert into leads (name, email, phone, reason, message, source, relayed, created_at)
        values (?, ?, ?, ?, ?, ?, ?, ?)
        "#,
        params![
            lead.name,
            lead.email,
            lead.phone,
            lead.reason,
            lead.message,
            lead.source,
            relayed,
            now
        ],
    )
    .map_err(|e| ServerError::DbError(format!("insert lead failed: {e}")))?;

    Ok(conn.last_insert_rowid())
}

pub fn lead_source_summary(conn: &Connection) -> Result<Vec<LeadSourceSummary>, ServerError> {
    let mut stmt = conn
        .prepare(
            r#"
            select source, count(*), sum(case when relayed = 0 then 1 else 0 end)
            from leads
            group by source
            order by count(*) desc, source asc
            "#,
        )
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let rows = stmt
        .query_map([], |row| {
            Ok(LeadSourceSummary {
                source: row.get(0)?,
                total: row.get(1)?,
                relay_failures: row.get(2)?,
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
pub fn list_leads(conn: &Connection, limit: Option<i64>) -> Result<Vec<LeadRow>, ServerError> {
    let mut stmt = conn
        .prepare(
            "select id, name, email, phone, reason, message, source, relayed, created_at
             from leads
             order by created_at desc, id desc
             limit ?",
        )
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let rows = stmt
        .query_map(params![limit.unwrap_or(-1)], |row| {
            Ok(LeadRow {
                id: row.get(0)?,
                name: row.get(1)?,
                email: row.get(2)?,
                phone: row.get(3)?,
                reason: row.get(4)?,
                message: row.get(5)?,
                source: row.get(6)?,
                relayed: row.get(7)?,
                created_at: row.get(8)?,
            })
        })
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r.map_err(|e| ServerError::DbError(e.to_string()))?);
    }
    Ok(out)
}
