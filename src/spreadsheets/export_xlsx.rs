use crate::clock::format_timestamp;
use crate::db::leads::LeadRow;
use crate::db::usage::UsageRow;
use crate::errors::ServerError;
use rust_xlsxwriter::{Workbook, Worksheet};

fn xlsx_err(what: &str) -> impl Fn(rust_xlsxwriter::XlsxError) -> ServerError + '_ {
    move |e| ServerError::XlsxError(format!("Failed to write {what}: {e}"))
}

fn write_headers(sheet: &mut Worksheet, headers: &[&str]) -> Result<(), ServerError> {
    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_string(0, col as u16, *header)
            .map_err(xlsx_err(header))?;
    }
    Ok(())
}

fn write_usage_sheet(sheet: &mut Worksheet, rows: &[UsageRow]) -> Result<(), ServerError> {
    sheet.set_name("Usage").map_err(xlsx_err("sheet name"))?;
    write_headers(sheet, &["ID", "When", "Tool", "Email", "Inputs", "Results"])?;

    for (i, row) in rows.iter().enumerate() {
        let r = (i + 1) as u32;
        sheet.write_number(r, 0, row.id as f64).map_err(xlsx_err("id"))?;
        sheet
            .write_string(r, 1, format_timestamp(row.created_at))
            .map_err(xlsx_err("timestamp"))?;
        sheet.write_string(r, 2, &row.tool).map_err(xlsx_err("tool"))?;
        sheet
            .write_string(r, 3, row.email.as_deref().unwrap_or(""))
            .map_err(xlsx_err("email"))?;
        sheet
            .write_string(r, 4, &row.inputs_json)
            .map_err(xlsx_err("inputs"))?;
        sheet
            .write_string(r, 5, &row.results_json)
            .map_err(xlsx_err("results"))?;
    }
    Ok(())
}

fn write_leads_sheet(sheet: &mut Worksheet, rows: &[LeadRow]) -> Result<(), ServerError> {
    sheet.set_name("Leads").map_err(xlsx_err("sheet name"))?;
    write_headers(
        sheet,
        &["ID", "When", "Name", "Email", "Phone", "Reason", "Source", "Relayed", "Message"],
    )?;

    for (i, row) in rows.iter().enumerate() {
        let r = (i + 1) as u32;
        sheet.write_number(r, 0, row.id as f64).map_err(xlsx_err("id"))?;
        sheet
            .write_string(r, 1, format_timestamp(row.created_at))
            .map_err(xlsx_err("timestamp"))?;
        sheet.write_string(r, 2, &row.name).map_err(xlsx_err("name"))?;
        sheet.write_string(r, 3, &row.email).map_err(xlsx_err("email"))?;
        sheet
            .write_string(r, 4, row.phone.as_deref().unwrap_or(""))
            .map_err(xlsx_err("phone"))?;
        sheet.write_string(r, 5, &row.reason).map_err(xlsx_err("reason"))?;
        sheet.write_string(r, 6, &row.source).map_err(xlsx_err("source"))?;
        sheet
            .write_string(r, 7, if row.relayed { "Yes" } else { "No" })
            .map_err(xlsx_err("relayed"))?;
        sheet
            .write_string(r, 8, &row.message)
            .map_err(xlsx_err("message"))?;
    }
    Ok(())
}

/// Workbook with a Usage sheet and a Leads sheet.
pub fn build_analytics_workbook(
    usage: &[UsageRow],
    leads: &[LeadRow],
) -> Result<Vec<u8>, ServerError> {
    let mut workbook = Workbook::new();

    write_usage_sheet(workbook.add_worksheet(), usage)?;
    write_leads_sheet(workbook.add_worksheet(), leads)?;

    workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {}", e)))
}
