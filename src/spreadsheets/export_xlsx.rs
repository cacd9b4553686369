use crate::db::enquiries::EnquiryRow;
use crate::db::listings::ListingHistoryRow;
use crate::db::quotations::QuotationRow;
use crate::errors::ServerError;
use crate::templates::components::format_timestamp;
use rust_xlsxwriter::{Workbook, Worksheet};

fn xlsx_err(what: &str) -> impl Fn(rust_xlsxwriter::XlsxError) -> ServerError + '_ {
    move |e| ServerError::XlsxError(format!("Failed to write {what}: {e}"))
}

fn write_headers(worksheet: &mut Worksheet, headers: &[&str]) -> Result<(), ServerError> {
    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .map_err(|e| {
                ServerError::XlsxError(format!("Failed to write header '{header}': {e}"))
            })?;
    }
    Ok(())
}

fn finish(mut workbook: Workbook) -> Result<Vec<u8>, ServerError> {
    workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {e}")))
}

pub fn enquiries_xlsx(rows: &[EnquiryRow]) -> Result<Vec<u8>, ServerError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name("Enquiries")
        .map_err(xlsx_err("sheet name"))?;

    write_headers(worksheet, &["Id", "Received (UTC)", "Name", "Email", "Subject", "Message"])?;

    for (i, e) in rows.iter().enumerate() {
        let r = (i + 1) as u32;
        worksheet
            .write_number(r, 0, e.id as f64)
            .map_err(xlsx_err("id"))?;
        worksheet
            .write_string(r, 1, format_timestamp(e.created_at))
            .map_err(xlsx_err("received"))?;
        worksheet.write_string(r, 2, &e.name).map_err(xlsx_err("name"))?;
        worksheet.write_string(r, 3, &e.email).map_err(xlsx_err("email"))?;
        worksheet
            .write_string(r, 4, &e.subject)
            .map_err(xlsx_err("subject"))?;
        worksheet
            .write_string(r, 5, &e.message)
            .map_err(xlsx_err("message"))?;
    }

    finish(workbook)
}

pub fn quotations_xlsx(rows: &[QuotationRow]) -> Result<Vec<u8>, ServerError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name("Quotations")
        .map_err(xlsx_err("sheet name"))?;

    write_headers(
        worksheet,
        &["Id", "Requested (UTC)", "Location", "Area", "Price", "Recommendations"],
    )?;

    for (i, q) in rows.iter().enumerate() {
        let r = (i + 1) as u32;
        worksheet
            .write_number(r, 0, q.id as f64)
            .map_err(xlsx_err("id"))?;
        worksheet
            .write_string(r, 1, format_timestamp(q.created_at))
            .map_err(xlsx_err("requested"))?;
        worksheet
            .write_string(r, 2, &q.location)
            .map_err(xlsx_err("location"))?;
        worksheet.write_string(r, 3, &q.area).map_err(xlsx_err("area"))?;
        worksheet.write_string(r, 4, &q.price).map_err(xlsx_err("price"))?;
        worksheet
            .write_number(r, 5, q.recommendation_count as f64)
            .map_err(xlsx_err("recommendation count"))?;
    }

    finish(workbook)
}

pub fn listings_xlsx(rows: &[ListingHistoryRow]) -> Result<Vec<u8>, ServerError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name("Listings")
        .map_err(xlsx_err("sheet name"))?;

    write_headers(
        worksheet,
        &["Added (UTC)", "Id", "Property Name", "Location", "Area (acres)", "Price"],
    )?;

    for (i, row) in rows.iter().enumerate() {
        let r = (i + 1) as u32;
        let land = &row.listing;
        worksheet
            .write_string(r, 0, format_timestamp(row.created_at))
            .map_err(xlsx_err("added"))?;
        worksheet.write_string(r, 1, &land.id).map_err(xlsx_err("id"))?;
        worksheet.write_string(r, 2, &land.name).map_err(xlsx_err("name"))?;
        worksheet
            .write_string(r, 3, &land.location)
            .map_err(xlsx_err("location"))?;
        worksheet.write_number(r, 4, land.area).map_err(xlsx_err("area"))?;
        worksheet.write_number(r, 5, land.price).map_err(xlsx_err("price"))?;
    }

    finish(workbook)
}
