// responses/xlsx.rs
use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};

const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Workbook bytes as a download named `filename`.
pub fn xlsx_response(buffer: Vec<u8>, filename: &str) -> ResultResp {
    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", XLSX_MIME)
        .header(
            "Content-Disposition",
            format!("attachment; filename=\"{filename}\""),
        )
        .body(Body::from(buffer))
        .map_err(|_| ServerError::InternalError)
}
