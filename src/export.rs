//! CSV export of application listings.
//!
//! Callers hand over the records, a file name base and an ordered field
//! list; each field pairs a column label with a formatter projecting one
//! display value out of an application record.

use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::application::Application;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV buffer error: {0}")]
    Buffer(String),
}

/// One export column: header label plus the record-to-cell formatter.
pub struct ExportField {
    pub label: &'static str,
    pub value: fn(&Application) -> String,
}

/// The fixed, ordered column list for application exports.
pub fn application_fields() -> &'static [ExportField] {
    static FIELDS: &[ExportField] = &[
        ExportField {
            label: "CL File",
            value: |app| app.cl_file.map(|file| file.padded()).unwrap_or_default(),
        },
        ExportField {
            label: "Disposition ID",
            value: |app| {
                app.disposition
                    .map(|id| id.to_string())
                    .unwrap_or_default()
            },
        },
        ExportField {
            label: "Applicant",
            value: |app| app.client.clone().unwrap_or_default(),
        },
        ExportField {
            label: "Purpose",
            value: |app| app.purpose.clone().unwrap_or_default(),
        },
        ExportField {
            label: "Subpurpose",
            value: |app| app.subpurpose.clone().unwrap_or_default(),
        },
        ExportField {
            label: "Status",
            value: |app| app.public_status_long().to_string(),
        },
        ExportField {
            label: "Region",
            value: |app| app.region_short().to_string(),
        },
        ExportField {
            label: "Location",
            value: |app| app.location.clone().unwrap_or_default(),
        },
        ExportField {
            label: "Area (ha)",
            value: |app| {
                app.area_hectares
                    .map(|area| area.to_string())
                    .unwrap_or_default()
            },
        },
        ExportField {
            label: "Published",
            value: |app| {
                app.publish_date
                    .map(|date| date.format("%Y-%m-%d").to_string())
                    .unwrap_or_default()
            },
        },
    ];
    FIELDS
}

/// Writes the records as CSV and returns the download file name together
/// with the encoded bytes. The file name is the base suffixed with `date`.
pub fn write_csv(
    records: &[Application],
    file_name_base: &str,
    fields: &[ExportField],
    date: NaiveDate,
) -> Result<(String, Vec<u8>), ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record(fields.iter().map(|field| field.label))?;
    for record in records {
        writer.write_record(fields.iter().map(|field| (field.value)(record)))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| ExportError::Buffer(err.to_string()))?;
    let filename = format!("{file_name_base}-{}.csv", date.format("%Y-%m-%d"));
    Ok((filename, bytes))
}
