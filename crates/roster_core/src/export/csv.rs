//! Semicolon-delimited CSV report of employee records.
//!
//! # Responsibility
//! - Serialize a record collection into the downloadable report format.
//! - Save that report under the fixed report file name.
//!
//! # Invariants
//! - Header and row columns share one fixed order.
//! - Empty input yields an empty string, not a lone header.
//! - Output is UTF-8; accented characters pass through unchanged.
//!
//! # Known limitation
//! Values are wrapped in double quotes without escaping embedded quotes, so
//! a value containing `"` produces a row that spreadsheet parsers may split
//! differently. The report is a one-way export, not a round-trip encoding.

use crate::model::employee::EmployeeRecord;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// File name offered to the user when saving the report.
pub const EXPORT_FILE_NAME: &str = "relatorio_funcionarios.csv";

const DELIMITER: &str = ";";
const LINE_SEPARATOR: &str = "\n";

/// Column labels, in the same order as the values of each row.
pub const CSV_HEADERS: [&str; 23] = [
    "ID",
    "Nº NÚCLEO",
    "CIDADE",
    "NOME DO NÚCLEO",
    "LOCAL",
    "ENDEREÇO DO NÚCLEO",
    "BAIRRO DO NÚCLEO",
    "LIDERANÇA",
    "TELEFONE LIDERANÇA",
    "NOME",
    "TELEFONE",
    "MODALIDADE",
    "FUNÇÃO",
    "CREF",
    "VALOR",
    "CNPJ",
    "PIX",
    "BANCO",
    "AGENCIA",
    "CONTA",
    "ENDEREÇO",
    "BAIRRO",
    "SEXO",
];

/// Error raised while saving the report to disk.
#[derive(Debug)]
pub enum ExportError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Display for ExportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to write export `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
        }
    }
}

/// Renders `records` as the semicolon-delimited report.
pub fn to_csv(records: &[EmployeeRecord]) -> String {
    if records.is_empty() {
        return String::new();
    }

    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(CSV_HEADERS.join(DELIMITER));
    for record in records {
        let row = record_values(record)
            .iter()
            .map(|value| format!("\"{value}\""))
            .collect::<Vec<_>>();
        lines.push(row.join(DELIMITER));
    }
    lines.join(LINE_SEPARATOR)
}

/// Writes the report for `records` into `dir` as [`EXPORT_FILE_NAME`].
///
/// An existing report in `dir` is overwritten.
///
/// # Errors
/// Returns [`ExportError::Io`] when the file cannot be written.
pub fn write_csv_export(dir: &Path, records: &[EmployeeRecord]) -> Result<PathBuf, ExportError> {
    let path = dir.join(EXPORT_FILE_NAME);
    std::fs::write(&path, to_csv(records)).map_err(|source| ExportError::Io {
        path: path.clone(),
        source,
    })?;

    info!(
        "event=csv_export module=export status=ok rows={} path={}",
        records.len(),
        path.display()
    );
    Ok(path)
}

fn record_values(record: &EmployeeRecord) -> [String; 23] {
    [
        record.id.clone(),
        record.nucleus_number.to_string(),
        record.city.clone(),
        record.nucleus_name.clone(),
        record.location.clone(),
        record.nucleus_address.clone(),
        record.nucleus_neighborhood.clone(),
        record.leadership.clone(),
        record.leadership_phone.clone(),
        record.name.clone(),
        record.phone.clone(),
        record.modality.clone(),
        record.role.clone(),
        record.cref.clone(),
        record.value.clone(),
        record.cnpj.clone(),
        record.pix.clone(),
        record.bank.clone(),
        record.agency.clone(),
        record.account.clone(),
        record.address.clone(),
        record.neighborhood.clone(),
        record.gender.as_str().to_string(),
    ]
}
