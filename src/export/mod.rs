use std::{
    fs::File,
    io::{
        BufWriter,
        Write,
    },
    path::Path,
};

use crate::{
    core::ChistometroError,
    frequency::FrequencyTable,
};

/// Localized header of the two-column export artifact.
pub const CSV_HEADER: &str = "Palabra,Frecuencia";

/// Renders the full frequency table as UTF-8 CSV: header row plus one row
/// per distinct word in first-seen order, no row limit. Tokens are already
/// punctuation-free, so no field quoting is needed.
pub fn frequency_csv(table: &FrequencyTable) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');
    for (word, count) in table.entries() {
        out.push_str(word);
        out.push(',');
        out.push_str(&count.to_string());
        out.push('\n');
    }
    out
}

pub fn write_frequency_csv(
    table: &FrequencyTable,
    path: &Path,
) -> Result<(), ChistometroError> {
    let file = File::create(path)
        .map_err(|e| ChistometroError::Custom(format!("Failed to create CSV file: {}", e)))?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "{}", CSV_HEADER)
        .map_err(|e| ChistometroError::Custom(format!("Failed to write CSV header: {}", e)))?;

    for (word, count) in table.entries() {
        writeln!(writer, "{},{}", word, count)
            .map_err(|e| ChistometroError::Custom(format!("Failed to write CSV row: {}", e)))?;
    }

    writer
        .flush()
        .map_err(|e| ChistometroError::Custom(format!("Failed to flush CSV file: {}", e)))
}

/// Dated default name for the download artifact.
pub fn default_export_filename() -> String {
    let date_str = chrono::Local::now().format("%Y-%m-%d");
    format!("frecuencia_palabras_{}.csv", date_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> FrequencyTable {
        FrequencyTable::aggregate(&[vec![
            "hola".to_string(),
            "hola".to_string(),
            "mundo".to_string(),
        ]])
    }

    #[test]
    fn csv_has_header_and_one_row_per_distinct_word() {
        assert_eq!(frequency_csv(&table()), "Palabra,Frecuencia\nhola,2\nmundo,1\n");
    }

    #[test]
    fn empty_table_exports_header_only() {
        let empty = FrequencyTable::aggregate(&[]);
        assert_eq!(frequency_csv(&empty), "Palabra,Frecuencia\n");
    }

    #[test]
    fn file_roundtrip_matches_string_form() {
        let dir = std::env::temp_dir();
        let path = dir.join("chistometro_export_test.csv");
        write_frequency_csv(&table(), &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, frequency_csv(&table()));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn default_filename_is_dated_csv() {
        let name = default_export_filename();
        assert!(name.starts_with("frecuencia_palabras_"));
        assert!(name.ends_with(".csv"));
    }
}
