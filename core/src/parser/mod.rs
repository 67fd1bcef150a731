//! Workbook decoding for the preview table.
//!
//! The webhook answers with a spreadsheet document. Only its first sheet
//! is read, row by row, with the first row used as headers. Bodies that
//! are not a workbook but look like text go through [`text`].

use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, Range, Reader, Sheets};

use crate::error::{DecodeError, DecodeResult};
use crate::models::{CellValue, PreviewTable};

pub mod text;

/// Decode webhook bytes into a [`PreviewTable`].
///
/// # Example
/// ```ignore
/// use sheet_relay::decode_workbook;
///
/// let table = decode_workbook(b"Name,Amount\nAlice,100\nBob,200").unwrap();
///
/// assert_eq!(table.headers, vec!["Name", "Amount"]);
/// assert_eq!(table.rows.len(), 2);
/// ```
pub fn decode_workbook(bytes: &[u8]) -> DecodeResult<PreviewTable> {
    if bytes.is_empty() {
        return Err(DecodeError::EmptyBody);
    }

    let rows = match open_workbook_auto_from_rs(Cursor::new(bytes)) {
        Ok(mut workbook) => first_sheet_rows(&mut workbook)?,
        Err(e) if text::looks_like_text(bytes) => {
            log::debug!("Body is not a workbook ({}), trying delimited text", e);
            text::parse_bytes_auto(bytes)?
        }
        Err(e) => return Err(DecodeError::Workbook(e.to_string())),
    };

    let table = PreviewTable::from_rows(rows);
    log::info!(
        "Decoded preview: {} columns, {} data rows",
        table.column_count(),
        table.rows.len()
    );
    if let Ok(headers) = serde_json::to_string(&table.headers) {
        log::debug!("Preview headers: {}", headers);
    }

    Ok(table)
}

/// Read the first sheet of an opened workbook as raw rows.
pub fn first_sheet_rows<RS>(workbook: &mut Sheets<RS>) -> DecodeResult<Vec<Vec<CellValue>>>
where
    RS: std::io::Read + std::io::Seek,
{
    let sheet_names = workbook.sheet_names();
    let name = sheet_names.first().ok_or(DecodeError::NoSheets)?;

    if sheet_names.len() > 1 {
        log::debug!(
            "Workbook has {} sheets, previewing '{}' only",
            sheet_names.len(),
            name
        );
    }

    let range = workbook
        .worksheet_range(name)
        .map_err(|e| DecodeError::Sheet {
            name: name.clone(),
            message: e.to_string(),
        })?;

    Ok(range_to_rows(&range))
}

/// Convert a cell range to rows, starting at its first used cell.
///
/// Blank rows inside the range are kept. Trailing empty cells are dropped,
/// so rows come out with their own lengths.
pub fn range_to_rows(range: &Range<Data>) -> Vec<Vec<CellValue>> {
    range
        .rows()
        .map(|cells| {
            let mut row: Vec<CellValue> = cells.iter().map(cell_value).collect();
            trim_trailing_empty(&mut row);
            row
        })
        .collect()
}

/// Map a calamine cell to a [`CellValue`].
///
/// Dates stay numeric (Excel serial), errors read as empty.
pub fn cell_value(data: &Data) -> CellValue {
    match data {
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Bool(b) => CellValue::Boolean(*b),
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(_) | Data::Empty => CellValue::Empty,
    }
}

pub(crate) fn trim_trailing_empty(row: &mut Vec<CellValue>) {
    while row.last().is_some_and(CellValue::is_empty) {
        row.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::CellErrorType;
    use rust_xlsxwriter::Workbook;
    use std::io::Write;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    fn amounts_workbook() -> Vec<u8> {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 0, "Name").unwrap();
        sheet.write_string(0, 1, "Amount").unwrap();
        sheet.write_string(1, 0, "Alice").unwrap();
        sheet.write_number(1, 1, 100).unwrap();
        sheet.write_string(2, 0, "Bob").unwrap();
        sheet.write_number(2, 1, 200).unwrap();
        workbook.save_to_buffer().unwrap()
    }

    /// Minimal but well-formed xlsx package whose workbook lists no sheet.
    fn zero_sheet_workbook() -> Vec<u8> {
        let parts = [
            (
                "[Content_Types].xml",
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/></Types>"#,
            ),
            (
                "_rels/.rels",
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/></Relationships>"#,
            ),
            (
                "xl/workbook.xml",
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><sheets/></workbook>"#,
            ),
            (
                "xl/_rels/workbook.xml.rels",
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"></Relationships>"#,
            ),
        ];

        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        for (name, content) in parts {
            zip.start_file(name, SimpleFileOptions::default()).unwrap();
            zip.write_all(content.as_bytes()).unwrap();
        }
        zip.finish().unwrap().into_inner()
    }

    #[test]
    fn test_decode_header_and_rows() {
        let table = decode_workbook(&amounts_workbook()).unwrap();

        assert_eq!(table.headers, vec!["Name", "Amount"]);
        assert_eq!(
            table.rows,
            vec![
                vec![CellValue::from("Alice"), CellValue::Number(100.0)],
                vec![CellValue::from("Bob"), CellValue::Number(200.0)],
            ]
        );
    }

    #[test]
    fn test_first_sheet_only() {
        let mut workbook = Workbook::new();
        let first = workbook.add_worksheet();
        first.set_name("Updated").unwrap();
        first.write_string(0, 0, "Status").unwrap();
        first.write_string(1, 0, "called").unwrap();
        let second = workbook.add_worksheet();
        second.set_name("Raw").unwrap();
        second.write_string(0, 0, "Ignored").unwrap();
        second.write_string(1, 0, "nope").unwrap();
        second.write_string(2, 0, "nope").unwrap();
        let bytes = workbook.save_to_buffer().unwrap();

        let table = decode_workbook(&bytes).unwrap();
        assert_eq!(table.headers, vec!["Status"]);
        assert_eq!(table.rows, vec![vec![CellValue::from("called")]]);
    }

    #[test]
    fn test_mixed_cells_and_ragged_rows() {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 0, "Name").unwrap();
        sheet.write_string(0, 1, "Reached").unwrap();
        sheet.write_string(0, 2, "Note").unwrap();
        sheet.write_string(1, 0, "Alice").unwrap();
        sheet.write_boolean(1, 1, true).unwrap();
        sheet.write_string(2, 0, "Bob").unwrap();
        sheet.write_string(2, 2, "voicemail").unwrap();
        let bytes = workbook.save_to_buffer().unwrap();

        let table = decode_workbook(&bytes).unwrap();
        assert_eq!(table.headers.len(), 3);
        assert_eq!(
            table.rows[0],
            vec![CellValue::from("Alice"), CellValue::Boolean(true)]
        );
        assert_eq!(
            table.rows[1],
            vec![
                CellValue::from("Bob"),
                CellValue::Empty,
                CellValue::from("voicemail"),
            ]
        );
    }

    #[test]
    fn test_zero_sheets_is_an_error() {
        let result = decode_workbook(&zero_sheet_workbook());
        assert_eq!(result.unwrap_err(), DecodeError::NoSheets);
    }

    #[test]
    fn test_malformed_binary_is_an_error() {
        let mut bytes = b"PK\x03\x04".to_vec();
        bytes.extend_from_slice(&[0xFF; 64]);
        assert!(matches!(
            decode_workbook(&bytes),
            Err(DecodeError::Workbook(_))
        ));

        let noise: Vec<u8> = (0u8..=255).cycle().take(1024).collect();
        assert!(matches!(decode_workbook(&noise), Err(DecodeError::Workbook(_))));
    }

    #[test]
    fn test_empty_body_is_an_error() {
        assert_eq!(decode_workbook(&[]).unwrap_err(), DecodeError::EmptyBody);
    }

    #[test]
    fn test_csv_body_falls_back_to_text() {
        let table = decode_workbook(b"Name,Amount,Called\nAlice,100,TRUE\nBob,200,false\n").unwrap();

        assert_eq!(table.headers, vec!["Name", "Amount", "Called"]);
        assert_eq!(
            table.rows[1],
            vec![
                CellValue::from("Bob"),
                CellValue::Number(200.0),
                CellValue::Boolean(false),
            ]
        );
    }

    #[test]
    fn test_range_keeps_blank_rows() {
        let mut range: Range<Data> = Range::new((0, 0), (2, 1));
        range.set_value((0, 0), Data::String("h".into()));
        range.set_value((2, 0), Data::Int(7));
        range.set_value((2, 1), Data::Error(CellErrorType::Div0));

        let rows = range_to_rows(&range);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], vec![CellValue::from("h")]);
        assert!(rows[1].is_empty());
        assert_eq!(rows[2], vec![CellValue::Number(7.0)]);
    }

    #[test]
    fn test_cell_value_mapping() {
        assert_eq!(cell_value(&Data::Int(3)), CellValue::Number(3.0));
        assert_eq!(cell_value(&Data::Float(2.5)), CellValue::Number(2.5));
        assert_eq!(cell_value(&Data::Bool(false)), CellValue::Boolean(false));
        assert_eq!(
            cell_value(&Data::DateTimeIso("2024-01-31".into())),
            CellValue::from("2024-01-31")
        );
        assert_eq!(cell_value(&Data::Empty), CellValue::Empty);
        assert_eq!(cell_value(&Data::Error(CellErrorType::NA)), CellValue::Empty);
    }
}
