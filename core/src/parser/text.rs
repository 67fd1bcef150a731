//! Delimited-text fallback with encoding and delimiter auto-detection.
//!
//! Some automation flows answer with CSV instead of a workbook. Those
//! bodies are read here, with values typed the way a spreadsheet would
//! type them.

use csv::ReaderBuilder;

use crate::error::{DecodeError, DecodeResult};
use crate::models::CellValue;

const ZIP_MAGIC: &[u8] = b"PK\x03\x04";
const OLE_MAGIC: &[u8] = &[0xD0, 0xCF, 0x11, 0xE0];

/// Number of leading bytes inspected by [`looks_like_text`].
const SNIFF_LEN: usize = 4096;

/// Whether the bytes are plausibly text rather than a broken binary.
pub fn looks_like_text(bytes: &[u8]) -> bool {
    if bytes.is_empty() || bytes.starts_with(ZIP_MAGIC) || bytes.starts_with(OLE_MAGIC) {
        return false;
    }

    let sample = &bytes[..bytes.len().min(SNIFF_LEN)];
    if sample.contains(&0) {
        return false;
    }

    let control = sample
        .iter()
        .filter(|&&b| b < 0x20 && !matches!(b, b'\t' | b'\n' | b'\r'))
        .count();

    // Allow the odd stray control byte (form feeds, legacy exports)
    control * 100 <= sample.len()
}

/// Detect the encoding of raw bytes using chardet
pub fn detect_encoding(bytes: &[u8]) -> String {
    let result = chardet::detect(bytes);
    let charset = result.0;

    match charset.to_lowercase().as_str() {
        "ascii" | "utf-8" | "utf8" | "utf-8-sig" | "" => "utf-8".to_string(),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        other => other.to_string(),
    }
}

/// Decode bytes to a string using the detected encoding.
///
/// Unknown encodings fall back to lossy UTF-8.
pub fn decode_content(bytes: &[u8], encoding: &str) -> String {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);

    match encoding {
        "utf-8" => String::from_utf8_lossy(bytes).into_owned(),
        "iso-8859-1" => encoding_rs::ISO_8859_15.decode(bytes).0.into_owned(),
        "windows-1252" => encoding_rs::WINDOWS_1252.decode(bytes).0.into_owned(),
        other => match encoding_rs::Encoding::for_label(other.as_bytes()) {
            Some(found) => found.decode(bytes).0.into_owned(),
            None => String::from_utf8_lossy(bytes).into_owned(),
        },
    }
}

/// Detect the delimiter by counting occurrences in the first line.
///
/// Ties go to the earlier candidate, so a single-column file stays on `,`.
pub fn detect_delimiter(content: &str) -> u8 {
    let first_line = content.lines().next().unwrap_or("");

    let separators = [b',', b';', b'\t', b'|'];
    let mut best_sep = b',';
    let mut best_count = 0;

    for &sep in &separators {
        let count = first_line.bytes().filter(|&b| b == sep).count();
        if count > best_count {
            best_count = count;
            best_sep = sep;
        }
    }

    best_sep
}

/// Type a raw field the way a spreadsheet import would.
pub fn infer_cell(raw: &str) -> CellValue {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return CellValue::Empty;
    }
    if trimmed.eq_ignore_ascii_case("true") {
        return CellValue::Boolean(true);
    }
    if trimmed.eq_ignore_ascii_case("false") {
        return CellValue::Boolean(false);
    }
    match trimmed.parse::<f64>() {
        Ok(number) if number.is_finite() => CellValue::Number(number),
        _ => CellValue::Text(raw.to_string()),
    }
}

/// Parse delimited text into raw rows (header row included).
pub fn parse_rows(content: &str, delimiter: u8) -> DecodeResult<Vec<Vec<CellValue>>> {
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut rows = Vec::new();
    for (line_idx, record) in reader.records().enumerate() {
        let record =
            record.map_err(|e| DecodeError::Text(format!("line {}: {}", line_idx + 1, e)))?;

        let mut row: Vec<CellValue> = record.iter().map(infer_cell).collect();
        super::trim_trailing_empty(&mut row);
        rows.push(row);
    }

    Ok(rows)
}

/// Parse text bytes with auto-detection of encoding and delimiter.
pub fn parse_bytes_auto(bytes: &[u8]) -> DecodeResult<Vec<Vec<CellValue>>> {
    let encoding = detect_encoding(bytes);
    let content = decode_content(bytes, &encoding);
    let delimiter = detect_delimiter(&content);

    log::debug!(
        "Decoding body as delimited text (encoding: {}, delimiter: {:?})",
        encoding,
        delimiter as char
    );

    parse_rows(&content, delimiter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_delimiter() {
        assert_eq!(detect_delimiter("a;b;c\n1;2;3"), b';');
        assert_eq!(detect_delimiter("a,b,c\n1,2,3"), b',');
        assert_eq!(detect_delimiter("a\tb\tc\n1\t2\t3"), b'\t');
        assert_eq!(detect_delimiter("a|b|c\n1|2|3"), b'|');
        assert_eq!(detect_delimiter("single\nvalue"), b',');
    }

    #[test]
    fn test_infer_cell() {
        assert_eq!(infer_cell("Alice"), CellValue::from("Alice"));
        assert_eq!(infer_cell("100"), CellValue::Number(100.0));
        assert_eq!(infer_cell(" -2.5 "), CellValue::Number(-2.5));
        assert_eq!(infer_cell("TRUE"), CellValue::Boolean(true));
        assert_eq!(infer_cell("false"), CellValue::Boolean(false));
        assert_eq!(infer_cell("   "), CellValue::Empty);
        assert_eq!(infer_cell("inf"), CellValue::from("inf"));
        assert_eq!(infer_cell("NaN"), CellValue::from("NaN"));
    }

    #[test]
    fn test_parse_rows_keeps_ragged_lengths() {
        let rows = parse_rows("Name,Amount,Note\nAlice,100\nBob,200,late,extra\n", b',').unwrap();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1], vec![CellValue::from("Alice"), CellValue::Number(100.0)]);
        assert_eq!(rows[2].len(), 4);
    }

    #[test]
    fn test_parse_rows_quoted_values() {
        let rows = parse_rows("name;value\n\"Doe; Jane\";\"Hello World\"\n", b';').unwrap();
        assert_eq!(rows[1][0], CellValue::from("Doe; Jane"));
        assert_eq!(rows[1][1], CellValue::from("Hello World"));
    }

    #[test]
    fn test_trailing_empty_fields_trimmed() {
        let rows = parse_rows("a,b,c\n1,,\n", b',').unwrap();
        assert_eq!(rows[1], vec![CellValue::Number(1.0)]);
    }

    #[test]
    fn test_auto_parse_semicolon() {
        let rows = parse_bytes_auto(b"name;age\nAlice;30\nBob;25").unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], vec![CellValue::from("name"), CellValue::from("age")]);
        assert_eq!(rows[2][1], CellValue::Number(25.0));
    }

    #[test]
    fn test_bom_is_stripped() {
        let rows = parse_bytes_auto(b"\xEF\xBB\xBFid,label\n1,x").unwrap();
        assert_eq!(rows[0][0], CellValue::from("id"));
    }

    #[test]
    fn test_latin1_decoding() {
        // "Société" in ISO-8859-1
        let bytes: &[u8] = &[0x53, 0x6F, 0x63, 0x69, 0xE9, 0x74, 0xE9];
        let decoded = decode_content(bytes, "iso-8859-1");
        assert_eq!(decoded, "Société");
    }

    #[test]
    fn test_looks_like_text() {
        assert!(looks_like_text(b"a,b\n1,2\n"));
        assert!(!looks_like_text(b""));
        assert!(!looks_like_text(b"PK\x03\x04garbage"));
        assert!(!looks_like_text(&[0xD0, 0xCF, 0x11, 0xE0, 0xA1]));
        assert!(!looks_like_text(b"abc\0def"));
        assert!(!looks_like_text(&[0x01, 0x02, 0x03, 0x04, b'a']));
    }
}
