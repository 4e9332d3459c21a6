//! Reader/writer for the `keyword,meaning,example` artifacts. Fields with
//! commas, quotes, or newlines are quoted and double-quote escaped.

use crate::error::ExportError;

pub const HEADER: &str = "keyword,meaning,example";

/// Byte-order mark written at the start of every artifact so spreadsheet
/// tools decode the Arabic text as UTF-8.
pub const BOM: char = '\u{feff}';

/// One data row of the artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub keyword: String,
    pub meaning: String,
    pub example: String,
}

pub fn format_row(keyword: &str, meaning: &str, example: &str) -> String {
    format!(
        "{},{},{}\n",
        escape(keyword),
        escape(meaning),
        escape(example)
    )
}

fn escape(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// Parse a full artifact: optional BOM, header row, then data rows.
pub fn parse(data: &str) -> Result<Vec<Row>, ExportError> {
    let data = data.strip_prefix(BOM).unwrap_or(data);

    let mut rows = Vec::new();
    for (idx, record) in parse_records(data)?.into_iter().enumerate() {
        if idx == 0 {
            // header
            continue;
        }
        if record.iter().all(|f| f.is_empty()) {
            continue;
        }
        if record.len() != 3 {
            return Err(ExportError::Malformed {
                line: idx + 1,
                reason: format!("expected 3 columns, got {}", record.len()),
            });
        }
        let mut record = record.into_iter();
        rows.push(Row {
            keyword: record.next().unwrap_or_default(),
            meaning: record.next().unwrap_or_default(),
            example: record.next().unwrap_or_default(),
        });
    }
    Ok(rows)
}

fn parse_records(data: &str) -> Result<Vec<Vec<String>>, ExportError> {
    let mut records = Vec::new();
    let mut record: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut line = 1;

    let mut chars = data.chars().peekable();
    while let Some(ch) = chars.next() {
        if in_quotes {
            match ch {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                '\n' => {
                    line += 1;
                    field.push(ch);
                }
                _ => field.push(ch),
            }
            continue;
        }

        match ch {
            '"' if field.is_empty() => in_quotes = true,
            ',' => record.push(std::mem::take(&mut field)),
            '\r' => {}
            '\n' => {
                line += 1;
                record.push(std::mem::take(&mut field));
                if record.iter().any(|f| !f.is_empty()) {
                    records.push(std::mem::take(&mut record));
                } else {
                    record.clear();
                }
            }
            _ => field.push(ch),
        }
    }

    if in_quotes {
        return Err(ExportError::Malformed {
            line,
            reason: "unterminated quoted field".to_string(),
        });
    }
    if !field.is_empty() || !record.is_empty() {
        record.push(field);
        records.push(record);
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_fields_are_not_quoted() {
        assert_eq!(format_row("باب", "door", "فتحت الباب"), "باب,door,فتحت الباب\n");
    }

    #[test]
    fn special_fields_are_quoted_and_escaped() {
        assert_eq!(
            format_row("k", "a, b", "she said \"hi\""),
            "k,\"a, b\",\"she said \"\"hi\"\"\"\n"
        );
    }

    #[test]
    fn parse_inverts_format() {
        let doc = format!(
            "{BOM}{HEADER}\n{}{}",
            format_row("باب", "a, b", "قال \"اهلا\""),
            format_row("بيت", "m", "e"),
        );

        let rows = parse(&doc).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].keyword, "باب");
        assert_eq!(rows[0].meaning, "a, b");
        assert_eq!(rows[0].example, "قال \"اهلا\"");
        assert_eq!(rows[1].keyword, "بيت");
    }

    #[test]
    fn parse_tolerates_missing_bom_and_blank_lines() {
        let rows = parse("keyword,meaning,example\n\nباب,m,e\n").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].keyword, "باب");
    }

    #[test]
    fn parse_rejects_short_records() {
        let err = parse("keyword,meaning,example\nباب,m\n").unwrap_err();
        assert!(matches!(err, ExportError::Malformed { line: 2, .. }));
    }

    #[test]
    fn parse_rejects_unterminated_quotes() {
        assert!(parse("keyword,meaning,example\n\"باب,m,e\n").is_err());
    }
}
