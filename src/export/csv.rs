use crate::export::ExportError;
use crate::types::histogram::{RankedEntry, RankedList};

/// `token,count` per entry, newline-joined, no header and no trailing newline.
///
/// Tokens never contain commas or newlines, so no quoting is needed.
pub fn to_csv(list: &RankedList) -> String {
    list.iter()
        .map(|entry| format!("{},{}", entry.token, entry.count))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Reads back the output of [`to_csv`]. Empty input is an empty list.
pub fn parse_csv(text: &str) -> Result<Vec<RankedEntry>, ExportError> {
    if text.is_empty() {
        return Ok(Vec::new());
    }

    text.split('\n')
        .enumerate()
        .map(|(idx, line)| -> Result<RankedEntry, ExportError> {
            let line = line.strip_suffix('\r').unwrap_or(line);
            let malformed = || ExportError::MalformedLine {
                line: idx + 1,
                content: line.to_string(),
            };

            let (token, count) = line.rsplit_once(',').ok_or_else(malformed)?;
            let count = count.parse::<usize>().map_err(|_| malformed())?;

            Ok(RankedEntry::new(token, count))
        })
        .collect()
}
