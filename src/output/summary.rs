//! Markdown summary document builder

use crate::error::ValidationError;

/// Append-only markdown document
///
/// Every fragment ends with a blank line. Fragments are never modified
/// once appended.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummaryRenderer {
    buffer: String,
}

impl SummaryRenderer {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a `#`-style header of the given level (1 to 6)
    pub fn append_header(&mut self, text: &str, level: usize) -> Result<(), ValidationError> {
        if !(1..=6).contains(&level) {
            return Err(ValidationError::HeaderLevel { level });
        }

        self.buffer.push_str(&"#".repeat(level));
        self.buffer.push(' ');
        self.buffer.push_str(text.trim());
        self.buffer.push_str("\n\n");
        Ok(())
    }

    /// Append a paragraph
    pub fn append_paragraph(&mut self, text: &str) {
        self.buffer.push_str(text.trim());
        self.buffer.push_str("\n\n");
    }

    /// Append a pipe table
    ///
    /// Fails without appending anything when there are no columns, no
    /// rows, or a row whose width differs from the column count.
    pub fn append_table<C, R>(&mut self, columns: &[C], rows: &[R]) -> Result<(), ValidationError>
    where
        C: AsRef<str>,
        R: AsRef<[String]>,
    {
        if columns.is_empty() {
            return Err(ValidationError::NoColumns);
        }
        if rows.is_empty() {
            return Err(ValidationError::NoRows);
        }
        if let Some(row) = rows.iter().find(|r| r.as_ref().len() != columns.len()) {
            return Err(ValidationError::RowWidth {
                cells: row.as_ref().len(),
                columns: columns.len(),
            });
        }

        let mut header = String::from("|");
        let mut divider = String::from("|");
        for column in columns {
            header.push_str(&format!(" {} |", column.as_ref()));
            divider.push_str(" --- |");
        }

        self.buffer.push_str(&header);
        self.buffer.push('\n');
        self.buffer.push_str(&divider);
        self.buffer.push('\n');

        for row in rows {
            let mut line = String::from("|");
            for cell in row.as_ref() {
                line.push_str(&format!(" {} |", cell));
            }
            self.buffer.push_str(&line);
            self.buffer.push('\n');
        }

        self.buffer.push('\n');
        Ok(())
    }

    /// The document so far
    pub fn as_str(&self) -> &str {
        &self.buffer
    }
}
