//! Console table printed while artifacts are checked

use crate::domain::{SummaryRow, UpdateStatus};
use colored::Colorize;
use std::io::{self, Write};

/// Streams classified artifacts to a writer as they come in
pub struct ConsoleTable {
    writer: Box<dyn Write + Send>,
    color: bool,
}

impl ConsoleTable {
    /// Create a table writing to `writer`
    pub fn new(writer: Box<dyn Write + Send>, color: bool) -> Self {
        Self { writer, color }
    }

    /// Colored table on standard output
    pub fn stdout() -> Self {
        Self::new(Box::new(io::stdout()), true)
    }

    /// Table that discards everything
    pub fn sink() -> Self {
        Self::new(Box::new(io::sink()), false)
    }

    /// Print the optional section banner and the column header
    pub fn write_header(&mut self, section: Option<&str>) -> io::Result<()> {
        if let Some(section) = section {
            writeln!(self.writer, "\n### {} ###\n", section)?;
        }
        writeln!(
            self.writer,
            "{:<15} {:<15} {:<15} {}\n{}",
            "Type",
            "Version",
            "Update",
            "Artifact",
            "-".repeat(100)
        )
    }

    /// Print one classified artifact
    pub fn write_row(&mut self, row: &SummaryRow) -> io::Result<()> {
        let status = format!("{:<15}", row.status.to_string());
        let status = if self.color {
            match row.status {
                UpdateStatus::Outdated { .. } => status.yellow().to_string(),
                UpdateStatus::UpToDate => status.green().to_string(),
                UpdateStatus::NotFound => status.red().to_string(),
            }
        } else {
            status
        };

        writeln!(
            self.writer,
            "{:<15} {:<15} {} {}",
            row.kind.to_string(),
            row.declared_version,
            status,
            row.coordinate
        )
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Artifact, ArtifactKind};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    #[test]
    fn test_header_with_section() {
        let buffer = SharedBuffer::default();
        let mut table = ConsoleTable::new(Box::new(buffer.clone()), false);
        table.write_header(Some("foobar-a")).unwrap();
        let out = buffer.contents();
        assert!(out.starts_with("\n### foobar-a ###\n"));
        assert!(out.contains("Type            Version         Update          Artifact"));
        assert!(out.contains(&"-".repeat(100)));
    }

    #[test]
    fn test_header_without_section() {
        let buffer = SharedBuffer::default();
        let mut table = ConsoleTable::new(Box::new(buffer.clone()), false);
        table.write_header(None).unwrap();
        assert!(buffer.contents().starts_with("Type"));
    }

    #[test]
    fn test_row() {
        let buffer = SharedBuffer::default();
        let mut table = ConsoleTable::new(Box::new(buffer.clone()), false);
        let artifact = Artifact::new("org.mongodb", "bson", "4.11.5");
        let row = SummaryRow::new(
            ArtifactKind::Dependency,
            &artifact,
            UpdateStatus::Outdated {
                latest: "5.2.1".to_string(),
            },
        );
        table.write_row(&row).unwrap();
        assert_eq!(
            buffer.contents(),
            "Dependency      4.11.5          5.2.1           org.mongodb:bson\n"
        );
    }
}
