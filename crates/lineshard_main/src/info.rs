use std::fmt;

use colored::Colorize;

use crate::Report;

#[derive(Debug, PartialEq)]
pub enum Section {
    Title(String),
    Items(String, Option<String>),
}

/// Human readable, sectioned output of the CLI
pub struct Info {
    sections: Vec<Section>,
}

impl Default for Info {
    fn default() -> Self {
        Self::new()
    }
}

impl Info {
    pub fn new() -> Self {
        Info { sections: Vec::new() }
    }

    pub fn add_title(mut self, title: impl ToString) -> Self {
        self.sections.push(Section::Title(title.to_string()));
        self
    }

    pub fn add_key(self, key: impl ToString) -> Self {
        self.add_item(key, None::<String>)
    }

    pub fn add_key_value(self, key: impl ToString, value: impl ToString) -> Self {
        self.add_item(key, Some(value))
    }

    fn add_item(mut self, key: impl ToString, value: Option<impl ToString>) -> Self {
        self.sections.push(Section::Items(
            key.to_string(),
            value.map(|a| a.to_string()),
        ));
        self
    }
}

impl From<&Report> for Info {
    fn from(report: &Report) -> Self {
        let mut info = Info::new()
            .add_title("File")
            .add_key_value("Path", report.path.display())
            .add_key_value("Size", format!("{} bytes", report.size))
            .add_key_value(
                "Partitions",
                format!("{} of {} requested", report.partitions.len(), report.requested),
            )
            .add_title("Partitions");

        match &report.inspected {
            Some(inspected) => {
                for partition in inspected {
                    info = info.add_key_value(
                        format!("#{}", partition.index),
                        format!(
                            "offset {}, length {}, first line {:?}",
                            partition.offset, partition.length, partition.first_line
                        ),
                    );
                }
            }
            None => {
                for (index, partition) in report.partitions.iter().enumerate() {
                    info = info.add_key_value(
                        format!("#{index}"),
                        format!("offset {}, length {}", partition.offset, partition.length),
                    );
                }
            }
        }

        if report.partitions.len() < report.requested {
            info = info.add_key("Fewer partitions than requested");
        }

        info
    }
}

impl fmt::Display for Info {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for section in &self.sections {
            match section {
                Section::Title(title) => {
                    writeln!(f)?;
                    writeln!(f, "{}", title.to_uppercase().bold().dimmed())?
                }
                Section::Items(key, value) => {
                    if let Some(value) = value {
                        writeln!(f, "{}: {}", key.bright_cyan().bold(), value)?;
                    } else {
                        writeln!(f, "{key}")?;
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use lineshard_domain::{Partition, PartitionInfo};
    use pretty_assertions::assert_eq;

    use super::*;

    fn report(inspected: Option<Vec<PartitionInfo>>) -> Report {
        Report {
            path: PathBuf::from("data.txt"),
            size: 31,
            requested: 3,
            partitions: vec![Partition::new(0, 20), Partition::new(20, 11)],
            inspected,
        }
    }

    #[test]
    fn test_report_info() {
        let fixture = report(None);

        let actual = Info::from(&fixture);

        let expected = Info::new()
            .add_title("File")
            .add_key_value("Path", "data.txt")
            .add_key_value("Size", "31 bytes")
            .add_key_value("Partitions", "2 of 3 requested")
            .add_title("Partitions")
            .add_key_value("#0", "offset 0, length 20")
            .add_key_value("#1", "offset 20, length 11")
            .add_key("Fewer partitions than requested");

        assert_eq!(actual.sections, expected.sections);
    }

    #[test]
    fn test_report_info_with_first_lines() {
        let fixture = report(Some(vec![
            PartitionInfo { index: 0, offset: 0, length: 20, first_line: "alpha".to_string() },
            PartitionInfo { index: 1, offset: 20, length: 11, first_line: "delta".to_string() },
        ]));

        let actual = Info::from(&fixture);

        let expected = Info::new()
            .add_title("File")
            .add_key_value("Path", "data.txt")
            .add_key_value("Size", "31 bytes")
            .add_key_value("Partitions", "2 of 3 requested")
            .add_title("Partitions")
            .add_key_value("#0", "offset 0, length 20, first line \"alpha\"")
            .add_key_value("#1", "offset 20, length 11, first line \"delta\"")
            .add_key("Fewer partitions than requested");

        assert_eq!(actual.sections, expected.sections);
    }

    #[test]
    fn test_display_plain_key() {
        let fixture = Info::new().add_key("plain");

        let actual = fixture.to_string();

        assert_eq!(actual, "plain\n");
    }
}
