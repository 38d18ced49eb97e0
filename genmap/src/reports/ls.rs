//! Ls command report.

use super::output::{Output, Report};

/// One directory entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LsEntry {
    pub name: String,
    pub is_dir: bool,
}

impl LsEntry {
    /// The entry name, with a trailing `/` for directories.
    pub fn display_name(&self) -> String {
        if self.is_dir {
            format!("{}/", self.name)
        } else {
            self.name.clone()
        }
    }
}

/// Report data from listing a directory.
#[derive(Debug)]
pub struct LsReport {
    /// The cleaned, project-relative directory.
    pub dir: String,
    pub entries: Vec<LsEntry>,
}

impl Report for LsReport {
    fn render(&self, out: &mut dyn Output) {
        for entry in &self.entries {
            out.preformatted(&entry.display_name());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    #[test]
    fn test_render() {
        let report = LsReport {
            dir: ".".to_string(),
            entries: vec![
                LsEntry {
                    name: "bud".to_string(),
                    is_dir: true,
                },
                LsEntry {
                    name: "go.mod".to_string(),
                    is_dir: false,
                },
            ],
        };

        let mut out = BufferOutput::default();
        report.render(&mut out);
        assert_eq!(out.lines, vec!["bud/", "go.mod"]);
    }
}
