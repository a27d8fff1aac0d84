//! End-of-run label summary

use std::collections::BTreeMap;

use comfy_table::{Cell, Color, Table, modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL};

use crate::report::ResultRow;

/// Label counts for one completed (or cancelled) run.
#[derive(Debug, Default)]
pub struct Summary {
    counts: BTreeMap<String, usize>,
    total: usize,
}

impl Summary {
    pub fn from_rows(rows: &[ResultRow]) -> Self {
        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        for row in rows {
            *counts.entry(row.outcome.label().to_string()).or_default() += 1;
        }
        Self {
            counts,
            total: rows.len(),
        }
    }

    /// TTY output: label-count table, printed by the caller through the
    /// progress context so it never tears active bars.
    pub fn render(&self) -> String {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS)
            .set_header(vec![
                Cell::new("Label").fg(Color::Cyan),
                Cell::new("Papers").fg(Color::Cyan),
            ]);
        for (label, count) in &self.counts {
            table.add_row(vec![label.clone(), count.to_string()]);
        }
        table.add_row(vec![
            Cell::new("Total").fg(Color::Green),
            Cell::new(self.total.to_string()).fg(Color::Green),
        ]);
        format!("\n{table}")
    }

    /// Non-TTY output: one log line per label.
    pub fn log(&self) {
        for (label, count) in &self.counts {
            log::info!("{label}: {count}");
        }
        log::info!("Total papers: {}", self.total);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paperlabel_classify::Outcome;
    use paperlabel_extract::Metadata;

    fn row(label: Option<&str>) -> ResultRow {
        let outcome = match label {
            Some(l) => Outcome::Labeled {
                label: l.to_string(),
                confidence: 0.8,
            },
            None => Outcome::MissingMetadata,
        };
        ResultRow {
            pdf_file: "x.pdf".to_string(),
            metadata: Metadata::none(),
            outcome,
        }
    }

    #[test]
    fn counts_labels_and_sentinels() {
        let rows = vec![
            row(Some("Graph-Based Learning")),
            row(Some("Graph-Based Learning")),
            row(None),
        ];
        let summary = Summary::from_rows(&rows);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.counts.get("Graph-Based Learning"), Some(&2));
        assert_eq!(summary.counts.get("Missing Metadata"), Some(&1));
        assert_eq!(summary.counts.get("Low Confidence"), None);
    }

    #[test]
    fn empty_rows_give_empty_summary() {
        let summary = Summary::from_rows(&[]);
        assert_eq!(summary.total, 0);
    }

    #[test]
    fn rendered_table_lists_every_label_and_the_total() {
        let rows = vec![row(Some("Graph-Based Learning")), row(None)];
        let rendered = Summary::from_rows(&rows).render();
        assert!(rendered.contains("Graph-Based Learning"));
        assert!(rendered.contains("Missing Metadata"));
        assert!(rendered.contains("Total"));
        assert!(rendered.contains('2'));
    }
}
