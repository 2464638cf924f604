use std::fmt::Write;

use serde::Serialize;
use wordfreq_core::{FrequencyMap, WordCount};

/// Rows shown in each of the top and bottom sections unless configured otherwise.
pub const DEFAULT_LIMIT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Tab-separated `Word\tCount` sections.
    #[default]
    Text,
    /// Pretty-printed JSON object.
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    pub limit: usize,
    pub format: ReportFormat,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            format: ReportFormat::Text,
        }
    }
}

/// Top/bottom-N view of a [`FrequencyMap`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub total_words: u64,
    pub distinct_words: usize,
    #[serde(skip)]
    pub limit: usize,
    pub most_common: Vec<WordCount>,
    pub least_common: Vec<WordCount>,
}

impl Report {
    pub fn build(counts: &FrequencyMap, options: &ReportOptions) -> Self {
        Self {
            total_words: counts.total(),
            distinct_words: counts.len(),
            limit: options.limit,
            most_common: counts.top(options.limit),
            least_common: counts.bottom(options.limit),
        }
    }

    pub fn render(&self, format: ReportFormat) -> Result<String, serde_json::Error> {
        match format {
            ReportFormat::Text => Ok(self.render_text()),
            ReportFormat::Json => self.render_json(),
        }
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{} most common words:", self.limit);
        write_rows(&mut out, &self.most_common);
        let _ = writeln!(out);
        let _ = writeln!(out, "{} least common words:", self.limit);
        write_rows(&mut out, &self.least_common);
        out
    }

    pub fn render_json(&self) -> Result<String, serde_json::Error> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }
}

fn write_rows(out: &mut String, rows: &[WordCount]) {
    let _ = writeln!(out, "Word\tCount");
    for row in rows {
        let _ = writeln!(out, "{}\t{}", row.word, row.count);
    }
}
