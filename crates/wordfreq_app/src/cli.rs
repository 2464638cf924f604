use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use wordfreq_engine::{ReportFormat, ReportOptions, DEFAULT_LIMIT};
use wordfreq_logging::LogDestination;

/// Count word frequencies in a text file.
#[derive(Debug, Parser)]
#[command(name = "wordfreq", version, about)]
pub struct Cli {
    /// Text file to count.
    #[arg(default_value = "input.txt")]
    pub input: PathBuf,

    /// Rows in each of the most and least common sections.
    #[arg(short = 'n', long, default_value_t = DEFAULT_LIMIT)]
    pub limit: usize,

    /// Report layout: tab-separated text or JSON.
    #[arg(short, long, value_enum, default_value_t = FormatArg::Text)]
    pub format: FormatArg,

    /// Also write the report to this file.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Where log messages go.
    #[arg(long, value_enum, default_value_t = LogArg::Terminal)]
    pub log: LogArg,

    /// Log at debug level instead of warn.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogArg {
    Terminal,
    File,
    Both,
    Off,
}

impl Cli {
    pub fn level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        }
    }

    /// Whether a top-level error should be reported through the logger rather
    /// than printed; exactly one of the two happens, and the logger only counts
    /// when it actually writes to the terminal.
    pub fn errors_go_to_log(&self, logger_installed: bool) -> bool {
        logger_installed && matches!(self.log, LogArg::Terminal | LogArg::Both)
    }

    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            limit: self.limit,
            format: self.format.into(),
        }
    }
}

impl From<FormatArg> for ReportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => ReportFormat::Text,
            FormatArg::Json => ReportFormat::Json,
        }
    }
}

impl From<LogArg> for LogDestination {
    fn from(arg: LogArg) -> Self {
        match arg {
            LogArg::Terminal => LogDestination::Terminal,
            LogArg::File => LogDestination::File,
            LogArg::Both => LogDestination::Both,
            LogArg::Off => LogDestination::Off,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn defaults_read_input_txt_with_ten_rows() {
        let cli = Cli::try_parse_from(["wordfreq"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("input.txt"));
        assert_eq!(cli.limit, 10);
        assert_eq!(cli.format, FormatArg::Text);
        assert_eq!(cli.output, None);
        assert_eq!(cli.level(), LevelFilter::Warn);
        assert_eq!(LogDestination::from(cli.log), LogDestination::Terminal);
    }

    #[test]
    fn parses_all_flags() {
        let cli = Cli::try_parse_from([
            "wordfreq", "book.txt", "-n", "3", "--format", "json", "-o", "out.json", "--log",
            "off", "-v",
        ])
        .unwrap();
        assert_eq!(cli.input, PathBuf::from("book.txt"));
        assert_eq!(
            cli.report_options(),
            ReportOptions {
                limit: 3,
                format: ReportFormat::Json,
            }
        );
        assert_eq!(cli.output, Some(PathBuf::from("out.json")));
        assert_eq!(LogDestination::from(cli.log), LogDestination::Off);
        assert_eq!(cli.level(), LevelFilter::Debug);
    }

    #[test]
    fn errors_are_reported_on_one_path() {
        let terminal = Cli::try_parse_from(["wordfreq"]).unwrap();
        assert!(terminal.errors_go_to_log(true));
        assert!(!terminal.errors_go_to_log(false));

        let file = Cli::try_parse_from(["wordfreq", "--log", "file"]).unwrap();
        assert!(!file.errors_go_to_log(true));

        let off = Cli::try_parse_from(["wordfreq", "--log", "off"]).unwrap();
        assert!(!off.errors_go_to_log(false));
    }

    #[test]
    fn every_flag_has_help_text() {
        let help = Cli::command().render_help().to_string();
        assert!(help.contains("Report layout: tab-separated text or JSON"));
        assert!(help.contains("Rows in each of the most and least common sections"));
    }

    #[test]
    fn rejects_unknown_format() {
        assert!(Cli::try_parse_from(["wordfreq", "--format", "csv"]).is_err());
    }
}
