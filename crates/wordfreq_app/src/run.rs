use std::io::Write;

use anyhow::{Context, Result};
use wordfreq_core::count_words;
use wordfreq_engine::{read_text, AtomicFileWriter, Report};
use wordfreq_logging::wf_info;

use crate::cli::Cli;

/// Read the input, count it and write the rendered report to `out`
/// (and to `--output` when given).
pub fn run(cli: &Cli, out: &mut dyn Write) -> Result<()> {
    let input = read_text(&cli.input)?;
    let counts = count_words(&input.text);
    wf_info!(
        "{} words, {} distinct in {:?}",
        counts.total(),
        counts.len(),
        cli.input
    );

    let options = cli.report_options();
    let rendered = Report::build(&counts, &options)
        .render(options.format)
        .context("failed to render report")?;

    out.write_all(rendered.as_bytes())
        .context("failed to write report to stdout")?;
    out.flush()?;

    if let Some(path) = &cli.output {
        let (writer, filename) = AtomicFileWriter::for_path(path)?;
        writer
            .write(&filename, &rendered)
            .with_context(|| format!("failed to save report to {}", path.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use clap::Parser;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::run;
    use crate::cli::Cli;

    fn cli(args: &[&str]) -> Cli {
        let mut full = vec!["wordfreq"];
        full.extend_from_slice(args);
        Cli::try_parse_from(full).unwrap()
    }

    fn path_str(path: &Path) -> &str {
        path.to_str().unwrap()
    }

    #[test]
    fn prints_text_report() {
        wordfreq_logging::initialize_for_tests();
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("input.txt");
        fs::write(&input, "It's a dog. A DOG, a cat!").unwrap();

        let mut out = Vec::new();
        run(&cli(&[path_str(&input), "-n", "2"]), &mut out).unwrap();

        let expected = "\
2 most common words:
Word\tCount
a\t3
dog\t2

2 least common words:
Word\tCount
its\t1
cat\t1
";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn writes_report_file_too() {
        wordfreq_logging::initialize_for_tests();
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("input.txt");
        let output = temp.path().join("reports").join("counts.json");
        fs::write(&input, "x y x").unwrap();

        let mut out = Vec::new();
        run(
            &cli(&[path_str(&input), "--format", "json", "-o", path_str(&output)]),
            &mut out,
        )
        .unwrap();

        let saved = fs::read_to_string(&output).unwrap();
        assert_eq!(saved, String::from_utf8(out).unwrap());
        assert!(saved.contains("\"total_words\": 3"));
    }

    #[test]
    fn missing_input_is_reported() {
        wordfreq_logging::initialize_for_tests();
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("nope.txt");

        let mut out = Vec::new();
        let err = run(&cli(&[path_str(&input)]), &mut out).unwrap_err();
        assert_eq!(
            format!("{err:#}"),
            format!("input unavailable at {}: file not found", input.display())
        );
        assert!(out.is_empty());
    }
}
