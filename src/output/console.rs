//! Console status lines

use std::io;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::scrub::{FileStatus, FileSummary, RunSummary, ScrubOutput};

const SUCCESS_MARK: &str = "✔";
const FAILURE_MARK: &str = "✖";

/// Writes one status line per file and a closing tally.
pub struct ConsoleReporter<W: WriteColor> {
    out: W,
    dry_run: bool,
}

impl ConsoleReporter<StandardStream> {
    /// Reporter writing to stdout. Environment checks are left to the caller.
    pub fn stdout(use_color: bool, dry_run: bool) -> Self {
        let choice = if use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        Self::new(StandardStream::stdout(choice), dry_run)
    }
}

impl<W: WriteColor> ConsoleReporter<W> {
    pub fn new(out: W, dry_run: bool) -> Self {
        Self { out, dry_run }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_mark(&mut self, mark: &str, color: Color) -> io::Result<()> {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(color)).set_bold(true);
        self.out.set_color(&spec)?;
        write!(self.out, "{}", mark)?;
        self.out.reset()
    }
}

impl<W: WriteColor> ScrubOutput for ConsoleReporter<W> {
    fn file_done(&mut self, file: &FileSummary) -> io::Result<()> {
        match file.status {
            FileStatus::Cleaned => {
                self.write_mark(SUCCESS_MARK, Color::Green)?;
                let verb = if self.dry_run { "Would clean" } else { "Cleaned" };
                writeln!(self.out, " {}: {}", verb, file.file)
            }
            FileStatus::Unchanged => {
                self.write_mark(SUCCESS_MARK, Color::Green)?;
                let mut dim = ColorSpec::new();
                dim.set_dimmed(true);
                self.out.set_color(&dim)?;
                write!(self.out, " Unchanged: {}", file.file)?;
                self.out.reset()?;
                writeln!(self.out)
            }
            FileStatus::Skipped => {
                self.write_mark(FAILURE_MARK, Color::Red)?;
                let reason = file.error.as_deref().unwrap_or("unknown error");
                writeln!(self.out, " Skipped {}: {}", file.file, reason)
            }
        }
    }

    fn finish(&mut self, summary: &RunSummary) -> io::Result<()> {
        if summary.total() == 0 {
            writeln!(self.out, "No JSON files found in {}", summary.folder.display())?;
            return self.out.flush();
        }

        writeln!(self.out)?;
        let mut bold = ColorSpec::new();
        bold.set_bold(true);
        self.out.set_color(&bold)?;
        write!(
            self.out,
            "{} cleaned, {} unchanged, {} skipped",
            summary.cleaned, summary.unchanged, summary.skipped
        )?;
        self.out.reset()?;
        if summary.dry_run {
            write!(self.out, " (dry run, nothing written)")?;
        }
        writeln!(self.out)?;

        let totals = &summary.totals;
        writeln!(
            self.out,
            "Removed {} keys ({} denied, {} unlisted) and {} array scalars",
            totals.dropped_keys(),
            totals.denied_keys,
            totals.unlisted_keys,
            totals.pruned_scalars
        )?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use termcolor::Buffer;

    use crate::filter::FilterReport;

    fn file(name: &str, status: FileStatus, error: Option<&str>) -> FileSummary {
        FileSummary {
            file: name.to_string(),
            path: PathBuf::from(name),
            status,
            error: error.map(str::to_string),
            report: None,
        }
    }

    fn render(dry_run: bool, files: &[FileSummary]) -> String {
        let mut reporter = ConsoleReporter::new(Buffer::no_color(), dry_run);
        let mut summary = RunSummary::new(PathBuf::from("lgu"), dry_run);
        for f in files {
            reporter.file_done(f).unwrap();
            summary.record(f.clone());
        }
        reporter.finish(&summary).unwrap();
        String::from_utf8(reporter.into_inner().into_inner()).unwrap()
    }

    #[test]
    fn test_status_lines() {
        let output = render(
            false,
            &[
                file("abra.json", FileStatus::Cleaned, None),
                file("bad.json", FileStatus::Skipped, Some("invalid JSON: EOF")),
                file("cebu.json", FileStatus::Unchanged, None),
            ],
        );
        assert!(output.contains("✔ Cleaned: abra.json\n"), "got: {}", output);
        assert!(
            output.contains("✖ Skipped bad.json: invalid JSON: EOF\n"),
            "got: {}",
            output
        );
        assert!(output.contains("✔ Unchanged: cebu.json\n"), "got: {}", output);
        assert!(output.contains("1 cleaned, 1 unchanged, 1 skipped"));
    }

    #[test]
    fn test_dry_run_wording() {
        let output = render(true, &[file("abra.json", FileStatus::Cleaned, None)]);
        assert!(output.contains("✔ Would clean: abra.json"), "got: {}", output);
        assert!(output.contains("(dry run, nothing written)"));
    }

    #[test]
    fn test_totals_line() {
        let mut cleaned = file("abra.json", FileStatus::Cleaned, None);
        cleaned.report = Some(FilterReport {
            kept_keys: 4,
            denied_keys: 2,
            unlisted_keys: 1,
            pruned_scalars: 3,
        });
        let output = render(false, &[cleaned]);
        assert!(
            output.contains("Removed 3 keys (2 denied, 1 unlisted) and 3 array scalars"),
            "got: {}",
            output
        );
    }

    #[test]
    fn test_empty_folder_message() {
        let output = render(false, &[]);
        assert_eq!(output, "No JSON files found in lgu\n");
    }
}
