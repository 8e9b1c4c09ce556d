//! Output writer — write each generated document, or print it on a dry run.

use crate::config::Config;
use crate::render::Rendered;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Overwrite confirmation capability.
pub trait Confirm {
    /// Ask `message`; `true` means go ahead.
    fn confirm(&mut self, message: &str) -> bool;
}

impl<F: FnMut(&str) -> bool> Confirm for F {
    fn confirm(&mut self, message: &str) -> bool {
        self(message)
    }
}

/// Blocking `[y/N]` prompt on stdin. Anything but y/yes, including EOF, declines.
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&mut self, message: &str) -> bool {
        print!("{} [y/N] ", message);
        io::stdout().flush().ok();

        let mut input = String::new();
        if io::stdin().lock().read_line(&mut input).is_err() {
            return false;
        }
        matches!(input.trim().to_lowercase().as_str(), "y" | "yes")
    }
}

/// What happened to one generated document.
#[derive(Debug)]
pub enum WriteOutcome {
    Written,
    /// Target existed and overwrite was declined
    Skipped,
    /// Dry run, printed only
    Printed,
    Failed(io::Error),
}

pub struct OutputWriter<'a, C, W> {
    config: &'a Config,
    confirm: C,
    console: W,
}

impl<'a, C: Confirm, W: Write> OutputWriter<'a, C, W> {
    pub fn new(config: &'a Config, confirm: C, console: W) -> Self {
        Self {
            config,
            confirm,
            console,
        }
    }

    /// Print and/or write each document in order.
    ///
    /// A failed file write is reported and recorded; the remaining documents
    /// are still processed. Console failures (e.g. a closed pipe) are logged
    /// and never stop a write.
    pub fn emit<'d, I>(&mut self, documents: I) -> Vec<WriteOutcome>
    where
        I: IntoIterator<Item = (&'d Path, &'d Rendered)>,
    {
        let mut outcomes = Vec::new();
        for (path, rendered) in documents {
            if self.config.prints_documents() {
                if let Err(e) = self.print_document(rendered) {
                    tracing::warn!(error = %e, "failed to print generated code");
                }
            }
            let outcome = if self.config.dry {
                WriteOutcome::Printed
            } else {
                self.write_output(path, &rendered.to_php())
            };
            outcomes.push(outcome);
        }
        outcomes
    }

    /// Write `content` to `path`, confirming first if the file exists.
    pub fn write_output(&mut self, path: &Path, content: &str) -> WriteOutcome {
        if !self.config.yes && path.exists() {
            let message = format!(
                "Overwrite existing file at {}? (use -y to overwrite automatically)",
                path.display()
            );
            if !self.confirm.confirm(&message) {
                tracing::info!(path = %path.display(), "overwrite declined, skipping");
                return WriteOutcome::Skipped;
            }
        }

        match fs::write(path, content) {
            Ok(()) => {
                if let Err(e) =
                    writeln!(self.console, "Wrote generated file to: {}", path.display())
                {
                    tracing::warn!(path = %path.display(), error = %e, "failed to report written file");
                }
                WriteOutcome::Written
            }
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "failed to write generated file");
                WriteOutcome::Failed(e)
            }
        }
    }

    fn print_document(&mut self, rendered: &Rendered) -> io::Result<()> {
        writeln!(self.console, "{}\n", rendered.title)?;
        writeln!(self.console, "{}\n\n", rendered.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use tempfile::TempDir;

    fn rendered(title: &str, body: &str) -> Rendered {
        Rendered {
            title: title.to_string(),
            body: body.to_string(),
        }
    }

    fn never(_: &str) -> bool {
        panic!("should not prompt")
    }

    /// Console whose every write fails, like stdout piped into a closed reader.
    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }
    }

    #[test]
    fn console_failure_does_not_stop_writes() {
        let dir = TempDir::new().unwrap();
        let first = dir.path().join("a.php");
        let second = dir.path().join("b.php");
        let config = Config {
            debug: true,
            ..Config::default()
        };
        let a = rendered("A", "a");
        let b = rendered("B", "b");

        let outcomes = OutputWriter::new(&config, never, BrokenPipe)
            .emit([(first.as_path(), &a), (second.as_path(), &b)]);

        assert!(outcomes.iter().all(|o| matches!(o, WriteOutcome::Written)));
        assert_eq!(fs::read_to_string(&first).unwrap(), "<?php\na\n?>");
        assert_eq!(fs::read_to_string(&second).unwrap(), "<?php\nb\n?>");
    }

    #[test]
    fn writes_new_file_without_prompt() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.php");
        let config = Config::default();
        let mut console = Vec::new();

        let outcome = OutputWriter::new(&config, never, &mut console)
            .write_output(&path, "<?php\n?>");

        assert!(matches!(outcome, WriteOutcome::Written));
        assert_eq!(fs::read_to_string(&path).unwrap(), "<?php\n?>");
        let console = String::from_utf8(console).unwrap();
        assert!(console.contains("Wrote generated file to:"), "{console}");
    }

    #[test]
    fn declined_overwrite_skips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.php");
        fs::write(&path, "keep me").unwrap();
        let config = Config::default();
        let asked = Cell::new(0);

        let outcome = OutputWriter::new(
            &config,
            |msg: &str| {
                assert!(msg.contains("Overwrite existing file at"));
                asked.set(asked.get() + 1);
                false
            },
            io::sink(),
        )
        .write_output(&path, "new");

        assert!(matches!(outcome, WriteOutcome::Skipped));
        assert_eq!(asked.get(), 1);
        assert_eq!(fs::read_to_string(&path).unwrap(), "keep me");
    }

    #[test]
    fn confirmed_overwrite_writes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.php");
        fs::write(&path, "old").unwrap();
        let config = Config::default();

        let outcome = OutputWriter::new(&config, |_: &str| true, io::sink())
            .write_output(&path, "new");

        assert!(matches!(outcome, WriteOutcome::Written));
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn yes_overwrites_without_prompt() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.php");
        fs::write(&path, "old").unwrap();
        let config = Config {
            yes: true,
            ..Config::default()
        };

        let outcome = OutputWriter::new(&config, never, io::sink())
            .write_output(&path, "new");

        assert!(matches!(outcome, WriteOutcome::Written));
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn write_failure_does_not_stop_next_document() {
        let dir = TempDir::new().unwrap();
        let bad = dir.path().join("missing-dir").join("a.php");
        let good = dir.path().join("b.php");
        let config = Config::default();
        let a = rendered("A", "a");
        let b = rendered("B", "b");

        let outcomes = OutputWriter::new(&config, never, io::sink())
            .emit([(bad.as_path(), &a), (good.as_path(), &b)]);

        assert!(matches!(outcomes[0], WriteOutcome::Failed(_)));
        assert!(matches!(outcomes[1], WriteOutcome::Written));
        assert_eq!(fs::read_to_string(&good).unwrap(), "<?php\nb\n?>");
    }

    #[test]
    fn dry_run_prints_and_never_writes() {
        let dir = TempDir::new().unwrap();
        let existing = dir.path().join("a.php");
        let fresh = dir.path().join("b.php");
        fs::write(&existing, "old").unwrap();
        let config = Config {
            dry: true,
            ..Config::default()
        };
        let a = rendered("WP Shortcodes", "function a() {}");
        let b = rendered("WP Page Baker shortcode map php code", "vc_map();");
        let mut console = Vec::new();

        let outcomes = OutputWriter::new(&config, never, &mut console)
            .emit([(existing.as_path(), &a), (fresh.as_path(), &b)]);

        assert!(outcomes.iter().all(|o| matches!(o, WriteOutcome::Printed)));
        assert_eq!(fs::read_to_string(&existing).unwrap(), "old");
        assert!(!fresh.exists());
        let console = String::from_utf8(console).unwrap();
        assert!(console.contains("WP Shortcodes\n\nfunction a() {}"), "{console}");
        assert!(console.contains("vc_map();"), "{console}");
        assert!(!console.contains("Wrote generated file"), "{console}");
    }

    #[test]
    fn debug_prints_and_writes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.php");
        let config = Config {
            debug: true,
            ..Config::default()
        };
        let a = rendered("WP Shortcodes", "function a() {}");
        let mut console = Vec::new();

        let outcomes = OutputWriter::new(&config, never, &mut console)
            .emit([(path.as_path(), &a)]);

        assert!(matches!(outcomes[0], WriteOutcome::Written));
        assert!(path.exists());
        let console = String::from_utf8(console).unwrap();
        assert!(console.contains("function a() {}"), "{console}");
        assert!(console.contains("Wrote generated file to:"), "{console}");
    }
}
