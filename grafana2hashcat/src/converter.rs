use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use tracing::{debug, warn};

use crate::conversion::{convert_line, trim_line};
use crate::error::{Error, LineError};

/// Number of failed lines kept in [`RunStats::failures`]. Later failures are
/// only counted.
pub const MAX_RECORDED_FAILURES: usize = 16;

/// A line that was reported and skipped.
#[derive(Debug)]
pub struct LineFailure {
    /// 1-based line number, blank lines included.
    pub line: usize,
    pub error: LineError,
}

/// Counters for a single conversion run.
///
/// Every scanned line counts as processed, blank lines included. Only lines
/// that made it into the output count as successes.
#[derive(Debug, Default)]
pub struct RunStats {
    pub lines_processed: usize,
    pub success_count: usize,
    /// Lines that were reported and skipped. Blank lines are not reported.
    pub reported_failures: usize,
    /// The first [`MAX_RECORDED_FAILURES`] reported lines.
    pub failures: Vec<LineFailure>,
}

impl RunStats {
    pub fn failed_count(&self) -> usize {
        self.lines_processed - self.success_count
    }

    fn record_failure(&mut self, line: usize, error: LineError) {
        self.reported_failures += 1;
        if self.failures.len() < MAX_RECORDED_FAILURES {
            self.failures.push(LineFailure { line, error });
        }
    }
}

/// Convert every line of `reader` and append the hashcat records to `writer`.
///
/// Malformed lines and failed writes are logged and skipped. A read failure
/// aborts the run, as does a failure to flush `writer` at the end.
pub fn convert<R: BufRead, W: Write>(mut reader: R, writer: &mut W) -> Result<RunStats, Error> {
    let mut stats = RunStats::default();
    let mut buf = Vec::with_capacity(256);

    loop {
        buf.clear();
        let n = reader
            .read_until(b'\n', &mut buf)
            .map_err(|source| Error::Read { line: stats.lines_processed, source })?;
        if n == 0 {
            break;
        }

        stats.lines_processed += 1;
        let line_no = stats.lines_processed;

        let line = trim_line(&buf);
        if line.is_empty() {
            continue;
        }

        let record = match convert_line(line) {
            Ok(record) => record,
            Err(e) => {
                warn!(line = line_no, content = %String::from_utf8_lossy(line), "{e}");
                if matches!(e, LineError::Format) {
                    warn!("Example: 2ac9cb7dc02b3c0083eb70898e549b63:12345");
                }
                stats.record_failure(line_no, e);
                continue;
            }
        };

        // The whole line goes out in one write_all so a failure never leaves
        // a record split across two calls. The sink may still hold a partial
        // line if the underlying write fails midway.
        let entry = format!("{record}\n");
        if let Err(e) = writer.write_all(entry.as_bytes()) {
            let e = LineError::Write(e);
            warn!(line = line_no, "{e}; output may contain a partial line");
            stats.record_failure(line_no, e);
            continue;
        }

        debug!(line = line_no, "{record}");
        stats.success_count += 1;
    }

    writer.flush().map_err(Error::Flush)?;

    Ok(stats)
}

/// Open `input`, create (or truncate) `output` and run [`convert`] over them.
///
/// The input is opened first, so a missing input never leaves an empty
/// output file behind. The output is not buffered: every record is written
/// straight to the file, so a failing disk shows up on the line that hit it.
#[tracing::instrument(skip_all, fields(input = %input.display(), output = %output.display()))]
pub fn convert_file(input: &Path, output: &Path) -> Result<RunStats, Error> {
    let reader = File::open(input)
        .map(BufReader::new)
        .map_err(|source| Error::Open { path: input.to_path_buf(), source })?;

    let mut writer = File::create(output)
        .map_err(|source| Error::Create { path: output.to_path_buf(), source })?;

    convert(reader, &mut writer)
}
