//! Streams lines from a reader to a writer, colorizing each one.

use anyhow::{Context, Result};
use log::{debug, info};
use std::io::{self, BufRead, Write};

use clr_core::Colorizer;

/// Colorizes `reader` line by line into `writer`.
///
/// Each line is written as soon as it has been read, so `tail -f` style
/// streams show up immediately. A final line without a trailing newline is
/// still colorized and terminated. Invalid UTF-8 is replaced rather than
/// rejected. A closed pipe on the output side ends the run quietly.
///
/// Returns the number of lines written.
pub fn run_colorize<R: BufRead, W: Write>(
    colorizer: &Colorizer,
    mut reader: R,
    mut writer: W,
) -> Result<u64> {
    info!("Colorizing input with {} rule(s).", colorizer.rules().len());

    let mut buf = Vec::new();
    let mut lines = 0u64;
    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .context("Cannot read from pipe")?;
        if read == 0 {
            break;
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
        }

        let line = String::from_utf8_lossy(&buf);
        let colored = colorizer.render(&line);

        if let Err(e) = writeln!(writer, "{}", colored).and_then(|_| writer.flush()) {
            if e.kind() == io::ErrorKind::BrokenPipe {
                debug!("Output closed after {} line(s).", lines);
                return Ok(lines);
            }
            return Err(e).context("Cannot write colorized output");
        }
        lines += 1;
    }

    debug!("Colorized {} line(s).", lines);
    Ok(lines)
}
