//! Line-by-line driver: reads instructions, feeds the engine, writes trades and
//! the rendered book after each instruction.

use crate::config::{Config, MalformedPolicy};
use crate::engine::Engine;
use crate::error::{EngineError, StreamError};
use crate::protocol::parse_line;
use crate::render::{render_book, render_trades};
use log::warn;
use std::io::{BufRead, Write};

/// Counters for one stream run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StreamSummary {
    /// Instructions that reached the engine.
    pub processed: usize,
    /// Malformed lines dropped under [`MalformedPolicy::Skip`].
    pub skipped: usize,
    pub trades: usize,
}

/// Runs every line of `reader` through `engine`.
///
/// Blank and comment lines are ignored. A malformed line, including one that is
/// not valid UTF-8, is skipped or aborts the run according to
/// `config.on_malformed`; either way the book is unchanged by it. Engine
/// rejections always abort.
pub fn run_stream<R: BufRead, W: Write>(
    engine: &mut Engine,
    mut reader: R,
    mut writer: W,
    config: &Config,
) -> Result<StreamSummary, StreamError> {
    let mut summary = StreamSummary::default();
    let mut buf = Vec::new();
    let mut line_no = 0;
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;
        let parsed = match std::str::from_utf8(&buf) {
            Ok(line) => parse_line(line),
            Err(_) => Err(EngineError::malformed(
                String::from_utf8_lossy(&buf).trim(),
                "line is not valid UTF-8",
            )),
        };
        let order = match parsed {
            Ok(Some(order)) => order,
            Ok(None) => continue,
            Err(e) => match config.on_malformed {
                MalformedPolicy::Skip => {
                    warn!("skipping line {}: {}", line_no, e);
                    summary.skipped += 1;
                    continue;
                }
                MalformedPolicy::Abort => {
                    return Err(StreamError::Engine { line_no, source: e });
                }
            },
        };
        let trades = engine
            .submit_order(order)
            .map_err(|source| StreamError::Engine { line_no, source })?;
        summary.processed += 1;
        summary.trades += trades.len();
        writer.write_all(render_trades(&trades).as_bytes())?;
        if config.print_book {
            writer.write_all(render_book(&engine.snapshot()).as_bytes())?;
        }
    }
    writer.flush()?;
    Ok(summary)
}
