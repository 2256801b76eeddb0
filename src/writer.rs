/// CSV encoding of candles.
///
/// The header is written up front so an empty run still produces a loadable
/// file. Fields are quoted only when they need it, which in practice means the
/// position literal (it contains the delimiter).
use anyhow::{Context, Result};
use std::io::Write;

use crate::record::Candle;

/// Column names, in the order the target table's `COPY` expects them.
pub const COLUMNS: [&str; 5] = ["position", "emotion", "timestamp", "user_timestamp", "user_id"];

pub struct CandleWriter<W: Write> {
    inner: csv::Writer<W>,
}

impl<W: Write> CandleWriter<W> {
    pub fn new(sink: W) -> Result<Self> {
        let mut inner = csv::WriterBuilder::new()
            .has_headers(false)
            .quote_style(csv::QuoteStyle::Necessary)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(sink);
        inner
            .write_record(COLUMNS)
            .context("failed to write CSV header")?;
        Ok(Self { inner })
    }

    pub fn write(&mut self, candle: &Candle) -> Result<()> {
        self.inner
            .serialize(candle)
            .context("failed to write CSV row")
    }

    /// Flush buffered rows and hand back the sink.
    pub fn finish(self) -> Result<W> {
        self.inner
            .into_inner()
            .map_err(|e| anyhow::anyhow!("failed to flush CSV output: {}", e.error()))
    }
}
