/// The generation loop: sample a candle, encode it, repeat.
///
/// Rows are written as they are drawn; nothing is accumulated, so memory use
/// does not depend on `count`.
use anyhow::{Context, Result};
use rand::Rng;
use std::io::Write;
use tracing::info;

use crate::catalog::Catalog;
use crate::position::PositionMode;
use crate::record::Sampler;
use crate::timestamp::Clock;
use crate::writer::CandleWriter;

/// Rows between progress messages.
pub const PROGRESS_EVERY: u64 = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct GenerateConfig {
    pub count: u64,
    pub days_back: u32,
    pub mode: PositionMode,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            count: 1000,
            days_back: 30,
            mode: PositionMode::default(),
        }
    }
}

/// What a run produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub rows: u64,
    pub catalog_len: usize,
}

/// Write a header plus `config.count` rows to `sink`.
pub fn generate<C, R, W>(
    config: &GenerateConfig,
    catalog: &Catalog,
    clock: &C,
    rng: &mut R,
    sink: W,
) -> Result<Summary>
where
    C: Clock + ?Sized,
    R: Rng,
    W: Write,
{
    let sampler = Sampler {
        catalog,
        clock,
        mode: config.mode,
        days_back: config.days_back,
    };
    let mut writer = CandleWriter::new(sink)?;

    for i in 0..config.count {
        let candle = sampler
            .sample(rng)
            .with_context(|| format!("failed to sample candle {}", i + 1))?;
        writer.write(&candle)?;
        if (i + 1) % PROGRESS_EVERY == 0 {
            info!("generated {} candles...", i + 1);
        }
    }

    let mut sink = writer.finish()?;
    sink.flush().context("failed to flush output")?;

    Ok(Summary {
        rows: config.count,
        catalog_len: catalog.len(),
    })
}
