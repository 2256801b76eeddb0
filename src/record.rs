/// The candle record and how one is sampled.
use anyhow::Result;
use rand::Rng;
use serde::Serialize;
use uuid::{Builder, Uuid};

use crate::catalog::Catalog;
use crate::position::{Position, PositionMode};
use crate::timestamp::{Clock, sample_timestamp};

/// One synthetic emotional check-in. Field order is column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candle {
    pub position: Position,
    pub emotion: String,
    pub timestamp: String,
    pub user_timestamp: String,
    pub user_id: Uuid,
}

/// Everything needed to draw a candle besides the RNG.
pub struct Sampler<'a, C: ?Sized> {
    pub catalog: &'a Catalog,
    pub clock: &'a C,
    pub mode: PositionMode,
    pub days_back: u32,
}

impl<C: Clock + ?Sized> Sampler<'_, C> {
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Result<Candle> {
        let position = self.mode.sample(rng);
        let emotion = self.catalog.choose(rng).to_string();
        let timestamp = sample_timestamp(self.clock, rng, self.days_back)?;
        let user_id = new_user_id(rng);
        Ok(Candle {
            position,
            emotion,
            user_timestamp: timestamp.clone(),
            timestamp,
            user_id,
        })
    }
}

/// A version-4 UUID drawn from `rng`, so seeded runs stay reproducible.
pub fn new_user_id<R: Rng>(rng: &mut R) -> Uuid {
    let mut bytes = [0u8; 16];
    rng.fill(&mut bytes);
    Builder::from_random_bytes(bytes).into_uuid()
}
