/// Geographic positions: sampling and PostgreSQL array-literal rendering.
///
/// A position renders as `{lat,lng}`, the literal form of a two-element
/// `double precision[]` column. Numbers use `f64`'s `Display`, which is the
/// shortest string that round-trips and never uses exponent notation.
use rand::Rng;
use rand::distributions::Standard;
use serde::{Serialize, Serializer};
use std::fmt;

pub const LAT_MIN: f64 = -90.0;
pub const LAT_MAX: f64 = 90.0;
pub const LNG_MIN: f64 = -180.0;
pub const LNG_MAX: f64 = 180.0;

/// Latitude limit of the Web Mercator projection.
pub const MERCATOR_LAT_MAX: f64 = 85.051_128_779_8;

/// Washington, DC.
pub const DEFAULT_CENTER: Position = Position {
    lat: 38.9072,
    lng: -77.0369,
};

pub const DEFAULT_SPREAD: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub lat: f64,
    pub lng: f64,
}

impl Position {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Saturate each axis at its geographic bound. NaN saturates at the upper
    /// bound, so the result is always in range.
    pub fn clamped(self) -> Self {
        Self {
            lat: saturate(self.lat, LAT_MIN, LAT_MAX),
            lng: saturate(self.lng, LNG_MIN, LNG_MAX),
        }
    }
}

fn saturate(v: f64, lo: f64, hi: f64) -> f64 {
    if v.is_nan() || v >= hi {
        hi
    } else {
        v.max(lo)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{},{}}}", self.lat, self.lng)
    }
}

impl Serialize for Position {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Latitude range used in worldwide mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WorldBounds {
    /// Full geographic range, [-90, 90].
    #[default]
    Geographic,
    /// [-85.0511287798, 85.0511287798], what a Web Mercator map can display.
    WebMercator,
}

impl WorldBounds {
    pub fn lat_max(self) -> f64 {
        match self {
            WorldBounds::Geographic => LAT_MAX,
            WorldBounds::WebMercator => MERCATOR_LAT_MAX,
        }
    }
}

/// How positions are drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PositionMode {
    /// Uniform over the whole map.
    Worldwide(WorldBounds),
    /// Uniform offsets of up to `spread` degrees per axis around `center`,
    /// clamped to the geographic bounds.
    Centered { center: Position, spread: f64 },
}

impl Default for PositionMode {
    fn default() -> Self {
        PositionMode::Centered {
            center: DEFAULT_CENTER,
            spread: DEFAULT_SPREAD,
        }
    }
}

impl PositionMode {
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Position {
        match *self {
            PositionMode::Worldwide(bounds) => {
                let lat_max = bounds.lat_max();
                Position::new(
                    uniform(rng, -lat_max, lat_max),
                    uniform(rng, LNG_MIN, LNG_MAX),
                )
            }
            PositionMode::Centered { center, spread } => {
                let lat = center.lat + uniform(rng, -spread, spread);
                let lng = center.lng + uniform(rng, -spread, spread);
                // Saturate rather than resample; draws pile up on the bounds.
                Position::new(lat, lng).clamped()
            }
        }
    }
}

impl fmt::Display for PositionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionMode::Worldwide(bounds) => {
                let lat_max = bounds.lat_max();
                write!(f, "worldwide (lat [-{lat_max}, {lat_max}], lng [-180, 180])")
            }
            PositionMode::Centered { center, spread } => write!(
                f,
                "centered (center: ({}, {}), spread: {spread} degrees)",
                center.lat, center.lng
            ),
        }
    }
}

/// `a + (b - a) * u` with `u` in `[0, 1)`. Tolerates `a > b` and `a == b`.
fn uniform<R: Rng>(rng: &mut R, a: f64, b: f64) -> f64 {
    let u: f64 = rng.sample(Standard);
    a + (b - a) * u
}
