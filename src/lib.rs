pub mod catalog;
pub mod generate;
pub mod position;
pub mod record;
pub mod timestamp;
pub mod writer;

pub use catalog::Catalog;
pub use generate::{GenerateConfig, Summary, generate};
pub use position::{Position, PositionMode, WorldBounds};
pub use record::Candle;

/// Output target that means "write to stdout" rather than a file.
pub const STDOUT_TARGET: &str = "-";

/// True if `target` names stdout instead of a file.
pub fn is_stdout(target: &str) -> bool {
    target == STDOUT_TARGET
}
