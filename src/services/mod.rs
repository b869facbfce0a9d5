pub mod analysis;
pub mod cache;
pub mod candles;
pub mod levels;
pub mod signals;

pub use analysis::analyze;
pub use cache::Cache;
pub use candles::CandleService;
pub use levels::LevelDetector;
pub use signals::{FibonacciRetracement, RsiSupport};
