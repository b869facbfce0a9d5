pub mod analysis;
pub mod candle;
pub mod levels;
pub mod response;

pub use analysis::*;
pub use candle::*;
pub use levels::*;
pub use response::*;
