pub mod analysis;
pub mod climate;
pub mod soil;
pub mod weather;

pub use analysis::*;
pub use climate::*;
pub use soil::*;
pub use weather::*;
