pub mod habit;
pub mod streak;
pub mod session;
pub mod config;

pub use habit::*;
pub use streak::*;
pub use session::*;
pub use config::*;
