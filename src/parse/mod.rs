pub mod error;
pub mod habit_codec;
pub mod streak_codec;

pub use error::CodecError;
pub use habit_codec::{parse_habits, serialize_habits};
pub use streak_codec::{DATE_FORMAT, parse_streak, serialize_streak};
