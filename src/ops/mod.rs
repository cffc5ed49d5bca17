pub mod habit_ops;
pub mod rollover;
pub mod streak_ops;
