//! The forex day-trading coach: a fixed prompt template plus one handler.

pub mod coach;
pub mod prompt;

pub use coach::{CoachingHandler, ERROR_PREFIX};
pub use prompt::render_prompt;
