#![forbid(unsafe_code)]

pub mod error;
pub mod evaluator;
pub mod interaction;
pub mod markup;
pub mod model;
pub mod time;
pub mod walk;

pub use error::Error;
pub use time::Clock;
