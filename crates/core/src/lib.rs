#![forbid(unsafe_code)]

pub mod choices;
pub mod error;
pub mod model;
pub mod text;
pub mod time;

pub use choices::{fisher_yates, shuffled_choices, shuffled_choices_with};
pub use error::Error;
pub use text::decode_entities;
pub use time::Clock;
