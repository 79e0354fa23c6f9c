//! Postgres history sink.

mod load;
mod migrate;

pub use load::{copy_rows, load_history};
pub use migrate::migrate;
