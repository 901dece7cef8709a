pub mod assembler;
pub mod config;
pub mod error;
pub mod fetch;
pub mod models;
pub mod notify;
pub mod poll;
pub mod scrapers;

pub use assembler::{Assembler, Assembly, FetchFailure};
pub use models::{Properties, Property};
