//! Shared helpers: date and currency parsing, file IO, logging and sample
//! records.

pub mod currency;
pub mod date;
pub mod fixtures;
pub mod io;
pub mod logging;
