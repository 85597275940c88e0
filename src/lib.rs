pub mod args;
pub mod error;
pub mod gen;
pub mod utils;
