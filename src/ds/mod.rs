pub mod date;
pub mod error;
pub mod foreign;
pub mod memo;
pub mod operations;
pub mod pattern;
pub mod record;
pub mod sequence;
pub mod value;
