pub mod collector;
pub mod process;
pub mod snapshot;
pub mod source;
