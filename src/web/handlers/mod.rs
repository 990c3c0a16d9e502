pub mod homepage;

pub use homepage::*;
