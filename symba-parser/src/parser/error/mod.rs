pub mod kind;

pub use symba_error::Error;
