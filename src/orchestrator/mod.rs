pub mod deploy;

pub mod error;
