pub mod cfg;

pub mod key;

pub mod error;
