#![deny(unused_variables)]
#![deny(unused_imports)]

pub mod chunk;
pub mod config;
pub mod error;
pub mod generator;
pub mod import;
pub mod seed;
pub mod traits;
pub mod types;

pub use config::{ConnectionSettings, LogFormat, RunSettings, Scheme, Settings};
pub use error::{Error, Result};
pub use import::{ImportOptions, ImportReport};
pub use traits::VectorStore;
