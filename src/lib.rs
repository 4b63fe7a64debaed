// Library behind the `secret` binary, also used directly by the tests

#[cfg(feature = "cli")]
pub mod cli;
pub mod codec;
pub mod commands;
pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod generator;
pub mod output;
pub mod parser;
pub mod recovery;

pub use domain::{GenerationRequest, Secret, ShareRecord};
pub use error::{Error, ParseError};
pub use generator::{GeneratedShares, ShareGenerator};
pub use recovery::{Recovery, RecoveryAssembler};
