pub mod cli;
pub mod config;
pub mod demo;
pub mod http;
pub mod log;

pub use crate::http::{BankingApiClient, BankingError};
