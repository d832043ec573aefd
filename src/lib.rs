pub mod cli;
pub mod commands;
pub mod filter;
pub mod http;
pub mod provider;
pub mod report;
