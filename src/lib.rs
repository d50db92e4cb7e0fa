//! Layered client for a remote user-record API.
//!
//! Calls flow strictly downward: [`actions`] → [`use_cases`] →
//! [`repository`] → [`transport`]. Records cross every boundary as
//! [`types::UserDto`] values.

pub mod actions;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod output;
pub mod repository;
pub mod transport;
pub mod types;
pub mod use_cases;
