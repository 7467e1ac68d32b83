//! Terminal front end for the Abduel 1A2B duel.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub mod app;
pub mod cli;
pub mod command;
mod dto;
pub mod i18n;
pub mod match_store;
pub mod persistence;
pub mod settings;

pub use self::app::App;
