//! `rolodex` - a local contact directory
//!
//! This library provides the core functionality for storing, editing, and
//! displaying contact records (name, surname, phone, email) keyed by email
//! address, persisted as a JSON snapshot in a local key-value store.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod contact;
pub mod directory;
pub mod error;
pub mod logging;
pub mod session;
pub mod shell;
pub mod storage;
pub mod view;

pub use config::Config;
pub use contact::Contact;
pub use directory::{Directory, Upsert};
pub use error::{Error, Result};
pub use logging::init_logging;
pub use session::{EditMode, Form, Session, SubmitOutcome};
pub use shell::Shell;
pub use storage::Storage;
pub use view::{Card, CardList};
