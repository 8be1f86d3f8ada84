//! Hostedit - hosts file model, codec and address validation.

pub mod address;
pub mod cli;
pub mod codec;
pub mod config;
pub mod error;
pub mod record;
pub mod table;
pub mod view;

pub use error::{Error, Result};
pub use record::{Column, HostRecord};
pub use table::HostTable;
