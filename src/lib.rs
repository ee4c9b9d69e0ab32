//! daylink - Date link maintenance for daily markdown notes
//!
//! Classifies the links in a journal or standup note and repoints
//! previous/next/cross-reference links at the notes that actually exist.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::DaylinkError;
