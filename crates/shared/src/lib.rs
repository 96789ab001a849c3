//! Vocabulary shared by the sort engine and its hosts.

pub mod domain;
pub mod error;
pub mod protocol;
