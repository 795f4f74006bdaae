//! Ledgerly — Category Catalog bounded context.
//!
//! Announces changes to the expense categories users file entries under.

pub mod application;
pub mod domain;
