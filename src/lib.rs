//! # keycodes
//!
//! Bidirectional resolution between numeric browser keyboard codes and
//! symbolic key names, for use by input handlers.
//!
//! The crate has two halves:
//!
//! - **`tables`** – The lookup tables themselves: canonical key names, the
//!   alias table, and the derived code→name reverse table.  All three are
//!   built once, at first use, and are immutable for the rest of the process
//!   lifetime.
//!
//! - **`resolver`** – A pure function that classifies its input (an
//!   event-like record, a raw numeric code, or a name/alias/character) and
//!   dispatches to the matching lookup direction.
//!
//! # Example
//!
//! ```
//! use keycodes::{resolve, KeyEventLike, Resolved};
//!
//! assert_eq!(resolve("enter"), Some(Resolved::Code(13)));
//! assert_eq!(resolve(13), Some(Resolved::Name("enter")));
//!
//! // A browser keyboard event deserialized from JSON resolves the same way
//! // as its numeric code.
//! let event = KeyEventLike { which: Some(65), ..Default::default() };
//! assert_eq!(resolve(&event), Some(Resolved::Name("a")));
//! ```
//!
//! Resolution never fails with an error: every unmatched input yields `None`.

pub mod resolver;
pub mod tables;

pub use resolver::{resolve, resolve_code, resolve_name, KeyEventLike, KeyQuery, Resolved};
pub use tables::{alias_by_name, code_by_name, name_by_code, KeyCode, KeyTables};
