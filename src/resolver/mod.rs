//! Input classification and the resolution entry point.
//!
//! Three input shapes are accepted: a keyboard event-like record, a raw
//! numeric code, and a name/alias/character string.  Classification is
//! explicit through the [`KeyQuery`] sum type rather than runtime property
//! probing; `From` conversions keep the call sites as convenient as the
//! dynamically-typed original (`resolve(13)`, `resolve("esc")`,
//! `resolve(&event)`).
//!
//! Resolution has exactly one failure mode — no mapping found — surfaced
//! uniformly as `None`.  Nothing here panics or allocates beyond the
//! lowercase copy of a name lookup.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::tables::{self, KeyCode};

/// Structural stand-in for a browser `KeyboardEvent`.
///
/// Any record exposing one of `which` / `keyCode` / `charCode` as a number
/// resolves correctly; there is no dependency on an actual event type.  Field
/// names follow the browser's camelCase spelling so the struct deserializes
/// directly from keyboard-event JSON.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KeyEventLike {
    pub which: Option<KeyCode>,
    pub key_code: Option<KeyCode>,
    pub char_code: Option<KeyCode>,
}

impl KeyEventLike {
    /// Extracts the event's key code: `which`, then `keyCode`, then
    /// `charCode`, first present nonzero field wins.  Zero counts as absent,
    /// matching the falsy-chain semantics browsers rely on.
    pub fn code(&self) -> Option<KeyCode> {
        [self.which, self.key_code, self.char_code]
            .into_iter()
            .flatten()
            .find(|&code| code != 0)
    }
}

/// A classified resolution input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyQuery<'a> {
    /// A keyboard event-like record; resolved through its extracted code.
    Event(KeyEventLike),
    /// A raw numeric code; resolved to its canonical name.
    Code(KeyCode),
    /// A name, alias, or single character; resolved to a code.
    Name(&'a str),
}

impl From<KeyCode> for KeyQuery<'_> {
    fn from(code: KeyCode) -> Self {
        KeyQuery::Code(code)
    }
}

impl<'a> From<&'a str> for KeyQuery<'a> {
    fn from(name: &'a str) -> Self {
        KeyQuery::Name(name)
    }
}

impl<'a> From<&'a String> for KeyQuery<'a> {
    fn from(name: &'a String) -> Self {
        KeyQuery::Name(name)
    }
}

impl From<KeyEventLike> for KeyQuery<'_> {
    fn from(event: KeyEventLike) -> Self {
        KeyQuery::Event(event)
    }
}

impl From<&KeyEventLike> for KeyQuery<'_> {
    fn from(event: &KeyEventLike) -> Self {
        KeyQuery::Event(*event)
    }
}

/// A successful resolution: the counterpart of whatever was asked for.
///
/// Serializes untagged, so a resolved name becomes a JSON string and a
/// resolved code a JSON number, matching what a page displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Resolved {
    /// Key code for a name/alias/character input.
    Code(KeyCode),
    /// Canonical key name for a numeric or event input.  Borrows from the
    /// shared tables.
    Name(&'static str),
}

impl std::fmt::Display for Resolved {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Resolved::Code(code) => write!(f, "{code}"),
            Resolved::Name(name) => f.write_str(name),
        }
    }
}

/// Resolves a key code, name, or event-like record to its counterpart.
///
/// - An event resolves through its extracted code to a canonical name.
/// - A code resolves to its canonical name (never an alias).
/// - A string resolves case-insensitively through the name table, then the
///   alias table; an unmatched single character falls back to its own
///   scalar value.
///
/// Every unmatched path yields `None`; malformed input and absent mappings
/// are indistinguishable by design.
pub fn resolve<'a>(input: impl Into<KeyQuery<'a>>) -> Option<Resolved> {
    let query = input.into();
    let resolved = match query {
        KeyQuery::Event(event) => event.code().and_then(resolve_code).map(Resolved::Name),
        KeyQuery::Code(code) => resolve_code(code).map(Resolved::Name),
        KeyQuery::Name(name) => resolve_name(name).map(Resolved::Code),
    };
    if resolved.is_none() {
        trace!(?query, "no key mapping found");
    }
    resolved
}

/// Reverse direction: code → canonical name.
pub fn resolve_code(code: KeyCode) -> Option<&'static str> {
    tables::name_by_code().get(&code).map(String::as_str)
}

/// Forward direction: name, alias, or single character → code.
///
/// Lookup is on the lowercased string; the single-character fallback uses
/// the original string, so `resolve_name("!")` is 33 and `resolve_name("A")`
/// is 65 (found as `"a"` before the fallback applies).
pub fn resolve_name(name: &str) -> Option<KeyCode> {
    let lowered = name.to_lowercase();
    if let Some(&code) = tables::code_by_name().get(&lowered) {
        return Some(code);
    }
    if let Some(&code) = tables::alias_by_name().get(&lowered) {
        return Some(code);
    }
    // Unrecognized single character: its own scalar value is the code.
    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c as KeyCode),
        _ => None,
    }
}
