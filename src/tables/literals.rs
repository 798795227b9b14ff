//! Literal named-key and alias entries.
//!
//! These are the hand-maintained portions of the name table; the letter,
//! digit, function-key, and numpad ranges are generated in
//! [`super::KeyTables::build`].  Codes follow the legacy `KeyboardEvent.which`
//! / `keyCode` values reported by browsers.

use super::KeyCode;

/// Canonical named keys, in insertion order.
///
/// Order is load-bearing: the reverse table is derived by inserting these
/// entries first, then the generated ranges, with later entries overwriting
/// earlier ones on a code collision.
pub(super) const NAMED_KEYS: &[(&str, KeyCode)] = &[
    ("backspace", 8),
    ("tab", 9),
    ("enter", 13),
    ("shift", 16),
    ("ctrl", 17),
    ("alt", 18),
    ("pause/break", 19),
    ("caps lock", 20),
    ("esc", 27),
    ("space", 32),
    ("page up", 33),
    ("page down", 34),
    ("end", 35),
    ("home", 36),
    ("left", 37),
    ("up", 38),
    ("right", 39),
    ("down", 40),
    ("insert", 45),
    ("delete", 46),
    ("windows/command", 91),
    ("right click", 93),
    ("numpad *", 106),
    ("numpad +", 107),
    ("numpad -", 109),
    ("numpad .", 110),
    ("numpad /", 111),
    ("num lock", 144),
    ("scroll lock", 145),
    ("my computer", 182),
    ("my calculator", 183),
    (";", 186),
    ("=", 187),
    (",", 188),
    ("-", 189),
    (".", 190),
    ("/", 191),
    ("`", 192),
    ("[", 219),
    ("\\", 220),
    ("]", 221),
    ("'", 222),
];

/// Alternate spellings that resolve to codes already present in
/// [`NAMED_KEYS`].
///
/// Aliases are merged into the name-lookup surface only after the reverse
/// table is derived, so an alias is never the name returned for a code.
pub(super) const ALIASES: &[(&str, KeyCode)] = &[
    ("ctl", 17),
    ("pause", 19),
    ("break", 19),
    ("caps", 20),
    ("escape", 27),
    ("pgup", 33),
    ("pgdn", 33),
    ("ins", 45),
    ("del", 46),
    ("spc", 32),
];
