//! Locale context and translated text.
//!
//! Feed generation emits one localized block per published language of an
//! entity. Translated field access reads a thread-local *active locale*,
//! mirroring how the content management layer resolves translated columns.
//! Generators switch the active locale with [`activate`], which returns an
//! RAII guard restoring the previous locale on every exit path, including
//! unwinding.
//!
//! # Examples
//! ```
//! use trailhead_core::locale::{self, Locale};
//!
//! locale::set_active(&Locale::new("en"));
//! {
//!     let _guard = locale::activate(&Locale::new("fr"));
//!     assert_eq!(locale::active().as_str(), "fr");
//! }
//! assert_eq!(locale::active().as_str(), "en");
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A language code such as `"en"` or `"fr"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locale(String);

impl Locale {
    /// Construct a locale from a language code.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Return the language code as a `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Locale {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

thread_local! {
    static ACTIVE: RefCell<Locale> = RefCell::new(Locale::new("en"));
}

/// Return the locale currently active on this thread.
pub fn active() -> Locale {
    ACTIVE.with(|cell| cell.borrow().clone())
}

/// Replace the active locale without keeping a restoration guard.
///
/// Feed generators should prefer [`activate`]; this is the entry point for
/// hosts that own the locale for the whole request.
pub fn set_active(locale: &Locale) {
    ACTIVE.with(|cell| *cell.borrow_mut() = locale.clone());
}

/// Activate `locale` and return a guard restoring the previous one.
#[must_use = "the previous locale is restored when the guard is dropped"]
pub fn activate(locale: &Locale) -> LocaleGuard {
    let previous = active();
    set_active(locale);
    LocaleGuard { previous }
}

/// Restores the previously active locale on drop.
#[derive(Debug)]
pub struct LocaleGuard {
    previous: Locale,
}

impl Drop for LocaleGuard {
    fn drop(&mut self) {
        set_active(&self.previous);
    }
}

/// A translated text field: one value per locale.
///
/// Empty values are treated as absent, so a translation that exists but
/// holds an empty string behaves like a missing one.
///
/// # Examples
/// ```
/// use trailhead_core::locale::{Locale, LocalizedString};
///
/// let name = LocalizedString::from_pairs([("en", "Lake"), ("fr", "Lac")]);
/// assert_eq!(name.get(&Locale::new("fr")), Some("Lac"));
/// assert_eq!(name.get(&Locale::new("de")), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalizedString(HashMap<String, String>);

impl LocalizedString {
    /// An empty translated field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a field from `(locale, text)` pairs.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self(
            pairs
                .into_iter()
                .map(|(locale, text)| (locale.to_owned(), text.to_owned()))
                .collect(),
        )
    }

    /// Add or replace the value for one locale.
    pub fn insert(&mut self, locale: impl Into<String>, text: impl Into<String>) {
        self.0.insert(locale.into(), text.into());
    }

    /// Value for `locale`, or `None` when missing or empty.
    pub fn get(&self, locale: &Locale) -> Option<&str> {
        self.0
            .get(locale.as_str())
            .map(String::as_str)
            .filter(|text| !text.is_empty())
    }

    /// Value for the active locale, or `None` when missing or empty.
    pub fn localized(&self) -> Option<&str> {
        self.get(&active())
    }

    /// True when no locale carries a non-empty value.
    pub fn is_blank(&self) -> bool {
        self.0.values().all(String::is_empty)
    }
}
