//! Locale-aware string collation.
//!
//! Two collation flavours are used by the grid:
//!
//! - [`Collation::sort`] orders column values when a header is clicked. It
//!   behaves like a default `localeCompare`: letters compare case-insensitively
//!   first, and only when two strings are otherwise equal does lowercase sort
//!   before uppercase.
//! - [`Collation::filter_list`] orders the distinct values offered in filter
//!   menus. It is numeric-aware (`"item2"` before `"item10"`) and compares at
//!   base strength, so `"a"` and `"A"` are equal.
//!
//! With the `localization` feature enabled both flavours are backed by an
//! ICU4X collator. Without it a built-in approximation is used, which treats
//! accented letters as distinct from their base letters.

use std::cmp::Ordering;
use std::fmt;

use crate::value::CellValue;

/// Which comparison rules a [`Collation`] applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollationKind {
    /// Tertiary strength, non-numeric.
    Sort,
    /// Base strength, numeric-aware.
    FilterList,
}

/// A string comparator for one [`CollationKind`].
pub struct Collation {
    kind: CollationKind,
    #[cfg(feature = "localization")]
    collator: Option<icu::collator::CollatorBorrowed<'static>>,
}

impl fmt::Debug for Collation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collation").field("kind", &self.kind).finish()
    }
}

impl Collation {
    /// Collation used for column sorting.
    pub fn sort() -> Self {
        Self::new(CollationKind::Sort)
    }

    /// Collation used for filter-list ordering.
    pub fn filter_list() -> Self {
        Self::new(CollationKind::FilterList)
    }

    #[cfg(feature = "localization")]
    fn new(kind: CollationKind) -> Self {
        let collator = icu_collator(kind);
        if collator.is_none() {
            tracing::warn!(
                target: crate::logging::targets::COLLATION,
                ?kind,
                "ICU collator unavailable, using built-in collation"
            );
        }
        Self { kind, collator }
    }

    #[cfg(not(feature = "localization"))]
    fn new(kind: CollationKind) -> Self {
        Self { kind }
    }

    /// The rules this collation applies.
    pub fn kind(&self) -> CollationKind {
        self.kind
    }

    /// Compares two strings.
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        #[cfg(feature = "localization")]
        {
            if let Some(ref collator) = self.collator {
                return collator.compare(a, b);
            }
        }

        match self.kind {
            CollationKind::Sort => fallback_sort_compare(a, b),
            CollationKind::FilterList => fallback_natural_compare(a, b),
        }
    }

    /// Compares the display text of two cell values.
    pub fn compare_values(&self, a: &CellValue, b: &CellValue) -> Ordering {
        self.compare(&a.display_text(), &b.display_text())
    }
}

#[cfg(feature = "localization")]
fn icu_collator(kind: CollationKind) -> Option<icu::collator::CollatorBorrowed<'static>> {
    use icu::collator::options::{CollatorOptions, Strength};
    use icu::collator::preferences::CollationNumericOrdering;
    use icu::collator::{Collator, CollatorPreferences};
    use icu::locale::Locale;

    let locale: Locale = "und".parse().ok()?;
    let mut prefs: CollatorPreferences = locale.into();
    let mut options = CollatorOptions::default();

    if kind == CollationKind::FilterList {
        prefs.numeric_ordering = Some(CollationNumericOrdering::True);
        options.strength = Some(Strength::Primary);
    }

    Collator::try_new(prefs, options).ok()
}

/// Coarse character classes in collation order.
fn char_class(c: char) -> u8 {
    if c.is_whitespace() {
        0
    } else if c.is_ascii_punctuation() {
        1
    } else if c.is_ascii_digit() {
        3
    } else if c.is_alphabetic() {
        4
    } else {
        2
    }
}

fn primary_key(c: char) -> (u8, char) {
    let folded = c.to_lowercase().next().unwrap_or(c);
    (char_class(folded), folded)
}

fn primary_compare(a: &str, b: &str) -> Ordering {
    a.chars().map(primary_key).cmp(b.chars().map(primary_key))
}

fn fallback_sort_compare(a: &str, b: &str) -> Ordering {
    primary_compare(a, b).then_with(|| {
        // Tertiary difference: lowercase before uppercase at the first case mismatch.
        for (ca, cb) in a.chars().zip(b.chars()) {
            if ca != cb {
                return match (ca.is_lowercase(), cb.is_lowercase()) {
                    (true, false) => Ordering::Less,
                    (false, true) => Ordering::Greater,
                    _ => ca.cmp(&cb),
                };
            }
        }
        a.len().cmp(&b.len())
    })
}

/// A run of either digits or a single non-digit character.
#[derive(Debug, PartialEq, Eq)]
enum Chunk<'a> {
    Digits(&'a str),
    Char(char),
}

fn chunks(s: &str) -> impl Iterator<Item = Chunk<'_>> {
    let mut rest = s;
    std::iter::from_fn(move || {
        let c = rest.chars().next()?;
        if c.is_ascii_digit() {
            let end = rest
                .find(|ch: char| !ch.is_ascii_digit())
                .unwrap_or(rest.len());
            let (digits, tail) = rest.split_at(end);
            rest = tail;
            Some(Chunk::Digits(digits))
        } else {
            rest = &rest[c.len_utf8()..];
            Some(Chunk::Char(c))
        }
    })
}

fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn fallback_natural_compare(a: &str, b: &str) -> Ordering {
    let mut left = chunks(a);
    let mut right = chunks(b);
    loop {
        let ordering = match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(Chunk::Digits(da)), Some(Chunk::Digits(db))) => compare_digit_runs(da, db),
            // Digits sort before letters; compare by class like any other char.
            (Some(Chunk::Digits(_)), Some(Chunk::Char(cb))) => 3.cmp(&char_class(cb)),
            (Some(Chunk::Char(ca)), Some(Chunk::Digits(_))) => char_class(ca).cmp(&3),
            (Some(Chunk::Char(ca)), Some(Chunk::Char(cb))) => primary_key(ca).cmp(&primary_key(cb)),
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
}
