use crate::error::VersionError;
use core::{
    cmp::Ordering,
    fmt::{self, Display},
    str::FromStr,
};
use std::mem;

/// A Version is the parsed representation of a version string: an ordered
/// sequence of numeric components plus the literal non-numeric text around
/// them. Parsing keeps every separator in its relative position, so any
/// numeric-dot-separated (or otherwise-delimited) string round-trips through
/// [`Version::render`] unchanged.
///
/// Component positions are significant: index `i` in two versions refers to
/// "the same component" regardless of what separators surround it, with index
/// 0 being the most significant.
///
/// Versions are created by parsing:
///
/// ```
/// use vershift::prelude::*;
///
/// let version: Version = "1.2-3".parse().unwrap();
/// assert_eq!(vec![1, 2, 3], version.numbers);
/// assert_eq!(vec![".".to_string(), "-".to_string()], version.separators);
/// assert_eq!("1.2-3", version.to_string());
/// ```
///
/// The transformation methods never mutate `self` — each returns a freshly
/// allocated Version, so callers can hold onto the original:
///
/// ```
/// use vershift::prelude::*;
///
/// let version: Version = "1.2.3".parse().unwrap();
/// let bumped = version.add_and_reset_tail(1, 1);
/// assert_eq!("1.3.0", bumped.to_string());
/// assert_eq!("1.2.3", version.to_string());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    /// The numeric components, most significant first.
    pub numbers: Vec<u64>,

    /// The literal separator runs, in encounter order. Interleaves with
    /// `numbers` starting according to `number_first`.
    pub separators: Vec<String>,

    /// Whether the original string began with a digit rather than a
    /// separator.
    pub number_first: bool,
}

impl FromStr for Version {
    type Err = VersionError;

    /// Parses a version string. Maximal runs of ASCII digits become numeric
    /// components and everything between them is kept verbatim as separators,
    /// so the parse is format agnostic.
    ///
    /// # Errors
    ///
    /// - [`VersionError::NoNumbers`] if the input contains no digits.
    /// - [`VersionError::NumberOverflow`] if a digit run exceeds [`u64::MAX`].
    ///   Overflow is rejected outright rather than saturated or wrapped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut numbers = Vec::new();
        let mut separators = Vec::new();
        let mut number_first = false;
        let mut digits = String::new();
        let mut separator = String::new();

        for (i, char) in s.chars().enumerate() {
            if char.is_ascii_digit() {
                if i == 0 {
                    number_first = true;
                }
                if !separator.is_empty() {
                    separators.push(mem::take(&mut separator));
                }
                digits.push(char);
            } else {
                if !digits.is_empty() {
                    numbers.push(parse_digit_run(&digits, s)?);
                    digits.clear();
                }
                separator.push(char);
            }
        }

        if !digits.is_empty() {
            numbers.push(parse_digit_run(&digits, s)?);
        }
        if !separator.is_empty() {
            separators.push(separator);
        }

        if numbers.is_empty() {
            return Err(VersionError::NoNumbers {
                input: s.to_owned(),
            });
        }

        Ok(Self {
            numbers,
            separators,
            number_first,
        })
    }
}

/// `digits` is a non-empty run of ASCII digits, so the only way it can fail
/// to parse is by overflowing.
fn parse_digit_run(digits: &str, input: &str) -> Result<u64, VersionError> {
    digits.parse().map_err(|_| VersionError::NumberOverflow {
        digits: digits.to_owned(),
        input: input.to_owned(),
    })
}

impl Version {
    /// Renders the version back to a string, walking `numbers` and
    /// `separators` in strict alternation starting according to
    /// `number_first`. The walk stops as soon as the sequence whose turn it
    /// is runs out, so surplus trailing entries on either side are dropped.
    ///
    /// If `padding` has an entry at a number's index, that number is
    /// zero-padded to at least that decimal width. Numbers already wider than
    /// the requested width are never truncated.
    ///
    /// ```
    /// use vershift::prelude::*;
    ///
    /// let version: Version = "1.2.3".parse().unwrap();
    /// assert_eq!("1.2.3", version.render(None));
    /// assert_eq!("01.002.3", version.render(Some(&[2, 3])));
    /// ```
    #[must_use]
    pub fn render(&self, padding: Option<&[u64]>) -> String {
        let mut out = String::new();
        let mut num_idx = 0;
        let mut sep_idx = 0;
        let mut number_next = self.number_first;

        loop {
            if number_next {
                let Some(number) = self.numbers.get(num_idx) else {
                    break;
                };
                let width = padding
                    .and_then(|widths| widths.get(num_idx))
                    .and_then(|&width| usize::try_from(width).ok())
                    .unwrap_or(0);
                out.push_str(&format!("{number:0width$}"));
                num_idx += 1;
            } else {
                let Some(separator) = self.separators.get(sep_idx) else {
                    break;
                };
                out.push_str(separator);
                sep_idx += 1;
            }
            number_next = !number_next;
        }

        out
    }

    /// Returns true if `self`'s numbers are strictly less than `other`'s.
    ///
    /// The shorter number sequence is treated as if right-padded with zeros
    /// to the longer length, then the sequences are compared
    /// lexicographically. Separators play no part. Equal sequences are
    /// neither less nor greater.
    #[must_use]
    pub fn is_less_than(&self, other: &Self) -> bool {
        self.cmp_numbers(other) == Ordering::Less
    }

    /// Returns true if `self`'s numbers are strictly greater than `other`'s.
    /// The mirror of [`Version::is_less_than`].
    #[must_use]
    pub fn is_greater_than(&self, other: &Self) -> bool {
        self.cmp_numbers(other) == Ordering::Greater
    }

    fn cmp_numbers(&self, other: &Self) -> Ordering {
        let longest = self.numbers.len().max(other.numbers.len());
        for i in 0..longest {
            // absent components compare as zero
            let ours = self.numbers.get(i).copied().unwrap_or(0);
            let theirs = other.numbers.get(i).copied().unwrap_or(0);
            match ours.cmp(&theirs) {
                Ordering::Equal => {}
                unequal => return unequal,
            }
        }
        Ordering::Equal
    }

    /// Returns a new Version with every number at position `index` and beyond
    /// reset to zero. A change at a coarser granularity invalidates all
    /// finer-grained counters, so the transformation methods below all end
    /// with this.
    #[must_use]
    pub fn reset_from(&self, index: usize) -> Self {
        let mut next = self.clone();
        for number in next.numbers.iter_mut().skip(index) {
            *number = 0;
        }
        next
    }

    /// Returns a new Version with `delta` added to the number at `index` (if
    /// in bounds) and everything after `index` reset to zero. The tail reset
    /// happens whether or not `index` was in bounds.
    ///
    /// Addition saturates at the `u64` bounds, so a decrement below zero
    /// floors at zero.
    #[must_use]
    pub fn add_and_reset_tail(&self, index: usize, delta: i64) -> Self {
        let mut next = self.clone();
        if let Some(number) = next.numbers.get_mut(index) {
            *number = number.saturating_add_signed(delta);
        }
        for number in next.numbers.iter_mut().skip(index + 1) {
            *number = 0;
        }
        next
    }

    /// Returns a new Version with the number at `index` overwritten by
    /// `value` (if in bounds) and everything after `index` reset to zero. The
    /// tail reset happens whether or not `index` was in bounds.
    #[must_use]
    pub fn set_and_reset_tail(&self, index: usize, value: u64) -> Self {
        let mut next = self.clone();
        if let Some(number) = next.numbers.get_mut(index) {
            *number = value;
        }
        for number in next.numbers.iter_mut().skip(index + 1) {
            *number = 0;
        }
        next
    }
}

impl Display for Version {
    /// Renders the version string with no padding.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(None))
    }
}
