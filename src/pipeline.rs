use crate::version::Version;

/// The optional operands that drive an evaluation. Each field holds an
/// independently parsed [`Version`]; presence or absence of a field decides
/// which pipeline steps run.
///
/// `lesser` and `greater` select conditional mode and are mutually exclusive
/// with the transformation operands, but that exclusion is a usage rule
/// enforced at the command-line boundary, not here. If both are somehow
/// present, `lesser` wins.
///
/// ```
/// use vershift::prelude::*;
///
/// let provided: Version = "1.2.3".parse().unwrap();
/// let operands = Operands {
///     base: Some("1.2".parse().unwrap()),
///     ..Operands::default()
/// };
/// assert_eq!(Outcome::Transformed("1.2.4".to_string()), operands.evaluate(&provided));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Operands {
    /// Conditional: is the provided version greater than this one?
    pub greater: Option<Version>,
    /// Conditional: is the provided version lesser than this one?
    pub lesser: Option<Version>,
    /// Snap to this coarser version, bumping the next component if already
    /// aligned.
    pub base: Option<Version>,
    /// Per-component amounts to add.
    pub increment: Option<Version>,
    /// Per-component values to overwrite with.
    pub set: Option<Version>,
    /// Per-component floors.
    pub minimum: Option<Version>,
    /// Formatting template; its separators replace the result's.
    pub format: Option<Version>,
    /// Per-component zero-padding widths for rendering.
    pub pad: Option<Version>,
}

/// What an evaluation produced: a comparison verdict or a transformed,
/// rendered version string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The result of a `lesser`/`greater` comparison.
    Condition(bool),
    /// The rendered version string after the transformation steps.
    Transformed(String),
}

impl Operands {
    /// Runs the pipeline against `provided` and returns the outcome.
    ///
    /// If a conditional operand is present, only that comparison runs.
    /// Otherwise the transformation steps apply in fixed order (base,
    /// increment, set, minimum), then the format override and padding, and
    /// the result is rendered.
    #[must_use]
    pub fn evaluate(&self, provided: &Version) -> Outcome {
        if let Some(result) = self.conditional(provided) {
            return Outcome::Condition(result);
        }

        let mut result = self.transform(provided);
        if let Some(template) = &self.format {
            result = apply_format(result, template);
        }
        let padding = self.pad.as_ref().map(|pad| pad.numbers.as_slice());
        Outcome::Transformed(result.render(padding))
    }

    fn conditional(&self, provided: &Version) -> Option<bool> {
        if let Some(lesser) = &self.lesser {
            return Some(provided.is_less_than(lesser));
        }
        if let Some(greater) = &self.greater {
            return Some(provided.is_greater_than(greater));
        }
        None
    }

    /// Applies whichever transformation steps have a present operand, in
    /// fixed order, starting from a copy of `provided`. Absent operands are
    /// no-ops. The format and pad operands play no part here; they only
    /// affect rendering.
    #[must_use]
    pub fn transform(&self, provided: &Version) -> Version {
        let mut result = provided.clone();
        if let Some(base) = &self.base {
            result = step_base(&result, base);
        }
        if let Some(increment) = &self.increment {
            result = step_increment(&result, increment);
        }
        if let Some(set) = &self.set {
            result = step_set(&result, set);
        }
        if let Some(minimum) = &self.minimum {
            result = step_minimum(&result, minimum);
        }
        result
    }
}

/// Snaps `v` to `base`. If every component of `v` up to the base's length
/// already equals the base, the component one past the base is incremented
/// (and its tail reset). Otherwise the compared components are overwritten
/// with the base's values and everything after the base's length is zeroed.
///
/// Base components beyond `v`'s length count as unequal but are not written;
/// the version is never extended.
fn step_base(v: &Version, base: &Version) -> Version {
    let mut result = v.clone();
    let mut aligned = true;

    for (i, &wanted) in base.numbers.iter().enumerate() {
        match result.numbers.get_mut(i) {
            Some(number) if *number == wanted => {}
            Some(number) => {
                aligned = false;
                *number = wanted;
            }
            None => aligned = false,
        }
    }

    if aligned {
        result.add_and_reset_tail(base.numbers.len(), 1)
    } else {
        result.reset_from(base.numbers.len())
    }
}

/// Adds each positive operand value at its index, in index order. Each add
/// resets the tail after it, so a coarser increment wipes the effect of any
/// finer one applied earlier.
fn step_increment(v: &Version, increment: &Version) -> Version {
    let mut result = v.clone();
    for (i, &amount) in increment.numbers.iter().enumerate() {
        if amount > 0 {
            let delta = i64::try_from(amount).unwrap_or(i64::MAX);
            result = result.add_and_reset_tail(i, delta);
        }
    }
    result
}

/// Overwrites each component whose operand value is positive, in index order,
/// resetting the tail after each. Zero-valued operand entries are skipped.
fn step_set(v: &Version, set: &Version) -> Version {
    let mut result = v.clone();
    for (i, &value) in set.numbers.iter().enumerate() {
        if value > 0 {
            result = result.set_and_reset_tail(i, value);
        }
    }
    result
}

/// Raises each component to at least the operand's value at the same index.
/// A floor, not a rebase: no tail reset. Operand entries past the version's
/// length are ignored rather than extending it.
fn step_minimum(v: &Version, minimum: &Version) -> Version {
    let mut result = v.clone();
    for (i, &floor) in minimum.numbers.iter().enumerate() {
        let Some(number) = result.numbers.get_mut(i) else {
            break;
        };
        if *number < floor {
            *number = floor;
        }
    }
    result
}

/// Replaces the result's formatting with the template's separators and
/// leading-token orientation, leaving the numbers untouched. A template with
/// fewer separators than the result needs has its last separator repeated so
/// no numeric component is dropped from the rendering.
fn apply_format(result: Version, template: &Version) -> Version {
    let mut separators = template.separators.clone();
    let needed = if template.number_first {
        result.numbers.len().saturating_sub(1)
    } else {
        result.numbers.len()
    };
    if let Some(last) = separators.last().cloned() {
        while separators.len() < needed {
            separators.push(last.clone());
        }
    }

    Version {
        numbers: result.numbers,
        separators,
        number_first: template.number_first,
    }
}
