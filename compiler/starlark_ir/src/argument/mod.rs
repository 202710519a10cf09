//! Function Call Arguments
//!
//! `Argument` compares and hashes by name only. `ArgumentSet` builds on that:
//! it is an ordered collection keyed by argument name in which assigning an
//! already present name concatenates instead of overwriting.
//!
//! ```text
//! deps = ["x"]
//! deps = ["y"]      =>  deps = ["x"] + ["y"]
//! ```

#[cfg(test)]
mod tests;

use std::hash::{Hash, Hasher};

use rustc_hash::FxHashMap;

use crate::expr::{BinaryOperator, Expression};

/// A call argument: `name = value`, or just `value` when positional.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Argument {
    /// `None` for positional arguments.
    pub name: Option<String>,
    pub value: Expression,
}

impl Argument {
    pub fn named(name: impl Into<String>, value: impl Into<Expression>) -> Self {
        Argument {
            name: Some(name.into()),
            value: value.into(),
        }
    }

    pub fn positional(value: impl Into<Expression>) -> Self {
        Argument {
            name: None,
            value: value.into(),
        }
    }

    /// Argument name, or `""` for positional arguments.
    pub fn id(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}

// Identity is the name alone; two arguments with the same name are the same
// argument whatever their values.
impl PartialEq for Argument {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Argument {}

impl Hash for Argument {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

/// Ordered arguments of a call under construction.
///
/// Named arguments are unique: appending a name that is already present turns
/// its value into `prior + value`, keeping the argument's original position.
/// Positional arguments are always appended.
#[derive(Clone, Debug, Default)]
pub struct ArgumentSet {
    args: Vec<Argument>,
    index: FxHashMap<String, usize>,
}

impl ArgumentSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign `value` to the argument `name`, concatenating with any prior value.
    ///
    /// A blank name adds a positional argument instead.
    ///
    /// Returns the argument as stored after the assignment.
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<Expression>) -> &Argument {
        let name = name.into();
        let value = value.into();

        if name.trim().is_empty() {
            let slot = self.args.len();
            self.args.push(Argument::positional(value));
            return &self.args[slot];
        }

        if let Some(&slot) = self.index.get(&name) {
            let argument = &mut self.args[slot];
            let prior = std::mem::replace(&mut argument.value, Expression::None);
            argument.value = Expression::binary(prior, BinaryOperator::Plus, value);
            return argument;
        }

        let slot = self.args.len();
        self.index.insert(name.clone(), slot);
        self.args.push(Argument {
            name: Some(name),
            value,
        });
        &self.args[slot]
    }

    /// Add a positional argument after every argument added so far.
    pub fn push_positional(&mut self, value: impl Into<Expression>) {
        self.args.push(Argument::positional(value));
    }

    /// Look up a named argument.
    pub fn get(&self, name: &str) -> Option<&Argument> {
        self.index.get(name).map(|&slot| &self.args[slot])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Argument> {
        self.args.iter()
    }

    /// Finish accumulation, yielding arguments in insertion order.
    pub fn into_args(self) -> Vec<Argument> {
        self.args
    }
}

impl<'a> IntoIterator for &'a ArgumentSet {
    type Item = &'a Argument;
    type IntoIter = std::slice::Iter<'a, Argument>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<N: Into<String>, V: Into<Expression>> FromIterator<(N, V)> for ArgumentSet {
    fn from_iter<T: IntoIterator<Item = (N, V)>>(iter: T) -> Self {
        let mut set = ArgumentSet::new();
        for (name, value) in iter {
            set.append(name, value);
        }
        set
    }
}
