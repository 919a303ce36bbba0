//! Arity reduction for multi-valued attributes.
//!
//! Directory attributes come back as sequences even when they hold a single
//! value. [`flatten`] collapses them so callers can match on the shape.

/// Nothing, one value, or the untouched sequence of two or more values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Flattened<T> {
    #[default]
    Empty,
    Single(T),
    Many(Vec<T>),
}

/// Reduces `items` by arity.
///
/// `None` (no sequence at all) and an empty sequence both give
/// [`Flattened::Empty`]; one element is unwrapped; longer sequences are
/// returned unchanged.
pub fn flatten<T>(items: impl Into<Option<Vec<T>>>) -> Flattened<T> {
    let Some(mut items) = items.into() else {
        return Flattened::Empty;
    };
    match items.len() {
        0 => Flattened::Empty,
        1 => items.pop().map_or(Flattened::Empty, Flattened::Single),
        _ => Flattened::Many(items),
    }
}

impl<T> Flattened<T> {
    pub fn is_empty(&self) -> bool {
        matches!(self, Flattened::Empty)
    }

    pub fn len(&self) -> usize {
        match self {
            Flattened::Empty => 0,
            Flattened::Single(_) => 1,
            Flattened::Many(items) => items.len(),
        }
    }

    /// Returns the value when exactly one was present.
    pub fn as_single(&self) -> Option<&T> {
        if let Flattened::Single(item) = self { Some(item) } else { None }
    }

    /// Expands back into a sequence.
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Flattened::Empty => Vec::new(),
            Flattened::Single(item) => vec![item],
            Flattened::Many(items) => items,
        }
    }

    /// Applies `f` to every value, keeping the shape.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Flattened<U> {
        match self {
            Flattened::Empty => Flattened::Empty,
            Flattened::Single(item) => Flattened::Single(f(item)),
            Flattened::Many(items) => Flattened::Many(items.into_iter().map(f).collect()),
        }
    }
}

impl<T> From<Vec<T>> for Flattened<T> {
    fn from(items: Vec<T>) -> Self {
        flatten(items)
    }
}

impl<T> From<Option<Vec<T>>> for Flattened<T> {
    fn from(items: Option<Vec<T>>) -> Self {
        flatten(items)
    }
}
