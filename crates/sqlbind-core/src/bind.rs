//! Bind store and binding arguments.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::placeholder::Placeholder;
use crate::value::SqlValue;

/// The binding state of one placeholder.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum BindSlot {
    /// Nothing bound yet. Renders as `NULL`.
    #[default]
    Unbound,
    /// A bound value.
    Value(SqlValue),
}

impl BindSlot {
    /// Returns the bound value, if any.
    #[must_use]
    pub const fn value(&self) -> Option<&SqlValue> {
        match self {
            Self::Unbound => None,
            Self::Value(value) => Some(value),
        }
    }

    /// Returns true if a value has been bound.
    #[must_use]
    pub const fn is_bound(&self) -> bool {
        matches!(self, Self::Value(_))
    }
}

/// Writes the slot as it appears in rendered SQL.
impl fmt::Display for BindSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unbound => f.write_str("NULL"),
            Self::Value(value) => fmt::Display::fmt(value, f),
        }
    }
}

/// Maps every placeholder key of a statement to its current binding.
///
/// The key set is fixed when the store is seeded; setting an unknown key has
/// no effect.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BindStore {
    slots: BTreeMap<Placeholder, BindSlot>,
}

impl BindStore {
    /// Creates a store with an unbound slot for each distinct key.
    #[must_use]
    pub fn seeded<'a>(keys: impl IntoIterator<Item = &'a Placeholder>) -> Self {
        let slots = keys
            .into_iter()
            .map(|key| (key.clone(), BindSlot::Unbound))
            .collect();
        Self { slots }
    }

    /// Binds `value` to `key` if the key is known. Returns whether it was.
    pub fn set(&mut self, key: &Placeholder, value: SqlValue) -> bool {
        match self.slots.get_mut(key) {
            Some(slot) => {
                *slot = BindSlot::Value(value);
                true
            }
            None => false,
        }
    }

    /// Returns the slot for `key`.
    #[must_use]
    pub fn get(&self, key: &Placeholder) -> Option<&BindSlot> {
        self.slots.get(key)
    }

    /// Iterates over the known keys in order: indexes first, then names.
    pub fn keys(&self) -> impl Iterator<Item = &Placeholder> {
        self.slots.keys()
    }

    /// Returns the number of known keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if the statement has no placeholders.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns every slot to [`BindSlot::Unbound`].
    pub fn clear(&mut self) {
        for slot in self.slots.values_mut() {
            *slot = BindSlot::Unbound;
        }
    }
}

/// One argument to
/// [`ParsedStatement::bind_params`](crate::ParsedStatement::bind_params).
///
/// Positional arguments take successive indexes starting at 1. Named
/// arguments bind each entry by its own key and do not take an index.
#[derive(Debug, Clone, PartialEq)]
pub enum BindArg {
    /// A value for the next positional index.
    Positional(SqlValue),
    /// Values keyed by placeholder.
    Named(Vec<(Placeholder, SqlValue)>),
}

impl BindArg {
    /// Creates a named argument from key/value pairs.
    pub fn named<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<Placeholder>,
        V: Into<SqlValue>,
    {
        Self::Named(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

macro_rules! impl_positional_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for BindArg {
                fn from(value: $ty) -> Self {
                    Self::Positional(SqlValue::from(value))
                }
            }
        )*
    };
}

impl_positional_from!(
    SqlValue, bool, i8, i16, i32, i64, u8, u16, u32, f32, f64, String, &str, &String, Vec<u8>,
    &[u8]
);

impl<T: Into<SqlValue>> From<Option<T>> for BindArg {
    fn from(value: Option<T>) -> Self {
        Self::Positional(value.into())
    }
}

impl<K, V> From<HashMap<K, V>> for BindArg
where
    K: Into<Placeholder>,
    V: Into<SqlValue>,
{
    fn from(map: HashMap<K, V>) -> Self {
        Self::named(map)
    }
}

impl<K, V> From<BTreeMap<K, V>> for BindArg
where
    K: Into<Placeholder>,
    V: Into<SqlValue>,
{
    fn from(map: BTreeMap<K, V>) -> Self {
        Self::named(map)
    }
}

/// Builds a `Vec<BindArg>` from heterogeneous values.
///
/// ```rust
/// use sqlbind_core::{BindArg, bind_args};
///
/// let args = bind_args!["one", None::<&str>, 3, BindArg::named([("name", "joe")])];
/// assert_eq!(args.len(), 4);
/// ```
#[macro_export]
macro_rules! bind_args {
    ($($arg:expr),* $(,)?) => {
        vec![$($crate::BindArg::from($arg)),*]
    };
}
