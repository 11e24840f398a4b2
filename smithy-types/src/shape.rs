/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Support code for shapes declared with [`shape!`](crate::shape!).
//!
//! Every field of a shape is optional. A field that was never set (or was cleared) is `None`,
//! which is distinct from a present but empty list or map.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A value that can be stored in a shape field.
///
/// The shape templates use this to build accessors, `Hash` and `Display` uniformly, whatever
/// the field's type is.
pub trait ShapeValue {
    /// What a shape accessor hands out for a present field.
    type View<'a>
    where
        Self: 'a;

    fn view(&self) -> Self::View<'_>;

    /// Field equality. Must be reflexive, so every value, NaN included, equals itself.
    fn eq_value(&self, other: &Self) -> bool;

    /// Feeds the value into `state`. Values that compare equal must hash equal.
    fn hash_value<H: Hasher>(&self, state: &mut H);

    /// Renders the value the way it appears inside a shape's `Display` output.
    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl ShapeValue for String {
    type View<'a> = &'a str where Self: 'a;

    fn view(&self) -> Self::View<'_> {
        self.as_str()
    }

    fn eq_value(&self, other: &Self) -> bool {
        self == other
    }

    fn hash_value<H: Hasher>(&self, state: &mut H) {
        self.hash(state)
    }

    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

macro_rules! copy_shape_value {
    ($($ty:ty),+) => {
        $(
            impl ShapeValue for $ty {
                type View<'a> = $ty where Self: 'a;

                fn view(&self) -> Self::View<'_> {
                    *self
                }

                fn eq_value(&self, other: &Self) -> bool {
                    self == other
                }

                fn hash_value<H: Hasher>(&self, state: &mut H) {
                    self.hash(state)
                }

                fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Display::fmt(self, f)
                }
            }
        )+
    };
}

copy_shape_value!(bool, i32, i64);

/// Bit pattern used to compare and hash floats: both zeros collapse to `0.0` and every NaN to
/// the canonical NaN.
fn normalized_bits(value: f64) -> u64 {
    if value == 0.0 {
        0.0_f64.to_bits()
    } else if value.is_nan() {
        f64::NAN.to_bits()
    } else {
        value.to_bits()
    }
}

impl ShapeValue for f64 {
    type View<'a> = f64 where Self: 'a;

    fn view(&self) -> Self::View<'_> {
        *self
    }

    fn eq_value(&self, other: &Self) -> bool {
        normalized_bits(*self) == normalized_bits(*other)
    }

    fn hash_value<H: Hasher>(&self, state: &mut H) {
        normalized_bits(*self).hash(state)
    }

    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl<T: ShapeValue> ShapeValue for Vec<T> {
    type View<'a> = &'a [T] where Self: 'a;

    fn view(&self) -> Self::View<'_> {
        self.as_slice()
    }

    fn eq_value(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a.eq_value(b))
    }

    fn hash_value<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for item in self {
            item.hash_value(state);
        }
    }

    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (idx, item) in self.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            item.fmt_value(f)?;
        }
        f.write_str("]")
    }
}

impl<V: ShapeValue> ShapeValue for BTreeMap<String, V> {
    type View<'a> = &'a BTreeMap<String, V> where Self: 'a;

    fn view(&self) -> Self::View<'_> {
        self
    }

    fn eq_value(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|((k1, v1), (k2, v2))| k1 == k2 && v1.eq_value(v2))
    }

    fn hash_value<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for (key, value) in self {
            key.hash(state);
            value.hash_value(state);
        }
    }

    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (idx, (key, value)) in self.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            f.write_str(key)?;
            f.write_str("=")?;
            value.fmt_value(f)?;
        }
        f.write_str("}")
    }
}

/// Ordered collection field (`list` fields in [`shape!`](crate::shape!)).
pub trait Sequence {
    type Item;
}

impl<T> Sequence for Vec<T> {
    type Item = T;
}

/// String-keyed collection field (`map` fields in [`shape!`](crate::shape!)).
pub trait Mapping {
    type Value;
}

impl<V> Mapping for BTreeMap<String, V> {
    type Value = V;
}

/// An entry was added to a map field under a key that is already present.
///
/// Map entries are never silently overwritten. To replace an entry, rebuild the map with
/// the field's setter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateKeyError {
    field: &'static str,
    key: String,
}

impl DuplicateKeyError {
    /// Wire name of the map field.
    pub fn field(&self) -> &str {
        self.field
    }

    /// The rejected key.
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl fmt::Display for DuplicateKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "duplicated key `{}` provided for `{}`",
            self.key, self.field
        )
    }
}

impl Error for DuplicateKeyError {}

/// Adds `key` to a map field, creating the map first if the field isn't present.
///
/// Fails without touching the existing entry when `key` is already in the map.
pub fn insert_unique<V>(
    map: &mut Option<BTreeMap<String, V>>,
    field: &'static str,
    key: String,
    value: V,
) -> Result<(), DuplicateKeyError> {
    match map.get_or_insert_with(BTreeMap::new).entry(key) {
        Entry::Occupied(existing) => {
            let key = existing.key().clone();
            tracing::debug!(field, key = %key, "rejected duplicate map entry");
            Err(DuplicateKeyError { field, key })
        }
        Entry::Vacant(vacant) => {
            vacant.insert(value);
            Ok(())
        }
    }
}

/// Compares one optional field. Absent only equals absent.
pub fn eq_field<T: ShapeValue>(left: &Option<T>, right: &Option<T>) -> bool {
    match (left, right) {
        (None, None) => true,
        (Some(left), Some(right)) => left.eq_value(right),
        _ => false,
    }
}

/// Hashes one optional field. Absent and present fields never collide on the tag.
pub fn hash_field<T: ShapeValue, H: Hasher>(field: &Option<T>, state: &mut H) {
    match field {
        None => state.write_u8(0),
        Some(value) => {
            state.write_u8(1);
            value.hash_value(state);
        }
    }
}

/// Writes a shape as `{name: value, name: value}`, skipping absent fields.
///
/// Modeled on [`std::fmt::DebugStruct`].
#[must_use = "must eventually call `finish()`"]
pub struct DisplayShape<'a, 'b: 'a> {
    fmt: &'a mut fmt::Formatter<'b>,
    result: fmt::Result,
    has_fields: bool,
}

impl fmt::Debug for DisplayShape<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DisplayShape")
            .field("result", &self.result)
            .field("has_fields", &self.has_fields)
            .finish()
    }
}

impl<'a, 'b: 'a> DisplayShape<'a, 'b> {
    pub fn new(fmt: &'a mut fmt::Formatter<'b>) -> Self {
        let result = fmt.write_str("{");
        DisplayShape {
            fmt,
            result,
            has_fields: false,
        }
    }

    pub fn field<T: ShapeValue>(&mut self, name: &str, value: &Option<T>) -> &mut Self {
        if let Some(value) = value {
            if self.result.is_ok() {
                self.result = self.write_field(name, value);
            }
            self.has_fields = true;
        }
        self
    }

    fn write_field<T: ShapeValue>(&mut self, name: &str, value: &T) -> fmt::Result {
        if self.has_fields {
            self.fmt.write_str(", ")?;
        }
        self.fmt.write_str(name)?;
        self.fmt.write_str(": ")?;
        value.fmt_value(self.fmt)
    }

    pub fn finish(&mut self) -> fmt::Result {
        self.result?;
        self.fmt.write_str("}")
    }
}

#[cfg(test)]
mod test {
    use super::{eq_field, hash_field, insert_unique, ShapeValue};
    use std::collections::hash_map::DefaultHasher;
    use std::collections::BTreeMap;
    use std::fmt;
    use std::hash::Hasher;
    use tracing_test::traced_test;

    fn hash_of<T: ShapeValue>(value: &Option<T>) -> u64 {
        let mut hasher = DefaultHasher::new();
        hash_field(value, &mut hasher);
        hasher.finish()
    }

    struct Rendered<'a, T>(&'a T);

    impl<T: ShapeValue> fmt::Display for Rendered<'_, T> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            self.0.fmt_value(f)
        }
    }

    #[test]
    fn signed_zero_hashes_equal() {
        assert_eq!(hash_of(&Some(0.0_f64)), hash_of(&Some(-0.0_f64)));
    }

    #[test]
    fn nan_equals_itself_and_hashes_consistently() {
        let nan = Some(f64::NAN);
        let other_nan = Some(-f64::NAN);
        assert!(eq_field(&nan, &nan));
        assert!(eq_field(&nan, &other_nan));
        assert_eq!(hash_of(&nan), hash_of(&other_nan));
        assert!(eq_field(&Some(0.0_f64), &Some(-0.0_f64)));
        assert!(!eq_field(&Some(f64::INFINITY), &Some(f64::NEG_INFINITY)));
        assert!(!eq_field(&Some(1.0_f64), &None));
        assert!(eq_field(&Some(vec![f64::NAN]), &Some(vec![f64::NAN])));
    }

    #[test]
    fn absent_and_empty_hash_differently() {
        assert_ne!(hash_of::<Vec<String>>(&None), hash_of(&Some(Vec::<String>::new())));
    }

    #[test]
    fn collections_render_inline() {
        let list = vec!["a".to_string(), "b".to_string()];
        assert_eq!(Rendered(&list).to_string(), "[a, b]");

        let mut map = BTreeMap::new();
        map.insert("k2".to_string(), 2);
        map.insert("k1".to_string(), 1);
        assert_eq!(Rendered(&map).to_string(), "{k1=1, k2=2}");
    }

    #[test]
    fn insert_creates_map_on_first_use() {
        let mut map: Option<BTreeMap<String, String>> = None;
        insert_unique(&mut map, "variables", "stage".into(), "prod".into()).unwrap();
        assert_eq!(map.unwrap().get("stage").map(String::as_str), Some("prod"));
    }

    #[test]
    #[traced_test]
    fn duplicate_key_is_rejected() {
        let mut map: Option<BTreeMap<String, String>> = None;
        insert_unique(&mut map, "variables", "stage".into(), "prod".into()).unwrap();
        let err = insert_unique(&mut map, "variables", "stage".into(), "beta".into())
            .expect_err("duplicate key");
        assert_eq!(err.key(), "stage");
        assert_eq!(err.field(), "variables");
        assert_eq!(
            err.to_string(),
            "duplicated key `stage` provided for `variables`"
        );
        assert_eq!(map.unwrap().get("stage").map(String::as_str), Some("prod"));
        assert!(logs_contain("rejected duplicate map entry"));
    }
}
