/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Templates that model crates instantiate once per shape.

/// Define a shape: a struct of optional fields, its accessors, and a builder module.
///
/// Each field names its wire (JSON member) name, its kind (`scalar`, `list` or `map`), its
/// type, and the builder's setter and getter. `map` fields also name a method that clears the
/// map back to not-present.
///
/// ```rust
/// use std::collections::BTreeMap;
///
/// smithy_types::shape! {
///     /// Request throttle limits.
///     pub struct ThrottleSettings in throttle_settings {
///         /// Burst rate limit.
///         "burstLimit" => burst_limit: scalar i32 { set_burst_limit, get_burst_limit },
///         /// Steady-state rate limit.
///         "rateLimit" => rate_limit: scalar f64 { set_rate_limit, get_rate_limit },
///         /// Request path overrides.
///         "paths" => paths: list Vec<String> { set_paths, get_paths },
///         /// Arbitrary labels.
///         "tags" => tags: map BTreeMap<String, String> { set_tags, get_tags, add_tags_entry, clear_tags },
///     }
/// }
///
/// fn main() {
///     let settings = ThrottleSettings::builder()
///         .burst_limit(200)
///         .rate_limit(10.5)
///         .build();
///     assert_eq!(settings.burst_limit(), Some(200));
///     assert_eq!(settings.paths(), None);
///     assert_eq!(settings.to_string(), "{burstLimit: 200, rateLimit: 10.5}");
/// }
/// ```
///
/// The generated types implement `Clone`, `Debug`, `Default`, `PartialEq`, `Hash` and `Display`.
/// With the invoking crate's `serde-serialize` / `serde-deserialize` features enabled they also
/// implement serde's traits using the wire names.
#[macro_export]
macro_rules! shape {
    (
        $(#[$shape_meta:meta])*
        pub struct $shape:ident in $module:ident {
            $(
                $(#[$field_meta:meta])*
                $wire:literal => $field:ident: $kind:ident $ty:ty { $setter:ident, $getter:ident $(, $add:ident, $clear:ident)? }
            ),* $(,)?
        }
    ) => {
        $(#[$shape_meta])*
        #[derive(::std::clone::Clone, ::std::default::Default, ::std::fmt::Debug)]
        #[cfg_attr(feature = "serde-serialize", derive(::serde::Serialize))]
        #[cfg_attr(feature = "serde-deserialize", derive(::serde::Deserialize))]
        pub struct $shape {
            $(
                $(#[$field_meta])*
                #[cfg_attr(
                    any(feature = "serde-serialize", feature = "serde-deserialize"),
                    serde(rename = $wire)
                )]
                #[cfg_attr(
                    feature = "serde-serialize",
                    serde(skip_serializing_if = "Option::is_none")
                )]
                $field: ::std::option::Option<$ty>,
            )*
        }

        impl $shape {
            $(
                $(#[$field_meta])*
                pub fn $field(
                    &self,
                ) -> ::std::option::Option<<$ty as $crate::shape::ShapeValue>::View<'_>> {
                    self.$field
                        .as_ref()
                        .map($crate::shape::ShapeValue::view)
                }
            )*

            #[doc = concat!("Creates a new builder-style object to manufacture [`", stringify!($shape), "`].")]
            pub fn builder() -> $module::Builder {
                $module::Builder::default()
            }

            /// Converts this value back into a builder so it can be changed.
            pub fn into_builder(self) -> $module::Builder {
                <$module::Builder as ::std::convert::From<$shape>>::from(self)
            }
        }

        impl ::std::cmp::PartialEq for $shape {
            #[allow(unused_variables)]
            fn eq(&self, other: &Self) -> bool {
                true $( && $crate::shape::eq_field(&self.$field, &other.$field) )*
            }
        }

        impl ::std::cmp::Eq for $shape {}

        impl ::std::hash::Hash for $shape {
            #[allow(unused_variables)]
            fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                $( $crate::shape::hash_field(&self.$field, state); )*
            }
        }

        impl ::std::fmt::Display for $shape {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                let mut fields = $crate::shape::DisplayShape::new(f);
                $( fields.field($wire, &self.$field); )*
                fields.finish()
            }
        }

        impl $crate::shape::ShapeValue for $shape {
            type View<'a> = &'a $shape where Self: 'a;

            fn view(&self) -> Self::View<'_> {
                self
            }

            fn eq_value(&self, other: &Self) -> bool {
                self == other
            }

            fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
                ::std::hash::Hash::hash(self, state)
            }

            fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(self, f)
            }
        }

        impl ::std::convert::From<$module::Builder> for $shape {
            fn from(builder: $module::Builder) -> Self {
                builder.build()
            }
        }

        #[doc = concat!("See [`", stringify!($shape), "`](super::", stringify!($shape), ").")]
        pub mod $module {
            #[allow(unused_imports)]
            use super::*;

            #[doc = concat!("A builder for [`", stringify!($shape), "`](super::", stringify!($shape), ").")]
            #[derive(::std::clone::Clone, ::std::default::Default, ::std::fmt::Debug)]
            pub struct Builder {
                $( $field: ::std::option::Option<$ty>, )*
            }

            impl ::std::cmp::PartialEq for Builder {
                #[allow(unused_variables)]
                fn eq(&self, other: &Self) -> bool {
                    true $( && $crate::shape::eq_field(&self.$field, &other.$field) )*
                }
            }

            impl ::std::cmp::Eq for Builder {}

            impl Builder {
                $(
                    $crate::__shape_builder_methods!(
                        $kind $field $ty, $setter, $getter $(, $add, $clear)?;
                        $(#[$field_meta])*;
                        $wire
                    );
                )*

                #[doc = concat!("Consumes the builder and constructs a [`", stringify!($shape), "`](super::", stringify!($shape), ").")]
                pub fn build(self) -> super::$shape {
                    super::$shape {
                        $( $field: self.$field, )*
                    }
                }
            }

            impl ::std::convert::From<super::$shape> for Builder {
                fn from(shape: super::$shape) -> Self {
                    Builder {
                        $( $field: shape.$field, )*
                    }
                }
            }
        }
    };
}

/// Builder methods for one field of a [`shape!`]. Must be called from within an `impl` block.
#[doc(hidden)]
#[macro_export]
macro_rules! __shape_builder_methods {
    (scalar $field:ident $ty:ty, $setter:ident, $getter:ident; $(#[$doc:meta])*; $wire:literal) => {
        $(#[$doc])*
        pub fn $field(mut self, input: impl ::std::convert::Into<$ty>) -> Self {
            self.$field = ::std::option::Option::Some(input.into());
            self
        }

        $(#[$doc])*
        pub fn $setter(&mut self, input: ::std::option::Option<$ty>) -> &mut Self {
            self.$field = input;
            self
        }

        $(#[$doc])*
        pub fn $getter(&self) -> &::std::option::Option<$ty> {
            &self.$field
        }
    };
    (list $field:ident $ty:ty, $setter:ident, $getter:ident; $(#[$doc:meta])*; $wire:literal) => {
        $(#[$doc])*
        ///
        /// Appends an item. To override the contents of this collection use the setter.
        pub fn $field(
            mut self,
            input: impl ::std::convert::Into<<$ty as $crate::shape::Sequence>::Item>,
        ) -> Self {
            self.$field
                .get_or_insert_with(::std::default::Default::default)
                .push(input.into());
            self
        }

        $(#[$doc])*
        pub fn $setter(&mut self, input: ::std::option::Option<$ty>) -> &mut Self {
            self.$field = input;
            self
        }

        $(#[$doc])*
        pub fn $getter(&self) -> &::std::option::Option<$ty> {
            &self.$field
        }
    };
    (map $field:ident $ty:ty, $setter:ident, $getter:ident, $add:ident, $clear:ident; $(#[$doc:meta])*; $wire:literal) => {
        $(#[$doc])*
        ///
        /// Adds a key-value pair. Fails if `k` is already present; existing entries are never
        /// overwritten. The builder is consumed either way, so use the `&mut` form to keep it
        /// after a rejected key. To override the contents of this collection use the setter.
        pub fn $field(
            mut self,
            k: impl ::std::convert::Into<::std::string::String>,
            v: impl ::std::convert::Into<<$ty as $crate::shape::Mapping>::Value>,
        ) -> ::std::result::Result<Self, $crate::shape::DuplicateKeyError> {
            $crate::shape::insert_unique(&mut self.$field, $wire, k.into(), v.into())?;
            ::std::result::Result::Ok(self)
        }

        $(#[$doc])*
        ///
        /// Adds a key-value pair in place. On a duplicate key the builder, including the
        /// entry already stored under `k`, is left exactly as it was.
        pub fn $add(
            &mut self,
            k: impl ::std::convert::Into<::std::string::String>,
            v: impl ::std::convert::Into<<$ty as $crate::shape::Mapping>::Value>,
        ) -> ::std::result::Result<&mut Self, $crate::shape::DuplicateKeyError> {
            $crate::shape::insert_unique(&mut self.$field, $wire, k.into(), v.into())?;
            ::std::result::Result::Ok(self)
        }

        $(#[$doc])*
        pub fn $setter(&mut self, input: ::std::option::Option<$ty>) -> &mut Self {
            self.$field = input;
            self
        }

        $(#[$doc])*
        pub fn $getter(&self) -> &::std::option::Option<$ty> {
            &self.$field
        }

        /// Removes every entry, leaving the field not present rather than empty.
        pub fn $clear(&mut self) -> &mut Self {
            self.$field = ::std::option::Option::None;
            self
        }
    };
}

/// Define a closed, string-backed enumeration.
///
/// Every variant maps to one wire literal. Literals the model doesn't know about are kept in
/// an `Unknown` variant, so converting any string never fails and never loses information.
///
/// ```rust
/// smithy_types::string_enum! {
///     /// Where an endpoint is reachable from.
///     pub enum EndpointType {
///         Edge => "EDGE",
///         Regional => "REGIONAL",
///     }
/// }
///
/// assert_eq!(EndpointType::from("EDGE"), EndpointType::Edge);
/// assert_eq!(EndpointType::Regional.as_str(), "REGIONAL");
/// assert_eq!(EndpointType::from("PRIVATE").as_str(), "PRIVATE");
/// assert_eq!(EndpointType::values(), &["EDGE", "REGIONAL"]);
/// ```
#[macro_export]
macro_rules! string_enum {
    (
        $(#[$enum_meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $value:literal
            ),* $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[non_exhaustive]
        #[derive(
            ::std::clone::Clone,
            ::std::cmp::Eq,
            ::std::cmp::Ord,
            ::std::cmp::PartialEq,
            ::std::cmp::PartialOrd,
            ::std::fmt::Debug,
            ::std::hash::Hash
        )]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[doc = concat!("`", $value, "`")]
                $variant,
            )*
            /// A literal this version of the model doesn't know about.
            Unknown(::std::string::String),
        }

        impl $name {
            /// Returns the wire literal for this value.
            pub fn as_str(&self) -> &str {
                match self {
                    $( $name::$variant => $value, )*
                    $name::Unknown(value) => value.as_str(),
                }
            }

            /// Returns every literal the model knows about.
            pub const fn values() -> &'static [&'static str] {
                &[$( $value ),*]
            }
        }

        impl ::std::convert::From<&str> for $name {
            fn from(s: &str) -> Self {
                match s {
                    $( $value => $name::$variant, )*
                    other => $name::Unknown(other.to_owned()),
                }
            }
        }

        impl ::std::convert::From<::std::string::String> for $name {
            fn from(s: ::std::string::String) -> Self {
                match s.as_str() {
                    $( $value => $name::$variant, )*
                    _ => $name::Unknown(s),
                }
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ::std::convert::Infallible;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                ::std::result::Result::Ok($name::from(s))
            }
        }

        impl ::std::convert::AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $crate::shape::ShapeValue for $name {
            type View<'a> = &'a $name where Self: 'a;

            fn view(&self) -> Self::View<'_> {
                self
            }

            fn eq_value(&self, other: &Self) -> bool {
                self == other
            }

            fn hash_value<H: ::std::hash::Hasher>(&self, state: &mut H) {
                ::std::hash::Hash::hash(self, state)
            }

            fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        #[cfg(feature = "serde-serialize")]
        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        #[cfg(feature = "serde-deserialize")]
        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let value = <::std::string::String as ::serde::Deserialize>::deserialize(deserializer)?;
                ::std::result::Result::Ok($name::from(value))
            }
        }
    };
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;
    use std::collections::hash_map::DefaultHasher;
    use std::collections::BTreeMap;
    use std::hash::{Hash, Hasher};

    crate::string_enum! {
        pub enum Status {
            Available => "AVAILABLE",
            Updating => "UPDATING",
            Pending => "PENDING",
        }
    }

    crate::shape! {
        pub struct Setting in setting {
            "limit" => limit: scalar i32 { set_limit, get_limit },
        }
    }

    crate::shape! {
        pub struct Record in record {
            "name" => name: scalar String { set_name, get_name },
            "status" => status: scalar Status { set_status, get_status },
            "rate" => rate: scalar f64 { set_rate, get_rate },
            "aliases" => aliases: list Vec<String> { set_aliases, get_aliases },
            "labels" => labels: map BTreeMap<String, String> { set_labels, get_labels, add_labels_entry, clear_labels },
            "settings" => settings: map BTreeMap<String, Setting> { set_settings, get_settings, add_settings_entry, clear_settings },
        }
    }

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn empty_shape_renders_braces() {
        assert_eq!(Record::builder().build().to_string(), "{}");
        assert_eq!(Record::default(), Record::builder().build());
    }

    #[test]
    fn rendering_follows_declaration_order() {
        let record = Record::builder()
            .rate(1.5)
            .name("api")
            .aliases("b")
            .aliases("a")
            .build();
        assert_eq!(record.to_string(), "{name: api, rate: 1.5, aliases: [b, a]}");
    }

    #[test]
    fn nested_shapes_render_recursively() {
        let record = Record::builder()
            .settings("GET/*", Setting::builder().limit(5))
            .unwrap()
            .build();
        assert_eq!(record.to_string(), "{settings: {GET/*={limit: 5}}}");
    }

    #[test]
    fn enum_literal_and_variant_are_equivalent() {
        let from_literal = Record::builder().status("AVAILABLE").build();
        let from_variant = Record::builder().status(Status::Available).build();
        assert_eq!(from_literal, from_variant);
        assert_eq!(from_literal.to_string(), from_variant.to_string());
        assert_eq!(hash_of(&from_literal), hash_of(&from_variant));
        assert_eq!(from_literal.status(), Some(&Status::Available));
    }

    #[test]
    fn unknown_enum_literals_are_kept() {
        let record = Record::builder().status("RETIRED").build();
        assert_eq!(record.status().map(Status::as_str), Some("RETIRED"));
        assert_eq!("RETIRED".parse::<Status>(), Ok(Status::Unknown("RETIRED".into())));
    }

    #[test]
    fn clearing_a_map_leaves_it_absent() {
        let mut builder = Record::builder().labels("team", "edge").unwrap();
        builder.clear_labels();
        assert_eq!(builder.get_labels(), &None);
        assert_eq!(builder.build().labels(), None);
    }

    #[test]
    fn setters_return_the_receiver() {
        let mut builder = Record::builder();
        let builder_ptr: *const record::Builder = &builder;
        assert!(std::ptr::eq(builder.set_name(Some("x".into())), builder_ptr));
        assert!(std::ptr::eq(builder.set_labels(None), builder_ptr));
        assert!(std::ptr::eq(builder.clear_settings(), builder_ptr));
    }

    #[test]
    fn duplicate_entries_leave_the_builder_untouched() {
        let mut builder = Record::builder().name("api").rate(1.5);
        builder.add_labels_entry("team", "edge").unwrap();
        let before = builder.clone();

        let err = builder
            .add_labels_entry("team", "core")
            .expect_err("duplicate key");
        assert_eq!(err.key(), "team");
        assert_eq!(err.field(), "labels");

        assert_eq!(builder, before);
        let record = builder.build();
        assert_eq!(record.name(), Some("api"));
        assert_eq!(record.rate(), Some(1.5));
        assert_eq!(
            record.labels().and_then(|labels| labels.get("team")).map(String::as_str),
            Some("edge")
        );
    }

    #[test]
    fn entries_chain_on_the_same_builder() {
        let mut builder = Record::builder();
        let builder_ptr: *const record::Builder = &builder;
        let returned = builder
            .add_labels_entry("a", "1")
            .and_then(|builder| builder.add_settings_entry("GET/*", Setting::default()))
            .unwrap();
        assert!(std::ptr::eq(returned, builder_ptr));
    }

    #[test]
    fn nan_fields_equal_themselves() {
        let record = Record::builder().rate(f64::NAN).build();
        assert_eq!(record, record);
        assert_eq!(record.clone(), record);
        assert_eq!(hash_of(&record.clone()), hash_of(&record));
        assert_eq!(
            Record::builder().rate(0.0).build(),
            Record::builder().rate(-0.0).build()
        );
        assert_ne!(record, Record::builder().rate(1.0).build());
        assert_eq!(
            Record::builder().rate(f64::NAN),
            Record::builder().rate(f64::NAN)
        );
    }

    #[test]
    fn into_builder_allows_later_changes() {
        let record = Record::builder().name("api").build();
        let changed = record.clone().into_builder().rate(2.0).build();
        assert_ne!(record, changed);
        assert_eq!(changed.name(), Some("api"));
        assert_eq!(changed.rate(), Some(2.0));
    }
}
