//! Macros for defining closed string enums.

/// Macro for defining a kind enum, whose variants are represented by fixed
/// string labels.
///
/// Labels are used by [`Display`], [`FromStr`] and (with the `serde`
/// feature) by serialization. Deserialization accepts integer values too,
/// matching them against labels by their decimal representation.
///
/// # Example
///
/// ```rust
/// # use common::define_kind;
///
/// define_kind! {
///     #[doc = "Shape kind."]
///     enum Kind {
///         #[doc = "A cube"]
///         Cube = "cube",
///
///         #[doc = "A sphere"]
///         Sphere = "sphere",
///     }
/// }
/// ```
///
/// [`Display`]: std::fmt::Display
/// [`FromStr`]: std::str::FromStr
#[macro_export]
macro_rules! define_kind {
    (
        #[doc = $doc:literal]
        enum $name:ident {
            $(
                #[doc = $variant_doc:literal]
                $variant:ident = $value:literal
            ),* $(,)?
        }
    ) => {
        #[derive(
            Clone,
            Copy,
            Debug,
            $crate::private::strum::Display,
            $crate::private::strum::EnumString,
            Eq,
            Hash,
            Ord,
            PartialEq,
            PartialOrd,
        )]
        #[doc = $doc]
        pub enum $name {
            $(
                #[doc = $variant_doc]
                #[strum(serialize = $value)]
                $variant,
            )*
        }

        impl $name {
            /// All the variants, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];

            /// Returns the string label of this value.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $value,)*
                }
            }
        }

        $crate::__define_kind_serde!($name { $($value),* });
    };
}

#[cfg(feature = "serde")]
#[doc(hidden)]
#[macro_export]
macro_rules! __define_kind_serde {
    ($name:ident { $($value:literal),* }) => {
        impl $crate::private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: $crate::private::serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> $crate::private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: $crate::private::serde::Deserializer<'de>,
            {
                use $crate::private::serde::de;

                /// [`de::Visitor`] of string labels and integers.
                struct Visitor;

                impl de::Visitor<'_> for Visitor {
                    type Value = $name;

                    fn expecting(
                        &self,
                        f: &mut ::std::fmt::Formatter<'_>,
                    ) -> ::std::fmt::Result {
                        write!(f, "`{}` label", ::core::stringify!($name))
                    }

                    fn visit_str<E: de::Error>(
                        self,
                        v: &str,
                    ) -> Result<Self::Value, E> {
                        v.parse()
                            .map_err(|_| E::unknown_variant(v, &[$($value),*]))
                    }

                    fn visit_u64<E: de::Error>(
                        self,
                        v: u64,
                    ) -> Result<Self::Value, E> {
                        self.visit_str(&v.to_string())
                    }

                    fn visit_i64<E: de::Error>(
                        self,
                        v: i64,
                    ) -> Result<Self::Value, E> {
                        self.visit_str(&v.to_string())
                    }
                }

                deserializer.deserialize_any(Visitor)
            }
        }
    };
}

#[cfg(not(feature = "serde"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __define_kind_serde {
    ($name:ident { $($value:literal),* }) => {};
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    crate::define_kind! {
        #[doc = "Test kind."]
        enum Shape {
            #[doc = "Cube."]
            Cube = "cube",

            #[doc = "Second."]
            Second = "2",
        }
    }

    #[test]
    fn labels() {
        assert_eq!(Shape::Cube.to_string(), "cube");
        assert_eq!(Shape::Second.as_str(), "2");
        assert_eq!(Shape::from_str("2").unwrap(), Shape::Second);
        assert!(Shape::from_str("Cube").is_err());
        assert_eq!(Shape::ALL, &[Shape::Cube, Shape::Second]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde() {
        assert_eq!(serde_json::to_string(&Shape::Second).unwrap(), r#""2""#);
        assert_eq!(
            serde_json::from_str::<Shape>(r#""cube""#).unwrap(),
            Shape::Cube,
        );
        assert_eq!(serde_json::from_str::<Shape>("2").unwrap(), Shape::Second);
        assert!(serde_json::from_str::<Shape>("3").is_err());
        assert!(serde_json::from_str::<Shape>(r#""sphere""#).is_err());
    }
}
