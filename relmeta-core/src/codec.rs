//! String codecs for closed value sets
//!
//! Two flavors:
//! - `string_enum!`: descriptive enumerations (release status, media, mood...)
//!   with an `Unset` default. Decoding is permissive, unknown text becomes `Unset`.
//! - `id_kind!`: external database identifier kinds used as JSON object keys.
//!   Decoding is strict, unknown kinds are invalid input.

macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal $(| $alias:literal)* ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
        pub enum $name {
            /// Unknown or not provided
            #[default]
            Unset,
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// All known values, `Unset` excluded
            pub const ALL: &'static [$name] = &[ $( $name::$variant ),+ ];

            /// Canonical string form (`""` for `Unset`)
            pub fn as_str(self) -> &'static str {
                match self {
                    $name::Unset => "",
                    $( $name::$variant => $text, )+
                }
            }

            pub fn is_unset(&self) -> bool {
                *self == $name::Unset
            }

            /// Case-insensitive decode; unknown text yields `Unset`
            pub fn decode(text: &str) -> Self {
                match text.trim().to_lowercase().as_str() {
                    $( $text $(| $alias)* => $name::$variant, )+
                    _ => $name::Unset,
                }
            }

            /// Take the last recognizable value out of a property list
            pub fn decode_slice(props: &mut Vec<String>) -> Self {
                for i in (0..props.len()).rev() {
                    let value = Self::decode(&props[i]);
                    if !value.is_unset() {
                        props.remove(i);
                        return value;
                    }
                }
                $name::Unset
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let text = <String as serde::Deserialize>::deserialize(deserializer)?;
                Ok(Self::decode(&text))
            }
        }
    };
}

macro_rules! id_kind {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[ $( $name::$variant ),+ ];

            pub fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $text, )+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = relmeta_common::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $text => Ok($name::$variant), )+
                    other => Err(relmeta_common::Error::InvalidInput(format!(
                        "unknown {} '{}'",
                        stringify!($name),
                        other
                    ))),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let text = <String as serde::Deserialize>::deserialize(deserializer)?;
                text.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use id_kind;
pub(crate) use string_enum;

/// `skip_serializing_if` predicate for numeric fields left at zero
pub(crate) fn is_zero<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}

/// Standard base64 for embedded binary payloads
pub(crate) mod base64_bytes {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let text = String::deserialize(deserializer)?;
        STANDARD
            .decode(text.as_bytes())
            .map_err(serde::de::Error::custom)
    }
}
