//! A set of macros for easily working with internals.

#[cfg(feature = "http")]
macro_rules! api {
    ($base:expr, $token:expr, $method:expr) => {
        format!("{}/bot{}/{}", $base.trim_end_matches('/'), $token, $method)
    };
}

/// Declares an enum that the Bot API encodes as a lowercase string.
///
/// Generates `as_str`, [`Display`](std::fmt::Display) and string (de)serialization.
macro_rules! enum_str {
    (
        $(#[$attr_:meta])*
        $name:ident {
            $(
                $(#[$attr:meta])*
                $variant:ident = $value:literal,
            )*
        }
    ) => {
        $(#[$attr_])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
        pub enum $name {
            $(
                $(#[$attr])*
                $variant,
            )*
        }

        impl $name {
            /// The string the Bot API uses for this value.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $value, )*
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s {
                    $( $value => Ok(Self::$variant), )*
                    other => Err(format!("unknown {} value: {}", stringify!($name), other)),
                }
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                struct Visitor;

                impl<'de> ::serde::de::Visitor<'de> for Visitor {
                    type Value = $name;

                    fn expecting(&self, formatter: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                        formatter.write_str(concat!("a ", stringify!($name), " string"))
                    }

                    fn visit_str<E>(self, value: &str) -> ::std::result::Result<$name, E>
                    where
                        E: ::serde::de::Error,
                    {
                        value.parse().map_err(E::custom)
                    }
                }

                deserializer.deserialize_str(Visitor)
            }
        }
    };
}
