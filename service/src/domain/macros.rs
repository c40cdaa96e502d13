//! Macros for defining domain newtypes.

/// Defines a new [`Uuid`]-backed ID type.
///
/// [`Uuid`]: uuid::Uuid
macro_rules! define_id {
    (
        $(#[doc = $doc:literal])*
        $name:ident
    ) => {
        $(#[doc = $doc])*
        #[derive(
            Clone,
            Copy,
            Debug,
            Default,
            ::derive_more::Display,
            Eq,
            ::derive_more::From,
            ::derive_more::FromStr,
            Hash,
            ::derive_more::Into,
            Ord,
            PartialEq,
            PartialOrd,
        )]
        #[cfg_attr(
            feature = "serde",
            derive(::serde::Deserialize, ::serde::Serialize),
            serde(transparent)
        )]
        pub struct $name(::uuid::Uuid);

        impl $name {
            #[doc = concat!("Creates a new random [`", stringify!($name), "`].")]
            #[must_use]
            pub fn new() -> Self {
                Self(::uuid::Uuid::new_v4())
            }
        }
    };
}

/// Defines a new free text type.
///
/// Values are trimmed on creation, and must be non-empty and not longer than
/// the provided `max` number of characters.
macro_rules! define_text {
    (
        $(#[doc = $doc:literal])*
        $name:ident(max = $max:literal)
    ) => {
        $(#[doc = $doc])*
        #[derive(
            ::derive_more::AsRef,
            Clone,
            Debug,
            ::derive_more::Display,
            Eq,
            Hash,
            ::derive_more::Into,
            Ord,
            PartialEq,
            PartialOrd,
        )]
        #[as_ref(str)]
        #[cfg_attr(
            feature = "serde",
            derive(::serde::Deserialize, ::serde::Serialize),
            serde(try_from = "String", into = "String")
        )]
        pub struct $name(String);

        impl $name {
            #[doc = concat!(
                "Maximum number of characters in a [`",
                stringify!($name),
                "`].",
            )]
            pub const MAX_LEN: usize = $max;

            #[doc = concat!(
                "Creates a new [`",
                stringify!($name),
                "`] out of the trimmed `value`, if it's valid.",
            )]
            #[must_use]
            pub fn new(value: impl AsRef<str>) -> Option<Self> {
                let value = value.as_ref().trim();
                Self::check(value).then(|| Self(value.to_owned()))
            }

            #[doc = concat!(
                "Checks whether the given `value` is a valid [`",
                stringify!($name),
                "`].",
            )]
            fn check(value: &str) -> bool {
                !value.is_empty() && value.chars().count() <= Self::MAX_LEN
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = &'static str;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s).ok_or(concat!("invalid `", stringify!($name), "`"))
            }
        }

        impl TryFrom<String> for $name {
            type Error = &'static str;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }
    };
}

pub(crate) use define_id;
pub(crate) use define_text;
