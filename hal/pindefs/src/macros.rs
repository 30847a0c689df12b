//! Internal macros shared by the vocabulary enums

/// Define a `#[repr(u8)]` vocabulary enum with its ordinal and name tables
///
/// Every variant is written as `Ident = ordinal => "snake_name"`. The macro
/// derives the common traits and generates `ALL`, `IDENTS`, `as_u8`,
/// `from_u8`, `name`, `ident`, plus the `TryFrom<u8>`, `FromStr` and
/// `Display` impls, so the four enums cannot drift from one another.
macro_rules! pin_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $ordinal:literal => $text:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        #[cfg_attr(feature = "defmt", derive(defmt::Format))]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
        #[repr(u8)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant = $ordinal,
            )+
        }

        impl $name {
            /// Every variant in ordinal order
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Rust identifier of every variant in ordinal order
            pub const IDENTS: &'static [&'static str] = &[$(stringify!($variant)),+];

            /// Get the stable ordinal
            pub const fn as_u8(self) -> u8 {
                self as u8
            }

            /// Decode a stable ordinal
            pub const fn from_u8(value: u8) -> Option<Self> {
                match value {
                    $($ordinal => Some(Self::$variant),)+
                    _ => None,
                }
            }

            /// Configuration-file spelling (snake_case)
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                }
            }

            /// Rust identifier of this variant
            pub const fn ident(self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant),)+
                }
            }
        }

        impl TryFrom<u8> for $name {
            type Error = $crate::error::InvalidOrdinal;

            fn try_from(value: u8) -> Result<Self, Self::Error> {
                Self::from_u8(value).ok_or($crate::error::InvalidOrdinal(value))
            }
        }

        impl From<$name> for u8 {
            fn from(value: $name) -> u8 {
                value.as_u8()
            }
        }

        impl core::str::FromStr for $name {
            type Err = $crate::error::ParseNameError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok(Self::$variant),)+
                    _ => Err($crate::error::ParseNameError),
                }
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.pad(self.name())
            }
        }
    };
}
