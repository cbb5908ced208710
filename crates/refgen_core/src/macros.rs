/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Declarative macros for the refgen crates.

/// Generates a string-backed enum with `as_str`, `Display` and `FromStr`.
/// Preserves any doc comments and derive macros on the enum and its variants.
#[macro_export]
macro_rules! str_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $val:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$( $name::$variant, )+];

            #[doc = "Returns the string value associated with this variant."]
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $val, )+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $val => Ok(Self::$variant), )+
                    other => Err($crate::ParseEnumError {
                        kind: stringify!($name),
                        value: other.to_string(),
                    }),
                }
            }
        }
    }
}

/// Builds an [`Author`](crate::reference::Author) from a surname and a first name.
///
/// ```
/// let a = refgen_core::author!("Kozulin", "Alex");
/// assert_eq!(a.last_name, "Kozulin");
/// ```
#[macro_export]
macro_rules! author {
    ($last:expr, $first:expr) => {
        $crate::reference::Author {
            first_name: $first.to_string(),
            last_name: $last.to_string(),
        }
    };
}

/// Builds an author list from `(surname, first name)` pairs, keeping order.
///
/// ```
/// let list = refgen_core::authors![("Smith", "John"), ("Doe", "Jane")];
/// assert_eq!(list.len(), 2);
/// assert_eq!(list[1].last_name, "Doe");
/// ```
#[macro_export]
macro_rules! authors {
    ($(($last:expr, $first:expr)),* $(,)?) => {
        vec![$( $crate::author!($last, $first) ),*]
    };
}
