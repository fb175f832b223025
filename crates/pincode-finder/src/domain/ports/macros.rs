//! Declarative builder for port error enums.
//!
//! `define_port_error!` takes an enum whose variants carry a display format
//! after `=>` and expands it into a `thiserror` enum with two helpers per
//! variant:
//!
//! - a snake-case constructor; every field parameter is `impl Into<T>`, so
//!   string fields accept `&str`;
//! - an `is_<variant>` predicate.

macro_rules! define_port_error {
    (@helpers $variant:ident) => {
        ::paste::paste! {
            #[doc = concat!("Build the `", stringify!($variant), "` variant.")]
            #[must_use]
            pub const fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
        define_port_error!(@predicate $variant);
    };

    (@helpers $variant:ident { $($field:ident : $ty:ty),+ }) => {
        ::paste::paste! {
            #[doc = concat!("Build the `", stringify!($variant), "` variant.")]
            #[must_use]
            pub fn [<$variant:snake>]($($field: impl Into<$ty>),+) -> Self {
                Self::$variant { $($field: $field.into()),+ }
            }
        }
        define_port_error!(@predicate $variant);
    };

    (@predicate $variant:ident) => {
        ::paste::paste! {
            #[doc = concat!("Whether this is the `", stringify!($variant), "` variant.")]
            #[must_use]
            pub const fn [<is_ $variant:snake>](&self) -> bool {
                matches!(self, Self::$variant { .. })
            }
        }
    };

    (
        $(#[$enum_meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
                $( { $( $(#[$field_meta:meta])* $field:ident : $ty:ty ),+ $(,)? } )?
                => $display:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($display)]
                $variant $( { $( $(#[$field_meta])* $field: $ty ),+ } )?,
            )+
        }

        impl $name {
            $(
                define_port_error!(@helpers $variant $( { $($field : $ty),+ } )?);
            )+
        }
    };
}

pub(crate) use define_port_error;
