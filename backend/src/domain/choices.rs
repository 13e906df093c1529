//! Closed-set string fields such as statuses, priorities and roles.
//!
//! Each choice enum is generated by [`define_choice!`] so that the wire
//! spelling, parsing, display and the list of allowed values stay in one
//! place.

use std::fmt;

/// Behaviour shared by every closed-set field.
pub trait Choice: Copy + Sized + 'static {
    /// Wire spellings accepted by the field, in declaration order.
    const ALLOWED: &'static [&'static str];

    /// Wire spelling of this value.
    fn as_str(&self) -> &'static str;
}

/// Parse error for any [`Choice`] enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseChoiceError {
    pub input: String,
    pub allowed: &'static [&'static str],
}

impl fmt::Display for ParseChoiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid value {:?}; expected one of: {}",
            self.input,
            self.allowed.join(", ")
        )
    }
}

impl std::error::Error for ParseChoiceError {}

macro_rules! define_choice {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $wire:literal
            ),+ $(,)?
        }
        default = $default:ident;
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl $crate::domain::choices::Choice for $name {
            const ALLOWED: &'static [&'static str] = &[$($wire),+];

            fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }
        }

        impl $name {
            /// Wire spelling of this value.
            pub fn as_str(&self) -> &'static str {
                <Self as $crate::domain::choices::Choice>::as_str(self)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$default
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::domain::choices::ParseChoiceError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value {
                    $($wire => Ok(Self::$variant),)+
                    _ => Err($crate::domain::choices::ParseChoiceError {
                        input: value.to_owned(),
                        allowed: <Self as $crate::domain::choices::Choice>::ALLOWED,
                    }),
                }
            }
        }
    };
}

pub(crate) use define_choice;

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    define_choice! {
        /// Sample choice used only by these tests.
        pub enum Shade {
            Light => "light",
            Dark => "dark",
            PitchBlack => "pitch_black",
        }
        default = Light;
    }

    #[rstest]
    #[case("light", Shade::Light)]
    #[case("dark", Shade::Dark)]
    #[case("pitch_black", Shade::PitchBlack)]
    fn parses_wire_spellings(#[case] raw: &str, #[case] expected: Shade) {
        assert_eq!(raw.parse::<Shade>(), Ok(expected));
        assert_eq!(expected.to_string(), raw);
    }

    #[rstest]
    #[case("Light")]
    #[case("pitch-black")]
    #[case("")]
    fn rejects_unknown_spellings(#[case] raw: &str) {
        let err = raw.parse::<Shade>().expect_err("unknown value");
        assert_eq!(err.input, raw);
        assert_eq!(err.allowed, &["light", "dark", "pitch_black"]);
    }

    #[rstest]
    fn default_uses_declared_variant() {
        assert_eq!(Shade::default(), Shade::Light);
    }
}
