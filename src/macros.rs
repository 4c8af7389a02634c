//! Macros for declaring state enums with little boilerplate.

/// Declare a fieldless enum and implement [`State`](crate::core::State) for it.
///
/// Besides `State`, the macro derives the supertraits the contract needs and
/// implements `FromStr` (variant name to value) and `Display` (value to
/// variant name). Behavior is added separately by implementing
/// [`Handler`](crate::core::Handler).
///
/// # Example
///
/// ```
/// use statecraft::state_enum;
/// use statecraft::core::State;
///
/// state_enum! {
///     pub enum Phase {
///         Warmup,
///         Running,
///     }
/// }
///
/// assert_eq!(Phase::Running.name(), "Running");
/// assert_eq!("Warmup".parse::<Phase>().unwrap(), Phase::Warmup);
/// assert_eq!(Phase::Warmup.to_string(), "Warmup");
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::StateError;

            fn from_str(name: &str) -> ::std::result::Result<Self, Self::Err> {
                $(
                    if name == stringify!($variant) {
                        return Ok(Self::$variant);
                    }
                )*
                Err($crate::StateError::InvalidState {
                    name: name.to_string(),
                })
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::core::State::name(self))
            }
        }
    };
}
