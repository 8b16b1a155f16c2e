//! Macros for ergonomic state and event declarations.

/// Generate a `State` implementation for a simple enum.
///
/// The enum derives `Clone`, `PartialEq`, `Debug` and serde's
/// `Serialize`/`Deserialize`, so the calling crate needs `serde` with the
/// `derive` feature.
///
/// # Example
///
/// ```
/// use ruleflow::state_enum;
/// use ruleflow::core::State;
///
/// state_enum! {
///     pub enum DocState {
///         Draft,
///         Published,
///         Archived,
///     }
///     final: [Archived]
/// }
///
/// assert_eq!(DocState::Draft.name(), "Draft");
/// assert!(DocState::Archived.is_final());
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

        $(final: [$($final:ident),* $(,)?])?
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

            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    #[allow(unreachable_patterns)]
                    _ => false,
                }
            }
        }
    };
}

/// Generate a fieldless event enum that is its own kind.
///
/// Suits machines whose events carry no data: each variant is both the
/// event and the kind transitions are registered for.
///
/// # Example
///
/// ```
/// use ruleflow::event_enum;
/// use ruleflow::core::{Event, EventKind};
///
/// event_enum! {
///     pub enum DocEvent {
///         Publish,
///         Archive,
///     }
/// }
///
/// assert_eq!(DocEvent::Publish.kind(), DocEvent::Publish);
/// assert_eq!(DocEvent::Archive.name(), "Archive");
/// ```
#[macro_export]
macro_rules! event_enum {
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
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::EventKind for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }

        impl $crate::core::Event for $name {
            type Kind = $name;

            fn kind(&self) -> $name {
                *self
            }
        }
    };
}
