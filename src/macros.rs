#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

/// Declare a closed set of canonical option names.
///
/// Generates the enum plus `ALL`, `name()`, `from_name()` and `Display`, so the
/// canonical spelling of every option lives in exactly one place.
macro_rules! named_options {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),*
        }

        impl $name {
            /// Every option, in declaration order.
            pub const ALL: &'static [$name] = &[ $( $name::$variant ),* ];

            /// Canonical display name, as stored in canonical text.
            pub fn name(self) -> &'static str {
                match self {
                    $( $name::$variant => $label ),*
                }
            }

            /// Inverse of [`Self::name`]. Exact match only.
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $( $label => Some($name::$variant), )*
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

/// Build an [`OptionSpec`](crate::registry::OptionSpec) table entry.
///
/// ```text
/// option!(Choice::Size(Size::Small), words: ["small", "smol"], abbrevs: ["s", "sm"])
/// ```
macro_rules! option {
    (
        $choice:expr
        $(, words: [ $($word:expr),* $(,)? ])?
        $(, abbrevs: [ $($abbr:expr),* $(,)? ])?
        $(,)?
    ) => {
        $crate::registry::OptionSpec::new($choice, &[ $($($word),*)? ], &[ $($($abbr),*)? ])
    };
}
