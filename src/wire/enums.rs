//! Closed string enums with a forward-compatible `Unknown` sentinel.
//!
//! [`wire_enum!`] expands a list of `Variant => "WIRE_NAME"` pairs into an
//! enum that serializes to its exact wire string and parses any other
//! string (including new server-side values) as `Unknown`.

/// Defines a wire enum.
///
/// The generated type is `Copy`, defaults to `Unknown`, serializes
/// `Unknown` as `""`, and implements `Display`/`FromStr` over the wire
/// names. Parsing never fails.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            Default,
            ::serde_with::SerializeDisplay,
            ::serde_with::DeserializeFromStr,
        )]
        $vis enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// Unset, or a value these bindings do not recognize.
            #[default]
            Unknown,
        }

        impl $name {
            /// Every wire name this enum recognizes, in contract order.
            pub const VALUES: &'static [&'static str] = &[$($wire),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $wire, )+
                    Self::Unknown => "",
                }
            }

            pub fn is_unknown(&self) -> bool {
                matches!(self, Self::Unknown)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ::std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(match s {
                    $( $wire => Self::$variant, )+
                    _ => Self::Unknown,
                })
            }
        }
    };
}

pub(crate) use wire_enum;

#[cfg(test)]
mod tests {
    wire_enum! {
        enum Switch {
            On => "ON",
            Off => "OFF",
        }
    }

    #[test]
    fn test_known_names_map_both_ways() {
        assert_eq!(Switch::On.as_str(), "ON");
        assert_eq!("OFF".parse::<Switch>().unwrap(), Switch::Off);
        assert_eq!(Switch::VALUES, &["ON", "OFF"]);
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        assert_eq!("on".parse::<Switch>().unwrap(), Switch::Unknown);
    }

    #[test]
    fn test_default_is_unknown() {
        assert!(Switch::default().is_unknown());
        assert_eq!(Switch::Unknown.to_string(), "");
    }

    #[test]
    fn test_serde_uses_wire_names() {
        assert_eq!(serde_json::to_string(&Switch::On).unwrap(), r#""ON""#);
        assert_eq!(
            serde_json::from_str::<Switch>(r#""DIMMED""#).unwrap(),
            Switch::Unknown
        );
        assert_eq!(serde_json::from_str::<Switch>(r#""""#).unwrap(), Switch::Unknown);
    }

    #[test]
    fn test_non_string_is_rejected_by_serde() {
        assert!(serde_json::from_str::<Switch>("1").is_err());
    }
}
