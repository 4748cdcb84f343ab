/// Defines an enum over spreadsheet cell text. Known values map to unit
/// variants; anything else is kept verbatim in `Other`. Generates:
/// - derives (Debug, Clone, PartialEq, Eq, Hash)
/// - `as_str`, `Display`, `From<&str>`, `Default` (an empty `Other`)
/// - `Serialize` as the cell text, `Deserialize` from any scalar cell
///
/// Matching is exact and case-sensitive, the way a sheet filter compares cells.
///
/// Usage:
///   define_cell_enum!(Priority { Urgent => "Urgent" });
#[macro_export]
macro_rules! define_cell_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// Any other cell value, preserved verbatim.
            Other(::std::string::String),
        }

        impl $name {
            pub fn as_str(&self) -> &str {
                match self {
                    $( $name::$variant => $text, )+
                    $name::Other(s) => s.as_str(),
                }
            }
        }

        impl ::std::convert::From<&str> for $name {
            fn from(s: &str) -> Self {
                match s {
                    $( $text => $name::$variant, )+
                    other => $name::Other(other.to_string()),
                }
            }
        }

        impl ::std::default::Default for $name {
            fn default() -> Self {
                $name::Other(::std::string::String::new())
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let text = $crate::models::cell::text(deserializer)?;
                Ok($name::from(text.as_str()))
            }
        }
    };
}
