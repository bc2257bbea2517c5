//! Macros for defining kind enums.

/// Macro for defining a closed kind enum, represented by lowercase codes.
///
/// Parsing a code outside the defined set fails with the provided error type,
/// which must be constructible from the offending [`String`].
///
/// # Example
///
/// ```rust
/// # use common::define_kind;
/// #
/// #[derive(Debug)]
/// pub struct InvalidShape(String);
///
/// impl From<String> for InvalidShape {
///     fn from(s: String) -> Self {
///         Self(s)
///     }
/// }
///
/// define_kind! {
///     #[doc = "Shape kind."]
///     #[error = InvalidShape]
///     enum Kind {
///         #[doc = "A cube"]
///         Cube,
///
///         #[doc = "A sphere"]
///         Sphere,
///     }
/// }
///
/// assert_eq!("cube".parse::<Kind>().unwrap(), Kind::Cube);
/// assert!("cone".parse::<Kind>().is_err());
/// ```
#[expect(clippy::module_name_repetitions, reason = "more readable")]
#[macro_export]
macro_rules! define_kind {
    (
        #[doc = $doc:literal]
        #[error = $err:ident]
        enum $name:ident {
            $(
                #[doc = $variant_doc:literal]
                $variant:ident
            ),* $(,)?
        }
    ) => {
        #[derive(
            Clone,
            Copy,
            Debug,
            $crate::private::strum::AsRefStr,
            $crate::private::strum::Display,
            $crate::private::strum::VariantArray,
            Eq,
            Hash,
            PartialEq,
        )]
        #[doc = $doc]
        #[strum(serialize_all = "lowercase")]
        pub enum $name {
            $(
                 #[doc = $variant_doc]
                 $variant,
            )*
        }

        impl ::core::str::FromStr for $name {
            type Err = $err;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <Self as $crate::private::strum::VariantArray>::VARIANTS
                    .iter()
                    .copied()
                    .find(|v| ::core::convert::AsRef::<str>::as_ref(v) == s)
                    .ok_or_else(|| {
                        <$err as ::core::convert::From<
                            ::std::string::String,
                        >>::from(s.to_owned())
                    })
            }
        }
    };
}
