//! Newtype codes for type-safe entity references.
//!
//! Every entity is addressed by an opaque short code (an application-level
//! identifier, distinct from the database primary key). Use the
//! `define_code!` macro to create type-safe wrappers that prevent
//! accidentally mixing codes from different entity types.

use rand::Rng;

/// Alphabet for generated short codes (base-36).
const CODE_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Length of generated short codes.
const CODE_LENGTH: usize = 9;

/// Generate a random base-36 short code.
fn random_code() -> String {
    let mut rng = rand::rng();
    (0..CODE_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..CODE_ALPHABET.len());
            char::from(CODE_ALPHABET.get(idx).copied().unwrap_or(b'0'))
        })
        .collect()
}

/// Macro to define a type-safe short-code wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `Display`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `sqlx` `Type`, `Encode`, and `Decode` implementations (with `postgres` feature)
///
/// # Example
///
/// ```
/// # use sushiya_core::define_code;
/// define_code!(ProductCode);
/// define_code!(OrderCode);
///
/// let product = ProductCode::new("a1b2c3d4e");
/// assert_eq!(product.as_str(), "a1b2c3d4e");
///
/// // These are different types, so this won't compile:
/// // let _: ProductCode = OrderCode::new("x");
/// ```
#[macro_export]
macro_rules! define_code {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a code from an existing string.
            #[must_use]
            pub fn new(code: impl Into<String>) -> Self {
                Self(code.into())
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper, returning the string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(code: String) -> Self {
                Self(code)
            }
        }

        impl From<$name> for String {
            fn from(code: $name) -> Self {
                code.0
            }
        }

        #[cfg(feature = "postgres")]
        impl ::sqlx::Type<::sqlx::Postgres> for $name {
            fn type_info() -> ::sqlx::postgres::PgTypeInfo {
                <String as ::sqlx::Type<::sqlx::Postgres>>::type_info()
            }

            fn compatible(ty: &::sqlx::postgres::PgTypeInfo) -> bool {
                <String as ::sqlx::Type<::sqlx::Postgres>>::compatible(ty)
            }
        }

        #[cfg(feature = "postgres")]
        impl<'r> ::sqlx::Decode<'r, ::sqlx::Postgres> for $name {
            fn decode(
                value: ::sqlx::postgres::PgValueRef<'r>,
            ) -> ::core::result::Result<Self, ::sqlx::error::BoxDynError> {
                let code = <String as ::sqlx::Decode<::sqlx::Postgres>>::decode(value)?;
                Ok(Self(code))
            }
        }

        #[cfg(feature = "postgres")]
        impl ::sqlx::Encode<'_, ::sqlx::Postgres> for $name {
            fn encode_by_ref(
                &self,
                buf: &mut ::sqlx::postgres::PgArgumentBuffer,
            ) -> ::std::result::Result<::sqlx::encode::IsNull, ::sqlx::error::BoxDynError> {
                <String as ::sqlx::Encode<::sqlx::Postgres>>::encode_by_ref(&self.0, buf)
            }
        }
    };
}

define_code!(ProductCode);
define_code!(CustomerCode);
define_code!(OrderCode);

impl ProductCode {
    /// Generate a fresh random product code.
    #[must_use]
    pub fn generate() -> Self {
        Self(random_code())
    }
}

impl CustomerCode {
    /// Generate a fresh random customer code.
    #[must_use]
    pub fn generate() -> Self {
        Self(random_code())
    }
}

impl OrderCode {
    /// Generate a fresh random order code.
    ///
    /// Order codes are uppercased because they appear in the WhatsApp
    /// order summary (`#A1B2C3D4E`).
    #[must_use]
    pub fn generate() -> Self {
        Self(random_code().to_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_codes_have_expected_shape() {
        let code = OrderCode::generate();
        assert_eq!(code.as_str().len(), CODE_LENGTH);
        assert!(
            code.as_str()
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase())
        );

        let code = ProductCode::generate();
        assert_eq!(code.as_str().len(), CODE_LENGTH);
        assert!(
            code.as_str()
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase())
        );
    }

    #[test]
    fn codes_serialize_transparently() {
        let code = ProductCode::new("abc123def");
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "\"abc123def\"");

        let back: ProductCode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, code);
    }
}
