//! Newtype handles for type-safe entity references.
//!
//! Placeholder data identifies everything by short string handles
//! (`p123`, `cart1`, `r2`, ...). Use the `define_handle!` macro to create
//! wrappers that prevent accidentally mixing handles of different entity types.

/// Macro to define a type-safe string handle wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `From<&str>`, `From<String>` and `Display` implementations
///
/// # Example
///
/// ```rust
/// # use electromart_core::define_handle;
/// define_handle!(ProductHandle);
/// define_handle!(ReviewId);
///
/// let product = ProductHandle::new("p123");
/// let review = ReviewId::new("r1");
///
/// assert_eq!(product.as_str(), "p123");
/// // These are different types, so this won't compile:
/// // let _: ProductHandle = review;
/// ```
#[macro_export]
macro_rules! define_handle {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new handle from anything string-like.
            #[must_use]
            pub fn new(handle: impl Into<String>) -> Self {
                Self(handle.into())
            }

            /// Get the underlying handle as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the handle and return the inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(handle: &str) -> Self {
                Self(handle.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(handle: String) -> Self {
                Self(handle)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

// Define standard entity handles
define_handle!(ProductHandle);
define_handle!(ImageId);
define_handle!(ColorId);
define_handle!(ReviewId);
define_handle!(CartLineId);
define_handle!(OrderNumber);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_accessors() {
        let handle = ProductHandle::new("p123");
        assert_eq!(handle.as_str(), "p123");
        assert_eq!(handle.to_string(), "p123");
        assert_eq!(handle.into_inner(), "p123".to_string());
    }

    #[test]
    fn test_handle_serializes_transparently() {
        let id = ReviewId::from("r1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"r1\"");

        let parsed: ReviewId = serde_json::from_str("\"r2\"").unwrap();
        assert_eq!(parsed, ReviewId::new("r2"));
    }

    #[test]
    fn test_handles_order_lexically() {
        let mut ids = vec![CartLineId::new("line-b"), CartLineId::new("line-a")];
        ids.sort();
        assert_eq!(ids.first().unwrap().as_str(), "line-a");
    }
}
