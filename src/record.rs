//! Field introspection for records.
//!
//! A record tells a [`FieldVisitor`] about each of its fields, in declared
//! order, together with the field's query annotation. Most records are
//! declared with [`query_record!`](crate::query_record), but the trait can
//! also be implemented by hand for types that are defined elsewhere.
//!
//! ```
//! use tagged_qs::{FieldVisitor, Record};
//!
//! struct Pagination {
//!     page: i64,
//!     per_page: i64,
//! }
//!
//! impl Record for Pagination {
//!     fn visit_fields<V: FieldVisitor>(&self, visitor: &mut V) -> Result<(), V::Error> {
//!         visitor.visit_field("page", Some("page"), &self.page)?;
//!         visitor.visit_field("per_page", Some("per-page"), &self.per_page)
//!     }
//! }
//!
//! let p = Pagination { page: 2, per_page: 50 };
//! assert_eq!(tagged_qs::stringify(&p, &[]), "page=2&per-page=50");
//! ```

use serde::Serialize;

/// Receives the fields of a [`Record`].
pub trait FieldVisitor {
    type Error;

    /// Visits one field.
    ///
    /// `name` is the field's identifier, `annotation` the query key bound to
    /// it, if any.
    fn visit_field<T: ?Sized + Serialize>(
        &mut self,
        name: &'static str,
        annotation: Option<&'static str>,
        value: &T,
    ) -> Result<(), Self::Error>;
}

/// A value with a fixed, ordered set of annotated fields.
pub trait Record {
    /// Passes every field to `visitor`, in declared order, stopping at the
    /// first error the visitor returns.
    fn visit_fields<V: FieldVisitor>(&self, visitor: &mut V) -> Result<(), V::Error>;
}

impl<R: Record + ?Sized> Record for &R {
    fn visit_fields<V: FieldVisitor>(&self, visitor: &mut V) -> Result<(), V::Error> {
        (**self).visit_fields(visitor)
    }
}

impl<R: Record + ?Sized> Record for Box<R> {
    fn visit_fields<V: FieldVisitor>(&self, visitor: &mut V) -> Result<(), V::Error> {
        (**self).visit_fields(visitor)
    }
}

/// Declares a struct and implements [`Record`] for it.
///
/// A field is annotated by following its type with `=> "key"`. Fields
/// without an annotation are still visited, so the strict conversion
/// functions reject them while the permissive ones leave them out.
/// Attributes and visibility are passed through to the generated struct.
///
/// ```
/// use tagged_qs::query_record;
///
/// query_record! {
///     #[derive(Debug, Default)]
///     pub struct Params {
///         pub westeros: String => "world",
///         pub year: i64 => "decade",
///         /// Not part of the querystring.
///         pub cached: bool,
///     }
/// }
///
/// let params = Params {
///     westeros: "hello".to_owned(),
///     year: 1230,
///     cached: true,
/// };
/// assert_eq!(tagged_qs::stringify(&params, &[]), "decade=1230&world=hello");
/// assert!(tagged_qs::stringify_strict(&params, &[]).is_err());
/// ```
#[macro_export]
macro_rules! query_record {
    (@annotation) => {
        ::core::option::Option::None
    };
    (@annotation $key:literal) => {
        ::core::option::Option::Some($key)
    };
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $ty:ty $(=> $key:literal)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $ty,
            )*
        }

        impl $crate::Record for $name {
            #[allow(unused_variables)]
            fn visit_fields<V: $crate::FieldVisitor>(
                &self,
                visitor: &mut V,
            ) -> ::core::result::Result<(), V::Error> {
                $(
                    visitor.visit_field(
                        ::core::stringify!($field),
                        $crate::query_record!(@annotation $($key)?),
                        &self.$field,
                    )?;
                )*
                ::core::result::Result::Ok(())
            }
        }
    };
}
