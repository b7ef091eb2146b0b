//! Querystrings from annotated records
//!
//! `tagged_qs` turns a flat record into an `application/x-www-form-urlencoded`
//! querystring. Each field is bound to a query key by an annotation, and
//! only the annotation decides the key: field names never leak into the
//! output.
//!
//! For users who need nested structures, sequences or the decode direction,
//! `serde_qs` or `serde_urlencoded` are better suited. This crate only deals
//! with flat records of text, integer and boolean fields.
//!
//! ## Supported Types
//!
//! Field values are classified through `serde::Serialize`:
//!
//! * `String`/`&str` (and newtypes around them) are written as-is,
//! * `i64`/`isize` are written in base 10,
//! * `bool` is written as `true` or `false`.
//!
//! Any other kind (floats, other integer widths, options, sequences, maps,
//! nested structs, enums...) is unsupported, see [`Kind`].
//!
//! ## Permissive and strict conversion
//!
//! [`stringify`] never fails: unannotated fields and unsupported values are
//! left out. [`stringify_strict`] rejects the whole record on the first such
//! field, returning [`Error::MissingAnnotation`] or
//! [`Error::UnsupportedValueKind`].
//!
//! Keys are sorted in the output regardless of declaration order.
//!
//! ## Usage
//!
//! ```
//! use tagged_qs::{query_record, Error, QueryOption};
//!
//! query_record! {
//!     #[derive(Debug, Default)]
//!     struct Params {
//!         westeros: String => "world",
//!         year: i64 => "decade",
//!         north: bool => "north",
//!         raven: String,
//!     }
//! }
//!
//! let params = Params {
//!     westeros: "hello".to_owned(),
//!     year: 1230,
//!     north: false,
//!     raven: "unsent".to_owned(),
//! };
//! assert_eq!(
//!     tagged_qs::stringify(&params, &[]),
//!     "decade=1230&north=false&world=hello");
//!
//! let err = tagged_qs::stringify_strict(&params, &[]).unwrap_err();
//! assert!(matches!(err, Error::MissingAnnotation { field: "raven" }));
//!
//! let empty = Params::default();
//! assert_eq!(
//!     tagged_qs::stringify(&empty, &[QueryOption::SkipEmpty]),
//!     "north=false");
//! ```

mod config;
mod error;
mod record;
mod ser;
mod value;

#[doc(inline)]
pub use config::{Config, QueryOption};
#[doc(inline)]
pub use error::{Error, Result};
#[doc(inline)]
pub use record::{FieldVisitor, Record};
#[doc(inline)]
pub use ser::{
    Query, stringify, stringify_strict, stringify_to_writer, to_query, to_query_strict,
};
#[doc(inline)]
pub use value::{FieldValue, Kind};
