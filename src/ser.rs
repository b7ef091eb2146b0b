//! Serialization of records into querystrings.

mod encode;
mod query;

pub use query::Query;

use std::convert::Infallible;
use std::io::Write;

use serde::Serialize;

use crate::config::{Config, QueryOption};
use crate::error::*;
use crate::record::{FieldVisitor, Record};
use crate::value::FieldValue;

/// Serializes a record into a querystring, leaving out any field that has
/// no annotation or whose value cannot be represented.
///
/// ```
/// use tagged_qs::query_record;
///
/// query_record! {
///     struct Query {
///         name: String => "name",
///         age: i64 => "age",
///         occupation: String => "occupation",
///         score: f64 => "score",
///     }
/// }
///
/// let q = Query {
///     name: "Alice".to_owned(),
///     age: 24,
///     occupation: "Student".to_owned(),
///     score: 9.5,
/// };
///
/// assert_eq!(
///     tagged_qs::stringify(&q, &[]),
///     "age=24&name=Alice&occupation=Student");
/// ```
pub fn stringify<R: Record + ?Sized>(record: &R, options: &[QueryOption]) -> String {
    Config::from_options(options).stringify(record)
}

/// Serializes a record into a querystring, failing on the first field that
/// has no annotation or whose value cannot be represented.
///
/// No partial output is produced on failure.
///
/// ```
/// use tagged_qs::{query_record, Error};
///
/// query_record! {
///     struct Query {
///         name: String => "name",
///         score: f64 => "score",
///     }
/// }
///
/// let q = Query { name: "Alice".to_owned(), score: 9.5 };
///
/// let err = tagged_qs::stringify_strict(&q, &[]).unwrap_err();
/// assert!(matches!(err, Error::UnsupportedValueKind { .. }));
/// ```
pub fn stringify_strict<R: Record + ?Sized>(
    record: &R,
    options: &[QueryOption],
) -> Result<String> {
    Config::from_options(options).stringify_strict(record)
}

/// Serializes a record into a generic writer object.
///
/// Follows the same rules as [`stringify_strict`]; nothing is written when
/// the record is rejected.
///
/// ```
/// use tagged_qs::query_record;
///
/// query_record! {
///     struct Query {
///         name: String => "name",
///         active: bool => "active",
///     }
/// }
///
/// let q = Query { name: "Alice".to_owned(), active: true };
///
/// let mut buffer = Vec::new();
/// tagged_qs::stringify_to_writer(&q, &[], &mut buffer).unwrap();
/// assert_eq!(
///     String::from_utf8(buffer).unwrap(),
///     "active=true&name=Alice");
/// ```
pub fn stringify_to_writer<R: Record + ?Sized, W: Write>(
    record: &R,
    options: &[QueryOption],
    writer: &mut W,
) -> Result<()> {
    Config::from_options(options).stringify_to_writer(record, writer)
}

/// Collects a record into a [`Query`] without encoding it, using the
/// permissive rules of [`stringify`].
pub fn to_query<R: Record + ?Sized>(record: &R, options: &[QueryOption]) -> Query {
    Config::from_options(options).to_query(record)
}

/// Collects a record into a [`Query`] without encoding it, using the strict
/// rules of [`stringify_strict`].
pub fn to_query_strict<R: Record + ?Sized>(
    record: &R,
    options: &[QueryOption],
) -> Result<Query> {
    Config::from_options(options).to_query_strict(record)
}

pub(crate) fn collect_permissive<R: Record + ?Sized>(record: &R, config: Config) -> Query {
    let mut serializer = QsSerializer::new(config);
    let Ok(()) = record.visit_fields(&mut Permissive(&mut serializer));
    serializer.query
}

pub(crate) fn collect_strict<R: Record + ?Sized>(record: &R, config: Config) -> Result<Query> {
    let mut serializer = QsSerializer::new(config);
    record.visit_fields(&mut Strict(&mut serializer))?;
    Ok(serializer.query)
}

/// Accumulates annotated fields into a [`Query`].
///
/// The serializer itself has no policy for bad fields; that is decided by
/// the [`Permissive`] and [`Strict`] visitors wrapping it.
struct QsSerializer {
    query: Query,
    config: Config,
}

impl QsSerializer {
    fn new(config: Config) -> Self {
        Self {
            query: Query::new(),
            config,
        }
    }

    /// Classifies and converts `value`, then stores it under `key`.
    ///
    /// A value left out by skip-empty is not an error.
    fn append_field<T: ?Sized + Serialize>(&mut self, key: &'static str, value: &T) -> Result<()> {
        let value = FieldValue::from_value(value)?;
        match value.into_query_value(&self.config)? {
            Some(value) => self.query.append(key, value),
            None => tracing::trace!(key, "skipping empty value"),
        }
        Ok(())
    }
}

/// Drops fields that cannot be serialized.
struct Permissive<'a>(&'a mut QsSerializer);

impl FieldVisitor for Permissive<'_> {
    type Error = Infallible;

    fn visit_field<T: ?Sized + Serialize>(
        &mut self,
        name: &'static str,
        annotation: Option<&'static str>,
        value: &T,
    ) -> std::result::Result<(), Infallible> {
        let Some(key) = annotation else {
            tracing::debug!(field = name, "skipping field without query annotation");
            return Ok(());
        };
        if let Err(error) = self.0.append_field(key, value) {
            tracing::debug!(field = name, %error, "skipping field");
        }
        Ok(())
    }
}

/// Fails on the first field that cannot be serialized.
struct Strict<'a>(&'a mut QsSerializer);

impl FieldVisitor for Strict<'_> {
    type Error = Error;

    fn visit_field<T: ?Sized + Serialize>(
        &mut self,
        name: &'static str,
        annotation: Option<&'static str>,
        value: &T,
    ) -> Result<()> {
        let key = annotation.ok_or_else(|| Error::missing_annotation(name))?;
        self.0.append_field(key, value)
    }
}
