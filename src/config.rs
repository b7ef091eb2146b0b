use std::borrow::Borrow;
use std::io::Write;

use crate::error::Result;
use crate::record::Record;
use crate::ser::Query;

/// Options accepted by the conversion functions.
///
/// ```
/// use tagged_qs::{query_record, QueryOption};
///
/// query_record! {
///     struct Search {
///         text: String => "q",
///         page: i64 => "page",
///     }
/// }
///
/// let search = Search { text: String::new(), page: 0 };
/// assert_eq!(tagged_qs::stringify(&search, &[]), "page=0&q=");
/// assert_eq!(tagged_qs::stringify(&search, &[QueryOption::SkipEmpty]), "");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QueryOption {
    /// Leave out text fields holding the empty string and integer fields
    /// holding zero.
    ///
    /// Booleans are never considered empty and are always written.
    SkipEmpty,
}

/// Configuration for record serialization.
///
/// A `Config` is the resolved form of a set of [`QueryOption`]s. It can be
/// built from options with [`Config::from_options`] or directly through the
/// builder methods.
///
/// Default value: `skip_empty = false`
///
/// ```
/// use tagged_qs::{query_record, Config};
///
/// query_record! {
///     struct Filter {
///         owner: String => "owner",
///         archived: bool => "archived",
///     }
/// }
///
/// let filter = Filter { owner: String::new(), archived: false };
/// let config = Config::new().skip_empty(true);
/// assert_eq!(config.stringify(&filter), "archived=false");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Config {
    skip_empty: bool,
}

impl Config {
    pub const fn new() -> Self {
        Self { skip_empty: false }
    }

    /// Resolves a set of options. Repeated options have no further effect.
    pub fn from_options<I>(options: I) -> Self
    where
        I: IntoIterator,
        I::Item: Borrow<QueryOption>,
    {
        options.into_iter().fold(Self::new(), |config, option| {
            let option: &QueryOption = option.borrow();
            match option {
                QueryOption::SkipEmpty => config.skip_empty(true),
            }
        })
    }

    /// Specifies whether empty text and zero integer values are left out of
    /// the querystring. Default is `false`.
    pub const fn skip_empty(mut self, skip_empty: bool) -> Self {
        self.skip_empty = skip_empty;
        self
    }

    pub const fn skips_empty(&self) -> bool {
        self.skip_empty
    }

    /// Collects the annotated fields of a record, dropping any field that
    /// cannot be represented.
    pub fn to_query<R: Record + ?Sized>(self, record: &R) -> Query {
        crate::ser::collect_permissive(record, self)
    }

    /// Collects the annotated fields of a record, failing on the first field
    /// that is unannotated or cannot be represented.
    pub fn to_query_strict<R: Record + ?Sized>(self, record: &R) -> Result<Query> {
        crate::ser::collect_strict(record, self)
    }

    /// Serializes a record to a querystring using this `Config`, dropping
    /// any field that cannot be represented.
    pub fn stringify<R: Record + ?Sized>(self, record: &R) -> String {
        self.to_query(record).to_string()
    }

    /// Serializes a record to a querystring using this `Config`.
    ///
    /// Fails without producing output if any field lacks an annotation or
    /// holds a value of an unsupported kind.
    pub fn stringify_strict<R: Record + ?Sized>(self, record: &R) -> Result<String> {
        Ok(self.to_query_strict(record)?.to_string())
    }

    /// Serializes a record into a writer using this `Config`.
    ///
    /// Uses the same policy as [`Config::stringify_strict`]. Nothing is
    /// written if the conversion fails.
    pub fn stringify_to_writer<R: Record + ?Sized, W: Write>(
        self,
        record: &R,
        writer: &mut W,
    ) -> Result<()> {
        self.to_query_strict(record)?.write_to(writer)
    }
}

impl FromIterator<QueryOption> for Config {
    fn from_iter<I: IntoIterator<Item = QueryOption>>(iter: I) -> Self {
        Self::from_options(iter)
    }
}
