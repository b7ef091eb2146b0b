use std::collections::BTreeMap;
use std::fmt;
use std::io::Write;

use super::encode::encode;
use crate::error::Result;

/// An accumulated querystring.
///
/// Keys are kept in ascending byte order and every key holds one or more
/// values in insertion order. The `Display` implementation produces the
/// encoded querystring, without a leading `?`.
///
/// ```
/// use tagged_qs::Query;
///
/// let mut query = Query::new();
/// query.append("world", "hello there");
/// query.append("decade", "1230");
/// assert_eq!(query.to_string(), "decade=1230&world=hello+there");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Query {
    pairs: BTreeMap<String, Vec<String>>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a value under `key`, after any value already stored there.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.entry(key.into()).or_default().push(value.into());
    }

    /// Returns the first value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns every value stored under `key`.
    pub fn get_all(&self, key: &str) -> &[String] {
        self.pairs.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    /// Number of key/value pairs.
    pub fn len(&self) -> usize {
        self.pairs.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterates over the unencoded pairs in output order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.pairs.iter().flat_map(|(key, values)| {
            values
                .iter()
                .map(move |value| (key.as_str(), value.as_str()))
        })
    }

    /// Writes the encoded querystring into `writer`.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.encode_with(|part| writer.write_all(part.as_bytes()))?;
        Ok(())
    }

    fn encode_with<E, F>(&self, mut write: F) -> std::result::Result<(), E>
    where
        F: FnMut(&str) -> std::result::Result<(), E>,
    {
        let mut first_kv = true;
        for (key, value) in self.iter() {
            if first_kv {
                first_kv = false;
            } else {
                write("&")?;
            }
            for encoded in encode(key) {
                write(&*encoded)?;
            }
            write("=")?;
            for encoded in encode(value) {
                write(&*encoded)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.encode_with(|part| f.write_str(part))
    }
}

impl<K, V> Extend<(K, V)> for Query
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.append(key, value);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Query
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut query = Query::new();
        query.extend(iter);
        query
    }
}
