use std::{collections::BTreeMap, io::Write};

use crate::types::{name::Name, object::Object};

/// Represents a PDF dictionary object containing key-value pairs.
///
/// PDF dictionaries map name keys to arbitrary PDF object values.
///
/// # Structure
/// - Keys are PDF names, unique by byte content
/// - Values can be any valid PDF object type
/// - Implemented using BTreeMap, so iteration follows the byte order of the keys
///
/// # Examples
/// <<
///   /Type /Catalog
///   /Pages 2 0 R
///   /ViewerPreferences << /DisplayDocTitle true >>
/// >>
#[derive(Debug, Default, PartialEq, Clone)]
pub struct Dictionary {
    records: BTreeMap<Name, Object>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record, returning the value previously stored under `key`.
    pub fn insert(&mut self, key: impl Into<Name>, value: Object) -> Option<Object> {
        self.records.insert(key.into(), value)
    }

    /// Looks a value up by the byte content of its key, e.g. `get("Length")`.
    pub fn get(&self, key: impl AsRef<[u8]>) -> Option<&Object> {
        self.records.get(key.as_ref())
    }

    /// Writes the dictionary as `<< /Key value ... >>` in key order.
    pub fn write<W: Write>(&self, w: &mut W) -> std::io::Result<()> {
        w.write_all(b"<< ")?;
        for (key, value) in &self.records {
            key.write(w)?;
            w.write_all(b" ")?;
            value.write(w)?;
            w.write_all(b" ")?;
        }
        w.write_all(b">>")
    }
}

impl<K: Into<Name>> From<Vec<(K, Object)>> for Dictionary {
    fn from(value: Vec<(K, Object)>) -> Self {
        let value = value.into_iter().map(|(key, val)| (key.into(), val));

        Self {
            records: BTreeMap::from_iter(value),
        }
    }
}

impl<K: Into<Name>, const N: usize> From<[(K, Object); N]> for Dictionary {
    fn from(value: [(K, Object); N]) -> Self {
        let value = value.map(|(key, val)| (key.into(), val));

        Self {
            records: BTreeMap::from(value),
        }
    }
}

impl std::ops::Deref for Dictionary {
    type Target = BTreeMap<Name, Object>;

    fn deref(&self) -> &Self::Target {
        &self.records
    }
}
