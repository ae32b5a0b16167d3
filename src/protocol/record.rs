//! Record definitions
//!
//! A decoded entity: an ordered set of unique `key: value` fields.

/// One decoded entity from a response
///
/// Keys are unique and the last write for a key wins. Insertion order is
/// kept so that iteration is deterministic. Records are small (a song carries
/// a dozen fields at most), so lookup is a linear scan.
///
/// The typed accessors are lenient: a missing or unparsable field yields the
/// type's zero value instead of an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, overwriting any previous value for the key
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.fields.push((key, value)),
        }
    }

    /// Raw value for a key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.iter().any(|(k, _)| k == key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over `(key, value)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterate over values in insertion order
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(_, v)| v.as_str())
    }

    // -------------------------------------------------------------------------
    // Lenient typed accessors
    // -------------------------------------------------------------------------

    /// String value, or `""` when absent
    pub fn get_str(&self, key: &str) -> &str {
        self.get(key).unwrap_or("")
    }

    /// 32-bit integer value, or `0` when absent or unparsable
    pub fn get_int(&self, key: &str) -> i32 {
        self.parse_or_default(key)
    }

    /// 64-bit integer value, or `0` when absent or unparsable
    pub fn get_i64(&self, key: &str) -> i64 {
        self.parse_or_default(key)
    }

    /// Byte value, or `0` when absent, unparsable or out of range
    pub fn get_u8(&self, key: &str) -> u8 {
        u8::try_from(self.get_int(key)).unwrap_or(0)
    }

    pub fn get_f32(&self, key: &str) -> f32 {
        self.parse_or_default(key)
    }

    pub fn get_f64(&self, key: &str) -> f64 {
        self.parse_or_default(key)
    }

    /// `true` only when the field is the integer `1`
    pub fn get_bool(&self, key: &str) -> bool {
        self.get_int(key) == 1
    }

    fn parse_or_default<T: std::str::FromStr + Default>(&self, key: &str) -> T {
        self.get(key)
            .and_then(|v| v.parse().ok())
            .unwrap_or_default()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (k, v) in iter {
            record.insert(k, v);
        }
        record
    }
}
