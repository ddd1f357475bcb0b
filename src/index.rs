//! Index descriptions for the `createIndexes` command.
//!
//! `IndexSpec` collects index keys and options and renders them as the
//! document the server expects for a single index:
//!
//! ```text
//! { key: { a: 1, b: -1 }, name: "a_1_b_-1", unique: true }
//! ```
//!
//! Keys and options may each be set only once; repeating one is an
//! `ArgumentError`. Whether a combination of keys forms a valid compound
//! index is left to the server.
use bson::{self, Bson};
use Error::ArgumentError;
use Result;

/// Symbolic names for index types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IndexType {
    Ascending,
    Descending,
    Text,
    Geo2D,
    GeoHaystack,
    Geo2DSphere,
    Hashed,
}

impl IndexType {
    /// The value stored against the key field for this index type.
    pub fn to_bson(&self) -> Bson {
        match *self {
            IndexType::Ascending => Bson::I32(1),
            IndexType::Descending => Bson::I32(-1),
            IndexType::Text => Bson::String(String::from("text")),
            IndexType::Geo2D => Bson::String(String::from("2d")),
            IndexType::GeoHaystack => Bson::String(String::from("geoHaystack")),
            IndexType::Geo2DSphere => Bson::String(String::from("2dsphere")),
            IndexType::Hashed => Bson::String(String::from("hashed")),
        }
    }
}

impl Default for IndexType {
    fn default() -> Self {
        IndexType::Ascending
    }
}

/// A fluent description of one index.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IndexSpec {
    name: Option<String>,
    keys: bson::Document,
    options: bson::Document,
}

impl IndexSpec {
    pub fn new() -> IndexSpec {
        Default::default()
    }

    /// Adds a field to index with the given type.
    pub fn add_key(&mut self, field: &str, index_type: IndexType) -> Result<&mut Self> {
        self.add_key_element(field, index_type.to_bson())
    }

    /// Adds a field to index with a raw type value, for index types that
    /// `IndexType` does not name.
    pub fn add_key_element<T: Into<Bson>>(&mut self, field: &str, value: T) -> Result<&mut Self> {
        if self.keys.contains_key(field) {
            return Err(ArgumentError(format!("Duplicate key {:?} in index spec.", field)));
        }

        self.keys.insert(field, value.into());
        Ok(self)
    }

    /// Adds every `(field, type)` pair in order.
    pub fn add_keys<S: AsRef<str>>(&mut self, keys: &[(S, IndexType)]) -> Result<&mut Self> {
        for &(ref field, index_type) in keys {
            self.add_key(field.as_ref(), index_type)?;
        }
        Ok(self)
    }

    /// Adds every element of `keys` as a field and its type value.
    pub fn add_keys_document(&mut self, keys: &bson::Document) -> Result<&mut Self> {
        for (field, value) in keys.iter() {
            self.add_key_element(field, value.clone())?;
        }
        Ok(self)
    }

    fn set_option<T: Into<Bson>>(&mut self, key: &str, value: T) -> Result<&mut Self> {
        let value: Bson = value.into();

        if key == "name" {
            return match value {
                Bson::String(name) => self.set_name(&name),
                other => Err(ArgumentError(format!("Index name must be a string, not {}.", other))),
            };
        }

        if key == "key" || self.options.contains_key(key) {
            return Err(ArgumentError(format!("Duplicate option {:?} in index spec.", key)));
        }

        self.options.insert(key, value);
        Ok(self)
    }

    /// Builds the index in the background rather than the foreground.
    pub fn background(&mut self, value: bool) -> Result<&mut Self> {
        self.set_option("background", value)
    }

    pub fn unique(&mut self, value: bool) -> Result<&mut Self> {
        self.set_option("unique", value)
    }

    /// Names the index explicitly instead of deriving a name from its keys.
    pub fn set_name(&mut self, name: &str) -> Result<&mut Self> {
        if self.name.is_some() {
            return Err(ArgumentError(String::from("Duplicate option \"name\" in index spec.")));
        }

        self.name = Some(name.to_owned());
        Ok(self)
    }

    /// Drops documents with duplicate keys while building a unique index.
    ///
    /// Servers from 2.8 on ignore this option; it is kept for older
    /// deployments.
    pub fn drop_duplicates(&mut self, value: bool) -> Result<&mut Self> {
        self.set_option("dropDups", value)
    }

    pub fn sparse(&mut self, value: bool) -> Result<&mut Self> {
        self.set_option("sparse", value)
    }

    /// Expires documents `value` seconds after the indexed date field.
    pub fn expire_after_seconds(&mut self, value: i32) -> Result<&mut Self> {
        self.set_option("expireAfterSeconds", value)
    }

    pub fn version(&mut self, value: i32) -> Result<&mut Self> {
        self.set_option("v", value)
    }

    pub fn text_weights(&mut self, value: bson::Document) -> Result<&mut Self> {
        self.set_option("weights", value)
    }

    pub fn text_default_language(&mut self, value: &str) -> Result<&mut Self> {
        self.set_option("default_language", value)
    }

    pub fn text_language_override(&mut self, value: &str) -> Result<&mut Self> {
        self.set_option("language_override", value)
    }

    pub fn text_index_version(&mut self, value: i32) -> Result<&mut Self> {
        self.set_option("textIndexVersion", value)
    }

    pub fn geo2dsphere_index_version(&mut self, value: i32) -> Result<&mut Self> {
        self.set_option("2dsphereIndexVersion", value)
    }

    /// Bits of geohash precision for a 2d index.
    pub fn geo2d_bits(&mut self, value: i32) -> Result<&mut Self> {
        self.set_option("bits", value)
    }

    pub fn geo2d_min(&mut self, value: f64) -> Result<&mut Self> {
        self.set_option("min", value)
    }

    pub fn geo2d_max(&mut self, value: f64) -> Result<&mut Self> {
        self.set_option("max", value)
    }

    pub fn geo_haystack_bucket_size(&mut self, value: f64) -> Result<&mut Self> {
        self.set_option("bucketSize", value)
    }

    /// Adds an option verbatim, for options without a named setter.
    pub fn add_option<T: Into<Bson>>(&mut self, key: &str, value: T) -> Result<&mut Self> {
        self.set_option(key, value)
    }

    /// Adds every element of `options` verbatim.
    pub fn add_options(&mut self, options: &bson::Document) -> Result<&mut Self> {
        for (key, value) in options.iter() {
            self.set_option(key, value.clone())?;
        }
        Ok(self)
    }

    /// Returns the explicit name, or one generated from the keys in the form
    /// "key1_val1_key2_val2...".
    pub fn name(&self) -> String {
        if let Some(ref name) = self.name {
            return name.to_owned();
        }

        let mut name = String::new();
        for (key, bson) in self.keys.iter() {
            if !name.is_empty() {
                name.push('_');
            }

            name.push_str(key);
            name.push('_');
            match *bson {
                Bson::String(ref s) => name.push_str(s),
                ref other => name.push_str(&format!("{}", other)),
            }
        }
        name
    }

    /// Converts the spec to its BSON document representation.
    pub fn to_bson(&self) -> bson::Document {
        let mut doc = bson::Document::new();
        doc.insert("key", Bson::Document(self.keys.clone()));
        doc.insert("name", Bson::String(self.name()));

        for (key, value) in self.options.iter() {
            doc.insert(key.to_owned(), value.clone());
        }

        doc
    }
}
