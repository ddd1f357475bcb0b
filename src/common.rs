//! Options shared by write batches.
use bson::{self, Bson};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteConcern {
    pub w: i32,          // Write replication
    pub w_timeout: i32,  // Used in conjunction with 'w'. Propagation timeout in ms.
    pub j: bool,         // If true, will block until write operations have been committed to journal.
    pub fsync: bool,     // If true and server is not journaling, blocks until server has synced all data files to disk.
}

impl WriteConcern {
    pub fn new() -> WriteConcern {
        WriteConcern {
            w: 1,
            w_timeout: 0,
            j: false,
            fsync: false,
        }
    }

    pub fn to_bson(&self) -> bson::Document {
        let mut bson = bson::Document::new();
        bson.insert("w", Bson::I32(self.w));
        bson.insert("wtimeout", Bson::I32(self.w_timeout));
        bson.insert("j", Bson::Boolean(self.j));
        if self.fsync {
            bson.insert("fsync", Bson::Boolean(true));
        }
        bson
    }
}

impl Default for WriteConcern {
    fn default() -> Self {
        WriteConcern::new()
    }
}

/// Options applied to a whole command-format write batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOptions {
    /// Whether the server should stop at the first failed operation.
    pub ordered: bool,
    /// Acknowledgement requested from the server; omitted when `None`.
    pub write_concern: Option<WriteConcern>,
}

impl BatchOptions {
    pub fn new() -> BatchOptions {
        Default::default()
    }
}

impl Default for BatchOptions {
    fn default() -> Self {
        BatchOptions {
            ordered: true,
            write_concern: None,
        }
    }
}
