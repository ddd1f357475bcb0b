//! Insert operations.
use bson::{self, Bson};
use Result;
use wire_protocol::flags::OpInsertFlags;
use wire_protocol::operations::{self, ByteLength};

use super::{WriteOperationBase, WriteOpType};

use std::io::Write;

/// A single document to insert.
#[derive(Clone, Debug, PartialEq)]
pub struct InsertOperation {
    document: bson::Document,
    document_length: i32,
}

impl InsertOperation {
    /// Constructs a new insert operation, or returns the BSON layer's error
    /// if the document cannot be serialized.
    pub fn new(document: bson::Document) -> Result<InsertOperation> {
        let document_length = document.byte_length()?;

        Ok(InsertOperation {
            document: document,
            document_length: document_length,
        })
    }

    pub fn document(&self) -> &bson::Document {
        &self.document
    }
}

impl WriteOperationBase for InsertOperation {
    fn operation_type(&self) -> WriteOpType {
        WriteOpType::Insert
    }

    fn incremental_size(&self) -> i32 {
        self.document_length
    }

    fn start_request<W: Write + ?Sized>(&self, namespace: &str, ordered: bool, buffer: &mut W) -> Result<()> {
        operations::write_i32(buffer, OpInsertFlags::with_ordered(ordered).bits())?;
        operations::write_cstring(buffer, namespace)
    }

    fn append_self_to_request<W: Write + ?Sized>(&self, buffer: &mut W) -> Result<()> {
        operations::write_bson_document(buffer, &self.document)
    }

    fn append_self_to_command(&self, batch: &mut bson::Array) {
        batch.push(Bson::Document(self.document.clone()));
    }

    fn append_self_to_bson_obj(&self, obj: &mut bson::Document) {
        obj.insert("document", Bson::Document(self.document.clone()));
    }
}
