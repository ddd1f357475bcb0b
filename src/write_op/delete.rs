//! Delete operations.
use bson::{self, Bson};
use Result;
use wire_protocol::flags::OpDeleteFlags;
use wire_protocol::operations::{self, ByteLength, I32_LENGTH};

use super::{WriteOperationBase, WriteOpType};

use std::io::Write;

/// Removes the document(s) matching `selector`; with `SINGLE_REMOVE` set,
/// at most one.
#[derive(Clone, Debug, PartialEq)]
pub struct DeleteOperation {
    selector: bson::Document,
    flags: OpDeleteFlags,
    selector_length: i32,
}

impl DeleteOperation {
    pub fn new(selector: bson::Document, flags: OpDeleteFlags) -> Result<DeleteOperation> {
        let selector_length = selector.byte_length()?;

        Ok(DeleteOperation {
            selector: selector,
            flags: flags,
            selector_length: selector_length,
        })
    }

    pub fn selector(&self) -> &bson::Document {
        &self.selector
    }

    pub fn flags(&self) -> OpDeleteFlags {
        self.flags
    }

    fn to_document(&self) -> bson::Document {
        let mut doc = bson::Document::new();
        doc.insert("q", Bson::Document(self.selector.clone()));
        doc.insert("limit", Bson::I64(self.flags.limit()));
        doc
    }
}

impl WriteOperationBase for DeleteOperation {
    fn operation_type(&self) -> WriteOpType {
        WriteOpType::Delete
    }

    fn incremental_size(&self) -> i32 {
        I32_LENGTH + self.selector_length
    }

    fn start_request<W: Write + ?Sized>(&self, namespace: &str, _ordered: bool, buffer: &mut W) -> Result<()> {
        // Write ZERO field
        operations::write_i32(buffer, 0)?;
        operations::write_cstring(buffer, namespace)
    }

    fn append_self_to_request<W: Write + ?Sized>(&self, buffer: &mut W) -> Result<()> {
        operations::write_i32(buffer, self.flags.bits())?;
        operations::write_bson_document(buffer, &self.selector)
    }

    fn append_self_to_command(&self, batch: &mut bson::Array) {
        batch.push(Bson::Document(self.to_document()));
    }

    fn append_self_to_bson_obj(&self, obj: &mut bson::Document) {
        for (key, value) in self.to_document() {
            obj.insert(key, value);
        }
    }
}
