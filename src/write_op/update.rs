//! Update operations.
use bson::{self, Bson};
use Result;
use wire_protocol::flags::OpUpdateFlags;
use wire_protocol::operations::{self, ByteLength, I32_LENGTH};

use super::{WriteOperationBase, WriteOpType};

use std::io::Write;

/// A single update or replacement.
///
/// # Fields
///
/// `selector` - Identifies the document(s) to be updated.
/// `update` - A replacement document or a document of update operators.
/// `flags` - Whether to upsert and whether to update every match.
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateOperation {
    selector: bson::Document,
    update: bson::Document,
    flags: OpUpdateFlags,
    selector_length: i32,
    update_length: i32,
}

impl UpdateOperation {
    /// Constructs a new update operation.
    ///
    /// # Return value
    ///
    /// Returns the operation, or the BSON layer's error if either document
    /// cannot be serialized.
    pub fn new(selector: bson::Document, update: bson::Document, flags: OpUpdateFlags) -> Result<UpdateOperation> {
        let selector_length = selector.byte_length()?;
        let update_length = update.byte_length()?;

        Ok(UpdateOperation {
            selector: selector,
            update: update,
            flags: flags,
            selector_length: selector_length,
            update_length: update_length,
        })
    }

    pub fn selector(&self) -> &bson::Document {
        &self.selector
    }

    pub fn update(&self) -> &bson::Document {
        &self.update
    }

    pub fn flags(&self) -> OpUpdateFlags {
        self.flags
    }

    // {q, u, upsert, multi}, shared by the command and diagnostic forms.
    fn to_document(&self) -> bson::Document {
        let mut doc = bson::Document::new();
        doc.insert("q", Bson::Document(self.selector.clone()));
        doc.insert("u", Bson::Document(self.update.clone()));
        doc.insert("upsert", Bson::Boolean(self.flags.is_upsert()));
        doc.insert("multi", Bson::Boolean(self.flags.is_multi()));
        doc
    }
}

impl WriteOperationBase for UpdateOperation {
    fn operation_type(&self) -> WriteOpType {
        WriteOpType::Update
    }

    fn incremental_size(&self) -> i32 {
        I32_LENGTH + self.selector_length + self.update_length
    }

    fn start_request<W: Write + ?Sized>(&self, namespace: &str, _ordered: bool, buffer: &mut W) -> Result<()> {
        // The wire protocol specifies that a 32-bit 0 field goes here
        operations::write_i32(buffer, 0)?;
        operations::write_cstring(buffer, namespace)
    }

    fn append_self_to_request<W: Write + ?Sized>(&self, buffer: &mut W) -> Result<()> {
        operations::write_i32(buffer, self.flags.bits())?;
        operations::write_bson_document(buffer, &self.selector)?;
        operations::write_bson_document(buffer, &self.update)
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
