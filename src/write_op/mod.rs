//! Typed write operations and their two encodings.
//!
//! Every mutation kind can append itself either into a legacy wire message
//! (OP_INSERT, OP_UPDATE, OP_DELETE) or as one element of the batch array in
//! a write command such as `{update: "coll", updates: [...]}`. Callers group
//! operations of one kind, write the shared framing once through the first
//! operation's `start_request`/`start_command`, then append each operation in
//! order.
pub mod batch;
pub mod delete;
pub mod insert;
pub mod update;

pub use self::batch::WriteBatch;
pub use self::delete::DeleteOperation;
pub use self::insert::InsertOperation;
pub use self::update::UpdateOperation;

use bson::{self, Bson};
use Error::ArgumentError;
use Result;
use wire_protocol::header::OpCode;

use std::fmt;
use std::io::Write;

/// The closed set of mutation kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WriteOpType {
    Insert,
    Update,
    Delete,
}

impl WriteOpType {
    /// The command verb for a batch of this kind.
    pub fn command_name(&self) -> &'static str {
        match *self {
            WriteOpType::Insert => "insert",
            WriteOpType::Update => "update",
            WriteOpType::Delete => "delete",
        }
    }

    /// The field holding the batch array in a command of this kind.
    pub fn batch_name(&self) -> &'static str {
        match *self {
            WriteOpType::Insert => "documents",
            WriteOpType::Update => "updates",
            WriteOpType::Delete => "deletes",
        }
    }

    /// The legacy opcode carrying operations of this kind.
    pub fn op_code(&self) -> OpCode {
        match *self {
            WriteOpType::Insert => OpCode::Insert,
            WriteOpType::Update => OpCode::Update,
            WriteOpType::Delete => OpCode::Delete,
        }
    }
}

impl fmt::Display for WriteOpType {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.write_str(self.command_name())
    }
}

/// Extracts the collection name from a "db.collection" namespace.
pub fn collection_name(namespace: &str) -> Result<&str> {
    match namespace.find('.') {
        Some(index) if index > 0 && index + 1 < namespace.len() => Ok(&namespace[index + 1..]),
        _ => Err(ArgumentError(format!(
            "Namespace {:?} is not of the form db_name.coll_name.",
            namespace
        ))),
    }
}

/// The capabilities every mutation kind provides to a batch writer.
///
/// Operations are immutable after construction. Buffers and command
/// documents are borrowed for the duration of a call and never retained.
pub trait WriteOperationBase {
    /// The kind of this operation.
    fn operation_type(&self) -> WriteOpType;

    /// The name of the array holding a batch of this kind in a command.
    fn batch_name(&self) -> &'static str {
        self.operation_type().batch_name()
    }

    /// The number of bytes `append_self_to_request` writes. Batch splitters
    /// rely on this never underestimating.
    fn incremental_size(&self) -> i32;

    /// Writes the framing shared by a legacy batch, once per batch, after
    /// the message header and before any operation.
    fn start_request<W: Write + ?Sized>(&self, namespace: &str, ordered: bool, buffer: &mut W) -> Result<()>;

    /// Writes this operation's own legacy fields.
    fn append_self_to_request<W: Write + ?Sized>(&self, buffer: &mut W) -> Result<()>;

    /// Writes the command verb into the root document, once per batch.
    fn start_command(&self, namespace: &str, command: &mut bson::Document) -> Result<()> {
        let name = collection_name(namespace)?;
        command.insert(self.operation_type().command_name(), name);
        Ok(())
    }

    /// Appends this operation as the next element of the batch array.
    fn append_self_to_command(&self, batch: &mut bson::Array);

    /// Appends a readable rendering of this operation for diagnostics.
    fn append_self_to_bson_obj(&self, obj: &mut bson::Document);
}

/// A single mutation of any kind.
#[derive(Clone, Debug, PartialEq)]
pub enum WriteOperation {
    Insert(InsertOperation),
    Update(UpdateOperation),
    Delete(DeleteOperation),
}

impl From<InsertOperation> for WriteOperation {
    fn from(op: InsertOperation) -> WriteOperation {
        WriteOperation::Insert(op)
    }
}

impl From<UpdateOperation> for WriteOperation {
    fn from(op: UpdateOperation) -> WriteOperation {
        WriteOperation::Update(op)
    }
}

impl From<DeleteOperation> for WriteOperation {
    fn from(op: DeleteOperation) -> WriteOperation {
        WriteOperation::Delete(op)
    }
}

impl WriteOperationBase for WriteOperation {
    fn operation_type(&self) -> WriteOpType {
        match *self {
            WriteOperation::Insert(_) => WriteOpType::Insert,
            WriteOperation::Update(_) => WriteOpType::Update,
            WriteOperation::Delete(_) => WriteOpType::Delete,
        }
    }

    fn incremental_size(&self) -> i32 {
        match *self {
            WriteOperation::Insert(ref op) => op.incremental_size(),
            WriteOperation::Update(ref op) => op.incremental_size(),
            WriteOperation::Delete(ref op) => op.incremental_size(),
        }
    }

    fn start_request<W: Write + ?Sized>(&self, namespace: &str, ordered: bool, buffer: &mut W) -> Result<()> {
        match *self {
            WriteOperation::Insert(ref op) => op.start_request(namespace, ordered, buffer),
            WriteOperation::Update(ref op) => op.start_request(namespace, ordered, buffer),
            WriteOperation::Delete(ref op) => op.start_request(namespace, ordered, buffer),
        }
    }

    fn append_self_to_request<W: Write + ?Sized>(&self, buffer: &mut W) -> Result<()> {
        match *self {
            WriteOperation::Insert(ref op) => op.append_self_to_request(buffer),
            WriteOperation::Update(ref op) => op.append_self_to_request(buffer),
            WriteOperation::Delete(ref op) => op.append_self_to_request(buffer),
        }
    }

    fn append_self_to_command(&self, batch: &mut bson::Array) {
        match *self {
            WriteOperation::Insert(ref op) => op.append_self_to_command(batch),
            WriteOperation::Update(ref op) => op.append_self_to_command(batch),
            WriteOperation::Delete(ref op) => op.append_self_to_command(batch),
        }
    }

    fn append_self_to_bson_obj(&self, obj: &mut bson::Document) {
        match *self {
            WriteOperation::Insert(ref op) => op.append_self_to_bson_obj(obj),
            WriteOperation::Update(ref op) => op.append_self_to_bson_obj(obj),
            WriteOperation::Delete(ref op) => op.append_self_to_bson_obj(obj),
        }
    }
}

impl fmt::Display for WriteOperation {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let mut obj = bson::Document::new();
        self.append_self_to_bson_obj(&mut obj);
        write!(fmt, "{} {}", self.operation_type(), Bson::Document(obj))
    }
}
