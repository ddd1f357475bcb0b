//! Homogeneous runs of write operations and their framing.
use bson::{self, Bson};
use common::BatchOptions;
use Error::ArgumentError;
use Result;
use wire_protocol::header::Header;
use wire_protocol::operations::{cstring_length, I32_LENGTH};

use super::{WriteOperation, WriteOperationBase, WriteOpType};

use std::io::Write;
use std::slice;

/// An ordered sequence of operations of a single kind, encoded together
/// under one set of framing.
#[derive(Clone, Debug, PartialEq)]
pub struct WriteBatch {
    op_type: WriteOpType,
    operations: Vec<WriteOperation>,
}

impl From<WriteOperation> for WriteBatch {
    fn from(op: WriteOperation) -> WriteBatch {
        WriteBatch {
            op_type: op.operation_type(),
            operations: vec![op],
        }
    }
}

impl WriteBatch {
    pub fn new(op_type: WriteOpType) -> WriteBatch {
        WriteBatch {
            op_type: op_type,
            operations: vec![],
        }
    }

    /// Groups operations into batches. Ordered grouping only merges adjacent
    /// operations of the same kind so that the server sees them in call
    /// order; unordered grouping yields at most one batch per kind.
    pub fn group(operations: Vec<WriteOperation>, ordered: bool) -> Vec<WriteBatch> {
        let mut batches: Vec<WriteBatch> = vec![];

        for op in operations {
            let leftover = if ordered {
                match batches.last_mut() {
                    Some(batch) => batch.merge(op),
                    None => Some(op),
                }
            } else {
                match batches.iter_mut().find(|batch| batch.op_type == op.operation_type()) {
                    Some(batch) => batch.merge(op),
                    None => Some(op),
                }
            };

            if let Some(op) = leftover {
                batches.push(WriteBatch::from(op));
            }
        }

        batches
    }

    pub fn op_type(&self) -> WriteOpType {
        self.op_type
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<WriteOperation> {
        self.operations.iter()
    }

    /// Adds `op` to the batch if it is of the batch's kind, otherwise hands
    /// it back.
    pub fn merge(&mut self, op: WriteOperation) -> Option<WriteOperation> {
        if op.operation_type() == self.op_type {
            self.operations.push(op);
            None
        } else {
            Some(op)
        }
    }

    /// Appends `op`, failing if it is of a different kind.
    pub fn push(&mut self, op: WriteOperation) -> Result<()> {
        match self.merge(op) {
            None => Ok(()),
            Some(op) => Err(ArgumentError(format!(
                "Cannot add {} operation to a batch of {} operations.",
                op.operation_type(),
                self.op_type
            ))),
        }
    }

    /// An upper bound on the bytes `write_request` writes for this batch.
    pub fn max_request_size(&self, namespace: &str) -> i32 {
        // Every write opcode frames its body with one i32 (flags or ZERO)
        // and the namespace.
        let framing = Header::LENGTH + I32_LENGTH + cstring_length(namespace);
        self.operations.iter().fold(framing, |size, op| size + op.incremental_size())
    }

    fn first(&self) -> Result<&WriteOperation> {
        match self.operations.first() {
            Some(op) => Ok(op),
            None => Err(ArgumentError(format!("Cannot encode an empty {} batch.", self.op_type))),
        }
    }

    /// Writes the batch as one complete legacy wire message.
    ///
    /// # Arguments
    ///
    /// `buffer` - The buffer to write to.
    /// `request_id` - Identifies the request in the message header.
    /// `namespace` - The full qualified name of the collection, beginning with
    ///               the database name and a dot.
    /// `ordered` - Whether the server should stop at the first error.
    ///
    /// # Return value
    ///
    /// Returns nothing on success, or an Error if the batch is empty, holds
    /// more than one update or delete (the legacy opcodes carry exactly one),
    /// or the buffer fails. Nothing is written to `buffer` on argument errors.
    pub fn write_request<W: Write + ?Sized>(&self, buffer: &mut W, request_id: i32,
                                            namespace: &str, ordered: bool) -> Result<()> {
        let first = self.first()?;

        if self.op_type != WriteOpType::Insert && self.operations.len() > 1 {
            return Err(ArgumentError(format!(
                "{} carries a single operation, but the batch holds {}.",
                self.op_type.op_code(),
                self.operations.len()
            )));
        }

        trace!(namespace = namespace, ordered = ordered, "starting {} request", self.op_type);

        let mut body = Vec::with_capacity(self.max_request_size(namespace) as usize);
        first.start_request(namespace, ordered, &mut body)?;

        for op in &self.operations {
            op.append_self_to_request(&mut body)?;
        }

        let message_length = Header::LENGTH + body.len() as i32;
        let header = Header::new_request(message_length, request_id, self.op_type.op_code());

        header.write(buffer)?;
        buffer.write_all(&body)?;

        debug!(
            request_id = request_id,
            message_length = message_length,
            operations = self.operations.len(),
            "framed {} message",
            header.op_code
        );

        Ok(())
    }

    /// Builds the write command for this batch, e.g.
    /// `{update: "coll", updates: [...], ordered: true}`.
    pub fn to_command(&self, namespace: &str, options: &BatchOptions) -> Result<bson::Document> {
        let first = self.first()?;

        let mut command = bson::Document::new();
        first.start_command(namespace, &mut command)?;

        let mut batch = Vec::with_capacity(self.operations.len());
        for op in &self.operations {
            op.append_self_to_command(&mut batch);
        }

        command.insert(self.op_type.batch_name(), Bson::Array(batch));
        command.insert("ordered", Bson::Boolean(options.ordered));

        if let Some(ref write_concern) = options.write_concern {
            command.insert("writeConcern", Bson::Document(write_concern.to_bson()));
        }

        debug!(
            namespace = namespace,
            operations = self.operations.len(),
            "built {} command",
            self.op_type
        );

        Ok(command)
    }
}

impl<'a> IntoIterator for &'a WriteBatch {
    type Item = &'a WriteOperation;
    type IntoIter = slice::Iter<'a, WriteOperation>;

    fn into_iter(self) -> Self::IntoIter {
        self.operations.iter()
    }
}
