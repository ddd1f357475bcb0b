//! Encoders for MongoDB write operations.
//!
//! A write operation (insert, update or delete) is built once from its
//! documents and can then be encoded either into a legacy wire protocol
//! message or into a write command document.
//!
//! ## Command format
//!
//! ```no_run
//! # #[macro_use] extern crate bson;
//! # extern crate mongodb_write_ops;
//! use mongodb_write_ops::{BatchOptions, UpdateOperation, WriteBatch, WriteOperation};
//! use mongodb_write_ops::wire_protocol::flags::OpUpdateFlags;
//!
//! # fn main() {
//! let op = UpdateOperation::new(doc! { "_id": 1 },
//!                               doc! { "$set": { "x": 2 } },
//!                               OpUpdateFlags::UPSERT).unwrap();
//!
//! let batch = WriteBatch::from(WriteOperation::from(op));
//! let command = batch.to_command("test.people", &BatchOptions::new()).unwrap();
//! // { update: "people", updates: [{ q: { _id: 1 }, u: { $set: { x: 2 } },
//! //   upsert: true, multi: false }], ordered: true }
//! # }
//! ```
//!
//! ## Legacy format
//!
//! `WriteBatch::write_request` frames a complete OP_INSERT, OP_UPDATE or
//! OP_DELETE message. Callers with their own framing can drive
//! `WriteOperationBase::start_request` and `append_self_to_request` directly;
//! `incremental_size` reports how many bytes each append will take.
#[macro_use]
extern crate bitflags;
extern crate bson;
extern crate byteorder;
#[macro_use]
extern crate tracing;

pub mod common;
pub mod error;
pub mod index;
pub mod wire_protocol;
pub mod write_op;

pub use common::{BatchOptions, WriteConcern};
pub use error::{Error, Result};
pub use index::{IndexSpec, IndexType};
pub use write_op::{DeleteOperation, InsertOperation, UpdateOperation, WriteBatch, WriteOperation,
                   WriteOperationBase, WriteOpType};
