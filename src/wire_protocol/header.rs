use std::fmt;
use std::io::{Read, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use Error::MessageError;
use Result;

/// Represents a write opcode in the MongoDB Wire Protocol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OpCode {
    Update = 2001,
    Insert = 2002,
    Delete = 2006,
}

impl OpCode {
    /// Maps integer values to OpCodes
    ///
    /// # Arguments
    ///
    /// `i` - The integer to map.
    ///
    /// # Return value
    ///
    /// Returns the matching opcode, or `None` if the integer isn't a valid
    /// write opcode.
    pub fn from_i32(i: i32) -> Option<OpCode> {
        match i {
            2001 => Some(OpCode::Update),
            2002 => Some(OpCode::Insert),
            2006 => Some(OpCode::Delete),
            _ => None,
        }
    }
}

impl fmt::Display for OpCode {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            OpCode::Update => fmt.write_str("OP_UPDATE"),
            OpCode::Insert => fmt.write_str("OP_INSERT"),
            OpCode::Delete => fmt.write_str("OP_DELETE"),
        }
    }
}

/// Represents a header in the MongoDB Wire Protocol.
///
/// # Fields
///
/// `message_length` - The length of the entire message in bytes, header
///                    included.
/// `request_id` - Identifies the request being sent.
/// `response_to` - Identifies which request the message responds to. This
///                 is `0` in a request from the client.
/// `op_code` - Identifies which type of message is being sent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Header {
    pub message_length: i32,
    pub request_id: i32,
    pub response_to: i32,
    pub op_code: OpCode,
}

impl Header {
    /// The serialized size of a header: four i32 fields.
    pub const LENGTH: i32 = 16;

    pub fn new(message_length: i32, request_id: i32, response_to: i32, op_code: OpCode) -> Header {
        Header {
            message_length: message_length,
            request_id: request_id,
            response_to: response_to,
            op_code: op_code,
        }
    }

    /// Constructs a request header, with `response_to` set to 0.
    pub fn new_request(message_length: i32, request_id: i32, op_code: OpCode) -> Header {
        Header::new(message_length, request_id, 0, op_code)
    }

    pub fn new_update(message_length: i32, request_id: i32) -> Header {
        Header::new_request(message_length, request_id, OpCode::Update)
    }

    pub fn new_insert(message_length: i32, request_id: i32) -> Header {
        Header::new_request(message_length, request_id, OpCode::Insert)
    }

    pub fn new_delete(message_length: i32, request_id: i32) -> Header {
        Header::new_request(message_length, request_id, OpCode::Delete)
    }

    /// Writes the serialized Header to a buffer.
    pub fn write<W: Write + ?Sized>(&self, buffer: &mut W) -> Result<()> {
        buffer.write_i32::<LittleEndian>(self.message_length)?;
        buffer.write_i32::<LittleEndian>(self.request_id)?;
        buffer.write_i32::<LittleEndian>(self.response_to)?;
        buffer.write_i32::<LittleEndian>(self.op_code as i32)?;
        Ok(())
    }

    /// Reads a serialized Header from a buffer.
    ///
    /// # Return value
    ///
    /// Returns the parsed Header on success, or an Error if the buffer runs
    /// short or carries an opcode other than a write opcode.
    pub fn read<R: Read + ?Sized>(buffer: &mut R) -> Result<Header> {
        let message_length = buffer.read_i32::<LittleEndian>()?;
        let request_id = buffer.read_i32::<LittleEndian>()?;
        let response_to = buffer.read_i32::<LittleEndian>()?;

        let op_code_i32 = buffer.read_i32::<LittleEndian>()?;
        let op_code = match OpCode::from_i32(op_code_i32) {
            Some(code) => code,
            None => {
                return Err(MessageError(format!("Invalid header opcode: {}.", op_code_i32)))
            }
        };

        Ok(Header::new(message_length, request_id, response_to, op_code))
    }
}
