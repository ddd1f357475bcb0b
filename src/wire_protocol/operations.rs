//! Primitive field writers shared by the legacy write messages.
use bson;
use byteorder::{LittleEndian, WriteBytesExt};
use Error::ArgumentError;
use Result;

use std::io::Write;
use std::mem;

/// The width of every i32 field in a legacy message (flags, ZERO).
pub const I32_LENGTH: i32 = mem::size_of::<i32>() as i32;

pub trait ByteLength {
    /// Calculates the number of bytes in the serialized version of the struct.
    fn byte_length(&self) -> Result<i32>;
}

impl ByteLength for bson::Document {
    /// Gets the length of a BSON document.
    ///
    /// # Return value
    ///
    /// Returns the number of bytes in the serialized BSON document, or an
    /// Error if the document couldn't be serialized.
    fn byte_length(&self) -> Result<i32> {
        let mut temp_buffer = vec![];

        bson::encode_document(&mut temp_buffer, self)?;
        Ok(temp_buffer.len() as i32)
    }
}

/// Returns the number of bytes `namespace` occupies as a cstring.
pub fn cstring_length(namespace: &str) -> i32 {
    // Add an extra byte after the string for null-termination.
    namespace.len() as i32 + 1
}

/// Writes a namespace as a null-terminated string.
///
/// # Return value
///
/// Returns nothing on success, or an ArgumentError if the namespace contains
/// an interior null byte and so cannot be represented as a cstring.
pub fn write_cstring<W: Write + ?Sized>(buffer: &mut W, namespace: &str) -> Result<()> {
    if namespace.bytes().any(|byte| byte == 0) {
        return Err(ArgumentError(format!(
            "Namespace {:?} contains a null byte.",
            namespace
        )));
    }

    buffer.write_all(namespace.as_bytes())?;

    // Writes the null terminator for the collection name string.
    buffer.write_u8(0)?;
    Ok(())
}

/// Writes a single little-endian i32 field.
pub fn write_i32<W: Write + ?Sized>(buffer: &mut W, value: i32) -> Result<()> {
    buffer.write_i32::<LittleEndian>(value)?;
    Ok(())
}

/// Writes a serialized BSON document to a given buffer.
pub fn write_bson_document<W: Write + ?Sized>(buffer: &mut W, bson: &bson::Document) -> Result<()> {
    let mut temp_buffer = vec![];

    bson::encode_document(&mut temp_buffer, bson)?;
    buffer.write_all(&temp_buffer)?;
    Ok(())
}
