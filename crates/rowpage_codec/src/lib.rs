//! # RowPage Codec
//!
//! The decodable record contract for RowPage.
//!
//! The iteration layer never looks inside a stored buffer: it allocates a
//! zero-valued record and asks it to populate itself through [`Decode`].
//! How the bytes are laid out is up to the record type.
//!
//! ## Usage
//!
//! ```
//! use rowpage_codec::{Decode, Encode};
//!
//! let bytes = String::from("hello").encode().unwrap();
//! let mut text = String::new();
//! text.decode_from(&bytes).unwrap();
//! assert_eq!(text, "hello");
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod cbor;
mod error;

pub use error::{CodecError, CodecResult};

/// Trait for records that can be populated in place from an encoded buffer.
///
/// The trait is object safe so iterators can decode into any record
/// through `&mut dyn Decode`.
pub trait Decode {
    /// Replaces the contents of `self` with the record encoded in `bytes`.
    ///
    /// # Errors
    ///
    /// Returns a [`CodecError`] if the bytes do not describe a valid record.
    fn decode_from(&mut self, bytes: &[u8]) -> CodecResult<()>;
}

/// Trait for records that can be encoded to bytes.
pub trait Encode {
    /// Encodes this record.
    fn encode(&self) -> CodecResult<Vec<u8>>;
}

// Boxed records decode through the inner value.
impl<T: Decode + ?Sized> Decode for Box<T> {
    fn decode_from(&mut self, bytes: &[u8]) -> CodecResult<()> {
        (**self).decode_from(bytes)
    }
}

// Raw byte records are copied verbatim.
impl Decode for Vec<u8> {
    fn decode_from(&mut self, bytes: &[u8]) -> CodecResult<()> {
        self.clear();
        self.extend_from_slice(bytes);
        Ok(())
    }
}

impl Encode for Vec<u8> {
    fn encode(&self) -> CodecResult<Vec<u8>> {
        Ok(self.clone())
    }
}

impl Decode for String {
    fn decode_from(&mut self, bytes: &[u8]) -> CodecResult<()> {
        let text = std::str::from_utf8(bytes).map_err(|_| CodecError::InvalidUtf8)?;
        self.clear();
        self.push_str(text);
        Ok(())
    }
}

impl Encode for String {
    fn encode(&self) -> CodecResult<Vec<u8>> {
        Ok(self.as_bytes().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_decode_replaces_contents() {
        let mut buf = vec![9, 9, 9, 9];
        buf.decode_from(&[1, 2]).unwrap();
        assert_eq!(buf, vec![1, 2]);
    }

    #[test]
    fn string_rejects_invalid_utf8() {
        let mut text = String::from("keep");
        let err = text.decode_from(&[0xff, 0xfe]).unwrap_err();
        assert_eq!(err, CodecError::InvalidUtf8);
        assert_eq!(text, "keep");
    }

    #[test]
    fn boxed_record_decodes_inner() {
        let mut boxed: Box<String> = Box::default();
        boxed.decode_from(b"boxed").unwrap();
        assert_eq!(*boxed, "boxed");
    }

    #[test]
    fn decode_through_trait_object() {
        let mut text = String::new();
        let dest: &mut dyn Decode = &mut text;
        dest.decode_from(b"dyn").unwrap();
        assert_eq!(text, "dyn");
    }
}
