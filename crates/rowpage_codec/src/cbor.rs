//! CBOR encoding for serde types.
//!
//! Records that derive `Serialize`/`Deserialize` can be stored with
//! [`to_vec`] and read back with [`from_slice`]. The [`cbor_record!`]
//! macro wires both into [`Encode`](crate::Encode) and
//! [`Decode`](crate::Decode).
//!
//! [`cbor_record!`]: crate::cbor_record

use crate::error::{CodecError, CodecResult};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Encodes a value to CBOR bytes.
///
/// # Errors
///
/// Returns [`CodecError::EncodingFailed`] if the value cannot be serialized.
pub fn to_vec<T: Serialize + ?Sized>(value: &T) -> CodecResult<Vec<u8>> {
    let mut buf = Vec::new();
    ciborium::ser::into_writer(value, &mut buf)
        .map_err(|e| CodecError::encoding_failed(e.to_string()))?;
    Ok(buf)
}

/// Decodes a value from CBOR bytes.
///
/// # Errors
///
/// Returns [`CodecError::ValueRequired`] for an empty buffer and
/// [`CodecError::DecodingFailed`] for malformed input.
pub fn from_slice<T: DeserializeOwned>(bytes: &[u8]) -> CodecResult<T> {
    if bytes.is_empty() {
        return Err(CodecError::ValueRequired);
    }
    ciborium::de::from_reader(bytes).map_err(|e| CodecError::decoding_failed(e.to_string()))
}

/// Implements [`Encode`](crate::Encode) and [`Decode`](crate::Decode) for
/// serde types using CBOR.
///
/// ```
/// use rowpage_codec::{cbor_record, Decode, Encode};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
/// struct Group {
///     name: String,
///     members: u32,
/// }
///
/// cbor_record!(Group);
///
/// let bytes = Group { name: "admins".into(), members: 3 }.encode().unwrap();
/// let mut group = Group::default();
/// group.decode_from(&bytes).unwrap();
/// assert_eq!(group.members, 3);
/// ```
#[macro_export]
macro_rules! cbor_record {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Decode for $ty {
                fn decode_from(&mut self, bytes: &[u8]) -> $crate::CodecResult<()> {
                    *self = $crate::cbor::from_slice(bytes)?;
                    Ok(())
                }
            }

            impl $crate::Encode for $ty {
                fn encode(&self) -> $crate::CodecResult<Vec<u8>> {
                    $crate::cbor::to_vec(self)
                }
            }
        )+
    };
}
