//! Seam between robot descriptions and the caller's mesh loader.
//!
//! A description embeds each link mesh as a base64 string. Turning that into
//! something a renderer can draw is the caller's business; the model only
//! routes payloads through a [`MeshCodec`].

use std::convert::Infallible;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Converts between the embedded mesh payload and a renderer-side handle.
pub trait MeshCodec {
    /// Decoded mesh handle stored on each [`Link`](crate::Link).
    type Handle;
    /// Failure to turn a payload into a handle.
    type DecodeError: std::fmt::Display;
    /// Failure to turn a handle back into a payload.
    type EncodeError: std::fmt::Display;

    /// Decode a description's `mesh` payload.
    fn decode(&self, payload: &str) -> Result<Self::Handle, Self::DecodeError>;

    /// Encode a handle back into a `mesh` payload.
    fn encode(&self, handle: &Self::Handle) -> Result<String, Self::EncodeError>;
}

/// Raw mesh file bytes, uninterpreted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MeshBytes(pub Vec<u8>);

/// Codec that only strips the base64 layer and keeps the raw bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Base64MeshCodec;

impl MeshCodec for Base64MeshCodec {
    type Handle = MeshBytes;
    type DecodeError = base64::DecodeError;
    type EncodeError = Infallible;

    fn decode(&self, payload: &str) -> Result<MeshBytes, base64::DecodeError> {
        STANDARD.decode(payload.trim()).map(MeshBytes)
    }

    fn encode(&self, handle: &MeshBytes) -> Result<String, Infallible> {
        Ok(STANDARD.encode(&handle.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base64_round_trip() {
        let codec = Base64MeshCodec;
        let bytes = MeshBytes(b"solid cube\nendsolid cube\n".to_vec());
        let payload = codec.encode(&bytes).unwrap();
        assert_eq!(codec.decode(&payload).unwrap(), bytes);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let codec = Base64MeshCodec;
        assert_eq!(codec.decode("  AQID\n").unwrap(), MeshBytes(vec![1, 2, 3]));
    }

    #[test]
    fn malformed_payload_is_an_error() {
        let err: base64::DecodeError = Base64MeshCodec.decode("not base64!").unwrap_err();
        assert!(!err.to_string().is_empty());
    }

    #[test]
    fn encoding_cannot_fail() {
        let encoded: Result<String, Infallible> = Base64MeshCodec.encode(&MeshBytes(Vec::new()));
        let payload = encoded.unwrap_or_else(|never| match never {});
        assert_eq!(payload, "");
    }
}
