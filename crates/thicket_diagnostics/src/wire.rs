//! Binary framing of diagnostics for hand-off between parallel processes.
//!
//! A frame is a 4-byte magic, a little-endian `u16` format version, and the
//! bincode-encoded diagnostic. The aggregating process decodes the frame and
//! renders it exactly as the worker would have.

use crate::diagnostic::Diagnostic;

/// Magic bytes identifying a diagnostic frame.
pub const WIRE_MAGIC: [u8; 4] = *b"THKD";

/// Current frame format version.
pub const WIRE_FORMAT_VERSION: u16 = 1;

const HEADER_LEN: usize = WIRE_MAGIC.len() + 2;

/// Errors that can occur while framing or unframing a diagnostic.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// The diagnostic could not be encoded.
    #[error("failed to encode diagnostic: {0}")]
    Encode(#[from] bincode::error::EncodeError),

    /// The payload could not be decoded.
    #[error("failed to decode diagnostic: {0}")]
    Decode(#[from] bincode::error::DecodeError),

    /// The frame is shorter than its header or does not start with [`WIRE_MAGIC`].
    #[error("not a diagnostic frame")]
    BadMagic,

    /// The frame was written by an incompatible version.
    #[error("unsupported diagnostic frame version {0}")]
    UnsupportedVersion(u16),

    /// Bytes remained after the diagnostic payload.
    #[error("{0} trailing bytes after diagnostic frame")]
    TrailingBytes(usize),
}

/// Encodes a diagnostic into a self-describing frame.
pub fn encode(diag: &Diagnostic) -> Result<Vec<u8>, WireError> {
    let payload = bincode::serde::encode_to_vec(diag, bincode::config::standard())?;
    let mut frame = Vec::with_capacity(HEADER_LEN + payload.len());
    frame.extend_from_slice(&WIRE_MAGIC);
    frame.extend_from_slice(&WIRE_FORMAT_VERSION.to_le_bytes());
    frame.extend_from_slice(&payload);
    Ok(frame)
}

/// Decodes a frame produced by [`encode`].
pub fn decode(frame: &[u8]) -> Result<Diagnostic, WireError> {
    if frame.len() < HEADER_LEN || frame[..WIRE_MAGIC.len()] != WIRE_MAGIC {
        return Err(WireError::BadMagic);
    }
    let version = u16::from_le_bytes([frame[4], frame[5]]);
    if version != WIRE_FORMAT_VERSION {
        return Err(WireError::UnsupportedVersion(version));
    }

    let payload = &frame[HEADER_LEN..];
    let (diag, read): (Diagnostic, usize) =
        bincode::serde::decode_from_slice(payload, bincode::config::standard())?;
    if read != payload.len() {
        return Err(WireError::TrailingBytes(payload.len() - read));
    }
    Ok(diag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use thicket_common::NodeKind;
    use thicket_source::CodeLocation;

    #[test]
    fn frame_preserves_diagnostic() {
        let diag = catalog::missing_body_function(CodeLocation::new("suite_test.rs", 42), NodeKind::It);
        let frame = encode(&diag).unwrap();
        assert_eq!(&frame[..4], b"THKD");
        assert_eq!(decode(&frame).unwrap(), diag);
    }

    #[test]
    fn absent_location_survives() {
        let diag = catalog::aggregated_report_unavailable_due_to_process_disappearing();
        let back = decode(&encode(&diag).unwrap()).unwrap();
        assert!(back.location().is_absent());
        assert_eq!(back.render(false), diag.render(false));
    }

    #[test]
    fn rejects_foreign_bytes() {
        assert!(matches!(decode(b"nope"), Err(WireError::BadMagic)));
        assert!(matches!(decode(b"XXXX\x01\x00abc"), Err(WireError::BadMagic)));
    }

    #[test]
    fn rejects_other_versions() {
        let mut frame = encode(&catalog::rerunning_suite()).unwrap();
        frame[4] = 9;
        assert!(matches!(
            decode(&frame),
            Err(WireError::UnsupportedVersion(9))
        ));
    }

    #[test]
    fn rejects_trailing_bytes() {
        let mut frame = encode(&catalog::rerunning_suite()).unwrap();
        frame.extend_from_slice(&[0, 0]);
        assert!(matches!(decode(&frame), Err(WireError::TrailingBytes(2))));
    }

    #[test]
    fn rejects_truncated_payload() {
        let frame = encode(&catalog::rerunning_suite()).unwrap();
        let truncated = &frame[..frame.len() - 3];
        assert!(matches!(decode(truncated), Err(WireError::Decode(_))));
    }
}
