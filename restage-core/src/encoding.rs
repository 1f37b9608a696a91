//! Encoding transcoders for the supported manifest encodings.
//!
//! Each supported encoding is a `Transcoder` implementation: a pure,
//! stateless, bidirectional mapping between raw file bytes and Unicode text.
//! Implementations are selected by [`transcoder_for`], a stage-free lookup
//! on the identifier string carried by a manifest entry.
//!
//! License: MIT OR Apache-2.0

use encoding_rs::EUC_KR;
use thiserror::Error;

/// Failure modes of a transcoder, independent of any file path.
#[derive(Error, Debug)]
pub enum TranscodeError {
    #[error("byte sequence is not valid {0}")]
    Malformed(&'static str),

    #[error("text contains characters not representable in {0}")]
    Unmappable(&'static str),
}

/// Bidirectional byte/text mapping for one encoding.
pub trait Transcoder: Send + Sync {
    /// The identifier as it appears in the manifest.
    fn name(&self) -> &'static str;

    /// Decodes raw file bytes into text. Strict: malformed input is an
    /// error, never replaced with substitution characters.
    fn decode(&self, bytes: &[u8]) -> Result<String, TranscodeError>;

    /// Encodes text back into file bytes for this encoding.
    fn encode(&self, text: &str) -> Result<Vec<u8>, TranscodeError>;
}

/// Looks up the transcoder for a manifest encoding identifier.
///
/// Returns `None` for identifiers outside the supported set; the caller
/// decides how to report that against its entry.
pub fn transcoder_for(name: &str) -> Option<Box<dyn Transcoder>> {
    match name {
        "utf8" => Some(Box::new(Utf8)),
        "euckr" => Some(Box::new(EucKr)),
        "utf16bom" => Some(Box::new(Utf16LeBom)),
        _ => None,
    }
}

/// Plain text. Decode validates UTF-8; encode is an identity byte copy.
pub struct Utf8;

impl Transcoder for Utf8 {
    fn name(&self) -> &'static str {
        "utf8"
    }

    fn decode(&self, bytes: &[u8]) -> Result<String, TranscodeError> {
        String::from_utf8(bytes.to_vec()).map_err(|_| TranscodeError::Malformed(self.name()))
    }

    fn encode(&self, text: &str) -> Result<Vec<u8>, TranscodeError> {
        Ok(text.as_bytes().to_vec())
    }
}

/// Legacy Korean 8-bit (EUC-KR, windows-949 superset).
pub struct EucKr;

impl Transcoder for EucKr {
    fn name(&self) -> &'static str {
        "euckr"
    }

    fn decode(&self, bytes: &[u8]) -> Result<String, TranscodeError> {
        EUC_KR
            .decode_without_bom_handling_and_without_replacement(bytes)
            .map(|cow| cow.into_owned())
            .ok_or(TranscodeError::Malformed(self.name()))
    }

    fn encode(&self, text: &str) -> Result<Vec<u8>, TranscodeError> {
        let (out, _, had_unmappable) = EUC_KR.encode(text);
        if had_unmappable {
            return Err(TranscodeError::Unmappable(self.name()));
        }
        Ok(out.into_owned())
    }
}

/// UTF-16 little-endian with byte-order mark.
///
/// Decoding honors a leading BOM (FF FE selects little-endian, FE FF big-
/// endian) and defaults to little-endian when none is present. Encoding
/// always emits a little-endian BOM.
pub struct Utf16LeBom;

impl Transcoder for Utf16LeBom {
    fn name(&self) -> &'static str {
        "utf16bom"
    }

    fn decode(&self, bytes: &[u8]) -> Result<String, TranscodeError> {
        let (payload, big_endian) = match bytes {
            [0xFF, 0xFE, rest @ ..] => (rest, false),
            [0xFE, 0xFF, rest @ ..] => (rest, true),
            _ => (bytes, false),
        };
        if payload.len() % 2 != 0 {
            return Err(TranscodeError::Malformed(self.name()));
        }
        let units: Vec<u16> = payload
            .chunks_exact(2)
            .map(|pair| {
                if big_endian {
                    u16::from_be_bytes([pair[0], pair[1]])
                } else {
                    u16::from_le_bytes([pair[0], pair[1]])
                }
            })
            .collect();
        String::from_utf16(&units).map_err(|_| TranscodeError::Malformed(self.name()))
    }

    fn encode(&self, text: &str) -> Result<Vec<u8>, TranscodeError> {
        let mut out = Vec::with_capacity(2 + text.len() * 2);
        out.extend_from_slice(&[0xFF, 0xFE]);
        for unit in text.encode_utf16() {
            out.extend_from_slice(&unit.to_le_bytes());
        }
        Ok(out)
    }
}
