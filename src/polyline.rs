//! Flexible-polyline decoding
//!
//! Decodes the compact path encoding returned by the routing provider into
//! an ordered coordinate sequence. The format is a header (version varint,
//! then precision and third-dimension flags packed into a second varint)
//! followed by zigzag-encoded per-point deltas, five data bits per
//! character with a continuation bit.

use crate::error::PolylineError;
use crate::types::Coordinate;

/// Decode a flexible-polyline string into an ordered coordinate path.
///
/// Source order is preserved exactly; consecutive identical points are not
/// deduplicated. A third dimension, when present, is decoded and discarded
/// since the rendering surface draws flat paths.
pub fn decode(encoded: &str) -> Result<Vec<Coordinate>, PolylineError> {
    let mut reader = ChunkReader::new(encoded);

    let version = reader.unsigned()?.ok_or(PolylineError::Truncated)?;
    if version != 1 {
        return Err(PolylineError::UnsupportedVersion(version));
    }
    let header = reader.unsigned()?.ok_or(PolylineError::Truncated)?;
    let precision = (header & 0x0F) as i32;
    let third_dim = (header >> 4) & 0x07;
    let factor = 10f64.powi(precision);

    let mut lat = 0i64;
    let mut lng = 0i64;
    let mut path = Vec::new();
    while let Some(dlat) = reader.signed()? {
        lat = lat.checked_add(dlat).ok_or(PolylineError::Overflow)?;
        let dlng = reader.signed()?.ok_or(PolylineError::Truncated)?;
        lng = lng.checked_add(dlng).ok_or(PolylineError::Overflow)?;
        if third_dim != 0 {
            reader.signed()?.ok_or(PolylineError::Truncated)?;
        }
        path.push(Coordinate {
            lat: lat as f64 / factor,
            lng: lng as f64 / factor,
        });
    }
    Ok(path)
}

struct ChunkReader<'a> {
    bytes: std::slice::Iter<'a, u8>,
}

impl<'a> ChunkReader<'a> {
    fn new(encoded: &'a str) -> Self {
        Self {
            bytes: encoded.as_bytes().iter(),
        }
    }

    /// Read one unsigned varint: little-endian 5-bit chunks, 0x20 marks
    /// continuation. `Ok(None)` only at a clean end of input.
    fn unsigned(&mut self) -> Result<Option<u64>, PolylineError> {
        let mut value = 0u64;
        let mut shift = 0u32;
        loop {
            let Some(&byte) = self.bytes.next() else {
                return if shift == 0 {
                    Ok(None)
                } else {
                    Err(PolylineError::Truncated)
                };
            };
            let chunk = decode_char(byte)?;
            if shift >= 64 {
                return Err(PolylineError::Overflow);
            }
            value |= (chunk & 0x1F) << shift;
            if chunk & 0x20 == 0 {
                return Ok(Some(value));
            }
            shift += 5;
        }
    }

    fn signed(&mut self) -> Result<Option<i64>, PolylineError> {
        Ok(self.unsigned()?.map(|value| {
            let magnitude = (value >> 1) as i64;
            if value & 1 != 0 { !magnitude } else { magnitude }
        }))
    }
}

// Alphabet: A-Z, a-z, 0-9, '_', '-'.
fn decode_char(byte: u8) -> Result<u64, PolylineError> {
    let index = match byte {
        b'A'..=b'Z' => byte - b'A',
        b'a'..=b'z' => byte - b'a' + 26,
        b'0'..=b'9' => byte - b'0' + 52,
        b'_' => 62,
        b'-' => 63,
        other => return Err(PolylineError::InvalidCharacter(other as char)),
    };
    Ok(index as u64)
}
