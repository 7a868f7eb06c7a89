//! Minimal PNG encoder.
//!
//! Produces exactly the stream the icon set needs: the 8-byte signature, an
//! IHDR declaring 8-bit RGBA with no interlacing, a single IDAT holding the
//! zlib-compressed scanlines (each prefixed with a zero filter byte), and
//! IEND. Chunks are framed as big-endian length + type + data + CRC-32 over
//! type and data.

use miniz_oxide::deflate::compress_to_vec_zlib;

use crate::error::{Error, Result};
use crate::render::PixelBuffer;

/// The fixed 8-byte PNG file signature.
pub const SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

// Highest miniz compression level ("uber"); the master icon compresses to a
// few tens of KB and this runs once per build.
const COMPRESSION_LEVEL: u8 = 10;

/// Encode a raw RGBA buffer as a complete PNG byte stream.
///
/// `pixels` must hold exactly `width * height * 4` bytes of row-major
/// interleaved RGBA; anything else is an [`Error::Encode`].
pub fn encode(width: u32, height: u32, pixels: &[u8]) -> Result<Vec<u8>> {
    if width == 0 || height == 0 {
        return Err(Error::Encode(format!(
            "zero-sized image ({width}x{height})"
        )));
    }
    let expected = width as usize * height as usize * 4;
    if pixels.len() != expected {
        return Err(Error::Encode(format!(
            "pixel buffer is {} bytes, expected {} for {width}x{height} RGBA",
            pixels.len(),
            expected
        )));
    }

    let mut out = Vec::with_capacity(pixels.len() / 4 + 128);
    out.extend_from_slice(&SIGNATURE);

    let mut ihdr = Vec::with_capacity(13);
    ihdr.extend_from_slice(&width.to_be_bytes());
    ihdr.extend_from_slice(&height.to_be_bytes());
    // bit depth 8, color type 6 (RGBA), deflate, adaptive filtering, no interlace
    ihdr.extend_from_slice(&[8, 6, 0, 0, 0]);
    write_chunk(&mut out, b"IHDR", &ihdr);

    // Scanlines with a leading filter-type byte of 0 (None)
    let stride = width as usize * 4;
    let mut raw = Vec::with_capacity((stride + 1) * height as usize);
    for row in pixels.chunks_exact(stride) {
        raw.push(0);
        raw.extend_from_slice(row);
    }
    write_chunk(&mut out, b"IDAT", &compress_to_vec_zlib(&raw, COMPRESSION_LEVEL));

    write_chunk(&mut out, b"IEND", &[]);
    Ok(out)
}

/// Encode a rendered buffer; convenience over [`encode`].
pub fn encode_buffer(buf: &PixelBuffer) -> Result<Vec<u8>> {
    encode(buf.width, buf.height, &buf.data)
}

fn write_chunk(out: &mut Vec<u8>, chunk_type: &[u8; 4], data: &[u8]) {
    out.extend_from_slice(&(data.len() as u32).to_be_bytes());
    out.extend_from_slice(chunk_type);
    out.extend_from_slice(data);
    out.extend_from_slice(&crc32(chunk_type, data).to_be_bytes());
}

// CRC-32 (the PNG/zlib polynomial) over chunk type + data.
fn crc32(chunk_type: &[u8; 4], data: &[u8]) -> u32 {
    let mut crc = 0xFFFF_FFFFu32;
    for &b in chunk_type.iter().chain(data.iter()) {
        crc ^= b as u32;
        for _ in 0..8 {
            crc = if crc & 1 != 0 {
                (crc >> 1) ^ 0xEDB8_8320
            } else {
                crc >> 1
            };
        }
    }
    !crc
}
