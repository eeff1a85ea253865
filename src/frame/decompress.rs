//! The frame driver: parses the header, walks the block stream, verifies
//! every checksum the header promises, and returns the assembled plaintext.

use std::hash::Hasher;

use twox_hash::XxHash32;

use super::header::FrameHeader;
use crate::block::decompress_block;
use crate::error::Error;
use crate::reader::LittleEndianReader;
use crate::xxh32::xxh32;

/// The high bit of a 32-bit block mark: set means the block that follows is
/// stored verbatim, clear means it's LZ4-compressed. The remaining 31 bits
/// are the block's byte length. A mark of exactly 0 is the EndMark.
const UNCOMPRESSED_BLOCK_FLAG: u32 = 0x8000_0000;

/// Decompresses a single LZ4 frame.
///
/// `input` must hold exactly one frame: magic number, frame descriptor,
/// data blocks, EndMark, and (if the descriptor calls for one) a content
/// checksum. Anything else - no magic number, truncated input, a bad
/// checksum, a dictionary ID, or an integer overflow in a block's length
/// fields - is reported as a typed [`Error`]; nothing panics, and no partial
/// output is returned on failure.
pub fn decompress_lz4_frame(input: &[u8]) -> Result<Vec<u8>, Error> {
    let mut reader = LittleEndianReader::new(input);
    let header = FrameHeader::parse(&mut reader)?;

    let mut output = Vec::new();
    if let Some(content_size) = header.content_size {
        // Already checked to fit in `usize` by `FrameHeader::parse`.
        output.reserve(content_size as usize);
    }

    let mut content_hasher = if header.content_checksum {
        Some(XxHash32::with_seed(0))
    } else {
        None
    };

    loop {
        let block_mark = reader.u32()?;
        if block_mark == 0 {
            break;
        }

        let is_uncompressed = block_mark & UNCOMPRESSED_BLOCK_FLAG != 0;
        let block_len = (block_mark & !UNCOMPRESSED_BLOCK_FLAG) as usize;

        // Reserves room for the block checksum (if any) and at least an
        // EndMark beyond it, rather than discovering a truncated trailer
        // one read at a time.
        let checksum_len = if header.block_checksums { 4 } else { 0 };
        if reader.bytes_left() < block_len + checksum_len + 4 {
            return Err(Error::Truncated);
        }

        let payload = reader.bytes(block_len)?;

        if header.block_checksums {
            let expected = reader.u32()?;
            if xxh32(payload) != expected {
                return Err(Error::ChecksumMismatch(None));
            }
        }

        let produced_start = output.len();
        if is_uncompressed {
            output.extend_from_slice(payload);
        } else {
            decompress_block(payload, &mut output)?;
        }

        if let Some(hasher) = content_hasher.as_mut() {
            hasher.write(&output[produced_start..]);
        }
    }

    if let Some(content_size) = header.content_size {
        if output.len() as u64 != content_size {
            return Err(Error::Corrupted(
                "declared content size does not match the produced length",
            ));
        }
    }

    if let Some(hasher) = content_hasher {
        let expected = reader.u32()?;
        if hasher.finish() as u32 != expected {
            return Err(Error::ChecksumMismatch(Some(output)));
        }
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Appends a stored (uncompressed) block to a hand-built frame.
    fn push_stored_block(frame: &mut Vec<u8>, payload: &[u8]) {
        let mark = UNCOMPRESSED_BLOCK_FLAG | payload.len() as u32;
        frame.extend_from_slice(&mark.to_le_bytes());
        frame.extend_from_slice(payload);
    }

    /// Builds a minimal valid frame descriptor (no optional fields) and
    /// returns it along with the frame bytes so far.
    fn frame_with_flags(flg: u8, bd: u8) -> Vec<u8> {
        let mut frame = vec![0x04, 0x22, 0x4d, 0x18];
        let mut descriptor = vec![flg, bd];
        let checksum = (xxh32(&descriptor) >> 8) as u8;
        frame.append(&mut descriptor);
        frame.push(checksum);
        frame
    }

    #[test]
    fn empty_frame_decodes_to_nothing() {
        let mut frame = frame_with_flags(0x60, 0x40);
        frame.extend_from_slice(&0u32.to_le_bytes()); // EndMark
        assert_eq!(decompress_lz4_frame(&frame).unwrap(), b"");
    }

    #[test]
    fn stored_block_round_trips() {
        let mut frame = frame_with_flags(0x60, 0x40);
        push_stored_block(&mut frame, b"Hello");
        frame.extend_from_slice(&0u32.to_le_bytes());
        assert_eq!(decompress_lz4_frame(&frame).unwrap(), b"Hello");
    }

    #[test]
    fn compressed_block_with_content_checksum() {
        // FLG 0x64: version 01 + content checksum bit.
        let mut frame = frame_with_flags(0x64, 0x40);
        // token 0x40 (literal len 4, no match), literals "AAAA".
        let block: &[u8] = &[0x40, b'A', b'A', b'A', b'A'];
        let mark = block.len() as u32; // high bit clear: compressed
        frame.extend_from_slice(&mark.to_le_bytes());
        frame.extend_from_slice(block);
        frame.extend_from_slice(&0u32.to_le_bytes()); // EndMark
        frame.extend_from_slice(&xxh32(b"AAAA").to_le_bytes());
        assert_eq!(decompress_lz4_frame(&frame).unwrap(), b"AAAA");
    }

    #[test]
    fn content_size_mismatch_is_corrupted() {
        // FLG 0x68: version 01 + content size bit.
        let mut frame = vec![0x04, 0x22, 0x4d, 0x18];
        let mut descriptor = vec![0x68u8, 0x40];
        descriptor.extend_from_slice(&10u64.to_le_bytes()); // claims 10 bytes
        let checksum = (xxh32(&descriptor) >> 8) as u8;
        frame.extend_from_slice(&descriptor);
        frame.push(checksum);
        push_stored_block(&mut frame, b"Hello"); // only 5 bytes produced
        frame.extend_from_slice(&0u32.to_le_bytes());
        let err = decompress_lz4_frame(&frame).unwrap_err();
        assert!(matches!(err, Error::Corrupted(_)));
    }

    #[test]
    fn dependent_blocks_share_one_growing_output() {
        let mut frame = frame_with_flags(0x40, 0x40); // version 01, independence bit clear: linked
        push_stored_block(&mut frame, b"hello XYZ");
        // token 0x00 (no literals, match base 0), offset 3 -> references "XYZ".
        let block: &[u8] = &[0x00, 0x03, 0x00];
        frame.extend_from_slice(&(block.len() as u32).to_le_bytes());
        frame.extend_from_slice(block);
        frame.extend_from_slice(&0u32.to_le_bytes());
        let out = decompress_lz4_frame(&frame).unwrap();
        assert_eq!(out, b"hello XYZXYZX");
    }

    #[test]
    fn truncated_frame_never_panics() {
        let frame = frame_with_flags(0x60, 0x40);
        for cut in 0..frame.len() {
            let result = decompress_lz4_frame(&frame[..cut]);
            assert!(result.is_err());
        }
    }

    #[test]
    fn bit_flip_in_content_checksum_is_detected() {
        let mut frame = frame_with_flags(0x64, 0x40);
        frame.extend_from_slice(&0u32.to_le_bytes());
        frame.extend_from_slice(&xxh32(b"").to_le_bytes());
        let checksum_pos = frame.len() - 1;
        frame[checksum_pos] ^= 0xFF;
        let err = decompress_lz4_frame(&frame).unwrap_err();
        assert!(matches!(err, Error::ChecksumMismatch(Some(_))));
    }
}
