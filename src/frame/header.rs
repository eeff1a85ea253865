//! The LZ4 Frame Descriptor: `FLG BD [ContentSize] [DictionaryID] HC`.

use crate::error::Error;
use crate::reader::LittleEndianReader;
use crate::xxh32::xxh32;

/// `0x184D2204`, little-endian on the wire. Skippable frames
/// (`0x184D2A50`..=`0x184D2A5F`) and the legacy frame magic (`0x184C2102`)
/// are both rejected by this check, since neither is implemented here.
pub(crate) const MAGIC_NUMBER: u32 = 0x184D2204;

mod flg {
    pub const VERSION_MASK: u8 = 0b1100_0000;
    pub const SUPPORTED_VERSION: u8 = 0b0100_0000;
    pub const RESERVED_BIT: u8 = 0b0000_0010;
    pub const INDEPENDENT_BLOCKS: u8 = 0b0010_0000;
    pub const BLOCK_CHECKSUMS: u8 = 0b0001_0000;
    pub const CONTENT_SIZE: u8 = 0b0000_1000;
    pub const CONTENT_CHECKSUM: u8 = 0b0000_0100;
    pub const DICTIONARY_ID: u8 = 0b0000_0001;
}

mod bd {
    /// Reserved bits: the high bit and the low nibble. Bits 6..4 (the Block
    /// Maximum Size field) are deliberately excluded from this mask - this
    /// decoder parses them but never rejects or enforces them.
    pub const RESERVED_MASK: u8 = 0b1000_1111;
    pub const BLOCK_SIZE_MASK: u8 = 0b0111_0000;
    pub const BLOCK_SIZE_SHIFT: u8 = 4;
}

/// The declared upper bound on an individual block's uncompressed size.
///
/// Parsed for completeness and `Debug` output only: per this crate's design
/// notes, a block's actual declared size is never compared against it. The
/// decoder allocates however much output a block turns out to need.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BlockSize {
    Max64KB,
    Max256KB,
    Max1MB,
    Max4MB,
    /// One of the three values (0..=3) the format reserves for future block
    /// sizes. Not a format violation by itself - `bd::RESERVED_MASK` doesn't
    /// cover these bits - just unimplemented as a concrete size.
    Reserved(u8),
}

impl BlockSize {
    fn from_field(value: u8) -> BlockSize {
        match value {
            4 => BlockSize::Max64KB,
            5 => BlockSize::Max256KB,
            6 => BlockSize::Max1MB,
            7 => BlockSize::Max4MB,
            other => BlockSize::Reserved(other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BlockMode {
    Independent,
    Linked,
}

/// The parsed Frame Descriptor, immutable for the rest of the decode.
#[derive(Debug)]
pub(crate) struct FrameHeader {
    pub(crate) content_size: Option<u64>,
    pub(crate) block_size: BlockSize,
    pub(crate) block_mode: BlockMode,
    pub(crate) block_checksums: bool,
    pub(crate) content_checksum: bool,
}

impl FrameHeader {
    /// Parses the magic number and frame descriptor from `reader`, leaving
    /// the reader positioned at the first block mark.
    pub(crate) fn parse(reader: &mut LittleEndianReader<'_>) -> Result<FrameHeader, Error> {
        let magic = reader.u32()?;
        if magic != MAGIC_NUMBER {
            return Err(Error::Corrupted("wrong magic number"));
        }

        let header_start = reader.offset();

        let flg = reader.u8()?;
        if flg & flg::VERSION_MASK != flg::SUPPORTED_VERSION {
            return Err(Error::Corrupted("unsupported frame version"));
        }
        if flg & flg::RESERVED_BIT != 0 {
            return Err(Error::Corrupted("reserved FLG bit is set"));
        }

        let block_mode = if flg & flg::INDEPENDENT_BLOCKS != 0 {
            BlockMode::Independent
        } else {
            BlockMode::Linked
        };
        let block_checksums = flg & flg::BLOCK_CHECKSUMS != 0;
        let content_size_present = flg & flg::CONTENT_SIZE != 0;
        let content_checksum = flg & flg::CONTENT_CHECKSUM != 0;
        let dict_id_present = flg & flg::DICTIONARY_ID != 0;

        let bd = reader.u8()?;
        if bd & bd::RESERVED_MASK != 0 {
            return Err(Error::Corrupted("reserved BD bits are set"));
        }
        let block_size = BlockSize::from_field((bd & bd::BLOCK_SIZE_MASK) >> bd::BLOCK_SIZE_SHIFT);

        let content_size = if content_size_present {
            let size = reader.u64()?;
            if size > usize::MAX as u64 {
                return Err(Error::UnsupportedFeature(
                    "content size exceeds the host's addressable length",
                ));
            }
            Some(size)
        } else {
            None
        };

        if dict_id_present {
            return Err(Error::UnsupportedFeature("dictionary ID present"));
        }

        let header_bytes = reader.consumed_since(header_start);
        let expected_checksum = (xxh32(header_bytes) >> 8) as u8;
        let actual_checksum = reader.u8()?;
        if actual_checksum != expected_checksum {
            return Err(Error::Corrupted("header checksum mismatch"));
        }

        Ok(FrameHeader {
            content_size,
            block_size,
            block_mode,
            block_checksums,
            content_checksum,
        })
    }
}
