//! LZ4 Frame format.
//!
//! <https://github.com/lz4/lz4/blob/dev/doc/lz4_Frame_format.md>
//!
//! ```text
//! MagicNb  F.Descriptor  Block...  EndMark  C.Checksum?
//! 4 bytes  3-15 bytes              4 bytes  0-4 bytes
//! ```

pub(crate) mod decompress;
pub(crate) mod header;

pub use decompress::decompress_lz4_frame;
