//! LZ4 Block format.
//!
//! <https://github.com/lz4/lz4/blob/dev/doc/lz4_Block_format.md>
//!
//! A block is a sequence of `{ token, [ext literal len], literals, [offset,
//! ext match len] }` sequences. The token's high nibble is the literal
//! length (15 means "read more"), the low nibble is the match length minus
//! `MINMATCH` (again 15 means "read more"). The final sequence of a block
//! omits the offset and match: it is pure literals, and is recognized by the
//! input running out right after the literal copy.

pub(crate) mod decompress;

pub(crate) use decompress::decompress_block;

/// The minimum length of a match. A shorter back-reference would never pay
/// for the 3 bytes (token + offset) it costs to encode.
pub(crate) const MINMATCH: usize = 4;
