/*! A pure Rust LZ4 frame decompressor.

Turns one [LZ4 frame](https://github.com/lz4/lz4/blob/dev/doc/lz4_Frame_format.md)
into its original bytes, or a typed [`Error`] explaining why it couldn't.
Malformed, truncated, and checksum-failing input are all rejected without
panicking.

# Example
```
use lz4_frame_decoder::decompress_lz4_frame;

// A frame holding the empty string: magic, frame descriptor, EndMark.
let frame = [0x04, 0x22, 0x4d, 0x18, 0x60, 0x40, 0x82, 0x00, 0x00, 0x00, 0x00];
assert_eq!(decompress_lz4_frame(&frame).unwrap(), b"");
```

# Scope

This crate only decompresses. It does not encode, and it does not implement
skippable frames, the legacy frame format, multi-frame concatenation, or
preset dictionaries - all recognized by their absence (the ones with a
distinguishing magic number are rejected as corrupted input, rather than
silently misread). See [`Error::UnsupportedFeature`] for the handful of
frame features this crate recognizes but declines to implement.
*/

mod block;
mod error;
mod frame;
mod reader;
mod xxh32;

pub use error::Error;
pub use frame::decompress_lz4_frame;
