use quick_error::quick_error;

quick_error! {
    /// Everything that can go wrong while decoding an LZ4 frame.
    ///
    /// All variants are terminal: once one is returned, the `Vec<u8>` that was
    /// being assembled is discarded (with the sole exception of
    /// [`Error::ChecksumMismatch`], which carries the mismatching content so a
    /// caller can decide for itself whether to trust it).
    #[derive(Debug)]
    pub enum Error {
        /// The input ended before a complete frame, header, block, or trailer
        /// could be read.
        Truncated {
            display("the input ended before a complete LZ4 frame could be read")
        }
        /// The input is not a valid LZ4 frame: wrong magic number, invalid
        /// flag bits, a header/block-mark reserved bit set, an out-of-range
        /// match offset, or a content size that doesn't match what was
        /// produced.
        Corrupted(reason: &'static str) {
            display("corrupted LZ4 frame: {}", reason)
        }
        /// A header, block, or content XXH32 checksum did not match.
        ///
        /// `data` carries the decoded plaintext for a content-checksum
        /// mismatch, so a caller that wants lossy output anyway can still get
        /// at it; it is `None` for header and block checksum mismatches.
        ChecksumMismatch(data: Option<Vec<u8>>) {
            display("XXH32 checksum mismatch")
        }
        /// The frame requests something this decoder recognizes but does not
        /// implement: a dictionary ID, a content size too large for this
        /// host's address space, or a literal/match length whose unbounded
        /// extension overflowed the length accumulator.
        UnsupportedFeature(reason: &'static str) {
            display("unsupported LZ4 frame feature: {}", reason)
        }
    }
}
