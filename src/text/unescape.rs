/// Decodes backslash escape sequences in `buf` in place and returns the decoded length.
///
/// The buffer is scanned once, left to right; the write position never passes the read position,
/// so decoding happens entirely within the existing storage. A backslash consumes the byte after
/// it:
///
/// | Sequence | Result |
/// |-|-|
/// | `\e` | 0x1B (escape) |
/// | `\a` | 0x07 (bell) |
/// | `\b` | 0x08 (backspace) |
/// | `\n` | 0x0A (line feed) |
/// | `\r` | 0x0D (carriage return) |
/// | `\t` | 0x09 (tab) |
/// | anything else | the byte itself, backslash dropped |
///
/// So `\\` decodes to a single backslash and `\"` to a bare quote. A backslash that is the final
/// byte has nothing to consume and is kept as a literal backslash. All other bytes are copied
/// through unchanged, which means valid UTF-8 input stays valid: a backslash never occurs inside
/// a multi-byte sequence and every mapped result is ASCII.
///
/// Each escape sequence collapses two bytes into one, so the returned length is at most
/// `buf.len()`. Bytes past the returned length are leftover input with no further meaning.
pub fn unescape_in_place(buf: &mut [u8]) -> usize {
    let mut r = 0;
    let mut w = 0;

    while r < buf.len() {
        let mut byte = buf[r];

        if byte == b'\\' && r + 1 < buf.len() {
            r += 1;
            byte = match buf[r] {
                b'e' => 0x1b,
                b'a' => 0x07,
                b'b' => 0x08,
                b'n' => b'\n',
                b'r' => b'\r',
                b't' => b'\t',
                // Unrecognized sequences keep the escaped byte.
                other => other,
            };
        }

        buf[w] = byte;
        r += 1;
        w += 1;
    }

    w
}

/// Decodes backslash escape sequences in `s` in place, truncating it to the decoded length,
/// which is also returned.
///
/// See [`unescape_in_place`] for the sequence table and edge cases. Unlike the raw version, the
/// truncation here guarantees no leftover bytes remain visible past the decoded content.
///
/// # Examples
/// ```
/// # use utility_lib::text::unescape;
/// let mut s = String::from("a\\nb");
/// assert_eq!(unescape(&mut s), 3);
/// assert_eq!(s, "a\nb");
/// ```
pub fn unescape(s: &mut String) -> usize {
    // SAFETY: The decoder only collapses ASCII sequences into single ASCII bytes and copies
    // everything else verbatim, so the truncated buffer remains valid UTF-8.
    let buf = unsafe { s.as_mut_vec() };
    let len = unescape_in_place(buf);
    buf.truncate(len);
    len
}
