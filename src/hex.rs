//! Conversion between 4-bit nibbles and ASCII hexadecimal digits.

const DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Returns the lowercase ASCII hexadecimal digit of a nibble.
///
/// Only the lower four bits of `nibble` are significant.
///
/// # Examples
///
/// ```rust
/// use uuid_rfc::hex::encode_nibble;
///
/// assert_eq!(encode_nibble(0x0), b'0');
/// assert_eq!(encode_nibble(0xb), b'b');
/// ```
pub const fn encode_nibble(nibble: u8) -> u8 {
    debug_assert!(nibble < 16);
    DIGITS[(nibble & 15) as usize]
}

/// Returns the value of an ASCII hexadecimal digit, or `None` if `digit` is not in
/// `[0-9a-fA-F]`.
///
/// # Examples
///
/// ```rust
/// use uuid_rfc::hex::decode_digit;
///
/// assert_eq!(decode_digit(b'7'), Some(7));
/// assert_eq!(decode_digit(b'F'), Some(15));
/// assert_eq!(decode_digit(b'g'), None);
/// ```
pub const fn decode_digit(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        _ => None,
    }
}

/// Writes two digits per byte of `src` into `dst`, which must be twice as long.
pub(crate) fn encode_into(src: &[u8], dst: &mut [u8]) {
    debug_assert_eq!(src.len() * 2, dst.len());
    for (e, pair) in src.iter().zip(dst.chunks_exact_mut(2)) {
        pair[0] = encode_nibble(e >> 4);
        pair[1] = encode_nibble(e & 15);
    }
}

/// Reads pairs of digits from `src` into `dst`, which must be half as long, failing on the first
/// non-hex digit.
pub(crate) fn decode_into(src: &[u8], dst: &mut [u8]) -> Option<()> {
    debug_assert_eq!(src.len(), dst.len() * 2);
    for (e, pair) in dst.iter_mut().zip(src.chunks_exact(2)) {
        *e = (decode_digit(pair[0])? << 4) | decode_digit(pair[1])?;
    }
    Some(())
}

#[cfg(test)]
mod tests {
    use super::{decode_digit, decode_into, encode_into, encode_nibble};

    /// Encodes every nibble to its lowercase digit
    #[test]
    fn encodes_every_nibble_to_its_lowercase_digit() {
        let digits: Vec<u8> = (0..16).map(encode_nibble).collect();
        assert_eq!(digits, b"0123456789abcdef");
    }

    /// Decodes digits case-insensitively
    #[test]
    fn decodes_digits_case_insensitively() {
        for n in 0..16u8 {
            let c = encode_nibble(n);
            assert_eq!(decode_digit(c), Some(n));
            assert_eq!(decode_digit(c.to_ascii_uppercase()), Some(n));
        }
    }

    /// Rejects bytes outside the hex alphabet
    #[test]
    fn rejects_bytes_outside_the_hex_alphabet() {
        for c in (0..=255u8).filter(|c| !c.is_ascii_hexdigit()) {
            assert_eq!(decode_digit(c), None, "byte {}", c);
        }
    }

    /// Encodes and decodes byte buffers
    #[test]
    fn encodes_and_decodes_byte_buffers() {
        let src = [0x00, 0x7f, 0x80, 0xff, 0x3c];
        let mut text = [0u8; 10];
        encode_into(&src, &mut text);
        assert_eq!(&text, b"007f80ff3c");

        let mut dst = [0u8; 5];
        assert_eq!(decode_into(b"007F80fF3c", &mut dst), Some(()));
        assert_eq!(dst, src);
        assert_eq!(decode_into(b"007f80ff3x", &mut dst), None);
    }
}
