//! Base64 encoding for HTTP Basic credentials.
//!
//! Standard alphabet (`A–Z a–z 0–9 + /`) with `=` padding. Input is consumed in
//! 3-byte groups; a trailing group of one or two bytes is zero-filled and the
//! output padded to a multiple of four characters.

use super::error::Error;
use base64ct::{Base64, Encoding};
use core::fmt::Write;
use heapless::String;

/// Longest `key:secret` pair accepted for Basic credentials.
pub const MAX_CREDENTIALS_LEN: usize = 128;
/// Capacity of a formatted `Authorization` header value.
pub const AUTH_HEADER_LEN: usize = 256;

/// Number of characters produced for `n` input bytes: `ceil(n / 3) * 4`.
pub const fn encoded_len(n: usize) -> usize {
    n.div_ceil(3) * 4
}

/// Encode `input` into `out` and terminate it with a NUL byte.
///
/// `out` must hold `encoded_len(input.len()) + 1` bytes. A shorter buffer is
/// rejected with [`Error::BufferTooSmall`] before anything is written.
pub fn encode_into<'o>(input: &[u8], out: &'o mut [u8]) -> Result<&'o str, Error> {
    let len = encoded_len(input.len());
    if out.len() <= len {
        return Err(Error::BufferTooSmall);
    }
    let (text, rest) = out.split_at_mut(len);
    rest[0] = 0;
    Base64::encode(input, text).map_err(|_| Error::BufferTooSmall)
}

/// Encode `input` into a fixed-capacity string.
pub fn encode<const N: usize>(input: &[u8]) -> Result<String<N>, Error> {
    let mut buf = [0u8; N];
    let text = Base64::encode(input, &mut buf).map_err(|_| Error::BufferTooSmall)?;
    String::try_from(text).map_err(|_| Error::BufferTooSmall)
}

/// `Basic <base64(key:secret)>`, ready for an `Authorization` header.
pub fn basic_auth_header(key: &str, secret: &str) -> Result<String<AUTH_HEADER_LEN>, Error> {
    let mut credentials: String<MAX_CREDENTIALS_LEN> = String::new();
    write!(credentials, "{}:{}", key, secret).map_err(|_| Error::BufferTooSmall)?;

    let mut encoded = [0u8; AUTH_HEADER_LEN];
    let encoded = encode_into(credentials.as_bytes(), &mut encoded)?;

    let mut header = String::new();
    write!(header, "Basic {}", encoded).map_err(|_| Error::BufferTooSmall)?;
    Ok(header)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_vectors() {
        assert_eq!(encode::<8>(b"abc").unwrap().as_str(), "YWJj");
        assert_eq!(encode::<8>(b"ab").unwrap().as_str(), "YWI=");
        assert_eq!(encode::<8>(b"a").unwrap().as_str(), "YQ==");
        assert_eq!(encode::<8>(b"").unwrap().as_str(), "");
        assert_eq!(encode::<32>(b"foobar").unwrap().as_str(), "Zm9vYmFy");
        assert_eq!(encode::<32>(&[0xfb, 0xff, 0xfe]).unwrap().as_str(), "+//+");
    }

    #[test]
    fn output_length_is_padded_to_groups_of_four() {
        let input = [0x5au8; 64];
        for n in 0..input.len() {
            let text = encode::<128>(&input[..n]).unwrap();
            assert_eq!(text.len(), encoded_len(n));
            assert_eq!(text.len() % 4, 0);
            assert!(
                text.bytes()
                    .all(|b| b.is_ascii_alphanumeric() || b == b'+' || b == b'/' || b == b'=')
            );
            let padding = text.bytes().rev().take_while(|&b| b == b'=').count();
            assert_eq!(padding, (3 - n % 3) % 3);
        }
    }

    #[test]
    fn encode_into_writes_terminator() {
        let mut out = [0xffu8; 5];
        let text = encode_into(b"abc", &mut out).unwrap();
        assert_eq!(text, "YWJj");
        assert_eq!(out[4], 0);

        let mut out = [0xffu8; 1];
        assert_eq!(encode_into(b"", &mut out).unwrap(), "");
        assert_eq!(out[0], 0);
    }

    #[test]
    fn encode_into_rejects_short_buffer() {
        // Room for the text but not the terminator.
        let mut out = [0u8; 4];
        assert_eq!(encode_into(b"abc", &mut out), Err(Error::BufferTooSmall));
        assert_eq!(encode::<3>(b"abc"), Err(Error::BufferTooSmall));
    }

    #[test]
    fn basic_auth_header_format() {
        let header = basic_auth_header("Aladdin", "open sesame").unwrap();
        assert_eq!(header.as_str(), "Basic QWxhZGRpbjpvcGVuIHNlc2FtZQ==");
    }

    #[test]
    fn oversized_credentials_are_rejected() {
        let key = [b'k'; 100];
        let key = core::str::from_utf8(&key).unwrap();
        assert_eq!(basic_auth_header(key, key), Err(Error::BufferTooSmall));
    }
}
