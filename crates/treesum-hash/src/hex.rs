use crate::HashError;

/// Lookup table: ASCII byte → nibble value (255 = invalid).
const HEX_DECODE: [u8; 256] = {
    let mut table = [255u8; 256];
    let mut i = 0u8;
    loop {
        match i {
            b'0'..=b'9' => table[i as usize] = i - b'0',
            b'a'..=b'f' => table[i as usize] = i - b'a' + 10,
            b'A'..=b'F' => table[i as usize] = i - b'A' + 10,
            _ => {}
        }
        if i == 255 {
            break;
        }
        i += 1;
    }
    table
};

const HEX_ENCODE: &[u8; 16] = b"0123456789abcdef";

/// Hex-encode `bytes` to a new lowercase `String`.
pub fn hex_to_string(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for &b in bytes {
        out.push(HEX_ENCODE[(b >> 4) as usize] as char);
        out.push(HEX_ENCODE[(b & 0x0f) as usize] as char);
    }
    out
}

/// Decode a hex string into `buf`. The hex string length must be exactly `buf.len() * 2`.
pub fn hex_decode(hex: &str, buf: &mut [u8]) -> Result<(), HashError> {
    let hex = hex.as_bytes();
    if hex.len() != buf.len() * 2 {
        return Err(HashError::InvalidHexLength {
            expected: buf.len() * 2,
            actual: hex.len(),
        });
    }
    for (i, pair) in hex.chunks_exact(2).enumerate() {
        let hi = HEX_DECODE[pair[0] as usize];
        let lo = HEX_DECODE[pair[1] as usize];
        if hi == 255 {
            return Err(HashError::InvalidHex {
                position: i * 2,
                character: pair[0] as char,
            });
        }
        if lo == 255 {
            return Err(HashError::InvalidHex {
                position: i * 2 + 1,
                character: pair[1] as char,
            });
        }
        buf[i] = (hi << 4) | lo;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_is_lowercase() {
        assert_eq!(hex_to_string(&[0xde, 0xad, 0xbe, 0xef, 0x00, 0xff]), "deadbeef00ff");
    }

    #[test]
    fn decode_mixed_case() {
        let mut buf = [0u8; 4];
        hex_decode("DeAdBeEf", &mut buf).unwrap();
        assert_eq!(buf, [0xde, 0xad, 0xbe, 0xef]);
    }

    #[test]
    fn decode_invalid_char() {
        let mut buf = [0u8; 4];
        let err = hex_decode("deadgoof", &mut buf).unwrap_err();
        match err {
            HashError::InvalidHex {
                position: 4,
                character: 'g',
            } => {}
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn decode_length_mismatch() {
        let mut buf = [0u8; 2];
        let err = hex_decode("abc", &mut buf).unwrap_err();
        assert!(matches!(err, HashError::InvalidHexLength { expected: 4, actual: 3 }));
    }
}
