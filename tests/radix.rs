use mdhash::primitives::{
    Alphabet, AlphabetError, BASE2, BASE10, BASE16, BASE36, BASE58, DecodeError, Number, U256,
};

/// Deterministic pseudo-random words (splitmix64).
fn values(count: usize) -> Vec<u128> {
    let mut state = 0x9E37_79B9_7F4A_7C15u64;
    let mut next = move || {
        state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    };

    (0..count)
        .map(|i| {
            let wide = ((next() as u128) << 64) | next() as u128;
            // Mix in short values so leading-zero handling is exercised.
            wide >> (i % 128)
        })
        .collect()
}

fn number_of(value: u128) -> Number<4, u32> {
    Number::from_bytes(&value.to_le_bytes())
}

// -------------------------------------------------------
// 1. AGAINST THE STANDARD FORMATTERS
// -------------------------------------------------------

#[test]
fn base10_matches_display() {
    for value in values(300) {
        assert_eq!(number_of(value).encode(&BASE10), value.to_string());
    }
}

#[test]
fn base16_matches_lower_hex() {
    for value in values(300) {
        assert_eq!(number_of(value).encode(&BASE16), format!("{value:x}"));
    }
}

#[test]
fn base2_matches_binary() {
    for value in values(100) {
        assert_eq!(number_of(value).encode(&BASE2), format!("{value:b}"));
    }
}

// -------------------------------------------------------
// 2. ROUND TRIPS
// -------------------------------------------------------

#[test]
fn round_trip_every_alphabet() {
    for alphabet in [BASE2, BASE10, BASE16, BASE36, BASE58] {
        for value in values(100) {
            let n = number_of(value);
            let text = n.encode(&alphabet);

            assert_eq!(Number::<4, u32>::decode(&text, &alphabet), Ok(n), "{text}");
        }
    }
}

#[test]
fn round_trip_across_word_types() {
    for value in values(50) {
        let bytes = Number::<16, u8>::from_bytes(&value.to_le_bytes());
        let halves = Number::<8, u16>::from_bytes(&value.to_le_bytes());
        let longs = Number::<2, u64>::from_bytes(&value.to_le_bytes());

        let text = bytes.encode(&BASE58);

        assert_eq!(halves.encode(&BASE58), text);
        assert_eq!(longs.encode(&BASE58), text);
        assert_eq!(Number::<2, u64>::decode(&text, &BASE58), Ok(longs));
    }
}

#[test]
fn digest_sized_round_trip() {
    let mut n = U256::ZERO;

    for (i, byte) in n.as_bytes_mut().iter_mut().enumerate() {
        *byte = (i * 37 + 11) as u8;
    }

    let text = n.encode(&BASE36);
    assert_eq!(U256::decode(&text, &BASE36), Ok(n));
}

// -------------------------------------------------------
// 3. KNOWN VALUES
// -------------------------------------------------------

#[test]
fn zero_is_the_first_digit() {
    assert_eq!(Number::<4, u8>::ZERO.encode(&BASE10), "0");
    assert_eq!(Number::<4, u8>::ZERO.encode(&BASE58), "1");
}

#[test]
fn base58_digits() {
    let mut n = Number::<2, u32>::ZERO;

    n.add_scalar(57);
    assert_eq!(n.encode(&BASE58), "z");

    n.add_scalar(1);
    assert_eq!(n.encode(&BASE58), "21");
}

#[test]
fn base36_digits() {
    let n = Number::<2, u8>::from_words([35, 0]);
    assert_eq!(n.encode(&BASE36), "z");
    assert_eq!((n + 1).encode(&BASE36), "10");
}

#[test]
fn empty_text_decodes_to_zero() {
    assert_eq!(Number::<2, u16>::decode("", &BASE10), Ok(Number::ZERO));
}

#[test]
fn leading_zero_digits_are_accepted() {
    let n = Number::<2, u16>::decode("000123", &BASE10);

    assert_eq!(n, Ok(Number::from_words([123, 0])));
}

#[test]
fn oversized_text_wraps() {
    // 0x1_0000_0001 does not fit in 32 bits.
    let n = Number::<4, u8>::decode("100000001", &BASE16);

    assert_eq!(n, Ok(Number::from_words([1, 0, 0, 0])));
}

#[test]
fn from_str_parses_hex() {
    let n: Number<2, u16> = "1a2b".parse().unwrap();
    assert_eq!(n.words(), &[0x1a2b, 0]);

    let err = "1A2B".parse::<Number<2, u16>>().unwrap_err();
    assert_eq!(err, DecodeError::InvalidDigit { digit: 'A', position: 1 });
}

// -------------------------------------------------------
// 4. ERRORS
// -------------------------------------------------------

#[test]
fn invalid_digit_reports_position() {
    let err = Number::<4, u32>::decode("12g4", &BASE16).unwrap_err();

    assert_eq!(err, DecodeError::InvalidDigit { digit: 'g', position: 2 });
    assert_eq!(err.to_string(), "invalid digit 'g' at position 2");
}

#[test]
fn base58_rejects_ambiguous_characters() {
    for c in ['0', 'O', 'I', 'l'] {
        let text = format!("2{c}");

        assert_eq!(
            Number::<4, u32>::decode(&text, &BASE58),
            Err(DecodeError::InvalidDigit { digit: c, position: 1 })
        );
    }
}

#[test]
fn custom_alphabet() {
    let octal = Alphabet::new("01234567").unwrap();
    assert_eq!(octal.radix(), 8);

    let n = Number::<2, u16>::from_words([0o755, 0]);
    assert_eq!(n.encode(&octal), "755");
    assert_eq!(Number::decode("755", &octal), Ok(n));
}

#[test]
fn alphabet_validation() {
    assert_eq!(Alphabet::new(""), Err(AlphabetError::TooShort));
    assert_eq!(Alphabet::new("x"), Err(AlphabetError::TooShort));
    assert_eq!(Alphabet::new("abca"), Err(AlphabetError::DuplicateDigit('a')));

    assert_eq!(Alphabet::default(), BASE16);
    assert_eq!(BASE58.radix(), 58);
    assert_eq!(BASE36.position('z'), Some(35));
    assert_eq!(BASE10.position('a'), None);
}

#[test]
fn large_multibyte_alphabet() {
    let digits: String = (0x4E00u32..0x4E00 + 1000).filter_map(char::from_u32).collect();
    let alphabet = Alphabet::new(&digits).unwrap();

    assert_eq!(alphabet.radix(), 1000);
    assert_eq!(alphabet.position('\u{4E00}'), Some(0));
    assert_eq!(alphabet.position('\u{51E7}'), Some(999));

    for value in values(100) {
        let n = number_of(value);
        let text = n.encode(&alphabet);

        assert_eq!(Number::<4, u32>::decode(&text, &alphabet), Ok(n));
    }

    let n = Number::<2, u32>::from_words([1999, 0]);
    assert_eq!(n.encode(&alphabet), "\u{4E01}\u{51E7}");

    assert_eq!(
        Number::<4, u32>::decode("\u{4E01}x", &alphabet),
        Err(DecodeError::InvalidDigit { digit: 'x', position: 1 })
    );
}
