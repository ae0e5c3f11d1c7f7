//! Behavioral properties of the register and the cipher.
//!
//! These tests pin the contract rather than specific values:
//! determinism, reset idempotence, encode/decode symmetry, failure
//! atomicity, and the observational idempotence of period checks.
//!
//! Coverage:
//! - `Lfsr` determinism and reset behavior
//! - `Css` roundtrips across register configurations
//! - Malformed-message handling
//! - `check_period` interleaved with keystream generation

use csscrypt::{Css, CssCryptError, CyclePolicy, Lfsr};

/// Register configurations exercised by the roundtrip tests:
/// (size, seed, taps).
const CONFIGS: [(usize, u64, &[usize]); 4] = [
    (8, 0b1001_0110, &[2, 3, 4]),
    (17, 1 << 16, &[14, 0]),
    (25, 1 << 24, &[12, 4, 3, 0]),
    (5, 0b1_0111, &[2]),
];

fn build_lfsr(config: (usize, u64, &[usize])) -> Lfsr {
    let (size, seed, taps) = config;
    Lfsr::from_value(size, seed, taps).unwrap()
}

fn build_cipher(a: (usize, u64, &[usize]), b: (usize, u64, &[usize])) -> Css {
    Css::new(build_lfsr(a), build_lfsr(b))
}

// ═══════════════════════════════════════════════════════════════════════
// Register determinism and reset
// ═══════════════════════════════════════════════════════════════════════

/// Two registers with the same configuration emit the same bits and
/// reach the same state.
#[test]
fn identical_configs_emit_identical_streams() {
    for config in CONFIGS {
        let mut first = build_lfsr(config);
        let mut second = build_lfsr(config);
        for step in 0..256 {
            assert_eq!(
                first.advance(),
                second.advance(),
                "divergence at step {} for size {}",
                step,
                config.0
            );
        }
        assert_eq!(first.state(), second.state());
    }
}

/// Reset followed by k advances matches a freshly built register.
#[test]
fn reset_is_equivalent_to_reconstruction() {
    for config in CONFIGS {
        let mut used = build_lfsr(config);
        for _ in 0..99 {
            used.advance();
        }
        used.reset();

        let mut fresh = build_lfsr(config);
        for _ in 0..64 {
            assert_eq!(used.advance(), fresh.advance());
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Cipher symmetry
// ═══════════════════════════════════════════════════════════════════════

/// decode(encode(m)) == m across register configurations and messages,
/// including messages long enough to wrap the smaller registers.
#[test]
fn roundtrip_across_configurations() {
    let messages = [
        "00",
        "ff",
        "deadbeef",
        "0123456789abcdef",
        "000000000000000000000000",
        "a5a5a5a5a5a5a5a5a5a5a5a5a5a5a5a5a5a5a5a5",
    ];
    for a in CONFIGS {
        for b in CONFIGS {
            let mut cipher = build_cipher(a, b);
            for message in messages {
                let ciphertext = cipher.encode(message).unwrap();
                assert_eq!(
                    cipher.decode(&ciphertext).unwrap(),
                    message,
                    "roundtrip failed for sizes {}/{} message {}",
                    a.0,
                    b.0,
                    message
                );
            }
        }
    }
}

/// Two ciphers with the same configuration interoperate: one encodes,
/// the other decodes.
#[test]
fn separate_instances_interoperate() {
    let mut encoder = build_cipher(CONFIGS[1], CONFIGS[2]);
    let mut decoder = build_cipher(CONFIGS[1], CONFIGS[2]);
    let ciphertext = encoder.encode("48656c6c6f21").unwrap();
    assert_eq!(decoder.decode(&ciphertext).unwrap(), "48656c6c6f21");
}

/// Ciphertext is lowercase hex of the same length as the message.
#[test]
fn ciphertext_format() {
    let mut cipher = build_cipher(CONFIGS[0], CONFIGS[3]);
    let ciphertext = cipher.encode("00FFA0b1").unwrap();
    assert_eq!(ciphertext.len(), 8);
    assert!(ciphertext
        .chars()
        .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
}

// ═══════════════════════════════════════════════════════════════════════
// Malformed messages
// ═══════════════════════════════════════════════════════════════════════

/// Odd-length and non-hex messages are rejected without touching the
/// cipher: the next successful encode matches a fresh instance.
#[test]
fn malformed_messages_are_atomic_failures() {
    let mut cipher = build_cipher(CONFIGS[1], CONFIGS[2]);
    assert_eq!(cipher.encode("f").unwrap_err(), CssCryptError::OddLength);
    assert_eq!(
        cipher.encode("0x42").unwrap_err(),
        CssCryptError::NonHexCharacter
    );
    assert_eq!(
        cipher.decode("ffgg").unwrap_err(),
        CssCryptError::NonHexCharacter
    );

    let mut fresh = build_cipher(CONFIGS[1], CONFIGS[2]);
    assert_eq!(
        cipher.encode("cafebabe").unwrap(),
        fresh.encode("cafebabe").unwrap()
    );
}

// ═══════════════════════════════════════════════════════════════════════
// Period checks do not perturb the keystream
// ═══════════════════════════════════════════════════════════════════════

/// Running period checks between messages leaves the ciphertext
/// unchanged.
#[test]
fn period_check_does_not_change_ciphertext() {
    let mut checked = Lfsr::from_value(8, 0b1001_0110, &[2, 3, 4]).unwrap();
    checked.check_period();
    checked.check_period_with(CyclePolicy::SeedOnly);
    checked.check_period();
    let mut cipher = Css::new(checked, build_lfsr(CONFIGS[3]));
    let with_checks = cipher.encode("746573740a").unwrap();

    let mut plain = build_cipher(CONFIGS[0], CONFIGS[3]);
    assert_eq!(plain.encode("746573740a").unwrap(), with_checks);
}

/// A mid-message register survives a period check unperturbed.
#[test]
fn period_check_restores_mid_stream_position() {
    let mut lfsr = build_lfsr(CONFIGS[0]);
    let mut reference = build_lfsr(CONFIGS[0]);
    for _ in 0..5 {
        lfsr.advance();
        reference.advance();
    }
    lfsr.check_period();
    for _ in 0..32 {
        assert_eq!(lfsr.advance(), reference.advance());
    }
}
