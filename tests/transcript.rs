// SPDX short identifier: Unlicense

use merlin::Transcript;

use rct_bulletproofs::{
    common::*,
    constants::BULLETPROOF_DOMAIN_TAG,
    transcript::TranscriptProtocol
};

fn digest32(transcript: &mut Transcript) -> String {
    let mut buf = [0u8; 32];
    transcript.challenge_bytes(b"digest32", &mut buf);
    return hex::encode(buf)
}

#[test]
fn domain_separator_test() {
    let mut transcript = Transcript::new(BULLETPROOF_DOMAIN_TAG);
    transcript.rangeproof_domain_sep(64, 64);
    assert_eq!(digest32(&mut transcript),
        "fdb12c0aa082b37704c2188b44c6ebe27c35263d49f86abb56221b7376408930");

    //extracting bytes changes the state, so the separator now yields a different digest
    let mut transcript = Transcript::new(BULLETPROOF_DOMAIN_TAG);
    assert_eq!(digest32(&mut transcript),
        "b8ad943d1e31c5c4a95a957ac92e2f058818f64773503c51357268b25af27422");
    transcript.rangeproof_domain_sep(64, 64);
    assert_eq!(digest32(&mut transcript),
        "1863740161d2ec5b8847136c8ff413aced585a3fc58d5f8d3645e664c784954e");
}

#[test]
fn clone_independence_test() {
    let transcript = Transcript::new(BULLETPROOF_DOMAIN_TAG);
    let mut untouched = transcript.clone();
    let mut separated = transcript.clone();
    separated.rangeproof_domain_sep(64, 64);

    assert_eq!(digest32(&mut untouched),
        "b8ad943d1e31c5c4a95a957ac92e2f058818f64773503c51357268b25af27422");
    assert_eq!(digest32(&mut separated),
        "fdb12c0aa082b37704c2188b44c6ebe27c35263d49f86abb56221b7376408930");
}

#[test]
fn challenge_scalar_test() {
    let mut transcript = Transcript::new(b"AggregatedRangeProofTest");
    let mut buf = [0u8; 64];
    transcript.challenge_bytes(b"y", &mut buf);
    assert_eq!(hex::encode(buf), concat!(
        "db5b088dc7cad6e71ae2d58ec24fc638b5f1b3a2d5eb005724fb1487a975baa0",
        "0c10496c7fd1909d22bbdbc1a7e28e6b41ac4590651ec90f7ef4e8e694a5fb88"));

    let mut transcript = Transcript::new(b"AggregatedRangeProofTest");
    transcript.rangeproof_domain_sep(32, 4);
    let mut raw = transcript.clone();
    raw.challenge_bytes(b"y", &mut buf);
    assert_eq!(hex::encode(buf), concat!(
        "8c9e7d8be647b6a1075e89116015d2610bb2af0e9ec21155aac3371284f6688a",
        "ace5630ea6f01e885d39b9a2bf91f412dc777c672b30895c480b99b3404c8f10"));

    //challenge_scalar reduces the same 64 bytes wide
    let y = transcript.challenge_scalar(b"y");
    assert_eq!(y, Scalar::from_bytes_mod_order_wide(&buf));
    assert_eq!(hex::encode(y.as_bytes()),
        "2f35e7225a239904853604bf8368dc14a5181ab697eb9880fe850b02a2e12e06");
}

#[test]
fn identity_point_rejected_test() {
    let mut transcript = Transcript::new(b"test");
    assert_eq!(
        transcript.validate_and_append_point(b"A", &RistrettoPoint::identity()),
        Err(RangeProofError::VerificationError)
    );
    assert!(transcript.validate_and_append_point(b"A", &G_POINT).is_ok());
}
