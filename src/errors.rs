/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use thiserror::Error;

///Encoding/serialization errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SerializationError {
    ///Failure to serialize.
    #[error("Encoding error.")]
    EncodingError,
    ///Failure to deserialize.
    #[error("Decoding error.")]
    DecodingError,
    ///The input was not valid hex.
    #[error("Invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),
}

///Rangeproof errors, covering both the proving protocol and verification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeProofError {
    ///The bit width is not one of 8, 16, 32 or 64.
    #[error("Invalid bitsize {0}, must be one of 8, 16, 32 or 64.")]
    InvalidBitsize(usize),
    ///The number of aggregated values is not a power of two.
    #[error("Invalid aggregation size {0}, must be a power of two.")]
    InvalidAggregation(usize),
    ///Nothing to prove.
    #[error("Cannot create a rangeproof over zero values.")]
    EmptyAggregation,
    ///The generators cannot cover the requested proof.
    #[error("Insufficient generators: {required} required, capacity is {capacity}.")]
    InvalidGeneratorsLength { required: usize, capacity: usize },
    ///Values and blinding factors differ in count.
    #[error("Got {values} values but {blindings} blinding factors.")]
    WrongNumBlindingFactors { values: usize, blindings: usize },
    ///A value does not fit in the bit width.
    #[error("Value {value} does not fit in {bits} bits.")]
    OutOfRange { value: u64, bits: usize },
    #[error("Expected {expected} bit commitments, got {actual}.")]
    WrongNumBitCommitments { expected: usize, actual: usize },
    #[error("Expected {expected} poly commitments, got {actual}.")]
    WrongNumPolyCommitments { expected: usize, actual: usize },
    #[error("Expected {expected} proof shares, got {actual}.")]
    WrongNumProofShares { expected: usize, actual: usize },
    ///Some parties sent shares of the wrong shape, or shares which do not audit.
    #[error("Malformed proof shares from parties {bad_shares:?}.")]
    MalformedProofShares { bad_shares: Vec<usize> },
    ///The dealer sent a zero polynomial challenge.
    #[error("The dealer sent a zero challenge.")]
    MaliciousDealer,
    ///Inner-product argument inputs have inconsistent lengths or a non power-of-two length.
    #[error("Invalid inner product input of length {0}.")]
    InvalidInnerProductInput(usize),
    ///The proof does not verify.
    #[error("This rangeproof is invalid.")]
    VerificationError,
    ///The proof bytes are malformed.
    #[error("Malformed rangeproof encoding.")]
    FormatError,
}

///Ring signature errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignatureError {
    #[error("The ring is empty.")]
    EmptyRing,
    ///The real index is outside the ring.
    #[error("Index {index} is out of bounds for a ring of size {ring_size}.")]
    IndexOutOfBounds { index: usize, ring_size: usize },
    ///The number of responses does not match the ring.
    #[error("Expected {expected} elements, got {actual}.")]
    LengthMismatch { expected: usize, actual: usize },
    ///The key image is the identity.
    #[error("Invalid key image.")]
    InvalidKeyImage,
    ///The pseudo-output and the spent output do not commit to the same value.
    #[error("Value not conserved.")]
    ValueNotConserved,
    ///The signature is invalid.
    #[error("This signature is invalid.")]
    Invalid,
}

///Transaction building, signing and verification errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransactionError {
    #[error("The transaction has no inputs.")]
    NoInputs,
    #[error("The transaction has no outputs.")]
    NoOutputs,
    #[error("Too many inputs: {0}.")]
    TooManyInputs(usize),
    ///A ring does not have the required size.
    #[error("Input {index} has a ring of size {actual}, expected {expected}.")]
    InvalidRingSize { index: usize, expected: usize, actual: usize },
    ///Parallel lists (signatures, rings, commitments) differ in length.
    #[error("Expected {expected} elements, got {actual}.")]
    LengthMismatch { expected: usize, actual: usize },
    ///Two inputs spend the same output.
    #[error("Duplicate key image.")]
    DuplicateKeyImage,
    ///Inputs do not equal outputs plus fee.
    #[error("Value not conserved.")]
    ValueNotConserved,
    ///A masked amount does not open its commitment under the given shared secret.
    #[error("Amount does not match its commitment.")]
    AmountVerificationFailed,
    ///The one-time private key does not own the real output.
    #[error("One-time private key does not match the real output.")]
    OnetimeKeyMismatch,
    #[error(transparent)]
    RangeProof(#[from] RangeProofError),
    #[error(transparent)]
    Signature(#[from] SignatureError),
    #[error(transparent)]
    Serialization(#[from] SerializationError),
}
