/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use rand::{thread_rng, RngCore, CryptoRng};
use tracing::debug;

use crate::internal_common::*;
use crate::address::PublicAddress;
use super::{
    input::InputCredential,
    output::{TxOut, OutputAndSharedSecret},
    prefix::{TxIn, TxPrefix},
    rct_bulletproofs::{InputSecret, SignatureRctBulletproofs}
};

///A signed transaction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tx {
    pub prefix: TxPrefix,
    pub signature: SignatureRctBulletproofs

} impl Tx {
    ///Verify the signature against this transaction's prefix.
    pub fn verify(&self) -> Result<(), TransactionError> {
        return self.verify_with_rng(&mut thread_rng())
    }

    ///`verify`, drawing the rangeproof batching weight from `rng`.
    pub fn verify_with_rng<R: RngCore + CryptoRng>(&self, rng: &mut R) -> Result<(), TransactionError> {
        let rings: Vec<Vec<ReducedTxOut>> = self.prefix.inputs.iter()
            .map(|tx_in| tx_in.reduced_ring())
            .collect();
        let output_commitments: Vec<Commitment> = self.prefix.outputs.iter()
            .map(|tx_out| tx_out.masked_amount.commitment)
            .collect();

        return self.signature.verify_with_rng(
            &self.prefix.hash(),
            &rings,
            &output_commitments,
            self.prefix.fee,
            rng
        )
    }

    ///Key images spent by this transaction.
    pub fn key_images(&self) -> Vec<RistrettoPoint> {
        return self.signature.key_images()
    }

} #[cfg(feature = "to_bytes")] impl ToBytes<'_> for Tx {}

///Collects the inputs and outputs of a transaction, then signs it.
#[derive(Debug, Clone)]
pub struct TransactionBuilder {
    input_credentials: Vec<InputCredential>,
    outputs_and_shared_secrets: Vec<OutputAndSharedSecret>,
    fee: u64,
    tombstone_block: u64

} impl TransactionBuilder {
    pub fn new(fee: u64, tombstone_block: u64) -> Self {
        return Self {
            input_credentials: Vec::new(),
            outputs_and_shared_secrets: Vec::new(),
            fee,
            tombstone_block
        }
    }

    pub fn add_input(&mut self, input_credential: InputCredential) {
        self.input_credentials.push(input_credential);
    }

    ///Add an output of `value` to `recipient`, with a random transaction private key.
    pub fn add_output(&mut self, value: u64, recipient: &PublicAddress, e_fog_hint: Vec<u8>) -> &TxOut {
        return self.add_output_with_rng(value, recipient, e_fog_hint, &mut thread_rng())
    }

    ///`add_output`, drawing the transaction private key from `rng`.
    pub fn add_output_with_rng<R: RngCore + CryptoRng>(
        &mut self,
        value: u64,
        recipient: &PublicAddress,
        e_fog_hint: Vec<u8>,
        rng: &mut R
    ) -> &TxOut {
        let tx_private_key = random_scalar_with_rng(rng);
        return self.add_output_and_shared_secret(
            OutputAndSharedSecret::new(value, recipient, &tx_private_key, e_fog_hint)
        )
    }

    ///Add an already built output.
    pub fn add_output_and_shared_secret(&mut self, output: OutputAndSharedSecret) -> &TxOut {
        self.outputs_and_shared_secrets.push(output);
        let last = self.outputs_and_shared_secrets.len() - 1;
        return &self.outputs_and_shared_secrets[last].tx_out
    }

    pub fn set_fee(&mut self, fee: u64) {
        self.fee = fee;
    }

    pub fn set_tombstone_block(&mut self, tombstone_block: u64) {
        self.tombstone_block = tombstone_block;
    }

    ///Sign the transaction.
    pub fn build(self) -> Result<Tx, TransactionError> {
        return self.build_with_rng(&mut thread_rng())
    }

    ///Sign the transaction, drawing every random scalar from `rng`.
    ///
    ///Inputs are sorted by the public key of their first ring member and outputs by public key.
    ///The tombstone block is lowered to the earliest output key expiry.
    pub fn build_with_rng<R: RngCore + CryptoRng>(mut self, rng: &mut R) -> Result<Tx, TransactionError> {
        if self.input_credentials.is_empty() {
            return Err(TransactionError::NoInputs)
        }
        if self.outputs_and_shared_secrets.is_empty() {
            return Err(TransactionError::NoOutputs)
        }
        if self.input_credentials.len() > MAX_INPUTS {
            return Err(TransactionError::TooManyInputs(self.input_credentials.len()))
        }
        for (index, input) in self.input_credentials.iter().enumerate() {
            if input.ring.len() != RING_SIZE {
                return Err(TransactionError::InvalidRingSize {
                    index,
                    expected: RING_SIZE,
                    actual: input.ring.len()
                })
            }
        }

        self.input_credentials.sort_by_cached_key(|input| encode_point(&input.ring[0].public_key));
        self.outputs_and_shared_secrets.sort_by_cached_key(|output| encode_point(&output.tx_out.public_key));

        let tombstone_block = self.outputs_and_shared_secrets.iter()
            .filter_map(|output| output.pubkey_expiry)
            .fold(self.tombstone_block, u64::min);

        let prefix = TxPrefix {
            inputs: self.input_credentials.iter()
                .map(|input| TxIn { ring: input.ring.clone() })
                .collect(),
            outputs: self.outputs_and_shared_secrets.iter()
                .map(|output| output.tx_out.clone())
                .collect(),
            fee: self.fee,
            tombstone_block
        };
        let message = prefix.hash();

        let rings: Vec<Vec<ReducedTxOut>> = self.input_credentials.iter()
            .map(|input| input.reduced_ring())
            .collect();
        let real_input_indices: Vec<usize> = self.input_credentials.iter()
            .map(|input| input.real_index)
            .collect();
        let input_secrets = self.input_credentials.iter()
            .map(|input| {
                let (value, blinding) = input.value_with_blinding()?;
                Ok(InputSecret {
                    onetime_private_key: *input.onetime_private_key(),
                    value,
                    blinding
                })
            })
            .collect::<Result<Vec<InputSecret>, TransactionError>>()?;
        let output_values_and_blindings = self.outputs_and_shared_secrets.iter()
            .map(|output| output.value_with_blinding())
            .collect::<Result<Vec<(u64, Scalar)>, TransactionError>>()?;

        debug!(inputs = rings.len(), outputs = prefix.outputs.len(), tombstone_block, "building transaction");
        let signature = SignatureRctBulletproofs::sign_with_rng(
            &message,
            &rings,
            &real_input_indices,
            &input_secrets,
            &output_values_and_blindings,
            self.fee,
            rng
        )?;

        return Ok(Tx { prefix, signature })
    }
}
