/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! The signed part of a transaction, and its digest.
//!
//! The digest absorbs the prefix structurally into a merlin transcript:
//! aggregates and sequences are framed by a header naming them, and every
//! primitive is labelled with its type. Membership proofs are not carried,
//! so every input's `proofs` sequence is empty.

use merlin::Transcript;

use crate::internal_common::*;
use super::output::TxOut;

///A transaction input: the ring of outputs one of which is spent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TxIn {
    pub ring: Vec<TxOut>

} impl TxIn {
    ///The ring as a ring signature sees it.
    pub fn reduced_ring(&self) -> Vec<ReducedTxOut> {
        return self.ring.iter().map(|tx_out| tx_out.reduce()).collect()
    }
}

///Everything a transaction signature signs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TxPrefix {
    pub inputs: Vec<TxIn>,
    pub outputs: Vec<TxOut>,
    pub fee: u64,
    ///The transaction is invalid from this block on.
    pub tombstone_block: u64

} impl TxPrefix {
    ///The 32-byte digest signed by the transaction signature.
    pub fn hash(&self) -> [u8; 32] {
        let mut transcript = Transcript::new(TX_PREFIX_DIGEST_DOMAIN_TAG);

        append_agg_header(&mut transcript, b"mobilecoin-tx-prefix", b"TxPrefix");

        append_seq_header(&mut transcript, b"inputs", self.inputs.len());
        for tx_in in self.inputs.iter() {
            append_agg_header(&mut transcript, b"", b"TxIn");
            append_seq_header(&mut transcript, b"ring", tx_in.ring.len());
            for tx_out in tx_in.ring.iter() {
                append_tx_out(&mut transcript, tx_out);
            }
            append_seq_header(&mut transcript, b"proofs", 0);
            append_agg_closer(&mut transcript, b"", b"TxIn");
        }

        append_seq_header(&mut transcript, b"outputs", self.outputs.len());
        for tx_out in self.outputs.iter() {
            append_tx_out(&mut transcript, tx_out);
        }

        append_uint(&mut transcript, b"fee", self.fee);
        append_uint(&mut transcript, b"tombstone_block", self.tombstone_block);

        append_agg_closer(&mut transcript, b"mobilecoin-tx-prefix", b"TxPrefix");

        let mut digest = [0u8; 32];
        transcript.challenge_bytes(b"digest32", &mut digest);
        return digest
    }

} #[cfg(feature = "to_bytes")] impl ToBytes<'_> for TxPrefix {}

fn append_agg_header(transcript: &mut Transcript, context: &'static [u8], name: &[u8]) {
    transcript.append_message(context, b"agg");
    transcript.append_message(b"name", name);
}

fn append_agg_closer(transcript: &mut Transcript, context: &'static [u8], name: &[u8]) {
    transcript.append_message(context, b"agg-end");
    transcript.append_message(b"name", name);
}

fn append_seq_header(transcript: &mut Transcript, context: &'static [u8], len: usize) {
    transcript.append_message(context, b"seq");
    transcript.append_message(b"len", &(len as u64).to_le_bytes());
}

fn append_primitive(transcript: &mut Transcript, context: &'static [u8], typename: &'static [u8], data: &[u8]) {
    transcript.append_message(context, b"prim");
    transcript.append_message(typename, data);
}

fn append_uint(transcript: &mut Transcript, context: &'static [u8], value: u64) {
    append_primitive(transcript, context, b"uint", &value.to_le_bytes());
}

fn append_tx_out(transcript: &mut Transcript, tx_out: &TxOut) {
    append_agg_header(transcript, b"", b"TxOut");

    append_agg_header(transcript, b"amount", b"Amount");
    append_primitive(transcript, b"commitment", b"ristretto", &encode_point(&tx_out.masked_amount.commitment.to_point()));
    append_uint(transcript, b"masked_value", tx_out.masked_amount.masked_value);
    append_agg_closer(transcript, b"amount", b"Amount");

    append_primitive(transcript, b"target_key", b"ristretto", &encode_point(&tx_out.target_key));
    append_primitive(transcript, b"public_key", b"ristretto", &encode_point(&tx_out.public_key));
    append_primitive(transcript, b"e_fog_hint", b"bytes", &tx_out.e_fog_hint);

    append_agg_closer(transcript, b"", b"TxOut");
}
