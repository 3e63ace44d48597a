// SPDX short identifier: Unlicense

use criterion::{
    criterion_group,
    criterion_main,
    Criterion,
    BenchmarkId
};
use rand::{thread_rng, Rng};

const RING_SIZES: [usize; 6] = [2, 4, 8, 11, 16, 64];

use rct_bulletproofs::{
    common::*,
    signature::{
        RingMLSAG,
        MlsagSignParams
    }
};

struct SigningInput {
    ring: Vec<ReducedTxOut>,
    real_index: usize,
    onetime_private_key: Scalar,
    value: u64,
    blinding: Scalar,
    pseudo_output_blinding: Scalar,
    pseudo_output_commitment: Commitment

} impl SigningInput {
    fn random(ring_size: usize) -> Self {
        let real_index = thread_rng().gen::<usize>() % ring_size;
        let onetime_private_key = random_scalar();
        let value = thread_rng().gen::<u64>();
        let blinding = random_scalar();
        let pseudo_output_blinding = random_scalar();

        let ring = (0..ring_size)
            .map(|i| ReducedTxOut {
                public_key: random_point(),
                target_key: match i == real_index {
                    true => &onetime_private_key * G,
                    false => random_point()
                },
                commitment: match i == real_index {
                    true => Commitment::commit(value, blinding),
                    false => Commitment::commit(thread_rng().gen::<u64>(), random_scalar())
                }
            })
            .collect();

        return Self {
            ring,
            real_index,
            onetime_private_key,
            value,
            blinding,
            pseudo_output_blinding,
            pseudo_output_commitment: Commitment::commit(value, pseudo_output_blinding)
        }
    }

    fn params(&self) -> MlsagSignParams<'_> {
        return MlsagSignParams {
            message: b"abcdef",
            ring: &self.ring,
            real_index: self.real_index,
            onetime_private_key: &self.onetime_private_key,
            value: self.value,
            blinding: &self.blinding,
            pseudo_output_blinding: &self.pseudo_output_blinding,
            pseudo_output_commitment: &self.pseudo_output_commitment
        }
    }
}

fn mlsag_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("MLSAG");
    group.sample_size(20);

    //sign
    for x in RING_SIZES {
        let input = SigningInput::random(x);
        group.bench_with_input(BenchmarkId::new("sign", format!("Ring size: {x}")), &input,
            |b, input| b.iter(|| {
                RingMLSAG::sign(&input.params()).unwrap()
            }));
    }

    //verify
    for x in RING_SIZES {
        let input = SigningInput::random(x);
        let sig = RingMLSAG::sign(&input.params()).unwrap();

        let params = (sig, input);
        group.bench_with_input(BenchmarkId::new("verify", format!("Ring size: {x}")), &params,
            |b, (sig, input)| b.iter(|| {
                sig.verify(b"abcdef", &input.ring, &input.pseudo_output_commitment).unwrap()
            }));
    }
}


criterion_group!(signatures, mlsag_benchmark);
criterion_main!(signatures);
