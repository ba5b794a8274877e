use bton::{pairs::PairMap, prelude::*};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const N_BIG_ARR: usize = 2000;

fn big_arr() -> Bton {
    let v: Vec<Bton> = (0..N_BIG_ARR).map(|i| Bton::from(i as i64)).collect();
    Bton::from(v)
}

const N_ARR: usize = 10;
const N_MAP: usize = 10;

fn big_k() -> Bton {
    let v0: Vec<Bton> = (0..N_ARR).map(|i| Bton::from(i as i64)).collect();
    let m: PairMap<Bton, Bton> = (0..N_MAP)
        .map(|i| (Bton::from(i as u64), Bton::from(v0.clone())))
        .collect();
    let v: Vec<Bton> = std::iter::repeat(m).map(Bton::from).take(N_ARR).collect();
    Bton::from(v)
}

fn bench_enc(c: &mut Criterion) {
    let big_k = big_k();
    let enc_len = encode_full(&big_k).unwrap().len();
    c.bench_function(
        &format!("Encoding a Bton object, output size of {} bytes", enc_len),
        move |b| b.iter(|| encode_full(black_box(&big_k)).unwrap()),
    );
}

fn bench_dec(c: &mut Criterion) {
    let enc = Bytes::from(encode_full(&big_k()).unwrap());
    c.bench_function(
        &format!("Decoding a Bton object, input size of {} bytes", enc.len()),
        move |b| b.iter(|| decode_full(black_box(enc.clone())).unwrap()),
    );
}

fn bench_enc_flat(c: &mut Criterion) {
    let big_arr = big_arr();
    let enc_len = encode_full(&big_arr).unwrap().len();
    c.bench_function(
        &format!("Encoding a Bton vector, output size of {} bytes", enc_len),
        move |b| b.iter(|| encode_full(black_box(&big_arr)).unwrap()),
    );
}

fn bench_dec_flat(c: &mut Criterion) {
    let enc = Bytes::from(encode_full(&big_arr()).unwrap());
    c.bench_function(
        &format!("Decoding a Bton vector, input size of {} bytes", enc.len()),
        move |b| b.iter(|| decode_full(black_box(enc.clone())).unwrap()),
    );
}

criterion_group!(benches, bench_enc, bench_dec, bench_enc_flat, bench_dec_flat);
criterion_main!(benches);
