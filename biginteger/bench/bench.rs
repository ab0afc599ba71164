// Copyright 2018 Chia Network Inc and POA Networks Ltd.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
#[macro_use]
extern crate criterion;

use biginteger::BigInteger;
use criterion::{black_box, Criterion};
use std::str::FromStr;

const DIVIDEND: &str = "3121342849107245612683920145712649871239487120394871203948712093487120398471203948712039487";
const DIVISOR: &str = "98127349817234987123498172349871234";

fn bench_multiply(c: &mut Criterion) {
    let x = BigInteger::from_str(DIVIDEND).unwrap();
    let y = BigInteger::from_str(DIVISOR).unwrap();
    c.bench_function("multiply 300x120 bits", move |b| {
        b.iter(|| black_box(x.multiply(&y)))
    });
}

fn bench_div_rem(c: &mut Criterion) {
    let x = BigInteger::from_str(DIVIDEND).unwrap();
    let y = BigInteger::from_str(DIVISOR).unwrap();
    c.bench_function("div_rem 300/120 bits", move |b| {
        b.iter(|| black_box(x.div_rem(&y).unwrap()))
    });
}

fn bench_to_string(c: &mut Criterion) {
    let x = BigInteger::from_str(DIVIDEND).unwrap();
    c.bench_function("to_string 300 bits", move |b| b.iter(|| black_box(x.to_string())));
    c.bench_function("from_str 300 bits", |b| {
        b.iter(|| black_box(BigInteger::from_str(DIVIDEND).unwrap()))
    });
}

fn bench_base58_radix(c: &mut Criterion) {
    let bytes: Vec<u8> = (0u8..25).collect();
    c.bench_function("repeated div_rem by 58, 200 bits", move |b| {
        b.iter(|| {
            let mut value = BigInteger::from_bytes_be(&bytes);
            let radix = BigInteger::from(58);
            while !value.is_zero() {
                value = value.div_rem(&radix).unwrap().quotient;
            }
            black_box(value)
        })
    });
}

criterion_group!(
    benches,
    bench_multiply,
    bench_div_rem,
    bench_to_string,
    bench_base58_radix
);
criterion_main!(benches);
