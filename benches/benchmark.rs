// Copyright 2021 CoD Technologies Corp.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! udecimal benchmark

use bencher::{benchmark_group, benchmark_main, black_box, Bencher};
use std::collections::hash_map::DefaultHasher;
use std::hash::Hash;
use udecimal::{Decimal, MAX_BINARY_SIZE};

#[inline(always)]
fn parse(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn decimal_parse(bench: &mut Bencher) {
    bench.iter(|| {
        let _n = parse(black_box("12345678901.23456789"));
    })
}

fn decimal_parse_big(bench: &mut Bencher) {
    bench.iter(|| {
        let _n = parse(black_box("123456789012345678901234567890123456789.9999999999999999999"));
    })
}

fn decimal_to_string(bench: &mut Bencher) {
    let val = parse("12345678901.23456789");
    bench.iter(|| {
        let _n = black_box(&val).to_string();
    })
}

fn decimal_from_f64(bench: &mut Bencher) {
    bench.iter(|| {
        let _n = Decimal::from_f64(black_box(12345678901.234567_f64)).unwrap();
    })
}

fn decimal_into_f64(bench: &mut Bencher) {
    let val = parse("12345678901.23456789");
    bench.iter(|| {
        black_box(f64::from(black_box(&val)));
    })
}

fn decimal_into_i64(bench: &mut Bencher) {
    let val = parse("12345678901.23456789");
    bench.iter(|| {
        let _n = black_box(&val).to_i64().unwrap();
    })
}

fn decimal_add(bench: &mut Bencher) {
    let x = parse("12345678901.23456789");
    let y = parse("123456.7890123456789");
    bench.iter(|| {
        let _n = black_box(&x) + black_box(&y);
    })
}

fn decimal_sub(bench: &mut Bencher) {
    let x = parse("12345678901.23456789");
    let y = parse("123456.7890123456789");
    bench.iter(|| {
        let _n = black_box(&x) - black_box(&y);
    })
}

fn decimal_mul(bench: &mut Bencher) {
    let x = parse("12345678901.23456789");
    let y = parse("123456.7890123456789");
    bench.iter(|| {
        let _n = black_box(&x) * black_box(&y);
    })
}

fn decimal_mul_big(bench: &mut Bencher) {
    let x = parse("123456789012345678901234567890123456789.9999999999999999999");
    let y = parse("123456.7890123456789");
    bench.iter(|| {
        let _n = black_box(&x) * black_box(&y);
    })
}

fn decimal_div(bench: &mut Bencher) {
    let x = parse("12345678901.23456789");
    let y = parse("123456.7890123456789");
    bench.iter(|| {
        let _n = black_box(&x).checked_div(black_box(&y)).unwrap();
    })
}

fn decimal_rem(bench: &mut Bencher) {
    let x = parse("12345678901.23456789");
    let y = parse("123456.7890123456789");
    bench.iter(|| {
        let _n = black_box(&x).checked_rem(black_box(&y)).unwrap();
    })
}

fn decimal_pow(bench: &mut Bencher) {
    let x = parse("1.001");
    bench.iter(|| {
        let _n = black_box(&x).pow_i32(black_box(100)).unwrap();
    })
}

fn decimal_pow_fast(bench: &mut Bencher) {
    let x = parse("1.001");
    bench.iter(|| {
        let _n = black_box(&x).pow_fast_i32(black_box(100)).unwrap();
    })
}

fn decimal_pow_negative(bench: &mut Bencher) {
    let x = parse("1.001");
    bench.iter(|| {
        let _n = black_box(&x).pow_i32(black_box(-100)).unwrap();
    })
}

fn decimal_sqrt(bench: &mut Bencher) {
    let x = parse("12345678901.23456789");
    bench.iter(|| {
        let _n = black_box(&x).sqrt().unwrap();
    })
}

fn decimal_round(bench: &mut Bencher) {
    let x = parse("12345678901.23456789");
    bench.iter(|| {
        let _n = black_box(&x).round_bank(black_box(4));
    })
}

fn decimal_encode(bench: &mut Bencher) {
    let val = parse("12345678901.23456789");
    let mut buf = Vec::with_capacity(MAX_BINARY_SIZE);
    bench.iter(|| {
        buf.clear();
        let _n = black_box(&val).encode(&mut buf).unwrap();
    })
}

fn decimal_decode(bench: &mut Bencher) {
    let mut buf = Vec::with_capacity(MAX_BINARY_SIZE);
    parse("12345678901.23456789").encode(&mut buf).unwrap();
    bench.iter(|| {
        let _n = Decimal::decode(black_box(&buf)).unwrap();
    })
}

fn decimal_hash(bench: &mut Bencher) {
    let val = parse("12345678901.23456789");
    bench.iter(|| {
        let mut hasher = DefaultHasher::new();
        black_box(&val).hash(&mut hasher);
    })
}

fn decimal_cmp(bench: &mut Bencher) {
    let x = parse("12345678901.23456789");
    let y = parse("123456.7890123456789");
    bench.iter(|| {
        let _n = black_box(&x) > black_box(&y);
    })
}

benchmark_group!(
    decimal_benches,
    decimal_parse,
    decimal_parse_big,
    decimal_to_string,
    decimal_from_f64,
    decimal_into_f64,
    decimal_into_i64,
    decimal_add,
    decimal_sub,
    decimal_mul,
    decimal_mul_big,
    decimal_div,
    decimal_rem,
    decimal_pow,
    decimal_pow_fast,
    decimal_pow_negative,
    decimal_sqrt,
    decimal_round,
    decimal_encode,
    decimal_decode,
    decimal_hash,
    decimal_cmp,
);

benchmark_main!(decimal_benches);
