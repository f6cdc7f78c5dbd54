use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use poker_freq::classifier::classify;
use poker_freq::deck::{Deck, RngSource};
use poker_freq::hand::Hand;

fn bench_classify(c: &mut Criterion) {
    let no_pair: Hand = "2s 5h 8d Jc Ks".parse().unwrap();
    let royal: Hand = "As Ks Qs Js 10s".parse().unwrap();
    let full_house: Hand = "2s 2h 2d 5c 5s".parse().unwrap();

    let mut g = c.benchmark_group("classify");
    g.bench_with_input(BenchmarkId::new("no_pair", "2,5,8,J,K"), &no_pair, |b, input| {
        b.iter(|| classify(black_box(input)))
    });
    g.bench_with_input(BenchmarkId::new("royal_flush", "royal"), &royal, |b, input| {
        b.iter(|| classify(black_box(input)))
    });
    g.bench_with_input(BenchmarkId::new("full_house", "2s over 5s"), &full_house, |b, input| {
        b.iter(|| classify(black_box(input)))
    });
    g.finish();
}

fn bench_shuffle_draw_classify(c: &mut Criterion) {
    c.bench_function("shuffle_draw_classify", |b| {
        let mut deck = Deck::standard();
        let mut source = RngSource::seeded(1);
        b.iter(|| {
            deck.shuffle(&mut source);
            classify(black_box(&deck.top_five()))
        })
    });
}

criterion_group!(benches, bench_classify, bench_shuffle_draw_classify);
criterion_main!(benches);
