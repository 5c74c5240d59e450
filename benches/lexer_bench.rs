use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use invocat::lexer::tokenize;

// A grammar that exercises every token rule: inline bindings, both table
// forms, weights, die notation, comments, escapes and splices.
const BENCH_GRAMMAR: &str = r"-- a small bestiary
color :: mazarine | cochineal | tartrazine
mood <- serene | restless | watchful
epithet :! the (color) one | (color)-scaled

beast
--------
2  dragon
basilisk
    wyvern

dragon murmurings
=================
still having joy
-----------------
the bloodline
is not cut off
-----------------

d6  omen
=================
1-3  that (season),
     it disappeared.
-----------------
4  a (color) feather \(kept\)
-----------------
5-6  nothing at all \
and nothing expected
-----------------

season :: fall | winter | spring | summer
sighting :: a (mood) (beast) of (color) hue
(sighting)
{beast} sighted near the gate
(dragon murmurings)
(omen)
";

fn bench_tokenizer(c: &mut Criterion) {
    let mut group = c.benchmark_group("Tokenizer");

    let input = BENCH_GRAMMAR.repeat(50);
    group.bench_with_input(
        BenchmarkId::new("tokenize", "bestiary_x50"),
        &input,
        |b, input| b.iter(|| tokenize(black_box(input))),
    );

    group.finish();
}

criterion_group!(benches, bench_tokenizer);
criterion_main!(benches);
