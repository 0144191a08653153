use criterion::{criterion_group, criterion_main, Criterion};
use wordpool::{is_valid, load_dictionary, top_words, LetterPool};

fn validate_benchmark(c: &mut Criterion) {
    let dictionary = load_dictionary().unwrap();
    let pool = LetterPool::from_letters("eatpotators").unwrap();

    c.bench_function("is_valid single word", |b| {
        b.iter(|| is_valid("potato", &pool, &dictionary))
    });

    c.bench_function("top_words full dictionary", |b| {
        b.iter(|| top_words(&pool, &dictionary, 10))
    });
}

criterion_group!(benches, validate_benchmark);
criterion_main!(benches);
