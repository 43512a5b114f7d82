use criterion::{criterion_group, criterion_main, Criterion};
use ranker::tokenizer::tokenize;
use ranker::{rank, RankConfig};

fn corpus(num_docs: usize) -> Vec<String> {
    let vocab =
        ["fox", "dog", "quick", "brown", "lazy", "jumps", "forest", "hunting", "red", "wolf"];
    (0..num_docs)
        .map(|i| {
            (0..50).map(|j| vocab[(i * 7 + j * 3) % vocab.len()]).collect::<Vec<_>>().join(" ")
        })
        .collect()
}

fn bench_tokenize(c: &mut Criterion) {
    let text = corpus(1).remove(0);
    c.bench_function("tokenize_50_words", |b| b.iter(|| tokenize(&text)));
}

fn bench_rank(c: &mut Criterion) {
    let docs = corpus(200);
    let config = RankConfig::default();
    c.bench_function("rank_both_200_docs", |b| {
        b.iter(|| rank(&docs, "quick brown fox", &config))
    });
}

criterion_group!(benches, bench_tokenize, bench_rank);
criterion_main!(benches);
