use criterion::{criterion_group, criterion_main, Criterion};
use echoverse_core::TagSuggester;

fn bench_suggest(c: &mut Criterion) {
    let tags: Vec<String> = (0..5_000).map(|i| format!("tag{i:05}")).collect();
    let suggester = TagSuggester::new(tags);
    c.bench_function("suggest_5k_tags", |b| b.iter(|| suggester.suggest("beats, lofi, tag04")));
}

criterion_group!(benches, bench_suggest);
criterion_main!(benches);
