use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use suggestkit::index::PrefixTrie;

/// Synthetic recipe-title-shaped labels: a few words drawn from a small
/// vocabulary, so prefixes share paths the way real titles do.
fn label_set(count: usize) -> Vec<String> {
    const WORDS: &[&str] = &[
        "roast", "grilled", "spicy", "creamy", "garlic", "lemon", "chicken", "tofu", "noodle",
        "salad", "soup", "curry", "pasta", "burger", "stew", "taco",
    ];
    let mut rng = StdRng::seed_from_u64(42);
    (0..count)
        .map(|_| {
            let words = rng.gen_range(2..=3);
            (0..words)
                .map(|_| WORDS[rng.gen_range(0..WORDS.len())])
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let labels = label_set(500);
    c.bench_function("trie_build_500_labels", |b| {
        b.iter(|| {
            let mut trie = PrefixTrie::new();
            trie.build_from_labels(std::hint::black_box(&labels));
            std::hint::black_box(trie)
        })
    });
}

fn bench_suggest_keystrokes(c: &mut Criterion) {
    let labels = label_set(500);
    c.bench_function("trie_suggest_keystrokes", |b| {
        b.iter_batched(
            || {
                let mut trie = PrefixTrie::new();
                trie.build_from_labels(&labels);
                trie
            },
            |trie| {
                // A user typing "grilled " one character at a time.
                for end in 1..=8 {
                    let _ = std::hint::black_box(trie.suggest(&"grilled "[..end], 8));
                }
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_build, bench_suggest_keystrokes);
criterion_main!(benches);
