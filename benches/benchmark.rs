use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use license_vectorizer::{Algorithm, Database, Identifier, Vectorizer};

const WORDS: [&str; 24] = [
    "permission", "granted", "software", "license", "copy", "modify", "distribute", "warranty",
    "liability", "source", "binary", "notice", "conditions", "redistribution", "holder", "contributors",
    "express", "implied", "merchantability", "fitness", "purpose", "damages", "agreement", "terms",
];

/// Deterministic pseudo-license texts.
fn synthetic_texts(count: usize, words: usize) -> Vec<String> {
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    (0..count)
        .map(|_| {
            (0..words)
                .map(|_| {
                    state ^= state << 13;
                    state ^= state >> 7;
                    state ^= state << 17;
                    WORDS[(state % WORDS.len() as u64) as usize]
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

fn build_db(texts: &[String], algorithms: &[Algorithm]) -> Database {
    let mut db = Database::new();
    for algorithm in algorithms {
        for (i, text) in texts.iter().enumerate() {
            db.put(&algorithm.name(), algorithm.parse_str(text, &format!("license-{i}")));
        }
    }
    db
}

fn parse_benchmark(c: &mut Criterion) {
    let text = synthetic_texts(1, 2000).remove(0);
    for name in ["5gram", "wordfreq", "tfidf"] {
        let algorithm: Algorithm = name.parse().unwrap();
        c.bench_function(&format!("parse_{name}"), |b| {
            b.iter(|| algorithm.parse_str(black_box(&text), "LICENSE"))
        });
    }
}

fn identify_benchmark(c: &mut Criterion) {
    let texts = synthetic_texts(400, 300);
    let algorithms: Vec<Algorithm> = ["5gram", "wordfreq", "tfidf"].iter().map(|n| n.parse().unwrap()).collect();
    let db = Arc::new(build_db(&texts, &algorithms));
    let query = synthetic_texts(401, 300).remove(400);

    for algorithm in algorithms {
        let name = algorithm.name();
        let identifier = Identifier::new(algorithm, 0.5, db.clone()).unwrap();
        let license = identifier.algorithm().parse_str(&query, "LICENSE");
        c.bench_function(&format!("identify_{name}"), |b| {
            b.iter(|| identifier.identify(black_box(&license)))
        });
    }

    c.bench_function("prepare_tfidf", |b| {
        b.iter(|| Identifier::new("tfidf".parse().unwrap(), 0.5, db.clone()).unwrap())
    });
}

criterion_group!(benches, parse_benchmark, identify_benchmark);
criterion_main!(benches);
