use criterion::{black_box, criterion_group, criterion_main, Criterion};

use teinei_core::{assemble, normalize, PartOfSpeech, PosCategory, Token};

fn sentence() -> Vec<Token> {
    let words: &[(&str, PosCategory, Option<&str>)] = &[
        ("私", PosCategory::Noun, Some("ワタシ")),
        ("は", PosCategory::Particle, Some("ハ")),
        ("毎朝", PosCategory::Noun, Some("マイアサ")),
        ("7", PosCategory::Noun, None),
        ("時", PosCategory::Noun, Some("ジ")),
        ("に", PosCategory::Particle, Some("ニ")),
        ("起きる", PosCategory::Verb, Some("オキル")),
        ("。", PosCategory::Symbol, Some("。")),
        ("学校", PosCategory::Noun, Some("ガッコウ")),
        ("で", PosCategory::Particle, Some("デ")),
        ("ジャーナル", PosCategory::Noun, Some("ジャーナル")),
        ("を", PosCategory::Particle, Some("ヲ")),
        ("見る", PosCategory::Verb, Some("ミル")),
        ("。", PosCategory::Symbol, Some("。")),
    ];
    words
        .iter()
        .map(|&(s, c, r)| Token::new(s, PartOfSpeech::from_category(c), r.map(str::to_string)))
        .collect()
}

fn bench_assemble(c: &mut Criterion) {
    let tokens: Vec<Token> = std::iter::repeat(sentence()).take(20).flatten().collect();

    c.bench_function("assemble_280_tokens", |b| {
        b.iter(|| assemble(black_box(&tokens)))
    });
    c.bench_function("normalize_280_tokens", |b| {
        b.iter(|| normalize(black_box(&tokens)))
    });
}

criterion_group!(benches, bench_assemble);
criterion_main!(benches);
