use std::collections::HashMap;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use termbook_core::model::Question;
use termbook_core::quiz::{grade, parse_answer_pairs};

fn make_questions(n: usize) -> Vec<Question> {
    (1..=n)
        .map(|i| Question {
            index: i,
            prompt: format!("Capital number {i}"),
            answer: format!("Country{i}"),
        })
        .collect()
}

fn bench_grade(c: &mut Criterion) {
    let mut group = c.benchmark_group("grade");

    for n in [10usize, 100, 1000] {
        let questions = make_questions(n);
        let answers: HashMap<usize, String> = (1..=n)
            .filter(|i| i % 2 == 0)
            .map(|i| (i, format!("  country{i} ")))
            .collect();

        group.bench_function(format!("n={n}"), |b| {
            b.iter(|| grade(black_box(&questions), black_box(&answers)))
        });
    }

    group.finish();
}

fn bench_parse_answers(c: &mut Criterion) {
    let pairs: Vec<String> = (1..=100).map(|i| format!("{i}=Country{i}")).collect();
    c.bench_function("parse_answer_pairs/100", |b| {
        b.iter(|| parse_answer_pairs(black_box(pairs.as_slice())))
    });
}

criterion_group!(benches, bench_grade, bench_parse_answers);
criterion_main!(benches);
