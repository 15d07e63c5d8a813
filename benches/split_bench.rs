use std::io::Cursor;
use std::path::PathBuf;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tagsplit::io::reader::ConllxReader;
use tagsplit::io::writer::{OutputFormat, SplitWriter};
use tagsplit::processing::{SplitBasis, Splitter, Threshold};

fn gen_corpus(nb_sentences: usize) -> String {
    let mut s = String::new();
    for i in 0..nb_sentences {
        s.push_str("<s>\n");
        for j in 0..17 {
            s.push_str(&format!("{}\tsana{}\tsana\tN\tN\t_\n", j + 1, i % 97));
        }
    }
    s.push_str("<s>\n");
    s
}

fn split(corpus: &str, format: OutputFormat) {
    let reader = ConllxReader::new(Cursor::new(corpus), PathBuf::new());
    let mut writer = SplitWriter::new(Vec::new(), Vec::new(), Vec::new());
    let threshold = Threshold::new(SplitBasis::Sentences, 5_000);
    Splitter::new(format, threshold)
        .run(reader, &mut writer)
        .unwrap();
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let corpus = gen_corpus(10_000);
    let mut group = c.benchmark_group("split");
    group.sample_size(20);
    group.bench_function("pairs", |b| {
        b.iter(|| split(black_box(&corpus), OutputFormat::Pairs))
    });
    group.bench_function("inline", |b| {
        b.iter(|| split(black_box(&corpus), OutputFormat::Inline))
    });
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
