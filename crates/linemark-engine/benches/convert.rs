use criterion::{Criterion, criterion_group, criterion_main};
use linemark_engine::convert;

fn generate_document(sections: usize) -> String {
    let base = "# Title\n\n## Section\n### Detail\nParagraph with some content.\n---\n##NoSpace line\n\n";
    base.repeat(sections)
}

fn bench_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");
    group.sample_size(10);

    for sections in [10, 100, 1000] {
        let content = generate_document(sections);
        group.bench_function(format!("sections_{sections}"), |b| {
            b.iter(|| convert(std::hint::black_box(&content)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_convert);
criterion_main!(benches);
