use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use digest_core::{NavigationStyle, RestructureConfig, assign_anchors, build_toc, extract_blocks, restructure};

/// A digest with `items` blocks alternating between two origins and three categories.
fn synthetic_digest(items: usize) -> String {
    let categories = ["Модели", "Инструменты", "Исследования"];
    let mut html = String::from("<h1>AI за неделю</h1><p>Главное за неделю.</p><h3>Официальные новости</h3>");

    for i in 0..items {
        let origin = if i % 3 == 0 { "officialchan" } else { "otherchan" };
        html.push_str(&format!(
            r#"<h4 data-category="{}"><a href="https://t.me/{}/{}">Новость номер {}</a></h4>"#,
            categories[i % categories.len()],
            origin,
            i,
            i
        ));
        html.push_str("<p>Подробности: <strong>важно</strong>, <em>кратко</em> и по делу.</p>");
    }

    html
}

fn config() -> RestructureConfig {
    RestructureConfig::builder()
        .official_origins(["officialchan"])
        .strip_original_sections(true)
        .strip_titles(["официальные"])
        .enable_section_reorder(true)
        .build()
}

fn bench_restructure(c: &mut Criterion) {
    let config = config();
    let mut group = c.benchmark_group("restructure");

    for items in [10, 100, 1000] {
        let html = synthetic_digest(items);
        group.bench_with_input(BenchmarkId::new("items", items), &html, |b, html| {
            b.iter(|| restructure(black_box(html), &config))
        });
    }

    group.finish();
}

fn bench_extract(c: &mut Criterion) {
    let html = synthetic_digest(500);

    c.bench_function("extract_blocks", |b| b.iter(|| extract_blocks(black_box(&html))));
}

fn bench_toc(c: &mut Criterion) {
    let html = synthetic_digest(500);
    let blocks = assign_anchors(extract_blocks(&html).blocks);
    let list = config();
    let paragraph = RestructureConfig::builder().navigation_style(NavigationStyle::Paragraph).build();

    let mut group = c.benchmark_group("toc");
    group.bench_function("list", |b| b.iter(|| build_toc(black_box(&blocks), &list)));
    group.bench_function("paragraph", |b| b.iter(|| build_toc(black_box(&blocks), &paragraph)));
    group.finish();
}

criterion_group!(benches, bench_restructure, bench_extract, bench_toc);
criterion_main!(benches);
