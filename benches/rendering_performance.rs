use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use html_jsx::{escape_html, jsx, jsxs, render, Child, Component, Element, Props, TemplateValue};

fn purchase(props: Props) -> Element {
    let name = props.get_str("name").unwrap_or_default();
    let price = props.get("price").cloned().map(Child::from).unwrap_or_default();

    jsxs(
        "div",
        Props::new()
            .attr("class", "purchase purchase-card")
            .child(jsx("div", Props::new().attr("class", "purchase-name").children(Child::escaped(name))))
            .child(jsx("div", Props::new().attr("class", "purchase-price").children(price))),
    )
}

fn head() -> Element {
    jsxs(
        "head",
        Props::new()
            .child(jsx("title", Props::new().children("Real world")))
            .child(jsx("meta", Props::new().attr("name", "description").attr("content", "A description")))
            .child(jsx("meta", Props::new().attr("name", "viewport").attr("content", "width=device-width, initial-scale=1.0")))
            .child(jsx("link", Props::new().attr("rel", "stylesheet").attr("href", "styles.css")))
            .child(jsx("script", Props::new().attr("src", "script.js"))),
    )
}

fn page(count: usize) -> String {
    let card = Component::named("Purchase", purchase);
    let cards: Vec<Child> = (0..count)
        .map(|i| {
            let props = Props::new()
                .attr("name", format!("Item <{}> & co", i))
                .attr("price", i as f64 * 1.25);
            jsx(&card, props).into()
        })
        .collect();

    jsxs(
        "html",
        Props::new()
            .attr("lang", "en")
            .child(head())
            .child(jsx("body", Props::new().children(jsx("main", Props::new().children(cards))))),
    )
    .into_ready()
    .unwrap_or_default()
}

fn bench_escape(c: &mut Criterion) {
    let clean = "The quick brown fox jumps over the lazy dog ".repeat(20);
    let dirty = "<a href=\"x\">Tom & 'Jerry'</a> ".repeat(20);

    c.bench_function("escape_clean", |b| b.iter(|| escape_html(black_box(&clean)).len()));
    c.bench_function("escape_dirty", |b| b.iter(|| escape_html(black_box(&dirty)).len()));
}

fn bench_page_scale(c: &mut Criterion) {
    let mut group = c.benchmark_group("page_scale");

    for count in [10, 100, 1000] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| page(black_box(count)))
        });
    }

    group.finish();
}

fn bench_template(c: &mut Criterion) {
    let parts = ["<li class='row' data-id='", "'>", "</li>"];
    c.bench_function("template_row", |b| {
        b.iter(|| {
            render(
                black_box(&parts),
                &[TemplateValue::from(42), TemplateValue::from("Fish & Chips")],
            )
        })
    });
}

criterion_group!(benches, bench_escape, bench_page_scale, bench_template);
criterion_main!(benches);
