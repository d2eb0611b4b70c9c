// benches/menu.rs
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use neis_meal::menu::parse_menu;

// A plausible week of menus in one string: every cleanup stage gets hit.
fn sample_menus() -> String {
    let entries = [
        "찹쌀밥",
        "대구매운탕(5.6.9.13.18)",
        "*조 토스트-딸기잼(2.5.6)",
        "계란찜(1)",
        "배추김치(9.13)",
        "돈육불고기(5.6.10)",
        "미역국(5)(국)",
        "샐러드(샐러드)-참깨드레싱(5.6)",
        "멜론",
        "김말이튀김(1.5.6) *석",
    ];
    let mut lines = Vec::with_capacity(entries.len() * 6);
    for _ in 0..6 {
        lines.extend_from_slice(&entries);
    }
    lines.join("<br/>")
}

fn bench_parse_menu(c: &mut Criterion) {
    let text = sample_menus();

    c.bench_function("parse_menu_week", |b| {
        b.iter(|| {
            let entries = parse_menu(black_box(&text));
            black_box(entries.len())
        })
    });
}

criterion_group!(benches, bench_parse_menu);
criterion_main!(benches);
