use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use gildedrose_inventory::{AGED_BRIE, BACKSTAGE_PASS, GildedRose, Item, SULFURAS};

/// Mixed stock cycling through all four categories plus an unmapped name.
fn mixed_stock(len: usize) -> Vec<Item> {
    (0..len)
        .map(|i| match i % 5 {
            0 => Item::new("+5 Dexterity Vest", (i % 20) as i32 - 5, (i % 50) as i32),
            1 => Item::new(AGED_BRIE, (i % 20) as i32 - 5, (i % 50) as i32),
            2 => Item::new(BACKSTAGE_PASS, (i % 20) as i32 - 2, (i % 50) as i32),
            3 => Item::new(SULFURAS, 0, 80),
            _ => Item::new("Conjured Mana Cake", (i % 20) as i32 - 5, (i % 50) as i32),
        })
        .collect()
}

fn bench_advance_day(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance_day");

    for &len in &[100usize, 1_000, 10_000] {
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::new("mixed_stock", len), &len, |b, &len| {
            b.iter_batched(
                || GildedRose::new(mixed_stock(len)),
                |mut shop| {
                    shop.advance_day();
                    black_box(shop)
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_advance_day);
criterion_main!(benches);
