use criterion::{criterion_group, criterion_main, Criterion};
use larder_core::Engine;
use larder_schema::{EntryDraft, RequiredItem};

fn ingredient(name: &str, cook_time: i64) -> EntryDraft {
    EntryDraft {
        name: name.to_owned(),
        kind: "ingredient".to_owned(),
        cook_time: Some(cook_time),
        required_items: None,
    }
}

fn recipe(name: &str, items: Vec<(String, i64)>) -> EntryDraft {
    EntryDraft {
        name: name.to_owned(),
        kind: "recipe".to_owned(),
        cook_time: None,
        required_items: Some(
            items
                .into_iter()
                .map(|(name, quantity)| RequiredItem { name, quantity })
                .collect(),
        ),
    }
}

/// 50 recipes stacked in a single chain over one base ingredient.
fn deep_chain_engine() -> Engine {
    let engine = Engine::new();
    engine.create_entry(ingredient("Grain", 1)).unwrap();
    engine
        .create_entry(recipe("Link000", vec![("Grain".to_owned(), 2)]))
        .unwrap();
    for i in 1..50 {
        let prev = format!("Link{:03}", i - 1);
        engine
            .create_entry(recipe(&format!("Link{i:03}"), vec![(prev, 1)]))
            .unwrap();
    }
    engine
}

/// One recipe fanning out to 200 distinct ingredients.
fn wide_fanout_engine() -> Engine {
    let engine = Engine::new();
    let mut items = Vec::new();
    for i in 0..200 {
        let name = format!("Spice{i:03}");
        engine.create_entry(ingredient(&name, 1)).unwrap();
        items.push((name, 3));
    }
    engine.create_entry(recipe("Mix", items)).unwrap();
    engine
}

fn bench_resolve_deep_chain(c: &mut Criterion) {
    let engine = deep_chain_engine();
    c.bench_function("resolve_deep_chain_50", |b| {
        b.iter(|| engine.summary("Link049").unwrap());
    });
}

fn bench_resolve_wide_fanout(c: &mut Criterion) {
    let engine = wide_fanout_engine();
    c.bench_function("resolve_wide_fanout_200", |b| {
        b.iter(|| engine.summary("Mix").unwrap());
    });
}

fn bench_create_entries(c: &mut Criterion) {
    c.bench_function("create_100_ingredients", |b| {
        b.iter_with_setup(Engine::new, |engine| {
            for i in 0..100 {
                engine
                    .create_entry(ingredient(&format!("Item{i:03}"), 1))
                    .unwrap();
            }
        });
    });
}

criterion_group!(
    benches,
    bench_resolve_deep_chain,
    bench_resolve_wide_fanout,
    bench_create_entries,
);
criterion_main!(benches);
