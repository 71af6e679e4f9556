use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;
use vela_dasha::{
    Body, Level, Period, PeriodSystem, active_chain, definition, expand_to_depth, resolve_path,
    subdivide,
};

fn top_level(system: PeriodSystem) -> Vec<Period> {
    let def = definition(system);
    let mut cursor = Decimal::from(2_451_545u32);
    def.order
        .iter()
        .zip(def.years.iter())
        .map(|(&body, &years)| {
            let p = Period::new(body, cursor, years, Level::Mahadasha);
            cursor = p.end_jd;
            p
        })
        .collect()
}

fn subdivide_bench(c: &mut Criterion) {
    let def = definition(PeriodSystem::Vimshottari);
    let parent = Period::new(
        Body::Shukra,
        Decimal::from(2_451_545u32),
        Decimal::from(20u32),
        Level::Mahadasha,
    );

    let mut group = c.benchmark_group("subdivide");
    group.bench_function("vimshottari_one_level", |b| {
        b.iter(|| subdivide(black_box(&parent), &def))
    });
    group.finish();
}

fn resolve_bench(c: &mut Criterion) {
    let roots = top_level(PeriodSystem::Vimshottari);
    let path = [
        Body::Shukra,
        Body::Shukra,
        Body::Buddh,
        Body::Chandra,
        Body::Shani,
    ];
    let query = Decimal::from(2_451_545u32) + Decimal::from(3000u32);

    let mut group = c.benchmark_group("resolve");
    group.bench_function("five_level_path", |b| {
        b.iter(|| resolve_path(black_box(&roots), &path, PeriodSystem::Vimshottari))
    });
    group.bench_function("active_chain_depth_5", |b| {
        b.iter(|| active_chain(black_box(&roots), query, 5, PeriodSystem::Vimshottari))
    });
    group.finish();
}

fn expand_bench(c: &mut Criterion) {
    let roots = top_level(PeriodSystem::Vimshottari);

    let mut group = c.benchmark_group("expand");
    group.bench_function("depth_3", |b| {
        b.iter(|| expand_to_depth(black_box(&roots), 3, PeriodSystem::Vimshottari))
    });
    group.finish();
}

criterion_group!(benches, subdivide_bench, resolve_bench, expand_bench);
criterion_main!(benches);
