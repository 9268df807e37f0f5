use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sales_report::{
    core::{LedgerEntity, ReportSession},
    domain::{Client, JoinKey, Ledger, Metric, OrderRecord, Product, TargetSeries},
};

const PROVINCES: [&str; 3] = ["Ninh Thuan", "Khanh Hoa", "Lam Dong"];
const CATEGORIES: [&str; 3] = ["NPK", "foliar fertilizer", "Organic"];

fn build_session(order_count: usize, client_count: usize, product_count: usize) -> ReportSession {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let orders = (0..order_count)
        .map(|idx| {
            OrderRecord::new(
                format!("C{}", idx % client_count),
                format!("P{}", idx % product_count),
                start + Duration::days((idx % 365) as i64),
                (idx % 20) as u32 + 1,
                50.0 + (idx % 100) as f64,
            )
        })
        .collect::<Vec<_>>();
    let clients = (0..client_count)
        .map(|idx| {
            Client::new(
                format!("C{idx}"),
                format!("Store {idx}"),
                "0900",
                PROVINCES[idx % PROVINCES.len()],
            )
        })
        .collect();
    let products = (0..product_count)
        .map(|idx| {
            Product::new(
                format!("P{idx}"),
                CATEGORIES[idx % CATEGORIES.len()],
                format!("Product {idx}"),
                "50kg",
                "bag",
                25.0,
            )
        })
        .collect();
    let targets = TargetSeries::from_values(&[10_000.0; 12]).unwrap();
    ReportSession::new(Ledger::new(orders), clients, products, targets)
}

fn bench_session_build(c: &mut Criterion) {
    c.bench_function("session_attach_50k", |b| {
        b.iter(|| black_box(build_session(black_box(50_000), 200, 60)))
    });
}

fn bench_reports(c: &mut Criterion) {
    let session = build_session(50_000, 200, 60);

    c.bench_function("province_rollup_50k", |b| {
        b.iter(|| black_box(session.report().province_rollup().unwrap()))
    });

    c.bench_function("top_clients_50k", |b| {
        b.iter(|| black_box(session.report().top_n_global(10, JoinKey::Client)))
    });

    c.bench_function("monthly_vs_target_50k", |b| {
        b.iter(|| black_box(session.report().monthly_vs_target(session.targets())))
    });

    let client = session.client("C7").unwrap();
    c.bench_function("client_top_products", |b| {
        b.iter(|| black_box(client.top_n_counterpart(5, Metric::Quantity).unwrap()))
    });
}

criterion_group!(benches, bench_session_build, bench_reports);
criterion_main!(benches);
