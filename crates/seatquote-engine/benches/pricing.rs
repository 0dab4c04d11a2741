//! SeatQuote pricing benchmarks
//!
//! Pricing a full breakdown is expected to stay far below the 10ms target.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use seatquote_common::{PricingConfig, Selection};
use seatquote_engine::{ExportOptions, PricingEngine, QuoteDocument, QuoteService};
use std::time::Duration;

fn bench_breakdown(c: &mut Criterion) {
    let mut group = c.benchmark_group("breakdown");
    group.measurement_time(Duration::from_secs(5));

    let engine = PricingEngine::default();
    for seats in [10u32, 18, 25, 200].iter() {
        let selection = Selection::new(10)
            .with_seats(*seats, 10)
            .with_billing_option("quarterly")
            .with_deliverable("pci-dss")
            .with_deliverable("kyc-aml");

        group.bench_with_input(BenchmarkId::new("seats", seats), &selection, |b, selection| {
            b.iter(|| engine.breakdown(black_box(selection)))
        });
    }

    group.finish();
}

fn bench_quote_service(c: &mut Criterion) {
    let mut group = c.benchmark_group("quote_service");

    let Ok(service) = QuoteService::new(PricingConfig::default()) else {
        return;
    };
    let selection = Selection::new(10).with_payment_method("credit");
    service.quote(&selection);

    group.bench_function("cached", |b| {
        b.iter(|| service.quote(black_box(&selection)))
    });

    group.bench_function("uncached", |b| {
        let mut seats = 10u32;
        b.iter(|| {
            seats = if seats > 5_000 { 10 } else { seats + 1 };
            service.quote(black_box(&selection.clone().with_seats(seats, 10)))
        })
    });

    group.finish();
}

fn bench_export(c: &mut Criterion) {
    let engine = PricingEngine::default();
    let selection = Selection::new(10).with_deliverable("custom-security");
    let document = QuoteDocument::issue(&engine, &selection);
    let options = ExportOptions::default();

    c.bench_function("render_text", |b| {
        b.iter(|| seatquote_engine::quote::render_text(black_box(&document), &options))
    });
}

criterion_group!(benches, bench_breakdown, bench_quote_service, bench_export);
criterion_main!(benches);
