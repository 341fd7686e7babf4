//! Performance benchmarks for shiptrack-engine

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_json::json;
use shiptrack_engine::{NewShipment, Shipment, ShipmentBook, ShipmentUpdate};
use uuid::Uuid;

fn populated_book(size: i64) -> ShipmentBook {
    let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let mut book = ShipmentBook::new();

    for i in 0..size {
        book.insert(Shipment::new(
            Uuid::new_v4(),
            NewShipment::new(
                format!("TRK{}", i),
                "Paris",
                "Pending",
                NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            ),
            base + Duration::seconds(i),
        ));
    }

    book
}

fn bench_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("validation");

    group.bench_function("new_shipment_from_json", |b| {
        let body = json!({
            "trackingNumber": "TRK1",
            "destination": "Paris",
            "status": "Pending",
            "estimatedDelivery": "2024-01-01",
        });

        b.iter(|| NewShipment::from_json(black_box(&body)))
    });

    group.bench_function("update_from_json_timestamp", |b| {
        let body = json!({"estimatedDelivery": "2024-01-01T12:00:00.000Z"});

        b.iter(|| ShipmentUpdate::from_json(black_box(&body)))
    });

    group.finish();
}

fn bench_book(c: &mut Criterion) {
    let mut group = c.benchmark_group("book");

    for size in [10, 100, 1000].iter() {
        group.bench_with_input(BenchmarkId::new("list", size), size, |b, &size| {
            let book = populated_book(size);
            b.iter(|| book.list().len())
        });

        group.bench_with_input(BenchmarkId::new("find_last", size), size, |b, &size| {
            let book = populated_book(size);
            let tracking_number = format!("TRK{}", size - 1);
            b.iter(|| book.find(black_box(&tracking_number)).is_some())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_validation, bench_book);
criterion_main!(benches);
