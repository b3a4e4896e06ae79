//! Benchmarks for the roster renderer
//!
//! Run with: cargo bench

use campus_signup::{render, Activity, ActivityCollection, Session};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

fn create_collection(activities: usize, participants: usize) -> ActivityCollection {
    (0..activities).fold(ActivityCollection::new(), |collection, i| {
        let activity = (0..participants).fold(
            Activity::new("Weekly club meeting", "Fridays, 3:30 PM - 5:00 PM", 30),
            |activity, p| activity.participant(&format!("student{}@mergington.edu", p)),
        );
        collection.with(&format!("Activity {}", i), activity)
    })
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let staff = Session::authenticated("mchen");

    for size in [10, 100, 1000] {
        let collection = create_collection(size, 20);

        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("anonymous_{}", size), |b| {
            b.iter(|| render(black_box(&collection), black_box(&Session::Anonymous)))
        });

        group.bench_function(format!("staff_{}", size), |b| {
            b.iter(|| render(black_box(&collection), black_box(&staff)))
        });

        let roster = render(&collection, &staff);
        group.bench_function(format!("to_html_{}", size), |b| {
            b.iter(|| black_box(&roster).to_html().unwrap())
        });

        group.bench_function(format!("to_text_{}", size), |b| {
            b.iter(|| black_box(&roster).to_text())
        });
    }

    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    let body = {
        let entries: Vec<String> = (0..100)
            .map(|i| {
                format!(
                    r#""Activity {}": {{"description": "d", "schedule": "s", "max_participants": 30, "participants": ["a@b.edu", "c@d.edu"]}}"#,
                    i
                )
            })
            .collect();
        format!("{{{}}}", entries.join(","))
    };

    group.bench_function("activities_100", |b| {
        b.iter(|| ActivityCollection::from_json(black_box(&body)).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_render, bench_parse);
criterion_main!(benches);
