//! Performance benchmarks for record and book lookups.
//!
//! These benchmarks measure:
//! - Phone lookup on a record with a growing phone list
//! - Name lookup in a book with a growing number of records

use address_book::{AddressBook, ContactRecord};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn phone_for(i: usize) -> String {
    format!("{:010}", i)
}

fn record_with_phones(count: usize) -> ContactRecord {
    let mut record = ContactRecord::new("Bench").unwrap();
    for i in 0..count {
        record.add_phone(&phone_for(i)).unwrap();
    }
    record
}

fn book_with_records(count: usize) -> AddressBook {
    let mut book = AddressBook::new();
    for i in 0..count {
        book.add_record(ContactRecord::new(format!("Contact {}", i)).unwrap());
    }
    book
}

/// Benchmark worst-case `find_phone` (last entry) for several list sizes.
fn bench_find_phone(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_phone");

    for size in [1, 10, 100] {
        let record = record_with_phones(size);
        let target = phone_for(size - 1);

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| record.find_phone(black_box(&target)));
        });
    }

    group.finish();
}

/// Benchmark `find` by name for several book sizes.
fn bench_book_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("book_find");

    for size in [10, 1_000, 10_000] {
        let book = book_with_records(size);
        let target = format!("Contact {}", size / 2);

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| book.find(black_box(&target)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_find_phone, bench_book_find);
criterion_main!(benches);
