use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dejournal::core::hash::ContentHasher;
use dejournal::{decode, encode, hash, HashBackendKind, JournalEntry, JournalInstruction, Normalization};
use dejournal::query::{assemble_feed, FeedQuery};
use dejournal::JournalAccount;

const TEXT: &str = "Had an amazing time at the beach with friends!";

fn bench_hash(c: &mut Criterion) {
    let raw = ContentHasher::new(HashBackendKind::Auto, Normalization::None).unwrap();
    let nfc = ContentHasher::new(HashBackendKind::Auto, Normalization::Nfc).unwrap();
    c.bench_function("hash_raw", |b| b.iter(|| raw.hash(black_box(TEXT)).unwrap()));
    c.bench_function("hash_nfc", |b| b.iter(|| nfc.hash(black_box(TEXT)).unwrap()));
}

fn bench_codec(c: &mut Criterion) {
    let entry = JournalEntry::with_timestamp(hash(TEXT).unwrap(), true, 1_700_000_000, "WALLET1");
    let bytes = encode(&entry);
    c.bench_function("encode_entry", |b| b.iter(|| encode(black_box(&entry))));
    c.bench_function("decode_entry", |b| b.iter(|| decode(black_box(&bytes)).unwrap()));
    c.bench_function("encode_submit_instruction", |b| {
        b.iter(|| JournalInstruction::submit(black_box(entry.clone())).encode())
    });
}

fn bench_feed(c: &mut Criterion) {
    let records: Vec<(String, Vec<u8>)> = (0..500u64)
        .map(|i| {
            let entry = JournalEntry::with_timestamp(
                hash(&format!("entry {}", i)).unwrap(),
                i % 3 != 0,
                i * 7 % 500,
                "WALLET1",
            );
            (format!("addr{}", i), JournalAccount::from_entry(entry).encode())
        })
        .collect();
    let query = FeedQuery::page(2, 20);
    c.bench_function("assemble_feed_500", |b| {
        b.iter(|| assemble_feed(black_box(records.clone()), &query))
    });
}

criterion_group!(benches, bench_hash, bench_codec, bench_feed);
criterion_main!(benches);
