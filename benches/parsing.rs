//! Benchmarks for IRC message parsing and serialization.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use slirc_client::{irc_eq, Message, Prefix};

/// Simple PING message
const SIMPLE_MESSAGE: &str = "PING :irc.example.com";

/// Message with prefix
const PREFIX_MESSAGE: &str = ":nick!user@host PRIVMSG #channel :Hello, world!";

/// Numeric response
const NUMERIC_RESPONSE: &str = ":irc.example.net 001 testuser :Welcome testuser!~john.doe@172.17.0.1";

/// ISUPPORT line with many middle parameters
const ISUPPORT: &str = ":irc.example.com 005 testuser CHANNELLEN=50 NICKLEN=9 TOPICLEN=490 AWAYLEN=127 KICKLEN=400 MODES=5 MAXLIST=beI:50 EXCEPTS=e INVEX=I PENALTY :are supported on this server";

const CASES: &[(&str, &str)] = &[
    ("simple_ping", SIMPLE_MESSAGE),
    ("with_prefix", PREFIX_MESSAGE),
    ("numeric_response", NUMERIC_RESPONSE),
    ("isupport", ISUPPORT),
];

fn benchmark_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("Message Parsing");

    for (name, line) in CASES {
        group.bench_function(*name, |b| {
            b.iter(|| {
                let msg: Message = black_box(*line).parse().unwrap();
                black_box(msg)
            })
        });
    }

    group.finish();
}

fn benchmark_serialization(c: &mut Criterion) {
    let mut group = c.benchmark_group("Message Serialization");

    for (name, line) in CASES {
        let msg: Message = line.parse().unwrap();
        group.bench_function(*name, |b| {
            b.iter(|| {
                let s = black_box(&msg).to_string();
                black_box(s)
            })
        });
    }

    group.finish();
}

fn benchmark_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("Message Construction");

    group.bench_function("privmsg_simple", |b| {
        b.iter(|| {
            let msg = Message::privmsg(black_box("#channel"), black_box("Hello, world!"));
            black_box(msg)
        })
    });

    group.bench_function("privmsg_with_prefix", |b| {
        b.iter(|| {
            let msg = Message::privmsg(black_box("#channel"), black_box("Hello!"))
                .with_prefix(Prefix::parse(black_box("nick!user@host")));
            black_box(msg)
        })
    });

    group.bench_function("join_validated", |b| {
        b.iter(|| {
            let msg = Message::join(black_box("#rustlang")).unwrap();
            black_box(msg)
        })
    });

    group.finish();
}

fn benchmark_round_trip(c: &mut Criterion) {
    let mut group = c.benchmark_group("Round Trip");

    for (name, line) in CASES {
        group.bench_with_input(BenchmarkId::new("parse_serialize", name), line, |b, s| {
            b.iter(|| {
                let msg: Message = black_box(*s).parse().unwrap();
                let serialized = msg.to_string();
                black_box(serialized)
            })
        });
    }

    group.finish();
}

fn benchmark_casemap(c: &mut Criterion) {
    c.bench_function("irc_eq", |b| {
        b.iter(|| black_box(irc_eq(black_box("Nick[Away]"), black_box("nick{away}"))))
    });
}

criterion_group!(
    benches,
    benchmark_parsing,
    benchmark_serialization,
    benchmark_construction,
    benchmark_round_trip,
    benchmark_casemap,
);

criterion_main!(benches);
