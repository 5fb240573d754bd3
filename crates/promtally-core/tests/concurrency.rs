#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;
use std::thread;

use promtally_core::{Counter, Gauge, Histogram, LabelSet, Registry};

const THREADS: usize = 16;
const ITERS: usize = 1_000;

#[test]
fn concurrent_counter_increments_are_not_lost() {
    let c = Arc::new(Counter::new("hits_total", "hits", LabelSet::new()).unwrap());
    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let c = Arc::clone(&c);
            thread::spawn(move || {
                for _ in 0..ITERS {
                    c.inc();
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }
    assert_eq!(c.value(), (THREADS * ITERS) as f64);
}

#[test]
fn concurrent_gauge_inc_dec_cancels_out() {
    let g = Arc::new(Gauge::new("inflight", "in flight", LabelSet::new()).unwrap());
    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let g = Arc::clone(&g);
            thread::spawn(move || {
                for _ in 0..ITERS {
                    g.inc();
                    g.dec();
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }
    assert_eq!(g.value(), 0.0);
}

#[test]
fn histogram_updates_are_never_torn() {
    let reg = Arc::new(Registry::new());
    let h = Arc::new(Histogram::new("work", "work", &[1.0, 2.0], LabelSet::new()).unwrap());
    reg.register(Arc::clone(&h)).unwrap();

    let writers: Vec<_> = (0..THREADS)
        .map(|_| {
            let h = Arc::clone(&h);
            thread::spawn(move || {
                for _ in 0..ITERS {
                    h.observe(0.5);
                }
            })
        })
        .collect();

    let reader = {
        let reg = Arc::clone(&reg);
        thread::spawn(move || {
            for _ in 0..200 {
                let fams = reg.gather();
                let samples = &fams[0].samples;
                // every bucket, +Inf and _count move together
                let first = samples[0].value;
                assert!(samples[..3].iter().all(|s| s.value == first));
                assert_eq!(samples[4].value, first);
                assert_eq!(samples[3].value, first * 0.5);
            }
        })
    };

    for w in writers {
        w.join().unwrap();
    }
    reader.join().unwrap();
    assert_eq!(h.count(), (THREADS * ITERS) as u64);
}

#[test]
fn concurrent_registration_is_consistent() {
    let reg = Arc::new(Registry::new());
    let handles: Vec<_> = (0..THREADS)
        .map(|i| {
            let reg = Arc::clone(&reg);
            thread::spawn(move || {
                let c = Counter::new(format!("worker_{i}_total"), "w", LabelSet::new()).unwrap();
                reg.register(c).unwrap();
                let _ = reg.collect();
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }
    assert_eq!(reg.len(), THREADS);
}

#[test]
fn racing_duplicate_registration_admits_one() {
    let reg = Arc::new(Registry::new());
    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let reg = Arc::clone(&reg);
            thread::spawn(move || {
                let c = Counter::new("shared_total", "s", LabelSet::new()).unwrap();
                reg.register(c).is_ok()
            })
        })
        .collect();
    let wins = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|ok| *ok)
        .count();
    assert_eq!(wins, 1);
    assert_eq!(reg.len(), 1);
}
