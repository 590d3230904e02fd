//! Dice rolled from several threads share one generator safely.

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use dr_die::{Die, RollerConfig, reseed_shared};

#[test]
fn rolls_from_many_threads_stay_in_range() {
    let handles: Vec<_> = (1..=8u32)
        .map(|t| {
            thread::spawn(move || {
                let sides = t * 30;
                let mut die = Die::new(sides).unwrap();
                for _ in 0..10_000 {
                    let value = die.roll();
                    assert!((1..=die.sides()).contains(&value));
                    assert_eq!(value, die.face_value());
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn nested_shared_path_calls_return() {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let mut outer = Die::default();
        let values: Vec<u8> = (0..100)
            .map(|i| {
                reseed_shared(&RollerConfig::default().with_seed(i));
                let mut inner = Die::new(u32::from(outer.roll())).unwrap();
                inner.roll()
            })
            .collect();
        reseed_shared(&RollerConfig::default());
        tx.send(values).unwrap();
    });

    let values = rx
        .recv_timeout(Duration::from_secs(10))
        .expect("shared-path calls did not return");
    assert_eq!(values.len(), 100);
    assert!(values.iter().all(|&v| (1..=6).contains(&v)));
}
