use base::scalar::F64;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use window::RankedWindow;

fn nth_highest<T: Ord + Clone>(values: &[T], n: usize) -> Option<T> {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| b.cmp(a));
    sorted.get(n - 1).cloned()
}

#[test]
fn matches_sorting() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..200 {
        let n = rng.gen_range(1..=16);
        let len = rng.gen_range(0..64);
        let values = (0..len).map(|_| rng.gen_range(-20..20)).collect::<Vec<i32>>();
        let mut window = RankedWindow::new(n).unwrap();
        for (i, &x) in values.iter().enumerate() {
            window.update(x);
            let seen = &values[..=i];
            if seen.len() < n {
                assert_eq!(window.query(), None);
            } else {
                assert_eq!(window.query().copied(), nth_highest(seen, n), "n = {n}, seen = {seen:?}");
            }
        }
    }
}

#[test]
fn answer_never_decreases() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut window = RankedWindow::new(10).unwrap();
    let mut last = None;
    for _ in 0..10_000 {
        window.update(rng.gen::<u32>());
        let current = window.query().copied();
        if last.is_some() {
            assert!(current >= last);
        }
        last = current;
    }
    assert!(last.is_some());
}

#[test]
fn query_is_idempotent() {
    let mut window = RankedWindow::new(2).unwrap();
    window.extend([1, 5, 3]);
    let first = window.query().copied();
    assert_eq!(window.query().copied(), first);
    assert_eq!(window.query().copied(), Some(3));
}

#[test]
fn first_full_answer_is_minimum_of_prefix() {
    let values = [12, 40, 3, 27, 8];
    let mut window = RankedWindow::new(values.len()).unwrap();
    window.extend(values);
    assert_eq!(window.query(), values.iter().min());
    window.update(1);
    assert_eq!(window.query(), Some(&3));
}

#[test]
fn float_stream() {
    let mut rng = StdRng::seed_from_u64(42);
    let values = (0..500)
        .map(|_| F64(rng.gen_range(-1e3..1e3)))
        .collect::<Vec<_>>();
    let mut window = RankedWindow::new(25).unwrap();
    for &x in values.iter() {
        window.try_update(F64::defined(x.0)).unwrap();
    }
    assert!(window.try_update(F64::defined(f64::NAN)).is_err());
    assert_eq!(window.query().copied(), nth_highest(&values, 25));
}
