use spansort::prelude::*;
use rand::Rng;
use std::time::Instant;

#[test]
fn test_sort_100k() {
    let count = 100_000;
    println!("Generating {} random elements...", count);

    let mut rng = rand::rng();
    let input: Vec<Element> = (0..count)
        .map(|_| Element::from(rng.random_range(-500.0..500.0)))
        .collect();

    println!("Sorting {} elements...", count);
    let start = Instant::now();
    let sorted = spansort(input, 8, 500).unwrap();
    let duration = start.elapsed();
    println!("Sorted {} elements in {:?}", count, duration);

    assert_eq!(sorted.len(), count);
    assert!(is_sorted(&sorted));
}

#[test]
#[ignore]
fn test_sort_10m() {
    // WARNING: slow under the default bubble strategy; NativeSort keeps
    // this within a few seconds while still exercising the pool at scale.
    let count = 10_000_000;
    println!("Generating {} random elements...", count);

    let mut rng = rand::rng();
    let input: Vec<Element> = (0..count)
        .map(|_| Element::from(rng.random_range(-1_000_000.0..1_000_000.0)))
        .collect();

    println!("Sorting {} elements...", count);
    let start = Instant::now();
    let sorted = spansort_with(input, 16, 1_000, &NativeSort).unwrap();
    let duration = start.elapsed();
    println!("Sorted {} elements in {:?}", count, duration);

    assert_eq!(sorted.len(), count);

    // limited verification to save time
    for pair in sorted.windows(2).step_by(1_000) {
        let (a, b) = (pair[0].as_number().unwrap(), pair[1].as_number().unwrap());
        assert!(a <= b, "Sort failed around {a} > {b}");
    }
}
