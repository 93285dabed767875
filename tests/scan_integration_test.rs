use prime_scan::{find_primes_in_range, is_prime, Range, ScanEngine};

#[test]
fn test_reference_range_has_78498_primes() {
    let report = ScanEngine::new(Range::default()).run();

    assert_eq!(report.count(), 78_498);
    assert_eq!(report.primes.first(), Some(&2));
    assert_eq!(report.primes.last(), Some(&999_983));
    assert_eq!(
        report.summary()[0],
        "Found 78498 primes between 1 and 1000000"
    );
    assert!(report.summary()[1].starts_with("Execution time: "));
    assert!(report.summary()[1].ends_with(" seconds"));
}

#[test]
fn test_scan_agrees_with_primality_test() {
    let range = Range::new(-20, 3_000);
    let primes = find_primes_in_range(range);

    let expected: Vec<i64> = (range.start..=range.end).filter(|&n| is_prime(n)).collect();
    assert_eq!(primes.into_inner(), expected);
}

#[test]
fn test_counts_of_small_prefixes() {
    // π(10^k)
    for (end, count) in [(10, 4), (100, 25), (1_000, 168), (10_000, 1_229)] {
        assert_eq!(find_primes_in_range(Range::new(1, end)).len(), count);
    }
}

#[test]
fn test_adjacent_ranges_concatenate() {
    let low = find_primes_in_range(Range::new(1, 500));
    let high = find_primes_in_range(Range::new(501, 1_000));
    let whole = find_primes_in_range(Range::new(1, 1_000));

    let joined: Vec<i64> = low.iter().chain(high.iter()).copied().collect();
    assert_eq!(joined, whole.into_inner());
}
