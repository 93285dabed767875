use crate::core::primality::is_prime;
use crate::domain::model::{PrimeList, Range};

/// 依遞增順序找出 [start, end] 內所有質數。start > end 時回傳空序列。
pub fn find_primes_in_range(range: Range) -> PrimeList {
    let primes = (range.start..=range.end).filter(|&n| is_prime(n)).collect();
    PrimeList::from_sorted(primes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_ranges() {
        assert_eq!(*find_primes_in_range(Range::new(1, 10)), [2, 3, 5, 7]);
        assert_eq!(*find_primes_in_range(Range::new(10, 20)), [11, 13, 17, 19]);
        assert!(find_primes_in_range(Range::new(0, 1)).is_empty());
    }

    #[test]
    fn test_inverted_range_is_empty() {
        assert!(find_primes_in_range(Range::new(20, 10)).is_empty());
        assert!(find_primes_in_range(Range::new(i64::MAX, i64::MIN)).is_empty());
    }

    #[test]
    fn test_single_point_ranges() {
        assert_eq!(*find_primes_in_range(Range::new(2, 2)), [2]);
        assert!(find_primes_in_range(Range::new(4, 4)).is_empty());
    }

    #[test]
    fn test_negative_start() {
        assert_eq!(*find_primes_in_range(Range::new(-50, 5)), [2, 3, 5]);
    }

    #[test]
    fn test_range_ending_at_i64_max() {
        // 9223372036854775783 是 i64 範圍內最大的質數
        let primes = find_primes_in_range(Range::new(i64::MAX - 1, i64::MAX));
        assert!(primes.is_empty());
    }

    #[test]
    fn test_output_is_strictly_ascending_and_prime() {
        let primes = find_primes_in_range(Range::new(-100, 5_000));
        assert!(primes.windows(2).all(|w| w[0] < w[1]));
        assert!(primes.iter().all(|&p| is_prime(p)));
    }

    #[test]
    fn test_scan_is_idempotent() {
        let range = Range::new(500, 1_500);
        assert_eq!(find_primes_in_range(range), find_primes_in_range(range));
    }
}
