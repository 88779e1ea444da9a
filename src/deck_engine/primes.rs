/// Trial division up to √n, skipping multiples of 2 and 3 (6k ± 1 wheel).
pub fn is_prime(n: usize) -> bool {
    if n <= 1 {
        return false;
    }
    if n <= 3 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }
    let mut i = 5;
    while i <= n / i {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_primes() {
        for n in [0, 1, 4, 6, 9, 15, 25, 49, 91, 121] {
            assert!(!is_prime(n), "{n} must not be prime");
        }
    }

    #[test]
    fn accepts_primes() {
        for n in [2, 3, 5, 7, 11, 13, 29, 97, 7919] {
            assert!(is_prime(n), "{n} must be prime");
        }
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn handles_the_largest_64_bit_prime() {
        assert!(is_prime(18_446_744_073_709_551_557));
        assert!(!is_prime(18_446_744_073_709_551_555));
    }

    #[test]
    fn agrees_with_naive_division_below_500() {
        let naive = |n: usize| n > 1 && (2..n).all(|d| n % d != 0);
        for n in 0..500 {
            assert_eq!(is_prime(n), naive(n), "mismatch at {n}");
        }
    }
}
