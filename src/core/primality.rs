/// 試除法質數判定。
///
/// 對所有 `i64` 皆有定義：小於 2 的數 (含 0、1 與負數) 一律不是質數。
/// 除數上限用 `i <= n / i` 比較，等價於 `i * i <= n` 但在 `i64::MAX`
/// 附近不會溢位，也不經過浮點數開根號。
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }

    let mut i = 2;
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}
