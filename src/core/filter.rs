/// Plain function-pointer predicate.
pub type GeneralFunc = fn(i64) -> bool;

pub const DEFAULT_SEQUENCE: [i64; 7] = [1, 1, 2, 3, 5, 8, 13];
pub const DEFAULT_THRESHOLD: i64 = 10;

/// Keeps the elements for which `condition` holds, in input order.
///
/// The predicate runs exactly once per element, front to back, and the input
/// slice is left untouched.
pub fn filter<F>(nums: &[i64], mut condition: F) -> Vec<i64>
where
    F: FnMut(i64) -> bool,
{
    let mut out = Vec::new();
    for &num in nums {
        if condition(num) {
            out.push(num);
        }
    }
    out
}

pub fn smaller_than_10(i: i64) -> bool {
    i < 10
}

pub fn less_than(threshold: i64) -> impl Fn(i64) -> bool {
    move |i| i < threshold
}

/// Renders `[1 1 2 3 5 8]`.
pub fn format_sequence(nums: &[i64]) -> String {
    let parts: Vec<String> = nums.iter().map(|n| n.to_string()).collect();
    format!("[{}]", parts.join(" "))
}
