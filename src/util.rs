/// Rounds on the exact decimal expansion of `value`, so a double just below a
/// half step (e.g. the one nearest 1.0005) rounds down.
pub fn round_3(value: f64) -> f64 {
    format!("{:.3}", value).parse().unwrap_or(value)
}
