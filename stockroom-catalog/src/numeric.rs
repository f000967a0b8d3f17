use serde_json::Value;

/// Whether `value` is integral: any integer, or a float with no fractional
/// part. Non-finite floats and non-numbers (including booleans) are not.
pub fn is_integer(value: &Value) -> bool {
    match value {
        Value::Number(number) if number.is_i64() || number.is_u64() => true,
        Value::Number(number) => number
            .as_f64()
            .map(|f| f.is_finite() && f.fract() == 0.0)
            .unwrap_or(false),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_integer() {
        assert!(is_integer(&json!(5.0)));
        assert!(!is_integer(&json!(5.7)));
        assert!(is_integer(&json!(5)));
        assert!(!is_integer(&json!("x")));
    }

    #[test]
    fn test_is_integer_edges() {
        assert!(is_integer(&json!(-3)));
        assert!(is_integer(&json!(u64::MAX)));
        assert!(is_integer(&json!(-0.0)));
        assert!(!is_integer(&json!(true)));
        assert!(!is_integer(&Value::Null));
        assert!(!is_integer(&json!([1])));
        assert!(!is_integer(&json!("5")));
    }
}
