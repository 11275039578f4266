//! 宽松数值转换
//!
//! 表单数值字段在提交前必须转换为数字。无法解析或为空的输入一律记为 0，
//! 不报错。解析规则：跳过前导空白，取最长的合法数字前缀，忽略其后的字符。

use regex::Regex;
use std::sync::OnceLock;

fn decimal_prefix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?").expect("静态正则")
    })
}

fn integer_prefix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^([+-])?(?:0[xX]([0-9a-fA-F]+)|([0-9]+))").expect("静态正则")
    })
}

/// 把文本解析为小数，失败时返回 0
///
/// 非有限值（溢出为无穷大）同样记为 0，`-0` 归一为 `0`。
pub fn lenient_f64(raw: &str) -> f64 {
    let text = raw.trim_start();
    let Some(m) = decimal_prefix().find(text) else {
        return 0.0;
    };

    match m.as_str().parse::<f64>() {
        Ok(v) if v.is_finite() && v != 0.0 => v,
        _ => 0.0,
    }
}

/// 把文本解析为整数，失败时返回 0
///
/// 支持 `0x` 十六进制前缀；小数部分被截断（`"3.7"` → 3）。
/// 超出 i64 范围的值记为 0。
pub fn lenient_i64(raw: &str) -> i64 {
    let text = raw.trim_start();
    let Some(caps) = integer_prefix().captures(text) else {
        return 0;
    };

    let negative = caps.get(1).map(|s| s.as_str() == "-").unwrap_or(false);
    let (digits, radix) = match (caps.get(2), caps.get(3)) {
        (Some(hex), _) => (hex.as_str(), 16),
        (None, Some(dec)) => (dec.as_str(), 10),
        (None, None) => return 0,
    };

    // 带符号后再收窄，i64::MIN 才能保留
    i128::from_str_radix(digits, radix)
        .ok()
        .map(|v| if negative { -v } else { v })
        .and_then(|v| i64::try_from(v).ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lenient_f64_plain_values() {
        assert_eq!(lenient_f64("100.5"), 100.5);
        assert_eq!(lenient_f64("  42"), 42.0);
        assert_eq!(lenient_f64(".5"), 0.5);
        assert_eq!(lenient_f64("-3.25"), -3.25);
        assert_eq!(lenient_f64("1.5e2"), 150.0);
    }

    #[test]
    fn test_lenient_f64_takes_numeric_prefix() {
        assert_eq!(lenient_f64("12abc"), 12.0);
        assert_eq!(lenient_f64("7.5 USD"), 7.5);
        // 指数部分不完整时只取前面的数字
        assert_eq!(lenient_f64("1e"), 1.0);
        // 非 ASCII 数字不属于数字前缀
        assert_eq!(lenient_f64("7.5\u{0663}"), 7.5);
        assert_eq!(lenient_f64("\u{0663}"), 0.0);
    }

    #[test]
    fn test_lenient_f64_defaults_to_zero() {
        assert_eq!(lenient_f64(""), 0.0);
        assert_eq!(lenient_f64("   "), 0.0);
        assert_eq!(lenient_f64("abc"), 0.0);
        assert_eq!(lenient_f64("."), 0.0);
        assert_eq!(lenient_f64("1e999"), 0.0);
        assert!(lenient_f64("-0").is_sign_positive());
    }

    #[test]
    fn test_lenient_i64_plain_values() {
        assert_eq!(lenient_i64("30"), 30);
        assert_eq!(lenient_i64(" 15"), 15);
        assert_eq!(lenient_i64("-5"), -5);
        assert_eq!(lenient_i64("+8"), 8);
    }

    #[test]
    fn test_lenient_i64_truncates_and_ignores_suffix() {
        assert_eq!(lenient_i64("3.7"), 3);
        assert_eq!(lenient_i64("14h"), 14);
        assert_eq!(lenient_i64("0x1A"), 26);
        assert_eq!(lenient_i64("0x"), 0);
        assert_eq!(lenient_i64("12\u{0663}"), 12);
        assert_eq!(lenient_i64("\u{0663}4"), 0);
    }

    #[test]
    fn test_lenient_i64_keeps_i64_bounds() {
        assert_eq!(lenient_i64("-9223372036854775808"), i64::MIN);
        assert_eq!(lenient_i64("9223372036854775807"), i64::MAX);
        assert_eq!(lenient_i64("-0x8000000000000000"), i64::MIN);
        assert_eq!(lenient_i64("0x7fffffffffffffff"), i64::MAX);
        assert_eq!(lenient_i64("9223372036854775808"), 0);
        assert_eq!(lenient_i64("-9223372036854775809"), 0);
        assert_eq!(lenient_i64("0x8000000000000000"), 0);
    }

    #[test]
    fn test_lenient_i64_defaults_to_zero() {
        assert_eq!(lenient_i64(""), 0);
        assert_eq!(lenient_i64("two"), 0);
        assert_eq!(lenient_i64(".9"), 0);
        assert_eq!(lenient_i64("99999999999999999999999"), 0);
    }
}
