//! 字段清洗与 SQL 字面量函数
//!
//! 所有函数都是纯函数，不做 I/O，也不会失败：畸形输入一律降级为默认值。

use std::borrow::Cow;

use memchr::memchr;

use crate::converter::constants::{DEFAULT_HOLE_COUNT, SQL_NULL};

const DOUBLE_QUOTE: u8 = b'"';
const SINGLE_QUOTE: u8 = b'\'';

/// 清洗字符串字段：删除所有双引号，再去掉首尾空白
///
/// # 示例
///
/// ```
/// use course_seed_sql::converter::field_functions::clean_text;
///
/// assert_eq!(clean_text("  \"Pebble Beach\" "), "Pebble Beach");
/// assert_eq!(clean_text("The \"Old\" Course"), "The Old Course");
/// ```
pub fn clean_text(raw: &str) -> String {
    if memchr(DOUBLE_QUOTE, raw.as_bytes()).is_none() {
        return raw.trim().to_string();
    }
    let stripped: String = raw.chars().filter(|&c| c != '"').collect();
    stripped.trim().to_string()
}

/// 是否为非空且全部由 ASCII 十进制数字组成
#[inline]
pub fn is_all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// 经纬度形状检查
///
/// 只接受十进制小数形状：可选的前导 `-`，然后是 `digits`、`digits.`、`digits.digits`
/// 或 `.digits`。不接受指数、`+` 号、多个点或多个负号：
/// 连续的 `--` 在 SQL 中会开启注释并吞掉语句剩余部分。
pub fn is_coordinate_shape(s: &str) -> bool {
    let unsigned = s.strip_prefix('-').unwrap_or(s);
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    let int_ok = int_part.bytes().all(|b| b.is_ascii_digit());
    let frac_ok = frac_part.is_none_or(|f| f.bytes().all(|b| b.is_ascii_digit()));
    let has_digit = !int_part.is_empty() || frac_part.is_some_and(|f| !f.is_empty());

    int_ok && frac_ok && has_digit
}

/// 将单引号加倍，使其可以安全嵌入单引号包围的 SQL 字符串
///
/// 不含单引号时直接借用原字符串。
pub fn escape_sql_literal(s: &str) -> Cow<'_, str> {
    if memchr(SINGLE_QUOTE, s.as_bytes()).is_none() {
        Cow::Borrowed(s)
    } else {
        Cow::Owned(s.replace('\'', "''"))
    }
}

/// 转义并加上单引号
pub fn quote_literal(s: &str) -> String {
    let escaped = escape_sql_literal(s);
    let mut out = String::with_capacity(escaped.len() + 2);
    out.push('\'');
    out.push_str(&escaped);
    out.push('\'');
    out
}

/// 洞数字面量：纯数字原样输出，否则为默认的 `18`
#[inline]
pub fn hole_count_literal(cleaned: &str) -> &str {
    if is_all_digits(cleaned) {
        cleaned
    } else {
        DEFAULT_HOLE_COUNT
    }
}

/// 邮编字面量：非空时转义加引号，否则为 `NULL`
pub fn postal_code_literal(cleaned_zip: &str) -> Cow<'_, str> {
    if cleaned_zip.is_empty() {
        Cow::Borrowed(SQL_NULL)
    } else {
        Cow::Owned(quote_literal(cleaned_zip))
    }
}

/// 经纬度字面量：形状合法时原样（不加引号、不转义）输出，否则为 `NULL`
#[inline]
pub fn coordinate_literal(trimmed: &str) -> &str {
    if is_coordinate_shape(trimmed) {
        trimmed
    } else {
        SQL_NULL
    }
}
