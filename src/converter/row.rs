//! 单行转换
//!
//! 把一条 `CourseRecord` 转换为零或一条 INSERT 语句。

use crate::converter::constants::{
    DEFAULT_COUNTRY, DEFAULT_INSERT_PREFIX, DEFAULT_TABLE, FIXED_TAIL_VALUES, insert_prefix,
};
use crate::converter::field_functions::{
    coordinate_literal, hole_count_literal, postal_code_literal, quote_literal,
};
use crate::course::{CleanedCourse, CourseRecord};

/// 将一条记录转换为 `courses` 表的 INSERT 语句
///
/// 返回的语句不带结尾换行符，写文件时由调用方追加。
///
/// # 返回
///
/// * `Some(sql)` - id、name、city、state 清洗后均非空
/// * `None` - 任一必填字段为空，该行被跳过
///
/// # 示例
///
/// ```
/// use course_seed_sql::{CourseRecord, convert};
///
/// let record = CourseRecord::from_pairs([
///     ("id", "pebble"),
///     ("name", "Pebble Beach"),
///     ("city", "Pebble Beach"),
///     ("state", "CA"),
///     ("zip", "93953"),
///     ("latitude", "36.5725"),
///     ("longitude", "-121.9486"),
/// ]);
///
/// let sql = convert(&record).unwrap();
/// assert!(sql.ends_with(
///     "VALUES ('pebble', 'Pebble Beach', 'Pebble Beach', 'CA', 'US', '93953', 18, 36.5725, -121.9486, FALSE, TRUE, NOW(), NOW());"
/// ));
///
/// let skipped = CourseRecord::from_pairs([("id", "x"), ("name", "y"), ("city", "z")]);
/// assert!(convert(&skipped).is_none());
/// ```
pub fn convert(record: &CourseRecord) -> Option<String> {
    convert_into_table(record, DEFAULT_TABLE)
}

/// 与 [`convert`] 相同，但写入指定的表
pub fn convert_into_table(record: &CourseRecord, table: &str) -> Option<String> {
    let cleaned = record.clean();
    if !cleaned.has_required_fields() {
        return None;
    }
    Some(render_statement(&cleaned, table))
}

/// 拼接 INSERT 语句（调用前必须已通过必填字段检查）
fn render_statement(cleaned: &CleanedCourse, table: &str) -> String {
    let country = if cleaned.country.is_empty() {
        DEFAULT_COUNTRY
    } else {
        cleaned.country.as_str()
    };

    let values = [
        quote_literal(&cleaned.id),
        quote_literal(&cleaned.name),
        quote_literal(&cleaned.city),
        quote_literal(&cleaned.state),
        quote_literal(country),
        postal_code_literal(&cleaned.zip).into_owned(),
        hole_count_literal(&cleaned.hole_count).to_string(),
        coordinate_literal(&cleaned.latitude).to_string(),
        coordinate_literal(&cleaned.longitude).to_string(),
    ];

    let mut sql = if table == DEFAULT_TABLE {
        (*DEFAULT_INSERT_PREFIX).clone()
    } else {
        insert_prefix(table)
    };
    sql.push_str(&values.join(", "));
    sql.push_str(", ");
    sql.push_str(FIXED_TAIL_VALUES);
    sql.push_str(");");
    sql
}
