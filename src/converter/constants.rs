//! 转换器使用的常量定义
//!
//! 包括默认文件名、字段默认值、目标列顺序以及预先拼好的 INSERT 前缀。

use once_cell::sync::Lazy;

// 文件与表

/// 默认输入文件（当前工作目录）
pub const DEFAULT_INPUT_FILE: &str = "course-data.csv";

/// 默认输出文件（当前工作目录，存在则覆盖）
pub const DEFAULT_OUTPUT_FILE: &str = "courses_seed.sql";

/// 默认目标表
pub const DEFAULT_TABLE: &str = "courses";

// 输入字段

/// 可识别的 CSV 表头字段
pub const INPUT_FIELDS: [&str; 9] = [
    "id",
    "name",
    "city",
    "state",
    "country",
    "zip",
    "holeCount",
    "latitude",
    "longitude",
];

// 字段默认值

/// `country` 缺失或清洗后为空时使用的国家代码
pub const DEFAULT_COUNTRY: &str = "US";

/// `holeCount` 缺失或不是纯数字时使用的洞数
pub const DEFAULT_HOLE_COUNT: &str = "18";

// SQL 片段

/// SQL 空值
pub const SQL_NULL: &str = "NULL";

/// 固定列的取值：is_user_submitted, approved, created_at, updated_at
pub const FIXED_TAIL_VALUES: &str = "FALSE, TRUE, NOW(), NOW()";

/// 目标列，顺序与 VALUES 一一对应
pub const COLUMNS: [&str; 13] = [
    "id",
    "name",
    "city",
    "state_province",
    "country",
    "postal_code",
    "hole_count",
    "latitude",
    "longitude",
    "is_user_submitted",
    "approved",
    "created_at",
    "updated_at",
];

/// 默认表的 INSERT 前缀，直到 `VALUES (` 为止
pub static DEFAULT_INSERT_PREFIX: Lazy<String> = Lazy::new(|| insert_prefix(DEFAULT_TABLE));

/// 拼接指定表名的 INSERT 前缀
pub fn insert_prefix(table: &str) -> String {
    format!("INSERT INTO {} ({}) VALUES (", table, COLUMNS.join(", "))
}
