//! # Course Seed SQL
//!
//! 将高尔夫球场 CSV 数据（`course-data.csv`）转换为 `courses` 表的 SQL INSERT 种子语句。
//!
//! ## 功能特性
//!
//! - **逐行清洗**: 去除双引号与首尾空白，校验洞数与经纬度
//! - **安全转义**: 字符串字面量中的单引号统一加倍
//! - **尽力而为**: 缺少必填字段的行静默跳过，畸形数值降级为默认值
//! - **惰性输出**: 语句以迭代器形式逐条产生
//!
//! ## 快速开始
//!
//! ### 单行转换
//!
//! ```rust
//! use course_seed_sql::{CourseRecord, convert};
//!
//! let record = CourseRecord::from_pairs([
//!     ("id", "pebble"),
//!     ("name", "Pebble Beach"),
//!     ("city", "Pebble Beach"),
//!     ("state", "CA"),
//! ]);
//!
//! let sql = convert(&record).unwrap();
//! assert!(sql.starts_with("INSERT INTO courses"));
//! assert!(sql.contains("'Pebble Beach', 'CA', 'US', NULL, 18, NULL, NULL"));
//! ```
//!
//! ### 从字符串批量转换
//!
//! ```rust
//! use course_seed_sql::convert_str;
//!
//! let csv = "id,name,city,state\nst-andrews,Old Course,St Andrews,FIF\nbad,,x,y\n";
//! let statements = convert_str(csv).unwrap();
//! assert_eq!(statements.len(), 1);
//! ```
//!
//! ### 文件到文件
//!
//! ```rust,no_run
//! use course_seed_sql::{ConvertConfig, convert_file};
//!
//! let summary = convert_file(&ConvertConfig::default())?;
//! println!("写入 {} 条语句", summary.statements_written);
//! # Ok::<(), course_seed_sql::ConvertError>(())
//! ```
//!
//! ## 输出格式
//!
//! ```text
//! INSERT INTO courses (id, name, city, state_province, country, postal_code, hole_count, latitude, longitude, is_user_submitted, approved, created_at, updated_at) VALUES ('pebble', 'Pebble Beach', 'Pebble Beach', 'CA', 'US', '93953', 18, 36.5725, -121.9486, FALSE, TRUE, NOW(), NOW());
//! ```

pub mod config;
pub mod converter;
pub mod course;
pub mod error;

pub use config::ConvertConfig;
pub use converter::{
    ConvertSummary, CourseReader, StatementIter, convert, convert_file, convert_reader,
    convert_str, iter_statements_from_file,
};
pub use course::{CleanedCourse, CourseRecord};
pub use error::{ConvertError, Result};
