//! Converter 模块 - 将球场 CSV 转换为 SQL INSERT 语句
//!
//! 此模块提供了完整的转换功能,包括:
//! - 字段清洗与 SQL 字面量生成
//! - 单行转换
//! - CSV 流式读取与语句迭代
//! - 便捷 API 函数

mod api;
pub mod constants;
pub mod course_reader;
pub mod field_functions;
pub mod row;
pub mod statement_iter;

pub use api::{ConvertSummary, convert_file, convert_reader, convert_str, iter_statements_from_file};
pub use course_reader::CourseReader;
pub use row::{convert, convert_into_table};
pub use statement_iter::StatementIter;

#[cfg(test)]
mod tests;
