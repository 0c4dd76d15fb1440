//! 错误类型定义
//!
//! 只包含进程级（致命）错误。行级问题（缺少必填字段、畸形数值）不会产生错误，
//! 而是降级为默认值或跳过该行。

use thiserror::Error;

/// 转换错误类型
///
/// 任何一个变体出现都意味着本次转换失败，调用方应终止运行。
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    /// 输入文件不存在或无法打开
    #[error("file not found or inaccessible: {0}")]
    FileNotFound(String),

    /// 输出文件无法创建或写入
    #[error("cannot write output: {0}")]
    OutputError(String),

    /// 读取过程中的 I/O 错误
    #[error("I/O error: {0}")]
    IoError(String),

    /// CSV 格式错误（如非法 UTF-8、表头缺失）
    #[error("malformed CSV input: {0}")]
    CsvError(String),
}

impl From<csv::Error> for ConvertError {
    fn from(err: csv::Error) -> Self {
        match err.kind() {
            csv::ErrorKind::Io(e) => ConvertError::IoError(e.to_string()),
            _ => ConvertError::CsvError(err.to_string()),
        }
    }
}

/// 本 crate 通用的 Result 别名
pub type Result<T> = std::result::Result<T, ConvertError>;
