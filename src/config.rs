//! 转换配置模块
//!
//! 集中定义输入/输出路径和目标表名。命令行程序只使用默认配置，
//! 库调用方（测试、基准）可以把转换器指向其他路径。

use std::path::{Path, PathBuf};

use crate::converter::constants::{DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE, DEFAULT_TABLE};

/// 转换配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertConfig {
    /// 输入 CSV 文件路径
    pub input_path: PathBuf,

    /// 输出 SQL 文件路径（存在则覆盖）
    pub output_path: PathBuf,

    /// INSERT 语句的目标表名
    pub table: String,
}

impl ConvertConfig {
    /// 种子脚本的默认配置：当前目录下的 `course-data.csv` -> `courses_seed.sql`
    pub fn seed_default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_FILE),
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            table: DEFAULT_TABLE.to_string(),
        }
    }

    /// 以指定的输入、输出路径创建配置，表名保持默认
    pub fn new(input_path: impl AsRef<Path>, output_path: impl AsRef<Path>) -> Self {
        Self {
            input_path: input_path.as_ref().to_path_buf(),
            output_path: output_path.as_ref().to_path_buf(),
            ..Self::seed_default()
        }
    }

    /// 替换目标表名
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self::seed_default()
    }
}
