//! 便捷 API 函数
//!
//! 提供从文件、Reader 或字符串转换的高层入口。

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use tracing::{debug, info};

use crate::config::ConvertConfig;
use crate::converter::statement_iter::StatementIter;
use crate::error::{ConvertError, Result};

/// 一次转换的统计
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ConvertSummary {
    /// 读取的数据行数（不含表头）
    pub rows_read: usize,

    /// 写出的 INSERT 语句数
    pub statements_written: usize,

    /// 因缺少必填字段而跳过的行数
    pub rows_skipped: usize,
}

/// 打开 CSV 文件并返回语句迭代器（流式处理）
///
/// # 返回
///
/// * `Ok(StatementIter)` - 惰性产生 INSERT 语句
/// * `Err(ConvertError::FileNotFound)` - 文件无法打开
/// * `Err(ConvertError)` - 表头无法读取
///
/// # 示例
///
/// ```no_run
/// use course_seed_sql::iter_statements_from_file;
///
/// for sql in iter_statements_from_file("course-data.csv")? {
///     println!("{}", sql?);
/// }
/// # Ok::<(), course_seed_sql::ConvertError>(())
/// ```
pub fn iter_statements_from_file<P>(path: P) -> Result<StatementIter<BufReader<File>>>
where
    P: AsRef<Path>,
{
    let path_ref = path.as_ref();
    let file = File::open(path_ref)
        .map_err(|e| ConvertError::FileNotFound(format!("{}: {}", path_ref.display(), e)))?;
    debug!(path = %path_ref.display(), "opened course data");
    StatementIter::new(BufReader::new(file))
}

/// 从 Reader 读取 CSV，把每条语句加换行符写入 Writer
///
/// 写入失败返回 `ConvertError::OutputError`；已写出的内容不会回滚。
pub fn convert_reader<R, W>(reader: R, writer: &mut W) -> Result<ConvertSummary>
where
    R: Read,
    W: Write,
{
    write_statements(StatementIter::new(reader)?, writer)
}

/// 把 CSV 文本转换为语句列表（不带换行符）
///
/// # 示例
///
/// ```
/// use course_seed_sql::convert_str;
///
/// let statements = convert_str("id,name,city,state,holeCount\nx,O'Brien Links,Cork,CO,9\n").unwrap();
/// assert!(statements[0].contains("'O''Brien Links'"));
/// assert!(statements[0].contains(", 9, NULL, NULL, FALSE"));
/// ```
pub fn convert_str(csv_text: &str) -> Result<Vec<String>> {
    StatementIter::new(csv_text.as_bytes())?.collect()
}

/// 按配置完成文件到文件的转换
///
/// 输出文件被创建或截断。中途失败时，已写出的部分保留在磁盘上。
pub fn convert_file(config: &ConvertConfig) -> Result<ConvertSummary> {
    let input = &config.input_path;
    let file = File::open(input)
        .map_err(|e| ConvertError::FileNotFound(format!("{}: {}", input.display(), e)))?;
    debug!(path = %input.display(), "opened course data");

    let statements = StatementIter::with_table(BufReader::new(file), config.table.as_str())?;

    let output = &config.output_path;
    let out_file = File::create(output)
        .map_err(|e| ConvertError::OutputError(format!("{}: {}", output.display(), e)))?;
    let mut writer = BufWriter::new(out_file);

    let summary = write_statements(statements, &mut writer)?;

    info!(
        input = %input.display(),
        output = %output.display(),
        rows_read = summary.rows_read,
        statements = summary.statements_written,
        skipped = summary.rows_skipped,
        "seed file written"
    );
    Ok(summary)
}

fn write_statements<R, W>(mut statements: StatementIter<R>, writer: &mut W) -> Result<ConvertSummary>
where
    R: Read,
    W: Write,
{
    for sql in statements.by_ref() {
        let sql = sql?;
        writeln!(writer, "{}", sql).map_err(|e| ConvertError::OutputError(e.to_string()))?;
    }
    writer
        .flush()
        .map_err(|e| ConvertError::OutputError(e.to_string()))?;

    Ok(ConvertSummary {
        rows_read: statements.rows_read(),
        statements_written: statements.statements(),
        rows_skipped: statements.rows_skipped(),
    })
}
