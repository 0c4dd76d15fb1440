//! StatementIter - 将 CourseReader 转换为 SQL 语句迭代器
//!
//! 在 `CourseReader` 的基础上逐行调用转换函数，跳过不合格的行，只产出语句。

use std::io::Read;

use crate::converter::constants::DEFAULT_TABLE;
use crate::converter::course_reader::CourseReader;
use crate::converter::row::convert_into_table;
use crate::error::Result;

/// 惰性产生 INSERT 语句的适配器
///
/// 迭代项为不带换行符的语句；读取错误原样向上传递。
///
/// # 示例
///
/// ```
/// use course_seed_sql::StatementIter;
///
/// let csv = "id,name,city,state\na,Course A,Town,TX\nb,,Town,TX\n";
/// let iter = StatementIter::new(csv.as_bytes()).unwrap();
///
/// let statements: Vec<String> = iter.collect::<Result<_, _>>().unwrap();
/// assert_eq!(statements.len(), 1);
/// ```
pub struct StatementIter<R: Read> {
    course_reader: CourseReader<R>,
    table: String,
    rows_read: usize,
    statements: usize,
}

impl<R: Read> StatementIter<R> {
    /// 创建写入默认 `courses` 表的迭代器
    pub fn new(reader: R) -> Result<Self> {
        Self::with_table(reader, DEFAULT_TABLE)
    }

    /// 创建写入指定表的迭代器
    pub fn with_table(reader: R, table: impl Into<String>) -> Result<Self> {
        Ok(Self {
            course_reader: CourseReader::new(reader)?,
            table: table.into(),
            rows_read: 0,
            statements: 0,
        })
    }

    /// 已读取的数据行数（不含表头）
    pub fn rows_read(&self) -> usize {
        self.rows_read
    }

    /// 已产出的语句数
    pub fn statements(&self) -> usize {
        self.statements
    }

    /// 被跳过的行数
    pub fn rows_skipped(&self) -> usize {
        self.rows_read - self.statements
    }
}

impl<R: Read> Iterator for StatementIter<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let record = match self.course_reader.next()? {
                Ok(record) => record,
                Err(e) => return Some(Err(e)),
            };
            self.rows_read += 1;

            if let Some(sql) = convert_into_table(&record, &self.table) {
                self.statements += 1;
                return Some(Ok(sql));
            }
        }
    }
}
