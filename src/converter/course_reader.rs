//! CourseReader - 从 Reader 流式读取 CSV 并生成 CourseRecord
//!
//! 第一行必须是表头；多余的列被忽略，缺失的列按默认值处理，列数不一致的行同样被接受。

use std::io::Read;

use csv::{ReaderBuilder, StringRecord, StringRecordsIntoIter, Trim};

use crate::converter::constants::INPUT_FIELDS;
use crate::course::CourseRecord;
use crate::error::Result;

/// 可识别字段在表头中的位置
///
/// 表头中出现重名列时取第一个。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColumnIndex {
    positions: [Option<usize>; INPUT_FIELDS.len()],
}

impl ColumnIndex {
    pub fn from_headers(headers: &StringRecord) -> Self {
        let mut positions = [None; INPUT_FIELDS.len()];
        for (slot, field) in positions.iter_mut().zip(INPUT_FIELDS) {
            *slot = headers.iter().position(|h| h == field);
        }
        Self { positions }
    }

    /// 表头中没有任何可识别字段
    pub fn is_empty(&self) -> bool {
        self.positions.iter().all(Option::is_none)
    }

    /// 按表头位置从一行中取出各字段
    pub fn record_from_row(&self, row: &StringRecord) -> CourseRecord {
        let mut record = CourseRecord::default();
        for (field, position) in INPUT_FIELDS.iter().zip(self.positions) {
            if let Some(value) = position.and_then(|i| row.get(i)) {
                record.set(field, value);
            }
        }
        record
    }
}

/// 逐行读取 CSV 并转换为 `CourseRecord` 的迭代器
///
/// # 类型参数
///
/// * `R` - 实现了 `Read` trait 的类型
pub struct CourseReader<R: Read> {
    rows: StringRecordsIntoIter<R>,
    columns: ColumnIndex,
}

impl<R: Read> CourseReader<R> {
    /// 创建新的 CourseReader 并立即读取表头
    ///
    /// # 返回
    ///
    /// * `Err(ConvertError)` - 表头无法读取（I/O 错误或非法 UTF-8）
    pub fn new(reader: R) -> Result<Self> {
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::Headers)
            .from_reader(reader);
        let columns = ColumnIndex::from_headers(csv_reader.headers()?);
        Ok(Self {
            rows: csv_reader.into_records(),
            columns,
        })
    }

    /// 表头解析出的列位置
    pub fn columns(&self) -> &ColumnIndex {
        &self.columns
    }
}

impl<R: Read> Iterator for CourseReader<R> {
    type Item = Result<CourseRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.rows.next()? {
            Ok(row) => Some(Ok(self.columns.record_from_row(&row))),
            Err(e) => Some(Err(e.into())),
        }
    }
}
