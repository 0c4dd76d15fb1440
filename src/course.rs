//! 球场记录结构
//!
//! `CourseRecord` 是 CSV 中一行的原始字段，`CleanedCourse` 是清洗之后、
//! 生成 SQL 之前的中间形态。两者都不持久化。

use crate::converter::constants::{DEFAULT_COUNTRY, DEFAULT_HOLE_COUNT};
use crate::converter::field_functions::clean_text;

/// 一行原始球场数据
///
/// 字段缺失时：`country` 默认为 `"US"`，`hole_count` 默认为 `"18"`，其余为空字符串。
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CourseRecord {
    pub id: String,
    pub name: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub zip: String,
    #[cfg_attr(feature = "serde", serde(rename = "holeCount"))]
    pub hole_count: String,
    pub latitude: String,
    pub longitude: String,
}

impl Default for CourseRecord {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            city: String::new(),
            state: String::new(),
            country: DEFAULT_COUNTRY.to_string(),
            zip: String::new(),
            hole_count: DEFAULT_HOLE_COUNT.to_string(),
            latitude: String::new(),
            longitude: String::new(),
        }
    }
}

impl CourseRecord {
    /// 从 (字段名, 值) 对构建记录，未识别的字段名被忽略
    ///
    /// 字段名与 CSV 表头一致：`id, name, city, state, country, zip, holeCount, latitude, longitude`。
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut record = Self::default();
        for (key, value) in pairs {
            record.set(key.as_ref(), value.as_ref());
        }
        record
    }

    /// 按字段名设置原始值
    ///
    /// # 返回
    ///
    /// 字段名被识别时返回 `true`
    pub fn set(&mut self, key: &str, value: &str) -> bool {
        let slot = match key {
            "id" => &mut self.id,
            "name" => &mut self.name,
            "city" => &mut self.city,
            "state" => &mut self.state,
            "country" => &mut self.country,
            "zip" => &mut self.zip,
            "holeCount" => &mut self.hole_count,
            "latitude" => &mut self.latitude,
            "longitude" => &mut self.longitude,
            _ => return false,
        };
        value.clone_into(slot);
        true
    }

    /// 清洗所有字段
    pub fn clean(&self) -> CleanedCourse {
        CleanedCourse::from_record(self)
    }
}

/// 清洗后的字段
///
/// 六个字符串字段去除全部双引号后再去首尾空白；洞数与经纬度只去首尾空白。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CleanedCourse {
    pub id: String,
    pub name: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub zip: String,
    pub hole_count: String,
    pub latitude: String,
    pub longitude: String,
}

impl CleanedCourse {
    pub fn from_record(record: &CourseRecord) -> Self {
        Self {
            id: clean_text(&record.id),
            name: clean_text(&record.name),
            city: clean_text(&record.city),
            state: clean_text(&record.state),
            country: clean_text(&record.country),
            zip: clean_text(&record.zip),
            hole_count: record.hole_count.trim().to_string(),
            latitude: record.latitude.trim().to_string(),
            longitude: record.longitude.trim().to_string(),
        }
    }

    /// 必填字段（id、name、city、state）是否全部非空
    #[inline]
    pub fn has_required_fields(&self) -> bool {
        !(self.id.is_empty() || self.name.is_empty() || self.city.is_empty() || self.state.is_empty())
    }
}
