use crate::common::*;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub value: f64,
}
