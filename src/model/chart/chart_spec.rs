use crate::common::*;

use crate::model::chart::series_point::*;

#[doc = "렌더링 입력값. 날짜 오름차순으로 정렬된 series 와 라벨만 가진다."]
#[derive(Debug, Clone, PartialEq, Getters, new)]
#[getset(get = "pub")]
pub struct ChartSpec {
    pub x_label: String,
    pub y_label: String,
    pub title: String,
    pub series: Vec<SeriesPoint>,
}
