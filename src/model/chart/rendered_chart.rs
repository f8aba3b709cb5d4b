use crate::common::*;

#[doc = "메모리 상에서 렌더링이 끝난 SVG 문서"]
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
#[getset(get = "pub")]
pub struct RenderedChart {
    pub svg: String,
}
