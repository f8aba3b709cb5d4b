use crate::common::*;
use crate::traits::service_traits::chart_service::*;
use crate::model::chart::{chart_spec::*, rendered_chart::*, series_point::*};
use crate::utils_modules::{number_utils::*, time_utils::*};
use plotters::prelude::*;
use plotters::style::FontTransform;
use std::collections::BTreeMap;

/* 10 x 6 inch @ 100 dpi */
const CHART_SIZE: (u32, u32) = (1000, 600);
const Y_HEADROOM_RATIO: f64 = 1.1;
const FALLBACK_Y_UPPER: f64 = 1.0;
const MAX_Y_LABELS: usize = 10;

#[derive(Debug, Clone, new)]
pub struct ChartServiceImpl;

impl ChartServiceImpl {
    #[doc = r#"
        y 축 상한 = 최대값 x 1.1 (하한은 0 고정).
        최대값이 0 이하이면 축이 성립하지 않으므로 1 로 둔다.
    "#]
    pub fn calculate_y_upper(&self, series: &[SeriesPoint]) -> f64 {
        let max_val: f64 = series
            .iter()
            .map(|p| p.value)
            .fold(f64::NEG_INFINITY, f64::max);

        if max_val.is_finite() && max_val > 0.0 {
            max_val * Y_HEADROOM_RATIO
        } else {
            FALLBACK_Y_UPPER
        }
    }

    #[doc = "작은 범위에서 정수 눈금 라벨이 중복되지 않도록 y 라벨 개수를 제한한다."]
    pub fn y_label_count(&self, y_upper: f64) -> usize {
        if y_upper.is_finite() && y_upper < MAX_Y_LABELS as f64 {
            (y_upper.ceil().max(1.0) as usize) + 1
        } else {
            MAX_Y_LABELS
        }
    }

    #[doc = r#"
        각 점의 x 좌표 = 첫 날짜로부터의 일 수.
        데이터가 없는 날도 축 위의 자리를 차지하므로 빠진 날은 선 사이 간격으로 드러난다.
    "#]
    pub fn day_offsets(&self, series: &[SeriesPoint]) -> Vec<i64> {
        match series.first() {
            Some(first) => series
                .iter()
                .map(|p| (p.date - first.date).num_days())
                .collect(),
            None => Vec::new(),
        }
    }
}

impl ChartService for ChartServiceImpl {
    fn render_line_chart(&self, spec: &ChartSpec) -> anyhow::Result<RenderedChart> {
        let series: &[SeriesPoint] = spec.series();

        if series.is_empty() {
            return Err(anyhow!(
                "[ChartServiceImpl->render_line_chart] Cannot generate chart with empty data"
            ));
        }

        let offsets: Vec<i64> = self.day_offsets(series);
        let x_min: i64 = offsets.iter().copied().min().unwrap_or(0);
        let x_max: i64 = offsets.iter().copied().max().unwrap_or(0);

        /* 데이터가 있는 날에만 라벨, 빈 날은 눈금만 */
        let x_labels: BTreeMap<i64, String> = offsets
            .iter()
            .zip(series)
            .map(|(offset, p)| (*offset, format_axis_date(&p.date)))
            .collect();

        let y_upper: f64 = self.calculate_y_upper(series);
        let y_label_count: usize = self.y_label_count(y_upper);

        let mut svg: String = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, CHART_SIZE).into_drawing_area();
            root.fill(&WHITE)?;

            /* x 는 일 단위 오프셋, 마지막 칸은 여백 */
            let mut chart = ChartBuilder::on(&root)
                .caption(spec.title(), ("sans-serif", 24))
                .margin(20)
                .x_label_area_size(110)
                .y_label_area_size(80)
                .build_cartesian_2d(x_min..(x_max + 1), 0f64..y_upper)?;

            let line_color: RGBColor = RGBColor(31, 119, 180);
            let grid_color: RGBColor = RGBColor(220, 220, 220);

            chart
                .configure_mesh()
                .x_desc(spec.x_label())
                .y_desc(spec.y_label())
                .x_labels((x_max - x_min + 2) as usize)
                .y_labels(y_label_count)
                .light_line_style(ShapeStyle::from(&grid_color).stroke_width(1))
                .bold_line_style(ShapeStyle::from(&grid_color).stroke_width(1))
                .x_label_style(
                    ("sans-serif", 12)
                        .into_font()
                        .transform(FontTransform::Rotate90),
                )
                .x_label_formatter(&|x| x_labels.get(x).cloned().unwrap_or_default())
                .y_label_formatter(&|y| format_grouped_integer(y.round() as i64))
                .draw()?;

            chart.draw_series(LineSeries::new(
                offsets.iter().zip(series).map(|(x, p)| (*x, p.value)),
                ShapeStyle::from(&line_color).stroke_width(2),
            ))?;

            chart.draw_series(
                offsets
                    .iter()
                    .zip(series)
                    .map(|(x, p)| Circle::new((*x, p.value), 4, line_color.filled())),
            )?;

            root.present()?;
        }

        info!(
            "[ChartServiceImpl] rendered '{}' ({} points, y max {:.1})",
            spec.title(),
            series.len(),
            y_upper
        );

        Ok(RenderedChart::new(svg))
    }
}
