use crate::common::*;

#[doc = "Elasticsearch range 쿼리에 넣을 ISO-8601 문자열 (UTC)"]
pub fn convert_date_to_str<Tz: TimeZone>(time: DateTime<Tz>) -> String {
    time.with_timezone(&Utc)
        .format("%Y-%m-%dT%H:%M:%SZ")
        .to_string()
}

#[doc = "days 이전 시각을 반환해주는 함수"]
pub fn minus_days(dt: DateTime<Utc>, days: i64) -> DateTime<Utc> {
    dt - chrono::Duration::days(days)
}

#[doc = r#"
    date_histogram 버킷의 key (epoch milliseconds, UTC) 를 달력 날짜로 변환한다.

    # Errors
    chrono 가 표현할 수 없는 범위의 값인 경우
"#]
pub fn convert_epoch_millis_to_date(key_ms: i64) -> anyhow::Result<NaiveDate> {
    let dt: DateTime<Utc> = DateTime::<Utc>::from_timestamp_millis(key_ms).ok_or_else(|| {
        anyhow!(
            "[convert_epoch_millis_to_date] bucket key out of range: {}",
            key_ms
        )
    })?;

    Ok(dt.date_naive())
}

#[doc = "x 축 눈금용 날짜 문자열"]
pub fn format_axis_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[doc = "산출물 파일명에 붙는 타임스탬프 (초 단위)"]
pub fn format_file_timestamp<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    time.format("%Y%m%d_%H%M%S").to_string()
}
