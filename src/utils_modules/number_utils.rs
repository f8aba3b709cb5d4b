#[doc = r#"
    정수를 천 단위 구분기호(,)로 묶은 문자열로 변환한다. (예: 1234567 -> "1,234,567")
    y 축 눈금이 지수표기나 소수점으로 나오지 않도록 사용한다.
"#]
pub fn format_grouped_integer(value: i64) -> String {
    let digits: String = value.unsigned_abs().to_string();
    let mut grouped: String = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    for (idx, c) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}
