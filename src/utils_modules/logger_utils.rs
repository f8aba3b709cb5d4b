use crate::common::*;

#[doc = "로그 한 줄의 포맷: [시간] [레벨] [파일:라인] 메시지"]
fn custom_format(
    w: &mut dyn std::io::Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "[{}] [{}] [{}:{}] {}",
        now.now().format("%Y-%m-%d %H:%M:%S"),
        record.level(),
        record.file().unwrap_or("unknown"),
        record.line().unwrap_or(0),
        record.args()
    )
}

#[doc = r#"
    전역 로거 설정.

    - logs/ 디렉토리에 일 단위로 로그파일을 rotate 하고 최근 10개만 유지한다.
    - stdout 은 산출물 경로 출력용이므로 콘솔 로그는 stderr 로 복제한다.
    - 반환된 핸들은 프로세스 종료 시점까지 살아있어야 한다.
"#]
pub fn set_global_logger() -> LoggerHandle {
    let log_directory: &str = "logs";

    Logger::try_with_str("info")
        .and_then(|logger| {
            logger
                .log_to_file(FileSpec::default().directory(log_directory))
                .rotate(
                    Criterion::Age(Age::Day),
                    Naming::Timestamps,
                    Cleanup::KeepLogFiles(10),
                )
                .format_for_files(custom_format)
                .format_for_stderr(custom_format)
                .duplicate_to_stderr(Duplicate::Info)
                .start()
        })
        .unwrap_or_else(|e| panic!("[set_global_logger] Logger initialization failed: {:?}", e))
}
