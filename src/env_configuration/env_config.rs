use crate::common::*;

#[doc = r#"
    환경변수를 읽어와서 반환하고, 환경변수가 설정되지 않은 경우 치명적 오류로 처리하는 함수.

    # Panics
    환경변수가 설정되지 않은 경우 애플리케이션 종료
"#]
fn get_env_or_panic(key: &str) -> String {
    match env::var(key) {
        Ok(val) => val,
        Err(_) => {
            let msg: String = format!("[ENV file read Error] '{}' must be set", key);
            error!("{}", msg);
            panic!("{}", msg);
        }
    }
}

#[doc = r#"
    서버 설정 정보 파일의 경로를 환경변수에서 읽어와 전역 변수로 초기화.

    `SERVER_CONFIG_PATH` 환경변수를 통해 TOML 형식의 서버 설정 파일 경로를 지정받는다.
    이 파일에는 Elasticsearch 연결 정보(호스트, 계정, 요청 타임아웃)와
    집계 대상 인덱스/필드, 산출물 디렉토리, 생성할 지표 목록이 포함되어 있다.

    # Panics
    `SERVER_CONFIG_PATH` 환경변수가 설정되지 않은 경우
"#]
pub static SERVER_CONFIG_PATH: once_lazy<String> =
    once_lazy::new(|| get_env_or_panic("SERVER_CONFIG_PATH"));
