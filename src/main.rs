/*
Author      : Seunghwan Shin
Create date : 2025-10-00
Description : Renders 30-day daily request / unique-visitor trend charts (SVG)
              from access-log documents stored in Elasticsearch.

History     : 2025-10-00 Seunghwan Shin       # [v.1.0.0] first create
*/

mod common;
mod external_deps;
mod prelude;
use common::*;

mod repository;
use repository::es_repository_impl::*;

mod env_configuration;

mod traits;
use traits::service_traits::display_service::*;

mod model;
use model::configs::total_config::*;

mod dto;

mod enums;

mod utils_modules;
use utils_modules::logger_utils::*;

mod service;
use service::{
    artifact_service_impl::*, chart_service_impl::*, display_service_impl::*,
    query_service_impl::*, series_service_impl::*,
};

mod controller;
use controller::main_controller::*;

use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    /* 전역로거 설정 및 초기 설정 */
    dotenv().ok();
    let _logger: LoggerHandle = set_global_logger();

    info!("Daily request chart program start!");

    /* Elasticsearch connection - 실행 동안만 유지 */
    let es_conn: EsRepositoryImpl = match EsRepositoryImpl::new(get_elastic_config_info()) {
        Ok(es_conn) => es_conn,
        Err(e) => {
            error!("[main] An issue occurred while initializing es_conn. {:?}", e);
            return ExitCode::FAILURE;
        }
    };

    let system_config = get_system_config_info();

    /* 화면 표시는 설정으로 켤 때만 */
    let display_service: Box<dyn DisplayService> = if *system_config.show_chart() {
        Box::new(SystemViewerDisplayImpl::new())
    } else {
        Box::new(NoDisplayImpl::new())
    };

    /* 의존 주입 */
    let main_controller = MainController::new(
        QueryServiceImpl::new(es_conn),
        SeriesServiceImpl::new(),
        ChartServiceImpl::new(),
        ArtifactServiceImpl::new(),
        display_service,
    );

    match main_controller.main_task(system_config).await {
        Ok(artifact_paths) => {
            info!(
                "Daily request chart program finished. {} chart(s) written",
                artifact_paths.len()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{:?}", e);
            ExitCode::FAILURE
        }
    }
}
