//! 路由配置模块
//!
//! 定义所有 REST API 端点的路由映射

use axum::{
    Router,
    routing::{get, post},
};

use crate::{handlers, state::AppState};

/// 构建 API 路由
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/person/{slug}", get(handlers::person::get_person))
        .route("/activities", get(handlers::activity::list_activities))
        .route("/photos", get(handlers::photo::list_photos))
        .route("/redeem", post(handlers::redemption::redeem_activity))
        .route("/request", post(handlers::request::submit_request))
}
