use crate::models::*;
use crate::services::GameRuleService;
use actix_web::{HttpResponse, ResponseError, Result, web};

#[utoipa::path(
    get,
    path = "/games",
    tag = "game",
    responses(
        (status = 200, description = "Supported games", body = [GameRule])
    )
)]
pub async fn list_games(service: web::Data<GameRuleService>) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(ApiResponse::success(service.list())))
}

#[utoipa::path(
    get,
    path = "/games/{id}",
    tag = "game",
    params(
        ("id" = String, Path, description = "Game identifier, e.g. powerball")
    ),
    responses(
        (status = 200, description = "Game rule", body = GameRule),
        (status = 404, description = "Unknown game", body = ApiError)
    )
)]
pub async fn get_game(
    service: web::Data<GameRuleService>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    match service.lookup(&path.into_inner()) {
        Ok(rule) => Ok(HttpResponse::Ok().json(ApiResponse::success(rule))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn game_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/games")
            .route("", web::get().to(list_games))
            .route("/{id}", web::get().to(get_game)),
    );
}
