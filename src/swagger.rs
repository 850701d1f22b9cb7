use actix_web::web;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers;
use crate::models::*;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::game::list_games,
        handlers::game::get_game,
        handlers::ticket::generate_tickets,
    ),
    components(
        schemas(
            GameRule,
            GenerateTicketsRequest,
            GenerateTicketsResponse,
            TicketResponse,
            ApiError,
        )
    ),
    tags(
        (name = "game", description = "Game rule registry API"),
        (name = "ticket", description = "Ticket generation API"),
    ),
    info(
        title = "QuickPick Backend API",
        version = "0.1.0",
        description = "Lottery quick-pick ticket generation REST API"
    ),
    servers(
        (url = "/api/v1", description = "Local server")
    )
)]
pub struct ApiDoc;

pub fn swagger_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    )
    .route(
        "/swagger-ui",
        web::get().to(|| async {
            actix_web::HttpResponse::Found()
                .append_header(("Location", "/swagger-ui/"))
                .finish()
        }),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_routes() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        assert!(paths.iter().any(|p| p.as_str() == "/games"));
        assert!(paths.iter().any(|p| p.as_str() == "/games/{id}"));
        assert!(paths.iter().any(|p| p.as_str() == "/tickets/generate"));
    }

    #[test]
    fn test_schemas_match_responses() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().unwrap().schemas;
        assert!(schemas.contains_key("TicketResponse"));
        assert!(schemas.contains_key("GenerateTicketsResponse"));
        // Engine tickets are never serialized directly
        assert!(!schemas.contains_key("Ticket"));
    }
}
