use crate::error::AppError;
use crate::models::*;
use crate::services::TicketService;
use actix_web::{HttpResponse, ResponseError, Result, web};

#[utoipa::path(
    post,
    path = "/tickets/generate",
    tag = "ticket",
    request_body = GenerateTicketsRequest,
    responses(
        (status = 200, description = "Generated batch; check `exhausted` for partial batches", body = GenerateTicketsResponse),
        (status = 400, description = "Malformed body or ticket count out of bounds", body = ApiError),
        (status = 404, description = "Unknown game", body = ApiError),
        (status = 422, description = "Rule cannot satisfy the request", body = ApiError)
    )
)]
/// Generates one batch of unique tickets.
///
/// A batch that hit the attempts cap is still a success: `exhausted` is set
/// and `tickets` holds what could be produced.
pub async fn generate_tickets(
    service: web::Data<TicketService>,
    body: web::Json<GenerateTicketsRequest>,
) -> Result<HttpResponse> {
    match service.generate_batch(&body.into_inner()) {
        Ok(batch) => Ok(HttpResponse::Ok().json(ApiResponse::success(batch))),
        Err(e) => Ok(e.error_response()),
    }
}

/// Malformed bodies get the same error envelope as every other failure.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::InvalidRequest(err.to_string()).into())
}

pub fn ticket_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/tickets")
            .app_data(json_config())
            .route("/generate", web::post().to(generate_tickets)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;
    use crate::services::GameRuleService;
    use actix_web::{App, http::StatusCode, test};
    use serde_json::{Value, json};

    fn tiny_rules() -> GameRuleService {
        GameRuleService::with_rules(vec![GameRule {
            id: "tiny".into(),
            name: "Tiny".into(),
            main_min: 1,
            main_max: 2,
            main_count: 2,
            bonus_min: 1,
            bonus_max: 1,
            bonus_label: "Bonus".into(),
        }])
    }

    macro_rules! app {
        ($games:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(TicketService::new(
                        $games,
                        GeneratorConfig::default(),
                    )))
                    .configure(ticket_config),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_generate_powerball() {
        let app = app!(GameRuleService::new());
        let req = test::TestRequest::post()
            .uri("/tickets/generate")
            .set_json(json!({ "game_id": "powerball", "count": 5, "seed": 11 }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["success"], true);
        let data = &body["data"];
        assert_eq!(data["requested"], 5);
        assert_eq!(data["exhausted"], false);
        assert_eq!(data["attempts_cap"], 3000);
        assert_eq!(data["tickets"].as_array().unwrap().len(), 5);
        for t in data["tickets"].as_array().unwrap() {
            let main: Vec<u64> = t["main"]
                .as_array()
                .unwrap()
                .iter()
                .map(|n| n.as_u64().unwrap())
                .collect();
            assert_eq!(main.len(), 5);
            assert!(main.windows(2).all(|w| w[0] < w[1]));
            assert!(main.iter().all(|n| (1..=69).contains(n)));
            assert!((1..=26).contains(&t["bonus"].as_u64().unwrap()));
        }
        assert!(
            data["export_text"]
                .as_str()
                .unwrap()
                .starts_with("Powerball #1: ")
        );
    }

    #[actix_web::test]
    async fn test_partial_batch_is_success() {
        let app = app!(tiny_rules());
        let req = test::TestRequest::post()
            .uri("/tickets/generate")
            .set_json(json!({ "game_id": "tiny", "count": 2 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["exhausted"], true);
        assert_eq!(body["data"]["attempts"], 3000);
        assert_eq!(body["data"]["tickets"].as_array().unwrap().len(), 1);
        assert_eq!(
            body["data"]["export_text"],
            "Tiny #1: 1-2 | Bonus: 1"
        );
    }

    #[actix_web::test]
    async fn test_error_statuses() {
        let app = app!(tiny_rules());

        let cases = [
            (json!({ "game_id": "keno" }), StatusCode::NOT_FOUND, "UNKNOWN_GAME"),
            (
                json!({ "game_id": "tiny", "count": 0 }),
                StatusCode::BAD_REQUEST,
                "INVALID_REQUEST",
            ),
            (
                json!({ "game_id": "tiny", "count": 51 }),
                StatusCode::BAD_REQUEST,
                "INVALID_REQUEST",
            ),
        ];
        for (payload, status, code) in cases {
            let req = test::TestRequest::post()
                .uri("/tickets/generate")
                .set_json(payload)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), status);
            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["error"]["code"], code);
        }
    }

    #[actix_web::test]
    async fn test_malformed_body_uses_error_envelope() {
        let app = app!(GameRuleService::new());

        let payloads = [
            json!({ "game_id": "powerball", "count": -1 }),
            json!({ "game_id": "powerball", "count": "x" }),
            json!({ "count": 5 }),
        ];
        for payload in payloads {
            let req = test::TestRequest::post()
                .uri("/tickets/generate")
                .set_json(payload)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["success"], false);
            assert_eq!(body["error"]["code"], "INVALID_REQUEST");
        }

        let req = test::TestRequest::post()
            .uri("/tickets/generate")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"game_id\": ")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INVALID_REQUEST");
    }

    #[actix_web::test]
    async fn test_invalid_rule_status() {
        let app = app!(GameRuleService::with_rules(vec![GameRule {
            id: "narrow".into(),
            name: "Narrow".into(),
            main_min: 1,
            main_max: 3,
            main_count: 4,
            bonus_min: 1,
            bonus_max: 9,
            bonus_label: "Bonus".into(),
        }]));

        let req = test::TestRequest::post()
            .uri("/tickets/generate")
            .set_json(json!({ "game_id": "narrow", "count": 1 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        // Repeats allowed: the same rule works
        let req = test::TestRequest::post()
            .uri("/tickets/generate")
            .set_json(json!({ "game_id": "narrow", "count": 1, "dedup_main": false }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }
}
