use actix_web::{post, web, HttpResponse, Responder};
use log::info;
use crate::models::{AnalysisKind, AnalysisRequest, AnalyzeBody};
use crate::services::letter_counter::count_letters;

fn analyze_logic(analysis_type: &str, text: &str) -> HttpResponse {
    let kind = match analysis_type.parse::<AnalysisKind>() {
        Ok(k) => k,
        Err(_) => {
            info!("Unsupported analysis type requested: {}", analysis_type);
            return HttpResponse::BadRequest().body(format!("Analysis type '{}' not supported", analysis_type));
        }
    };

    let request = AnalysisRequest::new(text, kind);
    let counts = count_letters(&request.text, request.kind);
    info!("Counted {} ({} chars in, {} letters, {} distinct)", kind, text.chars().count(), counts.total(), counts.len());
    HttpResponse::Ok().json(counts)
}

#[post("/api/text-analyzer/analyze/{analysis_type}")]
pub async fn analyze_text(
    path: web::Path<String>,
    body: web::Json<AnalyzeBody>,
) -> impl Responder {
    analyze_logic(&path.into_inner(), &body.text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    async fn post_text(analysis_type: &str, payload: Value) -> (StatusCode, String) {
        let app = test::init_service(App::new().service(analyze_text)).await;
        let req = test::TestRequest::post()
            .uri(&format!("/api/text-analyzer/analyze/{}", analysis_type))
            .set_json(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body = test::read_body(resp).await;
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[actix_web::test]
    async fn test_vowels_are_all_present_in_order() {
        let (status, body) = post_text("vowels", json!({"text": "Hello World"})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, r#"{"A":0,"E":1,"I":0,"O":2,"U":0}"#);
    }

    #[actix_web::test]
    async fn test_consonants_only_present_sorted() {
        let (status, body) = post_text("consonants", json!({"text": "Hello World 42!"})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, r#"{"D":1,"H":1,"L":3,"R":1,"W":1}"#);
    }

    #[actix_web::test]
    async fn test_no_consonants_is_empty_object() {
        let (status, body) = post_text("consonants", json!({"text": "aeiou 123"})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "{}");
    }

    #[actix_web::test]
    async fn test_lookalike_letters_are_not_counted() {
        let (status, body) = post_text("consonants", json!({"text": "\u{212A}elvin"})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, r#"{"L":1,"N":1,"V":1}"#);
    }

    #[actix_web::test]
    async fn test_unknown_type_is_bad_request() {
        let (status, body) = post_text("digits", json!({"text": "abc"})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("digits"));
    }

    #[actix_web::test]
    async fn test_missing_text_is_bad_request() {
        let (status, _) = post_text("vowels", json!({"words": "abc"})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
