use actix_web::{HttpResponse, Result, web};

use crate::campground_types::*;
use campground_list::CampgroundList;

/// Lists every campground currently held, as display rows
pub async fn list_campgrounds(
    list: web::Data<CampgroundList>,
) -> Result<HttpResponse, CampgroundError> {
    let (campgrounds, updated_at) = list.rows_with_updated_at().await;

    let response = ListCampgroundsResponse {
        total: campgrounds.len(),
        campgrounds,
        updated_at,
    };

    Ok(HttpResponse::Ok().json(response))
}

/// Gets the campground row at a list position
pub async fn get_campground(
    list: web::Data<CampgroundList>,
    path: web::Path<usize>,
) -> Result<HttpResponse, CampgroundError> {
    let index = path.into_inner();

    let row = list.row(index).await.ok_or_else(|| {
        log::debug!("No campground at index {}", index);
        CampgroundError::NotFound
    })?;

    Ok(HttpResponse::Ok().json(row))
}

/// Registers the campground routes under `/api`
pub fn configure_campground_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/campgrounds", web::get().to(list_campgrounds))
            .route("/campgrounds/{index}", web::get().to(get_campground)),
    )
    .route(
        "/health",
        web::get().to(|| async { HttpResponse::Ok().body("OK") }),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, http::StatusCode, test};
    use nps::Campground;

    fn elkmont() -> Campground {
        Campground {
            name: Some("Elkmont".to_string()),
            description: Some("Largest campground in the park".to_string()),
            latitude: Some("35.6556".to_string()),
            longitude: Some("-83.5813".to_string()),
            images: None,
        }
    }

    #[actix_web::test]
    async fn test_list_campgrounds() {
        let list = CampgroundList::with_campgrounds(vec![Campground::placeholder(), elkmont()]);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(list))
                .configure(configure_campground_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/campgrounds").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["total"], 2);
        assert_eq!(body["updated_at"], serde_json::Value::Null);
        assert_eq!(body["campgrounds"][0]["name"], "Test Campground");
        assert_eq!(body["campgrounds"][1]["lat_long"], "(35.6556, -83.5813)");
        assert_eq!(body["campgrounds"][1]["image_url"], serde_json::Value::Null);
    }

    #[actix_web::test]
    async fn test_list_reflects_replacement() {
        let list = CampgroundList::new();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(list.clone()))
                .configure(configure_campground_routes),
        )
        .await;

        list.replace(vec![elkmont()]).await;

        let req = test::TestRequest::get().uri("/api/campgrounds").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["total"], 1);
        assert!(body["updated_at"].is_string());
    }

    #[actix_web::test]
    async fn test_get_campground() {
        let list = CampgroundList::with_campgrounds(vec![elkmont()]);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(list))
                .configure(configure_campground_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/campgrounds/0").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["name"], "Elkmont");

        let req = test::TestRequest::get().uri("/api/campgrounds/5").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "campground_not_found");
    }

    #[actix_web::test]
    async fn test_health() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(CampgroundList::new()))
                .configure(configure_campground_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, web::Bytes::from_static(b"OK"));
    }
}
