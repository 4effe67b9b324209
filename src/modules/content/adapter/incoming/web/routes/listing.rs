use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::dto::ContentItemResponse;

/// List all learning resources, newest first
#[utoipa::path(
    get,
    path = "/api/content",
    tag = "content",
    responses(
        (status = 200, description = "All items", body = inline(SuccessResponse<Vec<ContentItemResponse>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/content")]
pub async fn list_content_handler(data: web::Data<AppState>) -> impl Responder {
    match data.list_content.execute().await {
        Ok(items) => ApiResponse::success(
            items
                .into_iter()
                .map(ContentItemResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(e) => {
            error!(error = %e, "Content listing failed");
            ApiResponse::internal_error()
        }
    }
}

#[derive(Deserialize, IntoParams)]
pub struct SearchQuery {
    /// Search term; blank returns the full listing
    #[serde(default)]
    pub q: String,
}

/// Search resources by title or description
#[utoipa::path(
    get,
    path = "/api/content/search",
    tag = "content",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching items, possibly empty", body = inline(SuccessResponse<Vec<ContentItemResponse>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/content/search")]
pub async fn search_content_handler(
    query: web::Query<SearchQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.search_content.execute(&query.q).await {
        Ok(items) => ApiResponse::success(
            items
                .into_iter()
                .map(ContentItemResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(e) => {
            error!(term = %query.q, error = %e, "Content search failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::application::domain::entities::{
        ContentItem, ContentKind, ContentSource,
    };
    use crate::content::application::use_cases::list_content::{
        IListContentUseCase, ListContentError,
    };
    use crate::content::application::use_cases::search_content::{
        ISearchContentUseCase, SearchContentError,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use chrono::Utc;
    use uuid::Uuid;

    fn item(title: &str) -> ContentItem {
        let now = Utc::now();
        ContentItem {
            id: Uuid::new_v4(),
            title: title.to_string(),
            slug: title.to_lowercase().replace(' ', "-"),
            description: String::new(),
            kind: ContentKind::Youtube,
            source: ContentSource::YouTube {
                url: "https://youtu.be/abc".to_string(),
            },
            cover_image_path: None,
            uploaded_by: Uuid::new_v4(),
            is_featured: false,
            download_count: 0,
            views_count: 0,
            uploaded_at: now,
            updated_at: now,
        }
    }

    struct MockList;

    #[async_trait]
    impl IListContentUseCase for MockList {
        async fn execute(&self) -> Result<Vec<ContentItem>, ListContentError> {
            Ok(vec![item("Newest"), item("Older")])
        }
    }

    struct MockSearch;

    #[async_trait]
    impl ISearchContentUseCase for MockSearch {
        async fn execute(&self, term: &str) -> Result<Vec<ContentItem>, SearchContentError> {
            if term == "algebra" {
                Ok(vec![item("Algebra Basics")])
            } else {
                Ok(vec![])
            }
        }
    }

    #[actix_web::test]
    async fn listing_is_public_and_ordered() {
        let app_state = TestAppStateBuilder::default()
            .with_list_content(MockList)
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(list_content_handler)).await;

        let req = test::TestRequest::get().uri("/api/content").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 2);
        assert_eq!(body["data"][0]["title"], "Newest");
    }

    #[actix_web::test]
    async fn search_returns_matches() {
        let app_state = TestAppStateBuilder::default()
            .with_search_content(MockSearch)
            .build();

        let app = test::init_service(
            App::new().app_data(app_state).service(search_content_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/content/search?q=algebra")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"][0]["title"], "Algebra Basics");
    }

    #[actix_web::test]
    async fn search_without_matches_is_empty_200() {
        let app_state = TestAppStateBuilder::default()
            .with_search_content(MockSearch)
            .build();

        let app = test::init_service(
            App::new().app_data(app_state).service(search_content_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/content/search?q=zzz")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 0);
    }
}
