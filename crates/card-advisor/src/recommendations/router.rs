use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::json;
use tracing::warn;

use super::catalog::{CardRecord, CatalogProvider};
use super::profile::UserProfile;
use super::ranking::RankingService;
use super::report::{comparison_rows, CatalogSummary, ComparisonRow, SpendSummary};
use super::valuation::ValuationResult;

/// Payload returned for a ranking request.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationResponse {
    pub generated_at: DateTime<Utc>,
    pub spend_summary: SpendSummary,
    pub results: Vec<ValuationResult>,
    pub comparison: Vec<ComparisonRow>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub reference: Vec<ValuationResult>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogResponse {
    pub summary: CatalogSummary,
    pub cards: Vec<CardRecord>,
}

/// Router builder exposing the ranking service and the raw catalog.
pub fn recommendation_router<P>(service: Arc<RankingService<P>>) -> Router
where
    P: CatalogProvider + 'static,
{
    Router::new()
        .route("/api/v1/recommendations", post(recommend_handler::<P>))
        .route("/api/v1/cards", get(catalog_handler::<P>))
        .with_state(service)
}

pub(crate) async fn recommend_handler<P>(
    State(service): State<Arc<RankingService<P>>>,
    axum::Json(profile): axum::Json<UserProfile>,
) -> Response
where
    P: CatalogProvider + 'static,
{
    match service.recommend(&profile) {
        Ok(recommendation) => {
            let comparison = if recommendation.results.is_empty() {
                comparison_rows(&recommendation.reference)
            } else {
                comparison_rows(&recommendation.results)
            };
            let body = RecommendationResponse {
                generated_at: Utc::now(),
                spend_summary: SpendSummary::from_spends(&profile.monthly_spends),
                results: recommendation.results,
                comparison,
                reference: recommendation.reference,
            };
            (StatusCode::OK, axum::Json(body)).into_response()
        }
        Err(error) => {
            warn!(%error, "rejected recommendation request");
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn catalog_handler<P>(State(service): State<Arc<RankingService<P>>>) -> Response
where
    P: CatalogProvider + 'static,
{
    let catalog = service.catalog();
    let body = CatalogResponse {
        summary: CatalogSummary::from_provider(catalog),
        cards: catalog.all_cards().to_vec(),
    };
    (StatusCode::OK, axum::Json(body)).into_response()
}
