use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::{
    acquire_location, categories, filter, haversine_distance, RankedView, ALL_CATEGORIES,
    geolocation::QueryLocation,
};
use crate::models::{
    ErrorResponse, FacilityDetailQuery, FacilityDetailResponse, HealthResponse, LocationQuery,
    ProductListResponse, ProductSummary,
};
use crate::services::Catalog;
use std::sync::Arc;
use std::time::Duration;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub location_timeout: Duration,
}

/// Configure all finder and store routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/facilities", web::get().to(list_facilities))
        .route("/facilities/{id}", web::get().to(facility_detail))
        .route("/products", web::get().to(list_products))
        .route("/products/{id}", web::get().to(product_detail));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Facility listing
///
/// GET /api/v1/facilities?lat={lat}&lng={lng}
///
/// With both coordinates the facilities come back nearest-first with a
/// `distanceKm` each. Without them the catalog order is kept and
/// `locationUnavailable` is set.
async fn list_facilities(
    state: web::Data<AppState>,
    query: web::Query<LocationQuery>,
) -> impl Responder {
    let outcome = acquire_location(QueryLocation::from(&*query), state.location_timeout).await;
    let view = RankedView::build(outcome.coordinate(), state.catalog.facilities());

    tracing::info!(
        "Returning {} facilities ({})",
        view.facilities.len(),
        view.heading
    );

    HttpResponse::Ok().json(view)
}

/// Facility detail with specialty filtering
///
/// GET /api/v1/facilities/{id}?lat={lat}&lng={lng}&category={category}
async fn facility_detail(
    state: web::Data<AppState>,
    path: web::Path<u32>,
    query: web::Query<FacilityDetailQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        tracing::info!("Validation failed for facility_detail request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let id = path.into_inner();
    let facility = match state.catalog.facility(id) {
        Ok(facility) => facility,
        Err(e) => {
            tracing::debug!("Facility lookup failed: {}", e);
            return HttpResponse::NotFound().json(ErrorResponse {
                error: "Facility not found".to_string(),
                message: e.to_string(),
                status_code: 404,
            });
        }
    };

    let location = query.location();
    let outcome = acquire_location(QueryLocation::from(&location), state.location_timeout).await;
    let distance_km = outcome
        .coordinate()
        .map(|user| haversine_distance(user, facility.location));

    let selected_category = query
        .category
        .clone()
        .unwrap_or_else(|| ALL_CATEGORIES.to_string());
    let specialties = filter(facility, &selected_category);

    HttpResponse::Ok().json(FacilityDetailResponse {
        facility,
        distance_km,
        categories: categories(facility),
        no_results: specialties.is_empty(),
        selected_category,
        specialties,
    })
}

/// Store listing
///
/// GET /api/v1/products
async fn list_products(state: web::Data<AppState>) -> impl Responder {
    let products: Vec<ProductSummary<'_>> = state
        .catalog
        .products()
        .iter()
        .map(ProductSummary::from)
        .collect();

    HttpResponse::Ok().json(ProductListResponse {
        total_results: products.len(),
        products,
    })
}

/// Product detail
///
/// GET /api/v1/products/{id}
async fn product_detail(
    state: web::Data<AppState>,
    path: web::Path<u32>,
) -> impl Responder {
    match state.catalog.product(path.into_inner()) {
        Ok(product) => HttpResponse::Ok().json(ProductSummary::from(product)),
        Err(e) => {
            tracing::debug!("Product lookup failed: {}", e);
            HttpResponse::NotFound().json(ErrorResponse {
                error: "Product not found".to_string(),
                message: e.to_string(),
                status_code: 404,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_check_response() {
        let response = HealthResponse {
            status: "healthy".to_string(),
            version: "0.1.0".to_string(),
            timestamp: chrono::Utc::now(),
        };

        assert_eq!(response.status, "healthy");
    }
}
