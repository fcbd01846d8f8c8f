use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ProfesseurService;
use crate::models::professeurs::responses::ProfesseurView;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::request_projection;

pub async fn get_professeur(
    service: &ProfesseurService,
    request: &HttpRequest,
    professeur_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let (_, ctx) = request_projection(request);

    match storage.get_professeur_by_id(professeur_id).await {
        Ok(Some(professeur)) => Ok(HttpResponse::Ok().json(ProfesseurView::project(&professeur, &ctx))),
        Ok(None) => Ok(HttpResponse::NotFound().finish()),
        Err(e) => {
            error!("Failed to retrieve professeur {}: {}", professeur_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to retrieve professeur: {e}"),
                )),
            )
        }
    }
}
