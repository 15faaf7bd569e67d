use actix_web::{get, web, HttpResponse, Responder};

use crate::{error::AppError, quote};

/// Motivational quote endpoint
///
/// Proxies the public quote provider and reshapes the payload to
/// `{text, author}`. Provider failures become a plain 500; clients are
/// expected to fall back or show no quote.
#[get("/motivation")]
pub async fn motivation(http: web::Data<reqwest::Client>) -> Result<impl Responder, AppError> {
    match quote::fetch_public_quote(&http).await {
        Ok(quote) => Ok(HttpResponse::Ok().json(quote)),
        Err(e) => {
            log::error!("quote fetch failed: {}", e);
            Err(AppError::InternalServerError("error getting quote".into()))
        }
    }
}
