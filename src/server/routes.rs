//! The HTTP front end. One route: `GET /{size}` renders a placeholder.
//! Bad parameters never produce an error response, they fall back to
//! defaults; only environment failures turn into a 500.

use super::protocol::PlaceholderQuery;
use super::WebError;
use crate::config::PNG;
use crate::params::Defaults;
use crate::render;
use actix_web::{get, web, HttpRequest, HttpResponse};
use tracing::{debug, error};

type Result<T> = std::result::Result<T, WebError>;

#[get("/{size}")]
pub async fn placeholder(
    req: HttpRequest,
    size: web::Path<String>,
    defaults: web::Data<Defaults>,
) -> Result<HttpResponse> {
    let query = PlaceholderQuery::parse(req.query_string());
    debug!(size = %size, ?query, "got placeholder request");

    let params = query.into_params(size.into_inner());
    let defaults = **defaults;

    // Rasterizing is CPU-bound; keep it off the async workers
    let image = web::block(move || render::generate(&params, &defaults))
        .await?
        .map_err(|err| {
            error!("failed to render placeholder: {err}");
            err
        })?;

    Ok(HttpResponse::Ok().content_type(PNG).body(image))
}
