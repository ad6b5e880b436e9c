//! HTML preview of the first comment rows - served for every non-API path.

use actix_web::{HttpResponse, error::ErrorInternalServerError, web};
use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::state::AppState;

/// Number of comment rows shown on the preview page.
pub const PREVIEW_ROWS: u64 = 3;

const STYLE: &str = "body { font-family: system-ui, sans-serif; margin: 2rem; } \
pre { background: #f4f4f5; padding: 1rem; border-radius: 0.5rem; overflow-x: auto; }";

/// Any path outside `/api/`.
///
/// Storage failures are not wrapped in the API envelope; they surface as a
/// plain 500.
pub async fn index(state: web::Data<AppState>) -> actix_web::Result<HttpResponse> {
    let rows = state.comments.first_rows(PREVIEW_ROWS).await.map_err(|e| {
        tracing::error!(error = %e, "Failed to load comments for preview");
        ErrorInternalServerError(e)
    })?;

    let json = serde_json::to_string_pretty(&rows).map_err(ErrorInternalServerError)?;

    Ok(HttpResponse::Ok()
        .content_type("text/html")
        .body(render_html(&json).into_string()))
}

/// Embed pretty-printed JSON into the preview page.
pub fn render_html(json: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { "Comments preview" }
                style { (PreEscaped(STYLE)) }
            }
            body {
                h1 { "Comments" }
                p {
                    "The first " (PREVIEW_ROWS) " rows of the "
                    code { "comments" }
                    " table:"
                }
                pre { code { (json) } }
            }
        }
    }
}
