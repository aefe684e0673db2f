//! Shortener page: the form plus the most recent links.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, extract::State, http::StatusCode, response::IntoResponse};
use tracing::info;

use crate::error::AppError;
use crate::state::AppState;
use crate::web::forms::ShortenForm;
use crate::web::views::{LinkCard, recent_cards};

/// Template for the shortener page.
///
/// Renders `templates/shortener.html`. `form` holds the values echoed back
/// into the inputs; at most one of `success` and `error` is set.
#[derive(Template, WebTemplate)]
#[template(path = "shortener.html")]
pub struct ShortenerTemplate {
    pub current_page: &'static str,
    pub form: ShortenForm,
    pub success: Option<String>,
    pub error: Option<String>,
    pub limit_reached: bool,
    pub max_links: usize,
    pub default_validity: i64,
    pub recent: Vec<LinkCard>,
}

impl ShortenerTemplate {
    async fn render_for(
        state: &AppState,
        form: ShortenForm,
        outcome: Option<Result<String, String>>,
    ) -> Result<Self, AppError> {
        let service = &state.link_service;
        let links = service.list_links().await?;

        Ok(Self {
            current_page: "shortener",
            form,
            success: outcome.clone().and_then(Result::ok),
            error: outcome.and_then(Result::err),
            limit_reached: links.len() >= service.max_links(),
            max_links: service.max_links(),
            default_validity: service.default_validity_minutes(),
            recent: recent_cards(&links),
        })
    }
}

/// Renders the shortener page.
///
/// # Endpoint
///
/// `GET /`
pub async fn shortener_page(State(state): State<AppState>) -> Result<ShortenerTemplate, AppError> {
    info!(page = "shortener", "Navigation to page");

    ShortenerTemplate::render_for(&state, ShortenForm::default(), None).await
}

/// Handles a form submission and re-renders the page with the outcome.
///
/// # Endpoint
///
/// `POST /` (`application/x-www-form-urlencoded`)
///
/// On success the form is cleared. On failure the entered values are kept
/// and the response carries the error's status code.
pub async fn shorten_form_handler(
    State(state): State<AppState>,
    Form(form): Form<ShortenForm>,
) -> Result<impl IntoResponse, AppError> {
    let input = form
        .clone()
        .into_input(state.link_service.default_validity_minutes());

    let (status, form, outcome) = match state.link_service.shorten(input).await {
        Ok(link) => (
            StatusCode::OK,
            ShortenForm::default(),
            Ok(format!("Success! Your short URL: {}", link.short_url)),
        ),
        Err(e @ AppError::Internal { .. }) => return Err(e),
        Err(e) => (e.status(), form, Err(e.message().to_string())),
    };

    let page = ShortenerTemplate::render_for(&state, form, Some(outcome)).await?;
    Ok((status, page))
}
