// Page handlers for HTML rendering with Askama

use askama::Template;
use axum::{
    extract::{Path, State},
    http::header,
    response::{Html, IntoResponse},
};
use axum_htmx::{HxHistoryRestoreRequest, HxRequest};
use chrono::Datelike;

use crate::api_server::{parse_variant, AppError, AppState};
use crate::catalog::EncoderVariant;
use crate::view::{PageView, ViewComposer};

// ============================================================================
// Templates
// ============================================================================

/// Full page: header, intro, swappable body, footer
#[derive(Template)]
#[template(path = "pages/tutorial.html")]
pub struct TutorialTemplate {
    pub page: PageView,
    pub year: i32,
}

/// Tab strip + encoder section, swapped in by htmx
#[derive(Template)]
#[template(path = "partials/tutorial_body.html")]
pub struct TutorialBodyTemplate {
    pub page: PageView,
}

/// Page view for `variant`, composed the same way a tab click does
pub fn compose(variant: EncoderVariant) -> PageView {
    let mut composer = ViewComposer::new();
    composer.select_variant(variant);
    composer.render()
}

pub fn render_tutorial(variant: EncoderVariant, fragment: bool) -> Result<String, askama::Error> {
    let page = compose(variant);
    if fragment {
        TutorialBodyTemplate { page }.render()
    } else {
        TutorialTemplate {
            page,
            year: chrono::Utc::now().year(),
        }
        .render()
    }
}

// ============================================================================
// Handlers
// ============================================================================

pub async fn home_page(
    State(state): State<AppState>,
    HxRequest(htmx): HxRequest,
    HxHistoryRestoreRequest(restore): HxHistoryRestoreRequest,
) -> Result<impl IntoResponse, AppError> {
    tutorial_response(&state, EncoderVariant::default(), wants_fragment(htmx, restore)).await
}

pub async fn encoder_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
    HxRequest(htmx): HxRequest,
    HxHistoryRestoreRequest(restore): HxHistoryRestoreRequest,
) -> Result<impl IntoResponse, AppError> {
    let variant = parse_variant(&id)?;
    tutorial_response(&state, variant, wants_fragment(htmx, restore)).await
}

/// History restores swap into `<body>`, so they need the whole page
fn wants_fragment(htmx: bool, history_restore: bool) -> bool {
    htmx && !history_restore
}

async fn tutorial_response(
    state: &AppState,
    variant: EncoderVariant,
    fragment: bool,
) -> Result<impl IntoResponse, AppError> {
    let kind = if fragment { "fragment" } else { "page" };
    let cache_key = format!("{}:{}", kind, variant.id());

    let html = match state.pages.get(&cache_key).await {
        Some(cached) => {
            tracing::debug!("Cache hit for {}", cache_key);
            cached
        }
        None => {
            let html = render_tutorial(variant, fragment)?;
            state.pages.insert(cache_key, html.clone()).await;
            html
        }
    };

    Ok(([(header::VARY, "HX-Request, HX-History-Restore-Request")], Html(html)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_has_tabs_but_no_page_chrome() {
        let html = render_tutorial(EncoderVariant::GetDummies, true).unwrap();

        assert!(html.contains("pandas.get_dummies"));
        assert!(html.contains("hx-get=\"/encoders/OneHotEncoder\""));
        assert!(!html.contains("<html"));
        assert!(!html.contains("Creado con fines educativos"));
    }

    #[test]
    fn test_full_page_wraps_body() {
        let html = render_tutorial(EncoderVariant::LabelEncoder, false).unwrap();

        assert!(html.contains("<html"));
        assert!(html.contains("id=\"tutorial-body\""));
        assert!(html.contains("Tutorial Visual de Codificadores de ML"));
        assert!(html.contains("Creado con fines educativos"));
    }

    #[test]
    fn test_history_restore_is_not_a_fragment() {
        assert!(wants_fragment(true, false));
        assert!(!wants_fragment(true, true));
        assert!(!wants_fragment(false, false));
    }

    #[test]
    fn test_highlighted_headers_are_marked() {
        let html = render_tutorial(EncoderVariant::LabelEncoder, true).unwrap();

        assert!(html.contains("data-column=\"color\" data-highlighted=\"true\""));
        assert!(html.contains("data-column=\"precio\" data-highlighted=\"false\""));
    }

    #[test]
    fn test_note_block_only_when_present() {
        let with_note = render_tutorial(EncoderVariant::OneHotEncoder, true).unwrap();
        let without_note = render_tutorial(EncoderVariant::GetDummies, true).unwrap();

        assert!(with_note.contains("id=\"encoder-note\""));
        assert!(!without_note.contains("id=\"encoder-note\""));
    }
}
