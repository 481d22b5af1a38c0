//! Content negotiation: the API only produces `application/json`.

use axum::extract::FromRequestParts;
use axum::http::header::ACCEPT;
use axum::http::request::Parts;

use crate::error::AppError;

/// Succeeds when the client accepts JSON responses.
///
/// A missing or empty `Accept` header counts as `*/*`.
///
/// ```ignore
/// async fn list(_: AcceptJson, State(state): State<AppState>) -> AppResult<Json<Vec<ProductDto>>> {
///     ...
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AcceptJson;

impl<S> FromRequestParts<S> for AcceptJson
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(value) = parts.headers.get(ACCEPT) else {
            return Ok(AcceptJson);
        };

        let accept = value
            .to_str()
            .map_err(|_| AppError::NotAcceptable("Unreadable Accept header".into()))?;

        if accepts_json(accept) {
            Ok(AcceptJson)
        } else {
            Err(AppError::NotAcceptable(format!(
                "Only application/json is supported, client accepts: {accept}"
            )))
        }
    }
}

/// Whether an `Accept` header value admits `application/json`.
///
/// The most specific matching range decides (`application/json` over
/// `application/*` over `*/*`); a range carrying `q=0` marks the type as not
/// acceptable.
pub fn accepts_json(accept: &str) -> bool {
    if accept.trim().is_empty() {
        return true;
    }

    let mut best: Option<(u8, bool)> = None;
    for range in accept.split(',') {
        let mut params = range.split(';');
        let media = params.next().unwrap_or_default().trim();
        let specificity = if media.eq_ignore_ascii_case("application/json") {
            3
        } else if media.eq_ignore_ascii_case("application/*") {
            2
        } else if media.eq_ignore_ascii_case("*/*") {
            1
        } else {
            continue;
        };
        let acceptable = !params.any(is_zero_quality);
        match best {
            Some((current, _)) if current > specificity => {}
            Some((current, false)) if current == specificity => {}
            _ => best = Some((specificity, acceptable)),
        }
    }
    best.is_some_and(|(_, acceptable)| acceptable)
}

/// Whether a media-range parameter is `q=0` (in any of its `0.000` spellings).
fn is_zero_quality(param: &str) -> bool {
    let Some((key, value)) = param.split_once('=') else {
        return false;
    };
    key.trim().eq_ignore_ascii_case("q") && value.trim().parse::<f32>().is_ok_and(|q| q <= 0.0)
}
