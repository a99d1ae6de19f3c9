use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Path identifiers worth a field of their own in the request log.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct PathContext<'a> {
    pub instrument: Option<&'a str>,
    pub session: Option<&'a str>,
}

impl<'a> PathContext<'a> {
    /// Pick the segment following `instruments` or `sessions`, if any.
    pub fn from_path(path: &'a str) -> Self {
        let mut ctx = Self::default();
        let mut segments = path.split('/').filter(|s| !s.is_empty());
        while let Some(segment) = segments.next() {
            match segment {
                "instruments" => ctx.instrument = segments.next(),
                "sessions" => ctx.session = segments.next(),
                _ => {}
            }
        }
        ctx
    }
}

/// Request logging middleware.
///
/// Emits one `api_request` event per request, tagged with the instrument
/// or session the path names. Bodies carry questionnaire answers and are
/// never logged.
pub async fn request_log(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    let ctx = PathContext::from_path(&path);
    let status = response.status();
    if status.is_server_error() {
        tracing::warn!(
            %method,
            %path,
            status = status.as_u16(),
            instrument = ctx.instrument,
            session = ctx.session,
            "api_request"
        );
    } else {
        tracing::info!(
            %method,
            %path,
            status = status.as_u16(),
            instrument = ctx.instrument,
            session = ctx.session,
            "api_request"
        );
    }

    response
}

#[cfg(test)]
mod tests {
    use super::PathContext;

    #[test]
    fn picks_out_instrument_and_session_ids() {
        let ctx = PathContext::from_path("/instruments/deq/validate");
        assert_eq!(ctx.instrument, Some("deq"));
        assert_eq!(ctx.session, None);

        let ctx = PathContext::from_path("/sessions/abc-1/assessment/skip");
        assert_eq!(ctx.session, Some("abc-1"));
        assert_eq!(ctx.instrument, None);
    }

    #[test]
    fn paths_without_ids_yield_nothing() {
        assert_eq!(PathContext::from_path("/health"), PathContext::default());
        assert_eq!(PathContext::from_path("/instruments"), PathContext::default());
    }
}
