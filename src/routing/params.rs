//! Captured path parameters.
//!
//! The captures travel in the request's extensions under a type that is
//! private to this module: only the dispatcher can attach them and only
//! [`param`] can read them back.

use std::sync::Arc;

use axum::http::Request;

#[derive(Debug, Clone)]
struct Captures(Arc<[String]>);

/// Attach the captured groups of a successful match to the request.
pub(crate) fn attach<B>(req: &mut Request<B>, params: Vec<String>) {
    req.extensions_mut().insert(Captures(params.into()));
}

/// Return the `index`th captured path parameter.
///
/// # Panics
///
/// Panics if the request was not dispatched through a matched route, or if
/// `index` is beyond the groups captured by that route's pattern. Handlers
/// registered for a pattern know how many groups it has.
pub fn param<B>(req: &Request<B>, index: usize) -> &str {
    let captures = req
        .extensions()
        .get::<Captures>()
        .expect("request was not dispatched through a matched route");
    &captures.0[index]
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    #[test]
    fn test_param_reads_attached_captures() {
        let mut req = Request::new(Body::empty());
        attach(&mut req, vec!["42".into(), "notes".into()]);
        assert_eq!(param(&req, 0), "42");
        assert_eq!(param(&req, 1), "notes");
    }

    #[test]
    #[should_panic(expected = "not dispatched")]
    fn test_param_without_dispatch_panics() {
        let req = Request::new(Body::empty());
        let _ = param(&req, 0);
    }

    #[test]
    #[should_panic]
    fn test_param_out_of_bounds_panics() {
        let mut req = Request::new(Body::empty());
        attach(&mut req, vec!["42".into()]);
        let _ = param(&req, 1);
    }

    #[test]
    fn test_foreign_extensions_are_not_captures() {
        let mut req = Request::new(Body::empty());
        req.extensions_mut().insert(vec!["forged".to_string()]);
        assert!(req.extensions().get::<Captures>().is_none());
    }
}
