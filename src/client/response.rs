//! Raw HTTP response metadata paired with a decoded body.

use reqwest::StatusCode;
use reqwest::header::{HeaderMap, LOCATION};
use url::Url;

/// The outcome of an admin API exchange.
///
/// Carries the status, headers, and final URL of the HTTP response together
/// with the decoded body. Operations that return no body (create, update,
/// delete, role-mapping changes) yield `Response<()>`.
///
/// The status is never interpreted by this crate: a `404` from
/// `realms().get("missing")` is an `Ok(Response)` whose
/// [`is_success`](Response::is_success) is `false`.
///
/// ## Example
///
/// ```rust,ignore
/// let res = admin.realm("first").users().create(&user).await?;
/// assert_eq!(res.status(), StatusCode::CREATED);
/// let user_id = res.created_id().expect("server returns a Location header");
/// ```
#[derive(Debug, Clone)]
pub struct Response<T = ()> {
    status: StatusCode,
    headers: HeaderMap,
    url: Url,
    body: T,
}

impl<T> Response<T> {
    pub(crate) fn new(status: StatusCode, headers: HeaderMap, url: Url, body: T) -> Self {
        Self {
            status,
            headers,
            url,
            body,
        }
    }

    /// Returns the HTTP status code.
    #[inline]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns `true` for a 2xx status.
    #[inline]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Returns the response headers.
    #[inline]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Returns the final URL of the exchange (after redirects).
    #[inline]
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Returns a reference to the decoded body.
    #[inline]
    pub fn body(&self) -> &T {
        &self.body
    }

    /// Consumes the response, returning the decoded body.
    pub fn into_body(self) -> T {
        self.body
    }

    /// Splits the response into its body and a body-less response.
    pub fn into_parts(self) -> (T, Response<()>) {
        (
            self.body,
            Response {
                status: self.status,
                headers: self.headers,
                url: self.url,
                body: (),
            },
        )
    }

    /// Maps the body, keeping status, headers, and URL.
    pub fn map<U, F>(self, f: F) -> Response<U>
    where
        F: FnOnce(T) -> U,
    {
        Response {
            status: self.status,
            headers: self.headers,
            url: self.url,
            body: f(self.body),
        }
    }

    /// Returns the `Location` header, if present and valid UTF-8.
    pub fn location(&self) -> Option<&str> {
        self.headers.get(LOCATION)?.to_str().ok()
    }

    /// Returns the identifier of a newly created resource.
    ///
    /// The server answers `201 Created` with a `Location` header pointing at
    /// the new resource; the identifier is its final path segment.
    pub fn created_id(&self) -> Option<&str> {
        self.location()?
            .rsplit('/')
            .next()
            .filter(|segment| !segment.is_empty())
    }
}
