//! Query-string options for list and action endpoints.
//!
//! Each options type maps its fields to query keys explicitly. Unset fields
//! are left out of the query string entirely; an options value with nothing
//! set leaves the request path untouched.
//!
//! ```rust
//! use keycloak_admin::options::{QueryOptions, UsersListOptions};
//!
//! let opts = UsersListOptions::new().search("alice").max(20);
//! assert_eq!(opts.encode(), "search=alice&max=20");
//! ```

/// A set of optional query parameters.
pub trait QueryOptions {
    /// Returns the `(key, value)` pairs for every field that is set, in a
    /// stable order.
    fn query_pairs(&self) -> Vec<(&'static str, String)>;

    /// Encodes the pairs as `k=v&k=v`, percent-encoding each value.
    fn encode(&self) -> String {
        self.query_pairs()
            .into_iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(&value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Appends the encoded options to `path`.
pub(crate) fn with_query<O>(mut path: String, options: Option<&O>) -> String
where
    O: QueryOptions + ?Sized,
{
    let Some(options) = options else {
        return path;
    };
    let query = options.encode();
    if !query.is_empty() {
        path.push(if path.contains('?') { '&' } else { '?' });
        path.push_str(&query);
    }
    path
}

fn push<T: ToString>(pairs: &mut Vec<(&'static str, String)>, key: &'static str, value: Option<&T>) {
    if let Some(value) = value {
        pairs.push((key, value.to_string()));
    }
}

/// Offset pagination shared by list endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageOptions {
    /// Index of the first result.
    pub first: Option<u32>,
    /// Maximum number of results.
    pub max: Option<u32>,
}

impl PageOptions {
    /// Creates empty page options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the index of the first result.
    #[must_use]
    pub fn first(mut self, first: u32) -> Self {
        self.first = Some(first);
        self
    }

    /// Sets the maximum number of results.
    #[must_use]
    pub fn max(mut self, max: u32) -> Self {
        self.max = Some(max);
        self
    }
}

impl QueryOptions for PageOptions {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push(&mut pairs, "first", self.first.as_ref());
        push(&mut pairs, "max", self.max.as_ref());
        pairs
    }
}

/// Options for listing realm roles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RolesListOptions {
    /// Return roles without attributes and composites.
    pub brief_representation: Option<bool>,
    /// Substring filter on the role name.
    pub search: Option<String>,
    /// Pagination.
    pub page: PageOptions,
}

impl RolesListOptions {
    /// Creates empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests the brief representation.
    #[must_use]
    pub fn brief_representation(mut self, brief: bool) -> Self {
        self.brief_representation = Some(brief);
        self
    }

    /// Filters roles by name.
    #[must_use]
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Sets the index of the first result.
    #[must_use]
    pub fn first(mut self, first: u32) -> Self {
        self.page.first = Some(first);
        self
    }

    /// Sets the maximum number of results.
    #[must_use]
    pub fn max(mut self, max: u32) -> Self {
        self.page.max = Some(max);
        self
    }
}

impl QueryOptions for RolesListOptions {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push(&mut pairs, "briefRepresentation", self.brief_representation.as_ref());
        push(&mut pairs, "search", self.search.as_ref());
        pairs.extend(self.page.query_pairs());
        pairs
    }
}

/// Options for listing users.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsersListOptions {
    /// Substring filter over username, email, first and last name.
    pub search: Option<String>,
    /// Filter on username.
    pub username: Option<String>,
    /// Filter on email.
    pub email: Option<String>,
    /// Filter on first name.
    pub first_name: Option<String>,
    /// Filter on last name.
    pub last_name: Option<String>,
    /// Match the attribute filters exactly instead of by substring.
    pub exact: Option<bool>,
    /// Return users without attributes.
    pub brief_representation: Option<bool>,
    /// Pagination.
    pub page: PageOptions,
}

impl UsersListOptions {
    /// Creates empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the free-text search.
    #[must_use]
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Filters by username.
    #[must_use]
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Filters by email.
    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Filters by first name.
    #[must_use]
    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    /// Filters by last name.
    #[must_use]
    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    /// Requires exact matches on the attribute filters.
    #[must_use]
    pub fn exact(mut self, exact: bool) -> Self {
        self.exact = Some(exact);
        self
    }

    /// Requests the brief representation.
    #[must_use]
    pub fn brief_representation(mut self, brief: bool) -> Self {
        self.brief_representation = Some(brief);
        self
    }

    /// Sets the index of the first result.
    #[must_use]
    pub fn first(mut self, first: u32) -> Self {
        self.page.first = Some(first);
        self
    }

    /// Sets the maximum number of results.
    #[must_use]
    pub fn max(mut self, max: u32) -> Self {
        self.page.max = Some(max);
        self
    }
}

impl QueryOptions for UsersListOptions {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push(&mut pairs, "search", self.search.as_ref());
        push(&mut pairs, "username", self.username.as_ref());
        push(&mut pairs, "email", self.email.as_ref());
        push(&mut pairs, "firstName", self.first_name.as_ref());
        push(&mut pairs, "lastName", self.last_name.as_ref());
        push(&mut pairs, "exact", self.exact.as_ref());
        push(&mut pairs, "briefRepresentation", self.brief_representation.as_ref());
        pairs.extend(self.page.query_pairs());
        pairs
    }
}

/// Options for listing groups.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupsListOptions {
    /// Substring filter on the group name.
    pub search: Option<String>,
    /// Return groups without attributes and role mappings.
    pub brief_representation: Option<bool>,
    /// Pagination.
    pub page: PageOptions,
}

impl GroupsListOptions {
    /// Creates empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filters groups by name.
    #[must_use]
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Requests the brief representation.
    #[must_use]
    pub fn brief_representation(mut self, brief: bool) -> Self {
        self.brief_representation = Some(brief);
        self
    }

    /// Sets the index of the first result.
    #[must_use]
    pub fn first(mut self, first: u32) -> Self {
        self.page.first = Some(first);
        self
    }

    /// Sets the maximum number of results.
    #[must_use]
    pub fn max(mut self, max: u32) -> Self {
        self.page.max = Some(max);
        self
    }
}

impl QueryOptions for GroupsListOptions {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push(&mut pairs, "search", self.search.as_ref());
        push(&mut pairs, "briefRepresentation", self.brief_representation.as_ref());
        pairs.extend(self.page.query_pairs());
        pairs
    }
}

/// Options for `send-verify-email`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SendVerifyEmailOptions {
    /// `clientId` of the client the user returns to.
    pub client_id: Option<String>,
    /// Where the user is sent after verifying.
    pub redirect_uri: Option<String>,
}

impl SendVerifyEmailOptions {
    /// Creates empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the client the user returns to.
    #[must_use]
    pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    /// Sets the redirect URI.
    #[must_use]
    pub fn redirect_uri(mut self, redirect_uri: impl Into<String>) -> Self {
        self.redirect_uri = Some(redirect_uri.into());
        self
    }
}

impl QueryOptions for SendVerifyEmailOptions {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push(&mut pairs, "client_id", self.client_id.as_ref());
        push(&mut pairs, "redirect_uri", self.redirect_uri.as_ref());
        pairs
    }
}

/// Options for `execute-actions-email`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecuteActionsEmailOptions {
    /// Link lifetime in seconds.
    pub lifespan: Option<u32>,
    /// `clientId` of the client the user returns to.
    pub client_id: Option<String>,
    /// Where the user is sent after completing the actions.
    pub redirect_uri: Option<String>,
}

impl ExecuteActionsEmailOptions {
    /// Creates empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the link lifetime in seconds.
    #[must_use]
    pub fn lifespan(mut self, seconds: u32) -> Self {
        self.lifespan = Some(seconds);
        self
    }

    /// Sets the client the user returns to.
    #[must_use]
    pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    /// Sets the redirect URI.
    #[must_use]
    pub fn redirect_uri(mut self, redirect_uri: impl Into<String>) -> Self {
        self.redirect_uri = Some(redirect_uri.into());
        self
    }
}

impl QueryOptions for ExecuteActionsEmailOptions {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push(&mut pairs, "lifespan", self.lifespan.as_ref());
        push(&mut pairs, "client_id", self.client_id.as_ref());
        push(&mut pairs, "redirect_uri", self.redirect_uri.as_ref());
        pairs
    }
}
