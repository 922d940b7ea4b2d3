//! Table store request builder.
//!
//! Every table operation the console performs is one HTTP request against
//! the store's autogenerated REST surface. The builder is a pure value:
//! it accumulates the verb, filters, ordering, range and preferences, and
//! only the executor in [`super`] turns it into a network call. Keeping it
//! pure lets the query shapes be asserted in unit tests without a server.

use serde_json::Value;

/// Sort direction for an `order` clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Ascending, the store's default.
    Ascending,
    /// Descending.
    Descending,
}

impl Direction {
    fn suffix(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

/// HTTP verb a table request maps onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    /// `GET` — read rows.
    Get,
    /// `POST` — insert rows.
    Post,
    /// `PATCH` — update matched rows.
    Patch,
    /// `DELETE` — remove matched rows.
    Delete,
}

impl Verb {
    /// The wire method name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

/// A fully described table operation, ready to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRequest {
    verb: Verb,
    table: String,
    query: Vec<(String, String)>,
    headers: Vec<(String, String)>,
    body: Option<Value>,
}

impl TableRequest {
    fn new(verb: Verb, table: &str) -> Self {
        Self {
            verb,
            table: table.to_string(),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Start a read of `table`, selecting all columns.
    #[must_use]
    pub fn select(table: &str) -> Self {
        let mut request = Self::new(Verb::Get, table);
        request.query.push(("select".to_string(), "*".to_string()));
        request
    }

    /// Start an insert of one row into `table`, returning the stored row.
    #[must_use]
    pub fn insert(table: &str, row: Value) -> Self {
        let mut request = Self::new(Verb::Post, table);
        request.body = Some(row);
        request
            .headers
            .push(("Prefer".to_string(), "return=representation".to_string()));
        request.single()
    }

    /// Start a patch of the rows matched by subsequent filters.
    #[must_use]
    pub fn update(table: &str, patch: Value) -> Self {
        let mut request = Self::new(Verb::Patch, table);
        request.body = Some(patch);
        request
            .headers
            .push(("Prefer".to_string(), "return=representation".to_string()));
        request.single()
    }

    /// Start a delete of the rows matched by subsequent filters.
    #[must_use]
    pub fn delete(table: &str) -> Self {
        Self::new(Verb::Delete, table)
    }

    /// Equality filter: `column = value`.
    #[must_use]
    pub fn eq(mut self, column: &str, value: impl ToString) -> Self {
        self.query
            .push((column.to_string(), format!("eq.{}", value.to_string())));
        self
    }

    /// Null filter: `column IS NULL`.
    #[must_use]
    pub fn is_null(mut self, column: &str) -> Self {
        self.query
            .push((column.to_string(), "is.null".to_string()));
        self
    }

    /// Stable ordering by `column`.
    #[must_use]
    pub fn order(mut self, column: &str, direction: Direction) -> Self {
        self.query.push((
            "order".to_string(),
            format!("{column}.{}", direction.suffix()),
        ));
        self
    }

    /// Bounded row window, inclusive offsets.
    #[must_use]
    pub fn range(mut self, first: u64, last: u64) -> Self {
        self.headers
            .push(("Range-Unit".to_string(), "items".to_string()));
        self.headers
            .push(("Range".to_string(), format!("{first}-{last}")));
        self
    }

    /// Ask the store for the exact total matching count alongside the rows.
    #[must_use]
    pub fn count_exact(mut self) -> Self {
        self.headers
            .push(("Prefer".to_string(), "count=exact".to_string()));
        self
    }

    /// Expect exactly one row back as a bare object rather than an array.
    ///
    /// The store answers a zero-row match with an error status, which the
    /// executor surfaces as a remote error; no-match and no-op are not
    /// distinguished.
    #[must_use]
    pub fn single(mut self) -> Self {
        self.headers.push((
            "Accept".to_string(),
            "application/vnd.pgrst.object+json".to_string(),
        ));
        self
    }

    /// The verb this request maps onto.
    #[must_use]
    pub const fn verb(&self) -> Verb {
        self.verb
    }

    /// Target table name.
    #[must_use]
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Query pairs, in the order they were added.
    #[must_use]
    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    /// Extra headers, in the order they were added.
    #[must_use]
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// JSON body for insert/patch requests.
    #[must_use]
    pub const fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    /// Whether this request expects a single-object response.
    #[must_use]
    pub fn expects_single(&self) -> bool {
        self.headers
            .iter()
            .any(|(name, value)| name == "Accept" && value.contains("object+json"))
    }

    /// Look up a header value by name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(candidate, _)| candidate == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Total row count carried by a `Content-Range` response header.
///
/// The store answers ranged reads with `first-last/total` (or `*/total`
/// for an empty window). A `*` total means the count was not requested.
#[must_use]
pub fn parse_content_range(value: &str) -> Option<u64> {
    let total = value.rsplit('/').next()?;
    total.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn select_builds_a_ranged_counted_get() {
        let request = TableRequest::select("roles")
            .eq("id_contrato", 7)
            .order("id", Direction::Ascending)
            .range(0, 9)
            .count_exact();

        assert_eq!(request.verb(), Verb::Get);
        assert_eq!(request.table(), "roles");
        assert_eq!(
            request.query(),
            &[
                ("select".to_string(), "*".to_string()),
                ("id_contrato".to_string(), "eq.7".to_string()),
                ("order".to_string(), "id.asc".to_string()),
            ]
        );
        assert_eq!(request.header("Range"), Some("0-9"));
        assert_eq!(request.header("Range-Unit"), Some("items"));
        assert_eq!(request.header("Prefer"), Some("count=exact"));
        assert!(request.body().is_none());
    }

    #[test]
    fn insert_asks_for_the_stored_representation() {
        let request = TableRequest::insert(
            "roles",
            json!({"name": "Admin", "description": "Full access", "id_contrato": 7}),
        );

        assert_eq!(request.verb(), Verb::Post);
        assert!(request.expects_single());
        assert_eq!(request.header("Prefer"), Some("return=representation"));
        assert_eq!(request.body().unwrap()["name"], "Admin");
    }

    #[test]
    fn update_filters_by_id_and_tenant() {
        let request = TableRequest::update("usuarios", json!({"nombre": "Luisa"}))
            .eq("id", 3)
            .eq("id_contrato", 7);

        assert_eq!(request.verb(), Verb::Patch);
        assert!(
            request
                .query()
                .contains(&("id".to_string(), "eq.3".to_string()))
        );
        assert!(
            request
                .query()
                .contains(&("id_contrato".to_string(), "eq.7".to_string()))
        );
    }

    #[test]
    fn delete_is_bodyless() {
        let request = TableRequest::delete("menus").eq("id", 12);
        assert_eq!(request.verb(), Verb::Delete);
        assert!(request.body().is_none());
        assert!(!request.expects_single());
    }

    #[test]
    fn null_filter_uses_the_is_operator() {
        let request = TableRequest::select("menus")
            .is_null("parent_id")
            .order("order", Direction::Ascending);
        assert!(
            request
                .query()
                .contains(&("parent_id".to_string(), "is.null".to_string()))
        );
        assert!(
            request
                .query()
                .contains(&("order".to_string(), "order.asc".to_string()))
        );
    }

    #[test]
    fn descending_order_has_the_desc_suffix() {
        let request = TableRequest::select("roles").order("id", Direction::Descending);
        assert!(
            request
                .query()
                .contains(&("order".to_string(), "id.desc".to_string()))
        );
    }

    #[test]
    fn content_range_totals_parse() {
        assert_eq!(parse_content_range("0-9/57"), Some(57));
        assert_eq!(parse_content_range("*/0"), Some(0));
        assert_eq!(parse_content_range("0-9/*"), None);
        assert_eq!(parse_content_range("garbage"), None);
    }
}
