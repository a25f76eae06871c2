use axum::body::Bytes;
use axum::extract::rejection::{BytesRejection, QueryRejection};
use axum::extract::Query;
use serde_json::Value;
use tracing::{debug, info};

pub const FALLBACK_GREETING: &str =
    "Hello, World! Welcome to Azure Functions. Pass a 'name' parameter to personalize this message.";

/// Raw query pairs; a repeated `name` key must not reject the whole query.
pub type HelloQueryParams = Vec<(String, String)>;

/// Query parameter first, then a `name` field in a JSON body. Rejections from
/// either extractor degrade to "no name" instead of an error response.
pub async fn hello(
    params: Result<Query<HelloQueryParams>, QueryRejection>,
    body: Result<Bytes, BytesRejection>,
) -> String {
    info!("Hello endpoint requested");

    let from_query = params.ok().and_then(|Query(params)| name_from_query(params));
    let name = match from_query {
        Some(name) => Some(name),
        None => body.ok().and_then(|bytes| name_from_body(&bytes)),
    };

    greeting(name.as_deref())
}

pub fn greeting(name: Option<&str>) -> String {
    match name {
        Some(name) => format!("Hello, {name}! Welcome to Azure Functions."),
        None => FALLBACK_GREETING.to_string(),
    }
}

fn non_empty(name: Option<String>) -> Option<String> {
    name.filter(|name| !name.is_empty())
}

fn name_from_query(params: HelloQueryParams) -> Option<String> {
    params
        .into_iter()
        .find(|(key, value)| key == "name" && !value.is_empty())
        .map(|(_, value)| value)
}

fn name_from_body(bytes: &[u8]) -> Option<String> {
    match serde_json::from_slice::<Value>(bytes) {
        Ok(Value::Object(mut fields)) => match fields.remove("name") {
            Some(Value::String(name)) => non_empty(Some(name)),
            _ => None,
        },
        Ok(_) => None,
        Err(err) => {
            debug!(error = %err, "request body is not JSON");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(name: Option<&str>) -> Result<Query<HelloQueryParams>, QueryRejection> {
        Ok(Query(
            name.map(|name| vec![("name".to_string(), name.to_string())])
                .unwrap_or_default(),
        ))
    }

    fn body(raw: &'static str) -> Result<Bytes, BytesRejection> {
        Ok(Bytes::from_static(raw.as_bytes()))
    }

    #[tokio::test]
    async fn greets_name_from_query() {
        let text = hello(query(Some("Ada")), body("")).await;
        assert_eq!(text, "Hello, Ada! Welcome to Azure Functions.");
    }

    #[tokio::test]
    async fn greets_name_from_json_body() {
        let text = hello(query(None), body(r#"{"name": "Grace"}"#)).await;
        assert_eq!(text, "Hello, Grace! Welcome to Azure Functions.");
    }

    #[tokio::test]
    async fn query_takes_precedence_over_body() {
        let text = hello(query(Some("Ada")), body(r#"{"name": "Grace"}"#)).await;
        assert_eq!(text, "Hello, Ada! Welcome to Azure Functions.");
    }

    #[tokio::test]
    async fn empty_query_name_falls_through_to_body() {
        let text = hello(query(Some("")), body(r#"{"name": "Grace"}"#)).await;
        assert_eq!(text, "Hello, Grace! Welcome to Azure Functions.");

        let text = hello(query(Some("")), body("")).await;
        assert_eq!(text, FALLBACK_GREETING);
    }

    #[tokio::test]
    async fn unparseable_body_falls_back() {
        let text = hello(query(None), body("not json")).await;
        assert_eq!(
            text,
            "Hello, World! Welcome to Azure Functions. Pass a 'name' parameter to personalize this message."
        );
    }

    #[test]
    fn first_non_empty_query_name_wins() {
        let pairs = |raw: &[(&str, &str)]| -> HelloQueryParams {
            raw.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
        };
        assert_eq!(
            name_from_query(pairs(&[("name", "Ada"), ("name", "Bob")])).as_deref(),
            Some("Ada")
        );
        assert_eq!(
            name_from_query(pairs(&[("name", ""), ("name", "Bob")])).as_deref(),
            Some("Bob")
        );
        assert_eq!(name_from_query(pairs(&[("nom", "Ada")])), None);
    }

    #[test]
    fn body_without_usable_name_yields_none() {
        assert_eq!(name_from_body(br#"{}"#), None);
        assert_eq!(name_from_body(br#"{"name": ""}"#), None);
        assert_eq!(name_from_body(br#"{"name": null}"#), None);
        assert_eq!(name_from_body(br#"{"name": 42}"#), None);
        assert_eq!(name_from_body(br#"["Grace"]"#), None);
        assert_eq!(name_from_body(b"null"), None);
    }
}
