//! OpenAPI documentation module
//!
//! The description document is derived from the same `#[utoipa::path]`
//! annotations and `ToSchema` types the handlers use, so routes, request
//! validation and documentation cannot drift apart. Also renders the
//! Swagger UI page that browses the document.

// Allow clippy warnings from macro-generated code in utoipa derive
#![allow(clippy::needless_for_each)]

use serde_json::Value;
use utoipa::{
    Modify, OpenApi,
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
};

use crate::{error::ErrorResponse, handlers};

/// OpenAPI version advertised in the served document
pub const OPENAPI_VERSION: &str = "3.0.0";

/// Name of the bearer security scheme referenced by protected operations
pub const BEARER_SCHEME_NAME: &str = "bearerAuth";

/// Swagger UI assets
const SWAGGER_UI_DIST: &str = "https://cdn.jsdelivr.net/npm/swagger-ui-dist@5";

/// OpenAPI documentation for the gateway
#[derive(OpenApi)]
#[openapi(
    info(title = "Hono API", version = "v1"),
    tags(
        (name = "hello", description = "Greeting endpoints")
    ),
    paths(
        handlers::hello::get_hello,
        handlers::hello::post_hello,
    ),
    components(
        schemas(
            handlers::hello::GreetingRequest,
            handlers::hello::GreetingResponse,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon)
)]
#[derive(Debug)]
pub struct ApiDoc;

/// Registers the bearer security scheme and trims `info` to title and version
#[derive(Debug)]
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        // Cargo metadata fills these; `license.identifier` is not valid in 3.0
        openapi.info.description = None;
        openapi.info.contact = None;
        openapi.info.license = None;

        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                BEARER_SCHEME_NAME,
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .description(Some("Bearer token"))
                        .build(),
                ),
            );
        }
    }
}

/// Build the description document served to clients
///
/// utoipa only emits 3.1 documents; the version field is rewritten to the
/// one the gateway advertises.
pub fn api_description() -> Result<Value, serde_json::Error> {
    let mut doc = serde_json::to_value(ApiDoc::openapi())?;

    if let Some(object) = doc.as_object_mut() {
        object.insert("openapi".to_string(), Value::from(OPENAPI_VERSION));
    }

    Ok(doc)
}

/// Render the Swagger UI page for a description document URL
#[must_use]
pub fn swagger_ui_html(spec_url: &str) -> String {
    // JSON string literal doubles as a safely quoted JS string
    let url = Value::from(spec_url);

    format!(
        r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <meta name="description" content="SwaggerUI" />
    <title>SwaggerUI</title>
    <link rel="stylesheet" href="{SWAGGER_UI_DIST}/swagger-ui.css" />
  </head>
  <body>
    <div id="swagger-ui"></div>
    <script src="{SWAGGER_UI_DIST}/swagger-ui-bundle.js" crossorigin="anonymous"></script>
    <script>
      window.onload = () => {{
        window.ui = SwaggerUIBundle({{
          dom_id: '#swagger-ui',
          url: {url},
        }});
      }};
    </script>
  </body>
</html>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc() -> Value {
        api_description().expect("Failed to serialize OpenAPI spec")
    }

    #[test]
    fn openapi_header_fields() {
        let doc = doc();
        assert_eq!(doc["openapi"], "3.0.0");
        assert_eq!(doc["info"]["title"], "Hono API");
        assert_eq!(doc["info"]["version"], "v1");
    }

    #[test]
    fn info_carries_only_title_and_version() {
        let doc = doc();
        let mut keys: Vec<_> = doc["info"].as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, ["title", "version"]);
    }

    #[test]
    fn document_has_no_openapi_31_only_fields() {
        fn has_key(value: &Value, key: &str) -> bool {
            match value {
                Value::Object(map) => {
                    map.contains_key(key) || map.values().any(|v| has_key(v, key))
                },
                Value::Array(items) => items.iter().any(|v| has_key(v, key)),
                _ => false,
            }
        }

        let doc = doc();
        assert!(!has_key(&doc, "identifier"));
        assert!(!has_key(&doc, "webhooks"));
        assert!(!has_key(&doc, "jsonSchemaDialect"));
    }

    #[test]
    fn openapi_lists_both_hello_operations() {
        let doc = doc();
        let hello = &doc["paths"]["/api/hello"];
        assert!(hello["get"].is_object());
        assert!(hello["post"].is_object());
        assert_eq!(hello["get"]["summary"], "Hello endpoint");
        assert_eq!(hello["post"]["summary"], "Hello POST endpoint");
    }

    #[test]
    fn documentation_routes_are_not_described() {
        let doc = doc();
        let paths = doc["paths"].as_object().unwrap();
        assert_eq!(paths.len(), 1);
        assert!(!paths.contains_key("/api/doc"));
        assert!(!paths.contains_key("/api/docs"));
    }

    #[test]
    fn openapi_has_bearer_security_scheme() {
        let doc = doc();
        let scheme = &doc["components"]["securitySchemes"][BEARER_SCHEME_NAME];
        assert_eq!(scheme["type"], "http");
        assert_eq!(scheme["scheme"], "bearer");
        assert_eq!(scheme["description"], "Bearer token");
    }

    #[test]
    fn hello_operations_require_bearer_auth() {
        let doc = doc();
        for method in ["get", "post"] {
            let security = &doc["paths"]["/api/hello"][method]["security"];
            assert!(
                security[0].get(BEARER_SCHEME_NAME).is_some(),
                "{method} /api/hello should require {BEARER_SCHEME_NAME}"
            );
        }
    }

    #[test]
    fn get_hello_documents_unauthorized_response() {
        let doc = doc();
        let responses = &doc["paths"]["/api/hello"]["get"]["responses"];
        assert!(responses["200"].is_object());
        assert!(responses["401"].is_object());
    }

    #[test]
    fn post_hello_requires_message_body() {
        let doc = doc();
        let body = &doc["paths"]["/api/hello"]["post"]["requestBody"];
        assert_eq!(body["description"], "Message to send");
        assert!(body["content"]["application/json"].is_object());

        let schema = &doc["components"]["schemas"]["GreetingRequest"];
        assert_eq!(schema["required"], serde_json::json!(["message"]));
        assert_eq!(
            schema["properties"]["message"]["description"],
            "The message to send"
        );
    }

    #[test]
    fn openapi_has_all_schemas() {
        let doc = doc();
        let schemas = &doc["components"]["schemas"];
        assert!(schemas["GreetingRequest"].is_object());
        assert!(schemas["GreetingResponse"].is_object());
        assert!(schemas["ErrorResponse"].is_object());
    }

    #[test]
    fn swagger_page_loads_assets_and_document() {
        let page = swagger_ui_html("/api/doc");
        assert!(page.contains("swagger-ui-bundle.js"));
        assert!(page.contains("swagger-ui.css"));
        assert!(page.contains(r#"url: "/api/doc""#));
    }

    #[test]
    fn swagger_page_quotes_url() {
        let page = swagger_ui_html(r#"/x"y"#);
        assert!(page.contains(r#"url: "/x\"y""#));
    }
}
