use super::handlers::{catalog, health};
use utoipa::openapi::{Contact, InfoBuilder, License, OpenApiBuilder, Tag};
use utoipa_axum::{router::OpenApiRouter, routes};

#[must_use]
pub fn openapi() -> utoipa::openapi::OpenApi {
    let (_router, openapi) = api_router().split_for_parts();
    openapi
}

/// Build the router that also drives the `OpenAPI` document.
///
/// Add new endpoints here via `.routes(routes!(...))` so they are both served
/// and included in the generated `OpenAPI` document.
pub(crate) fn api_router() -> OpenApiRouter {
    // utoipa-axum 0.1 has no `get_openapi_mut`; `routes()` never touches
    // tags, so setting them on the base document is equivalent.
    let mut doc = document();
    doc.tags = Some(vec![
        tag("health", "Service status and build metadata"),
        tag("catalog", "Product table and category filtering"),
    ]);

    OpenApiRouter::with_openapi(doc)
        .routes(routes!(health::health))
        .routes(routes!(catalog::categories))
        .routes(routes!(catalog::products))
        .routes(routes!(catalog::product))
}

fn tag(name: &str, description: &str) -> Tag {
    let mut tag = Tag::new(name);
    tag.description = Some(description.to_string());
    tag
}

/// Document metadata comes from the package manifest; empty manifest
/// fields are left out of the document.
fn document() -> utoipa::openapi::OpenApi {
    let non_empty = |value: &'static str| Some(value.trim()).filter(|v| !v.is_empty());

    let mut info = InfoBuilder::new()
        .title(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .description(non_empty(env!("CARGO_PKG_DESCRIPTION")))
        .build();

    info.contact = env!("CARGO_PKG_AUTHORS")
        .split(';')
        .find_map(author_contact);
    info.license = non_empty(env!("CARGO_PKG_LICENSE")).map(|spdx| {
        let mut license = License::new(spdx);
        license.identifier = Some(spdx.to_string());
        license
    });

    OpenApiBuilder::new().info(info).build()
}

/// Reads a manifest author entry, `Name <email>` or a bare name.
fn author_contact(author: &str) -> Option<Contact> {
    let (name, email) = match author.split_once('<') {
        Some((name, rest)) => (name, rest.trim_end().trim_end_matches('>')),
        None => (author, ""),
    };
    let name = Some(name.trim()).filter(|n| !n.is_empty());
    let email = Some(email.trim()).filter(|e| !e.is_empty());
    if name.is_none() && email.is_none() {
        return None;
    }

    let mut contact = Contact::new();
    contact.name = name.map(str::to_string);
    contact.email = email.map(str::to_string);
    Some(contact)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_info_from_cargo() {
        let doc = openapi();
        assert_eq!(doc.info.title, env!("CARGO_PKG_NAME"));
        assert_eq!(doc.info.version, env!("CARGO_PKG_VERSION"));

        let contact = doc.info.contact;
        assert!(contact.is_some());
        if let Some(contact) = contact {
            assert_eq!(contact.name.as_deref(), Some("Team Bevpack"));
            assert_eq!(contact.email.as_deref(), Some("team@bevpack.dev"));
        }

        let license = doc.info.license;
        assert!(license.is_some());
        if let Some(license) = license {
            assert_eq!(license.name, "BSD-3-Clause");
        }
    }

    #[test]
    fn openapi_tags_and_paths() {
        let doc = openapi();
        let tags = doc.tags.clone().unwrap_or_default();
        assert!(tags.iter().any(|tag| tag.name == "catalog"));
        assert!(tags.iter().any(|tag| tag.name == "health"));
        assert!(doc.paths.paths.contains_key("/health"));
        assert!(doc.paths.paths.contains_key("/v1/catalog/categories"));
        assert!(doc.paths.paths.contains_key("/v1/catalog/products"));
        assert!(doc.paths.paths.contains_key("/v1/catalog/products/{id}"));
    }

    #[test]
    fn author_contact_variants() {
        let full = author_contact(" Team Bevpack <team@bevpack.dev> ");
        assert_eq!(
            full.as_ref().and_then(|c| c.name.as_deref()),
            Some("Team Bevpack")
        );
        assert_eq!(
            full.as_ref().and_then(|c| c.email.as_deref()),
            Some("team@bevpack.dev")
        );

        let bare = author_contact("Solo");
        assert_eq!(bare.as_ref().and_then(|c| c.name.as_deref()), Some("Solo"));
        assert_eq!(bare.as_ref().and_then(|c| c.email.as_deref()), None);

        let email_only = author_contact("<ops@bevpack.dev>");
        assert_eq!(email_only.as_ref().and_then(|c| c.name.as_deref()), None);
        assert_eq!(
            email_only.as_ref().and_then(|c| c.email.as_deref()),
            Some("ops@bevpack.dev")
        );

        assert!(author_contact("  ").is_none());
        assert!(author_contact("<>").is_none());
    }
}
