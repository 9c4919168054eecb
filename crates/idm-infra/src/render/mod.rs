//! Tera-backed view template rendering.

use std::collections::BTreeMap;

use anyhow::Context;
use tera::Tera;
use tracing::debug;

use idm_core::ports::TemplateRendererPort;
use idm_core::registration::{
    FIELD_PASSWORD, FIELD_PASSWORD_CONFIRM, FIELD_TERMS, REGISTRATION_TEMPLATE,
};
use idm_core::FormRoot;

use crate::error::AdapterError;

const REGISTRATION_TEMPLATE_SOURCE: &str =
    include_str!("../../templates/admin_user_registration.html");

/// Secrets are never echoed back into markup.
const UNRENDERED_FIELDS: [&str; 2] = [FIELD_PASSWORD, FIELD_PASSWORD_CONFIRM];

pub struct TeraTemplateRenderer {
    tera: Tera,
}

impl TeraTemplateRenderer {
    /// Renderer with the built-in console templates registered.
    pub fn new() -> Result<Self, AdapterError> {
        let mut tera = Tera::default();
        tera.add_raw_template(REGISTRATION_TEMPLATE, REGISTRATION_TEMPLATE_SOURCE)
            .map_err(|source| AdapterError::Template {
                name: REGISTRATION_TEMPLATE,
                source,
            })?;
        Ok(Self { tera })
    }

    fn context(root: &FormRoot) -> tera::Context {
        let values: BTreeMap<&str, &str> = root
            .fields()
            .iter()
            .filter(|(name, _)| !UNRENDERED_FIELDS.contains(&name.as_str()))
            .map(|(name, value)| (name.as_str(), value.as_str()))
            .collect();

        let mut context = tera::Context::new();
        context.insert("form_id", root.id());
        context.insert("values", &values);
        context.insert("terms_checked", &root.is_checked(FIELD_TERMS));
        context.insert("submit_enabled", &root.submit_enabled());
        context
    }
}

impl TemplateRendererPort for TeraTemplateRenderer {
    fn render(&self, template: &str, root: &mut FormRoot) -> anyhow::Result<()> {
        let markup = self
            .tera
            .render(template, &Self::context(root))
            .with_context(|| format!("Failed to render template {template}"))?;
        debug!(template, form_id = %root.id(), bytes = markup.len(), "template rendered");
        root.set_markup(markup);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_form_id_and_escaped_values_without_passwords() {
        let renderer = TeraTemplateRenderer::new().unwrap();
        let mut root = FormRoot::new("registration")
            .with_field("email", "a@b.com")
            .with_field("givenName", "<Ada>")
            .with_field("password", "top-secret");

        renderer
            .render(REGISTRATION_TEMPLATE, &mut root)
            .unwrap();

        let markup = root.markup().unwrap();
        assert!(markup.contains(r#"<form id="registration""#));
        assert!(markup.contains("a@b.com"));
        assert!(markup.contains("&lt;Ada&gt;"));
        assert!(!markup.contains("top-secret"));
        assert!(markup.contains(" disabled"));
    }

    #[test]
    fn rerender_replaces_markup_and_keeps_inputs() {
        let renderer = TeraTemplateRenderer::new().unwrap();
        let mut root = FormRoot::new("registration").with_field("terms", "on");

        renderer.render(REGISTRATION_TEMPLATE, &mut root).unwrap();
        root.set_submit_enabled(true);
        renderer.render(REGISTRATION_TEMPLATE, &mut root).unwrap();

        let markup = root.markup().unwrap();
        assert!(markup.contains(" checked"));
        assert!(!markup.contains(" disabled"));
        assert_eq!(root.field("terms"), Some("on"));
    }

    #[test]
    fn unknown_template_is_an_error() {
        let renderer = TeraTemplateRenderer::new().unwrap();
        let mut root = FormRoot::new("registration");
        assert!(renderer.render("missing.html", &mut root).is_err());
        assert!(!root.is_rendered());
    }
}
