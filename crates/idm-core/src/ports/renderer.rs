use anyhow::Result;

use crate::registration::FormRoot;

pub trait TemplateRendererPort: Send + Sync {
    /// Render `template` into the form root's markup.
    ///
    /// Re-rendering replaces the previous markup and keeps input values.
    fn render(&self, template: &str, root: &mut FormRoot) -> Result<()>;
}

