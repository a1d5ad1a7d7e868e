use std::path::Path;

use serde::Serialize;
use tera::{Context, Tera};

#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    #[error("template error: {0}")]
    Template(#[from] tera::Error),

    #[error("templates directory not found: {0}")]
    TemplatesNotFound(String),

    #[error("default template not found: {0}")]
    TemplateNotFound(String),
}

/// The page templates, wrapping Tera.
///
/// Built once per run and passed to every page render.
pub struct TemplateRegistry {
    tera: Tera,
    /// Template name (without extension) used as the fallback
    default_template: String,
}

impl TemplateRegistry {
    /// Load every `*.html` file under the given templates directory.
    pub fn load(templates_path: &Path, default_template: &str) -> Result<Self, RenderError> {
        if !templates_path.is_dir() {
            return Err(RenderError::TemplatesNotFound(
                templates_path.display().to_string(),
            ));
        }

        let glob = templates_path.join("**/*.html");
        let glob_str = glob.to_string_lossy();
        let tera = Tera::new(&glob_str)?;

        Self::from_tera(tera, default_template)
    }

    /// Wrap an already populated Tera instance.
    pub fn from_tera(mut tera: Tera, default_template: &str) -> Result<Self, RenderError> {
        // Content and ToC arrive as finished HTML
        tera.autoescape_on(vec![]);

        let registry = Self {
            tera,
            default_template: default_template.to_string(),
        };

        let default_file = template_file(default_template);
        if !registry.has_template(&default_file) {
            return Err(RenderError::TemplateNotFound(default_file));
        }

        Ok(registry)
    }

    /// Resolve a template name to a loaded template file, falling back to the
    /// default template when it doesn't exist.
    pub fn resolve(&self, name: &str) -> String {
        let file = template_file(name);
        if self.has_template(&file) {
            return file;
        }

        log::warn!(
            "Template {} not found, falling back to {}",
            file,
            template_file(&self.default_template)
        );
        template_file(&self.default_template)
    }

    /// Render a page with the template it names.
    pub fn render_page(&self, template: &str, context: &PageContext) -> Result<String, RenderError> {
        let mut tera_context = Context::new();
        tera_context.insert("content", &context.content);
        tera_context.insert("toc", &context.toc);
        tera_context.insert("title", &context.title);
        tera_context.insert("scripts_folder", &context.scripts_folder);

        Ok(self.tera.render(&self.resolve(template), &tera_context)?)
    }

    /// Names of all loaded templates.
    pub fn template_names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.tera.get_template_names().collect();
        names.sort_unstable();
        names
    }

    fn has_template(&self, file: &str) -> bool {
        self.tera.get_template_names().any(|loaded| loaded == file)
    }
}

fn template_file(name: &str) -> String {
    format!("{name}.html")
}

/// Bindings passed to page templates.
#[derive(Debug, Clone, Serialize)]
pub struct PageContext {
    /// Rendered page body
    pub content: String,
    /// Rendered table of contents
    pub toc: String,
    pub title: String,
    /// Name of the static assets folder
    pub scripts_folder: String,
}

#[cfg(test)]
pub(crate) fn test_registry(templates: &[(&str, &str)]) -> TemplateRegistry {
    let mut tera = Tera::default();
    tera.add_raw_templates(templates.to_vec()).unwrap();
    TemplateRegistry::from_tera(tera, "default").unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> PageContext {
        PageContext {
            content: "<p>Body & more</p>".to_string(),
            toc: "<ol class=\"toc\"></ol>".to_string(),
            title: "Home".to_string(),
            scripts_folder: "scripts".to_string(),
        }
    }

    #[test]
    fn test_render_binds_all_variables() {
        let registry = test_registry(&[(
            "default.html",
            "{{ title }}|{{ scripts_folder }}|{{ toc }}|{{ content }}",
        )]);
        let html = registry.render_page("default", &context()).unwrap();
        assert_eq!(
            html,
            "Home|scripts|<ol class=\"toc\"></ol>|<p>Body & more</p>"
        );
    }

    #[test]
    fn test_named_template_is_used() {
        let registry = test_registry(&[
            ("default.html", "default"),
            ("blog.html", "blog: {{ title }}"),
        ]);
        assert_eq!(registry.render_page("blog", &context()).unwrap(), "blog: Home");
    }

    #[test]
    fn test_missing_template_falls_back_to_default() {
        let registry = test_registry(&[("default.html", "default: {{ title }}")]);
        assert_eq!(registry.resolve("nope"), "default.html");
        assert_eq!(
            registry.render_page("nope", &context()).unwrap(),
            "default: Home"
        );
    }

    #[test]
    fn test_missing_default_template_is_an_error() {
        let mut tera = Tera::default();
        tera.add_raw_template("blog.html", "blog").unwrap();
        let result = TemplateRegistry::from_tera(tera, "default");
        assert!(matches!(result, Err(RenderError::TemplateNotFound(_))));
    }

    #[test]
    fn test_load_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("default.html"), "<main>{{ content }}</main>").unwrap();
        std::fs::create_dir(dir.path().join("layouts")).unwrap();
        std::fs::write(dir.path().join("layouts/wide.html"), "{{ content }}").unwrap();

        let registry = TemplateRegistry::load(dir.path(), "default").unwrap();
        assert_eq!(registry.template_names(), ["default.html", "layouts/wide.html"]);
        assert_eq!(registry.resolve("layouts/wide"), "layouts/wide.html");
    }

    #[test]
    fn test_load_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let result = TemplateRegistry::load(&dir.path().join("missing"), "default");
        assert!(matches!(result, Err(RenderError::TemplatesNotFound(_))));
    }
}
