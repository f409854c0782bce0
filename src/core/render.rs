//! HTML output: page shells with fragments injected by element id.

use crate::utils::error::{Result, SiteError};
use minijinja::Environment;
use regex::Regex;
use serde::Serialize;
use std::path::Path;

pub const STORE_SHELL: &str = include_str!("../../templates/store.html");
pub const PORTFOLIO_SHELL: &str = include_str!("../../templates/portfolio.html");

const FRAGMENTS: [(&str, &str); 11] = [
    ("package_cards.html", include_str!("../../templates/fragments/package_cards.html")),
    ("package_details.html", include_str!("../../templates/fragments/package_details.html")),
    ("repo_actions.html", include_str!("../../templates/fragments/repo_actions.html")),
    ("product_thumbnails.html", include_str!("../../templates/fragments/product_thumbnails.html")),
    ("product_details.html", include_str!("../../templates/fragments/product_details.html")),
    ("services.html", include_str!("../../templates/fragments/services.html")),
    ("worked_for.html", include_str!("../../templates/fragments/worked_for.html")),
    ("personal_projects.html", include_str!("../../templates/fragments/personal_projects.html")),
    ("others.html", include_str!("../../templates/fragments/others.html")),
    ("reviews.html", include_str!("../../templates/fragments/reviews.html")),
    ("social_links.html", include_str!("../../templates/fragments/social_links.html")),
];

/// Renders the embedded fragment templates. Autoescaping is on for every
/// fragment (`.html` names).
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        for (name, source) in FRAGMENTS {
            env.add_template(name, source)?;
        }
        Ok(Self { env })
    }

    pub fn render<S: Serialize>(&self, fragment: &str, context: S) -> Result<String> {
        let template = self.env.get_template(fragment)?;
        Ok(template.render(context)?)
    }
}

/// Reads `<dir>/<file_name>` when a template directory is configured,
/// otherwise returns the embedded default.
pub fn load_shell(templates_dir: Option<&Path>, file_name: &str, default: &str) -> Result<String> {
    match templates_dir {
        Some(dir) => {
            let path = dir.join(file_name);
            tracing::debug!("Loading page shell from {}", path.display());
            Ok(std::fs::read_to_string(path)?)
        }
        None => Ok(default.to_string()),
    }
}

fn target_pattern(target: &str) -> Result<Regex> {
    Regex::new(&format!(
        r#"<[A-Za-z][^>]*\sid\s*=\s*"{}"[^>]*>"#,
        regex::escape(target)
    ))
    .map_err(|e| SiteError::ConfigError {
        message: format!("Invalid render target '{}': {}", target, e),
    })
}

/// A page being assembled. Each `fill` targets one element by id; a target
/// absent from the shell skips that step.
#[derive(Debug, Clone)]
pub struct PageDocument {
    name: String,
    html: String,
    skipped: Vec<String>,
}

impl PageDocument {
    pub fn new(name: impl Into<String>, shell: String) -> Self {
        Self {
            name: name.into(),
            html: shell,
            skipped: Vec::new(),
        }
    }

    pub fn has_target(&self, target: &str) -> bool {
        target_pattern(target)
            .map(|re| re.is_match(&self.html))
            .unwrap_or(false)
    }

    /// Appends `fragment` as the first child of `#target`.
    pub fn inject(&mut self, target: &str, fragment: &str) -> Result<()> {
        let re = target_pattern(target)?;
        let end = match re.find(&self.html) {
            Some(m) => m.end(),
            None => {
                return Err(SiteError::MissingTarget {
                    page: self.name.clone(),
                    target: target.to_string(),
                })
            }
        };
        self.html.insert_str(end, fragment);
        Ok(())
    }

    /// Renders and injects only when the target exists. Missing targets are
    /// logged and recorded; render errors propagate.
    pub fn fill<F>(&mut self, target: &str, render: F) -> Result<()>
    where
        F: FnOnce() -> Result<String>,
    {
        if !self.has_target(target) {
            let err = SiteError::MissingTarget {
                page: self.name.clone(),
                target: target.to_string(),
            };
            tracing::warn!("{}; skipping", err);
            self.skipped.push(target.to_string());
            return Ok(());
        }
        let fragment = render()?;
        self.inject(target, &fragment)
    }

    pub fn skipped(&self) -> &[String] {
        &self.skipped
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn into_html(self) -> String {
        self.html
    }
}
