use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use quandy_core::config::{load_form, load_page_defaults};
use quandy_core::{render_form, render_page};

pub fn run_page(config_path: &Path, title: Option<&str>, body: Option<&Path>) -> Result<String> {
    let mut page = load_page_defaults(config_path)?;
    if let Some(title) = title {
        page.page_title = title.to_string();
    }
    if let Some(body_path) = body {
        page.body = fs::read_to_string(body_path)
            .with_context(|| format!("failed to read {}", body_path.display()))?;
    }
    Ok(render_page(&page))
}

pub fn run_form(config_path: &Path) -> Result<String> {
    let form = load_form(config_path)?;
    Ok(render_form(&form))
}
