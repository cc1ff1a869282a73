//! Embedded page templates.

use minijinja::{Environment, context};

use super::error::WebError;
use crate::task::domain::Task;

/// Template name; the `.html` suffix selects HTML auto-escaping.
const INDEX_TEMPLATE: &str = "index.html";

const INDEX_SOURCE: &str = include_str!("../../templates/index.html");

/// Renders the board index page for the given display-ordered tasks.
///
/// # Errors
///
/// Returns [`WebError::Template`] when the template fails to compile or
/// render.
pub fn render_index(tasks: &[Task]) -> Result<String, WebError> {
    let mut environment = Environment::new();
    environment.add_template(INDEX_TEMPLATE, INDEX_SOURCE)?;
    let template = environment.get_template(INDEX_TEMPLATE)?;
    Ok(template.render(context! { tasks => tasks })?)
}
