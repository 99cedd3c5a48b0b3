//! The `examtrack require` command.

use std::path::PathBuf;

use anyhow::Result;

use examtrack_core::requirement::required_second_track;
use examtrack_core::Selector;

use crate::render;

pub fn execute(
    target: f64,
    first_raw: f64,
    merit: f64,
    selector: Option<String>,
    format: Option<String>,
    config: Option<PathBuf>,
) -> Result<()> {
    let config = super::load_config(config.as_deref())?;
    let format = super::output_format(format, &config)?;

    let selector = match selector {
        Some(s) => s.parse::<Selector>()?,
        None => config.default_selector,
    };
    if selector.is_first_only() {
        anyhow::bail!("selector {selector} has no second track to solve for");
    }

    let requirement = required_second_track(target, first_raw, merit, selector);
    println!("{}", render::render_requirement(&requirement, format)?);

    Ok(())
}
