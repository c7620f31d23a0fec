//! `savepath name <url>` – build the save path for a URL.

use anyhow::Result;
use savepath_core::config::SavepathConfig;
use savepath_core::fetch_head::CurlHeaderSource;
use savepath_core::filename_guess::{self, FilenameGuess};
use savepath_core::plan::{plan_save_path, vars_for_url};
use savepath_core::template::VariableTable;

pub async fn run_name(
    cfg: &SavepathConfig,
    url: &str,
    template: Option<&str>,
    no_probe: bool,
    extra_vars: &[(String, String)],
) -> Result<()> {
    let guess = if no_probe {
        FilenameGuess::default()
    } else {
        let source = CurlHeaderSource::new(cfg.probe_config());
        match filename_guess::resolve(url, &source).await {
            Ok(guess) => guess,
            Err(e) => {
                // The URL alone may still yield a usable name.
                tracing::warn!("probe failed, using URL only: {}", e);
                FilenameGuess::default()
            }
        }
    };

    let mut vars = vars_for_url(url, &guess, &cfg.replacement);
    let user: VariableTable = extra_vars.iter().map(|(k, v)| (k, v.as_str())).collect();
    vars.extend_from(&user);

    let template = template.unwrap_or(&cfg.template);
    let path = plan_save_path(template, &vars, &cfg.replacement)?;
    println!("{path}");
    Ok(())
}
