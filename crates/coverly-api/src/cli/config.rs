//! Resolved configuration display command.

use anyhow::Result;
use console::style;

use crate::state::AppState;

/// Show where configuration comes from and what it resolved to.
pub fn show(state: &AppState, json: bool) -> Result<()> {
    let config_path = state.data_dir.join("config.toml");

    if json {
        let out = serde_json::json!({
            "version": env!("CARGO_PKG_VERSION"),
            "data_dir": state.data_dir.display().to_string(),
            "config_file": config_path.display().to_string(),
            "backend_url": state.config.backend_url,
            "request_timeout_secs": state.config.request_timeout_secs,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!();
    println!(
        "  {} Coverly v{}",
        style("🛡").bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!();

    println!("  {}", style("── Backend ──").dim());
    println!("  URL:     {}", style(&state.config.backend_url).bold());
    match state.config.request_timeout_secs {
        Some(secs) => println!("  Timeout: {secs}s"),
        None => println!("  Timeout: {}", style("transport default").dim()),
    }
    println!();

    println!("  {}", style("── Files ──").dim());
    println!("  Data dir: {}", style(state.data_dir.display()).dim());
    println!("  Config:   {}", style(config_path.display()).dim());
    println!();

    Ok(())
}
