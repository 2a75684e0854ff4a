//! Welcome banner display for consultation sessions.

use console::style;

/// Print the welcome banner at the start of a session.
///
/// Shows the advisor name, the backend in use, and the key bindings.
pub fn print_welcome_banner(backend_url: &str) {
    println!();
    println!("  🛡️ {}", style("Coverly 保險諮詢").cyan().bold());
    println!("  {}", style("AI 保費預估與產品推薦").dim());
    println!();
    println!("  {}  {}", style("Backend:").bold(), style(backend_url).dim());
    println!();
    println!(
        "  {}",
        style("Type /help for commands, Ctrl+D to exit").dim()
    );
    println!("  {}", style("---").dim());
    println!();
}
