//! Terminal rendering for transcript messages and consultation results.
//!
//! Replies are plain prose from the orchestrator, so rendering is
//! indentation and color only; the structure lives in the price card and
//! the recommendation cards of a finalized consultation.

use comfy_table::{presets, Cell, Color, ContentArrangement, Table};
use console::style;

use coverly_core::card::ProductCard;
use coverly_core::consultation::ConsultationView;
use coverly_types::message::{Role, TranscriptMessage};
use coverly_types::profile::ProfileSlots;

/// Print a plain advisor reply.
pub fn print_reply(text: &str) {
    println!();
    println!("  {}", style("顧問 >").cyan().bold());
    for line in text.lines() {
        println!("  {line}");
    }
    println!();
}

/// Print the fixed error line shown for a failed turn.
pub fn print_error_line(text: &str) {
    println!();
    println!("  {} {}", style("!").red().bold(), text);
    println!();
}

/// Print a finalized consultation: reply, price card, recommendations.
///
/// The reply is already merged server-side and renders verbatim as one
/// block above the price card, never split or reflowed.
pub fn print_consultation(view: &ConsultationView) {
    println!();
    println!("  {}", style("顧問 >").cyan().bold());
    for line in view.reply.lines() {
        println!("  {line}");
    }

    println!();
    println!("  {}", style("────────────────────────────────").dim());
    println!(
        "  預估年保費約為：{} 元",
        style(&view.price).yellow().bold()
    );
    println!("  {}", style("（此為估計值，實際保費可能不同）").dim());
    println!("  {}", style("────────────────────────────────").dim());

    if !view.cards.is_empty() {
        println!();
        println!("  {}", style("推薦商品").bold());
        for (index, card) in view.cards.iter().enumerate() {
            print_card(index + 1, card);
        }
    }
    println!();
}

fn print_card(index: usize, card: &ProductCard) {
    println!();
    match card.match_percent() {
        Some(percent) => println!(
            "  {} {} {}",
            style(format!("{index}.")).dim(),
            style(&card.title).cyan().bold(),
            style(format!("({percent}% 相符)")).dim()
        ),
        None => println!(
            "  {} {}",
            style(format!("{index}.")).dim(),
            style(&card.title).cyan().bold()
        ),
    }
    println!("     {}", card.description);
    if let Some(url) = &card.url {
        println!("     {}", style(format!("查看產品詳情 > {url}")).dim());
    }
}

/// Print the profile slots the advisor has collected so far.
pub fn print_profile(slots: &ProfileSlots) {
    println!();
    println!(
        "  已收集 {} / 8 項資料",
        style(slots.filled_count()).bold()
    );
    println!();

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("欄位").fg(Color::White),
        Cell::new("值").fg(Color::White),
    ]);

    for (label, value) in slots.rows() {
        let cell = match value {
            Some(value) => Cell::new(value.to_string()).fg(Color::Cyan),
            None => Cell::new("未提供").fg(Color::DarkGrey),
        };
        table.add_row(vec![Cell::new(label), cell]);
    }

    println!("{table}");
    println!();
}

/// Print the conversation so far, one preview line per message.
pub fn print_transcript(messages: &[TranscriptMessage]) {
    println!();
    for message in messages {
        let label = match message.role {
            Role::User => style("你").green().bold(),
            Role::Assistant => style("顧問").cyan().bold(),
        };
        let line = match message.text() {
            Some(text) => preview(text),
            None => match message.consultation() {
                Some(data) => {
                    let view = ConsultationView::from_payload(data);
                    format!(
                        "【諮詢結果】預估年保費 {} 元，{} 項推薦商品",
                        view.price,
                        view.cards.len()
                    )
                }
                None => String::new(),
            },
        };
        println!("  {label} {line}");
    }
    println!();
}

/// Flatten a message to a single preview line, truncated by characters
/// so multibyte text never splits.
fn preview(text: &str) -> String {
    const MAX_CHARS: usize = 60;

    let flat = text.lines().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= MAX_CHARS {
        return flat;
    }
    let truncated: String = flat.chars().take(MAX_CHARS).collect();
    format!("{truncated}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_flattens_newlines() {
        assert_eq!(preview("第一行\n第二行"), "第一行 第二行");
    }

    #[test]
    fn test_preview_truncates_on_char_boundaries() {
        let long: String = "保".repeat(80);
        let out = preview(&long);
        assert_eq!(out.chars().count(), 63);
        assert!(out.ends_with("..."));
    }

    #[test]
    fn test_preview_keeps_short_text_untouched() {
        assert_eq!(preview("你好"), "你好");
    }
}
