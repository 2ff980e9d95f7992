use super::styles::ShelfStyles;
use colored::Colorize;
use linkshelf::api::{CmdMessage, MessageLevel};
use linkshelf::config::ShelfConfig;
use linkshelf::render::{Card, ShelfView};
use linkshelf::theme::ThemeState;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const NAME_WIDTH: usize = 28;
const HOST_WIDTH: usize = 24;
const CARD_MARKER: &str = "●";

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub fn print_view(view: &ShelfView, styles: &ShelfStyles) {
    if let Some(message) = view.message() {
        println!("{}", styles.dim.apply_to(message));
        return;
    }
    for card in view.cards() {
        println!("{}", format_card(card, styles));
    }
}

fn format_card(card: &Card, styles: &ShelfStyles) -> String {
    let idx = format!("{:>3}. ", card.position);
    let name = pad_to_width(&truncate_to_width(&card.name, NAME_WIDTH), NAME_WIDTH);
    let host = pad_to_width(&truncate_to_width(&card.host, HOST_WIDTH), HOST_WIDTH);
    format!(
        "{}{} {} {} {}",
        styles.index.apply_to(idx),
        styles.card(card.color).apply_to(CARD_MARKER),
        styles.name.apply_to(name),
        styles.dim.apply_to(host),
        styles.url.apply_to(&card.target.href),
    )
}

pub fn print_theme(theme: &ThemeState, styles: &ShelfStyles) {
    let line: Vec<String> = theme
        .options
        .iter()
        .map(|o| {
            if o.pressed {
                format!("[{}]", styles.name.apply_to(o.theme.name()))
            } else {
                format!(" {} ", styles.dim.apply_to(o.theme.name()))
            }
        })
        .collect();
    println!("{}", line.join(" "));
}

pub fn print_config(config: &ShelfConfig) {
    for (key, value) in config.entries() {
        println!("{} = {}", key, value);
    }
}

pub fn print_sources(sources: &[String], styles: &ShelfStyles) {
    for (i, source) in sources.iter().enumerate() {
        println!("{} {}", styles.index.apply_to(format!("{}.", i + 1)), source);
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_strings_are_untouched() {
        assert_eq!(truncate_to_width("GitHub", 10), "GitHub");
    }

    #[test]
    fn long_strings_end_with_ellipsis() {
        let out = truncate_to_width("a very long bookmark name", 10);
        assert_eq!(out.width(), 10);
        assert!(out.ends_with('…'));
    }

    #[test]
    fn wide_characters_count_double() {
        let out = truncate_to_width("日本語のリンク", 6);
        assert!(out.width() <= 6);
    }

    #[test]
    fn padding_fills_to_width() {
        assert_eq!(pad_to_width("ab", 4), "ab  ");
        assert_eq!(pad_to_width("abcdef", 4), "abcdef");
    }
}
