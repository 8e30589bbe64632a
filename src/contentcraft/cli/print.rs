use colored::Colorize;
use contentcraft::api::{CmdMessage, ContentStats, EditMode, MessageLevel};
use contentcraft::draft::Draft;
use contentcraft::error::ContentError;
use contentcraft::index::DisplayRecord;
use contentcraft::media::MediaLibrary;
use contentcraft::model::ContentStatus;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const STATUS_WIDTH: usize = 10;
const CATEGORY_WIDTH: usize = 10;
const DATE_WIDTH: usize = 14;
const LABEL_WIDTH: usize = 12;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_error(err: &ContentError) {
    print_messages(&[CmdMessage::from(err)]);
}

pub(super) fn print_records(records: &[DisplayRecord], filtered: bool) {
    if records.is_empty() {
        if filtered {
            println!("No content matches the current search or filter.");
        } else {
            println!("No content yet. Create your first piece in the editor.");
        }
        return;
    }

    for dr in records {
        let idx_str = format!("{:>3}. ", dr.index);
        let status = dr.record.status();
        let status_str = format!("{:<width$}", status.to_string(), width = STATUS_WIDTH);
        let category = format!(
            "{:<width$}",
            dr.record.fields.category_label(),
            width = CATEGORY_WIDTH
        );
        let date = dr
            .record
            .published_at
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "Not published".to_string());
        let date = format!("{:>width$}", date, width = DATE_WIDTH);

        let fixed_width = idx_str.width() + STATUS_WIDTH + CATEGORY_WIDTH + DATE_WIDTH + 3;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let title = truncate_to_width(dr.record.title(), available);
        let padding = available.saturating_sub(title.width());

        let status_colored = match status {
            ContentStatus::Published => status_str.green(),
            ContentStatus::Scheduled => status_str.cyan(),
            ContentStatus::Draft => status_str.yellow(),
        };

        println!(
            "{}{}{} {} {} {}",
            idx_str.dimmed(),
            title.bold(),
            " ".repeat(padding),
            status_colored,
            category,
            date.dimmed()
        );
    }
}

pub(super) fn print_draft(draft: &Draft, mode: EditMode) {
    let fields = draft.fields();
    let heading = match mode {
        EditMode::Creating => "New content".to_string(),
        EditMode::Editing(id) => format!("Editing {}", id),
    };
    println!("{}", heading.bold());
    println!("--------------------------------");

    print_field("Title", &fields.title);
    let slug = if draft.slug_overridden() {
        format!("{} (manual)", fields.slug)
    } else {
        fields.slug.clone()
    };
    print_field("Slug", &slug);
    print_field("Status", fields.status.as_str());
    print_field("Category", fields.category_label());
    print_field("Tags", &fields.tags.join(", "));
    print_field("SEO title", &fields.seo_title);
    print_field("SEO desc", &fields.seo_description);
    let image = fields
        .featured_image
        .as_ref()
        .map(|i| i.to_string())
        .unwrap_or_default();
    print_field("Image", &image);

    if !fields.body.is_empty() {
        println!();
        println!("{}", fields.body);
    }
}

fn print_field(label: &str, value: &str) {
    let label = format!("{:<width$}", format!("{}:", label), width = LABEL_WIDTH);
    if value.is_empty() {
        println!("{}{}", label.dimmed(), "-".dimmed());
    } else {
        println!("{}{}", label.dimmed(), value);
    }
}

pub(super) fn print_media(library: &MediaLibrary) {
    if library.is_empty() {
        println!("Media library is empty.");
        return;
    }
    for (i, asset) in library.assets().iter().enumerate() {
        println!(
            "{} {} {}",
            format!("{:>3}.", i + 1).dimmed(),
            asset.label.bold(),
            asset.image.to_string().dimmed()
        );
    }
}

pub(super) fn print_stats(stats: &ContentStats) {
    println!("{:<16}{}", "Content items", stats.content_items);
    println!("{:<16}{}", "Media assets", stats.media_assets);
    println!("{:<16}{}", "Published", stats.published);
    for (status, count) in &stats.by_status {
        println!("  {:<14}{}", status.as_str().dimmed(), count);
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
