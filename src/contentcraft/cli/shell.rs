//! The interactive session loop.
//!
//! Each input line is split on whitespace and parsed by clap as a
//! [`ShellLine`]. Free-text arguments (titles, bodies, tags) are then taken
//! back from the raw line, so spacing inside them survives as typed.
//! Errors from the workspace are shown as notifications and the session
//! carries on; only a failure to read stdin ends it early.

use super::args::{ImageAction, ShellCommand, ShellLine, TagAction};
use super::print::{
    print_draft, print_error, print_media, print_messages, print_records, print_stats,
};
use clap::{CommandFactory, Parser};
use colored::Colorize;
use contentcraft::api::{CmdResult, ContentWorkspace};
use contentcraft::error::Result;
use contentcraft::media::MediaFile;
use contentcraft::model::{Category, Panel};
use contentcraft::store::ContentStore;
use std::io::{self, BufRead, Write};
use tracing::debug;

enum Flow {
    Continue,
    Quit,
}

/// Runs the session over `input`. When `interactive` is set a banner and a
/// prompt are printed before each line.
pub fn run<S: ContentStore, R: BufRead>(
    ws: &mut ContentWorkspace<S>,
    input: R,
    interactive: bool,
) -> Result<()> {
    if interactive {
        println!(
            "{}",
            "ContentCraft workspace. Type `help` for commands, `quit` to leave.".dimmed()
        );
    }

    let mut lines = input.lines();
    loop {
        if interactive {
            print!("{} ", format!("[{}]>", ws.panel()).cyan());
            io::stdout().flush()?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let parsed = match ShellLine::try_parse_from(trimmed.split_whitespace()) {
            Ok(parsed) => parsed,
            Err(e) => {
                println!("{}", e.render().to_string().trim_end().red());
                continue;
            }
        };

        debug!(command = ?parsed.command, "shell command");
        if let Flow::Quit = dispatch(ws, parsed.command, trimmed) {
            break;
        }
    }

    Ok(())
}

fn dispatch<S: ContentStore>(
    ws: &mut ContentWorkspace<S>,
    command: ShellCommand,
    line: &str,
) -> Flow {
    match command {
        ShellCommand::Title { words } => ws.draft_mut().set_title(raw_text(line, &words)),
        ShellCommand::Slug { words } => ws.draft_mut().set_slug(raw_text(line, &words)),
        ShellCommand::Body { words } => ws.draft_mut().set_body(raw_text(line, &words)),
        ShellCommand::Status { status } => ws.draft_mut().set_status(status),
        ShellCommand::Category { category } => handle_category(ws, &category),
        ShellCommand::SeoTitle { words } => ws.draft_mut().set_seo_title(raw_text(line, &words)),
        ShellCommand::SeoDesc { words } => {
            ws.draft_mut().set_seo_description(raw_text(line, &words))
        }
        ShellCommand::Tag { action } => handle_tag(ws, action, line),
        ShellCommand::Image { action } => handle_image(ws, action),
        ShellCommand::Save => {
            report(ws.save());
        }
        ShellCommand::New => print_messages(&ws.cancel_edit().messages),
        ShellCommand::Show => print_draft(ws.draft(), ws.mode()),
        ShellCommand::List {
            search,
            status,
            clear,
        } => {
            if clear {
                ws.clear_filter();
            }
            if let Some(words) = search {
                ws.set_query(words.join(" "));
            }
            if let Some(status) = status {
                ws.set_status_filter(status);
            }
            show_panel(ws, Panel::List);
        }
        ShellCommand::Edit { selector } => {
            if report(ws.load_for_edit(&selector)) {
                print_draft(ws.draft(), ws.mode());
            }
        }
        ShellCommand::Delete { selector } => {
            report(ws.delete(&selector));
        }
        ShellCommand::View { panel } => show_panel(ws, panel),
        ShellCommand::Media => show_panel(ws, Panel::Media),
        ShellCommand::Stats => match ws.stats() {
            Ok(result) => {
                if let Some(stats) = &result.stats {
                    print_stats(stats);
                }
            }
            Err(e) => print_error(&e),
        },
        ShellCommand::Help => {
            let help = ShellLine::command().render_help();
            println!("{}", help);
        }
        ShellCommand::Quit => return Flow::Quit,
    }
    Flow::Continue
}

/// The part of `line` spanned by `words`, its trailing arguments, with the
/// original spacing between them.
///
/// Clap only sees whitespace-split tokens; since the free-text arguments are
/// always the tail of the line, they are matched back against it from the end.
fn raw_text<'a>(line: &'a str, words: &[String]) -> &'a str {
    let line = line.trim_end();
    let mut start = line.len();
    for word in words.iter().rev() {
        match line[..start].trim_end().strip_suffix(word.as_str()) {
            Some(before) => start = before.len(),
            None => break,
        }
    }
    &line[start..]
}

/// Prints the notifications of a workspace call, or its error. Returns true on success.
fn report(result: Result<CmdResult>) -> bool {
    match result {
        Ok(result) => {
            print_messages(&result.messages);
            true
        }
        Err(e) => {
            print_error(&e);
            false
        }
    }
}

fn show_panel<S: ContentStore>(ws: &mut ContentWorkspace<S>, panel: Panel) {
    ws.set_panel(panel);
    match panel {
        Panel::Editor => print_draft(ws.draft(), ws.mode()),
        Panel::List => match ws.list() {
            Ok(result) => print_records(&result.listed_records, ws.filter().is_active()),
            Err(e) => print_error(&e),
        },
        Panel::Media => print_media(ws.media()),
    }
}

fn handle_category<S: ContentStore>(ws: &mut ContentWorkspace<S>, raw: &str) {
    if raw.eq_ignore_ascii_case("none") {
        ws.draft_mut().set_category(None);
        return;
    }
    match raw.parse::<Category>() {
        Ok(category) => ws.draft_mut().set_category(Some(category)),
        Err(e) => println!("{}", e.red()),
    }
}

fn handle_tag<S: ContentStore>(ws: &mut ContentWorkspace<S>, action: TagAction, line: &str) {
    let result = match action {
        TagAction::Add { words } => {
            ws.draft_mut().set_tag_input(raw_text(line, &words));
            ws.commit_tag_input()
        }
        TagAction::Rm { words } => ws.remove_tag(raw_text(line, &words)),
    };
    print_messages(&result.messages);
}

fn handle_image<S: ContentStore>(ws: &mut ContentWorkspace<S>, action: ImageAction) {
    match action {
        ImageAction::Upload { path, mime } => {
            let file = match mime {
                Some(mime) => {
                    let mut file = MediaFile::from_path(&path);
                    file.mime_type = mime;
                    file
                }
                None => MediaFile::from_path(&path),
            };
            report(ws.upload_image(&file));
        }
        ImageAction::Use { position } => {
            report(ws.use_media(position));
        }
        ImageAction::Clear => print_messages(&ws.clear_featured_image().messages),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contentcraft::config::WorkspaceConfig;
    use std::io::Cursor;

    fn words(line: &str, skip: usize) -> Vec<String> {
        line.split_whitespace().skip(skip).map(String::from).collect()
    }

    #[test]
    fn raw_text_keeps_inner_spacing() {
        let line = "title Hello    World";
        assert_eq!(raw_text(line, &words(line, 1)), "Hello    World");

        let line = "body line\t one";
        assert_eq!(raw_text(line, &words(line, 1)), "line\t one");
    }

    #[test]
    fn raw_text_for_nested_commands() {
        let line = "tag add  release   notes";
        assert_eq!(raw_text(line, &words(line, 2)), "release   notes");
    }

    #[test]
    fn raw_text_without_words_is_empty() {
        assert_eq!(raw_text("title", &[]), "");
        assert_eq!(raw_text("slug   ", &[]), "");
    }

    #[test]
    fn raw_text_handles_repeated_tokens() {
        let line = "title title  title";
        assert_eq!(raw_text(line, &words(line, 1)), "title  title");
    }

    #[test]
    fn session_reads_the_given_input() {
        let config = WorkspaceConfig {
            seed_samples: false,
            ..Default::default()
        };
        let mut ws = ContentWorkspace::in_memory(config);
        let input = Cursor::new("# comment\n\ntitle A  B\ntag add x\nsave\nquit\ntitle ignored\n");

        run(&mut ws, input, false).unwrap();

        let records = ws.records().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title(), "A  B");
        assert_eq!(records[0].fields.tags, vec!["x"]);
        assert_eq!(ws.draft().fields().title, "");
    }
}
