use chrono::{DateTime, Utc};
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use doable::api::{CmdMessage, MessageLevel, TaskUpdate, TaskView, TodoApi};
use doable::config::TodoConfig;
use doable::editor::{edit_content, EditorContent};
use doable::error::{Result, TodoError};
use doable::model::TodoDraft;
use doable::status::{truncate, ColorToken, SymbolToken};
use doable::store::fs::FileStore;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: TodoApi<FileStore>,
    config: TodoConfig,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::Add {
            title,
            description,
            cron,
            no_editor,
        }) => handle_add(&mut ctx, title, description, cron, no_editor),
        Some(Commands::List) => handle_list(&ctx),
        Some(Commands::Show { index, edit: true }) | Some(Commands::Edit { index }) => {
            handle_edit(&mut ctx, index)
        }
        Some(Commands::Show { index, .. }) => handle_show(&ctx, index),
        Some(Commands::Done { index }) => handle_done(&mut ctx, index),
        Some(Commands::Undone { index }) => handle_undone(&mut ctx, index),
        Some(Commands::Note { index, note }) => handle_note(&mut ctx, index, note),
        Some(Commands::Remove { index }) => handle_remove(&mut ctx, index),
        None => handle_list(&ctx),
    }
}

fn init_context() -> Result<AppContext> {
    let data_dir = match std::env::var_os("DOABLE_HOME") {
        Some(dir) => PathBuf::from(dir),
        None => {
            let proj_dirs = ProjectDirs::from("com", "doable", "doable")
                .ok_or_else(|| TodoError::Store("Could not determine data directory".into()))?;
            proj_dirs.data_dir().to_path_buf()
        }
    };

    let config = TodoConfig::load(&data_dir).unwrap_or_default();
    let store = FileStore::new(data_dir.join(&config.database));

    Ok(AppContext {
        api: TodoApi::new(store),
        config,
    })
}

fn handle_add(
    ctx: &mut AppContext,
    title: Option<String>,
    description: Option<String>,
    cron: Option<String>,
    no_editor: bool,
) -> Result<()> {
    let (final_title, final_description) = if no_editor {
        (title.unwrap_or_default(), description.unwrap_or_default())
    } else {
        let initial = EditorContent::new(title.unwrap_or_default(), description.unwrap_or_default());
        let edited = edit_content(&initial)?;
        (edited.title, edited.description)
    };

    let mut draft = TodoDraft::new(final_title).with_description(final_description);
    draft.cron_time = cron;

    let result = ctx.api.add_task(draft)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_tasks()?;
    print_task_list(&result.listed, &ctx.config);
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &AppContext, index: u32) -> Result<()> {
    let result = ctx.api.show_task(index)?;
    for view in &result.listed {
        print_task_detail(view);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, index: u32) -> Result<()> {
    let current = ctx.api.show_task(index)?;
    let Some(view) = current.listed.first() else {
        print_messages(&current.messages);
        return Ok(());
    };

    let initial = EditorContent::new(view.item.title.clone(), view.item.description.clone());
    let edited = edit_content(&initial)?;

    let result = ctx
        .api
        .edit_task(TaskUpdate::new(index, edited.title, edited.description))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_done(ctx: &mut AppContext, index: u32) -> Result<()> {
    let result = ctx.api.resolve_task(index)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_undone(ctx: &mut AppContext, index: u32) -> Result<()> {
    let result = ctx.api.reopen_task(index)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_note(ctx: &mut AppContext, index: u32, note: String) -> Result<()> {
    let result = ctx.api.add_note(index, note)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_remove(ctx: &mut AppContext, index: u32) -> Result<()> {
    let result = ctx.api.remove_task(index)?;
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const TIME_WIDTH: usize = 14;
const SCRIPT_RESOLVED_TAG: &str = "(script resolved)";

fn print_task_list(views: &[TaskView], config: &TodoConfig) {
    if views.is_empty() {
        println!("Nothing needs to do.");
        return;
    }

    println!("↓");
    for view in views {
        let left = format!(
            "{} {} {}",
            symbol_glyph(view.symbol),
            view.item.index,
            truncate(&view.item.title, config.title_width)
        );
        let padding = (config.title_width + 8).saturating_sub(left.width());
        let age = format_time_ago(view.item.updated_at);

        if view.script_resolved {
            println!(
                "{} {}{}{}",
                paint(&left, view.color),
                SCRIPT_RESOLVED_TAG.yellow(),
                " ".repeat(padding.saturating_sub(SCRIPT_RESOLVED_TAG.len() + 1)),
                age.dimmed()
            );
        } else {
            println!(
                "{}{}{}",
                paint(&left, view.color),
                " ".repeat(padding),
                age.dimmed()
            );
        }

        if !view.item.description.is_empty() {
            // Keep the list one line per field: fold embedded newlines away
            let flat: String = view
                .item
                .description
                .chars()
                .map(|c| if c == '\n' { ' ' } else { c })
                .collect();
            println!(
                "    - {}",
                truncate(&flat, config.description_width).dimmed()
            );
        }
    }
    println!();
}

fn print_task_detail(view: &TaskView) {
    let mut header = format!("TASK [{}]", view.item.index);
    if !view.deadline.is_empty() {
        header.push_str(&format!(" (limit: {})", view.deadline));
    }
    if view.script_resolved {
        header.push_str(&format!(" {}", SCRIPT_RESOLVED_TAG));
    }
    header.push(':');
    println!("{}", header.yellow());

    let title_line = format!("{} {}", symbol_glyph(view.symbol), view.item.title);
    println!("{}", paint(&title_line, view.color).bold());

    for line in view.item.description.lines() {
        println!("  {}", line);
    }

    if !view.item.notes.is_empty() {
        println!("{}", "NOTES:".yellow());
        for note in &view.item.notes {
            println!("  {}", note);
        }
    }
    println!();
}

fn paint(text: &str, color: ColorToken) -> ColoredString {
    match color {
        ColorToken::Neutral => text.normal(),
        ColorToken::Warning => text.red(),
        ColorToken::Done => text.green(),
    }
}

fn symbol_glyph(symbol: SymbolToken) -> char {
    match symbol {
        SymbolToken::Open => '⚬',
        SymbolToken::Closed => '●',
    }
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
