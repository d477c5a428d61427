//! Team Directory
//!
//! A single-user team directory admin shell: SQLite-backed persistence, a
//! filterable member table, a multi-draft add-form with background image
//! attachment, and a read-only detail panel.

use std::path::PathBuf;

use tokio::io::AsyncBufReadExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use team_directory::config::Config;
use team_directory::directory::Directory;
use team_directory::errors::AppError;
use team_directory::session::Session;
use team_directory::store::{init_store, Store};
use team_directory::view::{self, Page};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Team Directory");
    tracing::info!("Database path: {:?}", config.db_path);

    // Initialize the key-value store and hydrate the collection
    let pool = init_store(&config.db_path).await?;
    let store = Store::new(pool);

    let mut directory = Directory::new(store);
    directory.hydrate().await;

    let mut session = Session::new(directory);

    println!("{}", view::render_overview());
    print_help();

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim().to_string();
        if line == "quit" || line == "exit" {
            break;
        }

        // Apply image decodes that completed since the last command
        session.apply_pending_images();

        if let Err(e) = dispatch(&mut session, &line).await {
            println!("error: {}", e);
        }
    }

    Ok(())
}

async fn dispatch(session: &mut Session, line: &str) -> Result<(), AppError> {
    let mut parts = line.splitn(2, ' ');
    let command = parts.next().unwrap_or("");
    let rest = parts.next().unwrap_or("").trim();

    match command {
        "" => {}
        "help" => print_help(),
        "overview" => {
            session.navigate(Page::Overview);
            println!("{}", view::render_overview());
        }
        "directory" => {
            session.navigate(Page::Directory);
            print_table(session);
        }
        "search" => {
            session.set_query(rest);
            print_table(session);
        }
        "form" => handle_form(session, rest).await?,
        "delete" => {
            let removed = session.directory.remove(rest).await?;
            println!("Deleted {}", removed.name);
            print_table(session);
        }
        "view" => {
            let member = session
                .directory
                .get(rest)
                .ok_or_else(|| AppError::NotFound(format!("Member {} not found", rest)))?
                .clone();
            session.panel.select(&member);
            println!("{}", view::render_detail(&member));
        }
        "close" => session.panel.deselect(),
        other => println!("Unknown command '{}'; try 'help'", other),
    }

    Ok(())
}

async fn handle_form(session: &mut Session, rest: &str) -> Result<(), AppError> {
    let mut parts = rest.splitn(2, ' ');
    let sub = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    match sub {
        "open" => {
            session.form.open();
            println!("Add-members form opened");
        }
        "add" => {
            let id = session.form.add_draft()?;
            println!("Added draft {}", id);
        }
        "set" => {
            let mut it = args.splitn(3, ' ');
            let id = it.next().unwrap_or("");
            let field = it.next().unwrap_or("").parse()?;
            let value = it.next().unwrap_or("");
            session.form.edit_field(id, field, value)?;
        }
        "image" => {
            let mut it = args.splitn(2, ' ');
            let id = it.next().unwrap_or("").to_string();
            let path = PathBuf::from(it.next().unwrap_or(""));
            session.request_image(&id, path);
            println!("Reading image in the background");
        }
        "clear-image" => session.form.clear_image(args)?,
        "remove" => session.form.remove_draft(args)?,
        "cancel" => {
            session.form.cancel();
            println!("Form cancelled");
        }
        "submit" => {
            let count = session.submit_form().await?;
            println!("{} members added!", count);
            print_table(session);
        }
        "show" => {
            for draft in session.form.drafts() {
                println!(
                    "{}  {}  {}  {}  {}  {}",
                    draft.id, draft.name, draft.email, draft.role, draft.status, draft.teams
                );
            }
        }
        other => println!("Unknown form command '{}'", other),
    }

    Ok(())
}

fn print_table(session: &Session) {
    let rows = view::table_rows(&session.filtered());
    println!("{}", view::render_table(&rows));
}

fn print_help() {
    println!("Commands:");
    println!("  overview | directory      switch pages");
    println!("  search <query>            filter the member table");
    println!("  form open|add|cancel|submit|show");
    println!("  form set <id> <field> <value>");
    println!("  form image <id> <path>    attach a profile image");
    println!("  form clear-image <id> | form remove <id>");
    println!("  delete <id>               remove a committed member");
    println!("  view <id> | close         detail panel");
    println!("  quit");
}
