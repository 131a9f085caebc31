mod paths;
mod terminal;

use std::cell::RefCell;
use std::fs::{self, File};
use std::path::PathBuf;
use std::rc::Rc;

use log::{info, warn};
use pathcrumb::{
    Breadcrumb, BreadcrumbConfig, Callbacks, Container, Event, FieldState, Key, MemorySink,
    Notice, Notification, Page,
};
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::terminal::{Frame, Terminal};

const TITLE: &str = "pathcrumb - type a name then '/' to add it, backspace on an empty field to edit the last one, Esc to quit";
/// Notification lines kept on screen.
const STATUS_LINES: usize = 8;

type Status = Rc<RefCell<Vec<String>>>;

fn main() {
    let log_path = paths::log_file().unwrap_or_else(|| PathBuf::from("pathcrumb-tui.log"));
    let log_file = File::create(&log_path).expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return;
        }
    };

    if let Err(e) = run(config) {
        eprintln!("Error: {}", e);
    }
}

/// Config from the first argument, the platform config file, or built-in.
fn load_config() -> Result<BreadcrumbConfig, Box<dyn std::error::Error>> {
    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| paths::config_file().filter(|path| path.exists()));

    let Some(path) = path else {
        info!("No config file, using built-in demo configuration");
        return Ok(BreadcrumbConfig::new()
            .prefix(["home", "projects"])
            .placeholder("file name"));
    };

    info!("Loading config from {}", path.display());
    let json = fs::read_to_string(&path)?;
    Ok(BreadcrumbConfig::from_json(&json)?)
}

fn callbacks(status: &Status) -> Callbacks {
    let mut callbacks = Callbacks::new();
    for kind in [
        Notification::Init,
        Notification::AfterAdd,
        Notification::AfterRemove,
    ] {
        let status = status.clone();
        callbacks.set(kind, move |notice: &Notice<'_>| {
            let line = format!("{}: {}", notice.kind.name(), notice.path.joined('/'));
            info!("{}", line);
            push_status(&status, line);
        });
    }
    callbacks
}

fn push_status(status: &Status, line: String) {
    let mut status = status.borrow_mut();
    status.push(line);
    let overflow = status.len().saturating_sub(STATUS_LINES);
    status.drain(..overflow);
}

fn run(config: BreadcrumbConfig) -> Result<(), Box<dyn std::error::Error>> {
    let status: Status = Rc::default();
    let container_id = config.container_id.clone();
    let mut page = Page::new().with_container(
        container_id,
        Container::new(MemorySink::new(), MemorySink::new(), FieldState::default()),
    );

    let mut breadcrumb = Breadcrumb::mount(&mut page, config, callbacks(&status))?;
    breadcrumb.init();
    breadcrumb.input_box_mut().focus();

    let mut term = Terminal::new()?;

    loop {
        {
            let status = status.borrow();
            let field = breadcrumb.input_box().field();
            term.draw(&Frame {
                title: TITLE,
                prefix: breadcrumb.prefix_sink().crumbs(),
                tail: breadcrumb.tail_sink().crumbs(),
                mode: breadcrumb.tail_sink().mode(),
                input: field.text(),
                cursor: field.cursor(),
                placeholder: field.placeholder(),
                status: &status,
            })?;
        }

        for raw in term.read_events()? {
            let Some(event) = Event::from_crossterm(&raw) else {
                continue;
            };

            match &event {
                Event::Key {
                    key: Key::Escape, ..
                } => return Ok(()),
                Event::Key {
                    key: Key::Char('c'),
                    modifiers,
                } if modifiers.ctrl => return Ok(()),
                Event::Key {
                    key: Key::Enter, ..
                } => match serde_json::to_string(&breadcrumb.path()) {
                    Ok(json) => push_status(&status, json),
                    Err(e) => warn!("Failed to serialize path: {}", e),
                },
                _ => {}
            }

            breadcrumb.input_box_mut().field_mut().apply(&event);
            breadcrumb.handle_event(&event);
        }
    }
}
