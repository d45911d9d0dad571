use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::configuration::Settings;
use crate::notify::Scope;
use crate::page::{Page, PageLayout, UiEvent};
use crate::storage::{FileStorage, Storage};
use crate::surface::PageModel;

/// The wired-up page: file-backed storage standing in for `localStorage`,
/// the headless page model as the rendering surface, and a stdin line
/// reader standing in for the browser's event loop.
pub struct Application {
    page: Page,
    model: Arc<PageModel>,
}

impl Application {
    pub fn build(configuration: Settings) -> Result<Application, anyhow::Error> {
        let storage: Arc<dyn Storage> = Arc::new(FileStorage::new(&configuration.storage.file));
        let model = Arc::new(PageModel::new());
        let page = Page::build(
            &configuration,
            PageLayout::little_bites(),
            storage,
            model.clone(),
        );
        Ok(Self { page, model })
    }

    pub async fn run_until_stopped(mut self) -> Result<(), anyhow::Error> {
        tracing::info!("Reading UI events from stdin. Type 'help' for the event grammar.");
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await? {
            match parse_command(&line) {
                Ok(None) => {}
                Ok(Some(Command::Quit)) => break,
                Ok(Some(Command::Help)) => print_help(),
                Ok(Some(Command::Type { form, field, value })) => {
                    self.model.type_into(&form, &field, &value)
                }
                Ok(Some(Command::Event(event))) => self.page.handle(event).await,
                Err(e) => tracing::warn!(error.message = %e, "Ignoring an event line."),
            }
        }
        Ok(())
    }
}

#[derive(Debug)]
enum Command {
    Event(UiEvent),
    Type {
        form: String,
        field: String,
        value: String,
    },
    Help,
    Quit,
}

fn required(part: Option<&str>, usage: &str) -> Result<String, String> {
    part.map(str::to_string)
        .ok_or_else(|| format!("Usage: {usage}"))
}

/// One line of input, one interaction. Blank lines are skipped.
fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let mut parts = line.split_whitespace();
    let Some(verb) = parts.next() else {
        return Ok(None);
    };
    let command = match verb {
        "load" => Command::Event(UiEvent::PageLoad {
            query: parts.next().unwrap_or_default().to_string(),
        }),
        "type" => {
            let form = required(parts.next(), "type <form> <field> <value>")?;
            let field = required(parts.next(), "type <form> <field> <value>")?;
            let value = parts.collect::<Vec<_>>().join(" ");
            Command::Type { form, field, value }
        }
        "submit" => Command::Event(UiEvent::Submit {
            form: required(parts.next(), "submit <form>")?,
        }),
        "filter" => Command::Event(UiEvent::FilterSelected {
            tag: required(parts.next(), "filter <tag>")?,
        }),
        "faq" => Command::Event(UiEvent::AccordionToggled {
            item: required(parts.next(), "faq <item>")?,
        }),
        "hover" => Command::Event(UiEvent::StarHovered {
            rating: required(parts.next(), "hover <rating> <index>")?,
            index: parse_index(parts.next())?,
        }),
        "unhover" => Command::Event(UiEvent::StarLeft {
            rating: required(parts.next(), "unhover <rating>")?,
        }),
        "rate" => Command::Event(UiEvent::StarSelected {
            rating: required(parts.next(), "rate <rating> <index>")?,
            index: parse_index(parts.next())?,
        }),
        "scroll" => {
            let offset = required(parts.next(), "scroll <offset>")?;
            let offset = offset
                .parse()
                .map_err(|_| format!("'{offset}' is not a scroll offset."))?;
            Command::Event(UiEvent::Scrolled { offset })
        }
        "nav" => Command::Event(UiEvent::NavToggled),
        "navlink" => Command::Event(UiEvent::NavLinkFollowed),
        "more" => Command::Event(UiEvent::LoadMoreClicked {
            button: required(parts.next(), "more <button>")?,
        }),
        "prefs" => {
            let topics = required(parts.next(), "prefs <topic,topic|-> [frequency]")?;
            let topics = if topics == "-" {
                Vec::new()
            } else {
                topics.split(',').map(str::to_string).collect()
            };
            let frequency = parts.next().unwrap_or("weekly").to_string();
            Command::Event(UiEvent::PreferencesSaved { topics, frequency })
        }
        "chat" => Command::Event(UiEvent::LiveChatRequested),
        "social" => Command::Event(UiEvent::SocialLinkFollowed {
            href: parts.next().map(str::to_string),
        }),
        "dismiss" => {
            let scope = required(parts.next(), "dismiss global|<form>")?;
            let scope = if scope == "global" {
                Scope::Global
            } else {
                Scope::Form(scope)
            };
            Command::Event(UiEvent::NotificationDismissed { scope })
        }
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(format!("Unknown event '{other}'. Type 'help'.")),
    };
    Ok(Some(command))
}

fn parse_index(part: Option<&str>) -> Result<usize, String> {
    let raw = required(part, "<rating> <index>")?;
    raw.parse()
        .map_err(|_| format!("'{raw}' is not a star index."))
}

fn print_help() {
    eprintln!(
        "\
events:
  load <query>                 page load with a raw query string, e.g. load ?unsubscribe=a%40b.co
  type <form> <field> <text>   put text into an input
  submit <form>                submit a form (newsletter-form, contact-form, store-locator, ...)
  filter <tag>                 select a category filter button ('all' shows everything)
  faq <item>                   toggle an FAQ accordion item
  hover|rate <rating> <index>  highlight/select a star (0-based); unhover <rating> to leave
  scroll <offset>              report a scroll position in px
  nav | navlink                toggle the mobile menu / follow a nav link
  more <button>                click a load-more button
  prefs <topics|-> [freq]      save newsletter preferences, topics comma-separated
  chat | social [href]         placeholder actions
  dismiss global|<form>        close a notification
  quit"
    );
}
