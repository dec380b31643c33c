use std::str::FromStr;

use serde_json::json;
use voyage_catalog::{BookingError, DisplayRow, InventoryManager, TravelItem, COLUMN_NAMES};

pub const HELP: &str = "\
Commands:
  all              list every item
  available        list items with units left
  bookings         list booked items
  show <ID>        print one item as JSON
  book <ID>        book one unit of an item
  cancel <ID>      cancel the booking of an item
  help             show this message
  quit             exit";

/// One line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    All,
    Available,
    Bookings,
    Show(String),
    Book(String),
    Cancel(String),
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let verb = words.next().ok_or(ParseError::Empty)?.to_ascii_lowercase();
        let arg = words.next().map(str::to_string);

        if let Some(extra) = words.next() {
            return Err(ParseError::UnexpectedArgument(extra.to_string()));
        }

        let with_id = |name: &'static str, make: fn(String) -> Command| {
            arg.clone().map(make).ok_or(ParseError::MissingId(name))
        };
        let without_arg = |command: Command| match &arg {
            Some(extra) => Err(ParseError::UnexpectedArgument(extra.clone())),
            None => Ok(command),
        };

        match verb.as_str() {
            "all" | "list" => without_arg(Command::All),
            "available" => without_arg(Command::Available),
            "bookings" => without_arg(Command::Bookings),
            "show" => with_id("show", Command::Show),
            "book" => with_id("book", Command::Book),
            "cancel" => with_id("cancel", Command::Cancel),
            "help" | "?" => without_arg(Command::Help),
            "quit" | "exit" => without_arg(Command::Quit),
            _ => Err(ParseError::Unknown(verb)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command: {0} (try `help`)")]
    Unknown(String),

    #[error("Missing item id: usage `{0} <ID>`")]
    MissingId(&'static str),

    #[error("Unexpected argument: {0}")]
    UnexpectedArgument(String),
}

/// What the loop should do after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Print(String),
    Quit,
}

pub fn execute(manager: &mut InventoryManager, command: Command) -> anyhow::Result<Outcome> {
    let output = match command {
        Command::All => render(manager.list_all(), "No items in the catalog."),
        Command::Available => render(manager.list_available(), "No items available."),
        Command::Bookings => render(manager.list_bookings(), "No active bookings found."),
        Command::Show(id) => match manager.find_by_id(&id) {
            Some(item) => serde_json::to_string_pretty(&json!({
                "item": item,
                "type": item.item_type().to_string(),
                "final_price": item.calculate_price().to_string(),
                "available": item.is_available(),
            }))?,
            None => format!("No item with id {}.", id),
        },
        Command::Book(id) => match manager.try_book(&id) {
            Ok(()) => format!("Booking successful for: {}", name_of(manager, &id)),
            Err(err) => format!("Booking failed! {}", explain(&err)),
        },
        Command::Cancel(id) => match manager.try_cancel(&id) {
            Ok(()) => format!("Booking cancelled for: {}", name_of(manager, &id)),
            Err(err) => format!("Cancellation failed! {}", explain(&err)),
        },
        Command::Help => HELP.to_string(),
        Command::Quit => return Ok(Outcome::Quit),
    };

    Ok(Outcome::Print(output))
}

fn name_of(manager: &InventoryManager, id: &str) -> String {
    manager
        .find_by_id(id)
        .map(|item| item.name().to_string())
        .unwrap_or_else(|| id.to_string())
}

fn explain(err: &BookingError) -> String {
    match err {
        BookingError::NotFound(id) => format!("No item with id {}.", id),
        BookingError::Unavailable(id) => format!("{} is not available.", id),
        BookingError::NotBooked(id) => format!("Booking not found for {}.", id),
    }
}

/// Tab-separated table with a header line
fn render(items: Vec<&TravelItem>, empty: &str) -> String {
    if items.is_empty() {
        return empty.to_string();
    }

    let rows: Vec<DisplayRow> = items.into_iter().map(TravelItem::describe).collect();
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(COLUMN_NAMES.join("\t"));
    lines.extend(rows.iter().map(|row| row.fields().join("\t")));
    lines.join("\n")
}
