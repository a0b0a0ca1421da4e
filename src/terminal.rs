use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use stocklist::{
    item::ProjectedRow,
    sync::{Confirm, Notice, NoticeLevel, controller::Presenter},
};

/// How `render` prints the rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listing {
    Hidden,
    Table,
    Json,
}

/// Presenter backed by command-line arguments, stdin prompts, and stdout.
pub struct TerminalPresenter {
    pub name: String,
    pub quantity: String,
    pub selected: Option<String>,
    pub save_path: Option<PathBuf>,
    pub assume_yes: bool,
    pub listing: Listing,
}

impl TerminalPresenter {
    pub fn new(assume_yes: bool) -> Self {
        Self {
            name: String::new(),
            quantity: String::new(),
            selected: None,
            save_path: None,
            assume_yes,
            listing: Listing::Hidden,
        }
    }
}

impl Confirm for TerminalPresenter {
    fn confirm(&mut self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }

        print!("{prompt} [y/N] ");
        if io::stdout().flush().is_err() {
            return false;
        }

        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
    }
}

impl Presenter for TerminalPresenter {
    fn name_input(&mut self) -> String {
        self.name.clone()
    }

    fn quantity_input(&mut self) -> String {
        self.quantity.clone()
    }

    fn clear_inputs(&mut self) {
        self.name.clear();
        self.quantity.clear();
    }

    fn selected_name(&mut self) -> Option<String> {
        self.selected.clone()
    }

    fn notify(&mut self, notice: Notice) {
        match notice.level {
            NoticeLevel::Info => println!("{}: {}", notice.title, notice.message),
            NoticeLevel::Error => eprintln!("{}: {}", notice.title, notice.message),
        }
    }

    fn save_path(&mut self) -> Option<PathBuf> {
        self.save_path.take()
    }

    fn render(&mut self, rows: &[ProjectedRow]) {
        match self.listing {
            Listing::Hidden => {}
            Listing::Json => match serde_json::to_string_pretty(rows) {
                Ok(json) => println!("{json}"),
                Err(err) => eprintln!("Error: {err}"),
            },
            Listing::Table => print_table(rows),
        }
    }
}

fn print_table(rows: &[ProjectedRow]) {
    let width = rows
        .iter()
        .map(|r| r.name.chars().count())
        .chain(std::iter::once("Item Name".len()))
        .max()
        .unwrap_or(0);

    println!("{:<width$}  {:>8}", "Item Name", "Quantity");
    for row in rows {
        println!("{:<width$}  {:>8}", row.name, row.quantity);
    }
}
