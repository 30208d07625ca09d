//! # Commands
//!
//! One module per view. Every command takes the open [`RentalStore`] and
//! returns the text to print; nothing here writes to stdout directly.
//!
//! ## Available Commands
//!
//! ### Catalog (`catalog.rs`)
//! - `list` - Items with an availability strip (text or `--json`)
//!
//! ### Detail (`detail.rs`)
//! - `show` - Item detail, booked dates, bookings
//! - `book` - Create a booking, print the quote
//! - `unbook` - Remove the booking covering a date
//!
//! ### Admin (`admin.rs`)
//! - `admin add-item` / `admin delete-item`
//! - `admin delete-booking` / `admin bookings`

pub mod admin;
pub mod catalog;
pub mod detail;

use chrono::{Local, NaiveDate};

use crate::cli::{AdminCommand, Command, WindowArgs};
use crate::config::{clamp_days, AppConfig};
use crate::error::AppResult;
use crate::prompt::{AssumeYes, Confirm, LinePrompt};
use rental_db::RentalStore;

/// Runs a parsed command against the store.
pub async fn dispatch(
    store: &mut RentalStore,
    config: &AppConfig,
    command: Command,
) -> AppResult<String> {
    let today = Local::now().date_naive();

    match command {
        Command::List { window, json } => {
            let (from, days) = resolve_window(window, config, today);
            let items = catalog::list_items(store, from, days);
            if json {
                catalog::render_json(&items)
            } else {
                Ok(catalog::render_list(&items, config))
            }
        }
        Command::Show { item_id, window } => {
            let (from, days) = resolve_window(window, config, today);
            detail::show_item(store, config, &item_id, from, days)
        }
        Command::Book(args) => detail::book_item(store, config, args).await,
        Command::Unbook { item_id, date, yes } => {
            let mut confirm = confirmer(yes);
            detail::unbook(store, &item_id, date, confirm.as_mut()).await
        }
        Command::Admin(admin_command) => match admin_command {
            AdminCommand::AddItem { name, price, image } => {
                admin::add_item(store, config, name, price, image).await
            }
            AdminCommand::DeleteItem { item_id, yes } => {
                let mut confirm = confirmer(yes);
                admin::delete_item(store, &item_id, confirm.as_mut()).await
            }
            AdminCommand::DeleteBooking { booking_id, yes } => {
                let mut confirm = confirmer(yes);
                admin::delete_booking(store, booking_id, confirm.as_mut()).await
            }
            AdminCommand::Bookings => Ok(admin::list_bookings(store, config)),
        },
    }
}

/// First day and length of an availability strip.
fn resolve_window(window: WindowArgs, config: &AppConfig, today: NaiveDate) -> (NaiveDate, u32) {
    (
        window.from.unwrap_or(today),
        clamp_days(window.days.unwrap_or(config.calendar_days)),
    )
}

fn confirmer(yes: bool) -> Box<dyn Confirm> {
    if yes {
        Box::new(AssumeYes)
    } else {
        Box::new(LinePrompt::stdin())
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::NaiveDate;
    use rental_db::{Database, DbConfig, RentalStore};

    /// In-memory database opened through the store, so it holds the seed data.
    pub async fn seeded_store() -> (Database, RentalStore) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let store = RentalStore::open(&db).await.unwrap();
        (db, store)
    }

    pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }
}
