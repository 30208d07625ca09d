//! # Command-Line Surface
//!
//! ```text
//! rental-desk [--db PATH] <COMMAND>
//!
//!   list    [--from DATE] [--days N] [--json]      catalog with availability
//!   show    <ITEM_ID> [--from DATE] [--days N]     item detail + bookings
//!   book    <ITEM_ID> --name --contact --start --end
//!   unbook  <ITEM_ID> <DATE> [--yes]
//!   admin   add-item --name --price --image
//!           delete-item <ITEM_ID> [--yes]
//!           delete-booking <BOOKING_ID> [--yes]
//!           bookings
//! ```

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use rental_core::validation::parse_date;

#[derive(Debug, Parser)]
#[command(
    name = "rental-desk",
    version,
    about = "Catalog and booking tracker for a garment rental shop"
)]
pub struct Cli {
    /// Database file (overrides RENTAL_DB_PATH)
    #[arg(long, global = true, value_name = "PATH")]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the catalog with an availability strip per item
    List {
        #[command(flatten)]
        window: WindowArgs,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show one item, its bookings and its booked dates
    Show {
        item_id: String,

        #[command(flatten)]
        window: WindowArgs,
    },

    /// Book an item for an inclusive date range
    Book(BookArgs),

    /// Remove the booking covering a date
    Unbook {
        item_id: String,

        #[arg(value_parser = date_arg)]
        date: NaiveDate,

        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },

    /// Catalog and booking administration
    #[command(subcommand)]
    Admin(AdminCommand),
}

#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    /// Add an item to the catalog
    AddItem {
        #[arg(long)]
        name: String,

        /// Price per day in currency units, e.g. 4500 or 1499.50
        #[arg(long, allow_negative_numbers = true)]
        price: f64,

        /// Image URL (http/https) or data:image URI
        #[arg(long)]
        image: String,
    },

    /// Delete an item that has no bookings
    DeleteItem {
        item_id: String,

        #[arg(long, short)]
        yes: bool,
    },

    /// Delete a booking by id
    DeleteBooking {
        booking_id: i64,

        #[arg(long, short)]
        yes: bool,
    },

    /// List every booking with its item and total
    Bookings,
}

/// Which days an availability strip covers.
#[derive(Debug, Clone, Copy, Args)]
pub struct WindowArgs {
    /// First day of the strip (default: today)
    #[arg(long, value_parser = date_arg)]
    pub from: Option<NaiveDate>,

    /// Number of days (default: RENTAL_CALENDAR_DAYS or 14)
    #[arg(long)]
    pub days: Option<u32>,
}

#[derive(Debug, Clone, Args)]
pub struct BookArgs {
    pub item_id: String,

    /// Customer name
    #[arg(long)]
    pub name: String,

    /// Customer contact (phone or email)
    #[arg(long)]
    pub contact: String,

    #[arg(long, value_parser = date_arg)]
    pub start: NaiveDate,

    #[arg(long, value_parser = date_arg)]
    pub end: NaiveDate,
}

fn date_arg(value: &str) -> Result<NaiveDate, String> {
    parse_date("date", value).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_book() {
        let cli = Cli::try_parse_from([
            "rental-desk",
            "--db",
            "/tmp/r.db",
            "book",
            "royal-velvet-choli",
            "--name",
            "Meera",
            "--contact",
            "9000000000",
            "--start",
            "2025-10-01",
            "--end",
            "2025-10-03",
        ])
        .unwrap();

        assert_eq!(cli.db, Some(PathBuf::from("/tmp/r.db")));
        match cli.command {
            Command::Book(args) => {
                assert_eq!(args.item_id, "royal-velvet-choli");
                assert_eq!(args.start, NaiveDate::from_ymd_opt(2025, 10, 1).unwrap());
                assert_eq!(args.end, NaiveDate::from_ymd_opt(2025, 10, 3).unwrap());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_rejects_bad_date() {
        let result = Cli::try_parse_from(["rental-desk", "unbook", "x", "24/09/2025"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_admin_and_global_db_after_subcommand() {
        let cli = Cli::try_parse_from([
            "rental-desk",
            "admin",
            "delete-booking",
            "2",
            "--yes",
            "--db",
            "x.db",
        ])
        .unwrap();

        assert_eq!(cli.db, Some(PathBuf::from("x.db")));
        assert!(matches!(
            cli.command,
            Command::Admin(AdminCommand::DeleteBooking { booking_id: 2, yes: true })
        ));
    }

    #[test]
    fn test_parse_fractional_price() {
        let cli = Cli::try_parse_from([
            "rental-desk",
            "admin",
            "add-item",
            "--name",
            "Mint Chikankari Kurta",
            "--price",
            "1499.5",
            "--image",
            "https://example.com/kurta.jpg",
        ])
        .unwrap();

        match cli.command {
            Command::Admin(AdminCommand::AddItem { price, .. }) => assert_eq!(price, 1499.5),
            other => panic!("unexpected command: {:?}", other),
        }

        let result = Cli::try_parse_from([
            "rental-desk", "admin", "add-item", "--name", "x", "--price", "cheap", "--image", "y",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_list_window_defaults() {
        let cli = Cli::try_parse_from(["rental-desk", "list"]).unwrap();
        match cli.command {
            Command::List { window, json } => {
                assert!(window.from.is_none());
                assert!(window.days.is_none());
                assert!(!json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
