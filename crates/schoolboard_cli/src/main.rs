//! Command-line host for the school board store.
//!
//! # Responsibility
//! - Open a SQLite-backed store and expose each store operation as a
//!   subcommand.
//! - Validate creation input through the form layer before it reaches the
//!   store.

use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use log::info;
use schoolboard_core::{
    init_logging, parse_calendar_day, relative_time_label, AnnouncementDraft, Clock, FeedItem,
    HistoryStatus, MatchRank, RecordId, SchoolStore, SqliteStorage, StorageKeys, StoreConfig,
    SubstitutionDraft, SubstitutionEntry, SubstitutionKind, SystemClock,
};
use std::path::PathBuf;

type Store = SchoolStore<SqliteStorage, SystemClock>;

#[derive(Parser, Debug)]
#[command(author, version, about = "Announcements, substitutions and notifications")]
struct Args {
    /// SQLite file holding the persisted collections.
    #[arg(long, env = "SCHOOLBOARD_DB", default_value = "schoolboard.sqlite3")]
    db: PathBuf,

    /// Absolute directory for rolling log files; logging is off when unset.
    #[arg(long, env = "SCHOOLBOARD_LOG_DIR")]
    log_dir: Option<String>,

    #[arg(long, env = "SCHOOLBOARD_LOG_LEVEL", default_value_t = schoolboard_core::default_log_level().to_string())]
    log_level: String,

    /// Namespace for storage keys, e.g. a class name.
    #[arg(long, env = "SCHOOLBOARD_PREFIX", default_value = "")]
    prefix: String,

    /// Author recorded on new announcements.
    #[arg(long, default_value = schoolboard_core::config::DEFAULT_AUTHOR)]
    author: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Substitutions of one day (default: today).
    Plan {
        #[arg(long, value_parser = parse_day)]
        date: Option<NaiveDate>,
    },
    /// All announcements, newest first.
    Announcements,
    /// Search announcements and substitutions.
    Search { query: String },
    /// Combined feed with derived status.
    History,
    /// Notifications with unread count.
    Notifications,
    /// Create an announcement.
    Announce {
        #[arg(long)]
        title: String,
        #[arg(long)]
        message: String,
        #[arg(long, value_parser = parse_day)]
        date: Option<NaiveDate>,
    },
    /// Create a substitution entry.
    Substitute {
        /// `1-2`, `3-4`, `5-6` or `7-8`.
        #[arg(long)]
        period: String,
        /// `substitution`, `room-change` or `cancelled`.
        #[arg(long = "type")]
        kind: String,
        #[arg(long, default_value = "")]
        teacher: String,
        #[arg(long, default_value = "")]
        room: String,
        #[arg(long, default_value = "")]
        reason: String,
        #[arg(long, value_parser = parse_day)]
        date: Option<NaiveDate>,
    },
    DeleteAnnouncement { id: String },
    DeleteSubstitution { id: String },
    /// Mark one notification as read.
    Read { id: String },
    ReadAll,
    /// Remove every notification.
    Clear,
    /// Replace all data with the demo set.
    Reset,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(log_dir) = args.log_dir.as_deref() {
        init_logging(&args.log_level, log_dir).map_err(|err| anyhow!("{err}"))?;
    }

    let storage = SqliteStorage::open(&args.db)
        .with_context(|| format!("failed to open `{}`", args.db.display()))?;
    let config = StoreConfig {
        keys: StorageKeys::with_prefix(&args.prefix),
        default_author: args.author.clone(),
    };
    let mut store = SchoolStore::open_with(storage, SystemClock, config.keys.clone());
    info!("event=cli_command module=cli status=start");

    run(&mut store, &config, args.command)?;

    if store.is_persistence_degraded() {
        eprintln!("warning: changes could not be saved and are lost on exit");
    }
    Ok(())
}

fn run(store: &mut Store, config: &StoreConfig, command: Command) -> Result<()> {
    let today = store.clock().today();

    match command {
        Command::Plan { date } => {
            let day = date.unwrap_or(today);
            let entries = store.substitutions_by_date(day);
            if entries.is_empty() {
                println!("Keine Vertretungen am {}", day.format("%d.%m.%Y"));
            }
            for entry in entries {
                println!("{}", format_entry(entry));
            }
        }
        Command::Announcements => {
            for announcement in store.announcements() {
                println!(
                    "{}  {}  {}  ({}, {})",
                    announcement.id,
                    announcement.date.format("%d.%m.%Y"),
                    announcement.title,
                    announcement.author,
                    announcement.message
                );
            }
        }
        Command::Search { query } => {
            for hit in store.search(&query) {
                let rank = match hit.rank {
                    MatchRank::Title => "title",
                    MatchRank::Secondary => "other",
                };
                println!("{}  [{rank}]  {}", hit.item.id(), describe(&hit.item));
            }
        }
        Command::History => {
            for entry in store.history() {
                let status = match entry.status {
                    HistoryStatus::Active => "aktiv",
                    HistoryStatus::Completed => "abgeschlossen",
                    HistoryStatus::Cancelled => "entfällt",
                };
                println!(
                    "{}  {}  {status:<13}  {}",
                    entry.item.id(),
                    entry.item.date().format("%d.%m.%Y"),
                    describe(&entry.item)
                );
            }
        }
        Command::Notifications => {
            let now = store.clock().now_ms();
            println!("{} ungelesen", store.unread_notifications());
            for notification in store.notifications() {
                println!(
                    "{} {}  {}: {}  ({})",
                    if notification.read { " " } else { "*" },
                    notification.id,
                    notification.title,
                    notification.message,
                    relative_time_label(notification.created_at, now)
                );
            }
        }
        Command::Announce {
            title,
            message,
            date,
        } => {
            let input = AnnouncementDraft {
                title,
                message,
                date: date.unwrap_or(today),
            }
            .validate(config)
            .map_err(|err| anyhow!(err.user_message()))?;
            println!("{}", store.add_announcement(input));
        }
        Command::Substitute {
            period,
            kind,
            teacher,
            room,
            reason,
            date,
        } => {
            let input = SubstitutionDraft {
                period: Some(period),
                kind: Some(kind),
                teacher,
                room,
                reason,
                date: date.unwrap_or(today),
            }
            .validate()
            .map_err(|err| anyhow!(err.user_message()))?;
            println!("{}", store.add_substitution(input));
        }
        Command::DeleteAnnouncement { id } => store.delete_announcement(&RecordId::new(id)),
        Command::DeleteSubstitution { id } => store.delete_substitution(&RecordId::new(id)),
        Command::Read { id } => store.mark_notification_as_read(&RecordId::new(id)),
        Command::ReadAll => store.mark_all_notifications_as_read(),
        Command::Clear => store.clear_notifications(),
        Command::Reset => store.reset_to_seed(),
    }
    Ok(())
}

fn parse_day(value: &str) -> Result<NaiveDate, String> {
    parse_calendar_day(value).ok_or_else(|| format!("expected YYYY-MM-DD, got `{value}`"))
}

fn describe(item: &FeedItem<'_>) -> String {
    match item {
        FeedItem::Announcement(announcement) => announcement.title.clone(),
        FeedItem::Substitution(entry) => format!("{}: {}", item.title(), entry.message),
    }
}

fn format_entry(entry: &SubstitutionEntry) -> String {
    let detail = match &entry.kind {
        SubstitutionKind::Substitution { teacher } => format!("Vertretung durch {teacher}"),
        SubstitutionKind::RoomChange { room } => format!("Raum {room}"),
        SubstitutionKind::Cancelled => "Entfall".to_string(),
    };
    format!(
        "{}  {:<4} {detail:<28} {}",
        entry.id,
        entry.period.as_str(),
        entry.message
    )
}
