use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "jh", about = concat!("just habits v", env!("CARGO_PKG_VERSION"), " - one small streak at a time"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Use a different data directory
    #[arg(short = 'C', long = "data-dir", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Log level for this run (overrides config.toml)
    #[arg(long, global = true)]
    pub log_level: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show habits scheduled for today
    Today,
    /// List all habits with their index
    List,
    /// Add a habit to the end of the list
    Add(AddArgs),
    /// Change a habit (it starts unchecked afterwards)
    Edit(EditArgs),
    /// Check off a habit for today
    Check(IndexArg),
    /// Clear a habit's check mark
    Uncheck(IndexArg),
    /// Move a habit up or down in the list
    Mv(MvArgs),
    /// Delete a habit
    Rm(RmArgs),
    /// Show the streak and growth stage
    Streak,
    /// View or clear the recovery log
    Recovery(RecoveryCmd),
}

// ---------------------------------------------------------------------------
// Write command args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct AddArgs {
    /// Habit name (at most 22 characters; longer names are cut)
    pub name: String,
    /// Short note shown under the name (at most 35 characters)
    #[arg(long, default_value = "")]
    pub note: String,
    /// Scheduled days, e.g. Mon,Wed,Fri or "all" (default: all)
    #[arg(long, default_value = "all")]
    pub days: String,
    /// Draw the habit in the highlight color
    #[arg(long)]
    pub highlight: bool,
}

#[derive(Args)]
pub struct EditArgs {
    /// Habit index (1-based, as shown by `jh list`)
    pub index: usize,
    /// New name
    #[arg(long)]
    pub name: Option<String>,
    /// New note
    #[arg(long)]
    pub note: Option<String>,
    /// New scheduled days, e.g. Mon,Wed,Fri or "all"
    #[arg(long)]
    pub days: Option<String>,
    /// Turn the highlight on
    #[arg(long, conflicts_with = "no_highlight")]
    pub highlight: bool,
    /// Turn the highlight off
    #[arg(long)]
    pub no_highlight: bool,
}

#[derive(Args)]
pub struct IndexArg {
    /// Habit index (1-based, as shown by `jh list`)
    pub index: usize,
}

#[derive(Args)]
#[command(group(clap::ArgGroup::new("direction").required(true).args(["up", "down", "by"])))]
pub struct MvArgs {
    /// Habit index (1-based, as shown by `jh list`)
    pub index: usize,
    /// Move one place up
    #[arg(long)]
    pub up: bool,
    /// Move one place down
    #[arg(long)]
    pub down: bool,
    /// Swap with the habit N places away (negative is up)
    #[arg(long, allow_hyphen_values = true)]
    pub by: Option<isize>,
}

#[derive(Args)]
pub struct RmArgs {
    /// Habit index (1-based, as shown by `jh list`)
    pub index: usize,
    /// Confirm the deletion
    #[arg(long)]
    pub yes: bool,
}

// ---------------------------------------------------------------------------
// Recovery log
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct RecoveryCmd {
    #[command(subcommand)]
    pub action: Option<RecoveryAction>,
    /// Maximum number of entries to show (default: 10)
    #[arg(long)]
    pub limit: Option<usize>,
}

#[derive(Subcommand)]
pub enum RecoveryAction {
    /// Remove all entries
    Clear,
    /// Print the absolute path to the recovery log
    Path,
}

impl MvArgs {
    /// Signed distance to move
    pub fn delta(&self) -> isize {
        match (self.up, self.down, self.by) {
            (true, _, _) => -1,
            (_, true, _) => 1,
            (_, _, Some(n)) => n,
            _ => 0,
        }
    }
}
