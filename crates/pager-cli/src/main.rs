use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use pager_layout::label::{page_counter, page_label};
use pager_layout::sort::{decode, encode};
use pager_layout::*;
use pager_runtime::{ReaderCommand, ReaderHandle, ReaderUpdate};
use std::path::PathBuf;

mod logger;

#[derive(Parser)]
#[command(name = "pgr", about = "Double-page reader layout tools", version)]
struct Cli {
    /// Print debug logging to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert between category sort modes and their stored codes
    Sort {
        #[command(subcommand)]
        action: SortAction,
    },

    /// Lay out a chapter and print its slots
    Layout {
        #[command(flatten)]
        chapter: ChapterArgs,

        #[command(flatten)]
        reader: ReaderArgs,

        /// Page to open the chapter at (0-based)
        #[arg(long, default_value = "0")]
        current: usize,
    },

    /// Map a reading position from one slot layout to another
    Remap {
        #[command(flatten)]
        chapter: ChapterArgs,

        /// Layout the slot index belongs to
        #[arg(long, value_enum)]
        from: SlotLayoutArg,

        /// Layout to map into
        #[arg(long, value_enum)]
        to: SlotLayoutArg,

        /// Slot index in the source layout
        #[arg(long)]
        slot: usize,

        /// Page of a pair the reader is looking at
        #[arg(long, default_value = "leading", value_enum)]
        focus: FocusArg,
    },

    /// Drive a reader worker through a sequence of events
    Simulate {
        #[command(flatten)]
        chapter: ChapterArgs,

        #[command(flatten)]
        reader: ReaderArgs,

        /// Page to open the chapter at (0-based)
        #[arg(long, default_value = "0")]
        current: usize,

        /// Events: landscape, portrait, toggle-double, toggle-shift, select=N, save
        #[arg(short, long, num_args = 1.., value_parser = parse_event)]
        events: Vec<ReaderCommand>,
    },
}

#[derive(Subcommand)]
enum SortAction {
    /// Print the stored code for a sort mode
    Encode {
        #[arg(long, value_enum, required_unless_present = "drag_and_drop")]
        criterion: Option<CriterionArg>,

        #[arg(long)]
        descending: bool,

        /// Manual ordering
        #[arg(long, conflicts_with = "criterion")]
        drag_and_drop: bool,
    },

    /// Print the sort mode a stored code stands for
    Decode {
        /// Stored code, or "none" for a category without one
        code: String,
    },
}

#[derive(Args)]
struct ChapterArgs {
    /// Number of pages in the chapter
    #[arg(short, long)]
    pages: usize,

    /// Indices of full (wide) pages
    #[arg(long, value_delimiter = ',')]
    full: Vec<usize>,

    /// Indices of pages that never pair
    #[arg(long, value_delimiter = ',')]
    isolated: Vec<usize>,
}

impl ChapterArgs {
    fn build(&self) -> Result<ChapterPages> {
        for &index in self.full.iter().chain(&self.isolated) {
            if index >= self.pages {
                bail!("Page {} is outside a {} page chapter", index, self.pages);
            }
        }
        Ok(ChapterPages::with_flags(
            1,
            self.pages,
            &self.full,
            &self.isolated,
        ))
    }
}

#[derive(Args)]
struct ReaderArgs {
    /// Device orientation
    #[arg(long, default_value = "portrait", value_enum)]
    orientation: OrientationArg,

    /// Page layout preference
    #[arg(long, default_value = "automatic", value_enum)]
    layout: PageLayoutArg,

    /// Split wide pages in single-page automatic mode
    #[arg(long)]
    automatic_splits: bool,

    /// Swap the pages of each pair
    #[arg(long)]
    invert: bool,

    /// Read right to left
    #[arg(long)]
    rtl: bool,

    /// Load preferences from a JSON file instead of the flags above
    #[arg(long)]
    prefs: Option<PathBuf>,
}

impl ReaderArgs {
    async fn preferences(&self) -> Result<ReaderPreferences> {
        match &self.prefs {
            Some(path) => ReaderPreferences::load(path)
                .await
                .with_context(|| format!("Failed to load {}", path.display())),
            None => Ok(ReaderPreferences {
                page_layout: self.layout.into(),
                automatic_splits: self.automatic_splits,
                invert_double_pages: self.invert,
                reading_direction: if self.rtl {
                    ReadingDirection::RightToLeft
                } else {
                    ReadingDirection::LeftToRight
                },
            }),
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum OrientationArg {
    Portrait,
    Landscape,
}

#[derive(Clone, Copy, ValueEnum)]
enum PageLayoutArg {
    Single,
    Double,
    Automatic,
    Split,
}

#[derive(Clone, Copy, ValueEnum)]
enum SlotLayoutArg {
    Single,
    Double,
    Shifted,
    Split,
}

#[derive(Clone, Copy, ValueEnum)]
enum FocusArg {
    Leading,
    Trailing,
}

#[derive(Clone, Copy, ValueEnum)]
enum CriterionArg {
    Alpha,
    LatestChapter,
    Unread,
    LastRead,
    Total,
    DateAdded,
    LastFetched,
}

impl From<OrientationArg> for Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Portrait => Self::Portrait,
            OrientationArg::Landscape => Self::Landscape,
        }
    }
}

impl From<PageLayoutArg> for PageLayout {
    fn from(arg: PageLayoutArg) -> Self {
        match arg {
            PageLayoutArg::Single => Self::Single,
            PageLayoutArg::Double => Self::Double,
            PageLayoutArg::Automatic => Self::Automatic,
            PageLayoutArg::Split => Self::Split,
        }
    }
}

impl From<SlotLayoutArg> for SlotLayout {
    fn from(arg: SlotLayoutArg) -> Self {
        match arg {
            SlotLayoutArg::Single => Self::Single,
            SlotLayoutArg::Double => Self::Double { shift: false },
            SlotLayoutArg::Shifted => Self::Double { shift: true },
            SlotLayoutArg::Split => Self::Split,
        }
    }
}

impl From<FocusArg> for PairFocus {
    fn from(arg: FocusArg) -> Self {
        match arg {
            FocusArg::Leading => Self::Leading,
            FocusArg::Trailing => Self::Trailing,
        }
    }
}

impl From<CriterionArg> for SortCriterion {
    fn from(arg: CriterionArg) -> Self {
        match arg {
            CriterionArg::Alpha => Self::Alpha,
            CriterionArg::LatestChapter => Self::LatestChapter,
            CriterionArg::Unread => Self::Unread,
            CriterionArg::LastRead => Self::LastRead,
            CriterionArg::Total => Self::Total,
            CriterionArg::DateAdded => Self::DateAdded,
            CriterionArg::LastFetched => Self::LastFetched,
        }
    }
}

fn parse_event(value: &str) -> Result<ReaderCommand, String> {
    if let Some(slot) = value.strip_prefix("select=") {
        let slot = slot
            .parse()
            .map_err(|e| format!("Invalid slot '{}': {}", slot, e))?;
        return Ok(ReaderCommand::SelectSlot {
            slot,
            focus: PairFocus::Leading,
        });
    }
    match value {
        "landscape" => Ok(ReaderCommand::OrientationChanged(Orientation::Landscape)),
        "portrait" => Ok(ReaderCommand::OrientationChanged(Orientation::Portrait)),
        "toggle-double" => Ok(ReaderCommand::ToggleDoublePages),
        "toggle-shift" => Ok(ReaderCommand::ToggleShift),
        "save" => Ok(ReaderCommand::SaveState),
        other => Err(format!("Unknown event '{}'", other)),
    }
}

fn describe_mode(mode: SortMode) -> String {
    match mode {
        SortMode::Criterion {
            criterion,
            direction,
        } => {
            let direction = if direction.is_ascending() {
                "ascending"
            } else {
                "descending"
            };
            format!("{} {}", criterion.name(), direction)
        }
        SortMode::DragAndDrop => "drag-and-drop".to_string(),
        SortMode::Unset => "unset (ascending)".to_string(),
    }
}

fn print_slots(slots: &[Slot], current_slot: usize, reversed: bool) {
    for (i, slot) in slots.iter().enumerate() {
        let marker = if i == current_slot { ">" } else { " " };
        println!("  {} {:>3}: {}", marker, i, page_label(slot, reversed));
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::CliLogger::new(cli.verbose).init()?;

    match cli.command {
        Commands::Sort { action } => match action {
            SortAction::Encode {
                criterion,
                descending,
                ..
            } => {
                // clap guarantees a criterion unless --drag-and-drop is set
                let mode = match criterion {
                    Some(criterion) => SortMode::new(
                        criterion.into(),
                        SortDirection::from_ascending(!descending),
                    ),
                    None => SortMode::DragAndDrop,
                };
                match encode(mode) {
                    Some(code) => println!("{}", code),
                    None => bail!("{} has no stored code", describe_mode(mode)),
                }
            }
            SortAction::Decode { code } => {
                let stored = if code == "none" {
                    None
                } else {
                    let mut chars = code.chars();
                    match (chars.next(), chars.next()) {
                        (Some(c), None) => Some(c),
                        _ => bail!("Sort code must be a single character, got '{}'", code),
                    }
                };
                println!("{}", describe_mode(decode(stored)));
            }
        },

        Commands::Layout {
            chapter,
            reader,
            current,
        } => {
            let chapter = chapter.build()?;
            let preferences = reader.preferences().await?;
            let total = chapter.len();

            let session = ViewerSession::new(preferences, reader.orientation.into());
            let session = session.reduce(ViewerEvent::ChapterLoaded {
                chapter: chapter.clone(),
                requested_page: current,
                restore: None,
            });

            let directive = session.directive();
            println!("Layout:");
            println!("  State: {:?}", session.state());
            println!("  Double pages: {}", directive.double_pages);
            println!("  Split pages: {}", directive.split_pages);
            println!("  Automatic: {}", directive.auto_double_pages);
            println!("  Shift: {}", session.shift().shift_double_page);

            println!("Slots:");
            print_slots(
                session.slots(),
                session.current_slot(),
                preferences.reversed_pairs(),
            );
            if let Some(label) = session.current_label() {
                println!("Page: {}", page_counter(&label, total, true));
            }

            let stats = calculate_statistics(&chapter, session.slots())?;
            println!("Statistics:");
            println!("  Pages: {}", stats.pages);
            println!("  Slots: {}", stats.slots);
            println!("  Pairs: {}", stats.paired_slots);
            println!("  Lone pages: {}", stats.lone_pages);
            println!("  Unpaired pages: {}", stats.unpaired_pages);
            println!("  Split halves: {}", stats.half_slots);
        }

        Commands::Remap {
            chapter,
            from,
            to,
            slot,
            focus,
        } => {
            let chapter = chapter.build()?;
            let from = SlotLayout::from(from);
            let to = SlotLayout::from(to);
            let focus = PairFocus::from(focus);

            let page = page_at_slot(slot, from, chapter.pages(), focus)
                .context("Chapter has no pages")?;
            let new_slot = remap(slot, from, to, chapter.pages(), focus);
            let slots = build_slots(chapter.pages(), to);

            println!("Page {} -> slot {}", page + 1, new_slot);
            if let Some(target) = slots.get(new_slot) {
                println!("Shows: {}", page_label(target, false));
            }
        }

        Commands::Simulate {
            chapter,
            reader,
            current,
            events,
        } => {
            let chapter = chapter.build()?;
            let preferences = reader.preferences().await?;
            let mut handle = ReaderHandle::spawn(preferences, reader.orientation.into());

            handle.send(ReaderCommand::LoadChapter {
                chapter,
                requested_page: current,
                restore: None,
            })?;
            for event in events {
                handle.send(event)?;
            }
            handle.send(ReaderCommand::Close)?;

            while let Some(update) = handle.next_update().await {
                match update {
                    ReaderUpdate::LayoutChanged(snapshot) => {
                        println!(
                            "{:?} shift={} slot {}/{} -> {}",
                            snapshot.state,
                            snapshot.shift.shift_double_page,
                            snapshot.current_slot,
                            snapshot.slot_count,
                            snapshot.label.as_deref().unwrap_or("-")
                        );
                    }
                    ReaderUpdate::StateSaved(saved) => match saved {
                        Some(saved) => println!(
                            "Saved shift={} page={:?}",
                            saved.shift_double_page, saved.page_index
                        ),
                        None => println!("Saved nothing"),
                    },
                    ReaderUpdate::Error { message } => eprintln!("Error: {}", message),
                    ReaderUpdate::Closed => break,
                }
            }
        }
    }

    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_event() {
        assert!(matches!(
            parse_event("landscape"),
            Ok(ReaderCommand::OrientationChanged(Orientation::Landscape))
        ));
        assert!(matches!(
            parse_event("select=4"),
            Ok(ReaderCommand::SelectSlot { slot: 4, .. })
        ));
        assert!(parse_event("select=x").is_err());
        assert!(parse_event("jump").is_err());
    }

    #[test]
    fn test_chapter_args_reject_out_of_range_flags() {
        let args = ChapterArgs {
            pages: 4,
            full: vec![1],
            isolated: vec![4],
        };
        assert!(args.build().is_err());

        let args = ChapterArgs {
            pages: 4,
            full: vec![1],
            isolated: vec![],
        };
        let chapter = args.build().unwrap();
        assert!(chapter.get(1).unwrap().full_page);
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
