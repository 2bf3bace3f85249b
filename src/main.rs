use anyhow::{Context, Result, bail};
use bit_lessons::areas::head::Checkout;
use bit_lessons::areas::refs::{BranchPlacement, BranchUpdate};
use bit_lessons::areas::staging::StagingPipeline;
use bit_lessons::artifacts::history::{ResetKind, RewriteMode};
use bit_lessons::artifacts::snapshot::Snapshot;
use bit_lessons::commands::porcelain::checkout::DETACHMENT_NOTICE;
use bit_lessons::config::LessonConfig;
use bit_lessons::lessons::Lesson;
use bit_lessons::lessons::branches::BranchPlayground;
use bit_lessons::lessons::chain::CommitChain;
use bit_lessons::lessons::head_pointer::HeadPointer;
use bit_lessons::lessons::history::HistoryRewrite;
use bit_lessons::lessons::reflog::ReflogRecovery;
use bit_lessons::lessons::three_areas::ThreeAreas;
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use is_terminal::IsTerminal;
use std::io::Write;

#[derive(Parser)]
#[command(
    name = "bit-lessons",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Play the version-control lessons in the terminal",
    long_about = "Every invocation starts a lesson from its seed state, plays the given steps \
    and prints the resulting commit graph, branches, HEAD and reflog. \
    Nothing is written to disk.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(
        long,
        global = true,
        help = "Maximum number of commits a lesson may hold (overrides BIT_LESSONS_CAPACITY)"
    )]
    capacity: Option<usize>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "chain",
        about = "Grow a chain of commits",
        long_about = "Starts from the root commit C1 and appends the given number of commits."
    )]
    Chain {
        #[arg(short, long, default_value_t = 1, help = "Number of commits to append")]
        commits: usize,
    },
    #[command(
        name = "branches",
        about = "Place branch labels on commits",
        long_about = "Starts from C1 <- C2 <- C3 with main on C3. Each placement is either \
        NAME=COMMIT or just COMMIT, which places the default branch."
    )]
    Branches {
        #[arg(short, long, help = "Branch placement, NAME=COMMIT or COMMIT")]
        place: Vec<String>,
    },
    #[command(
        name = "head",
        about = "Move HEAD between branches and commits",
        long_about = "Starts from C1 <- C2 <- C3 with feature on C2, main on C3 and HEAD on main."
    )]
    Head {
        #[arg(short, long, help = "Branch, commit or revision to check out")]
        checkout: Vec<String>,
    },
    #[command(
        name = "areas",
        about = "Move a file through the working directory, staging area, repository and remote"
    )]
    Areas {
        #[arg(index = 1, value_enum, help = "Steps to play, in order")]
        steps: Vec<AreaStep>,
    },
    #[command(name = "rewrite", about = "Rewrite history with reset, revert or rebase")]
    Rewrite {
        #[command(subcommand)]
        mode: RewriteCommand,
    },
    #[command(
        name = "reflog",
        about = "Lose a commit with a hard reset and recover it through the reflog"
    )]
    Reflog {
        #[arg(long, help = "Run git reset --hard HEAD~1")]
        reset_hard: bool,
        #[arg(long, help = "Recover the lost commit")]
        recover: bool,
        #[arg(long, help = "Also print the reflog with entry dates, as git reflog --date=iso")]
        date: bool,
    },
}

#[derive(Subcommand)]
enum RewriteCommand {
    #[command(about = "Move main back one commit")]
    Reset {
        #[arg(short, long, value_enum, default_value = "hard", help = "Reset kinds, in order")]
        kind: Vec<ResetFlag>,
    },
    #[command(about = "Add the inverse of a commit")]
    Revert {
        #[arg(short, long, help = "Commit to revert, HEAD when omitted")]
        target: Option<String>,
    },
    #[command(about = "Replay feature on top of another branch")]
    Rebase {
        #[arg(short, long, help = "Branch to rebase onto, main when omitted")]
        onto: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum AreaStep {
    Add,
    Commit,
    Push,
}

#[derive(Clone, Copy, ValueEnum)]
enum ResetFlag {
    Soft,
    Mixed,
    Hard,
}

impl From<ResetFlag> for ResetKind {
    fn from(flag: ResetFlag) -> Self {
        match flag {
            ResetFlag::Soft => ResetKind::Soft,
            ResetFlag::Mixed => ResetKind::Mixed,
            ResetFlag::Hard => ResetKind::Hard,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let mut config = LessonConfig::load_from_env()?;
    if let Some(capacity) = cli.capacity {
        config = config.with_capacity(capacity);
    }

    let mut writer: Box<dyn Write> = Box::new(std::io::stdout());

    match &cli.command {
        Commands::Chain { commits } => play_chain(config, *commits, &mut writer)?,
        Commands::Branches { place } => play_branches(config, place, &mut writer)?,
        Commands::Head { checkout } => play_head(config, checkout, &mut writer)?,
        Commands::Areas { steps } => play_areas(steps, &mut writer)?,
        Commands::Rewrite { mode } => play_rewrite(config, mode, &mut writer)?,
        Commands::Reflog {
            reset_hard,
            recover,
            date,
        } => play_reflog(config, *reset_hard, *recover, *date, &mut writer)?,
    }

    Ok(())
}

fn play_chain(config: LessonConfig, commits: usize, writer: &mut dyn Write) -> Result<()> {
    let mut lesson = CommitChain::new(config).context("Failed to seed the commit chain")?;
    write_title::<CommitChain>(writer)?;

    for _ in 0..commits {
        let commit = lesson.commit().context("git commit failed")?;
        writeln!(writer, "[{}] {}", commit.id(), commit.message())?;
    }

    write_snapshot(writer, &lesson.snapshot()?)
}

fn play_branches(config: LessonConfig, places: &[String], writer: &mut dyn Write) -> Result<()> {
    let mut lesson = BranchPlayground::new(config).context("Failed to seed the branches")?;
    write_title::<BranchPlayground>(writer)?;

    for place in places {
        let (name, commit) = match place.split_once('=') {
            Some((name, commit)) => (Some(name), commit),
            None => (None, place.as_str()),
        };
        if commit.trim().is_empty() {
            bail!("missing commit in placement '{place}'");
        }

        let placement = lesson
            .place_branch(name, commit.trim())
            .with_context(|| format!("Failed to place '{place}'"))?;
        write_placement(writer, &placement)?;
    }

    write_snapshot(writer, &lesson.snapshot()?)
}

fn play_head(config: LessonConfig, targets: &[String], writer: &mut dyn Write) -> Result<()> {
    let mut lesson = HeadPointer::new(config).context("Failed to seed the HEAD lesson")?;
    write_title::<HeadPointer>(writer)?;

    for target in targets {
        let checkout = lesson
            .checkout(target)
            .with_context(|| format!("git checkout {target} failed"))?;
        write_checkout(writer, &checkout)?;
    }

    write_snapshot(writer, &lesson.snapshot()?)
}

fn play_areas(steps: &[AreaStep], writer: &mut dyn Write) -> Result<()> {
    let mut lesson = ThreeAreas::default();
    write_title::<StagingPipeline>(writer)?;

    for step in steps {
        match step {
            AreaStep::Add => {
                if !lesson.add() {
                    writeln!(writer, "nothing to add")?;
                }
            }
            AreaStep::Commit => {
                lesson.commit().context("git commit failed")?;
            }
            AreaStep::Push => {
                lesson.push().context("git push failed")?;
            }
        }

        writeln!(
            writer,
            "{} is in the {}",
            lesson.file().yellow(),
            lesson.state().area().bold()
        )?;
    }

    Ok(())
}

fn play_rewrite(
    config: LessonConfig,
    command: &RewriteCommand,
    writer: &mut dyn Write,
) -> Result<()> {
    let mode = match command {
        RewriteCommand::Reset { .. } => RewriteMode::Reset,
        RewriteCommand::Revert { .. } => RewriteMode::Revert,
        RewriteCommand::Rebase { .. } => RewriteMode::Rebase,
    };
    let mut lesson =
        HistoryRewrite::with_mode(config, mode).context("Failed to seed the history lesson")?;
    write_title::<HistoryRewrite>(writer)?;
    writeln!(writer, "{}", lesson.tagline().italic())?;

    match command {
        RewriteCommand::Reset { kind } => {
            for flag in kind {
                let kind = ResetKind::from(*flag);
                let outcome = lesson
                    .reset(kind)
                    .with_context(|| format!("git reset {kind} failed"))?;
                writeln!(writer, "HEAD is now at {}", outcome.to)?;
            }
            if let Some(status) = lesson.status() {
                let label = if status.is_destroyed() {
                    status.label().red().bold()
                } else {
                    status.label().yellow()
                };
                writeln!(writer, "{label}")?;
            }
        }
        RewriteCommand::Revert { target } => {
            let commit = lesson
                .revert(target.as_deref())
                .context("git revert failed")?;
            writeln!(writer, "[{}] {}", commit.id(), commit.message())?;
        }
        RewriteCommand::Rebase { onto } => {
            let outcome = lesson.rebase(onto.as_deref()).context("git rebase failed")?;
            if outcome.is_up_to_date() {
                writeln!(writer, "Current branch {} is up to date.", outcome.branch)?;
            } else {
                for (original, copy) in &outcome.replayed {
                    writeln!(writer, "Applying {original} as {copy}")?;
                }
                writeln!(
                    writer,
                    "Successfully rebased and updated {}.",
                    outcome.branch.ref_path()
                )?;
            }
        }
    }

    write_snapshot(writer, &lesson.snapshot()?)
}

fn play_reflog(
    config: LessonConfig,
    reset_hard: bool,
    recover: bool,
    date: bool,
    writer: &mut dyn Write,
) -> Result<()> {
    let mut lesson = ReflogRecovery::new(config).context("Failed to seed the reflog lesson")?;
    write_title::<ReflogRecovery>(writer)?;

    if reset_hard && let Some(outcome) = lesson.reset_hard().context("git reset --hard failed")? {
        writeln!(writer, "HEAD is now at {}", outcome.to)?;
    }

    if recover {
        let restored = lesson.recover().context("Failed to recover lost work")?;
        writeln!(writer, "Recovered {}", restored.to_string().green())?;
    }

    write_snapshot(writer, &lesson.snapshot()?)?;

    if date {
        writeln!(writer)?;
        for line in lesson.repository().reflog().dated_lines() {
            writeln!(writer, "{line}")?;
        }
    }

    Ok(())
}

fn write_title<L: Lesson>(writer: &mut dyn Write) -> Result<()> {
    writeln!(writer, "{}", L::TITLE.bold().underline())?;
    Ok(())
}

fn write_placement(writer: &mut dyn Write, placement: &BranchPlacement) -> Result<()> {
    let name = placement.branch.name();
    let target = placement.branch.target();

    match &placement.update {
        BranchUpdate::Created => writeln!(writer, "Created branch {name} at {target}")?,
        BranchUpdate::Moved { from } => {
            writeln!(writer, "Moved branch {name} from {from} to {target}")?
        }
        BranchUpdate::Unchanged => writeln!(writer, "Branch {name} is already at {target}")?,
    }

    Ok(())
}

fn write_checkout(writer: &mut dyn Write, checkout: &Checkout) -> Result<()> {
    if checkout.is_noop() {
        writeln!(writer, "Already on '{}'", checkout.current)?;
    } else if checkout.current.is_detached() {
        if checkout.detached_now() {
            writeln!(writer, "{DETACHMENT_NOTICE}")?;
        }
        writeln!(writer, "HEAD is now at {}", checkout.commit)?;
    } else {
        writeln!(writer, "Switched to branch '{}'", checkout.current)?;
    }

    Ok(())
}

fn write_snapshot(writer: &mut dyn Write, snapshot: &Snapshot) -> Result<()> {
    writeln!(writer)?;
    write!(writer, "{snapshot}")?;
    Ok(())
}
