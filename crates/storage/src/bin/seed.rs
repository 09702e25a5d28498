use clap::{Parser, ValueEnum};
use journey_core::catalog::beginner_path;
use journey_core::model::{NodeKind, PageAnalytics, QuizAttempt, QuizProgress};
use storage::repository::{ProgressKey, Storage};

/// Write demo progress records into a journey `SQLite` store.
#[derive(Debug, Parser)]
#[command(name = "seed")]
struct Args {
    /// `SQLite` URL of the progress store.
    #[arg(long = "db", env = "JOURNEY_DB_URL", default_value = "sqlite:journey.sqlite3?mode=rwc")]
    db_url: String,

    /// How far along the seeded learner is.
    #[arg(long, value_enum, default_value_t = Preset::Partial)]
    preset: Preset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Preset {
    /// Remove every record so the map shows a fresh learner.
    Empty,
    /// Core concepts done, two more topics in flight, two quizzes taken.
    Partial,
    /// Every topic and the quiz completed.
    Complete,
}

fn topic_rate(preset: Preset, node_id: &str) -> Option<f64> {
    match preset {
        Preset::Empty => None,
        Preset::Complete => Some(100.0),
        Preset::Partial => match node_id {
            "core-concepts" => Some(92.0),
            "references" => Some(55.0),
            "community" => Some(80.0),
            _ => None,
        },
    }
}

fn quiz_progress(preset: Preset) -> Option<QuizProgress> {
    match preset {
        Preset::Empty => None,
        Preset::Partial => Some(QuizProgress::new(
            vec![QuizAttempt::scored(72.0), QuizAttempt::scored(90.0)],
            5,
            81.0,
        )),
        Preset::Complete => Some(QuizProgress::new(
            vec![
                QuizAttempt::scored(90.0),
                QuizAttempt::scored(95.0),
                QuizAttempt::scored(100.0),
            ],
            3,
            95.0,
        )),
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let storage = Storage::sqlite(&args.db_url).await?;
    let path = beginner_path();

    let mut written = 0_u32;
    for node in path.nodes.iter().filter(|node| node.kind == NodeKind::Topic) {
        let key = ProgressKey::PageAnalytics(node.id.clone());
        match topic_rate(args.preset, node.id.as_str()) {
            Some(rate) => {
                let record = PageAnalytics::with_completion_rate(rate).to_json()?;
                storage.progress.put_progress(&key, &record).await?;
                written += 1;
            }
            None => storage.progress.remove_progress(&key).await?,
        }
    }

    match quiz_progress(args.preset) {
        Some(progress) => {
            storage
                .progress
                .put_progress(&ProgressKey::QuizProgress, &progress.to_json()?)
                .await?;
            written += 1;
        }
        None => {
            storage
                .progress
                .remove_progress(&ProgressKey::QuizProgress)
                .await?;
        }
    }

    println!(
        "Seeded {written} progress records ({:?}) into {}",
        args.preset, args.db_url
    );

    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
