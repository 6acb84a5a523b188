use crate::reports;
use clap::Args;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use tracing::{error, info};
use ttrscore::catalog::{load_catalog, CatalogSource};
use ttrscore::config::ScoringRules;
use ttrscore::error::{ScoreError, ScoreResult};
use ttrscore::events::{load_events, GameEvent};
use ttrscore::session::{CatalogTicket, ScoreSession};

#[derive(Args, Debug, Clone)]
pub struct ReplayArgs {
    /// JSON array of recorded score sheet events.
    pub events: PathBuf,

    /// Print the scoreboard after every event.
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

pub async fn run<S: CatalogSource>(
    args: &ReplayArgs,
    source: &S,
    rules: ScoringRules,
) -> ScoreResult<ScoreSession> {
    let file = File::open(&args.events).map_err(|e| {
        ScoreError::Config(format!(
            "Could not open events file '{}': {}",
            args.events.display(),
            e
        ))
    })?;
    let events = load_events(BufReader::new(file))?;
    info!(
        "▶️  Replaying {} events from {}",
        events.len(),
        args.events.display()
    );

    let mut session = ScoreSession::new(rules);

    // Scripts usually open with a map change, which fetches on its own.
    if !matches!(events.first(), Some(GameEvent::MapChanged { .. })) {
        let ticket = session.on_map_changed(session.map());
        fetch_into(&mut session, source, ticket).await;
    }

    for (i, event) in events.iter().enumerate() {
        let ticket = session.apply(event).map_err(|e| {
            error!("Event #{} ({:?}) rejected", i + 1, event);
            e
        })?;
        if let Some(ticket) = ticket {
            fetch_into(&mut session, source, ticket).await;
        }

        if args.verbose {
            info!("Event #{}: {:?}", i + 1, event);
            reports::print_scoreboard(&session);
        }
    }

    reports::print_scoreboard(&session);
    Ok(session)
}

async fn fetch_into<S: CatalogSource>(
    session: &mut ScoreSession,
    source: &S,
    ticket: CatalogTicket,
) {
    let catalog = load_catalog(source, ticket.map, session.rules()).await;
    if !session.apply_catalog(ticket, catalog) {
        info!("Dropped a stale {} catalog", ticket.map);
    }
}
