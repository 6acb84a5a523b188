use crate::reports;
use clap::Args;
use ttrscore::catalog::{load_catalog, CatalogSource};
use ttrscore::config::ScoringRules;
use ttrscore::error::ScoreResult;
use ttrscore::maps::{get_all_maps, GameMap};

#[derive(Args, Debug, Clone)]
pub struct CatalogArgs {
    /// Map to list. Every map is listed when omitted.
    #[arg(short, long)]
    pub map: Option<GameMap>,
}

pub async fn run<S: CatalogSource>(
    args: &CatalogArgs,
    source: &S,
    rules: &ScoringRules,
) -> ScoreResult<()> {
    let maps = match args.map {
        Some(map) => vec![map],
        None => get_all_maps(),
    };

    for map in maps {
        let catalog = load_catalog(source, map, rules).await;
        reports::print_catalog(&catalog);
    }
    Ok(())
}
