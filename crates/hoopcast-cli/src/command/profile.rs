use std::path::PathBuf;

use anyhow::Context as _;
use hoopcast_engine::profile;

use crate::{report, util};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct ProfileArg {
    /// Dataset JSON file
    #[arg(long)]
    data: PathBuf,
    /// Player id
    #[arg(long)]
    player: String,
}

pub(crate) fn run(arg: &ProfileArg) -> anyhow::Result<()> {
    let ProfileArg { data, player } = arg;

    let dataset = util::read_dataset_file(data)?;
    let player = dataset.player(player).context("Unknown player")?;
    let logs = dataset.logs(&player.id).context("Unknown player")?;

    let profile = profile::build_profile(logs);
    let games = logs.iter().filter(|log| log.has_minutes()).count();
    let mut text = String::new();
    report::write_profile(&mut text, player, games, &profile)?;
    print!("{text}");
    Ok(())
}
