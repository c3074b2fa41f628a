mod cli;

use std::time::Duration;

use anyhow::Context;
use clap::Parser;

use remote_state::api::{FakeUserApi, User};
use remote_state::config::Config;
use remote_state::logging::init_tracing;
use remote_state::ui::render_user;
use remote_state::viewmodel::{SeedPolicy, UserViewModel};
use remote_state::RemoteResult;

use crate::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing("info");

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("loading configuration")?;
    apply_overrides(&mut config, &cli);
    config.validate().context("validating configuration")?;

    let api = FakeUserApi::new(Duration::from_millis(config.api.delay_ms));
    let view_model = UserViewModel::with_seed_policy(api, config.view.seed_policy);
    let mut user = view_model.user();

    for id in &cli.ids {
        view_model.load(id.as_str());
        loop {
            let Some(state) = user.changed().await else {
                anyhow::bail!("user state closed while loading '{}'", id);
            };
            print_state(&state, cli.json)?;
            if !state.is_loading() {
                break;
            }
        }
    }

    Ok(())
}

fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(delay_ms) = cli.delay_ms {
        config.api.delay_ms = delay_ms;
    }
    if cli.keep_last {
        config.view.seed_policy = SeedPolicy::KeepLast;
    }
}

fn print_state(state: &RemoteResult<User>, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string(state)?);
    } else {
        println!("{}", render_user(state));
    }
    Ok(())
}
