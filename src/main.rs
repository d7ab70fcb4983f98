use std::path::PathBuf;

use anyhow::Context;
use sl_core::routing::Route;
use strikelab_lib::{init_tracing_subscriber, resolve_config, wire_gatekeeper};
use tracing::info;

const CONFIG_ENV_VAR: &str = "STRIKELAB_CONFIG";

fn config_path_from_env() -> Option<PathBuf> {
    std::env::var_os(CONFIG_ENV_VAR)
        .map(PathBuf::from)
        .or_else(|| std::env::args_os().nth(1).map(PathBuf::from))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = resolve_config(config_path_from_env())?;
    let log_dir = config.flag_store_path.parent().map(|dir| dir.join("logs"));
    init_tracing_subscriber(&config.log_level, log_dir.as_deref())?;

    let wired = wire_gatekeeper(&config);
    let resolver = wired.gatekeeper.cold_start();
    let cold_start = tokio::spawn(async move { resolver.run_until_resolved().await });

    // Collaborators finish loading after the resolver is already observing.
    if config.simulation.has_session {
        wired.session.sign_in();
    } else {
        wired.session.sign_out();
    }
    wired
        .subscription
        .set_subscribed(config.simulation.is_subscribed);

    let mut destination = cold_start
        .await
        .context("cold start task panicked")??;
    info!(href = %destination.href(), "initial route");

    if destination.route == Route::Onboarding {
        destination = wired.gatekeeper.complete_onboarding().execute().await;
    }

    if destination.route == Route::Paywall {
        let controller = wired.gatekeeper.mount_paywall(destination.params.clone());
        let mut state = controller.on_store_changed().await;
        if !state.is_resolved() {
            info!(
                label = controller.button_label().await.text(),
                "paywall waiting, pressing continue"
            );
            state = controller.continue_to_login().await;
        }
        info!(?state, "paywall finished");
    }

    let outcome = wired.gatekeeper.route_guard().evaluate().await;
    info!(
        ?outcome,
        final_route = ?wired.navigator.last().map(|dest| dest.href()),
        "gatekeeper run complete"
    );

    Ok(())
}
