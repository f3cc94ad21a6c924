use std::sync::Arc;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_stream::StreamExt;

use wallflow::config::ShellConfig;
use wallflow::nav::{AdvanceOutcome, BackStackNavigator, NavOptions, NavigationHost, Route};
use wallflow::onboarding::default_deck;
use wallflow::settings::IconPack;
use wallflow::shell::AppShell;
use wallflow::store::JsonFileStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = ShellConfig::from_env();

    eprintln!("🖼  {} v{}", config.app_name, env!("CARGO_PKG_VERSION"));
    eprintln!("   Preferences: {}", config.prefs_path.display());
    eprintln!("   A terminal stand-in for the wallpaper's rendering surface.\n");

    let store = Arc::new(JsonFileStore::new(config.prefs_path.clone()));
    let host = Arc::new(BackStackNavigator::new(Route::Splash));
    let shell = AppShell::new(config, store, host.clone());

    let route = shell
        .launch()
        .await
        .context("Failed to resolve launch route")?;

    if route == Route::Onboarding {
        run_onboarding(&shell, &host).await?;
    }

    run_home(&shell, &host).await?;

    eprintln!("Bye!");
    Ok(())
}

/// Drive the onboarding pager until the terminal transition fires. Enter
/// is the Next/Start tap; EOF abandons the flow.
async fn run_onboarding(shell: &AppShell, host: &Arc<BackStackNavigator>) -> anyhow::Result<()> {
    let bridge = shell.begin_onboarding(default_deck());
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let view = bridge.view_state().await;
        let dots: String = view
            .dots
            .iter()
            .map(|&on| if on { '●' } else { '○' })
            .collect();
        println!("\n  {dots}  {}", view.title);
        println!("  {}", view.description);
        println!("  [Enter = {}]", view.cta);

        if lines.next_line().await?.is_none() {
            return Ok(());
        }

        match bridge.on_advance_requested().await {
            AdvanceOutcome::Advanced { .. } => {}
            AdvanceOutcome::Finished => {
                println!("\n  Onboarding complete. Stack: {:?}", host.stack().await);
                return Ok(());
            }
            AdvanceOutcome::Ignored => {}
        }
    }
}

/// The home screen: watches the icons-changed signal and accepts settings
/// commands until quit.
async fn run_home(shell: &AppShell, host: &Arc<BackStackNavigator>) -> anyhow::Result<()> {
    let controller = Arc::new(shell.settings_controller().await);

    // Home-side watcher: rebuild icon state whenever the signal raises.
    let mut changes = shell.scope().icons_changed().subscribe().await;
    let watcher = {
        let controller = Arc::clone(&controller);
        tokio::spawn(async move {
            while let Some(changed) = changes.next().await {
                if changed {
                    println!("  ⟳ icons changed, home rebuilt its icon state");
                    controller.acknowledge_icons_refreshed().await;
                }
            }
        })
    };

    println!("\n  Home. Stack: {:?}", host.stack().await);
    println!("  s = open settings, b = back, p = cycle icon pack,");
    println!("  a = toggle animation, d = toggle double-tap, q = quit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            "s" => {
                host.navigate_to(Route::Settings, NavOptions::push())
                    .await
                    .context("Failed to open settings")?;
                println!("  {:?}", controller.settings().await);
                println!("  Stack: {:?}", host.stack().await);
            }
            "b" => match host.back().await {
                Some(route) => println!("  Back to {route}. Stack: {:?}", host.stack().await),
                None => println!("  Already at the root."),
            },
            "p" => {
                let next = next_pack(controller.settings().await.icon_pack);
                controller.set_icon_pack(next).await;
                println!("  Icon pack: {next}");
            }
            "a" => {
                let on = !controller.settings().await.animated_icons;
                controller.set_animated_icons(on).await;
                println!("  Animated icons: {on}");
            }
            "d" => {
                let on = !controller.settings().await.double_tap_cycle;
                controller.set_double_tap_cycle(on).await;
                println!("  Double-tap cycle: {on} (icons unaffected)");
            }
            "q" => break,
            "" => {}
            other => println!("  Unknown command: {other}"),
        }
    }

    watcher.abort();
    Ok(())
}

fn next_pack(pack: IconPack) -> IconPack {
    match pack {
        IconPack::Classic => IconPack::Outline,
        IconPack::Outline => IconPack::Neon,
        IconPack::Neon => IconPack::Classic,
    }
}
