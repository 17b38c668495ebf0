#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use dev_core_portfolio::content::SiteContent;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match SiteContent::embedded() {
        Ok(site) => log::info!(
            "embedded manifest ok: {} nav links, {} cards, {} projects",
            site.nav.len(),
            site.expertise.cards.len(),
            site.projects.items.len()
        ),
        Err(err) => log::error!("embedded manifest is invalid: {err}"),
    }

    log::info!("This project is frontend-only. Run `trunk serve` or `trunk build --release`.");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    dev_core_portfolio::frontend::run();
}
