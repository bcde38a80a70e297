//! The site's consent categories and what accepting or rejecting them does.

use consent::{CallbackMap, ConsentConfig, ConsentSettings, Lifecycle, ScriptLoading};
use dioxus::logger::tracing::{info, warn};

const SETTINGS: &str = include_str!("../consent.json");

const ANALYTICS_URL: &str = "https://www.googletagmanager.com/gtag/js?id=G-LEDGER0001";
const ADVERTISING_URL: &str = "https://securepubads.g.doubleclick.net/tag/js/gpt.js";

pub fn consent_config() -> ConsentConfig {
    let settings = ConsentSettings::from_json(SETTINGS).unwrap_or_else(|e| {
        warn!("Falling back to default consent settings: {e}");
        ConsentSettings::default()
    });
    ConsentConfig::new(settings).with_callbacks(callbacks())
}

fn callbacks() -> CallbackMap {
    CallbackMap::new()
        .on_accept("analytics", || load(ANALYTICS_URL))
        .on_reject("analytics", || info!("Analytics disabled"))
        .on_accept("advertising", || load(ADVERTISING_URL))
        .on_reject("advertising", || info!("Personalised advertising disabled"))
        .on(Lifecycle::AcceptAll, || info!("Visitor accepted all cookies"))
        .on(Lifecycle::RejectAll, || info!("Visitor rejected non-essential cookies"))
}

fn load(url: &str) {
    match ui::inject_script(url, ScriptLoading::Async) {
        Ok(true) => info!("Loaded {url}"),
        Ok(false) => {}
        Err(e) => warn!("Could not load {url}: {e}"),
    }
}
