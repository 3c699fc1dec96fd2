use log::{info, warn};
use site_core::SiteConfig;
use web_sys::window;

/// `<script id="site-config" type="application/json">` in index.html.
const CONFIG_ELEMENT_ID: &str = "site-config";

/// Reads the page's config block, then applies the EmailJS ids baked in
/// at build time. Anything invalid falls back to the defaults.
pub fn load() -> SiteConfig {
    let mut config = match embedded() {
        Some(raw) => match SiteConfig::from_json(&raw) {
            Ok(config) => config,
            Err(err) => {
                warn!("Ignoring site config: {}", err);
                SiteConfig::default()
            }
        },
        None => SiteConfig::default(),
    };

    apply_build_env(&mut config);
    if !config.mail.is_configured() {
        info!("Mail delivery is not configured, the contact form will report an error");
    }
    config
}

fn embedded() -> Option<String> {
    let document = window()?.document()?;
    let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
    let raw = element.text_content()?;
    if raw.trim().is_empty() {
        None
    } else {
        Some(raw)
    }
}

fn apply_build_env(config: &mut SiteConfig) {
    if let Some(service_id) = option_env!("EMAILJS_SERVICE_ID") {
        config.mail.service_id = service_id.to_string();
    }
    if let Some(template_id) = option_env!("EMAILJS_TEMPLATE_ID") {
        config.mail.template_id = template_id.to_string();
    }
    if let Some(public_key) = option_env!("EMAILJS_PUBLIC_KEY") {
        config.mail.public_key = public_key.to_string();
    }
}
