//! Shared UI crate for Control Diario de Inventario. Domain logic, views and
//! output dispatchers live here; the platform crates only launch the app.

pub mod config;
pub mod core;
pub mod dispatch;
pub mod i18n;
pub mod views;

pub mod components {
    // Per-zone indicator inputs (components/zone_card.rs)
    pub mod zone_card;
    pub use zone_card::ZoneCard;

    // Send / export / reset buttons (components/actions_panel.rs)
    pub mod actions_panel;
    pub use actions_panel::ActionsPanel;
}

/// Shared theme, inlined by every launcher.
pub const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));
