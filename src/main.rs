// src/main.rs
//
// Calculatrice scientifique — point d’entrée NATIF
// ------------------------------------------------
// - Journal (tracing) : filtre via RUST_LOG, "warn" par défaut
// - eframe::run_native + NativeOptions
//
// Le moteur (noyau/) ne dépend pas de l’UI : app/ ne fait que traduire
// boutons/clavier en actions et afficher entrée + trace.

use eframe::egui;
use tracing_subscriber::EnvFilter;

mod app;
mod noyau;

use app::AppCalc;

/// Titre de la fenêtre.
const TITRE_APP: &str = "Calculatrice scientifique";

/// Filtre de journal si RUST_LOG est absent ou invalide.
const FILTRE_DEFAUT: &str = "warn";

fn installer_journal() {
    let filtre = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(FILTRE_DEFAUT));

    // try_init : un second appel (tests, ré-entrée) n’est pas une erreur fatale
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filtre)
        .with_target(false)
        .try_init();
}

fn main() -> eframe::Result<()> {
    installer_journal();
    tracing::info!("démarrage");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([380.0, 620.0])
            .with_min_inner_size([360.0, 440.0]),
        ..Default::default()
    };

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(|_cc| Ok(Box::<AppCalc>::default())),
    )
}
