//! src/app/etat.rs
//!
//! État UI (sans vue) : détient la calculatrice et relaie les touches.
//!
//! Contrats :
//! - Aucune arithmétique ici : tout passe par `noyau::Calculatrice`.
//! - Une touche inconnue est ignorée (journalisée), jamais une panne.

use tracing::debug;

use crate::noyau::{Action, Calculatrice, EtatCalc};

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    calc: Calculatrice,
}

impl AppCalc {
    /// Dernier état du moteur (entrée + trace à afficher).
    pub fn etat(&self) -> &EtatCalc {
        self.calc.etat()
    }

    pub fn envoyer(&mut self, action: Action) {
        self.calc.envoyer(action);
    }

    /// Touche texte (bouton ou clavier).
    pub fn touche(&mut self, symbole: &str) {
        if let Err(err) = self.calc.envoyer_symbole(symbole) {
            debug!(%err, "touche ignorée");
        }
    }

    /// Échap : comme le bouton "C".
    pub fn clear_entree(&mut self) {
        self.envoyer(Action::Clear);
    }
}
