//! src/noyau/etat.rs
//!
//! État de la calculatrice (valeur immuable, remplacée en bloc à chaque action).
//!
//! Contrats :
//! - `entree` n’est jamais vide : chiffres tapés, résultat formaté, ou marqueur "Error".
//! - `operande` et `operateur` sont posés/retirés ensemble.
//! - `mode_scientifique` ne change pas la sémantique du moteur (disposition des touches).

use super::action::Operateur;

/// Entrée initiale (et après C / AC).
pub const ENTREE_INITIALE: &str = "0";

#[derive(Clone, Debug, PartialEq)]
pub struct EtatCalc {
    // --- saisie ---
    pub entree: String,          // opérande en cours (texte), ou "Error"
    pub attente_operande: bool, // le prochain chiffre démarre un nouvel opérande

    // --- opération binaire en cours ---
    pub operande: Option<f64>,
    pub operateur: Option<Operateur>,

    // --- modes ---
    pub mode_scientifique: bool,
    pub mode_inverse: bool, // réservé (aucune action ne le bascule encore)

    // --- sortie secondaire ---
    pub trace: String,

    // --- réservé (touches M+/M-/MR/MC non implémentées) ---
    #[allow(dead_code)]
    pub memoire: f64,
}

impl Default for EtatCalc {
    fn default() -> Self {
        Self {
            entree: ENTREE_INITIALE.to_string(),
            attente_operande: false,
            operande: None,
            operateur: None,
            mode_scientifique: false,
            mode_inverse: false,
            trace: String::new(),
            memoire: 0.0,
        }
    }
}

impl EtatCalc {
    /// AC : état neuf, seul le mode (basique/scientifique) survit.
    pub fn reinitialise(&self) -> Self {
        Self {
            mode_scientifique: self.mode_scientifique,
            ..Self::default()
        }
    }
}
