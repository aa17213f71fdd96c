//! Noyau de la calculatrice scientifique
//!
//! Organisation interne :
//! - action.rs  : ensemble fermé des actions + table des symboles
//! - etat.rs    : état (valeur remplacée à chaque action)
//! - eval.rs    : arithmétique f64 (binaire, unaire, factorielle)
//! - format.rs  : affichage des résultats + aides de trace
//! - moteur.rs  : transitions (état, action) -> état
//! - erreur.rs  : erreurs internes (jamais fatales)

pub mod action;
pub mod erreur;
pub mod etat;
pub mod eval;
pub mod format;
pub mod moteur;

#[cfg(test)]
mod tests_scientifiques;


// API publique minimale
pub use action::Action;
pub use etat::EtatCalc;
pub use moteur::Calculatrice;
