// src/noyau/erreur.rs

use thiserror::Error;

/// Erreurs internes du noyau.
///
/// Aucune ne remonte jusqu’à l’utilisateur sous forme de panne :
/// - `OperandeIllisible` => action ignorée (état inchangé)
/// - `ResultatIndefini`  => affichage du marqueur "Error"
/// - `SymboleInconnu`    => la vue ignore le symbole
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurNoyau {
    #[error("opérande illisible: {0:?}")]
    OperandeIllisible(String),

    #[error("résultat indéfini")]
    ResultatIndefini,

    #[error("symbole inconnu: {0:?}")]
    SymboleInconnu(String),
}
