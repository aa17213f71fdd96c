// src/noyau/format.rs

/// Marqueur d’erreur affiché à la place d’un résultat non fini.
pub const ERREUR: &str = "Error";

/// Formate un résultat numérique pour l’affichage ET la trace.
///
/// - fini     : écriture décimale la plus courte, ".0" final retiré (8.0 -> "8")
/// - non fini : "Error"
///
/// Les très grandes / très petites valeurs passent en notation "1e300",
/// relisible par `str::parse::<f64>`.
pub fn format_resultat(x: f64) -> String {
    if !x.is_finite() {
        return ERREUR.to_string();
    }

    let s = format!("{x:?}");
    match s.strip_suffix(".0") {
        Some(entier) => entier.to_string(),
        None => s,
    }
}

/// Lit l’entrée courante comme un f64.
///
/// On n’accepte que ce que la saisie peut produire (chiffres, '.', '-', exposant 'e'),
/// pour que "inf" / "NaN" ne passent jamais pour des opérandes.
pub fn lire_operande(entree: &str) -> Option<f64> {
    let s = entree.trim();
    if s.is_empty() || s == ERREUR {
        return None;
    }
    if !s
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e'))
    {
        return None;
    }
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Retire la série finale de chiffres / '.' (l’opérande en cours de saisie).
/// Tout ce qui précède (dernier opérateur compris) est conservé.
pub fn sans_operande_final(trace: &str) -> &str {
    trace.trim_end_matches(|c: char| c.is_ascii_digit() || c == '.')
}
