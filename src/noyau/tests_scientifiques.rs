//! Tests scientifiques (campagne) : scénarios de touches + propriétés du moteur.
//!
//! Chaque scénario passe par la table des symboles (comme la vue),
//! puis on lit `entree` (affichage) et `trace` (historique).

use std::f64::consts::FRAC_PI_2;

use super::action::{Action, Fonction, Operateur};
use super::erreur::ErreurNoyau;
use super::etat::EtatCalc;
use super::eval::{evaluer, factorielle};
use super::format::{format_resultat, ERREUR};
use super::moteur::{appliquer, Calculatrice};

fn presse(touches: &[&str]) -> EtatCalc {
    let mut calc = Calculatrice::default();
    for t in touches {
        calc.envoyer_symbole(t)
            .unwrap_or_else(|e| panic!("touche={t:?} err={e}"));
    }
    calc.etat().clone()
}

fn assert_affiche(touches: &[&str], entree: &str, trace: &str) {
    let e = presse(touches);
    assert_eq!(e.entree, entree, "touches={touches:?}");
    assert_eq!(e.trace, trace, "touches={touches:?}");
}

fn assert_proche(touches: &[&str], attendu: f64) {
    let e = presse(touches);
    let v: f64 = e
        .entree
        .parse()
        .unwrap_or_else(|_| panic!("touches={touches:?} entree={:?}", e.entree));
    assert!((v - attendu).abs() < 1e-12, "touches={touches:?} v={v}");
}

/* ------------------------ Saisie ------------------------ */

#[test]
fn sci_saisie_concatenation() {
    assert_affiche(&["1", "2", "0", "3"], "1203", "1203");
    assert_affiche(&["0", "0", "7"], "7", "7");
    assert_affiche(&["1", ".", ".", "5", "."], "1.5", "1.5");
}

#[test]
fn sci_clear_garde_operation_en_cours() {
    assert_affiche(&["5", "+", "3", "C"], "0", "5+3");
    assert_affiche(&["5", "+", "3", "C", "4", "="], "9", "5+4=9");
}

#[test]
fn sci_decimal_apres_operateur() {
    assert_affiche(&["5", "+", "."], "0.", "5+0.");
    assert_affiche(&["5", "+", ".", "5", "="], "5.5", "5+0.5=5.5");
}

#[test]
fn sci_decimal_apres_resultat() {
    // la trace "5+3=8" n’est pas prolongée : nouveau calcul
    assert_affiche(&["5", "+", "3", "=", "."], "0.", "0.");
    assert_affiche(&["5", "+", "3", "=", ".", "2"], "0.2", "0.2");
}

/* ------------------------ Binaire ------------------------ */

#[test]
fn sci_aller_retour_addition() {
    assert_affiche(&["5", "+", "3", "="], "8", "5+3=8");
}

#[test]
fn sci_enchainement_gauche_droite() {
    assert_affiche(&["2", "+", "3", "×"], "5", "2+3×");
    assert_affiche(&["2", "+", "3", "×", "4", "="], "20", "5×4=20");
}

#[test]
fn sci_puissance_et_racine() {
    assert_affiche(&["2", "x^y", "1", "0", "="], "1024", "2^10=1024");
    // racine : le premier opérande est l’indice
    assert_affiche(&["2", "y√x", "9", "="], "3", "2ʸ√9=3");
}

#[test]
fn sci_division_par_zero() {
    assert_eq!(evaluer(6.0, 0.0, Operateur::Divise), f64::INFINITY);
    assert_eq!(format_resultat(f64::INFINITY), ERREUR);

    let e = presse(&["6", "÷", "0", "="]);
    assert_eq!(e.entree, ERREUR);
    assert_eq!(e.trace, "");
    assert!(e.operande.is_none() && e.operateur.is_none());
}

#[test]
fn sci_enchainement_non_fini_garde_l_operande() {
    // 6 ÷ 0 enchaîné : +∞ devient l’opérande en attente, l’écran montre "Error"
    let e = presse(&["6", "÷", "0", "+"]);
    assert_eq!(e.entree, ERREUR);
    assert_eq!(e.operande, Some(f64::INFINITY));
    assert_eq!(e.operateur, Some(Operateur::Plus));
    assert_eq!(e.trace, "6÷0+");

    // ∞ + 3 = : chemin d’erreur, opération finalisée
    let e = presse(&["6", "÷", "0", "+", "3", "="]);
    assert_eq!(e.entree, ERREUR);
    assert_eq!(e.trace, "");
    assert!(e.attente_operande);
    assert!(e.operande.is_none() && e.operateur.is_none());
}

#[test]
fn sci_calcul_idempotent() {
    let mut calc = Calculatrice::default();
    for t in ["5", "+", "3", "="] {
        calc.envoyer_symbole(t).unwrap();
    }
    let avant = calc.etat().clone();
    calc.envoyer(Action::Calculate);
    assert_eq!(calc.etat(), &avant);
}

#[test]
fn sci_parentheses_trace_seulement() {
    assert_affiche(&["5", "+", "(", "3", ")"], "3", "5+(3)");
    assert_affiche(&["5", "+", "(", "3", ")", "="], "8", "5+3=8");
}

/* ------------------------ Unaire ------------------------ */

#[test]
fn sci_factorielle() {
    assert_affiche(&["5", "x!"], "120", "factorial(5) = 120");
    assert_affiche(&["0", "x!"], "1", "factorial(0) = 1");
    assert_affiche(&["1", "±", "x!"], ERREUR, "");
    assert_affiche(&["2", ".", "5", "x!"], ERREUR, "");

    // débordement -> +∞, et pas de boucle interminable
    assert_eq!(factorielle(171.0), f64::INFINITY);
    assert_eq!(factorielle(1e18), f64::INFINITY);
    assert!(factorielle(-3.0).is_nan());
}

#[test]
fn sci_fonctions_simples() {
    assert_affiche(&["5", "0", "%"], "0.5", "percentage(50) = 0.5");
    assert_affiche(&["4", "1/x"], "0.25", "reciprocal(4) = 0.25");
    assert_affiche(&["1", "2", "x²"], "144", "square(12) = 144");
    assert_affiche(&["3", "x³"], "27", "cube(3) = 27");
    assert_affiche(&["1", "6", "√x"], "4", "squareroot(16) = 4");
    assert_affiche(&["7", "±"], "-7", "togglesign(7) = -7");

    assert_proche(&["8", "3√x"], 2.0);
    assert_proche(&["1", "0", "0", "log"], 2.0);
    assert_proche(&["1", "ln"], 0.0);
    assert_proche(&["2", "10ˣ"], 100.0);
    assert_proche(&["0", "eˣ"], 1.0);
}

#[test]
fn sci_trig_degres() {
    assert_proche(&["3", "0", "sin"], 0.5);
    assert_proche(&["6", "0", "cos"], 0.5);
    assert_proche(&["4", "5", "tan"], 1.0);

    // inverses : appliquées directement, résultat en radians
    let e = presse(&["1", "sin⁻¹"]);
    assert_eq!(e.entree, format_resultat(FRAC_PI_2));
    assert!(e.trace.starts_with("sin⁻¹(1) = "));
}

#[test]
fn sci_domaines_invalides() {
    assert_affiche(&["0", "log"], ERREUR, "");
    assert_affiche(&["4", "±", "√x"], ERREUR, "");
    assert_affiche(&["2", "cos⁻¹"], ERREUR, "");
}

/* ------------------------ Constantes ------------------------ */

#[test]
fn sci_constantes() {
    assert_affiche(&["π"], "3.141592653589793", "π");
    assert_affiche(&["e"], "2.718281828459045", "e");
    assert_affiche(
        &["2", "×", "π", "="],
        "6.283185307179586",
        "2×3.141592653589793=6.283185307179586",
    );
}

/* ------------------------ Erreur et remise à zéro ------------------------ */

#[test]
fn sci_reprise_apres_erreur() {
    // erreur après "=" : attente_operande posée
    assert_affiche(&["6", "÷", "0", "=", "4"], "4", "4");
    // erreur sans attente_operande : "Error" se comporte comme "0"
    assert_affiche(&["0", "log", "3"], "3", "3");
    assert_affiche(&["0", "log", "."], "0.", "0.");
}

#[test]
fn sci_operande_illisible_sans_effet() {
    let e = EtatCalc {
        entree: ERREUR.to_string(),
        ..EtatCalc::default()
    };
    assert_eq!(appliquer(&e, Action::Operation(Operateur::Plus)), e);
    assert_eq!(appliquer(&e, Action::Fonction(Fonction::Carre)), e);

    let e = EtatCalc {
        entree: "1e16.".to_string(),
        operande: Some(2.0),
        operateur: Some(Operateur::Fois),
        ..EtatCalc::default()
    };
    assert_eq!(appliquer(&e, Action::Calculate), e);
}

#[test]
fn sci_all_clear_garde_le_mode() {
    let e = presse(&["ModeToggle", "7", "+", "2", "x!", "AC"]);
    assert_eq!(e.entree, "0");
    assert_eq!(e.trace, "");
    assert!(e.mode_scientifique);
    assert!(e.operande.is_none() && e.operateur.is_none());

    let e = presse(&["7", "AC"]);
    assert!(!e.mode_scientifique);
}

#[test]
fn sci_actions_reservees_sans_effet() {
    let e = presse(&["5", "+", "3"]);
    for a in [
        Action::Exponent,
        Action::Inverse,
        Action::SecondFunction,
        Action::MemoryAdd,
        Action::MemorySubtract,
        Action::MemoryRecall,
        Action::MemoryClear,
        Action::Chiffre(12),
    ] {
        assert_eq!(appliquer(&e, a), e, "action={a:?}");
    }

    // touches mémoire : la mémoire reste vide
    let e = presse(&["7", "M+", "MR", "M-", "MC"]);
    assert_eq!(e.memoire, 0.0);
    assert_eq!(e.entree, "7");
}

/* ------------------------ Symboles ------------------------ */

#[test]
fn sci_table_symboles() {
    assert_eq!("×".parse::<Action>(), Ok(Action::Operation(Operateur::Fois)));
    assert_eq!("/".parse::<Action>(), Ok(Action::Operation(Operateur::Divise)));
    assert_eq!("7".parse::<Action>(), Ok(Action::Chiffre(7)));
    assert_eq!(
        "tan⁻¹".parse::<Action>(),
        Ok(Action::Fonction(Fonction::Tan { inverse: true }))
    );
    assert_eq!(
        Action::depuis_symbole("sin", true),
        Ok(Action::Fonction(Fonction::Sin { inverse: true }))
    );
    assert_eq!(Action::depuis_symbole("MR", false), Ok(Action::MemoryRecall));
    assert_eq!(
        "?".parse::<Action>(),
        Err(ErreurNoyau::SymboleInconnu("?".to_string()))
    );
}

/* ------------------------ Format ------------------------ */

#[test]
fn sci_format_resultat() {
    assert_eq!(format_resultat(8.0), "8");
    assert_eq!(format_resultat(-0.5), "-0.5");
    assert_eq!(format_resultat(0.1 + 0.2), "0.30000000000000004");
    assert_eq!(format_resultat(1e300), "1e300");
    assert_eq!(format_resultat(f64::NAN), ERREUR);
    assert_eq!(format_resultat(f64::NEG_INFINITY), ERREUR);
}
