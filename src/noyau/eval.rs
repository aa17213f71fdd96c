//! Noyau — évaluation numérique (f64, sémantique IEEE)
//!
//! - evaluer()          : opérations binaires, aucune garde (6 ÷ 0 = +∞)
//! - appliquer_fonction : opérations unaires (trig en degrés)
//!
//! Rien ne panique ici : NaN / ±∞ remontent tels quels, c’est le moteur
//! qui les transforme en "Error".

use std::f64::consts::{E, PI};

use num_traits::ToPrimitive;

use super::action::{Fonction, Operateur};

/// a (op) b, évalué strictement tel quel (pas de priorité, pas de garde).
pub fn evaluer(a: f64, b: f64, op: Operateur) -> f64 {
    match op {
        Operateur::Plus => a + b,
        Operateur::Moins => a - b,
        Operateur::Fois => a * b,
        Operateur::Divise => a / b,
        Operateur::Puissance => a.powf(b),
        // a = opérande saisi en premier (l’indice de la racine)
        Operateur::Racine => b.powf(1.0 / a),
    }
}

/// f(v). Résultat éventuellement NaN / ±∞ (domaine, débordement).
pub fn appliquer_fonction(f: Fonction, v: f64) -> f64 {
    match f {
        Fonction::Signe => -v,
        Fonction::Pourcentage => v / 100.0,
        Fonction::Carre => v * v,
        Fonction::Cube => v.powi(3),
        Fonction::RacineCarree => v.sqrt(),
        Fonction::RacineCubique => v.powf(1.0 / 3.0),
        Fonction::Log => v.log10(),
        Fonction::Ln => v.ln(),
        Fonction::Factorielle => factorielle(v),
        Fonction::Reciproque => 1.0 / v,
        Fonction::ExpE => E.powf(v),
        Fonction::Exp10 => 10f64.powf(v),

        // directes : degrés -> radians ; inverses : appliquées à v, résultat en radians
        Fonction::Sin { inverse: false } => deg_vers_rad(v).sin(),
        Fonction::Cos { inverse: false } => deg_vers_rad(v).cos(),
        Fonction::Tan { inverse: false } => deg_vers_rad(v).tan(),
        // v brut, sans passage en radians (asin(v), pas asin(v·π/180))
        Fonction::Sin { inverse: true } => v.asin(),
        Fonction::Cos { inverse: true } => v.acos(),
        Fonction::Tan { inverse: true } => v.atan(),
    }
}

/// n! pour n entier >= 0, NaN sinon.
///
/// Produit itératif 1..=n ; on s’arrête dès que le produit déborde
/// (171! = +∞ en f64), sinon une saisie comme 1e18 gèlerait la boucle.
pub fn factorielle(n: f64) -> f64 {
    if n < 0.0 || n.fract() != 0.0 {
        return f64::NAN;
    }
    let Some(borne) = n.to_u64() else {
        // n fini et entier mais hors u64 : forcément > 170
        return f64::INFINITY;
    };

    let mut produit = 1.0_f64;
    for i in 1..=borne {
        produit *= i as f64;
        if produit.is_infinite() {
            break;
        }
    }
    produit
}

fn deg_vers_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}
