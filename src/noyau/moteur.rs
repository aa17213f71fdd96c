//! Noyau — moteur à états
//!
//! `appliquer(état, action) -> état'` : fonction pure et totale sur l’ensemble
//! fermé des actions. Chaque gestionnaire construit un NOUVEL état (aucune
//! mutation partagée) ; une action impossible (opérande illisible) laisse
//! l’état inchangé.
//!
//! Exécution immédiate, strictement séquentielle : 2 + 3 × 4 = 20.

use std::f64::consts::{E, PI};

use tracing::{debug, trace};

use super::action::{Action, Fonction, Operateur};
use super::erreur::ErreurNoyau;
use super::etat::{EtatCalc, ENTREE_INITIALE};
use super::eval::{appliquer_fonction, evaluer};
use super::format::{format_resultat, lire_operande, sans_operande_final, ERREUR};

/// Détenteur de l’état courant (ce que la vue interroge après chaque touche).
#[derive(Clone, Debug, Default)]
pub struct Calculatrice {
    etat: EtatCalc,
}

impl Calculatrice {
    /// Dernier état produit.
    pub fn etat(&self) -> &EtatCalc {
        &self.etat
    }

    /// Applique une action et remplace l’état en bloc.
    pub fn envoyer(&mut self, action: Action) -> &EtatCalc {
        self.etat = appliquer(&self.etat, action);
        &self.etat
    }

    /// Variante "touche texte" : le symbole est traduit selon le mode inverse courant.
    pub fn envoyer_symbole(&mut self, symbole: &str) -> Result<&EtatCalc, ErreurNoyau> {
        let action = Action::depuis_symbole(symbole, self.etat.mode_inverse)?;
        Ok(self.envoyer(action))
    }
}

/// Transition : ne panique jamais, ne renvoie jamais d’erreur.
pub fn appliquer(etat: &EtatCalc, action: Action) -> EtatCalc {
    trace!(?action, entree = %etat.entree, "action");

    let resultat = match action {
        Action::Chiffre(n) => Ok(chiffre(etat, n)),
        Action::Decimal => Ok(decimal(etat)),
        Action::Clear => Ok(EtatCalc {
            entree: ENTREE_INITIALE.to_string(),
            ..etat.clone()
        }),
        Action::AllClear => Ok(etat.reinitialise()),
        Action::ToggleMode => Ok(EtatCalc {
            mode_scientifique: !etat.mode_scientifique,
            ..etat.clone()
        }),

        Action::Fonction(f) => fonction(etat, f),
        Action::Operation(op) => operation(etat, op),

        Action::Pi => Ok(constante(etat, PI, "π")),
        Action::E => Ok(constante(etat, E, "e")),

        // Parenthèses : trace seulement, aucun regroupement numérique.
        Action::ParentheseOuvrante => Ok(avec_trace(etat, format!("{}(", etat.trace))),
        Action::ParentheseFermante => Ok(avec_trace(etat, format!("{})", etat.trace))),

        Action::Calculate => calcule(etat),

        Action::Exponent
        | Action::Inverse
        | Action::SecondFunction
        | Action::MemoryAdd
        | Action::MemorySubtract
        | Action::MemoryRecall
        | Action::MemoryClear => {
            debug!(?action, "action réservée, ignorée");
            Ok(etat.clone())
        }
    };

    match resultat {
        Ok(nouveau) => nouveau,
        Err(err) => {
            debug!(?action, %err, "action ignorée");
            etat.clone()
        }
    }
}

/* ------------------------ Saisie ------------------------ */

fn chiffre(etat: &EtatCalc, n: u8) -> EtatCalc {
    if n > 9 {
        debug!(n, "chiffre hors 0..=9, ignoré");
        return etat.clone();
    }
    let c = char::from(b'0' + n);

    if etat.attente_operande {
        let mut trace = etat.trace.clone();
        trace.push(c);
        return EtatCalc {
            entree: c.to_string(),
            attente_operande: false,
            trace,
            ..etat.clone()
        };
    }

    // "0" et "Error" : départ neuf (remplacement), sinon concaténation textuelle
    let entree = if depart_neuf(etat) {
        c.to_string()
    } else {
        format!("{}{c}", etat.entree)
    };
    let trace = trace_avec_saisie(etat, &entree);

    EtatCalc {
        entree,
        trace,
        ..etat.clone()
    }
}

fn decimal(etat: &EtatCalc) -> EtatCalc {
    if etat.attente_operande || etat.entree == ERREUR {
        // nouvel opérande : la trace d’un calcul terminé n’est pas prolongée
        let entree = "0.".to_string();
        let trace = trace_avec_saisie(etat, &entree);
        return EtatCalc {
            entree,
            attente_operande: false,
            trace,
            ..etat.clone()
        };
    }
    if etat.entree.contains('.') {
        return etat.clone();
    }

    let entree = format!("{}.", etat.entree);
    let trace = trace_avec_saisie(etat, &entree);
    EtatCalc {
        entree,
        trace,
        ..etat.clone()
    }
}

fn depart_neuf(etat: &EtatCalc) -> bool {
    etat.entree == ENTREE_INITIALE || etat.entree == ERREUR
}

/// Trace reconstruite : tout jusqu’au dernier opérateur, puis la saisie courante.
fn trace_avec_saisie(etat: &EtatCalc, entree: &str) -> String {
    if etat.trace.ends_with('(') {
        format!("{}{entree}", etat.trace)
    } else if etat.operateur.is_none() {
        entree.to_string()
    } else {
        format!("{}{entree}", sans_operande_final(&etat.trace))
    }
}

/* ------------------------ Opérations ------------------------ */

fn lire(etat: &EtatCalc) -> Result<f64, ErreurNoyau> {
    lire_operande(&etat.entree).ok_or_else(|| ErreurNoyau::OperandeIllisible(etat.entree.clone()))
}

fn fini(x: f64) -> Result<f64, ErreurNoyau> {
    if x.is_finite() {
        Ok(x)
    } else {
        Err(ErreurNoyau::ResultatIndefini)
    }
}

/// Binaire : capture du premier opérande, ou enchaînement gauche -> droite.
fn operation(etat: &EtatCalc, op: Operateur) -> Result<EtatCalc, ErreurNoyau> {
    let v = lire(etat)?;

    let nouveau = match (etat.operande, etat.operateur) {
        (Some(a), Some(precedent)) => {
            // ±∞ reste un f64 valide ici : l’enchaînement ne bascule pas en erreur
            let r = evaluer(a, v, precedent);
            EtatCalc {
                entree: format_resultat(r),
                operande: Some(r),
                operateur: Some(op),
                attente_operande: true,
                trace: format!(
                    "{}{}{}{}",
                    format_resultat(a),
                    precedent.symbole(),
                    format_resultat(v),
                    op.symbole()
                ),
                ..etat.clone()
            }
        }
        _ => EtatCalc {
            operande: Some(v),
            operateur: Some(op),
            attente_operande: true,
            trace: format!("{}{}", format_resultat(v), op.symbole()),
            ..etat.clone()
        },
    };

    Ok(nouveau)
}

/// Unaire : "nom(v) = r", ou "Error" si r n’est pas fini.
fn fonction(etat: &EtatCalc, f: Fonction) -> Result<EtatCalc, ErreurNoyau> {
    let v = lire(etat)?;

    let nouveau = match fini(appliquer_fonction(f, v)) {
        Ok(r) => EtatCalc {
            entree: format_resultat(r),
            attente_operande: true,
            trace: format!("{}({}) = {}", f.nom(), format_resultat(v), format_resultat(r)),
            ..etat.clone()
        },
        Err(err) => {
            debug!(fonction = f.nom(), v, %err, "résultat -> Error");
            etat_erreur(etat)
        }
    };

    Ok(nouveau)
}

/// "=" : finalise l’opération en cours ; sans opération, ne fait rien.
fn calcule(etat: &EtatCalc) -> Result<EtatCalc, ErreurNoyau> {
    let (Some(a), Some(op)) = (etat.operande, etat.operateur) else {
        return Ok(etat.clone());
    };
    let b = lire(etat)?;

    let finalise = EtatCalc {
        operande: None,
        operateur: None,
        attente_operande: true,
        ..etat.clone()
    };

    let nouveau = match fini(evaluer(a, b, op)) {
        Ok(r) => EtatCalc {
            entree: format_resultat(r),
            trace: format!(
                "{}{}{}={}",
                format_resultat(a),
                op.symbole(),
                format_resultat(b),
                format_resultat(r)
            ),
            ..finalise
        },
        Err(err) => {
            debug!(a, b, ?op, %err, "résultat -> Error");
            etat_erreur(&finalise)
        }
    };

    Ok(nouveau)
}

/* ------------------------ Divers ------------------------ */

fn constante(etat: &EtatCalc, valeur: f64, symbole: &str) -> EtatCalc {
    EtatCalc {
        entree: format_resultat(valeur),
        attente_operande: true,
        trace: symbole.to_string(),
        ..etat.clone()
    }
}

fn avec_trace(etat: &EtatCalc, trace: String) -> EtatCalc {
    EtatCalc {
        trace,
        ..etat.clone()
    }
}

fn etat_erreur(etat: &EtatCalc) -> EtatCalc {
    EtatCalc {
        entree: ERREUR.to_string(),
        trace: String::new(),
        ..etat.clone()
    }
}
