// src/noyau/action.rs
//
// Ensemble FERMÉ des actions (une touche = une action)
// ----------------------------------------------------
// - Action      : ce que la vue envoie au moteur
// - Operateur   : opérations binaires (+ - × ÷ ^ ʸ√)
// - Fonction    : opérations unaires (scientifiques)
// - Symboles    : table texte -> Action (utilisée par la vue)

use std::str::FromStr;

use super::erreur::ErreurNoyau;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
    Puissance,
    Racine, // racine y-ième : Racine(a, b) = b^(1/a)
}

impl Operateur {
    /// Symbole affiché dans la trace.
    pub fn symbole(self) -> &'static str {
        match self {
            Operateur::Plus => "+",
            Operateur::Moins => "-",
            Operateur::Fois => "×",
            Operateur::Divise => "÷",
            Operateur::Puissance => "^",
            Operateur::Racine => "ʸ√",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Fonction {
    Signe,
    Pourcentage,
    Carre,
    Cube,
    RacineCarree,
    RacineCubique,
    Log,
    Ln,
    Factorielle,
    Reciproque,
    ExpE,
    Exp10,
    Sin { inverse: bool },
    Cos { inverse: bool },
    Tan { inverse: bool },
}

impl Fonction {
    /// Nom utilisé dans la trace : "nom(v) = r".
    pub fn nom(self) -> &'static str {
        match self {
            Fonction::Signe => "togglesign",
            Fonction::Pourcentage => "percentage",
            Fonction::Carre => "square",
            Fonction::Cube => "cube",
            Fonction::RacineCarree => "squareroot",
            Fonction::RacineCubique => "cuberoot",
            Fonction::Log => "log",
            Fonction::Ln => "ln",
            Fonction::Factorielle => "factorial",
            Fonction::Reciproque => "reciprocal",
            Fonction::ExpE => "expe",
            Fonction::Exp10 => "exp10",
            Fonction::Sin { inverse: false } => "sin",
            Fonction::Sin { inverse: true } => "sin⁻¹",
            Fonction::Cos { inverse: false } => "cos",
            Fonction::Cos { inverse: true } => "cos⁻¹",
            Fonction::Tan { inverse: false } => "tan",
            Fonction::Tan { inverse: true } => "tan⁻¹",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Chiffre(u8),
    Decimal,
    Clear,
    AllClear,
    ToggleMode,

    Fonction(Fonction),
    Operation(Operateur),

    Pi,
    E,
    ParentheseOuvrante,
    ParentheseFermante,
    Calculate,

    // Réservées : aucune sémantique définie (no-op).
    Exponent,
    Inverse,
    SecondFunction,
    MemoryAdd,
    MemorySubtract,
    MemoryRecall,
    MemoryClear,
}

impl Action {
    /// xʸ et ʸ√x : simples opérateurs binaires.
    pub const POWER_OF: Action = Action::Operation(Operateur::Puissance);
    pub const Y_ROOT_X: Action = Action::Operation(Operateur::Racine);

    /// Table symbole -> action.
    ///
    /// `inverse` : mode inverse courant ; un "sin" simple devient alors "sin⁻¹".
    pub fn depuis_symbole(symbole: &str, inverse: bool) -> Result<Action, ErreurNoyau> {
        use Fonction as F;

        let s = symbole.trim();

        // chiffres
        if let [c] = s.as_bytes() {
            if c.is_ascii_digit() {
                return Ok(Action::Chiffre(c - b'0'));
            }
        }

        // trig (avec ou sans ⁻¹)
        let inv = inverse || s.ends_with("⁻¹");
        match s.trim_end_matches("⁻¹") {
            "sin" => return Ok(Action::Fonction(F::Sin { inverse: inv })),
            "cos" => return Ok(Action::Fonction(F::Cos { inverse: inv })),
            "tan" => return Ok(Action::Fonction(F::Tan { inverse: inv })),
            _ => {}
        }

        let a = match s {
            "." => Action::Decimal,
            "C" => Action::Clear,
            "AC" => Action::AllClear,
            "ModeToggle" | "Sci" | "Bas" => Action::ToggleMode,
            "=" => Action::Calculate,
            "(" => Action::ParentheseOuvrante,
            ")" => Action::ParentheseFermante,

            "+" => Action::Operation(Operateur::Plus),
            "-" => Action::Operation(Operateur::Moins),
            "×" | "*" => Action::Operation(Operateur::Fois),
            "÷" | "/" => Action::Operation(Operateur::Divise),
            "x^y" | "xʸ" => Action::POWER_OF,
            "y√x" | "ʸ√x" => Action::Y_ROOT_X,

            "π" => Action::Pi,
            "e" => Action::E,

            "±" => Action::Fonction(F::Signe),
            "%" => Action::Fonction(F::Pourcentage),
            "x²" => Action::Fonction(F::Carre),
            "x³" => Action::Fonction(F::Cube),
            "√x" => Action::Fonction(F::RacineCarree),
            "3√x" | "³√x" => Action::Fonction(F::RacineCubique),
            "log" => Action::Fonction(F::Log),
            "ln" => Action::Fonction(F::Ln),
            "x!" => Action::Fonction(F::Factorielle),
            "1/x" => Action::Fonction(F::Reciproque),
            "eˣ" => Action::Fonction(F::ExpE),
            "10ˣ" => Action::Fonction(F::Exp10),

            "E" => Action::Exponent,
            "Inv" => Action::Inverse,
            "F" => Action::SecondFunction,
            "M+" => Action::MemoryAdd,
            "M-" => Action::MemorySubtract,
            "MR" => Action::MemoryRecall,
            "MC" => Action::MemoryClear,

            _ => return Err(ErreurNoyau::SymboleInconnu(s.to_string())),
        };

        Ok(a)
    }
}

impl FromStr for Action {
    type Err = ErreurNoyau;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::depuis_symbole(s, false)
    }
}
