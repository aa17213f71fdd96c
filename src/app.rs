// src/app.rs
//
// Calculatrice scientifique — module App (racine)
// -----------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App + traduction clavier -> touches

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use crate::noyau::Action;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.clavier(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}

impl AppCalc {
    /// Clavier physique :
    /// - texte tapé (chiffres, . + - * / = ( ) %) => même table que les boutons
    /// - Enter => "=" ; Échap => "C"
    fn clavier(&mut self, ctx: &egui::Context) {
        let (textes, enter, esc) = ctx.input(|i| {
            let textes: Vec<String> = i
                .events
                .iter()
                .filter_map(|ev| match ev {
                    egui::Event::Text(t) => Some(t.clone()),
                    _ => None,
                })
                .collect();
            (
                textes,
                i.key_pressed(egui::Key::Enter),
                i.key_pressed(egui::Key::Escape),
            )
        });

        for t in &textes {
            for c in t.chars() {
                self.touche(c.encode_utf8(&mut [0u8; 4]));
            }
        }
        if enter {
            self.envoyer(Action::Calculate);
        }
        if esc {
            self.clear_entree();
        }
    }
}
