// src/app/vue.rs
//
// Vue (UI egui)
// -------------
// - Écran : trace (petit) + entrée (grand), rendus tels quels
// - Pavé basique toujours visible, pavé scientifique selon le mode
// - Chaque bouton envoie son symbole au moteur, rien d’autre

use eframe::egui;

use super::etat::AppCalc;

const PAVE_BASIQUE: [[&str; 5]; 4] = [
    ["7", "8", "9", "%", "AC"],
    ["4", "5", "6", "×", "÷"],
    ["1", "2", "3", "-", "+"],
    ["ModeToggle", "0", ".", "±", "="],
];

// "" = case vide
const PAVE_SCIENTIFIQUE: [[&str; 5]; 5] = [
    ["sin", "cos", "tan", "(", ")"],
    ["sin⁻¹", "cos⁻¹", "tan⁻¹", "ln", "log"],
    ["x^y", "x³", "x²", "π", "e"],
    ["y√x", "3√x", "√x", "x!", "1/x"],
    ["eˣ", "10ˣ", "C", "", ""],
];

const TAILLE_BOUTON: [f32; 2] = [64.0, 44.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.ui_ecran(ui);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        if self.etat().mode_scientifique {
            self.ui_pave(ui, "pave_scientifique", &PAVE_SCIENTIFIQUE);
            ui.add_space(6.0);
        }
        self.ui_pave(ui, "pave_basique", &PAVE_BASIQUE);
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        let etat = self.etat();

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    ui.label(egui::RichText::new(&etat.trace).monospace().size(16.0));
                    ui.label(
                        egui::RichText::new(&etat.entree)
                            .monospace()
                            .size(36.0)
                            .strong(),
                    );
                });
            });
    }

    fn ui_pave<const N: usize>(&mut self, ui: &mut egui::Ui, id: &str, pave: &[[&str; 5]; N]) {
        egui::Grid::new(id)
            .num_columns(5)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for rangee in pave {
                    for symbole in rangee {
                        if symbole.is_empty() {
                            ui.label("");
                        } else {
                            self.bouton(ui, symbole);
                        }
                    }
                    ui.end_row();
                }
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, symbole: &str) {
        let texte = libelle(symbole, self.etat().mode_scientifique);
        let resp = ui.add_sized(TAILLE_BOUTON, egui::Button::new(texte));
        if resp.clicked() {
            self.touche(symbole);
        }
    }
}

/// Texte affiché sur la touche (le symbole envoyé reste celui de la table).
fn libelle(symbole: &str, scientifique: bool) -> &str {
    match symbole {
        "ModeToggle" if scientifique => "Bas",
        "ModeToggle" => "Sci",
        "x^y" => "xʸ",
        "y√x" => "ʸ√x",
        "3√x" => "³√x",
        s => s,
    }
}
