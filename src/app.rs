// src/app.rs
//
// Calculatrice d’aire — module App (racine)
// ----------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppAire (pour main.rs: use crate::app::AppAire;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// La gestion Enter est faite dans vue.rs (quand un champ a le focus).

pub mod etat;
pub mod vue;

pub use etat::AppAire;

use eframe::egui;

impl eframe::App for AppAire {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ESC = effacer seulement les entrées (comme bouton "C").
        let esc = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if esc {
            self.clear_entrees();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}
