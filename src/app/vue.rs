// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Trois champs a, b, c (l’indice affiche la valeur par défaut)
// - Clavier : Enter calcule (quand un champ a le focus)
// - Boutons : "=" calcule, C efface les entrées, AC remet tout à zéro
// - Démarche repliable : lecture, produits, regroupement

use eframe::egui;

use super::etat::{AppAire, Champ};
use crate::entrees::{DEFAUT_A, DEFAUT_B, DEFAUT_C};

impl AppAire {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Aire d’un pavé droit");
                ui.label("2(ab + bc + ac) — ex. : 5, 3r2 pour 3√2, r9 pour 3, 9,2 pour 9.2");
                ui.add_space(6.0);

                self.ui_entrees(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultat(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);
            });
    }

    fn ui_entrees(&mut self, ui: &mut egui::Ui) {
        let focus = self.focus.take();
        let mut enter = false;

        egui::Grid::new("aretes_aire")
            .num_columns(2)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for (champ, titre, defaut) in [
                    (Champ::A, "a :", DEFAUT_A),
                    (Champ::B, "b :", DEFAUT_B),
                    (Champ::C, "c :", DEFAUT_C),
                ] {
                    ui.label(titre);
                    let texte = match champ {
                        Champ::A => &mut self.a,
                        Champ::B => &mut self.b,
                        Champ::C => &mut self.c,
                    };
                    let resp = ui.add(
                        egui::TextEdit::singleline(texte)
                            .desired_width(220.0)
                            .hint_text(defaut)
                            .id_source(titre)
                            .code_editor(),
                    );
                    if focus == Some(champ) {
                        resp.request_focus();
                    }
                    // Enter seulement si le champ est focus (pas de déclenchement global).
                    if resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                        enter = true;
                    }
                    ui.end_row();
                }
            });

        ui.add_space(6.0);

        ui.horizontal(|ui| {
            let eq = ui.add_sized([64.0, 32.0], egui::Button::new("="));
            if eq.clicked() {
                enter = true;
            }

            ui.separator();

            // Contrat: C = entrées seulement ; AC = tout
            self.bouton_action(ui, "C", "Efface seulement les entrées", Action::ClearEntrees);
            self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);

            ui.separator();

            let mut replier = self.options.replier_racines;
            if ui
                .checkbox(&mut replier, "Replier √(s²)")
                .on_hover_text("r2·r2 = r4 devient 2 avant le regroupement")
                .changed()
            {
                self.set_replier_racines(replier);
            }
        });

        if enter {
            self.calculer();
        }

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_resultat(&mut self, ui: &mut egui::Ui) {
        ui.label("Aire totale :");
        Self::champ_monospace(ui, "aire_out", &self.aire, 2);
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(true)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Lecture", "demarche_lecture", &self.demarche.lecture);
                Self::champ_demarche(ui, "Produits", "demarche_produits", &self.demarche.produits);
                Self::champ_demarche(
                    ui,
                    "Regroupement",
                    "demarche_regroupement",
                    &self.demarche.regroupement,
                );
                Self::champ_demarche(ui, "Note", "demarche_note", &self.demarche.note);
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        Self::champ_monospace(ui, id, contenu, 1);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Affichage lecture seule “stable”, sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearEntrees => self.clear_entrees(),
                Action::ResetTotal => self.reset_total(),
            }
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntrees,
    ResetTotal,
}
