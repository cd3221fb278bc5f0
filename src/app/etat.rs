//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’état de la calculatrice d’aire (trois arêtes, résultat, erreur,
//! démarche) et offrir les actions simples (C/AC, calcul) sans logique d’affichage.
//!
//! Contrats :
//! - Une arête vide prend sa valeur par défaut (2, r2, 3r9), comme en console.
//! - Actions déterministes, sans effet de bord caché.

use crate::entrees::{ou_defaut, DEFAUT_A, DEFAUT_B, DEFAUT_C};
use crate::noyau::{calculer_aire_avec, Demarche, OptionsAire};

/// Champ à (re)focaliser après une action.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Champ {
    #[default]
    A,
    B,
    C,
}

#[derive(Clone, Debug, Default)]
pub struct AppAire {
    // --- entrées utilisateur ---
    pub a: String,
    pub b: String,
    pub c: String,

    // --- sorties ---
    pub aire: String,
    pub erreur: String,
    pub demarche: Demarche,

    // --- paramètres ---
    pub options: OptionsAire,

    // --- UX ---
    // vue.rs redonne le focus à ce champ au prochain affichage.
    pub focus: Option<Champ>,
}

impl AppAire {
    pub fn new(options: OptionsAire) -> Self {
        Self {
            options,
            focus: Some(Champ::A),
            ..Default::default()
        }
    }

    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrées + résultats ; options conservées).
    pub fn reset_total(&mut self) {
        let options = self.options;
        *self = Self::new(options);
    }

    /// C : effacer seulement les entrées (sans toucher aux résultats).
    pub fn clear_entrees(&mut self) {
        self.a.clear();
        self.b.clear();
        self.c.clear();
        self.focus = Some(Champ::A);
    }

    /// Utilitaire : placer une erreur.
    ///
    /// On CONSERVE `aire` (dernier résultat) pour ne pas “effacer l’écran” sur une faute,
    /// mais la démarche n’est plus fiable.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.demarche = Demarche::default();
    }

    pub fn set_resultat(&mut self, aire: impl Into<String>, demarche: Demarche) {
        self.erreur.clear();
        self.aire = aire.into();
        self.demarche = demarche;
    }

    /// Textes effectivement calculés (défauts appliqués).
    pub fn aretes_effectives(&self) -> [&str; 3] {
        [
            ou_defaut(&self.a, DEFAUT_A),
            ou_defaut(&self.b, DEFAUT_B),
            ou_defaut(&self.c, DEFAUT_C),
        ]
    }

    /// Case “Replier √(s²)” : un résultat déjà affiché est recalculé
    /// pour rester cohérent avec l’option.
    pub fn set_replier_racines(&mut self, actif: bool) {
        if self.options.replier_racines == actif {
            return;
        }
        self.options.replier_racines = actif;
        if !self.aire.is_empty() || !self.erreur.is_empty() {
            self.calculer();
        }
    }

    /// "=" : calcule l’aire via le noyau et dépose résultat ou erreur.
    pub fn calculer(&mut self) {
        let [a, b, c] = self.aretes_effectives();
        match calculer_aire_avec(a, b, c, &self.options) {
            Ok(r) => self.set_resultat(r.aire, r.demarche),
            Err(e) => {
                log::warn!("{e}");
                self.set_erreur(format!("Erreur : {e}"));
            }
        }
    }
}
