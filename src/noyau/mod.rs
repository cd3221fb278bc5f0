//! Noyau : termes coefficient × √racine
//!
//! Organisation interne :
//! - terme.rs   : valeur Terme (coefficient, racine) + produit
//! - racine.rs  : √(carré parfait) -> entier
//! - lecture.rs : texte -> Terme ("3r2", "r9", "9,2")
//! - format.rs  : Terme -> texte canonique
//! - aire.rs    : 2(ab + bc + ac), regroupement par racine
//! - eval.rs    : pipeline complet + démarche
//! - erreur.rs  : ErreurNoyau

pub mod aire;
pub mod erreur;
pub mod eval;
pub mod format;
pub mod lecture;
pub mod racine;
pub mod terme;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale (utilisée par l’UI et la console)
pub use aire::OptionsAire;
pub use eval::{calculer_aire_avec, Demarche};
