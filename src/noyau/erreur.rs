// src/noyau/erreur.rs

use thiserror::Error;

/// Erreur du noyau : seule la lecture d’un terme peut échouer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErreurNoyau {
    /// Texte reçu tel quel (avant trim et normalisation de la virgule).
    #[error("format invalide : {0}")]
    FormatInvalide(String),
}
