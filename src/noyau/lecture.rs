// src/noyau/lecture.rs
//
// Lecture d’un terme (texte -> Terme)
// -----------------------------------
// Deux grammaires seulement :
// - notation racine : [coef entier] r <racine entière>   ex: "3r2", "r9"
// - nombre simple   : flottant (signe, décimales)        ex: "5", "-1.5", "9,2"
//
// La virgule décimale : seule la PREMIÈRE virgule devient un point
// ("9,2" -> "9.2") ; les suivantes restent et font échouer la lecture.
//
// Note : pas de coefficient décimal en notation racine ("1.5r2" est refusé),
// même si le formateur sait l’écrire.
//
// Chiffres ASCII seulement ; le nombre simple suit f64::from_str
// ("1_000" refusé, "1e3" accepté).

use regex::Regex;
use std::sync::OnceLock;

use super::erreur::ErreurNoyau;
use super::racine::simplifier_racine;
use super::terme::Terme;

static MOTIF_RACINE: OnceLock<Regex> = OnceLock::new();

fn motif_racine() -> &'static Regex {
    MOTIF_RACINE.get_or_init(|| {
        // Motif constant : compilation infaillible.
        Regex::new(r"^([0-9]+)?r([0-9]+)$").expect("motif racine")
    })
}

/// Remplace la première virgule par un point.
fn normalise_virgule(s: &str) -> String {
    s.replacen(',', ".", 1)
}

/// Lit un texte en Terme réduit.
pub fn lire_terme(texte: &str) -> Result<Terme, ErreurNoyau> {
    let s = normalise_virgule(texte.trim());

    if let Some(t) = lire_notation_racine(&s) {
        log::trace!("lecture {texte:?} -> notation racine {t:?}");
        return t.ok_or_else(|| ErreurNoyau::FormatInvalide(texte.to_string()));
    }

    match s.parse::<f64>() {
        Ok(v) => {
            log::trace!("lecture {texte:?} -> nombre simple {v}");
            Ok(Terme::simple(v))
        }
        Err(_) => {
            log::debug!("lecture {texte:?} : format invalide");
            Err(ErreurNoyau::FormatInvalide(texte.to_string()))
        }
    }
}

/// None : le motif ne correspond pas (on tentera le nombre simple).
/// Some(None) : le motif correspond mais la racine dépasse u64
/// (une racine lue tient dans u64, le produit de deux dans u128).
fn lire_notation_racine(s: &str) -> Option<Option<Terme>> {
    let caps = motif_racine().captures(s)?;

    // \d+ en f64 : toujours lisible (arrondi pour les très grands entiers).
    let coef = match caps.get(1) {
        Some(m) => m.as_str().parse::<f64>().ok()?,
        None => 1.0,
    };

    let racine = match caps[2].parse::<u64>() {
        Ok(r) => r,
        Err(_) => return Some(None),
    };

    let (extrait, reduite) = simplifier_racine(racine as u128);
    Some(Some(Terme::new(coef * extrait as f64, reduite)))
}
