// src/entrees.rs
//
// Valeurs par défaut des arêtes (console + UI).
// Une entrée vide (après trim) prend la valeur par défaut de son champ.

pub const DEFAUT_A: &str = "2";
pub const DEFAUT_B: &str = "r2";
pub const DEFAUT_C: &str = "3r9";

/// Texte à lire : l’entrée si non vide, sinon le défaut.
pub fn ou_defaut<'a>(entree: &'a str, defaut: &'a str) -> &'a str {
    let s = entree.trim();
    if s.is_empty() {
        defaut
    } else {
        s
    }
}
