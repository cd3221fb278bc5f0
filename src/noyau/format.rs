// src/noyau/format.rs
//
// Affichage d’un terme (coefficient, racine) -> texte canonique
// - racine 1        : "5", "9.2", "0.3333"
// - coefficient 1   : "r2"
// - sinon           : "3r2", "1.5r2" (pas de séparateur)

use num_traits::Float;

/// Nombre maximal de décimales affichées pour un coefficient non entier.
pub const DECIMALES: usize = 4;

/// Le flottant représente-t-il un entier ? (inf/NaN : non)
pub fn est_entier<F: Float>(x: F) -> bool {
    x.is_finite() && x.fract().is_zero()
}

/// Coefficient seul : entier sans point, sinon au plus DECIMALES décimales,
/// zéros finaux et point final retirés.
pub fn formater_coefficient(coef: f64) -> String {
    // -0.0 + 0.0 == +0.0 : jamais de "-0" pour un zéro exact
    let coef = coef + 0.0;

    if est_entier(coef) {
        return format!("{coef:.0}");
    }

    let txt = format!("{coef:.prec$}", prec = DECIMALES);
    if !txt.contains('.') {
        // inf / NaN
        return txt;
    }
    txt.trim_end_matches('0').trim_end_matches('.').to_string()
}

pub fn formater_terme(coefficient: f64, racine: u128) -> String {
    if racine == 1 {
        return formater_coefficient(coefficient);
    }
    if coefficient == 1.0 {
        return format!("r{racine}");
    }
    format!("{}r{racine}", formater_coefficient(coefficient))
}
