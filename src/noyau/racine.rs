// src/noyau/racine.rs
//
// Simplification de √n : seulement les carrés parfaits.
// - √(s²) -> (s, 1)
// - sinon  -> (1, n) inchangé (pas d’extraction partielle : √8 reste √8)

/// Racine entière par défaut : sqrt flottant tronqué, puis ajustement ±1
/// (f64 n’a que 53 bits de mantisse, les grands entiers dérivent).
fn racine_entiere(n: u128) -> u128 {
    let mut s = (n as f64).sqrt() as u128;

    // s ≤ 2^64 : seul s² peut dépasser u128, d’où checked_mul
    while s.checked_mul(s).map_or(true, |carre| carre > n) {
        s -= 1;
    }
    while (s + 1).checked_mul(s + 1).is_some_and(|carre| carre <= n) {
        s += 1;
    }
    s
}

pub fn est_carre_parfait(n: u128) -> bool {
    let s = racine_entiere(n);
    s * s == n
}

/// Renvoie (coefficient extrait, racine réduite).
pub fn simplifier_racine(racine: u128) -> (u128, u128) {
    if est_carre_parfait(racine) {
        (racine_entiere(racine), 1)
    } else {
        (1, racine)
    }
}
