// src/noyau/aire.rs
//
// Aire totale d’un pavé droit : 2(ab + bc + ac)
// ---------------------------------------------
// 1) produits deux à deux (racines multipliées, pas re-simplifiées)
// 2) regroupement par racine (BTreeMap construit par fold => ordre croissant)
// 3) filtre epsilon, ×2, filtre epsilon
// 4) affichage : termes joints par " + ", "0" si rien ne reste

use std::collections::BTreeMap;

use num_traits::Zero;

use super::format::formater_terme;
use super::racine::simplifier_racine;
use super::terme::Terme;

/// En dessous (ou égal), un coefficient est du bruit flottant.
pub const EPSILON: f64 = 1e-10;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OptionsAire {
    /// Replie √(s²) -> s sur les racines des produits (r2*r2 = r4 -> 2).
    /// Désactivé par défaut : les racines produites restent des clefs opaques.
    pub replier_racines: bool,
}

/// ab, bc, ac (dans cet ordre).
pub fn produits(a: Terme, b: Terme, c: Terme) -> [Terme; 3] {
    [a.produit(b), b.produit(c), a.produit(c)]
}

fn replier(t: Terme) -> Terme {
    let (extrait, reduite) = simplifier_racine(t.racine);
    Terme::new(t.coefficient * extrait as f64, reduite)
}

/// Somme des coefficients par racine.
pub fn regrouper(termes: &[Terme]) -> BTreeMap<u128, f64> {
    termes.iter().fold(BTreeMap::new(), |mut acc, t| {
        *acc.entry(t.racine).or_insert_with(f64::zero) += t.coefficient;
        acc
    })
}

fn significatif(c: f64) -> bool {
    c.abs() > EPSILON
}

/// Termes de 2(ab + bc + ac) après regroupement et filtrage, racine croissante.
pub fn termes_aire_avec(a: Terme, b: Terme, c: Terme, options: &OptionsAire) -> Vec<Terme> {
    let mut p = produits(a, b, c);
    if options.replier_racines {
        p = p.map(replier);
    }
    log::debug!("produits ab, bc, ac = {:?}", p);

    regrouper(&p)
        .into_iter()
        .filter(|&(_, coef)| significatif(coef))
        .map(|(racine, coef)| Terme::new(coef, racine).echelle(2.0))
        .filter(|t| significatif(t.coefficient))
        .collect()
}

/// Affichage final d’une somme de termes ("0" si vide).
pub fn formater_somme(termes: &[Terme]) -> String {
    if termes.is_empty() {
        return "0".to_string();
    }
    termes
        .iter()
        .map(|t| formater_terme(t.coefficient, t.racine))
        .collect::<Vec<_>>()
        .join(" + ")
}

pub fn aire_surface_avec(a: Terme, b: Terme, c: Terme, options: &OptionsAire) -> String {
    formater_somme(&termes_aire_avec(a, b, c, options))
}

/// Options par défaut (racines des produits non repliées).
#[cfg(test)]
pub fn aire_surface(a: Terme, b: Terme, c: Terme) -> String {
    aire_surface_avec(a, b, c, &OptionsAire::default())
}
