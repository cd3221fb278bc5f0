//! Noyau — calcul d’aire (pipeline réel)
//!
//! lecture a, b, c -> produits ab, bc, ac -> regroupement par racine -> ×2 -> affichage
//!
//! La démarche garde chaque étape en texte, pour le panneau “Démarche” de l’UI.

use super::aire::{aire_surface_avec, produits, regrouper, OptionsAire};
use super::erreur::ErreurNoyau;
use super::format::formater_terme;
use super::lecture::lire_terme;
use super::terme::Terme;

#[derive(Default, Clone, Debug, PartialEq)]
pub struct Demarche {
    pub lecture: String,
    pub produits: String,
    pub regroupement: String,
    pub note: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResultatAire {
    pub aire: String,
    pub demarche: Demarche,
}

/// Options par défaut.
#[cfg(test)]
pub fn calculer_aire(a: &str, b: &str, c: &str) -> Result<ResultatAire, ErreurNoyau> {
    calculer_aire_avec(a, b, c, &OptionsAire::default())
}

/// API publique : lit a, b, c puis calcule 2(ab + bc + ac).
///
/// La première entrée illisible (ordre a, b, c) arrête le calcul.
pub fn calculer_aire_avec(
    a: &str,
    b: &str,
    c: &str,
    options: &OptionsAire,
) -> Result<ResultatAire, ErreurNoyau> {
    // 1) Lecture
    let ta = lire_terme(a)?;
    let tb = lire_terme(b)?;
    let tc = lire_terme(c)?;

    // 2) Aire
    let aire = aire_surface_avec(ta, tb, tc, options);
    log::debug!("aire({a:?}, {b:?}, {c:?}) = {aire}");

    // 3) Démarche
    let [ab, bc, ac]: [Terme; 3] = produits(ta, tb, tc);
    let somme = regrouper(&[ab, bc, ac])
        .into_iter()
        .map(|(racine, coef)| formater_terme(coef, racine))
        .collect::<Vec<_>>()
        .join(" + ");

    let note = if options.replier_racines {
        "Racines des produits repliées (√(s²) -> s) avant regroupement."
    } else {
        "Racines des produits gardées telles quelles (r2·r2 = r4)."
    };

    let demarche = Demarche {
        lecture: format!("a = {ta}   b = {tb}   c = {tc}"),
        produits: format!("ab = {ab}   bc = {bc}   ac = {ac}"),
        regroupement: format!("2({somme}) = {aire}"),
        note: note.into(),
    };

    Ok(ResultatAire { aire, demarche })
}
