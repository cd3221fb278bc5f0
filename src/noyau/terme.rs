// src/noyau/terme.rs
//
// Terme : coefficient × √racine
// -----------------------------
// - racine == 1 : nombre “simple” (pas de radical)
// - valeur immuable (Copy) : chaque opération renvoie un nouveau Terme
// - racine en u128 : une racine lue tient dans u64, le produit de deux
//   racines lues tient donc toujours dans u128 (pas de dépassement)

use std::fmt;

use super::format::formater_terme;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Terme {
    pub coefficient: f64,
    pub racine: u128,
}

impl Terme {
    pub const fn new(coefficient: f64, racine: u128) -> Self {
        Self {
            coefficient,
            racine,
        }
    }

    /// Nombre sans radical.
    pub const fn simple(valeur: f64) -> Self {
        Self::new(valeur, 1)
    }

    /// Produit de deux termes : coefficients multipliés, racines multipliées
    /// telles quelles (aucune re-simplification ici).
    pub fn produit(self, autre: Terme) -> Terme {
        Terme {
            coefficient: self.coefficient * autre.coefficient,
            racine: self.racine * autre.racine,
        }
    }

    /// Même terme, coefficient multiplié par k.
    pub fn echelle(self, k: f64) -> Terme {
        Terme {
            coefficient: self.coefficient * k,
            ..self
        }
    }
}

impl fmt::Display for Terme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&formater_terme(self.coefficient, self.racine))
    }
}
