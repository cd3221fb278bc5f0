// src/console.rs
//
// Session console (natif seulement) : trois questions a, b, c puis l’aire.
// - réponse vide         : défaut du champ (2, r2, 3r9)
// - fin d’entrée (EOF)   : les TROIS défauts, avec un message
// - format invalide      : "Erreur : format invalide : ..."
//
// Les erreurs d’E/S remontent à l’appelant (main) : “erreur inattendue”.

use std::io::{self, BufRead, Write};

use crate::entrees::{ou_defaut, DEFAUT_A, DEFAUT_B, DEFAUT_C};
use crate::noyau::{calculer_aire_avec, OptionsAire};

const INTRO: &str =
    "Entrez les dimensions a, b, c (ex. : 5, 3r2 pour 3√2, r9 pour 3, 9,2 pour 9.2) :";

/// Pose une question ; None si fin d’entrée.
fn demander<R: BufRead, W: Write>(
    entree: &mut R,
    sortie: &mut W,
    question: &str,
) -> io::Result<Option<String>> {
    write!(sortie, "{question}")?;
    sortie.flush()?;

    let mut ligne = String::new();
    if entree.read_line(&mut ligne)? == 0 {
        return Ok(None);
    }
    Ok(Some(ligne))
}

/// Lit a, b, c (défauts appliqués) ; None si l’entrée s’arrête en route.
fn lire_aretes<R: BufRead, W: Write>(
    entree: &mut R,
    sortie: &mut W,
) -> io::Result<Option<[String; 3]>> {
    let mut aretes: [String; 3] = Default::default();
    for (i, (question, defaut)) in [("a: ", DEFAUT_A), ("b: ", DEFAUT_B), ("c: ", DEFAUT_C)]
        .into_iter()
        .enumerate()
    {
        match demander(entree, sortie, question)? {
            Some(ligne) => aretes[i] = ou_defaut(&ligne, defaut).to_string(),
            None => return Ok(None),
        }
    }
    Ok(Some(aretes))
}

pub fn session<R: BufRead, W: Write>(
    entree: &mut R,
    sortie: &mut W,
    options: &OptionsAire,
) -> io::Result<()> {
    writeln!(sortie, "{INTRO}")?;

    let [a, b, c] = match lire_aretes(entree, sortie)? {
        Some(aretes) => aretes,
        None => {
            log::info!("fin d’entrée : valeurs par défaut");
            writeln!(sortie)?;
            writeln!(
                sortie,
                "Erreur : entrée interrompue (EOF). Valeurs par défaut utilisées \
                 (a={DEFAUT_A}, b={DEFAUT_B}, c={DEFAUT_C})."
            )?;
            [DEFAUT_A, DEFAUT_B, DEFAUT_C].map(String::from)
        }
    };

    match calculer_aire_avec(&a, &b, &c, options) {
        Ok(r) => writeln!(sortie, "Aire totale = {}", r.aire)?,
        Err(e) => {
            log::warn!("{e}");
            writeln!(sortie, "Erreur : {e}")?;
        }
    }
    Ok(())
}
